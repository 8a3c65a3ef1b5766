//! Application constants for the score sheet converter
//!
//! Default output schema, separators, and fixed message text used by the
//! converter, report writer, and CLI.

// =============================================================================
// Output Schema
// =============================================================================

/// Default output header: date, sequence number, first pair, first score,
/// second pair, second score
pub const DEFAULT_HEADER: &[&str] = &["Date", "GameNo", "A", "B", "PtsAB", "X", "Y", "PtsXY"];

/// Number of columns every output row carries
pub const OUTPUT_COLUMNS: usize = 8;

// =============================================================================
// Input Layout
// =============================================================================

/// Separator between the cells of a data line
pub const CELL_SEPARATOR: char = ',';

/// Separator between the two identifiers of a pair cell
pub const PAIR_SEPARATOR: char = '/';

/// Cells expected on a data line: pair, score, pair, score
pub const DATA_CELLS: usize = 4;

/// Lines preceding the data rows (date line, ignored label line)
pub const PREAMBLE_LINES: usize = 2;

// =============================================================================
// Diagnostics
// =============================================================================

/// Banner written to stderr before the malformed row listing
pub const BAD_ROWS_BANNER: &str = "encountered bad rows";

// =============================================================================
// Logging
// =============================================================================

/// Log level used when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
