//! Core data structures for score sheet conversion.
//!
//! Defines parsed and malformed rows, the conversion result, and the typed
//! game record read back from a normalized table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A well-formed data line: both pairs decomposed, scores kept as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub a: String,
    pub b: String,
    pub pts_ab: String,
    pub x: String,
    pub y: String,
    pub pts_xy: String,
}

impl ParsedRow {
    /// Fields in output order: a, b, pts_ab, x, y, pts_xy
    pub fn fields(&self) -> [&str; 6] {
        [
            &self.a,
            &self.b,
            &self.pts_ab,
            &self.x,
            &self.y,
            &self.pts_xy,
        ]
    }
}

/// Which pair cell failed to decompose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairColumn {
    First,
    Second,
}

impl fmt::Display for PairColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairColumn::First => write!(f, "first pair"),
            PairColumn::Second => write!(f, "second pair"),
        }
    }
}

/// Why a data line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Comma split did not give exactly four cells
    CellCount { found: usize },
    /// A pair cell did not split into exactly two identifiers
    PairShape { column: PairColumn, cell: String },
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::CellCount { found } => {
                write!(f, "expected 4 cells, found {}", found)
            }
            MalformedReason::PairShape { column, cell } => {
                write!(f, "{} '{}' is not two slash-separated names", column, cell)
            }
        }
    }
}

/// A rejected data line, kept as its trimmed comma-split cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    pub cells: Vec<String>,
    pub reason: MalformedReason,
}

/// Renders the cells as a bracketed list of quoted strings, e.g. `['bad', 'row']`
///
/// Cells holding a single quote and no double quote are wrapped in double
/// quotes instead, e.g. `["O'Neil"]`.
impl fmt::Display for MalformedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_quoted(f, cell)?;
        }
        write!(f, "]")
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, cell: &str) -> fmt::Result {
    let quote = if cell.contains('\'') && !cell.contains('"') {
        '"'
    } else {
        '\''
    };

    write!(f, "{}", quote)?;
    for ch in cell.chars() {
        if ch == '\\' || ch == quote {
            write!(f, "\\")?;
        }
        write!(f, "{}", ch)?;
    }
    write!(f, "{}", quote)
}

/// Outcome of converting one score sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Where the sheet came from, used in diagnostics
    pub source: PathBuf,
    /// First line of the sheet, verbatim
    pub date: String,
    pub header: Vec<String>,
    pub good_rows: Vec<ParsedRow>,
    pub bad_rows: Vec<MalformedRow>,
}

impl Conversion {
    pub fn has_bad_rows(&self) -> bool {
        !self.bad_rows.is_empty()
    }

    /// Output records: date, 1-based game number, then the six parsed fields
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.good_rows.iter().enumerate().map(|(i, row)| {
            let mut record = Vec::with_capacity(8);
            record.push(self.date.clone());
            record.push((i + 1).to_string());
            record.extend(row.fields().iter().map(|f| f.to_string()));
            record
        })
    }
}

/// One game from a normalized table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "GameNo")]
    pub game_no: u32,
    #[serde(rename = "A")]
    pub player_a: String,
    #[serde(rename = "B")]
    pub player_b: String,
    #[serde(rename = "PtsAB")]
    pub points_ab: u8,
    #[serde(rename = "X")]
    pub player_x: String,
    #[serde(rename = "Y")]
    pub player_y: String,
    #[serde(rename = "PtsXY")]
    pub points_xy: u8,
}

impl Game {
    /// Names of all four players, first pair then second pair
    pub fn players(&self) -> [&str; 4] {
        [
            &self.player_a,
            &self.player_b,
            &self.player_x,
            &self.player_y,
        ]
    }
}
