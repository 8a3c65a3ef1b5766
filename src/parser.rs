//! Data line parsing.
//!
//! Splits one score line into its pair and score cells and decomposes each
//! pair into two identifiers. Scores are passed through as text.

use crate::constants::{CELL_SEPARATOR, DATA_CELLS, PAIR_SEPARATOR};
use crate::models::{MalformedReason, MalformedRow, PairColumn, ParsedRow};

/// Parse a trimmed data line into a six-field row
///
/// Fails with the trimmed comma-split cells when the line does not have
/// exactly four cells or either pair cell is not two slash-separated names.
pub fn parse_row(line: &str) -> Result<ParsedRow, MalformedRow> {
    let cells: Vec<String> = line
        .split(CELL_SEPARATOR)
        .map(|cell| cell.trim().to_string())
        .collect();

    if cells.len() != DATA_CELLS {
        let found = cells.len();
        return Err(MalformedRow {
            cells,
            reason: MalformedReason::CellCount { found },
        });
    }

    let (a, b) = match split_pair(&cells[0]) {
        Some(pair) => pair,
        None => return Err(pair_error(cells, PairColumn::First)),
    };
    let (x, y) = match split_pair(&cells[2]) {
        Some(pair) => pair,
        None => return Err(pair_error(cells, PairColumn::Second)),
    };

    Ok(ParsedRow {
        a,
        b,
        pts_ab: cells[1].clone(),
        x,
        y,
        pts_xy: cells[3].clone(),
    })
}

/// Split "first/second" into exactly two identifiers
fn split_pair(cell: &str) -> Option<(String, String)> {
    let mut parts = cell.split(PAIR_SEPARATOR);
    let first = parts.next()?;
    let second = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first.to_string(), second.to_string()))
}

fn pair_error(cells: Vec<String>, column: PairColumn) -> MalformedRow {
    let index = match column {
        PairColumn::First => 0,
        PairColumn::Second => 2,
    };
    let cell = cells[index].clone();
    MalformedRow {
        cells,
        reason: MalformedReason::PairShape { column, cell },
    }
}
