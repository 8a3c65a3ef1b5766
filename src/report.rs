//! Table and diagnostic output.
//!
//! The table goes through `csv::Writer` with quoting disabled so each line is
//! exactly the comma join of its fields. Callers pass an in-memory buffer
//! when they need the table to appear all at once.

use crate::constants::BAD_ROWS_BANNER;
use crate::error::{ConvertError, Result};
use crate::models::Conversion;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;
use tracing::debug;

/// Write the header and one line per well-formed row
pub fn write_table<W: Write>(conversion: &Conversion, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let source = &conversion.source;

    csv_writer
        .write_record(&conversion.header)
        .map_err(|e| ConvertError::csv(source, e))?;

    for record in conversion.records() {
        csv_writer
            .write_record(&record)
            .map_err(|e| ConvertError::csv(source, e))?;
    }

    csv_writer.flush().map_err(|e| ConvertError::Io {
        path: source.clone(),
        source: e,
    })?;

    debug!(
        "Wrote table with {} rows for {}",
        conversion.good_rows.len(),
        source.display()
    );
    Ok(())
}

/// Write the malformed row listing; writes nothing when every row parsed
pub fn write_diagnostics<W: Write>(conversion: &Conversion, mut writer: W) -> Result<()> {
    if !conversion.has_bad_rows() {
        return Ok(());
    }

    let io_err = |source| ConvertError::Io {
        path: conversion.source.clone(),
        source,
    };

    writeln!(
        writer,
        "{}: {}",
        BAD_ROWS_BANNER,
        conversion.source.display()
    )
    .map_err(io_err)?;

    for bad in &conversion.bad_rows {
        writeln!(writer, "{}", bad).map_err(io_err)?;
    }

    writer.flush().map_err(io_err)
}

/// Render the table into a string
pub fn table_to_string(conversion: &Conversion) -> Result<String> {
    let mut buffer = Vec::new();
    write_table(conversion, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ConvertError::Io {
        path: conversion.source.clone(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::Converter;
    use crate::config::ConverterConfig;
    use std::path::Path;

    fn convert(text: &str) -> Conversion {
        Converter::default()
            .convert_str(Path::new("scores/2024-01-05.txt"), text)
            .unwrap()
    }

    fn diagnostics(conversion: &Conversion) -> String {
        let mut buffer = Vec::new();
        write_diagnostics(conversion, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_single_row_table() {
        let conversion = convert("2024-01-05\nignored\nA/B,10,X/Y,5");
        assert_eq!(
            table_to_string(&conversion).unwrap(),
            "Date,GameNo,A,B,PtsAB,X,Y,PtsXY\n2024-01-05,1,A,B,10,X,Y,5\n"
        );
        assert_eq!(diagnostics(&conversion), "");
    }

    #[test]
    fn test_header_only_when_no_rows() {
        let conversion = convert("2024-01-05\nignored\n");
        assert_eq!(
            table_to_string(&conversion).unwrap(),
            "Date,GameNo,A,B,PtsAB,X,Y,PtsXY\n"
        );
        assert_eq!(diagnostics(&conversion), "");
    }

    #[test]
    fn test_bad_rows_listed() {
        let conversion = convert("2024-01-05\nignored\nbad,row\nA-B,10,X/Y,5\n");
        assert_eq!(
            table_to_string(&conversion).unwrap(),
            "Date,GameNo,A,B,PtsAB,X,Y,PtsXY\n"
        );
        assert_eq!(
            diagnostics(&conversion),
            "encountered bad rows: scores/2024-01-05.txt\n\
             ['bad', 'row']\n\
             ['A-B', '10', 'X/Y', '5']\n"
        );
    }

    #[test]
    fn test_game_numbers_skip_bad_rows() {
        let conversion = convert("d\nh\nA/B,1,C/D,2\nnope\nE/F,3,G/H,4\n");
        let table = table_to_string(&conversion).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[1], "d,1,A,B,1,C,D,2");
        assert_eq!(lines[2], "d,2,E,F,3,G,H,4");
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let conversion = convert("d\nh\n\"Ann\"/Bo,1,C/D,2\n");
        let table = table_to_string(&conversion).unwrap();
        assert!(table.ends_with("d,1,\"Ann\",Bo,1,C,D,2\n"));
    }

    #[test]
    fn test_custom_header() {
        let config = ConverterConfig::default()
            .with_header(["day", "n", "p1", "p2", "s1", "p3", "p4", "s2"]);
        let conversion = Converter::new(config)
            .unwrap()
            .convert_str(Path::new("s.txt"), "d\nh\n")
            .unwrap();
        assert_eq!(
            table_to_string(&conversion).unwrap(),
            "day,n,p1,p2,s1,p3,p4,s2\n"
        );
    }
}
