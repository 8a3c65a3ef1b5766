//! Configuration management and validation.
//!
//! The output schema is an explicit value handed to the converter rather
//! than a literal buried in the entry point, so alternate column names can
//! be used and tested.

use crate::constants::{DEFAULT_HEADER, OUTPUT_COLUMNS};
use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Settings for a single conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Output column names, written as the first line of the table
    pub header: Vec<String>,

    /// Skip data lines that are empty after trimming instead of reporting them
    pub skip_blank_lines: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.iter().map(|s| s.to_string()).collect(),
            skip_blank_lines: false,
        }
    }
}

impl ConverterConfig {
    /// Replace the output header
    pub fn with_header<I, S>(mut self, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = header.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Check the header matches the shape of every output row
    pub fn validate(&self) -> Result<()> {
        if self.header.len() != OUTPUT_COLUMNS {
            return Err(ConvertError::configuration(format!(
                "Header must have {} columns, found {}",
                OUTPUT_COLUMNS,
                self.header.len()
            )));
        }

        let mut seen = HashSet::new();
        for column in &self.header {
            if column.trim().is_empty() {
                return Err(ConvertError::configuration(
                    "Header column names cannot be empty",
                ));
            }
            if column.contains(',') {
                return Err(ConvertError::configuration(format!(
                    "Header column '{}' cannot contain a comma",
                    column
                )));
            }
            if !seen.insert(column.as_str()) {
                return Err(ConvertError::configuration(format!(
                    "Duplicate header column '{}'",
                    column
                )));
            }
        }

        debug!("Validated header: {}", self.header.join(","));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header() {
        let config = ConverterConfig::default();
        assert_eq!(config.header.join(","), "Date,GameNo,A,B,PtsAB,X,Y,PtsXY");
        assert!(!config.skip_blank_lines);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_header_validates() {
        let config = ConverterConfig::default()
            .with_header(["day", "n", "p1", "p2", "s1", "p3", "p4", "s2"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wrong_column_count() {
        let config = ConverterConfig::default().with_header(["Date", "GameNo"]);
        match config.validate().unwrap_err() {
            ConvertError::Configuration { message } => {
                assert!(message.contains("8 columns"));
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_and_empty_columns() {
        let config =
            ConverterConfig::default().with_header(["A", "A", "B", "C", "D", "E", "F", "G"]);
        assert!(config.validate().is_err());

        let config =
            ConverterConfig::default().with_header(["A", " ", "B", "C", "D", "E", "F", "G"]);
        assert!(config.validate().is_err());
    }
}
