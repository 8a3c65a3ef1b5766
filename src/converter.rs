//! Score sheet conversion.
//!
//! Reads a whole sheet, takes the date from the first line, drops the label
//! line, and partitions the remaining lines into well-formed and malformed
//! rows. Writing is left to [`crate::report`] so nothing reaches the output
//! streams until the entire sheet has parsed.

use crate::aliases::AliasTable;
use crate::config::ConverterConfig;
use crate::constants::PREAMBLE_LINES;
use crate::error::{ConvertError, Result};
use crate::models::Conversion;
use crate::parser::parse_row;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Converts score sheets using a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
    aliases: AliasTable,
}

impl Converter {
    /// Create a converter, rejecting an invalid configuration
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            aliases: AliasTable::default(),
        })
    }

    /// Replace player aliases with canonical names in every well-formed row
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Read and convert the sheet at `path`
    pub fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let text = fs::read_to_string(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Read {} bytes from {}", text.len(), path.display());
        self.convert_str(path, &text)
    }

    /// Convert sheet text already in memory; `source` labels diagnostics
    pub fn convert_str(&self, source: &Path, text: &str) -> Result<Conversion> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();

        if lines.len() < PREAMBLE_LINES {
            return Err(ConvertError::MissingHeader {
                path: source.to_path_buf(),
            });
        }

        let date = lines[0].to_string();
        let mut good_rows = Vec::new();
        let mut bad_rows = Vec::new();

        for (offset, line) in lines[PREAMBLE_LINES..].iter().enumerate() {
            let line_no = offset + PREAMBLE_LINES + 1;

            if line.is_empty() && self.config.skip_blank_lines {
                debug!("Skipping blank line {}", line_no);
                continue;
            }

            match parse_row(line) {
                Ok(mut row) => {
                    self.aliases.normalize_row(&mut row);
                    good_rows.push(row);
                }
                Err(bad) => {
                    info!("Line {} rejected: {}", line_no, bad.reason);
                    bad_rows.push(bad);
                }
            }
        }

        info!(
            "Converted {}: date={}, {} good rows, {} bad rows",
            source.display(),
            date,
            good_rows.len(),
            bad_rows.len()
        );

        Ok(Conversion {
            source: source.to_path_buf(),
            date,
            header: self.config.header.clone(),
            good_rows,
            bad_rows,
        })
    }
}
