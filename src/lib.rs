//! Score Sheet Converter Library
//!
//! Converts single-date doubles score sheets into a normalized CSV table.
//!
//! A sheet is a date line, an ignored label line, and data rows of the form
//! `A/B,pts,X/Y,pts`. This library provides tools for:
//! - Parsing data rows into pair members and score text
//! - Partitioning a sheet into well-formed and malformed rows
//! - Writing the normalized table and the malformed row listing
//! - Reading a normalized table back as typed games
//! - Mapping player aliases to canonical names

pub mod aliases;
pub mod cli;
pub mod config;
pub mod constants;
pub mod converter;
pub mod error;
pub mod games;
pub mod models;
pub mod parser;
pub mod report;

pub use aliases::AliasTable;
pub use config::ConverterConfig;
pub use converter::Converter;
pub use error::{ConvertError, Result};
pub use models::{Conversion, Game, MalformedReason, MalformedRow, ParsedRow};
pub use parser::parse_row;
