//! Command-line interface components.

use crate::aliases::AliasTable;
use crate::config::ConverterConfig;
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::converter::Converter;
use crate::error::{ConvertError, Result};
use crate::models::Conversion;
use crate::report::{write_diagnostics, write_table};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "scoresheet")]
#[command(about = "Convert a doubles score sheet into a normalized CSV table")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Score sheet: date line, label line, then `A/B,pts,X/Y,pts` rows
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Override the output header (exactly 8 comma-separated column names)
    #[arg(long, value_name = "COLS", value_delimiter = ',')]
    pub header: Option<Vec<String>>,

    /// Directory of alias files; each file stem is a canonical player name
    /// and each non-blank line an alias for it
    #[arg(long, value_name = "DIR")]
    pub aliases: Option<PathBuf>,

    /// Skip blank data lines instead of reporting them as bad rows
    #[arg(long)]
    pub skip_blank_lines: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Log level selected by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Build the converter configuration from the arguments
    pub fn to_config(&self) -> ConverterConfig {
        let config = ConverterConfig::default().with_skip_blank_lines(self.skip_blank_lines);
        match &self.header {
            Some(header) => config.with_header(header.iter().map(|c| c.trim().to_string())),
            None => config,
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scoresheet={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Convert the input and write the table to stdout, diagnostics to stderr
///
/// The table is rendered into memory first so a failure never leaves a
/// partial table on stdout.
pub fn run(args: &Args) -> Result<Conversion> {
    debug!("Command line arguments: {:?}", args);

    let mut converter = Converter::new(args.to_config())?;
    if let Some(dir) = &args.aliases {
        converter = converter.with_aliases(AliasTable::load_dir(dir)?);
    }
    let conversion = converter.convert_file(&args.input)?;

    let mut table = Vec::new();
    write_table(&conversion, &mut table)?;

    write_diagnostics(&conversion, io::stderr().lock())?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&table)
        .and_then(|_| stdout.flush())
        .map_err(|source| ConvertError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })?;

    Ok(conversion)
}
