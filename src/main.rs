use anyhow::Context;
use clap::Parser;
use colored::*;
use scoresheet::cli::{self, Args};
use std::process;

fn main() {
    let args = Args::parse();

    cli::setup_logging(&args);

    let result = cli::run(&args).context("Conversion failed");

    match result {
        Ok(_conversion) => {
            // Table and diagnostics have already been written by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{} {:#}", "Error:".red().bold(), error);
            process::exit(1);
        }
    }
}
