//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod normalize;
mod output;
mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, OutputFormat, MAX_PRECISION};

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// domgeom - Validate DOMMatrixInit records and parse CSS transform lists
#[derive(Parser)]
#[command(name = "domgeom")]
#[command(about = "domgeom - Validate DOMMatrixInit records and parse CSS transform lists")]
#[command(version)]
pub struct Cli {
    /// Path to a domgeom.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Single-line JSON output
    #[arg(long, global = true)]
    pub compact: bool,

    /// Decimal places for text output (0-17)
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u8).range(0..=MAX_PRECISION as i64)
    )]
    pub precision: Option<u8>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a CSS transform list into unit-normalized function calls
    Parse {
        /// Transform list, e.g. "translateX(1in) rotate(45deg)"
        transform_list: String,
    },

    /// Validate and fix up a DOMMatrixInit JSON object
    Normalize {
        /// Init record as JSON (reads stdin when neither this nor --file is given)
        json: Option<String>,

        /// Read the init record from a file
        #[arg(short, long, conflicts_with = "json")]
        file: Option<PathBuf>,

        /// Print the 6 or 16 matrix values instead of the full record
        #[arg(long)]
        array: bool,

        /// Strict mode: treat ignored keys as errors
        #[arg(long)]
        strict: bool,
    },

    /// Convert a single length or angle to px or deg
    Convert {
        /// Dimension such as "2.54cm" or "0.25turn"
        value: String,
    },
}

/// Main CLI entry point
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let strict = match &cli.command {
        Commands::Normalize { strict, .. } => *strict,
        _ => false,
    };
    let overrides = CliOverrides {
        format: cli.format,
        pretty: cli.compact.then_some(false),
        precision: cli.precision.map(usize::from),
        strict: strict.then_some(true),
    };
    merge_cli_overrides(&mut config, &overrides);

    match cli.command {
        Commands::Parse { transform_list } => parse::run_parse(&transform_list, &config.output),
        Commands::Normalize { json, file, array, .. } => {
            normalize::run_normalize(json.as_deref(), file.as_deref(), array, &config)
        }
        Commands::Convert { value } => parse::run_convert(&value, &config.output),
    }
}
