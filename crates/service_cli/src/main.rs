//! Pricer CLI - Command Line Operations for the Black-Scholes Risk Engine
//!
//! This is the operational entry point for the pricing library.
//!
//! # Commands
//!
//! - `pricer price --book <file>` - Price a book of trades with full Greeks
//! - `pricer calibrate --series <file>` - Derive spot and volatility from history
//! - `pricer check` - Print the resolved configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires configuration, logging
//! and I/O around `pricer_core` and `pricer_models`.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod book;
mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{CliConfig, LogLevel, OutputFormat};

/// Black-Scholes risk engine CLI
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pricer.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a book of trades
    Price {
        /// Path to the trade book (TOML)
        #[arg(short, long)]
        book: PathBuf,

        /// Output format (overrides configuration)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Derive spot and volatility from a time/value series
    Calibrate {
        /// Path to the series (CSV with `time,value` header)
        #[arg(short, long)]
        series: PathBuf,

        /// Observations per year (overrides configuration)
        #[arg(short, long)]
        periods_per_year: Option<f64>,

        /// Output format (overrides configuration)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check configuration
    Check {
        /// Output format (overrides configuration)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

/// Initialise tracing on stderr; `RUST_LOG` wins over the configured level.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Tracing starts before the configuration is known so that a bad
    // configuration is reported like any other error.
    let config = CliConfig::load(&cli.config);
    let level = match &config {
        _ if cli.verbose => LogLevel::Debug,
        Ok(config) => config.log_level,
        Err(_) => LogLevel::default(),
    };
    init_tracing(level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match config.and_then(|config| run(cli.command, &config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &CliConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match command {
        Commands::Price { book, format } => commands::price::run(
            &book,
            format.unwrap_or(config.output_format),
            &mut stdout,
        ),
        Commands::Calibrate {
            series,
            periods_per_year,
            format,
        } => commands::calibrate::run(
            &series,
            periods_per_year.unwrap_or(config.periods_per_year),
            format.unwrap_or(config.output_format),
            &mut stdout,
        ),
        Commands::Check { format } => commands::check::run(
            config,
            format.unwrap_or(config.output_format),
            &mut stdout,
        ),
    }
}
