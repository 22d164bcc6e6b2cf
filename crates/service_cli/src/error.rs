//! CLI error types.

use pricer_core::types::{PricingError, SeriesError};
use thiserror::Error;

/// Errors surfaced by the `pricer` binary.
///
/// A failing trade inside a book is *not* a `CliError`: it is reported
/// alongside the other results. These variants abort the command.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A command-line argument or book entry is invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration sources could not be merged or deserialised.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The merged configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading an input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The trade book is not valid TOML or does not match the schema.
    #[error("Cannot parse book: {0}")]
    Book(#[from] toml::de::Error),

    /// The market-data series could not be loaded or analysed.
    #[error("Market data error: {0}")]
    Series(#[from] SeriesError),

    /// Pricing failed outside of a per-trade context.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// JSON output could not be produced.
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
