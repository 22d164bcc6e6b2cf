//! Check command implementation
//!
//! Prints the resolved configuration and the available payoff models.

use std::io::Write;

use serde::Serialize;
use tracing::info;

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Payoff model tags accepted in trade books.
pub const MODEL_TAGS: [&str; 8] = [
    "zero_coupon_bond",
    "forward",
    "call",
    "put",
    "digital_call",
    "digital_put",
    "reverse_digital_call",
    "reverse_digital_put",
];

#[derive(Serialize)]
struct CheckReport<'a> {
    version: &'static str,
    config: &'a CliConfig,
    models: &'static [&'static str],
}

/// Run the check command
pub fn run(config: &CliConfig, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    info!("Checking configuration...");

    let report = CheckReport {
        version: env!("CARGO_PKG_VERSION"),
        config,
        models: &MODEL_TAGS,
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "pricer {}", report.version)?;
            writeln!(out, "  log_level:        {}", config.log_level)?;
            writeln!(out, "  output_format:    {:?}", config.output_format)?;
            writeln!(out, "  periods_per_year: {}", config.periods_per_year)?;
            writeln!(out, "  models:           {}", MODEL_TAGS.join(", "))?;
        }
    }

    info!("Configuration OK");
    Ok(())
}
