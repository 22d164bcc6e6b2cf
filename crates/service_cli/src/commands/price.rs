//! Price command implementation
//!
//! Prices a book of trades with the generic risk engine.

use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::book::{Book, TradeResult};
use crate::config::OutputFormat;
use crate::Result;

/// Run the price command
pub fn run(book_path: &Path, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    info!("Starting pricing...");
    info!("  Book: {}", book_path.display());
    info!("  Output format: {:?}", format);

    let book = Book::load(book_path)?;
    let results = book.price_all();

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    if failed > 0 {
        warn!("{} of {} trades failed", failed, results.len());
    }

    render(&results, format, out)?;

    info!("Pricing complete: {} trades", results.len());
    Ok(())
}

/// Write pricing results in the requested format.
pub fn render(results: &[TradeResult], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            for result in results {
                writeln!(out, "Trade {} ({})", result.id, result.model)?;
                match (&result.greeks, &result.error) {
                    (Some(greeks), _) => {
                        for (name, value) in greeks.entries() {
                            match value {
                                Some(value) => writeln!(out, "  {:<16} {:>16.8}", name, value)?,
                                None => writeln!(out, "  {:<16} {:>16}", name, "n/a")?,
                            }
                        }
                    }
                    (None, Some(error)) => writeln!(out, "  FAILED: {}", error)?,
                    (None, None) => writeln!(out, "  (no result)")?,
                }
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
