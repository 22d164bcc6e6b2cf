//! Trade book loading and pricing.
//!
//! A book is a TOML file with an optional shared `[market]` table and a list
//! of `[[trades]]`:
//!
//! ```toml
//! [market]
//! maturity = 1.0
//! rate = 0.05
//! vol = 0.2
//! spot = 100.0
//!
//! [[trades]]
//! id = "atm-call"
//! model = { type = "call", strike = 100.0 }
//!
//! [[trades]]
//! id = "digital-up"
//! model = { type = "digital_call", strike = 110.0 }
//! scenario = { spot = 105.0 }
//! ```
//!
//! A trade-level `market` table replaces the shared one entirely; a
//! `scenario` table overrides individual fields for that trade only.

use std::collections::HashSet;
use std::path::Path;

use pricer_core::market_data::{MarketOverrides, MarketStateBuilder};
use pricer_core::types::PricingError;
use pricer_models::engine::Pricer;
use pricer_models::greeks::GreeksReport;
use pricer_models::payoffs::{ForwardPayoff, PayoffModel};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{CliError, Result};

/// A book of trades.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    /// Market shared by trades without their own
    #[serde(default)]
    pub market: Option<MarketStateBuilder>,
    /// Trades in input order
    #[serde(default)]
    pub trades: Vec<TradeSpec>,
}

/// One trade of a book.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TradeSpec {
    /// Unique trade identifier
    pub id: String,
    /// Payoff model and strike
    pub model: PayoffModel,
    /// Trade-specific market, replacing the book market
    #[serde(default)]
    pub market: Option<MarketStateBuilder>,
    /// Per-trade overrides applied at pricing time
    #[serde(default)]
    pub scenario: MarketOverrides,
}

/// Pricing outcome for one trade.
#[derive(Debug, Clone, Serialize)]
pub struct TradeResult {
    /// Trade identifier
    pub id: String,
    /// Payoff model name
    pub model: &'static str,
    /// Full risk report, when pricing succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeks: Option<GreeksReport>,
    /// Failure description, when pricing failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Book {
    /// Parse a book from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let book: Book = toml::from_str(content)?;
        book.validate()?;
        Ok(book)
    }

    /// Load a book from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    /// Reject duplicate trade identifiers.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for trade in &self.trades {
            if !seen.insert(trade.id.as_str()) {
                return Err(CliError::InvalidArgument(format!(
                    "Duplicate trade id: {}",
                    trade.id
                )));
            }
        }
        Ok(())
    }

    /// Price every trade in parallel, preserving input order.
    ///
    /// A failing trade yields a result carrying its error; the other trades
    /// are unaffected.
    pub fn price_all(&self) -> Vec<TradeResult> {
        self.trades
            .par_iter()
            .map(|trade| {
                let outcome = self.price_trade(trade);
                if let Err(err) = &outcome {
                    warn!(trade = %trade.id, error = %err, "trade failed");
                }
                TradeResult {
                    id: trade.id.clone(),
                    model: trade.model.name(),
                    greeks: outcome.as_ref().ok().copied(),
                    error: outcome.err().map(|err| err.to_string()),
                }
            })
            .collect()
    }

    /// Price a single trade.
    pub fn price_trade(&self, trade: &TradeSpec) -> std::result::Result<GreeksReport, PricingError> {
        let builder = trade
            .market
            .or(self.market)
            .ok_or(PricingError::MissingParameter { name: "market" })?;
        let pricer = Pricer::new(builder.build()?, trade.model);
        debug!(trade = %trade.id, model = trade.model.name(), "pricing");
        pricer.greeks(&trade.scenario)
    }
}
