//! # pricer_core: Foundation for the Black-Scholes Risk Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Error types: `PricingError`, `ErrorKind`, `SeriesError` (`types::error`)
//! - Market state with per-call overrides (`market_data::state`)
//! - Time/value series for calibration input (`market_data::series`)
//! - Standard normal distribution (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: Error function behind the normal CDF
//! - chrono: Date parsing for series input
//! - csv: Series input
//! - thiserror: Error derivation
//! - serde: Configuration-driven market state
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::{MarketOverrides, MarketState};
//! use pricer_core::math::distributions::norm_cdf;
//!
//! let market = MarketState::builder()
//!     .maturity(1.0)
//!     .spot(100.0)
//!     .rate(0.05)
//!     .vol(0.2)
//!     .build()
//!     .unwrap();
//!
//! let bumped = market.resolve(&MarketOverrides::new().with_vol(0.21)).unwrap();
//! assert_eq!(bumped.vol, 0.21);
//!
//! # assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
