//! Market data for flat Black-Scholes pricing.
//!
//! # Components
//!
//! - [`state`]: Market state, per-call overrides and resolved market points
//! - [`series`]: Time/value series used to calibrate spot and volatility
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::{MarketOverrides, MarketSeries, MarketState};
//!
//! let history = MarketSeries::new(
//!     vec![0.0, 1.0 / 252.0, 2.0 / 252.0],
//!     vec![100.0, 101.0, 99.5],
//! ).unwrap();
//!
//! let (_, spot) = history.latest();
//! let vol = history.realised_volatility(252.0).unwrap();
//!
//! let market = MarketState::builder()
//!     .maturity(1.0)
//!     .spot(spot)
//!     .vol(vol)
//!     .build()
//!     .unwrap();
//! let point = market.resolve(&MarketOverrides::new()).unwrap();
//! assert_eq!(point.spot, 99.5);
//! ```

pub mod series;
pub mod state;

pub use series::MarketSeries;
pub use state::{MarketOverrides, MarketPoint, MarketState, MarketStateBuilder, DEFAULT_VOL};
