//! # Pricer Models (L2: Business Logic)
//!
//! Payoff models and the finite-difference risk engine.
//!
//! This crate provides:
//! - Black-Scholes `d1`/`d2` and the normal distribution re-exports
//! - The [`payoffs::ForwardPayoff`] trait and its models (forward, vanilla,
//!   digital and reverse-digital calls and puts, unit zero-coupon bond)
//! - [`engine::Pricer`], which turns any payoff into present value and a
//!   fixed catalogue of bump-and-revalue Greeks
//! - [`greeks::GreeksReport`] for the full risk of one trade
//!
//! ## Design Principles
//!
//! - **Composition over inheritance**: a payoff supplies one function, the
//!   engine supplies everything else
//! - **Enum-based model selection** ([`payoffs::PayoffModel`]) for static
//!   dispatch from configuration
//! - **Explicit overrides**: every call resolves a full market point, so
//!   bumping never mutates shared state
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::{MarketOverrides, MarketState};
//! use pricer_models::engine::Pricer;
//! use pricer_models::payoffs::{DigitalCall, DigitalPut};
//!
//! let market = MarketState::builder()
//!     .maturity(1.0)
//!     .rate(0.05)
//!     .vol(0.2)
//!     .spot(100.0)
//!     .build()
//!     .unwrap();
//! let none = MarketOverrides::default();
//!
//! let call = Pricer::new(market, DigitalCall::new(100.0).unwrap());
//! let put = Pricer::new(market, DigitalPut::new(100.0).unwrap());
//!
//! let total = call.present_value(&none).unwrap() + put.present_value(&none).unwrap();
//! assert!((total - call.discount_factor(&none).unwrap()).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod engine;
pub mod greeks;
pub mod payoffs;
