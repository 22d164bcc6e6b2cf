//! Finite-difference risk engine.
//!
//! [`Pricer`] combines a [`pricer_core::market_data::MarketState`] with a
//! [`crate::payoffs::ForwardPayoff`] and derives present value and every
//! sensitivity from the payoff's forward value alone. All Greeks are
//! bump-and-revalue on [`Pricer::present_value`] with the fixed sizes in
//! [`bumps`].

pub mod bumps;
mod pricer;

pub use pricer::Pricer;
