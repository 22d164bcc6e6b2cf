//! Closed-form building blocks for the Black-Scholes payoff family.
//!
//! This module provides:
//! - `d1_d2`: the standardised log-moneyness pair used by every lognormal payoff
//! - a re-export of the standard normal CDF from `pricer_core`

pub mod black_scholes;

pub use black_scholes::d1_d2;
pub use pricer_core::math::distributions::norm_cdf;
