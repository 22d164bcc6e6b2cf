//! Fixed finite-difference bump sizes.
//!
//! | Constant | Value | Used by |
//! |----------|-------|---------|
//! | [`SPOT_BUMP_RELATIVE`] | 0.01 (1% of spot) | delta, gamma, vanna |
//! | [`FORWARD_BUMP_RELATIVE`] | 0.01 (1% of forward) | delta_fwd |
//! | [`VOL_BUMP`] | 0.01 (1 vol point) | vega, volga, vanna |
//! | [`RATE_BUMP`] | 0.01 | rho |
//! | [`YIELD_BUMP`] | 0.01 | rho_yield |
//! | [`THETA_BUMP`] | 1/365 (one calendar day) | theta |
//!
//! The sizes are constants rather than configuration so that the risk
//! numbers of every payoff model stay comparable with one another.

/// Relative spot bump: `dS = SPOT_BUMP_RELATIVE * S`.
pub const SPOT_BUMP_RELATIVE: f64 = 0.01;

/// Relative forward bump: `dF = FORWARD_BUMP_RELATIVE * F`.
pub const FORWARD_BUMP_RELATIVE: f64 = 0.01;

/// Absolute volatility bump.
pub const VOL_BUMP: f64 = 0.01;

/// Absolute rate bump.
pub const RATE_BUMP: f64 = 0.01;

/// Absolute yield bump.
pub const YIELD_BUMP: f64 = 0.01;

/// Valuation-time bump in years.
pub const THETA_BUMP: f64 = 1.0 / 365.0;
