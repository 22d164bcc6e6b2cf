//! Standard normal distribution functions.
//!
//! This module provides `norm_cdf`, the cumulative distribution function.
//!
//! The error function comes from `statrs`; the pricing code consumes these
//! as pure `f64 -> f64` functions and has no opinion on the algorithm.

use statrs::function::erf::erfc;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// The complementary form keeps full relative precision in the lower tail,
/// and Φ(x) + Φ(-x) = 1 holds to machine precision, which the put-call and
/// digital parities rely on.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}
