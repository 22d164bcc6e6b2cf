//! Black-Scholes d1/d2 terms shared by the lognormal payoff family.
//!
//! ## Mathematical Formulas
//!
//! - d₁ = (ln(F/K) + σ²τ/2) / (σ√τ)
//! - d₂ = (ln(F/K) - σ²τ/2) / (σ√τ)
//!
//! Where F is the forward, K the strike, σ the volatility and τ = T - t the
//! time to maturity. Both terms are computed together because every
//! Black-Scholes payoff needs both and they share ln(F/K) and σ²τ.

use pricer_core::types::PricingError;

/// Computes `(d1, d2)` in the forward measure.
///
/// # Arguments
/// * `forward` - Forward price F (must be positive)
/// * `strike` - Strike price K (must be positive)
/// * `vol` - Volatility σ (must be positive)
/// * `expiry` - Time to maturity τ = T - t in years (must be positive)
///
/// # Errors
/// - `PricingError::NonPositiveTimeToMaturity` if τ <= 0
/// - `PricingError::NonPositiveVolatility` if σ <= 0
/// - `PricingError::NonPositiveLogArgument` if F <= 0 or K <= 0
///
/// # Examples
/// ```
/// use pricer_models::analytical::d1_d2;
///
/// // ATM forward: d1 = σ√τ/2, d2 = -σ√τ/2
/// let (d1, d2) = d1_d2(100.0, 100.0, 0.2, 1.0).unwrap();
/// assert!((d1 - 0.1).abs() < 1e-12);
/// assert!((d2 + 0.1).abs() < 1e-12);
///
/// assert!(d1_d2(100.0, 100.0, 0.2, 0.0).is_err());
/// ```
pub fn d1_d2(forward: f64, strike: f64, vol: f64, expiry: f64) -> Result<(f64, f64), PricingError> {
    if expiry <= 0.0 {
        return Err(PricingError::NonPositiveTimeToMaturity { expiry });
    }
    if vol <= 0.0 {
        return Err(PricingError::NonPositiveVolatility { vol });
    }
    if forward <= 0.0 || strike <= 0.0 {
        return Err(PricingError::NonPositiveLogArgument { forward, strike });
    }

    let log_moneyness = (forward / strike).ln();
    let variance = vol * vol * expiry;
    let std_dev = vol * expiry.sqrt();

    let d1 = (log_moneyness + 0.5 * variance) / std_dev;
    let d2 = (log_moneyness - 0.5 * variance) / std_dev;

    Ok((d1, d2))
}
