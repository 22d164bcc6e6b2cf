//! European vanilla call and put under Black-Scholes.
//!
//! **Call**: FV = F·N(d₁) - K·N(d₂)
//! **Put**: FV = K·N(-d₂) - F·N(-d₁)

use pricer_core::types::error::ensure_finite;
use pricer_core::types::PricingError;

use super::ForwardPayoff;
use crate::analytical::{d1_d2, norm_cdf};

/// European call option.
///
/// # Examples
/// ```
/// use pricer_models::payoffs::{ForwardPayoff, VanillaCall};
///
/// let call = VanillaCall::new(100.0).unwrap();
/// let fv = call.forward_value(100.0, 0.2, 1.0).unwrap();
/// assert!(fv > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaCall {
    strike: f64,
}

impl VanillaCall {
    /// Creates a call with the given strike.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `strike` is not finite. A
    /// non-positive strike is accepted here and rejected as a domain error
    /// on evaluation.
    pub fn new(strike: f64) -> Result<Self, PricingError> {
        Ok(Self {
            strike: ensure_finite("strike", strike)?,
        })
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }
}

impl ForwardPayoff for VanillaCall {
    fn forward_value(&self, forward: f64, vol: f64, expiry: f64) -> Result<f64, PricingError> {
        let (d1, d2) = d1_d2(forward, self.strike, vol, expiry)?;
        Ok(forward * norm_cdf(d1) - self.strike * norm_cdf(d2))
    }

    fn name(&self) -> &'static str {
        "call"
    }
}

/// European put option.
///
/// # Examples
/// ```
/// use pricer_models::payoffs::{ForwardPayoff, VanillaPut};
///
/// let put = VanillaPut::new(100.0).unwrap();
/// let fv = put.forward_value(100.0, 0.2, 1.0).unwrap();
/// assert!(fv > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaPut {
    strike: f64,
}

impl VanillaPut {
    /// Creates a put with the given strike.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `strike` is not finite.
    pub fn new(strike: f64) -> Result<Self, PricingError> {
        Ok(Self {
            strike: ensure_finite("strike", strike)?,
        })
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }
}

impl ForwardPayoff for VanillaPut {
    fn forward_value(&self, forward: f64, vol: f64, expiry: f64) -> Result<f64, PricingError> {
        let (d1, d2) = d1_d2(forward, self.strike, vol, expiry)?;
        Ok(self.strike * norm_cdf(-d2) - forward * norm_cdf(-d1))
    }

    fn name(&self) -> &'static str {
        "put"
    }
}
