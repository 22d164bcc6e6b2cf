//! Digital (cash-or-nothing) and reverse-digital (asset-or-nothing) payoffs.
//!
//! | Payoff | pays | FV |
//! |---|---|---|
//! | `DigitalCall` | 1 numeraire if S_T > K | N(d₂) |
//! | `DigitalPut` | 1 numeraire if S_T < K | 1 - N(d₂) |
//! | `ReverseDigitalCall` | 1 asset if S_T > K | F·N(d₁) |
//! | `ReverseDigitalPut` | 1 asset if S_T < K | F·(1 - N(d₁)) |
//!
//! A vanilla call decomposes as `ReverseDigitalCall - K · DigitalCall`.

use pricer_core::types::error::ensure_finite;
use pricer_core::types::PricingError;

use super::ForwardPayoff;
use crate::analytical::{d1_d2, norm_cdf};

/// Cash-or-nothing call: pays one unit of the numeraire if the underlying
/// finishes above the strike.
///
/// # Examples
/// ```
/// use pricer_models::payoffs::{DigitalCall, ForwardPayoff};
///
/// let digital = DigitalCall::new(100.0).unwrap();
/// let fv = digital.forward_value(100.0, 0.2, 1.0).unwrap();
/// assert!(fv > 0.0 && fv < 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitalCall {
    strike: f64,
}

impl DigitalCall {
    /// Creates a digital call.
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

impl ForwardPayoff for DigitalCall {
    fn forward_value(&self, forward: f64, vol: f64, expiry: f64) -> Result<f64, PricingError> {
        let (_, d2) = d1_d2(forward, self.strike, vol, expiry)?;
        Ok(norm_cdf(d2))
    }

    fn name(&self) -> &'static str {
        "digital_call"
    }
}

/// Cash-or-nothing put: pays one unit of the numeraire if the underlying
/// finishes below the strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitalPut {
    strike: f64,
}

impl DigitalPut {
    /// Creates a digital put.
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

impl ForwardPayoff for DigitalPut {
    fn forward_value(&self, forward: f64, vol: f64, expiry: f64) -> Result<f64, PricingError> {
        let (_, d2) = d1_d2(forward, self.strike, vol, expiry)?;
        Ok(1.0 - norm_cdf(d2))
    }

    fn name(&self) -> &'static str {
        "digital_put"
    }
}

/// Asset-or-nothing call: pays one unit of the underlying if it finishes
/// above the strike.
///
/// # Examples
/// ```
/// use pricer_models::payoffs::{ForwardPayoff, ReverseDigitalCall};
///
/// let rd = ReverseDigitalCall::new(100.0).unwrap();
/// let fv = rd.forward_value(100.0, 0.2, 1.0).unwrap();
/// assert!(fv > 50.0 && fv < 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverseDigitalCall {
    strike: f64,
}

impl ReverseDigitalCall {
    /// Creates a reverse-digital call.
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

impl ForwardPayoff for ReverseDigitalCall {
    fn forward_value(&self, forward: f64, vol: f64, expiry: f64) -> Result<f64, PricingError> {
        let (d1, _) = d1_d2(forward, self.strike, vol, expiry)?;
        Ok(forward * norm_cdf(d1))
    }

    fn name(&self) -> &'static str {
        "reverse_digital_call"
    }
}

/// Asset-or-nothing put: pays one unit of the underlying if it finishes
/// below the strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverseDigitalPut {
    strike: f64,
}

impl ReverseDigitalPut {
    /// Creates a reverse-digital put.
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

impl ForwardPayoff for ReverseDigitalPut {
    fn forward_value(&self, forward: f64, vol: f64, expiry: f64) -> Result<f64, PricingError> {
        let (d1, _) = d1_d2(forward, self.strike, vol, expiry)?;
        Ok(forward * (1.0 - norm_cdf(d1)))
    }

    fn name(&self) -> &'static str {
        "reverse_digital_put"
    }
}
