//! Linear forward contract.

use pricer_core::types::error::ensure_finite;
use pricer_core::types::PricingError;

use super::ForwardPayoff;

/// Long forward contract: receives the underlying against `strike` at maturity.
///
/// Forward value: `F - K`. Independent of volatility and time, so it never
/// fails with a domain error.
///
/// # Examples
/// ```
/// use pricer_models::payoffs::{ForwardContract, ForwardPayoff};
///
/// let fwd = ForwardContract::new(100.0).unwrap();
/// assert_eq!(fwd.forward_value(105.0, 0.2, 1.0).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardContract {
    strike: f64,
}

impl ForwardContract {
    /// Creates a forward contract.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `strike` is not finite.
    pub fn new(strike: f64) -> Result<Self, PricingError> {
        Ok(Self {
            strike: ensure_finite("strike", strike)?,
        })
    }

    /// Delivery price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }
}

impl ForwardPayoff for ForwardContract {
    #[inline]
    fn forward_value(&self, forward: f64, _vol: f64, _expiry: f64) -> Result<f64, PricingError> {
        Ok(forward - self.strike)
    }

    fn name(&self) -> &'static str {
        "forward"
    }
}
