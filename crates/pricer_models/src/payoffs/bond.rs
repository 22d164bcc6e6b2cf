//! Unit zero-coupon bond.

use pricer_core::types::PricingError;

use super::ForwardPayoff;

/// Pays one unit of the numeraire at maturity.
///
/// Its forward value is the constant 1, so its present value is the discount
/// factor. It exercises the risk engine in isolation from any option
/// formula.
///
/// # Examples
/// ```
/// use pricer_models::payoffs::{ForwardPayoff, ZeroCouponBond};
///
/// assert_eq!(ZeroCouponBond.forward_value(123.0, 0.3, 2.0).unwrap(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroCouponBond;

impl ForwardPayoff for ZeroCouponBond {
    #[inline]
    fn forward_value(&self, _forward: f64, _vol: f64, _expiry: f64) -> Result<f64, PricingError> {
        Ok(1.0)
    }

    fn name(&self) -> &'static str {
        "zero_coupon_bond"
    }
}
