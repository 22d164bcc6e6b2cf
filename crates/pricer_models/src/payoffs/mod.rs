//! Payoff models.
//!
//! A payoff model supplies exactly one thing: its value at maturity expressed
//! in terms of the forward price. Discounting and every risk number come
//! from [`crate::engine::Pricer`], so a new payoff needs nothing beyond a
//! [`ForwardPayoff`] implementation.
//!
//! ## Families
//!
//! - Linear: [`ForwardContract`], plus the unit [`ZeroCouponBond`]
//! - Black-Scholes: [`VanillaCall`], [`VanillaPut`], [`DigitalCall`],
//!   [`DigitalPut`], [`ReverseDigitalCall`], [`ReverseDigitalPut`]
//!
//! [`PayoffModel`] wraps all of them in one enum for configuration-driven
//! construction with static dispatch.

use pricer_core::types::PricingError;

pub mod bond;
pub mod digital;
pub mod forward;
pub mod model;
pub mod vanilla;

pub use bond::ZeroCouponBond;
pub use digital::{DigitalCall, DigitalPut, ReverseDigitalCall, ReverseDigitalPut};
pub use forward::ForwardContract;
pub use model::PayoffModel;
pub use vanilla::{VanillaCall, VanillaPut};

/// Value of a payoff at maturity as a function of the forward.
///
/// # Arguments (of [`ForwardPayoff::forward_value`])
/// * `forward` - Forward price of the underlying for the maturity
/// * `vol` - Volatility
/// * `expiry` - Time to maturity `T - t` in years
///
/// Implementations must be pure: the same inputs always give the same
/// result, and nothing is cached between calls.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
/// use pricer_models::payoffs::ForwardPayoff;
///
/// /// Pays the square of the forward.
/// struct Squared;
///
/// impl ForwardPayoff for Squared {
///     fn forward_value(&self, forward: f64, _vol: f64, _expiry: f64) -> Result<f64, PricingError> {
///         Ok(forward * forward)
///     }
///
///     fn name(&self) -> &'static str {
///         "squared"
///     }
/// }
///
/// assert_eq!(Squared.forward_value(3.0, 0.2, 1.0).unwrap(), 9.0);
/// ```
pub trait ForwardPayoff {
    /// Forward value of the payoff.
    ///
    /// # Errors
    /// Models that depend on volatility fail with a domain error when
    /// `expiry <= 0` or `vol <= 0`.
    fn forward_value(&self, forward: f64, vol: f64, expiry: f64) -> Result<f64, PricingError>;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;
}

impl<P: ForwardPayoff + ?Sized> ForwardPayoff for &P {
    #[inline]
    fn forward_value(&self, forward: f64, vol: f64, expiry: f64) -> Result<f64, PricingError> {
        (**self).forward_value(forward, vol, expiry)
    }

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }
}
