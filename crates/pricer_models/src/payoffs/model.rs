//! Enum over every payoff model, for configuration-driven construction.
//!
//! Trade books name a model by tag and strike; [`PayoffModel`] turns that
//! description into a [`ForwardPayoff`] without trait objects.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pricer_core::types::PricingError;

use super::{
    DigitalCall, DigitalPut, ForwardContract, ForwardPayoff, ReverseDigitalCall,
    ReverseDigitalPut, VanillaCall, VanillaPut, ZeroCouponBond,
};

/// A payoff model selected at runtime.
///
/// With the `serde` feature the enum is internally tagged by `type`:
///
/// ```toml
/// type = "digital_call"
/// strike = 100.0
/// ```
///
/// The strike is validated every time the model is evaluated, so a
/// non-finite strike read from a file surfaces as
/// `PricingError::InvalidParameter` rather than a NaN price.
///
/// # Examples
/// ```
/// use pricer_models::payoffs::{ForwardPayoff, PayoffModel};
///
/// let model = PayoffModel::Call { strike: 100.0 };
/// assert_eq!(model.name(), "call");
/// assert_eq!(model.strike(), Some(100.0));
/// assert!(model.forward_value(100.0, 0.2, 1.0).unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum PayoffModel {
    /// Unit zero-coupon bond.
    ZeroCouponBond,
    /// Linear forward contract.
    Forward {
        /// Delivery price
        strike: f64,
    },
    /// European call.
    Call {
        /// Strike price
        strike: f64,
    },
    /// European put.
    Put {
        /// Strike price
        strike: f64,
    },
    /// Cash-or-nothing call.
    DigitalCall {
        /// Strike price
        strike: f64,
    },
    /// Cash-or-nothing put.
    DigitalPut {
        /// Strike price
        strike: f64,
    },
    /// Asset-or-nothing call.
    ReverseDigitalCall {
        /// Strike price
        strike: f64,
    },
    /// Asset-or-nothing put.
    ReverseDigitalPut {
        /// Strike price
        strike: f64,
    },
}

impl PayoffModel {
    /// Strike of the model, if it has one.
    pub fn strike(&self) -> Option<f64> {
        match *self {
            PayoffModel::ZeroCouponBond => None,
            PayoffModel::Forward { strike }
            | PayoffModel::Call { strike }
            | PayoffModel::Put { strike }
            | PayoffModel::DigitalCall { strike }
            | PayoffModel::DigitalPut { strike }
            | PayoffModel::ReverseDigitalCall { strike }
            | PayoffModel::ReverseDigitalPut { strike } => Some(strike),
        }
    }

    /// Checks the model parameters without evaluating it.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if the strike is not finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        match self.strike() {
            Some(strike) => pricer_core::types::error::ensure_finite("strike", strike).map(|_| ()),
            None => Ok(()),
        }
    }
}

impl ForwardPayoff for PayoffModel {
    fn forward_value(&self, forward: f64, vol: f64, expiry: f64) -> Result<f64, PricingError> {
        match *self {
            PayoffModel::ZeroCouponBond => ZeroCouponBond.forward_value(forward, vol, expiry),
            PayoffModel::Forward { strike } => {
                ForwardContract::new(strike)?.forward_value(forward, vol, expiry)
            }
            PayoffModel::Call { strike } => {
                VanillaCall::new(strike)?.forward_value(forward, vol, expiry)
            }
            PayoffModel::Put { strike } => {
                VanillaPut::new(strike)?.forward_value(forward, vol, expiry)
            }
            PayoffModel::DigitalCall { strike } => {
                DigitalCall::new(strike)?.forward_value(forward, vol, expiry)
            }
            PayoffModel::DigitalPut { strike } => {
                DigitalPut::new(strike)?.forward_value(forward, vol, expiry)
            }
            PayoffModel::ReverseDigitalCall { strike } => {
                ReverseDigitalCall::new(strike)?.forward_value(forward, vol, expiry)
            }
            PayoffModel::ReverseDigitalPut { strike } => {
                ReverseDigitalPut::new(strike)?.forward_value(forward, vol, expiry)
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PayoffModel::ZeroCouponBond => "zero_coupon_bond",
            PayoffModel::Forward { .. } => "forward",
            PayoffModel::Call { .. } => "call",
            PayoffModel::Put { .. } => "put",
            PayoffModel::DigitalCall { .. } => "digital_call",
            PayoffModel::DigitalPut { .. } => "digital_put",
            PayoffModel::ReverseDigitalCall { .. } => "reverse_digital_call",
            PayoffModel::ReverseDigitalPut { .. } => "reverse_digital_put",
        }
    }
}

impl From<ZeroCouponBond> for PayoffModel {
    fn from(_: ZeroCouponBond) -> Self {
        PayoffModel::ZeroCouponBond
    }
}

impl From<ForwardContract> for PayoffModel {
    fn from(p: ForwardContract) -> Self {
        PayoffModel::Forward { strike: p.strike() }
    }
}

impl From<VanillaCall> for PayoffModel {
    fn from(p: VanillaCall) -> Self {
        PayoffModel::Call { strike: p.strike() }
    }
}

impl From<VanillaPut> for PayoffModel {
    fn from(p: VanillaPut) -> Self {
        PayoffModel::Put { strike: p.strike() }
    }
}

impl From<DigitalCall> for PayoffModel {
    fn from(p: DigitalCall) -> Self {
        PayoffModel::DigitalCall { strike: p.strike() }
    }
}

impl From<DigitalPut> for PayoffModel {
    fn from(p: DigitalPut) -> Self {
        PayoffModel::DigitalPut { strike: p.strike() }
    }
}

impl From<ReverseDigitalCall> for PayoffModel {
    fn from(p: ReverseDigitalCall) -> Self {
        PayoffModel::ReverseDigitalCall { strike: p.strike() }
    }
}

impl From<ReverseDigitalPut> for PayoffModel {
    fn from(p: ReverseDigitalPut) -> Self {
        PayoffModel::ReverseDigitalPut { strike: p.strike() }
    }
}
