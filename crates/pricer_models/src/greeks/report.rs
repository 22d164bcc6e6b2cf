//! Full risk report for one trade.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Present value and every sensitivity at one market point.
///
/// Produced by [`crate::engine::Pricer::greeks`]. Field conventions follow
/// the individual pricer methods:
///
/// # First-Order
///
/// - `delta`, `delta_cash`: spot sensitivity per unit, and times spot
/// - `delta_fwd`, `delta_fwd_cash`: undiscounted forward sensitivity
/// - `vega`: change for +1 vol point
/// - `theta`: change over one calendar day
/// - `rho`, `rho_yield`: change for +1% rate or yield
///
/// # Second-Order
///
/// - `gamma`, `gamma_cash`: spot convexity, and times spot squared
/// - `volga`: raw second difference in vol (not divided by the bump squared)
/// - `vanna`: change of delta per unit vol
///
/// `volga` and `vanna` bump the volatility down by one point. They are
/// `None` when that bump leaves the model domain (`vol <= 0.01` for
/// volatility-dependent payoffs); every other field is still populated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GreeksReport {
    /// Present value.
    pub present_value: f64,
    /// Forward price.
    pub forward: f64,
    /// Domestic discount factor.
    pub discount_factor: f64,
    /// ∂V/∂S.
    pub delta: f64,
    /// Delta times spot.
    pub delta_cash: f64,
    /// ∂FV/∂F.
    pub delta_fwd: f64,
    /// Forward delta times forward.
    pub delta_fwd_cash: f64,
    /// ∂²V/∂S².
    pub gamma: f64,
    /// Gamma times spot squared.
    pub gamma_cash: f64,
    /// PV change for +0.01 vol.
    pub vega: f64,
    /// PV change over one day.
    pub theta: f64,
    /// PV change for +0.01 rate.
    pub rho: f64,
    /// PV change for +0.01 yield.
    pub rho_yield: f64,
    /// Raw vol second difference, if the down bump stays in domain.
    pub volga: Option<f64>,
    /// ∂Δ/∂σ, if the down bump stays in domain.
    pub vanna: Option<f64>,
}

impl GreeksReport {
    /// Named values in report order, for tabular output.
    ///
    /// Unavailable quantities are `None`.
    pub fn entries(&self) -> [(&'static str, Option<f64>); 15] {
        [
            ("present_value", Some(self.present_value)),
            ("forward", Some(self.forward)),
            ("discount_factor", Some(self.discount_factor)),
            ("delta", Some(self.delta)),
            ("delta_cash", Some(self.delta_cash)),
            ("delta_fwd", Some(self.delta_fwd)),
            ("delta_fwd_cash", Some(self.delta_fwd_cash)),
            ("gamma", Some(self.gamma)),
            ("gamma_cash", Some(self.gamma_cash)),
            ("vega", Some(self.vega)),
            ("theta", Some(self.theta)),
            ("rho", Some(self.rho)),
            ("rho_yield", Some(self.rho_yield)),
            ("volga", self.volga),
            ("vanna", self.vanna),
        ]
    }
}
