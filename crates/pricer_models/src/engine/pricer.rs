//! Generic pricer: market state plus payoff.

use pricer_core::market_data::{MarketOverrides, MarketPoint, MarketState};
use pricer_core::types::PricingError;
use tracing::{debug, trace};

use super::bumps::{
    FORWARD_BUMP_RELATIVE, RATE_BUMP, SPOT_BUMP_RELATIVE, THETA_BUMP, VOL_BUMP, YIELD_BUMP,
};
use crate::greeks::GreeksReport;
use crate::payoffs::ForwardPayoff;

/// Prices a payoff and computes its sensitivities by finite differences.
///
/// The pricer never prices anything itself. Present value is
/// `discount_factor * payoff.forward_value(forward, vol, T - t)` and every
/// Greek is a fixed combination of present values at bumped market points,
/// so any [`ForwardPayoff`] gets the full risk catalogue with no extra code.
///
/// Every method takes a [`MarketOverrides`]: a field set there replaces the
/// instance default for that call only. Pass `&MarketOverrides::default()`
/// to use the defaults unchanged. The pricer holds no mutable state and can
/// be shared across threads freely.
///
/// # Examples
/// ```
/// use pricer_core::market_data::{MarketOverrides, MarketState};
/// use pricer_models::engine::Pricer;
/// use pricer_models::payoffs::VanillaCall;
///
/// let market = MarketState::builder()
///     .maturity(1.0)
///     .rate(0.05)
///     .vol(0.2)
///     .spot(100.0)
///     .build()
///     .unwrap();
/// let pricer = Pricer::new(market, VanillaCall::new(100.0).unwrap());
///
/// let pv = pricer.present_value(&MarketOverrides::default()).unwrap();
/// assert!((pv - 10.4506).abs() < 1e-4);
///
/// // Same trade, 10% higher spot, without touching the defaults
/// let bumped = pricer
///     .present_value(&MarketOverrides::new().with_spot(110.0))
///     .unwrap();
/// assert!(bumped > pv);
/// ```
#[derive(Debug, Clone)]
pub struct Pricer<P> {
    market: MarketState,
    payoff: P,
}

impl<P: ForwardPayoff> Pricer<P> {
    /// Creates a pricer for `payoff` under `market`.
    pub fn new(market: MarketState, payoff: P) -> Self {
        Self { market, payoff }
    }

    /// Instance market defaults.
    #[inline]
    pub fn market(&self) -> &MarketState {
        &self.market
    }

    /// The priced payoff.
    #[inline]
    pub fn payoff(&self) -> &P {
        &self.payoff
    }

    // ========================================
    // Discounting and forward
    // ========================================

    /// Domestic discount factor `exp(-r (T - t))`.
    pub fn discount_factor(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        Ok(discount_factor_at(&self.market.resolve(overrides)?))
    }

    /// Foreign (dividend) discount factor `exp(-q (T - t))`.
    pub fn foreign_discount_factor(
        &self,
        overrides: &MarketOverrides,
    ) -> Result<f64, PricingError> {
        Ok(foreign_discount_factor_at(&self.market.resolve(overrides)?))
    }

    /// Forward factor `foreign_discount_factor / discount_factor`.
    pub fn forward_factor(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        Ok(forward_factor_at(&self.market.resolve(overrides)?))
    }

    /// Forward price `S * forward_factor`.
    pub fn forward(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        Ok(forward_at(&self.market.resolve(overrides)?))
    }

    /// Forward value of the payoff, delegated unchanged.
    ///
    /// `expiry` is the time to maturity `T - t`.
    #[inline]
    pub fn forward_value(&self, forward: f64, vol: f64, expiry: f64) -> Result<f64, PricingError> {
        self.payoff.forward_value(forward, vol, expiry)
    }

    /// Present value: discounted forward value at the current forward.
    ///
    /// # Errors
    /// Invalid overrides, or a domain error from the payoff (for the
    /// Black-Scholes family: `maturity <= time`, `vol <= 0`, non-positive
    /// forward or strike).
    pub fn present_value(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        self.present_value_at(&self.market.resolve(overrides)?)
    }

    // ========================================
    // Spot sensitivities
    // ========================================

    /// Delta: `(PV(S + dS) - PV(S - dS)) / (2 dS)` with `dS = 1% * S`.
    pub fn delta(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        self.delta_at(&self.market.resolve(overrides)?)
    }

    /// Cash delta: `delta * S`.
    pub fn delta_cash(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        let point = self.market.resolve(overrides)?;
        Ok(self.delta_at(&point)? * point.spot)
    }

    /// Gamma: `(PV(S + dS) + PV(S - dS) - 2 PV(S)) / dS²` with `dS = 1% * S`.
    pub fn gamma(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        self.gamma_at(&self.market.resolve(overrides)?)
    }

    /// Cash gamma: `gamma * S²`.
    ///
    /// This is the coefficient of the time-decay term in the Black-Scholes
    /// PDE. It is *not* the spot derivative of [`Pricer::delta_cash`], which
    /// would be `gamma * S + delta`.
    pub fn gamma_cash(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        let point = self.market.resolve(overrides)?;
        Ok(self.gamma_at(&point)? * point.spot * point.spot)
    }

    // ========================================
    // Forward sensitivities
    // ========================================

    /// Forward delta: `(FV(F + dF) - FV(F - dF)) / (2 dF)` with `dF = 1% * F`.
    ///
    /// Undiscounted sensitivity of the forward value to the forward price,
    /// at fixed volatility and time to maturity.
    pub fn delta_fwd(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        self.delta_fwd_at(&self.market.resolve(overrides)?)
    }

    /// Cash forward delta: `delta_fwd * F`.
    pub fn delta_fwd_cash(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        let point = self.market.resolve(overrides)?;
        Ok(self.delta_fwd_at(&point)? * forward_at(&point))
    }

    // ========================================
    // Parameter sensitivities
    // ========================================

    /// Vega: `PV(vol + 0.01) - PV(vol)`, the change for one vol point.
    pub fn vega(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        self.vega_at(&self.market.resolve(overrides)?)
    }

    /// Theta: `PV(t + 1/365) - PV(t)`, the change over one calendar day.
    pub fn theta(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        self.theta_at(&self.market.resolve(overrides)?)
    }

    /// Rho: `PV(r + 0.01) - PV(r)`.
    pub fn rho(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        self.rho_at(&self.market.resolve(overrides)?)
    }

    /// Yield rho: `PV(q + 0.01) - PV(q)`.
    pub fn rho_yield(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        self.rho_yield_at(&self.market.resolve(overrides)?)
    }

    /// Volga: `PV(vol + 0.01) + PV(vol - 0.01) - 2 PV(vol)`.
    ///
    /// Note the result is **not** divided by the squared bump, unlike
    /// [`Pricer::gamma`]. The raw second difference is kept for numerical
    /// compatibility with existing risk reports; divide by `VOL_BUMP²` for
    /// the textbook ∂²V/∂σ².
    ///
    /// Fails with a domain error for volatility-dependent payoffs when
    /// `vol <= 0.01`, since the down bump leaves the domain.
    pub fn volga(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        self.volga_at(&self.market.resolve(overrides)?)
    }

    /// Vanna: `(delta(vol + 0.01) - delta(vol - 0.01)) / 0.01`.
    pub fn vanna(&self, overrides: &MarketOverrides) -> Result<f64, PricingError> {
        self.vanna_at(&self.market.resolve(overrides)?)
    }

    /// Evaluates every quantity above at one market point.
    ///
    /// `volga` and `vanna` are left `None` when their vol down bump leaves
    /// the model domain; the rest of the report is unaffected.
    ///
    /// # Errors
    /// Any other failing quantity fails the whole report.
    pub fn greeks(&self, overrides: &MarketOverrides) -> Result<GreeksReport, PricingError> {
        let point = self.market.resolve(overrides)?;
        let forward = forward_at(&point);
        let delta = self.delta_at(&point)?;
        let gamma = self.gamma_at(&point)?;
        let delta_fwd = self.delta_fwd_at(&point)?;

        let report = GreeksReport {
            present_value: self.present_value_at(&point)?,
            forward,
            discount_factor: discount_factor_at(&point),
            delta,
            delta_cash: delta * point.spot,
            delta_fwd,
            delta_fwd_cash: delta_fwd * forward,
            gamma,
            gamma_cash: gamma * point.spot * point.spot,
            vega: self.vega_at(&point)?,
            theta: self.theta_at(&point)?,
            rho: self.rho_at(&point)?,
            rho_yield: self.rho_yield_at(&point)?,
            volga: within_domain("volga", self.volga_at(&point))?,
            vanna: within_domain("vanna", self.vanna_at(&point))?,
        };
        debug!(payoff = self.payoff.name(), pv = report.present_value, "greeks report");
        Ok(report)
    }

    // ========================================
    // Point evaluations
    // ========================================

    fn present_value_at(&self, point: &MarketPoint) -> Result<f64, PricingError> {
        let fv = self
            .payoff
            .forward_value(forward_at(point), point.vol, point.time_to_maturity())
            .inspect_err(|err| {
                if err.is_domain() {
                    debug!(payoff = self.payoff.name(), error = %err, "outside model domain");
                }
            })?;
        Ok(discount_factor_at(point) * fv)
    }

    fn delta_at(&self, point: &MarketPoint) -> Result<f64, PricingError> {
        let ds = relative_bump("spot", point.spot, SPOT_BUMP_RELATIVE)?;
        let up = self.present_value_at(&point.with_spot(point.spot + ds))?;
        let down = self.present_value_at(&point.with_spot(point.spot - ds))?;
        Ok(traced("delta", (up - down) / (2.0 * ds)))
    }

    fn gamma_at(&self, point: &MarketPoint) -> Result<f64, PricingError> {
        let ds = relative_bump("spot", point.spot, SPOT_BUMP_RELATIVE)?;
        let base = self.present_value_at(point)?;
        let up = self.present_value_at(&point.with_spot(point.spot + ds))?;
        let down = self.present_value_at(&point.with_spot(point.spot - ds))?;
        Ok(traced("gamma", (up + down - 2.0 * base) / (ds * ds)))
    }

    fn delta_fwd_at(&self, point: &MarketPoint) -> Result<f64, PricingError> {
        let forward = forward_at(point);
        let df = relative_bump("forward", forward, FORWARD_BUMP_RELATIVE)?;
        let (vol, expiry) = (point.vol, point.time_to_maturity());
        let up = self.payoff.forward_value(forward + df, vol, expiry)?;
        let down = self.payoff.forward_value(forward - df, vol, expiry)?;
        Ok(traced("delta_fwd", (up - down) / (2.0 * df)))
    }

    fn vega_at(&self, point: &MarketPoint) -> Result<f64, PricingError> {
        let base = self.present_value_at(point)?;
        let up = self.present_value_at(&point.with_vol(point.vol + VOL_BUMP))?;
        Ok(traced("vega", up - base))
    }

    fn theta_at(&self, point: &MarketPoint) -> Result<f64, PricingError> {
        let base = self.present_value_at(point)?;
        let later = self.present_value_at(&point.with_time(point.time + THETA_BUMP))?;
        Ok(traced("theta", later - base))
    }

    fn rho_at(&self, point: &MarketPoint) -> Result<f64, PricingError> {
        let base = self.present_value_at(point)?;
        let up = self.present_value_at(&point.with_rate(point.rate + RATE_BUMP))?;
        Ok(traced("rho", up - base))
    }

    fn rho_yield_at(&self, point: &MarketPoint) -> Result<f64, PricingError> {
        let base = self.present_value_at(point)?;
        let up = self.present_value_at(&point.with_yield(point.yield_ + YIELD_BUMP))?;
        Ok(traced("rho_yield", up - base))
    }

    fn volga_at(&self, point: &MarketPoint) -> Result<f64, PricingError> {
        let base = self.present_value_at(point)?;
        let up = self.present_value_at(&point.with_vol(point.vol + VOL_BUMP))?;
        let down = self.present_value_at(&point.with_vol(point.vol - VOL_BUMP))?;
        Ok(traced("volga", up + down - 2.0 * base))
    }

    fn vanna_at(&self, point: &MarketPoint) -> Result<f64, PricingError> {
        let up = self.delta_at(&point.with_vol(point.vol + VOL_BUMP))?;
        let down = self.delta_at(&point.with_vol(point.vol - VOL_BUMP))?;
        Ok(traced("vanna", (up - down) / VOL_BUMP))
    }
}

#[inline]
fn discount_factor_at(point: &MarketPoint) -> f64 {
    (-point.rate * point.time_to_maturity()).exp()
}

#[inline]
fn foreign_discount_factor_at(point: &MarketPoint) -> f64 {
    (-point.yield_ * point.time_to_maturity()).exp()
}

#[inline]
fn forward_factor_at(point: &MarketPoint) -> f64 {
    foreign_discount_factor_at(point) / discount_factor_at(point)
}

#[inline]
fn forward_at(point: &MarketPoint) -> f64 {
    point.spot * forward_factor_at(point)
}

/// Relative bump size, refusing a bump that collapses to zero.
fn relative_bump(name: &'static str, base: f64, relative: f64) -> Result<f64, PricingError> {
    let bump = relative * base;
    if bump == 0.0 {
        return Err(PricingError::DegenerateBump { name, base });
    }
    Ok(bump)
}

/// Turns a domain failure into a missing value. Input errors still fail.
fn within_domain(
    greek: &'static str,
    result: Result<f64, PricingError>,
) -> Result<Option<f64>, PricingError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_domain() => {
            debug!(greek, error = %err, "sensitivity unavailable");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[inline]
fn traced(greek: &'static str, value: f64) -> f64 {
    trace!(greek, value, "sensitivity");
    value
}
