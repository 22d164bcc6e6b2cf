//! Flat Black-Scholes market state.
//!
//! - [`MarketState`]: validated instance defaults owned by a pricer
//! - [`MarketStateBuilder`]: builder with the documented defaults
//! - [`MarketOverrides`]: optional per-call replacements for any field
//! - [`MarketPoint`]: fully resolved market point consumed by every formula
//!
//! Overrides never mutate a `MarketState`. Resolving them yields a
//! `MarketPoint`, so every computation downstream is a pure function of an
//! explicit point, which is what lets the risk engine bump generically.

use serde::{Deserialize, Serialize};

use crate::types::error::ensure_finite;
use crate::types::PricingError;

/// Default volatility floor (effectively zero volatility).
pub const DEFAULT_VOL: f64 = 1e-5;

/// Validated market state.
///
/// All rates are continuously compounded, times are in years.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketState;
///
/// let market = MarketState::builder()
///     .maturity(1.0)
///     .spot(100.0)
///     .rate(0.05)
///     .vol(0.2)
///     .build()
///     .unwrap();
///
/// assert_eq!(market.time(), 0.0);
/// assert_eq!(market.yield_(), 0.0);
/// assert_eq!(market.vol(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketState {
    maturity: f64,
    time: f64,
    rate: f64,
    #[serde(rename = "yield")]
    yield_: f64,
    vol: f64,
    spot: f64,
}

impl MarketState {
    /// Creates a new builder.
    pub fn builder() -> MarketStateBuilder {
        MarketStateBuilder::default()
    }

    /// Maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Valuation time in years.
    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Numeraire rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Dividend or foreign yield.
    #[inline]
    pub fn yield_(&self) -> f64 {
        self.yield_
    }

    /// Volatility.
    #[inline]
    pub fn vol(&self) -> f64 {
        self.vol
    }

    /// Spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Resolves per-call overrides against the instance defaults.
    ///
    /// Each `None` field of `overrides` falls back to the corresponding
    /// instance value. The instance itself is never modified.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if an override is not finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::market_data::{MarketOverrides, MarketState};
    ///
    /// let market = MarketState::builder().maturity(1.0).spot(100.0).build().unwrap();
    /// let point = market
    ///     .resolve(&MarketOverrides::new().with_spot(105.0))
    ///     .unwrap();
    ///
    /// assert_eq!(point.spot, 105.0);
    /// assert_eq!(market.spot(), 100.0);
    /// ```
    pub fn resolve(&self, overrides: &MarketOverrides) -> Result<MarketPoint, PricingError> {
        let pick = |name, value: Option<f64>, default| match value {
            Some(v) => ensure_finite(name, v),
            None => Ok(default),
        };

        Ok(MarketPoint {
            maturity: pick("maturity", overrides.maturity, self.maturity)?,
            time: pick("time", overrides.time, self.time)?,
            rate: pick("rate", overrides.rate, self.rate)?,
            yield_: pick("yield", overrides.yield_, self.yield_)?,
            vol: pick("vol", overrides.vol, self.vol)?,
            spot: pick("spot", overrides.spot, self.spot)?,
        })
    }

    /// Returns the instance defaults as a market point.
    #[inline]
    pub fn point(&self) -> MarketPoint {
        MarketPoint {
            maturity: self.maturity,
            time: self.time,
            rate: self.rate,
            yield_: self.yield_,
            vol: self.vol,
            spot: self.spot,
        }
    }
}

/// Builder for [`MarketState`].
///
/// `maturity` and `spot` are required. The remaining fields default to
/// `time = 0`, `rate = 0`, `yield = 0` and `vol = 1e-5`.
///
/// The builder deserialises from a table with optional keys
/// `maturity`, `time`, `rate`, `yield`, `vol` and `spot`, so configuration
/// files are validated through the same `build` path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketStateBuilder {
    maturity: Option<f64>,
    time: Option<f64>,
    rate: Option<f64>,
    #[serde(rename = "yield")]
    yield_: Option<f64>,
    vol: Option<f64>,
    spot: Option<f64>,
}

impl MarketStateBuilder {
    /// Sets the maturity (years).
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the valuation time (years).
    pub fn time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the numeraire rate.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the dividend or foreign yield.
    pub fn yield_(mut self, yield_: f64) -> Self {
        self.yield_ = Some(yield_);
        self
    }

    /// Sets the volatility.
    pub fn vol(mut self, vol: f64) -> Self {
        self.vol = Some(vol);
        self
    }

    /// Sets the spot price.
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Validates the inputs and builds the market state.
    ///
    /// # Errors
    /// - `PricingError::MissingParameter` if `maturity` or `spot` is unset
    /// - `PricingError::InvalidParameter` if any value is not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_core::market_data::MarketState;
    /// use pricer_core::types::PricingError;
    ///
    /// let err = MarketState::builder().maturity(1.0).build().unwrap_err();
    /// assert_eq!(err, PricingError::MissingParameter { name: "spot" });
    /// ```
    pub fn build(self) -> Result<MarketState, PricingError> {
        let maturity = self
            .maturity
            .ok_or(PricingError::MissingParameter { name: "maturity" })?;
        let spot = self
            .spot
            .ok_or(PricingError::MissingParameter { name: "spot" })?;

        Ok(MarketState {
            maturity: ensure_finite("maturity", maturity)?,
            time: ensure_finite("time", self.time.unwrap_or(0.0))?,
            rate: ensure_finite("rate", self.rate.unwrap_or(0.0))?,
            yield_: ensure_finite("yield", self.yield_.unwrap_or(0.0))?,
            vol: ensure_finite("vol", self.vol.unwrap_or(DEFAULT_VOL))?,
            spot: ensure_finite("spot", spot)?,
        })
    }
}

/// Optional per-call market overrides.
///
/// A `None` field means "use the pricer's instance default". Overrides apply
/// to a single call only.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketOverrides;
///
/// let bumped = MarketOverrides::new().with_vol(0.25).with_rate(0.03);
/// assert_eq!(bumped.vol, Some(0.25));
/// assert_eq!(bumped.spot, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MarketOverrides {
    /// Maturity override (years).
    pub maturity: Option<f64>,
    /// Spot override.
    pub spot: Option<f64>,
    /// Valuation time override (years).
    pub time: Option<f64>,
    /// Numeraire rate override.
    pub rate: Option<f64>,
    /// Yield override.
    #[serde(rename = "yield")]
    pub yield_: Option<f64>,
    /// Volatility override.
    pub vol: Option<f64>,
}

impl MarketOverrides {
    /// No overrides: every field falls back to the instance default.
    pub const fn new() -> Self {
        Self {
            maturity: None,
            spot: None,
            time: None,
            rate: None,
            yield_: None,
            vol: None,
        }
    }

    /// Overrides the maturity.
    pub fn with_maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Overrides the spot.
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Overrides the valuation time.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    /// Overrides the numeraire rate.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Overrides the yield.
    pub fn with_yield(mut self, yield_: f64) -> Self {
        self.yield_ = Some(yield_);
        self
    }

    /// Overrides the volatility.
    pub fn with_vol(mut self, vol: f64) -> Self {
        self.vol = Some(vol);
        self
    }
}

/// A fully resolved market point.
///
/// Every field is explicit. The `with_*` methods return bumped copies,
/// leaving `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketPoint {
    /// Maturity (years)
    pub maturity: f64,
    /// Valuation time (years)
    pub time: f64,
    /// Numeraire rate
    pub rate: f64,
    /// Dividend or foreign yield
    #[serde(rename = "yield")]
    pub yield_: f64,
    /// Volatility
    pub vol: f64,
    /// Spot price
    pub spot: f64,
}

impl MarketPoint {
    /// Time to maturity `T - t`, which may be zero or negative.
    #[inline]
    pub fn time_to_maturity(&self) -> f64 {
        self.maturity - self.time
    }

    /// Copy with a different spot.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Copy with a different valuation time.
    #[inline]
    pub fn with_time(self, time: f64) -> Self {
        Self { time, ..self }
    }

    /// Copy with a different rate.
    #[inline]
    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }

    /// Copy with a different yield.
    #[inline]
    pub fn with_yield(self, yield_: f64) -> Self {
        Self { yield_, ..self }
    }

    /// Copy with a different volatility.
    #[inline]
    pub fn with_vol(self, vol: f64) -> Self {
        Self { vol, ..self }
    }
}
