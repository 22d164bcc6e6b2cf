//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing and risk operations
//! - `ErrorKind`: Coarse classification of a `PricingError`
//! - `SeriesError`: Errors from market-data series construction and parsing

use thiserror::Error;

/// Coarse classification of pricing failures.
///
/// # Variants
/// - `InvalidParameter`: A required input is missing or not a finite number
/// - `Domain`: Inputs are well-formed but outside the domain of a formula
///   (e.g. zero time to maturity in a volatility-scaled quantity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or non-numeric input.
    InvalidParameter,
    /// Input outside the mathematical domain of the evaluated formula.
    Domain,
}

/// Categorised pricing errors.
///
/// Every pricing or risk call either returns a value or fails with one of
/// these variants. All of them are deterministic in the inputs, so none is
/// retried internally.
///
/// # Examples
/// ```
/// use pricer_core::types::{ErrorKind, PricingError};
///
/// let err = PricingError::MissingParameter { name: "spot" };
/// assert_eq!(err.kind(), ErrorKind::InvalidParameter);
/// assert_eq!(format!("{}", err), "Missing required parameter: spot");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A required parameter was not supplied.
    #[error("Missing required parameter: {name}")]
    MissingParameter {
        /// Parameter name
        name: &'static str,
    },

    /// A parameter is not a finite number.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Maturity does not lie strictly after the valuation time.
    #[error("Non-positive time to maturity: T - t = {expiry}")]
    NonPositiveTimeToMaturity {
        /// Time to maturity `T - t` in years
        expiry: f64,
    },

    /// Volatility is zero or negative.
    #[error("Non-positive volatility: σ = {vol}")]
    NonPositiveVolatility {
        /// The rejected volatility
        vol: f64,
    },

    /// Forward or strike is not positive, so ln(F/K) is undefined.
    #[error("Non-positive log-moneyness argument: F = {forward}, K = {strike}")]
    NonPositiveLogArgument {
        /// Forward price
        forward: f64,
        /// Strike price
        strike: f64,
    },

    /// A relative finite-difference bump collapsed to zero.
    #[error("Degenerate bump: cannot bump {name} relative to {base}")]
    DegenerateBump {
        /// Bumped quantity
        name: &'static str,
        /// Base value the bump is proportional to
        base: f64,
    },
}

impl PricingError {
    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::MissingParameter { .. } | PricingError::InvalidParameter { .. } => {
                ErrorKind::InvalidParameter
            }
            PricingError::NonPositiveTimeToMaturity { .. }
            | PricingError::NonPositiveVolatility { .. }
            | PricingError::NonPositiveLogArgument { .. }
            | PricingError::DegenerateBump { .. } => ErrorKind::Domain,
        }
    }

    /// Returns true if this error is a domain error.
    #[inline]
    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }
}

/// Checks that `value` is a finite number.
///
/// # Errors
/// `PricingError::InvalidParameter` carrying `name` if `value` is NaN or infinite.
///
/// # Examples
/// ```
/// use pricer_core::types::error::ensure_finite;
///
/// assert_eq!(ensure_finite("rate", 0.05).unwrap(), 0.05);
/// assert!(ensure_finite("rate", f64::NAN).is_err());
/// ```
#[inline]
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::InvalidParameter { name, value })
    }
}

/// Market-data series errors.
///
/// # Variants
/// - `Empty`: No observations supplied
/// - `LengthMismatch`: Time and value columns differ in length
/// - `NonIncreasingTime`: Observation times are not strictly increasing
/// - `NonFiniteValue`: An observation is NaN or infinite
/// - `NonPositiveValue`: A log return was requested over a non-positive value
/// - `InsufficientData`: Too few observations for the requested statistic
/// - `OutOfRange`: Interpolation requested outside the observed time range
/// - `InvalidPeriods`: Annualisation factor is not positive
/// - `Parse`: A CSV field could not be parsed
/// - `Csv`: The CSV reader failed
/// - `Io`: The series file could not be opened
#[derive(Debug, Error)]
pub enum SeriesError {
    /// No observations supplied.
    #[error("Series is empty")]
    Empty,

    /// Time and value columns differ in length.
    #[error("Series length mismatch: {times} times, {values} values")]
    LengthMismatch {
        /// Number of times
        times: usize,
        /// Number of values
        values: usize,
    },

    /// Times are not strictly increasing.
    #[error("Series times not strictly increasing at index {index}")]
    NonIncreasingTime {
        /// Index of the offending observation
        index: usize,
    },

    /// Non-finite time or value.
    #[error("Non-finite observation at index {index}")]
    NonFiniteValue {
        /// Index of the offending observation
        index: usize,
    },

    /// Non-positive value where a logarithm is taken.
    #[error("Non-positive value {value} at index {index}")]
    NonPositiveValue {
        /// Index of the offending observation
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Too few observations.
    #[error("Insufficient data: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points available
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Query time outside the observed range.
    #[error("Time {t} outside series range [{min}, {max}]")]
    OutOfRange {
        /// Query time
        t: f64,
        /// First observation time
        min: f64,
        /// Last observation time
        max: f64,
    },

    /// Annualisation factor is not a positive finite number.
    #[error("Invalid periods per year: {periods}")]
    InvalidPeriods {
        /// The rejected factor
        periods: f64,
    },

    /// Field could not be parsed.
    #[error("Cannot parse {field} '{raw}' on line {line}")]
    Parse {
        /// Column name
        field: &'static str,
        /// Raw text
        raw: String,
        /// One-based data line
        line: usize,
    },

    /// Underlying CSV failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Series file could not be opened.
    #[error("Cannot read series file: {0}")]
    Io(#[from] std::io::Error),
}
