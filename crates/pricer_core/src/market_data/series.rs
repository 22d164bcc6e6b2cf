//! Time/value market-data series used as calibration input.
//!
//! A series holds observations sorted strictly by time (in year fractions)
//! and offers the two statistics a flat Black-Scholes pricer needs from
//! history: the latest observation as a spot candidate and the annualised
//! realised volatility of log returns as a volatility candidate.

use std::io;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use statrs::statistics::Statistics;

use crate::types::SeriesError;

/// Sorted time/value observations.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSeries;
///
/// let series = MarketSeries::new(vec![2014.0, 2014.5, 2015.0], vec![1.0, 2.0, 4.0]).unwrap();
/// assert_eq!(series.latest(), (2015.0, 4.0));
/// assert_eq!(series.value_at(2014.25).unwrap(), 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl MarketSeries {
    /// Builds a series from parallel time and value columns.
    ///
    /// # Errors
    /// - `SeriesError::LengthMismatch` if the columns differ in length
    /// - `SeriesError::Empty` if there are no observations
    /// - `SeriesError::NonFiniteValue` if a time or value is NaN or infinite
    /// - `SeriesError::NonIncreasingTime` if times are not strictly increasing
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if times.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        if times.is_empty() {
            return Err(SeriesError::Empty);
        }

        for (index, (t, v)) in times.iter().zip(values.iter()).enumerate() {
            if !t.is_finite() || !v.is_finite() {
                return Err(SeriesError::NonFiniteValue { index });
            }
        }

        if let Some(index) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SeriesError::NonIncreasingTime { index: index + 1 });
        }

        Ok(Self { times, values })
    }

    /// Reads a two-column `time,value` CSV with a header row.
    ///
    /// `time` is either a decimal year (`2014.25`) or an ISO date
    /// (`2014-04-01`); dates are converted with [`decimal_year`].
    ///
    /// # Errors
    /// `SeriesError::Csv` on reader failures, `SeriesError::Parse` on
    /// malformed fields, plus every error of [`MarketSeries::new`].
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, SeriesError> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let mut times = Vec::new();
        let mut values = Vec::new();

        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let line = i + 1;

            let raw_time = record.get(0).unwrap_or_default();
            let raw_value = record.get(1).unwrap_or_default();

            times.push(parse_time(raw_time).ok_or_else(|| SeriesError::Parse {
                field: "time",
                raw: raw_time.to_string(),
                line,
            })?);
            values.push(raw_value.parse::<f64>().map_err(|_| SeriesError::Parse {
                field: "value",
                raw: raw_value.to_string(),
                line,
            })?);
        }

        Self::new(times, values)
    }

    /// Reads a `time,value` CSV file from disk.
    ///
    /// # Errors
    /// `SeriesError::Io` if the file cannot be opened, otherwise see
    /// [`MarketSeries::from_csv_reader`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SeriesError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Observation times.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Observation values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false for a constructed series.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The last `(time, value)` observation.
    pub fn latest(&self) -> (f64, f64) {
        let last = self.times.len() - 1;
        (self.times[last], self.values[last])
    }

    /// Linearly interpolated value at time `t`.
    ///
    /// # Errors
    /// `SeriesError::OutOfRange` if `t` lies outside `[first, last]`.
    pub fn value_at(&self, t: f64) -> Result<f64, SeriesError> {
        let n = self.times.len();
        let (min, max) = (self.times[0], self.times[n - 1]);
        if !(min..=max).contains(&t) {
            return Err(SeriesError::OutOfRange { t, min, max });
        }
        if n == 1 {
            return Ok(self.values[0]);
        }

        // Index i such that times[i] <= t < times[i+1], clamped to [0, n-2]
        let pos = self.times.partition_point(|&ti| ti <= t);
        let i = pos.saturating_sub(1).min(n - 2);

        let (t0, t1) = (self.times[i], self.times[i + 1]);
        let (v0, v1) = (self.values[i], self.values[i + 1]);
        let w = (t - t0) / (t1 - t0);
        Ok(v0 + w * (v1 - v0))
    }

    /// Log returns `ln(v[i+1] / v[i])`.
    ///
    /// # Errors
    /// `SeriesError::NonPositiveValue` if any value is not positive.
    pub fn log_returns(&self) -> Result<Vec<f64>, SeriesError> {
        if let Some((index, &value)) = self.values.iter().enumerate().find(|(_, v)| **v <= 0.0) {
            return Err(SeriesError::NonPositiveValue { index, value });
        }
        Ok(self.values.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
    }

    /// Annualised realised volatility of log returns.
    ///
    /// σ = stdev(log returns) · √periods_per_year, using the sample (n - 1)
    /// standard deviation.
    ///
    /// # Errors
    /// - `SeriesError::InvalidPeriods` if `periods_per_year` is not positive
    /// - `SeriesError::InsufficientData` with fewer than three observations
    /// - `SeriesError::NonPositiveValue` as for [`MarketSeries::log_returns`]
    ///
    /// # Examples
    /// ```
    /// use pricer_core::market_data::MarketSeries;
    ///
    /// // Alternating ±10% moves
    /// let series = MarketSeries::new(
    ///     vec![0.0, 1.0, 2.0, 3.0],
    ///     vec![100.0, 110.0, 100.0, 110.0],
    /// ).unwrap();
    /// let vol = series.realised_volatility(252.0).unwrap();
    /// assert!(vol > 1.0);
    /// ```
    pub fn realised_volatility(&self, periods_per_year: f64) -> Result<f64, SeriesError> {
        if !(periods_per_year.is_finite() && periods_per_year > 0.0) {
            return Err(SeriesError::InvalidPeriods {
                periods: periods_per_year,
            });
        }

        let returns = self.log_returns()?;
        if returns.len() < 2 {
            return Err(SeriesError::InsufficientData {
                got: self.len(),
                need: 3,
            });
        }

        Ok(returns.iter().std_dev() * periods_per_year.sqrt())
    }
}

/// Converts a date to a decimal year: `year + day_of_year_0 / 365`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::market_data::series::decimal_year;
///
/// let d = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
/// assert_eq!(decimal_year(d), 2014.0);
/// ```
pub fn decimal_year(date: NaiveDate) -> f64 {
    date.year() as f64 + date.ordinal0() as f64 / 365.0
}

fn parse_time(raw: &str) -> Option<f64> {
    if let Ok(t) = raw.parse::<f64>() {
        return Some(t);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(decimal_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Construction tests
    // ==========================================================

    #[test]
    fn test_new_rejects_length_mismatch() {
        let result = MarketSeries::new(vec![0.0, 1.0], vec![1.0]);
        assert!(matches!(
            result,
            Err(SeriesError::LengthMismatch { times: 2, values: 1 })
        ));
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            MarketSeries::new(vec![], vec![]),
            Err(SeriesError::Empty)
        ));
    }

    #[test]
    fn test_new_rejects_unsorted_times() {
        let result = MarketSeries::new(vec![0.0, 2.0, 1.0], vec![1.0, 1.0, 1.0]);
        assert!(matches!(
            result,
            Err(SeriesError::NonIncreasingTime { index: 2 })
        ));

        let result = MarketSeries::new(vec![0.0, 0.0], vec![1.0, 1.0]);
        assert!(matches!(
            result,
            Err(SeriesError::NonIncreasingTime { index: 1 })
        ));
    }

    #[test]
    fn test_new_rejects_nan() {
        let result = MarketSeries::new(vec![0.0, 1.0], vec![1.0, f64::NAN]);
        assert!(matches!(result, Err(SeriesError::NonFiniteValue { index: 1 })));
    }

    // ==========================================================
    // Interpolation tests
    // ==========================================================

    #[test]
    fn test_value_at_nodes_and_between() {
        let series = MarketSeries::new(vec![0.0, 1.0, 3.0], vec![10.0, 20.0, 0.0]).unwrap();
        assert_eq!(series.value_at(0.0).unwrap(), 10.0);
        assert_eq!(series.value_at(1.0).unwrap(), 20.0);
        assert_eq!(series.value_at(3.0).unwrap(), 0.0);
        assert_relative_eq!(series.value_at(0.5).unwrap(), 15.0, epsilon = 1e-12);
        assert_relative_eq!(series.value_at(2.0).unwrap(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_value_at_out_of_range() {
        let series = MarketSeries::new(vec![0.0, 1.0], vec![1.0, 2.0]).unwrap();
        assert!(matches!(
            series.value_at(1.5),
            Err(SeriesError::OutOfRange { .. })
        ));
        assert!(matches!(
            series.value_at(-0.1),
            Err(SeriesError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_single_point_series() {
        let series = MarketSeries::new(vec![2014.0], vec![42.0]).unwrap();
        assert_eq!(series.latest(), (2014.0, 42.0));
        assert_eq!(series.value_at(2014.0).unwrap(), 42.0);
        assert!(matches!(
            series.realised_volatility(252.0),
            Err(SeriesError::InsufficientData { got: 1, need: 3 })
        ));
    }

    // ==========================================================
    // Statistics tests
    // ==========================================================

    #[test]
    fn test_log_returns() {
        let e = std::f64::consts::E;
        let series = MarketSeries::new(vec![0.0, 1.0, 2.0], vec![1.0, e, 1.0]).unwrap();
        let returns = series.log_returns().unwrap();
        assert_relative_eq!(returns[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(returns[1], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_log_returns_reject_non_positive() {
        let series = MarketSeries::new(vec![0.0, 1.0], vec![1.0, 0.0]).unwrap();
        assert!(matches!(
            series.log_returns(),
            Err(SeriesError::NonPositiveValue { index: 1, .. })
        ));
    }

    #[test]
    fn test_realised_volatility_constant_growth_is_zero() {
        let values: Vec<f64> = (0..10).map(|i| 100.0 * 1.01_f64.powi(i)).collect();
        let times: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let series = MarketSeries::new(times, values).unwrap();
        assert_relative_eq!(series.realised_volatility(252.0).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_realised_volatility_reference() {
        // returns: +a, -a, +a with a = ln(1.1); sample variance = 4a²/3
        let series = MarketSeries::new(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![100.0, 110.0, 100.0, 110.0],
        )
        .unwrap();
        let a = 1.1_f64.ln();
        let expected = (4.0 * a * a / 3.0 * 252.0).sqrt();
        assert_relative_eq!(series.realised_volatility(252.0).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_realised_volatility_rejects_bad_periods() {
        let series = MarketSeries::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            series.realised_volatility(0.0),
            Err(SeriesError::InvalidPeriods { .. })
        ));
    }

    // ==========================================================
    // CSV tests
    // ==========================================================

    #[test]
    fn test_from_csv_decimal_years() {
        let data = "time,value\n2014.0, 1.5\n2014.5, 2.5\n";
        let series = MarketSeries::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(series.times(), &[2014.0, 2014.5]);
        assert_eq!(series.values(), &[1.5, 2.5]);
    }

    #[test]
    fn test_from_csv_iso_dates() {
        let data = "date,close\n2014-01-01,100\n2014-01-02,101\n";
        let series = MarketSeries::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(series.times()[0], 2014.0);
        assert_relative_eq!(series.times()[1], 2014.0 + 1.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_csv_parse_error_reports_line() {
        let data = "time,value\n2014.0,1.0\n2014.5,abc\n";
        match MarketSeries::from_csv_reader(data.as_bytes()) {
            Err(SeriesError::Parse { field, raw, line }) => {
                assert_eq!(field, "value");
                assert_eq!(raw, "abc");
                assert_eq!(line, 2);
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let err = MarketSeries::from_path("no-such-series.csv").unwrap_err();
        assert!(matches!(err, SeriesError::Io(_)));
        assert!(err.to_string().starts_with("Cannot read series file"));
    }

    #[test]
    fn test_decimal_year_mid_year() {
        let d = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
        assert_relative_eq!(decimal_year(d), 2015.0 + 182.0 / 365.0, epsilon = 1e-12);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn series_strategy() -> impl Strategy<Value = MarketSeries> {
            prop::collection::vec((0.01..1.0_f64, 1.0..200.0_f64), 2..40).prop_map(|steps| {
                let mut t = 2000.0;
                let (times, values): (Vec<f64>, Vec<f64>) = steps
                    .into_iter()
                    .map(|(dt, v)| {
                        t += dt;
                        (t, v)
                    })
                    .unzip();
                MarketSeries::new(times, values).unwrap()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_value_at_reproduces_nodes(series in series_strategy()) {
                for (t, v) in series.times().iter().zip(series.values()) {
                    assert_relative_eq!(series.value_at(*t).unwrap(), *v, epsilon = 1e-9);
                }
            }

            #[test]
            fn test_value_at_within_observed_bounds(
                series in series_strategy(),
                u in 0.0..=1.0_f64
            ) {
                let (first, last) = (series.times()[0], series.latest().0);
                let t = (first + u * (last - first)).min(last);
                let v = series.value_at(t).unwrap();
                let lo = series.values().iter().cloned().fold(f64::INFINITY, f64::min);
                let hi = series.values().iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
            }

            #[test]
            fn test_realised_volatility_non_negative(series in series_strategy()) {
                if series.len() >= 3 {
                    prop_assert!(series.realised_volatility(252.0).unwrap() >= 0.0);
                }
            }
        }
    }
}
