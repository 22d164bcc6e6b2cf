//! Calibrate command implementation
//!
//! Derives flat market inputs from a historical time/value series: the
//! latest observation as the spot and the annualised realised volatility of
//! log returns as the volatility.

use std::io::Write;
use std::path::Path;

use pricer_core::market_data::MarketSeries;
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Calibrated flat market inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calibration {
    /// Number of observations used
    pub observations: usize,
    /// Time of the latest observation (years)
    pub time: f64,
    /// Latest observation, the spot candidate
    pub spot: f64,
    /// Annualised realised volatility, the vol candidate
    pub vol: f64,
    /// Annualisation factor applied
    pub periods_per_year: f64,
}

impl Calibration {
    /// Calibrate from a loaded series.
    pub fn from_series(series: &MarketSeries, periods_per_year: f64) -> Result<Self> {
        let (time, spot) = series.latest();
        let vol = series.realised_volatility(periods_per_year)?;
        Ok(Self {
            observations: series.len(),
            time,
            spot,
            vol,
            periods_per_year,
        })
    }
}

/// Run the calibrate command
pub fn run(
    series_path: &Path,
    periods_per_year: f64,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    info!("Starting calibration...");
    info!("  Series: {}", series_path.display());
    info!("  Periods per year: {}", periods_per_year);

    if !series_path.exists() {
        return Err(CliError::FileNotFound(series_path.display().to_string()));
    }

    let series = MarketSeries::from_path(series_path)?;
    let calibration = Calibration::from_series(&series, periods_per_year)?;

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &calibration)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "Observations:     {}", calibration.observations)?;
            writeln!(out, "Latest time:      {:.6}", calibration.time)?;
            writeln!(out, "Spot:             {:.6}", calibration.spot)?;
            writeln!(out, "Realised vol:     {:.6}", calibration.vol)?;
        }
    }

    info!("Calibration complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_calibration_from_series() {
        // Alternating ±10% moves
        let series = MarketSeries::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![100.0, 110.0, 100.0, 110.0, 100.0],
        )
        .unwrap();
        let calibration = Calibration::from_series(&series, 1.0).unwrap();

        let r = (1.1_f64).ln();
        // Returns r, -r, r, -r: mean 0, sample variance 4r²/3
        assert_relative_eq!(calibration.vol, (4.0 * r * r / 3.0).sqrt(), epsilon = 1e-12);
        assert_eq!(calibration.spot, 100.0);
        assert_eq!(calibration.observations, 5);
    }

    #[test]
    fn test_json_output() {
        let file = series_file("time,value\n2014-01-01,100\n2014-01-02,101\n2014-01-03,99.5\n");
        let mut out = Vec::new();
        run(file.path(), 252.0, OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["observations"], 3);
        assert_eq!(value["spot"].as_f64().unwrap(), 99.5);
        assert!(value["vol"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_too_short_series_fails() {
        let file = series_file("time,value\n2014.0,100\n2014.1,101\n");
        let mut out = Vec::new();
        let err = run(file.path(), 252.0, OutputFormat::Table, &mut out).unwrap_err();
        assert!(matches!(err, CliError::Series(_)));
    }

    #[test]
    fn test_missing_series_file() {
        let mut out = Vec::new();
        let err = run(Path::new("missing.csv"), 252.0, OutputFormat::Table, &mut out).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }
}
