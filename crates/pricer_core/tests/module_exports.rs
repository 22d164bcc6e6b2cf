//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

use std::io::Write;

use chrono::NaiveDate;

/// Test that the distribution functions are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use pricer_core::math::distributions::norm_cdf;

    assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
    assert!(norm_cdf(-1.0) < norm_cdf(1.0));
}

/// Test that the types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::ensure_finite;
    use pricer_core::types::ErrorKind;
    use pricer_core::types::PricingError;
    use pricer_core::types::SeriesError;

    let err = ensure_finite("spot", f64::NAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);

    let err = PricingError::NonPositiveTimeToMaturity { expiry: -0.5 };
    assert_eq!(err.kind(), ErrorKind::Domain);

    let err = SeriesError::Empty;
    assert_eq!(err.to_string(), "Series is empty");
}

/// Test that the market data module is accessible via absolute path.
#[test]
fn test_market_data_module_exports() {
    use pricer_core::market_data::series::decimal_year;
    use pricer_core::market_data::state::DEFAULT_VOL;
    use pricer_core::market_data::MarketOverrides;
    use pricer_core::market_data::MarketSeries;
    use pricer_core::market_data::MarketState;

    let market = MarketState::builder()
        .maturity(1.0)
        .spot(100.0)
        .build()
        .unwrap();
    assert_eq!(market.vol(), DEFAULT_VOL);

    let point = market
        .resolve(&MarketOverrides::new().with_time(0.25))
        .unwrap();
    assert_eq!(point.time_to_maturity(), 0.75);

    let series = MarketSeries::new(vec![2014.0, 2015.0], vec![1.0, 2.0]).unwrap();
    assert_eq!(series.len(), 2);

    let d = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
    assert_eq!(decimal_year(d), 2014.0);
}

/// Test loading a series from a CSV file on disk.
#[test]
fn test_series_from_path() {
    use pricer_core::market_data::MarketSeries;

    let path = std::env::temp_dir().join(format!(
        "pricer_core_series_{}.csv",
        std::process::id()
    ));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "time,value").unwrap();
        writeln!(file, "2014-01-01,100.0").unwrap();
        writeln!(file, "2014-07-02,105.0").unwrap();
        writeln!(file, "2015-01-01,103.0").unwrap();
    }

    let series = MarketSeries::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.latest(), (2015.0, 103.0));
}
