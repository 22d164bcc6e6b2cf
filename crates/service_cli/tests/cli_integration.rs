//! End-to-end tests for the `pricer` binary.

use std::io::Write;
use std::process::Command;

fn pricer() -> Command {
    pricer_with_config("no-such-config.toml")
}

fn pricer_with_config(config: impl AsRef<std::ffi::OsStr>) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pricer"));
    // Keep the ambient environment from leaking into configuration
    cmd.env_remove("RUST_LOG")
        .env_remove("PRICER_LOG_LEVEL")
        .env_remove("PRICER_OUTPUT_FORMAT")
        .env_remove("PRICER_PERIODS_PER_YEAR")
        .arg("--config")
        .arg(config);
    cmd
}

fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_price_book_as_json() {
    let book = temp_file(
        ".toml",
        r#"
[market]
maturity = 1.0
rate = 0.05
vol = 0.2
spot = 100.0

[[trades]]
id = "call"
model = { type = "call", strike = 100.0 }

[[trades]]
id = "expired"
model = { type = "put", strike = 100.0 }
scenario = { time = 1.0 }
"#,
    );

    let output = pricer()
        .args(["price", "--book"])
        .arg(book.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pv = value[0]["greeks"]["present_value"].as_f64().unwrap();
    assert!((pv - 10.4506).abs() < 1e-4);
    assert!(value[1]["error"].is_string());
}

#[test]
fn test_calibrate_table_output() {
    let series = temp_file(
        ".csv",
        "time,value\n2014.00,100\n2014.01,102\n2014.02,101\n2014.03,103\n",
    );

    let output = pricer()
        .args(["calibrate", "--series"])
        .arg(series.path())
        .args(["--periods-per-year", "100"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("Spot:             103.000000"));
    assert!(text.contains("Realised vol:"));
}

#[test]
fn test_check_respects_environment() {
    let output = pricer()
        .env("PRICER_PERIODS_PER_YEAR", "12")
        .args(["check", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["config"]["periods_per_year"], 12.0);
}

#[test]
fn test_missing_book_fails() {
    let output = pricer()
        .args(["price", "--book", "definitely-missing.toml"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_invalid_config_is_logged_once() {
    let config = temp_file(".toml", "periods_per_year = -1.0\n");

    let output = pricer_with_config(config.path())
        .arg("check")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("Invalid configuration").count(), 1);
}

#[test]
fn test_pricing_failure_is_logged_once() {
    let output = pricer()
        .env("RUST_LOG", "error")
        .args(["price", "--book", "definitely-missing.toml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("definitely-missing.toml").count(), 1);
}
