//! Numerical building blocks.
//!
//! - [`distributions`]: Standard normal CDF and PDF

pub mod distributions;
