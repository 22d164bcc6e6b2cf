//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing and market-data series operations
//!
//! # Re-exports
//!
//! [`PricingError`], [`ErrorKind`] and [`SeriesError`] are re-exported at this
//! module level.

pub mod error;

pub use error::{ErrorKind, PricingError, SeriesError};
