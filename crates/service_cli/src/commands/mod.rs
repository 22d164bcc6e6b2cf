//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to a caller-supplied writer so they can be exercised in tests.

pub mod calibrate;
pub mod check;
pub mod price;
