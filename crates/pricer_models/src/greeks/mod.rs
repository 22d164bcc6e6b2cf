//! Aggregated risk output.

mod report;

pub use report::GreeksReport;
