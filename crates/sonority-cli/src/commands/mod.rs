//! CLI command implementations

pub mod graph;
pub mod tally;

mod reporting;

pub use tally::ReportMode;
