//! Sonority CLI library.
//!
//! CSV ingestion, per-file classification and the `tally` / `graph`
//! commands behind the `sonority` binary.

pub mod commands;
pub mod input;
pub mod sonorities;
