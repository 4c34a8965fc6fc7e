//! Sonority End-to-End Test Infrastructure
//!
//! This crate provides integration tests across the workspace:
//!
//! - Tally: CSV files -> per-file and aggregated counts
//! - Graph: CSV files -> strip PNGs, decoded and checked pixel by pixel
//! - Properties: classifier totality, order insensitivity and additivity
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sonority-tests
//! ```

pub mod fixtures;
pub mod harness;
