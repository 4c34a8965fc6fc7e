//! Sonority classification for 3- and 4-voice textures.
//!
//! This crate turns rows of pairwise intervals, as exported by the vertical
//! interval indexer, into sonority categories after Fuller (1986) and
//! Hartt (2010).
//!
//! # Overview
//!
//! - **Rows**: one cell per indexed voice pair, either `Rest` or an interval
//!   token such as `P5`, `m3` or `-M6` (crossed voices carry a `-`).
//! - **Selection**: resolves rests and voice crossing to the intervals
//!   measured against the lowest-sounding voice.
//! - **Classification**: an ordered rule cascade yields exactly one
//!   [`Category`] per row.
//! - **Tally**: counts categories per file and across files.
//!
//! # Example
//!
//! ```
//! use sonority_core::{Category, ThreeVoicePipeline, ThreeVoiceRow, Variant};
//!
//! let pipeline = ThreeVoicePipeline::new(Variant::Fuller);
//! let row = ThreeVoiceRow::from_fields(&["8.0", "P8", "m3", "M6"]).unwrap();
//! let out = pipeline.classify_row(&row).unwrap();
//! assert_eq!(out.category(), Category::DoublyImperfect);
//!
//! let row = ThreeVoiceRow::from_fields(&["9.0", "Rest", "Rest", "P5"]).unwrap();
//! assert_eq!(pipeline.classify_row(&row).unwrap().label.code(), "RRP");
//! ```
//!
//! # Modules
//!
//! - [`interval`]: token parsing
//! - [`row`]: row and interval-set types
//! - [`selection`]: 3- and 4-voice selectors
//! - [`texture`]: 4-voice participation vectors
//! - [`classify`]: cascades, categories and labels
//! - [`pipeline`]: selector + classifier per voice count
//! - [`tally`]: aggregation
//! - [`variant`]: Fuller / Hartt rule sets
//! - [`error`]: error types

pub mod classify;
pub mod error;
pub mod interval;
pub mod pipeline;
pub mod row;
pub mod selection;
pub mod tally;
pub mod texture;
pub mod variant;

// Re-export commonly used types at the crate root
pub use classify::{
    classify_four_voice, classify_three_voice, hartt_special_case, Category, FourVoiceBand,
    ThreeVoiceLabel,
};
pub use error::{ErrorCode, SonorityError};
pub use interval::{Cell, Interval, Quality, REST};
pub use pipeline::{ClassifiedFourVoice, ClassifiedThreeVoice, FourVoicePipeline, ThreeVoicePipeline};
pub use row::{FourVoiceRow, IntervalSet, ThreeVoiceRow, FOUR_VOICE_COLUMNS, THREE_VOICE_COLUMNS};
pub use selection::{
    select_four_voice, select_three_voice, FourVoiceSelection, ThreeVoiceSelection, VoicePair,
};
pub use tally::{FileTally, Tally, TallyReport};
pub use texture::{Texture, VoiceState};
pub use variant::Variant;
