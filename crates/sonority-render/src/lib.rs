//! Strip-image rendering for classified sonorities.
//!
//! Each row becomes one vertical band, followed by a thin black separator.
//! Perfect and mixed sonorities are solid dark and light grey, imperfect
//! sonorities use a horizontal hatch, doubly imperfect a vertical hatch and
//! dissonant ones a diagonal hatch. Rests are white.
//!
//! # Example
//!
//! ```no_run
//! use sonority_core::ThreeVoiceLabel;
//! use sonority_render::{png::{write_rgb, PngConfig}, render_three_voice, RenderConfig};
//! use std::path::Path;
//!
//! let labels: Vec<ThreeVoiceLabel> = ["P", "M", "RRI", "D"]
//!     .iter()
//!     .filter_map(|c| ThreeVoiceLabel::from_code(c))
//!     .collect();
//! let strip = render_three_voice(&labels, &RenderConfig::default()).unwrap();
//! write_rgb(&strip, Path::new("motet.png"), &PngConfig::default()).unwrap();
//! ```

pub mod buffer;
pub mod color;
pub mod config;
pub mod png;
pub mod strip;

use thiserror::Error;

// Re-export main types for convenience
pub use buffer::{Fill, Rect, StripBuffer};
pub use color::Rgb;
pub use config::{Palette, RenderConfig};
pub use crate::png::{png_path, PngConfig, PngError};
pub use strip::{
    four_voice_rects, render_four_voice, render_three_voice, strip_width, three_voice_rects,
};

/// Errors from loading a render configuration or laying out a strip.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`RenderConfig`].
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but its geometry cannot be drawn.
    #[error("invalid render config: {0}")]
    InvalidConfig(String),

    /// The strip width for this many bands overflows.
    #[error("strip of {bands} bands is too wide to render")]
    TooWide {
        /// Number of bands requested.
        bands: usize,
    },
}
