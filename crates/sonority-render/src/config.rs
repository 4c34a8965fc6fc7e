//! Strip geometry and palette.
//!
//! Defaults reproduce the published strip charts: 20 px bands with a 2 px
//! black separator, 99 px tall for three voices (three 33 px lanes) and
//! 100 px tall for four voices (four 25 px lanes).

use std::path::Path;

use serde::{Deserialize, Serialize};
use sonority_core::Category;

use crate::buffer::Fill;
use crate::color::Rgb;
use crate::RenderError;

/// Largest accepted band, separator or image height, in pixels.
pub const MAX_DIMENSION: u32 = 1 << 16;

/// Solid colors used by the strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    /// Perfect sonorities.
    pub perfect: Rgb,
    /// Mixed sonorities.
    pub mixed: Rgb,
    /// Rests and solos.
    pub rest: Rgb,
    /// Separators and hatch lines.
    pub ink: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            perfect: Rgb::gray(65),
            mixed: Rgb::gray(160),
            rest: Rgb::white(),
            ink: Rgb::black(),
        }
    }
}

/// Render configuration, loadable from JSON. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Width of one band in pixels.
    pub band_width: u32,
    /// Width of the separator drawn after each band.
    pub separator_width: u32,
    /// Image height for 3-voice strips; must divide into three lanes.
    pub three_voice_height: u32,
    /// Image height for 4-voice strips; must divide into four lanes.
    pub four_voice_height: u32,
    /// Row period of the imperfect hatch.
    pub horizontal_hatch_period: u32,
    /// Pixel period of the dissonant hatch.
    pub diagonal_hatch_period: u32,
    /// Column period of the doubly-imperfect hatch.
    pub vertical_hatch_period: u32,
    /// Colors.
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            band_width: 20,
            separator_width: 2,
            three_voice_height: 99,
            four_voice_height: 100,
            horizontal_hatch_period: 5,
            diagonal_hatch_period: 7,
            vertical_hatch_period: 5,
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject geometry the renderer cannot lay out.
    pub fn validate(&self) -> Result<(), RenderError> {
        let positive = [
            ("band_width", self.band_width),
            ("separator_width", self.separator_width),
            ("horizontal_hatch_period", self.horizontal_hatch_period),
            ("diagonal_hatch_period", self.diagonal_hatch_period),
            ("vertical_hatch_period", self.vertical_hatch_period),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(RenderError::InvalidConfig(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }
        let bounded = [
            ("band_width", self.band_width),
            ("separator_width", self.separator_width),
            ("three_voice_height", self.three_voice_height),
            ("four_voice_height", self.four_voice_height),
        ];
        for (name, value) in bounded {
            if value > MAX_DIMENSION {
                return Err(RenderError::InvalidConfig(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_DIMENSION, value
                )));
            }
        }
        if self.three_voice_height == 0 || self.three_voice_height % 3 != 0 {
            return Err(RenderError::InvalidConfig(format!(
                "three_voice_height must be a positive multiple of 3, got {}",
                self.three_voice_height
            )));
        }
        if self.four_voice_height == 0 || self.four_voice_height % 4 != 0 {
            return Err(RenderError::InvalidConfig(format!(
                "four_voice_height must be a positive multiple of 4, got {}",
                self.four_voice_height
            )));
        }
        Ok(())
    }

    /// Horizontal distance between the starts of consecutive bands.
    pub fn slot_width(&self) -> u32 {
        self.band_width + self.separator_width
    }

    /// Fill for a category.
    pub fn fill_for(&self, category: Category) -> Fill {
        let ink = self.palette.ink;
        match category {
            Category::Perfect => Fill::Solid(self.palette.perfect),
            Category::Mixed => Fill::Solid(self.palette.mixed),
            Category::Rest => Fill::Solid(self.palette.rest),
            Category::Imperfect => Fill::HorizontalHatch {
                ink,
                period: self.horizontal_hatch_period,
            },
            Category::Dissonant => Fill::DiagonalHatch {
                ink,
                period: self.diagonal_hatch_period,
            },
            Category::DoublyImperfect => Fill::VerticalHatch {
                ink,
                period: self.vertical_hatch_period,
            },
        }
    }
}
