//! 8-bit RGB colors.

use serde::{Deserialize, Serialize};

/// RGB color with 8-bit components.
///
/// Serializes as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a grey.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::gray(0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::gray(255)
    }

    /// Components as an array.
    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}
