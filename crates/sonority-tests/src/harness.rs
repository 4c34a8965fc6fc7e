//! Helpers for inspecting written strips.

use std::fs::File;
use std::path::Path;

/// A decoded 8-bit RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedPng {
    /// RGB triple at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * self.width + x) * 3) as usize;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Distinct colors in column `x`, top to bottom, with run lengths.
    pub fn column_runs(&self, x: u32) -> Vec<([u8; 3], u32)> {
        let mut runs: Vec<([u8; 3], u32)> = Vec::new();
        for y in 0..self.height {
            let p = self.pixel(x, y);
            match runs.last_mut() {
                Some((color, n)) if *color == p => *n += 1,
                _ => runs.push((p, 1)),
            }
        }
        runs
    }
}

/// Decode an RGB8 PNG from disk.
pub fn decode_png(path: &Path) -> DecodedPng {
    let file = File::open(path).expect("Failed to open PNG");
    let decoder = png::Decoder::new(file);
    let mut reader = decoder.read_info().expect("Failed to read PNG header");
    let mut pixels = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut pixels).expect("Failed to decode PNG");
    assert_eq!(info.color_type, png::ColorType::Rgb, "strips are RGB");
    assert_eq!(info.bit_depth, png::BitDepth::Eight, "strips are 8-bit");
    pixels.truncate(info.buffer_size());

    DecodedPng {
        width: info.width,
        height: info.height,
        pixels,
    }
}
