//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same strip always encodes to the
//! same bytes.

use std::io::Write;
use std::path::{Path, PathBuf};

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::buffer::StripBuffer;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    /// Output file could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoder rejected the image data.
    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    /// Strip has no pixels.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

fn check_dimensions(buffer: &StripBuffer) -> Result<(), PngError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "cannot encode a {}x{} image",
            buffer.width, buffer.height
        )));
    }
    Ok(())
}

/// Write a strip to any writer as 8-bit RGB.
pub fn write_rgb_to_writer<W: Write>(
    buffer: &StripBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    check_dimensions(buffer)?;

    let mut encoder = Encoder::new(writer, buffer.width, buffer.height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.to_rgb8())?;

    Ok(())
}

/// Write a strip to a PNG file.
pub fn write_rgb(buffer: &StripBuffer, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    // No file is created for an empty strip
    check_dimensions(buffer)?;

    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_rgb_to_writer(buffer, writer, config)
}

/// Encode a strip into memory.
pub fn write_rgb_to_vec(buffer: &StripBuffer, config: &PngConfig) -> Result<Vec<u8>, PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(buffer, &mut data, config)?;
    Ok(data)
}

/// Output path for an input file: same stem with a `.png` extension, in
/// `out_dir` if given, otherwise beside the input.
pub fn png_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let renamed = input.with_extension("png");
    match (out_dir, renamed.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => renamed,
    }
}
