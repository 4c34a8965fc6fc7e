//! Strip layout: one vertical band per row, left to right.

use sonority_core::{FourVoiceBand, ThreeVoiceLabel, VoicePair};

use crate::buffer::{Fill, Rect, StripBuffer};
use crate::config::RenderConfig;
use crate::RenderError;

/// Rectangles painted for the 3-voice band at `index`.
///
/// The image is split into three lanes. Full sonorities cover all of them;
/// S-A covers the top two, A-T the bottom two, and S-T the top and bottom
/// lanes with the rest lane between them left white.
pub fn three_voice_rects(label: &ThreeVoiceLabel, index: u32, config: &RenderConfig) -> Vec<Rect> {
    let x0 = index * config.slot_width();
    let x1 = x0 + config.band_width;
    let height = config.three_voice_height;
    let lane = height / 3;

    match label {
        ThreeVoiceLabel::Full(_) => vec![Rect::new(x0, 0, x1, height)],
        ThreeVoiceLabel::Partial { pair, .. } => match pair {
            VoicePair::SopranoAlto => vec![Rect::new(x0, 0, x1, 2 * lane)],
            VoicePair::AltoTenor => vec![Rect::new(x0, lane, x1, height)],
            VoicePair::SopranoTenor => vec![
                Rect::new(x0, 0, x1, lane),
                Rect::new(x0, 2 * lane, x1, height),
            ],
        },
    }
}

/// Rectangles painted for the 4-voice band at `index`: one lane per sounding voice.
pub fn four_voice_rects(band: &FourVoiceBand, index: u32, config: &RenderConfig) -> Vec<Rect> {
    let x0 = index * config.slot_width();
    let x1 = x0 + config.band_width;
    let lane = config.four_voice_height / 4;

    band.texture
        .voices()
        .iter()
        .zip(0u32..)
        .filter(|(voice, _)| voice.is_note())
        .map(|(_, j)| Rect::new(x0, j * lane, x1, (j + 1) * lane))
        .collect()
}

/// Total width of a strip of `bands` bands, or an error if it does not fit
/// in `u32`. Band offsets within a strip of that width cannot overflow.
pub fn strip_width(bands: usize, config: &RenderConfig) -> Result<u32, RenderError> {
    u32::try_from(bands)
        .ok()
        .zip(config.band_width.checked_add(config.separator_width))
        .and_then(|(n, slot)| n.checked_mul(slot))
        .ok_or(RenderError::TooWide { bands })
}

fn blank_strip(bands: usize, height: u32, config: &RenderConfig) -> Result<StripBuffer, RenderError> {
    let width = strip_width(bands, config)?;
    Ok(StripBuffer::new(width, height, config.palette.rest))
}

fn draw_separator(buffer: &mut StripBuffer, index: u32, config: &RenderConfig) {
    let x0 = index * config.slot_width() + config.band_width;
    buffer.fill_rect(
        Rect::new(x0, 0, x0 + config.separator_width, buffer.height),
        Fill::Solid(config.palette.ink),
    );
}

/// Render 3-voice labels in row order.
pub fn render_three_voice(
    labels: &[ThreeVoiceLabel],
    config: &RenderConfig,
) -> Result<StripBuffer, RenderError> {
    let mut buffer = blank_strip(labels.len(), config.three_voice_height, config)?;

    for (label, i) in labels.iter().zip(0u32..) {
        let fill = config.fill_for(label.category());
        for rect in three_voice_rects(label, i, config) {
            buffer.fill_rect(rect, fill);
        }
        draw_separator(&mut buffer, i, config);
    }

    Ok(buffer)
}

/// Render 4-voice bands in row order.
pub fn render_four_voice(
    bands: &[FourVoiceBand],
    config: &RenderConfig,
) -> Result<StripBuffer, RenderError> {
    let mut buffer = blank_strip(bands.len(), config.four_voice_height, config)?;

    for (band, i) in bands.iter().zip(0u32..) {
        let fill = config.fill_for(band.category);
        for rect in four_voice_rects(band, i, config) {
            buffer.fill_rect(rect, fill);
        }
        draw_separator(&mut buffer, i, config);
    }

    Ok(buffer)
}
