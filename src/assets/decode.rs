use anyhow::Context;

use crate::foundation::error::{StitchError, StitchResult};
use crate::frame::FrameBatch;

/// Decode encoded image bytes into a single-frame [`FrameBatch`].
///
/// Sources carrying an alpha channel decode to 4 channels, opaque sources
/// to 3; 8-bit samples map to `f32` in `[0, 1]`.
pub fn decode_image(bytes: &[u8]) -> StitchResult<FrameBatch> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let (width, height) = (dyn_img.width() as usize, dyn_img.height() as usize);

    if dyn_img.color().has_alpha() {
        let rgba = dyn_img.to_rgba8();
        let data = rgba.into_raw().into_iter().map(sample_to_f32).collect();
        FrameBatch::from_vec(1, height, width, 4, data)
    } else {
        let rgb = dyn_img.to_rgb8();
        let data = rgb.into_raw().into_iter().map(sample_to_f32).collect();
        FrameBatch::from_vec(1, height, width, 3, data)
    }
}

/// Quantize one batch element to interleaved RGBA8 for encoding.
///
/// Samples are clamped to `[0, 1]`; 3-channel frames get an opaque alpha.
pub fn frame_rgba8(frames: &FrameBatch, index: usize) -> StitchResult<Vec<u8>> {
    if index >= frames.batch() {
        return Err(StitchError::validation(format!(
            "batch index {index} out of range ({} frames)",
            frames.batch()
        )));
    }
    let channels = frames.channels();
    if channels != 3 && channels != 4 {
        return Err(StitchError::encode(format!(
            "cannot encode a {channels}-channel frame as RGBA8"
        )));
    }

    let mut out = Vec::with_capacity(frames.height() * frames.width() * 4);
    for px in frames.frame(index).chunks_exact(channels) {
        out.push(quantize(px[0]));
        out.push(quantize(px[1]));
        out.push(quantize(px[2]));
        out.push(if channels == 4 { quantize(px[3]) } else { 255 });
    }
    Ok(out)
}

fn sample_to_f32(v: u8) -> f32 {
    f32::from(v) / 255.0
}

fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
