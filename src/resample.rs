use rayon::prelude::*;

use crate::foundation::error::StitchResult;
use crate::foundation::math::{lanczos3, triangle};
use crate::frame::FrameBatch;

/// Resampling filter used by [`resize_batch`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Pick the closest source pixel.
    Nearest,
    /// Triangle-weighted average of the surrounding pixels.
    Bilinear,
    /// Lanczos-3 windowed sinc, the high-quality default.
    #[default]
    Lanczos,
}

impl Filter {
    fn support(self) -> f32 {
        match self {
            Filter::Nearest => 0.0,
            Filter::Bilinear => 1.0,
            Filter::Lanczos => 3.0,
        }
    }

    fn eval(self, x: f32) -> f32 {
        match self {
            Filter::Nearest => {
                if x.abs() <= 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            Filter::Bilinear => triangle(x),
            Filter::Lanczos => lanczos3(x),
        }
    }
}

/// How the source rectangle maps onto the target rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleFit {
    /// Resize to exactly the requested dimensions; aspect ratio may change.
    #[default]
    Disabled,
    /// Center-crop the source to the target aspect ratio first, then resize.
    Center,
}

/// Weights one output coordinate takes from a contiguous run of source
/// coordinates starting at `start`.
struct Taps {
    start: usize,
    weights: Vec<f32>,
}

fn build_taps(src_len: usize, dst_len: usize, filter: Filter) -> Vec<Taps> {
    let scale = src_len as f32 / dst_len as f32;

    if filter == Filter::Nearest {
        return (0..dst_len)
            .map(|i| {
                let src = (((i as f32 + 0.5) * scale) as usize).min(src_len - 1);
                Taps {
                    start: src,
                    weights: vec![1.0],
                }
            })
            .collect();
    }

    // Downscaling widens the kernel by the scale ratio.
    let filter_scale = scale.max(1.0);
    let support = filter.support() * filter_scale;

    (0..dst_len)
        .map(|i| {
            let center = (i as f32 + 0.5) * scale;
            let start = ((center - support + 0.5).floor().max(0.0)) as usize;
            let end = (((center + support + 0.5).floor()) as usize).min(src_len);

            let mut weights: Vec<f32> = (start..end)
                .map(|j| filter.eval((j as f32 + 0.5 - center) / filter_scale))
                .collect();
            let sum: f32 = weights.iter().sum();
            if sum != 0.0 {
                for w in &mut weights {
                    *w /= sum;
                }
                Taps { start, weights }
            } else {
                // All taps landed on kernel zeros; fall back to the closest pixel.
                Taps {
                    start: (center as usize).min(src_len - 1),
                    weights: vec![1.0],
                }
            }
        })
        .collect()
}

fn horizontal_pass(src: &[f32], src_w: usize, rows: usize, c: usize, taps: &[Taps]) -> Vec<f32> {
    let dst_w = taps.len();
    let mut dst = vec![0.0f32; rows * dst_w * c];
    dst.par_chunks_mut(dst_w * c)
        .enumerate()
        .for_each(|(y, out_row)| {
            let src_row = &src[y * src_w * c..(y + 1) * src_w * c];
            for (x, tap) in taps.iter().enumerate() {
                let out_px = &mut out_row[x * c..(x + 1) * c];
                for (k, &w) in tap.weights.iter().enumerate() {
                    let base = (tap.start + k) * c;
                    for ch in 0..c {
                        out_px[ch] += w * src_row[base + ch];
                    }
                }
            }
        });
    dst
}

fn vertical_pass(src: &[f32], w: usize, c: usize, taps: &[Taps]) -> Vec<f32> {
    let stride = w * c;
    let mut dst = vec![0.0f32; taps.len() * stride];
    dst.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, out_row)| {
            let tap = &taps[y];
            for (k, &wt) in tap.weights.iter().enumerate() {
                let src_row = &src[(tap.start + k) * stride..(tap.start + k + 1) * stride];
                for (o, s) in out_row.iter_mut().zip(src_row) {
                    *o += wt * s;
                }
            }
        });
    dst
}

/// Resize every frame of `src` to exactly `target_width` x `target_height`.
///
/// Each batch element is resampled independently with a separable two-pass
/// kernel; channel count is preserved and weights are normalized, so
/// constant images stay constant. Requesting the source's own dimensions
/// with [`ScaleFit::Disabled`] returns a buffer-sharing clone. Degenerate
/// sizes (any zero dimension on either side) yield a zero-filled tensor of
/// the requested shape rather than an error.
pub fn resize_batch(
    src: &FrameBatch,
    target_width: usize,
    target_height: usize,
    filter: Filter,
    fit: ScaleFit,
) -> StitchResult<FrameBatch> {
    let src = match fit {
        ScaleFit::Disabled => src.clone(),
        ScaleFit::Center => center_crop(src, target_width, target_height)?,
    };

    if src.width() == target_width && src.height() == target_height {
        return Ok(src);
    }
    if src.batch() == 0
        || src.channels() == 0
        || src.height() == 0
        || src.width() == 0
        || target_width == 0
        || target_height == 0
    {
        return Ok(FrameBatch::filled(
            src.batch(),
            target_height,
            target_width,
            src.channels(),
            0.0,
        ));
    }

    let htaps = build_taps(src.width(), target_width, filter);
    let vtaps = build_taps(src.height(), target_height, filter);

    let channels = src.channels();
    let mut data = Vec::with_capacity(src.batch() * target_height * target_width * channels);
    for b in 0..src.batch() {
        let mid = horizontal_pass(src.frame(b), src.width(), src.height(), channels, &htaps);
        data.extend_from_slice(&vertical_pass(&mid, target_width, channels, &vtaps));
    }
    FrameBatch::from_vec(src.batch(), target_height, target_width, channels, data)
}

/// Crop the source symmetrically so its aspect ratio matches the target's.
fn center_crop(
    src: &FrameBatch,
    target_width: usize,
    target_height: usize,
) -> StitchResult<FrameBatch> {
    if target_width == 0 || target_height == 0 || src.width() == 0 || src.height() == 0 {
        return Ok(src.clone());
    }

    let old_aspect = src.width() as f64 / src.height() as f64;
    let new_aspect = target_width as f64 / target_height as f64;
    if old_aspect > new_aspect {
        let x = ((src.width() as f64 * (1.0 - new_aspect / old_aspect)) / 2.0).round() as usize;
        src.crop(0, x, src.height(), src.width() - 2 * x)
    } else if old_aspect < new_aspect {
        let y = ((src.height() as f64 * (1.0 - old_aspect / new_aspect)) / 2.0).round() as usize;
        src.crop(y, 0, src.height() - 2 * y, src.width())
    } else {
        Ok(src.clone())
    }
}

#[cfg(test)]
#[path = "../tests/unit/resample.rs"]
mod tests;
