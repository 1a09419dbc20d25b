use std::sync::Arc;

use crate::foundation::error::{StitchError, StitchResult};

/// A batch of equally-sized frames in (batch, height, width, channel) order.
///
/// Samples are `f32`, conventionally in `[0, 1]`, stored row-major with
/// interleaved channels. Channel count is typically 3 (RGB) or 4 (RGBA).
///
/// Pixel data lives behind an `Arc`, so cloning a batch shares the buffer
/// instead of copying it. Every transforming operation builds a fresh
/// buffer; nothing ever writes through a shared one.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBatch {
    batch: usize,
    height: usize,
    width: usize,
    channels: usize,
    data: Arc<Vec<f32>>,
}

impl FrameBatch {
    /// Wrap an interleaved sample vector as a frame batch.
    ///
    /// `data.len()` must equal `batch * height * width * channels`.
    pub fn from_vec(
        batch: usize,
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> StitchResult<Self> {
        let expected = batch
            .checked_mul(height)
            .and_then(|v| v.checked_mul(width))
            .and_then(|v| v.checked_mul(channels))
            .ok_or_else(|| StitchError::validation("frame batch size overflows usize"))?;
        if data.len() != expected {
            return Err(StitchError::validation(format!(
                "expected {expected} samples for a {batch}x{height}x{width}x{channels} batch, got {}",
                data.len()
            )));
        }
        Ok(Self {
            batch,
            height,
            width,
            channels,
            data: Arc::new(data),
        })
    }

    /// Build a batch with every sample set to `value`.
    pub fn filled(batch: usize, height: usize, width: usize, channels: usize, value: f32) -> Self {
        Self {
            batch,
            height,
            width,
            channels,
            data: Arc::new(vec![value; batch * height * width * channels]),
        }
    }

    /// Number of frames on the batch axis.
    pub fn batch(&self) -> usize {
        self.batch
    }

    /// Frame height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Frame width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Samples per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// All samples, batch-major.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Samples of one batch element.
    ///
    /// Panics when `index` is out of range, like slice indexing.
    pub fn frame(&self, index: usize) -> &[f32] {
        let len = self.frame_len();
        &self.data[index * len..(index + 1) * len]
    }

    /// One sample, addressed as (batch, row, column, channel).
    ///
    /// Panics when any coordinate is out of range, like slice indexing.
    pub fn at(&self, b: usize, y: usize, x: usize, c: usize) -> f32 {
        assert!(b < self.batch && y < self.height && x < self.width && c < self.channels);
        self.data[((b * self.height + y) * self.width + x) * self.channels + c]
    }

    /// `true` when both batches share one pixel buffer.
    pub fn shares_buffer(&self, other: &FrameBatch) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    fn frame_len(&self) -> usize {
        self.height * self.width * self.channels
    }

    fn row(&self, b: usize, y: usize) -> &[f32] {
        let stride = self.width * self.channels;
        let start = (b * self.height + y) * stride;
        &self.data[start..start + stride]
    }

    /// Grow the batch axis to `target_batch` by appending copies of the
    /// final frame. Existing frames are never resampled.
    ///
    /// Growing to the current size returns a buffer-sharing clone.
    pub fn repeat_last_to(&self, target_batch: usize) -> StitchResult<Self> {
        if target_batch < self.batch {
            return Err(StitchError::validation(format!(
                "cannot shrink batch from {} to {target_batch}",
                self.batch
            )));
        }
        if target_batch == self.batch {
            return Ok(self.clone());
        }
        if self.batch == 0 {
            return Err(StitchError::validation(
                "cannot repeat the last frame of an empty batch",
            ));
        }

        let len = self.frame_len();
        let mut data = Vec::with_capacity(target_batch * len);
        data.extend_from_slice(&self.data);
        let last = &self.data[(self.batch - 1) * len..self.batch * len];
        for _ in self.batch..target_batch {
            data.extend_from_slice(last);
        }
        Ok(Self {
            batch: target_batch,
            height: self.height,
            width: self.width,
            channels: self.channels,
            data: Arc::new(data),
        })
    }

    /// Widen every pixel to `target_channels` by appending channels filled
    /// with `fill` after the existing ones.
    ///
    /// Widening to the current count returns a buffer-sharing clone.
    pub fn pad_channels_to(&self, target_channels: usize, fill: f32) -> StitchResult<Self> {
        if target_channels < self.channels {
            return Err(StitchError::validation(format!(
                "cannot drop channels ({} to {target_channels})",
                self.channels
            )));
        }
        if target_channels == self.channels {
            return Ok(self.clone());
        }

        let pixels = self.batch * self.height * self.width;
        let mut data = Vec::with_capacity(pixels * target_channels);
        if self.channels == 0 {
            data.resize(pixels * target_channels, fill);
        } else {
            let extra = target_channels - self.channels;
            for px in self.data.chunks_exact(self.channels) {
                data.extend_from_slice(px);
                data.extend(std::iter::repeat_n(fill, extra));
            }
        }
        Ok(Self {
            batch: self.batch,
            height: self.height,
            width: self.width,
            channels: target_channels,
            data: Arc::new(data),
        })
    }

    /// Copy out the spatial window starting at (`top`, `left`) with the
    /// given dimensions, across the whole batch.
    pub fn crop(&self, top: usize, left: usize, height: usize, width: usize) -> StitchResult<Self> {
        let bottom = top.checked_add(height);
        let right = left.checked_add(width);
        if bottom.is_none_or(|v| v > self.height) || right.is_none_or(|v| v > self.width) {
            return Err(StitchError::shape(format!(
                "crop window {height}x{width}+{top}+{left} exceeds frame {}x{}",
                self.height, self.width
            )));
        }
        if top == 0 && left == 0 && height == self.height && width == self.width {
            return Ok(self.clone());
        }

        let mut data = Vec::with_capacity(self.batch * height * width * self.channels);
        for b in 0..self.batch {
            for y in top..top + height {
                let row = self.row(b, y);
                let start = left * self.channels;
                data.extend_from_slice(&row[start..start + width * self.channels]);
            }
        }
        Ok(Self {
            batch: self.batch,
            height,
            width,
            channels: self.channels,
            data: Arc::new(data),
        })
    }

    /// Concatenate `parts` along the width axis, in order.
    ///
    /// Every part must agree on batch size, height, and channel count;
    /// the first disagreement is reported as a [`StitchError::Shape`].
    /// Callers that want matching shapes must reconcile them beforehand;
    /// this primitive never resizes or pads.
    pub fn concat_width(parts: &[&FrameBatch]) -> StitchResult<FrameBatch> {
        let Some(first) = parts.first() else {
            return Err(StitchError::validation(
                "concat_width needs at least one input",
            ));
        };
        if parts.len() == 1 {
            return Ok((*first).clone());
        }

        for (i, part) in parts.iter().enumerate().skip(1) {
            if part.batch != first.batch
                || part.height != first.height
                || part.channels != first.channels
            {
                return Err(StitchError::shape(format!(
                    "input {i} is {}x{}x{}x{}, expected batch {}, height {}, channels {}",
                    part.batch,
                    part.height,
                    part.width,
                    part.channels,
                    first.batch,
                    first.height,
                    first.channels
                )));
            }
        }

        let total_width: usize = parts.iter().map(|p| p.width).sum();
        let mut data = Vec::with_capacity(first.batch * first.height * total_width * first.channels);
        for b in 0..first.batch {
            for y in 0..first.height {
                for part in parts {
                    data.extend_from_slice(part.row(b, y));
                }
            }
        }
        Ok(FrameBatch {
            batch: first.batch,
            height: first.height,
            width: total_width,
            channels: first.channels,
            data: Arc::new(data),
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/frame.rs"]
mod tests;
