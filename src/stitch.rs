use std::borrow::Cow;

use crate::foundation::error::{StitchError, StitchResult};
use crate::frame::FrameBatch;
use crate::resample::{Filter, ScaleFit, resize_batch};

/// Most images a single stitch call will consider.
pub const MAX_IMAGES: usize = 10;

/// Fewest images a host should offer; below this the call degenerates to
/// the identity case.
pub const MIN_IMAGES: usize = 2;

/// Options controlling the stitch pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StitchOptions {
    /// Normalize every image to the first image's height before
    /// concatenation, preserving each image's own aspect ratio.
    ///
    /// When `false`, inputs keep their original sizes and a height
    /// mismatch surfaces as a shape error at the concat stage.
    #[serde(default = "default_match_image_size")]
    pub match_image_size: bool,
}

impl Default for StitchOptions {
    fn default() -> Self {
        Self {
            match_image_size: true,
        }
    }
}

fn default_match_image_size() -> bool {
    true
}

/// Collect the ordered image list from the mandatory first image plus
/// optional numbered slots.
///
/// Slots `2..=num_images` are taken in order, and collection stops at the
/// first absent slot: later-present slots after a gap are ignored by this
/// truncation rule, not treated as an error. At most [`MAX_IMAGES`] images
/// are collected regardless of `num_images`.
pub fn collect_images<'a>(
    first: &'a FrameBatch,
    slots: &[Option<&'a FrameBatch>],
    num_images: usize,
) -> Vec<&'a FrameBatch> {
    let mut images = vec![first];
    let wanted = num_images.min(MAX_IMAGES).saturating_sub(1);
    for slot in slots.iter().take(wanted).copied() {
        match slot {
            Some(image) => images.push(image),
            None => break,
        }
    }
    images
}

/// Stitch an ordered list of images side by side, left to right.
///
/// Mismatched inputs are reconciled in four ordered stages: batch sizes
/// grow to the largest by repeating each image's final frame; with
/// [`StitchOptions::match_image_size`] every later image is Lanczos-resized
/// to the first image's height at its own aspect ratio; narrower images
/// are padded to the widest channel count with 1.0 (opaque alpha); the
/// results are concatenated along the width axis.
///
/// A single image is returned unchanged (identity case). An empty list is
/// a validation error. Inputs are never mutated; untouched images flow
/// through stages by reference.
#[tracing::instrument(skip(images), fields(count = images.len()))]
pub fn stitch(images: &[&FrameBatch], options: StitchOptions) -> StitchResult<FrameBatch> {
    let Some(&first) = images.first() else {
        return Err(StitchError::validation("stitch needs at least one image"));
    };
    if images.len() < MIN_IMAGES {
        return Ok(first.clone());
    }

    // Stage 1: batch reconciliation.
    let max_batch = images.iter().map(|img| img.batch()).max().unwrap_or(0);
    let mut work: Vec<Cow<'_, FrameBatch>> = Vec::with_capacity(images.len());
    for &img in images {
        work.push(if img.batch() < max_batch {
            Cow::Owned(img.repeat_last_to(max_batch)?)
        } else {
            Cow::Borrowed(img)
        });
    }

    // Stage 2: optional resize to the first image's height.
    if options.match_image_size {
        let target_height = work[0].height();
        for item in work.iter_mut().skip(1) {
            let (height, width) = (item.height(), item.width());
            if height == 0 {
                // Aspect ratio is undefined; let the concat stage report it.
                continue;
            }
            let target_width =
                (target_height as f64 * width as f64 / height as f64).round() as usize;
            *item = Cow::Owned(resize_batch(
                item.as_ref(),
                target_width,
                target_height,
                Filter::Lanczos,
                ScaleFit::Disabled,
            )?);
        }
    }

    // Stage 3: channel reconciliation.
    let max_channels = work.iter().map(|img| img.channels()).max().unwrap_or(0);
    for item in work.iter_mut() {
        if item.channels() < max_channels {
            *item = Cow::Owned(item.pad_channels_to(max_channels, 1.0)?);
        }
    }

    tracing::debug!(batch = max_batch, channels = max_channels, "reconciled inputs");

    // Stage 4: horizontal concatenation.
    let parts: Vec<&FrameBatch> = work.iter().map(|item| item.as_ref()).collect();
    FrameBatch::concat_width(&parts)
}

/// Collect slot inputs and stitch them in one call.
///
/// This is the call shape a host uses directly: the mandatory first image,
/// the optional slots in order, and the number of slots to consider.
pub fn stitch_slots(
    first: &FrameBatch,
    slots: &[Option<&FrameBatch>],
    num_images: usize,
    options: StitchOptions,
) -> StitchResult<FrameBatch> {
    let images = collect_images(first, slots, num_images);
    stitch(&images, options)
}

#[cfg(test)]
#[path = "../tests/unit/stitch.rs"]
mod tests;
