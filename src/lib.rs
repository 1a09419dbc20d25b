//! Framestitch composites an ordered list of frame batches side by side.
//!
//! The core operation is [`stitch`]: given an ordered list of images as
//! [`FrameBatch`] tensors, it reconciles their shapes and joins them
//! left to right into a single output tensor.
//!
//! # Pipeline overview
//!
//! 1. **Batch**: every input grows to the largest batch size by repeating
//!    its final frame.
//! 2. **Size** (optional): later images are resized to the first image's
//!    height with Lanczos resampling, each preserving its own aspect ratio.
//! 3. **Channels**: narrower images gain 1.0-filled channels (opaque alpha).
//! 4. **Concat**: the reconciled list is joined along the width axis.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure core**: stitching never mutates its inputs; untouched images
//!   pass through stages by reference (shared buffers), and every
//!   transformation allocates a fresh tensor.
//! - **No IO in the core**: files exist only behind [`decode_image`] /
//!   [`frame_rgba8`] and the `framestitch` binary.
//! - **Fail fast on shape**: a height mismatch that survives to the concat
//!   stage is reported as-is, never silently corrected.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod frame;
mod resample;
mod stitch;

pub use assets::decode::{decode_image, frame_rgba8};
pub use foundation::error::{StitchError, StitchResult};
pub use frame::FrameBatch;
pub use resample::{Filter, ScaleFit, resize_batch};
pub use stitch::{MAX_IMAGES, MIN_IMAGES, StitchOptions, collect_images, stitch, stitch_slots};
