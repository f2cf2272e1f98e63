//! Turning committed crop regions into pixel buffers.
//!
//! Two paths produce crops:
//!
//! - [`extract`] maps an editor region from container units to source
//!   pixels. The static editor frames the source image exactly, so this is a
//!   plain per-axis scale with no letterbox offset.
//! - [`split_capture`] cuts a camera frame into fixed bands without any
//!   editing, for the quick capture flow.
//!
//! Both hand back a [`CroppedRegion`], the `{role, pixels}` pair consumed by
//! the submission layer.

mod extract;
mod split;

use serde::Serialize;
use thiserror::Error;

use crate::decode::DecodedImage;
use crate::encode::{encode_image, EncodeError};
use crate::region::RegionRole;

pub use extract::{extract, pixel_rect};
pub use split::{split_capture, DORA_BAND_HEIGHT, HAND_BAND_TOP};

/// Errors produced while rasterizing a region.
#[derive(Debug, Error, PartialEq)]
pub enum CropError {
    /// The container has no usable size to scale from
    #[error("Invalid container size: {width}x{height}")]
    InvalidContainer { width: f64, height: f64 },

    /// The source image has no pixels or an inconsistent buffer
    #[error("Source image is empty")]
    EmptyImage,

    /// The region covers no whole pixel of the source
    #[error("Region '{role}' does not cover any source pixels")]
    EmptyRegion { role: RegionRole },
}

/// Integer rectangle in source-image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A cropped pixel buffer tagged with the region it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CroppedRegion {
    pub role: RegionRole,
    pub image: DecodedImage,
}

impl CroppedRegion {
    /// Encode the crop for submission.
    pub fn to_jpeg(&self, quality: u8) -> Result<Vec<u8>, EncodeError> {
        encode_image(&self.image, quality)
    }
}

/// Copy `rect` out of `image`. `rect` must lie inside the image.
fn copy_pixels(image: &DecodedImage, rect: PixelRect) -> DecodedImage {
    let channels = DecodedImage::CHANNELS;
    let src_stride = image.stride();
    let row_len = rect.width as usize * channels;

    let mut output = Vec::with_capacity(row_len * rect.height as usize);

    // Copy pixel data row by row
    for y in rect.y..rect.y + rect.height {
        let start = y as usize * src_stride + rect.x as usize * channels;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    DecodedImage::new(rect.width, rect.height, output)
}
