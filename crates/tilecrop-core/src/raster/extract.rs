//! Rasterization of editor regions against the static source image.
//!
//! The editor container shows the whole image stretched to its bounds, so a
//! region maps to source pixels by scaling each axis on its own:
//!
//! ```text
//! pixel_x = region.left / container.width * image.width
//! ```
//!
//! Values are rounded to the nearest pixel. A region pushed past the edge
//! by the minimum-size floor is trimmed to the image.

use crate::decode::DecodedImage;
use crate::geometry::{LinearMap, Rect, Size};
use crate::region::CropRegion;

use super::{copy_pixels, CropError, CroppedRegion, PixelRect};

/// Map a container rectangle to a source-pixel rectangle.
///
/// Returns `None` when the container is invalid or the result covers no
/// pixels after trimming to the image.
pub fn pixel_rect(rect: Rect, container: Size, image_width: u32, image_height: u32) -> Option<PixelRect> {
    if !container.is_valid() || !rect.is_finite() {
        return None;
    }

    let image = Size::new(image_width as f64, image_height as f64);
    let mapped = LinearMap::new(container.to_rect(), image.to_rect())?.map_rect(rect);

    let x0 = mapped.left.round().max(0.0);
    let y0 = mapped.top.round().max(0.0);
    let x1 = (mapped.left.round() + mapped.width.round()).min(image.width);
    let y1 = (mapped.top.round() + mapped.height.round()).min(image.height);

    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(PixelRect {
        x: x0 as u32,
        y: y0 as u32,
        width: (x1 - x0) as u32,
        height: (y1 - y0) as u32,
    })
}

/// Crop `region` out of `image`.
///
/// # Errors
///
/// - `CropError::InvalidContainer` if the container is zero, negative or
///   non-finite
/// - `CropError::EmptyImage` if the image has no pixels
/// - `CropError::EmptyRegion` if the region maps to no whole pixel
pub fn extract(region: &CropRegion, container: Size, image: &DecodedImage) -> Result<CroppedRegion, CropError> {
    if !container.is_valid() {
        return Err(CropError::InvalidContainer {
            width: container.width,
            height: container.height,
        });
    }
    if image.is_empty() || !image.is_consistent() {
        return Err(CropError::EmptyImage);
    }

    let rect = pixel_rect(region.rect(), container, image.width, image.height)
        .ok_or(CropError::EmptyRegion { role: region.role() })?;

    tracing::debug!(role = %region.role(), ?rect, "rasterizing region");

    Ok(CroppedRegion {
        role: region.role(),
        image: copy_pixels(image, rect),
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
