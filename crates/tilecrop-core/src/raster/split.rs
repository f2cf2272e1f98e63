//! Fixed-band split for the camera capture flow.
//!
//! When the user shoots through the AR guides, the frame is split without
//! opening the editor: the dora indicators are taken from the top band and
//! the hand from the bottom band, both full width.

use crate::decode::DecodedImage;
use crate::region::RegionRole;

use super::{copy_pixels, CropError, CroppedRegion, PixelRect};

/// Fraction of the frame height taken for the dora band, from the top.
pub const DORA_BAND_HEIGHT: f64 = 0.2;

/// Fraction of the frame height where the hand band starts. It runs to the
/// bottom edge.
pub const HAND_BAND_TOP: f64 = 0.7;

/// Split a captured frame into `[hand, dora]` crops.
pub fn split_capture(image: &DecodedImage) -> Result<[CroppedRegion; 2], CropError> {
    if image.is_empty() || !image.is_consistent() {
        return Err(CropError::EmptyImage);
    }

    let height = image.height as f64;

    let dora_rows = ((height * DORA_BAND_HEIGHT).round() as u32).clamp(1, image.height);
    let hand_top = ((height * HAND_BAND_TOP).round() as u32).min(image.height - 1);

    let dora = PixelRect {
        x: 0,
        y: 0,
        width: image.width,
        height: dora_rows,
    };
    let hand = PixelRect {
        x: 0,
        y: hand_top,
        width: image.width,
        height: image.height - hand_top,
    };

    tracing::debug!(?hand, ?dora, "split captured frame");

    Ok([
        CroppedRegion {
            role: RegionRole::Hand,
            image: copy_pixels(image, hand),
        },
        CroppedRegion {
            role: RegionRole::DoraIndicator,
            image: copy_pixels(image, dora),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::tests::test_image;

    #[test]
    fn test_split_100x100() {
        let img = test_image(100, 100);
        let [hand, dora] = split_capture(&img).unwrap();

        assert_eq!(dora.role, RegionRole::DoraIndicator);
        assert_eq!((dora.image.width, dora.image.height), (100, 20));
        assert_eq!(dora.image.pixels[0], 0);

        assert_eq!(hand.role, RegionRole::Hand);
        assert_eq!((hand.image.width, hand.image.height), (100, 30));
        // First hand pixel is (0, 70) -> 7000 % 256
        assert_eq!(hand.image.pixels[0], (7000 % 256) as u8);
    }

    #[test]
    fn test_split_720p_frame() {
        let img = DecodedImage::new(1280, 720, vec![0u8; 1280 * 720 * 3]);
        let [hand, dora] = split_capture(&img).unwrap();
        assert_eq!(dora.image.height, 144);
        assert_eq!(hand.image.height, 216);
    }

    #[test]
    fn test_split_tiny_frame_has_rows() {
        let img = test_image(3, 1);
        let [hand, dora] = split_capture(&img).unwrap();
        assert_eq!(dora.image.height, 1);
        assert_eq!(hand.image.height, 1);
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(
            split_capture(&DecodedImage::new(0, 0, vec![])).unwrap_err(),
            CropError::EmptyImage
        );
    }
}
