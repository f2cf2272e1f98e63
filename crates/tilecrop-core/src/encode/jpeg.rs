//! JPEG encoding for crop submission.
//!
//! Cropped regions are sent to the recognition service as JPEG. The
//! front end historically used a quality of 0.8, which is kept as the
//! default here.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::decode::DecodedImage;

/// Quality used for submitted crops unless configured otherwise.
pub const DEFAULT_QUALITY: u8 = 80;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality, clamped to 1-100
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a decoded image to JPEG bytes.
pub fn encode_image(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    encode_jpeg(&image.pixels, image.width, image.height, quality)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_jpeg_markers(bytes: &[u8]) {
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let pixels = vec![128u8; 100 * 100 * 3];
        let jpeg = encode_jpeg(&pixels, 100, 100, DEFAULT_QUALITY).unwrap();
        assert_jpeg_markers(&jpeg);
    }

    #[test]
    fn test_encode_image() {
        let image = DecodedImage::new(64, 20, vec![200u8; 64 * 20 * 3]);
        let jpeg = encode_image(&image, 80).unwrap();
        assert_jpeg_markers(&jpeg);

        let decoded = crate::decode::decode_image(&jpeg).unwrap();
        assert_eq!((decoded.width, decoded.height), (64, 20));
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let pixels = vec![128u8; 16 * 16 * 3];
        assert!(encode_jpeg(&pixels, 16, 16, 0).is_ok());
        assert!(encode_jpeg(&pixels, 16, 16, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data() {
        let pixels = vec![128u8; 10];
        match encode_jpeg(&pixels, 10, 10, 80) {
            Err(EncodeError::InvalidPixelData { expected, actual }) => {
                assert_eq!(expected, 300);
                assert_eq!(actual, 10);
            }
            other => panic!("Expected InvalidPixelData, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_jpeg_zero_dimensions() {
        assert!(matches!(
            encode_jpeg(&[], 0, 10, 80),
            Err(EncodeError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(matches!(
            encode_jpeg(&[], 10, 0, 80),
            Err(EncodeError::InvalidDimensions { width: 10, height: 0 })
        ));
    }

    #[test]
    fn test_encode_jpeg_quality_affects_size() {
        // Noisy content so quality actually matters
        let pixels: Vec<u8> = (0..64 * 64 * 3).map(|i| ((i * 7919) % 251) as u8).collect();
        let low = encode_jpeg(&pixels, 64, 64, 10).unwrap();
        let high = encode_jpeg(&pixels, 64, 64, 95).unwrap();
        assert!(high.len() > low.len());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
