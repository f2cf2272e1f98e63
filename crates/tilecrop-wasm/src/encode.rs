//! Image encoding WASM bindings.
//!
//! Crops are submitted as JPEG. The editor's `crop_jpeg` covers the usual
//! path; these functions encode buffers the page already holds, such as the
//! quick-split crops.
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg, encode_jpeg_from_image } from '@tilecrop/wasm';
//!
//! const jpegBytes = encode_jpeg(pixels, width, height, 80);
//! const fromImage = encode_jpeg_from_image(image);
//! ```

use crate::types::{to_js_error, JsDecodedImage};
use tilecrop_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data as a `Uint8Array` (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100), 80 when omitted
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: Option<u8>) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality.unwrap_or(encode::DEFAULT_QUALITY)).map_err(to_js_error)
}

/// Encode a JsDecodedImage to JPEG bytes.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsDecodedImage, quality: Option<u8>) -> Result<Vec<u8>, JsValue> {
    encode::encode_image(&image.to_decoded(), quality.unwrap_or(encode::DEFAULT_QUALITY)).map_err(to_js_error)
}
