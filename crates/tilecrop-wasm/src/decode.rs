//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, JsCropEditor } from '@tilecrop/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::{to_js_error, JsDecodedImage};
use tilecrop_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a JPEG or PNG photo from bytes.
///
/// The format is detected from the content and EXIF orientation is applied,
/// so the result is upright the way the user saw it when cropping.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a supported image format
/// - The file is corrupted or truncated
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(to_js_error)
}

/// EXIF orientation tag of a photo (1-8), 1 when absent.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}
