//! WASM-compatible wrapper types and argument conversion.
//!
//! Pixel buffers cross the boundary as [`JsDecodedImage`] and
//! [`JsCroppedRegion`]. Geometry and configuration cross as plain JS objects
//! through `serde-wasm-bindgen`.

use serde::Serialize;
use tilecrop_core::decode::DecodedImage;
use tilecrop_core::encode;
use tilecrop_core::{CroppedRegion, EditorConfig, Handle, RegionRole};
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. Keep the image on the WASM side while
/// the editor is open and only pull pixels out for display.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array. This copies the buffer.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core DecodedImage. Clones the pixel data.
    ///
    /// The buffer length is not checked here; core functions reject
    /// inconsistent images with an error.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// One cropped region, ready for display or submission.
#[wasm_bindgen]
pub struct JsCroppedRegion {
    role: RegionRole,
    image: DecodedImage,
}

#[wasm_bindgen]
impl JsCroppedRegion {
    /// `"hand"` or `"dora"`
    #[wasm_bindgen(getter)]
    pub fn role(&self) -> String {
        self.role.as_tag().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.image.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.image.height
    }

    /// RGB pixel data of the crop. This copies the buffer.
    pub fn pixels(&self) -> Vec<u8> {
        self.image.pixels.clone()
    }

    /// The crop as a standalone image.
    pub fn image(&self) -> JsDecodedImage {
        JsDecodedImage::from_decoded(self.image.clone())
    }

    /// Encode the crop as JPEG for submission.
    pub fn to_jpeg(&self, quality: Option<u8>) -> Result<Vec<u8>, JsValue> {
        encode::encode_image(&self.image, quality.unwrap_or(encode::DEFAULT_QUALITY)).map_err(to_js_error)
    }
}

impl From<CroppedRegion> for JsCroppedRegion {
    fn from(crop: CroppedRegion) -> Self {
        Self {
            role: crop.role,
            image: crop.image,
        }
    }
}

/// Convert any core error to a JS error string.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Serialize a value into a plain JS object.
///
/// Flattened structs serialize as maps, which would otherwise come out as
/// an ES `Map` instead of an object.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).map_err(to_js_error)
}

/// Parse a region role tag, rejecting unknown tags.
pub(crate) fn parse_role(tag: &str) -> Result<RegionRole, JsValue> {
    RegionRole::from_tag(tag).ok_or_else(|| {
        let message = format!("Unknown region role '{}', expected 'hand' or 'dora'", tag);
        web_sys::console::warn_1(&JsValue::from_str(&message));
        JsValue::from_str(&message)
    })
}

/// Parse an optional handle tag.
///
/// A missing tag means the pointer went down on the region body. An
/// unrecognized tag is reported and treated the same way, so the gesture
/// degrades to a drag.
pub(crate) fn parse_handle(tag: Option<String>) -> Option<Handle> {
    let tag = tag?;
    if tag.trim().is_empty() {
        return None;
    }

    let handle = Handle::from_tag(&tag);
    if handle.is_none() {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "Unknown handle '{}', falling back to drag",
            tag
        )));
    }
    handle
}

/// Read an `EditorConfig` from a JS object. `undefined` and `null` give
/// the defaults; missing or unusable fields take their default values.
pub(crate) fn parse_config(value: JsValue) -> Result<EditorConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(EditorConfig::default());
    }
    serde_wasm_bindgen::from_value::<EditorConfig>(value)
        .map(EditorConfig::sanitized)
        .map_err(|e| JsValue::from_str(&format!("Invalid editor config: {}", e)))
}
