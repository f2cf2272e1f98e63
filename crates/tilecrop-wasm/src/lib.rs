//! Tilecrop WASM - WebAssembly bindings for the Tilecrop crop editor
//!
//! This crate exposes `tilecrop-core` to the photo-submission page.
//!
//! # Module Structure
//!
//! - `editor` - The stateful `JsCropEditor` driven by pointer events
//! - `geometry` - Letterbox fit, capture guides and the region clamp
//! - `split` - Fixed-band split of camera captures
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Photo decoding (JPEG, PNG)
//! - `encode` - JPEG encoding for submission
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, JsCropEditor } from '@tilecrop/wasm';
//!
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const editor = new JsCropEditor(container.clientWidth, container.clientHeight);
//! // ... forward pointer events ...
//! const hand = editor.crop_jpeg(image, 'hand');
//! const dora = editor.crop_jpeg(image, 'dora');
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod editor;
mod encode;
mod geometry;
mod split;
mod types;

pub use decode::{decode_image, get_orientation};
pub use editor::JsCropEditor;
pub use encode::{encode_jpeg, encode_jpeg_from_image};
pub use geometry::{clamp_rect, fit_media, overlay_guides};
pub use split::split_capture;
pub use types::{JsCroppedRegion, JsDecodedImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
