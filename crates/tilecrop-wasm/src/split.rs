//! Quick-split WASM binding for the camera capture flow.
//!
//! ```typescript
//! ctx.drawImage(video, 0, 0);
//! const rgba = ctx.getImageData(0, 0, w, h).data;
//! const [hand, dora] = split_capture(new JsDecodedImage(w, h, toRgb(rgba)));
//! ```

use crate::types::{to_js_error, JsCroppedRegion, JsDecodedImage};
use js_sys::Array;
use tilecrop_core::raster;
use wasm_bindgen::prelude::*;

/// Split a captured frame into `[hand, dora]` crops along the guide bands.
///
/// # Errors
///
/// Returns an error if the frame is empty or its buffer does not match its
/// dimensions.
#[wasm_bindgen]
pub fn split_capture(image: &JsDecodedImage) -> Result<Array, JsValue> {
    let [hand, dora] = raster::split_capture(&image.to_decoded()).map_err(to_js_error)?;
    Ok(Array::of2(
        &JsCroppedRegion::from(hand).into(),
        &JsCroppedRegion::from(dora).into(),
    ))
}
