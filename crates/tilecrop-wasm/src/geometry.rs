//! Stateless geometry WASM bindings.
//!
//! # Functions
//!
//! - [`fit_media`] - Letterbox placement of a video or photo in its container
//! - [`overlay_guides`] - Hand and dora guide frames over a live feed
//! - [`clamp_rect`] - Run the region clamp on an arbitrary rectangle
//!
//! # Example
//!
//! ```typescript
//! video.addEventListener('loadedmetadata', () => {
//!   const guides = overlay_guides(video.videoWidth, video.videoHeight,
//!                                 overlay.clientWidth, overlay.clientHeight);
//!   if (guides) guides.forEach(drawGuide);
//! });
//! ```

use crate::types::{parse_config, to_js};
use tilecrop_core::display::{self, DisplayMapping};
use tilecrop_core::{region, MinSize, Rect, Size};
use wasm_bindgen::prelude::*;

/// Contain-fit media of intrinsic size into a container.
///
/// Returns `{ offset_x, offset_y, rendered_width, rendered_height }`, or
/// `undefined` while the media has not reported a usable size.
#[wasm_bindgen]
pub fn fit_media(
    intrinsic_width: f64,
    intrinsic_height: f64,
    container_width: f64,
    container_height: f64,
) -> Result<JsValue, JsValue> {
    let mapping = DisplayMapping::fit(
        Size::new(intrinsic_width, intrinsic_height),
        Size::new(container_width, container_height),
    );
    to_js(&mapping)
}

/// Guide frames `[hand, dora]` in container units, each as
/// `{ role, left, top, width, height }`, or `undefined` while the media
/// size is unknown. `config` is optional and takes the editor config shape.
#[wasm_bindgen]
pub fn overlay_guides(
    intrinsic_width: f64,
    intrinsic_height: f64,
    container_width: f64,
    container_height: f64,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    let config = parse_config(config)?;
    let guides = display::overlay_guides(
        Size::new(intrinsic_width, intrinsic_height),
        Size::new(container_width, container_height),
        &config,
    );
    to_js(&guides)
}

/// Clamp a rectangle into a container with the region rules. The minimum
/// size defaults to 50x40, also when a given dimension is not a positive
/// number.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn clamp_rect(
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    container_width: f64,
    container_height: f64,
    min_width: Option<f64>,
    min_height: Option<f64>,
) -> Result<JsValue, JsValue> {
    let min = MinSize {
        width: min_width.unwrap_or(MinSize::DEFAULT_WIDTH),
        height: min_height.unwrap_or(MinSize::DEFAULT_HEIGHT),
    }
    .sanitized();
    let rect = region::clamp_rect(
        Rect::new(left, top, width, height),
        Size::new(container_width, container_height),
        min,
    );
    to_js(&rect)
}
