//! Crop editor WASM bindings.
//!
//! The page owns the DOM: it renders the static photo stretched to the
//! editor container, draws the two region boxes and their handles, and
//! forwards pointer events here. After every call it reads the regions back
//! and repositions the boxes.
//!
//! Pointer coordinates are relative to the container's top-left corner, not
//! the viewport.
//!
//! # Example
//!
//! ```typescript
//! const editor = new JsCropEditor(container.clientWidth, container.clientHeight);
//! const local = (e: PointerEvent) => {
//!   const r = container.getBoundingClientRect();
//!   return [e.clientX - r.left, e.clientY - r.top];
//! };
//!
//! box.addEventListener('pointerdown', (e) => {
//!   const handle = (e.target as HTMLElement).dataset.handle; // "nw", "se", ...
//!   const [x, y] = local(e);
//!   editor.pointer_down('hand', handle, x, y);
//! });
//! window.addEventListener('pointermove', (e) => {
//!   const [x, y] = local(e);
//!   if (editor.pointer_move(x, y)) redraw(editor.region('hand'));
//! });
//! window.addEventListener('pointerup', () => editor.pointer_up());
//!
//! const [hand, dora] = editor.commit(image);
//! ```

use crate::types::{parse_config, parse_handle, parse_role, to_js, to_js_error, JsCroppedRegion, JsDecodedImage};
use js_sys::Array;
use tilecrop_core::{CropEditor, Mode, Point, Size};
use wasm_bindgen::prelude::*;

/// Stateful crop editor for one photo.
#[wasm_bindgen]
pub struct JsCropEditor {
    inner: CropEditor,
}

#[wasm_bindgen]
impl JsCropEditor {
    /// Open an editor with the default configuration.
    ///
    /// # Errors
    /// Returns an error if the container size is zero, negative or not a number.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<JsCropEditor, JsValue> {
        CropEditor::new(Size::new(width, height), Default::default())
            .map(|inner| JsCropEditor { inner })
            .map_err(to_js_error)
    }

    /// Open an editor with a configuration object.
    ///
    /// Missing fields take their defaults, e.g.
    /// `{ min_size: { width: 60, height: 48 }, handle_tolerance: 16 }`.
    pub fn with_config(width: f64, height: f64, config: JsValue) -> Result<JsCropEditor, JsValue> {
        let config = parse_config(config)?;
        CropEditor::new(Size::new(width, height), config)
            .map(|inner| JsCropEditor { inner })
            .map_err(to_js_error)
    }

    /// Start a gesture. Pass a handle tag (`"nw"`, `"e"`, ...) to resize, or
    /// nothing to drag. Returns `false` if another gesture is still active.
    ///
    /// # Errors
    /// Returns an error for an unknown role.
    pub fn pointer_down(&mut self, role: &str, handle: Option<String>, x: f64, y: f64) -> Result<bool, JsValue> {
        let role = parse_role(role)?;
        Ok(self.inner.pointer_down(role, parse_handle(handle), Point::new(x, y)))
    }

    /// Returns `true` when the active region moved and should be redrawn.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.inner.pointer_move(Point::new(x, y))
    }

    pub fn pointer_up(&mut self) {
        self.inner.pointer_up();
    }

    pub fn pointer_cancel(&mut self) {
        self.inner.pointer_cancel();
    }

    /// Region and handle under a point, as `{ role, handle }`, or
    /// `undefined` when the point is over neither region.
    pub fn hit_test(&self, x: f64, y: f64) -> Result<JsValue, JsValue> {
        to_js(&self.inner.hit_test(Point::new(x, y)))
    }

    /// Current geometry of one region as `{ role, left, top, width, height }`.
    pub fn region(&self, role: &str) -> Result<JsValue, JsValue> {
        to_js(self.inner.region(parse_role(role)?))
    }

    /// Both regions as `[hand, dora]`.
    pub fn regions(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.regions())
    }

    /// `"idle"`, `"dragging"` or `"resizing"`.
    #[wasm_bindgen(getter)]
    pub fn mode(&self) -> String {
        match self.inner.mode() {
            Mode::Idle => "idle",
            Mode::Dragging => "dragging",
            Mode::Resizing => "resizing",
        }
        .to_string()
    }

    /// Follow a container resize. Returns `false` if the size was ignored.
    pub fn set_container_size(&mut self, width: f64, height: f64) -> bool {
        self.inner.set_container_size(Size::new(width, height))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Rasterize one region against the source photo.
    pub fn crop(&self, image: &JsDecodedImage, role: &str) -> Result<JsCroppedRegion, JsValue> {
        let role = parse_role(role)?;
        self.inner
            .commit_region(role, &image.to_decoded())
            .map(JsCroppedRegion::from)
            .map_err(to_js_error)
    }

    /// Rasterize one region and encode it as JPEG. Without a quality the
    /// configured submission quality is used.
    pub fn crop_jpeg(&self, image: &JsDecodedImage, role: &str, quality: Option<u8>) -> Result<Vec<u8>, JsValue> {
        let role = parse_role(role)?;
        let quality = quality.unwrap_or(self.inner.config().jpeg_quality);
        let crop = self
            .inner
            .commit_region(role, &image.to_decoded())
            .map_err(to_js_error)?;
        crop.to_jpeg(quality).map_err(to_js_error)
    }

    /// Rasterize both regions. Returns `[hand, dora]` as `JsCroppedRegion`s.
    pub fn commit(&self, image: &JsDecodedImage) -> Result<Array, JsValue> {
        let [hand, dora] = self.inner.commit(&image.to_decoded()).map_err(to_js_error)?;
        Ok(Array::of2(
            &JsCroppedRegion::from(hand).into(),
            &JsCroppedRegion::from(dora).into(),
        ))
    }
}
