//! Tilecrop Core - crop-region editing for mahjong hand photos
//!
//! This crate holds the geometry behind the hand and dora-indicator crop
//! editor: region clamping, drag and resize gestures, the display mapping
//! used to place capture guides over a live preview, and rasterization of
//! the committed regions against the decoded source photo.
//!
//! It has no notion of a DOM or a camera. The `tilecrop-wasm` crate forwards
//! pointer events and container sizes into a [`CropEditor`] and draws what
//! comes back.

pub mod config;
pub mod decode;
pub mod display;
pub mod editor;
pub mod encode;
pub mod geometry;
pub mod raster;
pub mod region;
pub mod session;

pub use config::{EditorConfig, MinSize, RegionLayout};
pub use display::{overlay_guides, DisplayMapping, GuideFrame};
pub use editor::{CropEditor, Hit};
pub use geometry::{LinearMap, Point, Rect, Size};
pub use raster::{extract, split_capture, CropError, CroppedRegion, PixelRect};
pub use region::{clamp_rect, CropRegion, Handle, RegionRole};
pub use session::{InteractionSession, Mode};
