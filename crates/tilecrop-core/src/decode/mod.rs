//! Source image decoding.
//!
//! Photos reach the editor either from a file picker / drag-and-drop or
//! from a camera capture. Both arrive as encoded bytes (JPEG or PNG) and
//! are turned into an RGB [`DecodedImage`] here, with EXIF orientation
//! applied so the pixels line up with what the browser displays.
//!
//! # Examples
//!
//! ```ignore
//! use tilecrop_core::decode::decode_image;
//!
//! let bytes = std::fs::read("table.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::{decode_image, get_orientation};
pub use types::{DecodeError, DecodedImage, Orientation};
