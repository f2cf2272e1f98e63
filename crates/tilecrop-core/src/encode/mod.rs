//! Encoding of cropped regions for submission.
//!
//! # Examples
//!
//! ```ignore
//! use tilecrop_core::encode::{encode_jpeg, DEFAULT_QUALITY};
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let jpeg_bytes = encode_jpeg(&pixels, 100, 100, DEFAULT_QUALITY).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_image, encode_jpeg, EncodeError, DEFAULT_QUALITY};
