//! Resize handles and the per-handle geometry.
//!
//! Each handle decides which edges of the origin rectangle follow the
//! pointer. The edge opposite a moving edge stays put: when a left or top
//! edge moves, the origin is shifted by however much the size changed, so
//! the right or bottom edge keeps its position even when the floor kicks in.
//!
//! | Handle | width           | height          | left           | top            |
//! |--------|-----------------|-----------------|----------------|----------------|
//! | NW     | max(MIN, w0-dx) | max(MIN, h0-dy) | l0+(w0-newW)   | t0+(h0-newH)   |
//! | NE     | max(MIN, w0+dx) | max(MIN, h0-dy) | l0             | t0+(h0-newH)   |
//! | SW     | max(MIN, w0-dx) | max(MIN, h0+dy) | l0+(w0-newW)   | t0             |
//! | SE     | max(MIN, w0+dx) | max(MIN, h0+dy) | l0             | t0             |
//! | N      | w0              | max(MIN, h0-dy) | l0             | t0+(h0-newH)   |
//! | S      | w0              | max(MIN, h0+dy) | l0             | t0             |
//! | W      | max(MIN, w0-dx) | h0              | l0+(w0-newW)   | t0             |
//! | E      | max(MIN, w0+dx) | h0              | l0             | t0             |
//!
//! The result is not clamped to the container here; the session runs the
//! generic clamp afterwards.

use serde::{Deserialize, Serialize};

use crate::config::MinSize;
use crate::geometry::Rect;

/// One of the eight grab points on a region's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    #[serde(rename = "nw")]
    NorthWest,
    #[serde(rename = "ne")]
    NorthEast,
    #[serde(rename = "sw")]
    SouthWest,
    #[serde(rename = "se")]
    SouthEast,
    #[serde(rename = "n")]
    North,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "w")]
    West,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::NorthWest,
        Handle::NorthEast,
        Handle::SouthWest,
        Handle::SouthEast,
        Handle::North,
        Handle::South,
        Handle::East,
        Handle::West,
    ];

    /// Parse a compass tag such as `"nw"` or `"E"`.
    ///
    /// Unknown tags return `None`; callers treat that as "no handle", which
    /// turns the gesture into a drag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "nw" => Some(Handle::NorthWest),
            "ne" => Some(Handle::NorthEast),
            "sw" => Some(Handle::SouthWest),
            "se" => Some(Handle::SouthEast),
            "n" => Some(Handle::North),
            "s" => Some(Handle::South),
            "e" => Some(Handle::East),
            "w" => Some(Handle::West),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            Handle::NorthWest => "nw",
            Handle::NorthEast => "ne",
            Handle::SouthWest => "sw",
            Handle::SouthEast => "se",
            Handle::North => "n",
            Handle::South => "s",
            Handle::East => "e",
            Handle::West => "w",
        }
    }

    #[inline]
    pub fn moves_left(self) -> bool {
        matches!(self, Handle::NorthWest | Handle::SouthWest | Handle::West)
    }

    #[inline]
    pub fn moves_right(self) -> bool {
        matches!(self, Handle::NorthEast | Handle::SouthEast | Handle::East)
    }

    #[inline]
    pub fn moves_top(self) -> bool {
        matches!(self, Handle::NorthWest | Handle::NorthEast | Handle::North)
    }

    #[inline]
    pub fn moves_bottom(self) -> bool {
        matches!(self, Handle::SouthWest | Handle::SouthEast | Handle::South)
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Handle::NorthWest | Handle::NorthEast | Handle::SouthWest | Handle::SouthEast
        )
    }
}

/// Apply a resize delta to `origin` for the given handle.
pub fn resize_rect(origin: Rect, handle: Handle, dx: f64, dy: f64, min: MinSize) -> Rect {
    let mut out = origin;

    if handle.moves_left() {
        out.width = (origin.width - dx).max(min.width);
        out.left = origin.left + (origin.width - out.width);
    } else if handle.moves_right() {
        out.width = (origin.width + dx).max(min.width);
    }

    if handle.moves_top() {
        out.height = (origin.height - dy).max(min.height);
        out.top = origin.top + (origin.height - out.height);
    } else if handle.moves_bottom() {
        out.height = (origin.height + dy).max(min.height);
    }

    out
}


// ============================================================================
// Property-Based Tests
// ============================================================================
