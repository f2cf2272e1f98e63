//! Crop regions and the rules that keep them valid.
//!
//! A [`CropRegion`] is a labeled rectangle in container units. Every
//! mutation goes through [`clamp_rect`], so after each pointer event a region
//! satisfies:
//!
//! - `width >= min_size.width` and `height >= min_size.height`
//! - `left >= 0` and `top >= 0`
//! - `left + width <= container.width` and `top + height <= container.height`
//!
//! The floors are applied after the edge trim, so the last line may be
//! exceeded by at most the minimum size. This happens when a region pressed
//! against an edge is trimmed below the floor and then grown back, or when
//! the container itself is smaller than the floor.

mod clamp;
mod handle;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{MinSize, RegionLayout};
use crate::geometry::{Rect, Size};

pub use clamp::{clamp_position, clamp_rect};
pub use handle::{resize_rect, Handle};

/// What a crop region is meant to bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionRole {
    /// The player's hand tiles
    #[serde(rename = "hand")]
    Hand,
    /// The dora indicator tiles
    #[serde(rename = "dora")]
    DoraIndicator,
}

impl RegionRole {
    /// Both roles, in commit order.
    pub const ALL: [RegionRole; 2] = [RegionRole::Hand, RegionRole::DoraIndicator];

    /// Parse the tag used by the front end (`"hand"` or `"dora"`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "hand" => Some(RegionRole::Hand),
            "dora" | "dora_indicator" => Some(RegionRole::DoraIndicator),
            _ => None,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            RegionRole::Hand => "hand",
            RegionRole::DoraIndicator => "dora",
        }
    }
}

impl fmt::Display for RegionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A labeled rectangle the user drags and resizes.
///
/// The geometry is only writable from inside the crate, where every write
/// is preceded by a clamp pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropRegion {
    role: RegionRole,
    #[serde(flatten)]
    rect: Rect,
}

impl CropRegion {
    /// Create a region at `rect`, clamped into `container`.
    pub fn new(role: RegionRole, rect: Rect, container: Size, min: MinSize) -> Self {
        Self {
            role,
            rect: clamp_rect(rect, container, min),
        }
    }

    /// Create a region from fractional layout, resolved against the whole
    /// container.
    pub fn from_layout(role: RegionRole, layout: RegionLayout, container: Size, min: MinSize) -> Self {
        Self::new(role, layout.resolve(container.to_rect()), container, min)
    }

    pub fn role(&self) -> RegionRole {
        self.role
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}
