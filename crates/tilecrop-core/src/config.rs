//! Editor configuration.
//!
//! Every field has a default, so a front end can pass a partial object
//! (or nothing at all) and only override what it needs.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::region::RegionRole;

/// Smallest size a crop region may shrink to, in container units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinSize {
    pub width: f64,
    pub height: f64,
}

impl MinSize {
    pub const DEFAULT_WIDTH: f64 = 50.0;
    pub const DEFAULT_HEIGHT: f64 = 40.0;

    /// Replace any non-finite or non-positive dimension with its default.
    pub fn sanitized(self) -> Self {
        let fix = |value: f64, default: f64, axis: &'static str| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                tracing::warn!(value, axis, "invalid minimum size, using default");
                default
            }
        };
        Self {
            width: fix(self.width, Self::DEFAULT_WIDTH, "width"),
            height: fix(self.height, Self::DEFAULT_HEIGHT, "height"),
        }
    }
}

impl Default for MinSize {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

/// Region placement as fractions (0.0 to 1.0) of a base rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionLayout {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl RegionLayout {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Default placement for a role: dora indicators in the upper band,
    /// the hand below it. Both span 80% of the width.
    pub const fn default_for(role: RegionRole) -> Self {
        match role {
            RegionRole::DoraIndicator => Self::new(0.10, 0.20, 0.80, 0.20),
            RegionRole::Hand => Self::new(0.10, 0.50, 0.80, 0.30),
        }
    }

    /// Finite offsets and a finite, positive size.
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Resolve the fractions against `base`.
    pub fn resolve(&self, base: Rect) -> Rect {
        Rect {
            left: base.left + self.left * base.width,
            top: base.top + self.top * base.height,
            width: self.width * base.width,
            height: self.height * base.height,
        }
    }
}

/// Settings for a [`CropEditor`](crate::editor::CropEditor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Floor applied by every clamp pass
    pub min_size: MinSize,
    /// Initial hand region placement
    pub hand_layout: RegionLayout,
    /// Initial dora-indicator region placement
    pub dora_layout: RegionLayout,
    /// Distance from a corner or edge that still grabs the handle
    pub handle_tolerance: f64,
    /// JPEG quality for submitted crops (1-100)
    pub jpeg_quality: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_size: MinSize::default(),
            hand_layout: RegionLayout::default_for(RegionRole::Hand),
            dora_layout: RegionLayout::default_for(RegionRole::DoraIndicator),
            handle_tolerance: Self::DEFAULT_HANDLE_TOLERANCE,
            jpeg_quality: crate::encode::DEFAULT_QUALITY,
        }
    }
}

impl EditorConfig {
    pub const DEFAULT_HANDLE_TOLERANCE: f64 = 10.0;

    pub fn layout(&self, role: RegionRole) -> RegionLayout {
        match role {
            RegionRole::Hand => self.hand_layout,
            RegionRole::DoraIndicator => self.dora_layout,
        }
    }

    /// Replace unusable values with their defaults.
    ///
    /// Configs arrive from JavaScript unchecked. A NaN or negative floor
    /// would let regions collapse below the minimum size, so every field is
    /// checked here before an editor uses it:
    ///
    /// - `min_size`: each dimension must be finite and positive
    /// - layouts: all fractions finite, size positive
    /// - `handle_tolerance`: finite and non-negative
    /// - `jpeg_quality`: 1-100, with 0 meaning the default and larger values
    ///   capped at 100
    pub fn sanitized(self) -> Self {
        let layout = |layout: RegionLayout, role: RegionRole| {
            if layout.is_valid() {
                layout
            } else {
                tracing::warn!(?layout, %role, "invalid region layout, using default");
                RegionLayout::default_for(role)
            }
        };

        let handle_tolerance = if self.handle_tolerance.is_finite() && self.handle_tolerance >= 0.0 {
            self.handle_tolerance
        } else {
            tracing::warn!(value = self.handle_tolerance, "invalid handle tolerance, using default");
            Self::DEFAULT_HANDLE_TOLERANCE
        };

        let jpeg_quality = match self.jpeg_quality {
            0 => {
                tracing::warn!("JPEG quality 0, using default");
                crate::encode::DEFAULT_QUALITY
            }
            q => q.min(100),
        };

        Self {
            min_size: self.min_size.sanitized(),
            hand_layout: layout(self.hand_layout, RegionRole::Hand),
            dora_layout: layout(self.dora_layout, RegionRole::DoraIndicator),
            handle_tolerance,
            jpeg_quality,
        }
    }
}
