//! Placement of intrinsic-sized media inside a container.
//!
//! Live camera frames and photos rarely share the aspect ratio of the
//! element that shows them. The media is scaled uniformly until it touches
//! the container on one axis and centered on the other ("contain" fit),
//! leaving letterbox bars.
//!
//! ```text
//! 1920x1080 feed in an 800x800 box:
//!
//! +----------------+  offset_y = 175
//! |################|
//! |     800x450    |
//! |################|
//! +----------------+  offset_y = 175
//! ```
//!
//! The mapping is recomputed whenever the intrinsic size, the container
//! size or the orientation changes. It is undefined until the media has
//! reported its intrinsic size; [`DisplayMapping::fit`] returns `None` in
//! that case and overlays should stay hidden.

use serde::Serialize;

use crate::config::EditorConfig;
use crate::geometry::{LinearMap, Point, Rect, Size};
use crate::region::RegionRole;

/// Where the media rectangle sits inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayMapping {
    pub offset_x: f64,
    pub offset_y: f64,
    pub rendered_width: f64,
    pub rendered_height: f64,
}

impl DisplayMapping {
    /// Fit `intrinsic` inside `container` with uniform scaling.
    pub fn fit(intrinsic: Size, container: Size) -> Option<Self> {
        if !intrinsic.is_valid() || !container.is_valid() {
            return None;
        }

        let mapping = if intrinsic.aspect_ratio() > container.aspect_ratio() {
            // Wider than the container: full width, bars above and below
            let rendered_height = container.width * intrinsic.height / intrinsic.width;
            Self {
                offset_x: 0.0,
                offset_y: (container.height - rendered_height) / 2.0,
                rendered_width: container.width,
                rendered_height,
            }
        } else {
            let rendered_width = container.height * intrinsic.width / intrinsic.height;
            Self {
                offset_x: (container.width - rendered_width) / 2.0,
                offset_y: 0.0,
                rendered_width,
                rendered_height: container.height,
            }
        };

        Some(mapping)
    }

    /// The media's rectangle in container units.
    pub fn rendered_rect(&self) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            self.rendered_width,
            self.rendered_height,
        )
    }

    /// Linear map from intrinsic media pixels to container units.
    pub fn media_to_container_map(&self, intrinsic: Size) -> Option<LinearMap> {
        LinearMap::new(intrinsic.to_rect(), self.rendered_rect())
    }

    /// Map a rectangle in media pixels into the container.
    pub fn media_to_container(&self, rect: Rect, intrinsic: Size) -> Option<Rect> {
        self.media_to_container_map(intrinsic)
            .map(|map| map.map_rect(rect))
    }

    /// Map a container point (such as a pointer position) into media pixels.
    ///
    /// Points on the letterbox bars map outside the media bounds; callers
    /// decide whether to clamp them.
    pub fn container_to_media(&self, point: Point, intrinsic: Size) -> Option<Point> {
        self.media_to_container_map(intrinsic)?
            .inverse()
            .map(|map| map.map_point(point))
    }
}

/// An AR guide frame drawn over a live feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuideFrame {
    pub role: RegionRole,
    #[serde(flatten)]
    pub rect: Rect,
}

/// Position the hand and dora guide frames over letterboxed media.
///
/// The configured layout fractions are applied to the rendered media
/// rectangle rather than the whole container, so the guides cover the same
/// part of the picture that the editor's default regions will.
pub fn overlay_guides(intrinsic: Size, container: Size, config: &EditorConfig) -> Option<[GuideFrame; 2]> {
    let rendered = DisplayMapping::fit(intrinsic, container)?.rendered_rect();

    Some(RegionRole::ALL.map(|role| GuideFrame {
        role,
        rect: config.layout(role).resolve(rendered),
    }))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
