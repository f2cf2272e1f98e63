//! Pointer gesture state machine.
//!
//! An [`InteractionSession`] exists exactly while the pointer is held down
//! over a region:
//!
//! ```text
//! Idle --pointer down on body---> Dragging --pointer up/cancel--> Idle
//! Idle --pointer down on handle-> Resizing --pointer up/cancel--> Idle
//! ```
//!
//! The session snapshots the region geometry and the pointer at gesture
//! start. Every move recomputes the geometry from that snapshot (never from
//! the previous frame), clamps it and writes it back in one step, so a
//! reader between two moves always sees a clamped rectangle.

use serde::{Deserialize, Serialize};

use crate::config::MinSize;
use crate::geometry::{Point, Rect, Size};
use crate::region::{clamp_position, clamp_rect, resize_rect, CropRegion, Handle, RegionRole};

/// Current editor interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Idle,
    Dragging,
    Resizing,
}

/// What the active gesture does to its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Drag,
    Resize(Handle),
}

/// One active drag or resize gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSession {
    target: RegionRole,
    gesture: Gesture,
    origin_pointer: Point,
    origin_rect: Rect,
}

impl InteractionSession {
    /// Start a gesture on `region`.
    ///
    /// `handle` is resolved once here. With no handle the gesture is a drag.
    /// Returns `None` for a non-finite pointer.
    pub fn begin(region: &CropRegion, handle: Option<Handle>, pointer: Point) -> Option<Self> {
        if !pointer.is_finite() {
            tracing::warn!(?pointer, "ignoring pointer down with invalid coordinates");
            return None;
        }

        let gesture = match handle {
            Some(handle) => Gesture::Resize(handle),
            None => Gesture::Drag,
        };

        Some(Self {
            target: region.role(),
            gesture,
            origin_pointer: pointer,
            origin_rect: region.rect(),
        })
    }

    pub fn target(&self) -> RegionRole {
        self.target
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn handle(&self) -> Option<Handle> {
        match self.gesture {
            Gesture::Drag => None,
            Gesture::Resize(handle) => Some(handle),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.gesture {
            Gesture::Drag => Mode::Dragging,
            Gesture::Resize(_) => Mode::Resizing,
        }
    }

    /// Geometry at gesture start.
    pub fn origin_rect(&self) -> Rect {
        self.origin_rect
    }

    /// Compute the clamped geometry for the pointer at `pointer`.
    ///
    /// Returns `None` for a non-finite pointer, in which case the region
    /// should keep its current geometry.
    pub fn geometry_at(&self, pointer: Point, container: Size, min: MinSize) -> Option<Rect> {
        if !pointer.is_finite() {
            return None;
        }

        let dx = pointer.x - self.origin_pointer.x;
        let dy = pointer.y - self.origin_pointer.y;

        let proposed = match self.gesture {
            Gesture::Drag => clamp_position(self.origin_rect.translate(dx, dy), container),
            Gesture::Resize(handle) => resize_rect(self.origin_rect, handle, dx, dy, min),
        };

        Some(clamp_rect(proposed, container, min))
    }

    /// Move the pointer and write the result into `region`.
    ///
    /// Returns `true` when the region geometry changed. Regions with a
    /// different role than the session target are left alone.
    pub fn apply(&self, region: &mut CropRegion, pointer: Point, container: Size, min: MinSize) -> bool {
        if region.role() != self.target {
            return false;
        }

        match self.geometry_at(pointer, container, min) {
            Some(rect) if rect != region.rect() => {
                region.set_rect(rect);
                true
            }
            _ => false,
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
