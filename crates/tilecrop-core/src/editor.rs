//! The crop editor controller.
//!
//! [`CropEditor`] owns everything the editor needs between pointer events:
//! the container size, the hand and dora regions, and at most one active
//! [`InteractionSession`]. The front end forwards pointer events and reads
//! region geometry back to draw it; nothing else holds editor state.
//!
//! # Example
//!
//! ```ignore
//! let mut editor = CropEditor::new(Size::new(800.0, 800.0), EditorConfig::default())?;
//!
//! editor.pointer_down(RegionRole::Hand, Some(Handle::SouthEast), Point::new(720.0, 640.0));
//! editor.pointer_move(Point::new(760.0, 700.0));
//! editor.pointer_up();
//!
//! let [hand, dora] = editor.commit(&image)?;
//! ```

use serde::Serialize;

use crate::config::EditorConfig;
use crate::decode::DecodedImage;
use crate::geometry::{Point, Rect, Size};
use crate::raster::{extract, CropError, CroppedRegion};
use crate::region::{clamp_rect, CropRegion, Handle, RegionRole};
use crate::session::{InteractionSession, Mode};

/// Result of a hit test: which region is under the pointer, and which
/// handle if the pointer is on its border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub role: RegionRole,
    pub handle: Option<Handle>,
}

/// Interactive editor for the hand and dora crop regions.
#[derive(Debug, Clone)]
pub struct CropEditor {
    container: Size,
    hand: CropRegion,
    dora: CropRegion,
    session: Option<InteractionSession>,
    config: EditorConfig,
}

impl CropEditor {
    /// Open an editor over a container of the given size, with both regions
    /// at their configured default layout.
    ///
    /// # Errors
    ///
    /// Returns `CropError::InvalidContainer` if `container` is zero,
    /// negative or non-finite. Unusable config values are replaced by their
    /// defaults (see [`EditorConfig::sanitized`]).
    pub fn new(container: Size, config: EditorConfig) -> Result<Self, CropError> {
        if !container.is_valid() {
            return Err(CropError::InvalidContainer {
                width: container.width,
                height: container.height,
            });
        }
        let config = config.sanitized();

        let make = |role| CropRegion::from_layout(role, config.layout(role), container, config.min_size);

        Ok(Self {
            container,
            hand: make(RegionRole::Hand),
            dora: make(RegionRole::DoraIndicator),
            session: None,
            config,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn container(&self) -> Size {
        self.container
    }

    pub fn region(&self, role: RegionRole) -> &CropRegion {
        match role {
            RegionRole::Hand => &self.hand,
            RegionRole::DoraIndicator => &self.dora,
        }
    }

    fn region_mut(&mut self, role: RegionRole) -> &mut CropRegion {
        match role {
            RegionRole::Hand => &mut self.hand,
            RegionRole::DoraIndicator => &mut self.dora,
        }
    }

    /// Both regions as `[hand, dora]`.
    pub fn regions(&self) -> [&CropRegion; 2] {
        [&self.hand, &self.dora]
    }

    pub fn mode(&self) -> Mode {
        self.session
            .as_ref()
            .map_or(Mode::Idle, InteractionSession::mode)
    }

    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    /// Start a drag (`handle == None`) or resize gesture on `role`.
    ///
    /// Returns `false` without touching anything if a gesture is already
    /// active or the pointer is not finite.
    pub fn pointer_down(&mut self, role: RegionRole, handle: Option<Handle>, pointer: Point) -> bool {
        if let Some(active) = &self.session {
            tracing::debug!(
                requested = %role,
                active = %active.target(),
                "pointer down rejected while a gesture is active"
            );
            return false;
        }

        match InteractionSession::begin(self.region(role), handle, pointer) {
            Some(session) => {
                tracing::debug!(role = %role, mode = ?session.mode(), ?handle, "gesture started");
                self.session = Some(session);
                true
            }
            None => false,
        }
    }

    /// Feed a pointer move to the active gesture.
    ///
    /// Returns `true` if the target region changed. Moves while idle are
    /// ignored.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };

        let region = match session.target() {
            RegionRole::Hand => &mut self.hand,
            RegionRole::DoraIndicator => &mut self.dora,
        };
        session.apply(region, pointer, self.container, self.config.min_size)
    }

    /// Pointer released. The region keeps its last clamped geometry.
    pub fn pointer_up(&mut self) {
        self.end_session("pointer up");
    }

    /// Pointer cancelled by the platform. Same outcome as release.
    pub fn pointer_cancel(&mut self) {
        self.end_session("pointer cancel");
    }

    fn end_session(&mut self, reason: &'static str) {
        if let Some(session) = self.session.take() {
            tracing::debug!(
                role = %session.target(),
                rect = ?self.region(session.target()).rect(),
                reason,
                "gesture ended"
            );
        }
    }

    /// Find the region and handle under `pointer`.
    ///
    /// The hand region is checked first since it is drawn on top. Corners
    /// take precedence over edges, and a border within the configured
    /// tolerance takes precedence over the interior.
    pub fn hit_test(&self, pointer: Point) -> Option<Hit> {
        if !pointer.is_finite() {
            return None;
        }

        RegionRole::ALL.into_iter().find_map(|role| {
            hit_rect(self.region(role).rect(), pointer, self.config.handle_tolerance)
                .map(|handle| Hit { role, handle })
        })
    }

    /// Follow a container resize or orientation change.
    ///
    /// Regions are scaled with the container so they keep covering the same
    /// part of the image, then clamped. Any active gesture is cancelled
    /// because its origin no longer matches the layout. Invalid sizes are
    /// ignored and return `false`.
    pub fn set_container_size(&mut self, container: Size) -> bool {
        if !container.is_valid() {
            tracing::warn!(?container, "ignoring invalid container size");
            return false;
        }
        if container == self.container {
            return true;
        }

        self.pointer_cancel();

        let sx = container.width / self.container.width;
        let sy = container.height / self.container.height;
        let min = self.config.min_size;

        for role in RegionRole::ALL {
            let region = self.region_mut(role);
            let scaled = clamp_rect(region.rect().scale(sx, sy), container, min);
            region.set_rect(scaled);
        }

        tracing::debug!(from = ?self.container, to = ?container, "container resized");
        self.container = container;
        true
    }

    /// End any gesture and put both regions back at their default layout.
    pub fn reset(&mut self) {
        self.pointer_cancel();
        for role in RegionRole::ALL {
            let layout = self.config.layout(role);
            *self.region_mut(role) =
                CropRegion::from_layout(role, layout, self.container, self.config.min_size);
        }
    }

    /// Rasterize one region against the source image.
    pub fn commit_region(&self, role: RegionRole, image: &DecodedImage) -> Result<CroppedRegion, CropError> {
        extract(self.region(role), self.container, image)
    }

    /// Rasterize both regions as `[hand, dora]`.
    pub fn commit(&self, image: &DecodedImage) -> Result<[CroppedRegion; 2], CropError> {
        Ok([
            self.commit_region(RegionRole::Hand, image)?,
            self.commit_region(RegionRole::DoraIndicator, image)?,
        ])
    }
}

/// Hit test a single rectangle. `Some(None)` means the interior.
fn hit_rect(rect: Rect, p: Point, tolerance: f64) -> Option<Option<Handle>> {
    let in_x = p.x >= rect.left - tolerance && p.x <= rect.right() + tolerance;
    let in_y = p.y >= rect.top - tolerance && p.y <= rect.bottom() + tolerance;
    if !in_x || !in_y {
        return None;
    }

    // Nearest of two candidate edges within tolerance. A point equally
    // close to both edges of a thin region grabs neither on that axis.
    let pick = |pos: f64, low: f64, high: f64, low_handle: Handle, high_handle: Handle| {
        let d_low = (pos - low).abs();
        let d_high = (pos - high).abs();
        match (d_low <= tolerance, d_high <= tolerance) {
            (true, true) if d_low == d_high => None,
            (true, true) if d_high < d_low => Some(high_handle),
            (true, _) => Some(low_handle),
            (false, true) => Some(high_handle),
            (false, false) => None,
        }
    };

    let horizontal = pick(p.x, rect.left, rect.right(), Handle::West, Handle::East);
    let vertical = pick(p.y, rect.top, rect.bottom(), Handle::North, Handle::South);

    let handle = match (vertical, horizontal) {
        (Some(Handle::North), Some(Handle::West)) => Some(Handle::NorthWest),
        (Some(Handle::North), Some(Handle::East)) => Some(Handle::NorthEast),
        (Some(Handle::South), Some(Handle::West)) => Some(Handle::SouthWest),
        (Some(Handle::South), Some(Handle::East)) => Some(Handle::SouthEast),
        (Some(edge), None) | (None, Some(edge)) => Some(edge),
        _ => None,
    };

    match handle {
        Some(handle) => Some(Some(handle)),
        None if rect.contains(p) => Some(None),
        None => None,
    }
}
