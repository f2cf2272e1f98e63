//! Plain geometry types shared by the editor, the display mapping and the
//! rasterizer.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of whatever surface the values refer to
//! - X grows to the right, Y grows downwards
//! - Editor geometry is in container units (CSS pixels on the web side)

use serde::{Deserialize, Serialize};

/// A pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width and height of a container or a media source.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions finite and strictly positive.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Width divided by height. Only meaningful for valid sizes.
    #[inline]
    pub fn aspect_ratio(self) -> f64 {
        self.width / self.height
    }

    /// The rectangle `(0, 0, width, height)`.
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Axis-aligned rectangle described by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Same size, moved by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..*self
        }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Multiply position and size by independent per-axis factors.
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self {
            left: self.left * sx,
            top: self.top * sy,
            width: self.width * sx,
            height: self.height * sy,
        }
    }
}

/// Linear mapping between two base rectangles, scaled independently on
/// each axis.
///
/// Both the letterboxed live-feed overlay and the static-image rasterizer
/// are expressed with this primitive; they only differ in which rectangles
/// they pass as `from` and `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    from: Rect,
    to: Rect,
}

impl LinearMap {
    /// Returns `None` when `from` has no area or either base is non-finite,
    /// since the mapping would divide by zero.
    pub fn new(from: Rect, to: Rect) -> Option<Self> {
        if !from.is_finite() || !to.is_finite() || from.width == 0.0 || from.height == 0.0 {
            return None;
        }
        Some(Self { from, to })
    }

    #[inline]
    fn scale_x(&self) -> f64 {
        self.to.width / self.from.width
    }

    #[inline]
    fn scale_y(&self) -> f64 {
        self.to.height / self.from.height
    }

    pub fn map_point(&self, point: Point) -> Point {
        Point {
            x: self.to.left + (point.x - self.from.left) * self.scale_x(),
            y: self.to.top + (point.y - self.from.top) * self.scale_y(),
        }
    }

    pub fn map_rect(&self, rect: Rect) -> Rect {
        let origin = self.map_point(Point::new(rect.left, rect.top));
        Rect {
            left: origin.x,
            top: origin.y,
            width: rect.width * self.scale_x(),
            height: rect.height * self.scale_y(),
        }
    }

    /// The mapping in the opposite direction, if `to` has area.
    pub fn inverse(&self) -> Option<Self> {
        Self::new(self.to, self.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_rect_translate_keeps_size() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0).translate(5.0, -5.0);
        assert_eq!(r, Rect::new(15.0, 15.0, 30.0, 40.0));
    }

    #[test]
    fn test_rect_contains_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(!r.contains(Point::new(10.1, 5.0)));
    }

    #[test]
    fn test_rect_not_finite() {
        assert!(!Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_finite());
        assert!(!Rect::new(0.0, 0.0, f64::INFINITY, 1.0).is_finite());
    }

    #[test]
    fn test_size_validity() {
        assert!(Size::new(800.0, 600.0).is_valid());
        assert!(!Size::new(0.0, 600.0).is_valid());
        assert!(!Size::new(-1.0, 600.0).is_valid());
        assert!(!Size::new(f64::NAN, 600.0).is_valid());
    }

    #[test]
    fn test_linear_map_doubles() {
        let map = LinearMap::new(
            Rect::new(0.0, 0.0, 800.0, 800.0),
            Rect::new(0.0, 0.0, 1600.0, 1600.0),
        )
        .unwrap();
        let mapped = map.map_rect(Rect::new(80.0, 400.0, 640.0, 240.0));
        assert_eq!(mapped, Rect::new(160.0, 800.0, 1280.0, 480.0));
    }

    #[test]
    fn test_linear_map_with_offset() {
        let map = LinearMap::new(
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            Rect::new(0.0, 175.0, 800.0, 450.0),
        )
        .unwrap();
        let p = map.map_point(Point::new(1920.0, 1080.0));
        assert!((p.x - 800.0).abs() < 1e-9);
        assert!((p.y - 625.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_map_inverse_round_trips_point() {
        let map = LinearMap::new(
            Rect::new(0.0, 0.0, 1080.0, 1920.0),
            Rect::new(175.0, 0.0, 450.0, 800.0),
        )
        .unwrap();
        let inv = map.inverse().unwrap();
        let p = inv.map_point(map.map_point(Point::new(540.0, 960.0)));
        assert!((p.x - 540.0).abs() < 1e-9);
        assert!((p.y - 960.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_map_rejects_empty_base() {
        assert!(LinearMap::new(Rect::new(0.0, 0.0, 0.0, 10.0), Rect::default()).is_none());
        let degenerate = LinearMap::new(Rect::new(0.0, 0.0, 10.0, 10.0), Rect::default()).unwrap();
        assert!(degenerate.inverse().is_none());
    }
}
