//! Boundary clamping for crop regions.
//!
//! [`clamp_rect`] trims a rectangle so it stays inside its container and
//! then applies the minimum size. The steps run in a fixed order:
//!
//! 1. Left overflow: `width += left; left = 0`
//! 2. Right overflow: `width = container.width - left`
//! 3. The same two steps on the vertical axis
//! 4. Floors: `width = max(width, min.width)`, `height = max(height, min.height)`
//!
//! Because the floors come last, a region pressed against an edge can
//! overflow it by at most the minimum size. Containers are always larger
//! than the floor in practice, so this is accepted rather than corrected.

use crate::config::MinSize;
use crate::geometry::{Rect, Size};

/// Container dimensions the clamp can work with: finite and non-negative.
fn is_clampable(container: Size) -> bool {
    container.width.is_finite()
        && container.height.is_finite()
        && container.width >= 0.0
        && container.height >= 0.0
}

/// Trim `rect` into `container` and enforce `min`.
///
/// Returns `rect` unchanged when the container or the rectangle holds
/// non-finite values, or when the container is negative.
pub fn clamp_rect(rect: Rect, container: Size, min: MinSize) -> Rect {
    if !is_clampable(container) || !rect.is_finite() {
        tracing::warn!(?rect, ?container, "ignoring clamp on invalid geometry");
        return rect;
    }

    let mut out = rect;

    if out.left < 0.0 {
        out.width += out.left;
        out.left = 0.0;
    }
    if out.left + out.width > container.width {
        out.width = container.width - out.left;
    }

    if out.top < 0.0 {
        out.height += out.top;
        out.top = 0.0;
    }
    if out.top + out.height > container.height {
        out.height = container.height - out.top;
    }

    out.width = out.width.max(min.width);
    out.height = out.height.max(min.height);

    if out != rect {
        tracing::trace!(from = ?rect, to = ?out, "clamped region");
    }
    out
}

/// Slide `rect` back inside `container` without touching its size.
///
/// Used for drags: the region keeps its dimensions and stops at the edge
/// (`left` never exceeds `container.width - width`). A region wider than the
/// container is pinned to the left/top edge.
pub fn clamp_position(rect: Rect, container: Size) -> Rect {
    if !is_clampable(container) || !rect.is_finite() {
        return rect;
    }

    let max_left = container.width - rect.width;
    let max_top = container.height - rect.height;

    Rect {
        left: rect.left.min(max_left).max(0.0),
        top: rect.top.min(max_top).max(0.0),
        ..rect
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Containers comfortably larger than the floor.
    fn container_strategy() -> impl Strategy<Value = Size> {
        (100.0f64..=2000.0, 100.0f64..=2000.0).prop_map(|(w, h)| Size::new(w, h))
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -500.0f64..=2500.0,
            -500.0f64..=2500.0,
            0.0f64..=3000.0,
            0.0f64..=3000.0,
        )
            .prop_map(|(l, t, w, h)| Rect::new(l, t, w, h))
    }

    proptest! {
        /// Property: Output always respects the floor.
        #[test]
        fn prop_floor_respected(rect in rect_strategy(), container in container_strategy()) {
            let out = clamp_rect(rect, container, MinSize::default());
            prop_assert!(out.width >= 50.0);
            prop_assert!(out.height >= 40.0);
        }

        /// Property: Origin is never negative.
        #[test]
        fn prop_origin_non_negative(rect in rect_strategy(), container in container_strategy()) {
            let out = clamp_rect(rect, container, MinSize::default());
            prop_assert!(out.left >= 0.0);
            prop_assert!(out.top >= 0.0);
        }

        /// Property: A rect that starts inside keeps its far edges inside.
        #[test]
        fn prop_contained_when_origin_inside(
            container in container_strategy(),
            fx in 0.0f64..=0.5,
            fy in 0.0f64..=0.5,
            w in 0.0f64..=3000.0,
            h in 0.0f64..=3000.0,
        ) {
            let rect = Rect::new(fx * container.width, fy * container.height, w, h);
            let out = clamp_rect(rect, container, MinSize::default());
            prop_assert!(out.right() <= container.width + 1e-9);
            prop_assert!(out.bottom() <= container.height + 1e-9);
        }

        /// Property: Any overflow is bounded by the floor.
        #[test]
        fn prop_overflow_bounded_by_floor(rect in rect_strategy(), container in container_strategy()) {
            let out = clamp_rect(rect, container, MinSize::default());
            let overflow_x = (out.right() - container.width).max(0.0);
            let overflow_y = (out.bottom() - container.height).max(0.0);
            // The clamp never moves an origin that starts past the far edge
            if rect.left <= container.width && rect.top <= container.height {
                prop_assert!(overflow_x <= 50.0 + 1e-9);
                prop_assert!(overflow_y <= 40.0 + 1e-9);
            }
        }

        /// Property: Clamping is idempotent for rects that fit.
        #[test]
        fn prop_idempotent(rect in rect_strategy(), container in container_strategy()) {
            let once = clamp_rect(rect, container, MinSize::default());
            let twice = clamp_rect(once, container, MinSize::default());
            if once.right() <= container.width && once.bottom() <= container.height {
                prop_assert_eq!(once, twice);
            }
        }

        /// Property: Position clamp keeps size and stays inside.
        #[test]
        fn prop_position_clamp_preserves_size(
            container in container_strategy(),
            left in -3000.0f64..=3000.0,
            top in -3000.0f64..=3000.0,
            fw in 0.1f64..=1.0,
            fh in 0.1f64..=1.0,
        ) {
            let rect = Rect::new(left, top, fw * container.width, fh * container.height);
            let out = clamp_position(rect, container);
            prop_assert_eq!(out.width, rect.width);
            prop_assert_eq!(out.height, rect.height);
            prop_assert!(out.left >= 0.0 && out.top >= 0.0);
            prop_assert!(out.right() <= container.width + 1e-9);
            prop_assert!(out.bottom() <= container.height + 1e-9);
        }
    }
}
