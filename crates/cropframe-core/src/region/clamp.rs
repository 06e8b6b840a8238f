//! Boundary clamp: minimum size and confinement to the displayed image.
//!
//! Every candidate rectangle produced by the gesture resolver passes through
//! here before it reaches the region model. Pointer deltas are unbounded, so
//! an out-of-range candidate is an expected input, not an error.
//!
//! # Order of Operations
//!
//! Each axis is handled independently, in this order:
//! 1. Floor the size to the minimum
//! 2. Shrink the size where an edge leaves the displayed image
//! 3. Re-clamp the position into `[offset, offset + displayed - size]`
//!
//! Size comes before position because a corner resize moves an edge and
//! changes the size at the same time. Clamping only the position would keep
//! a stale size.

use crate::geometry::{clamp_between, Rect};
use crate::placement::Placement;
use serde::{Deserialize, Serialize};

/// Which edge of an axis stays put when the size floor engages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisAnchor {
    /// Left (x axis) or top (y axis) edge is fixed
    #[default]
    Near,
    /// Right (x axis) or bottom (y axis) edge is fixed
    Far,
}

/// How a candidate rectangle is brought back inside the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClampPolicy {
    /// Resize: out-of-bounds edges are pulled in by shrinking.
    ///
    /// The anchors name the edges that stay fixed while flooring to the
    /// minimum size, which keeps a corner drag pinned to its opposite corner.
    Resize { x: AxisAnchor, y: AxisAnchor },
    /// Move: the rectangle keeps its size and is pushed back inside.
    Translate,
}

impl Default for ClampPolicy {
    fn default() -> Self {
        ClampPolicy::Resize {
            x: AxisAnchor::Near,
            y: AxisAnchor::Near,
        }
    }
}

/// Clamp a candidate rectangle with the default resize policy.
///
/// The result satisfies the region invariants: both sides are at least
/// `min_size` and the rectangle lies inside the displayed image. When the
/// displayed image is itself smaller than `min_size` on an axis, that axis
/// collapses to the full displayed extent instead.
///
/// Applying the clamp to its own output returns the same rectangle (up to
/// floating-point rounding).
pub fn clamp_region(candidate: Rect, placement: &Placement, min_size: f64) -> Rect {
    clamp_with_policy(candidate, placement, min_size, ClampPolicy::default())
}

/// Clamp a candidate rectangle with an explicit policy.
pub fn clamp_with_policy(
    candidate: Rect,
    placement: &Placement,
    min_size: f64,
    policy: ClampPolicy,
) -> Rect {
    let (x, width, y, height) = match policy {
        ClampPolicy::Resize {
            x: anchor_x,
            y: anchor_y,
        } => {
            let (x, width) = resize_axis(
                candidate.x,
                candidate.width,
                placement.offset_x,
                placement.displayed_width,
                min_size,
                anchor_x,
            );
            let (y, height) = resize_axis(
                candidate.y,
                candidate.height,
                placement.offset_y,
                placement.displayed_height,
                min_size,
                anchor_y,
            );
            (x, width, y, height)
        }
        ClampPolicy::Translate => {
            let (x, width) = translate_axis(
                candidate.x,
                candidate.width,
                placement.offset_x,
                placement.displayed_width,
                min_size,
            );
            let (y, height) = translate_axis(
                candidate.y,
                candidate.height,
                placement.offset_y,
                placement.displayed_height,
                min_size,
            );
            (x, width, y, height)
        }
    };

    Rect::new(x, y, width, height)
}

/// Clamp one axis of a resize. Returns `(position, size)`.
fn resize_axis(
    pos: f64,
    size: f64,
    lo: f64,
    extent: f64,
    min_size: f64,
    anchor: AxisAnchor,
) -> (f64, f64) {
    let hi = lo + extent;
    // A displayed area narrower than the minimum caps the minimum
    let floor = min_size.min(extent);

    let mut pos = pos;
    let mut size = size;

    // 1. Minimum size, growing away from the fixed edge
    if size < floor {
        if anchor == AxisAnchor::Far {
            pos = pos + size - floor;
        }
        size = floor;
    }

    // 2. Shrink whatever sticks out
    if pos < lo {
        size -= lo - pos;
        pos = lo;
    }
    if pos + size > hi {
        size = hi - pos;
    }
    // Shrinking went below the floor: keep the floor, step 3 moves it back in
    if size < floor {
        size = floor;
    }

    // 3. Position
    let pos = clamp_between(pos, lo, hi - size);
    (pos, size)
}

/// Clamp one axis of a translation. Returns `(position, size)`.
fn translate_axis(pos: f64, size: f64, lo: f64, extent: f64, min_size: f64) -> (f64, f64) {
    let size = size.max(min_size.min(extent)).min(extent);
    let pos = clamp_between(pos, lo, lo + extent - size);
    (pos, size)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
