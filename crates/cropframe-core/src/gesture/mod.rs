//! Drag gestures on the crop box.
//!
//! A gesture grabs one of five handles: the box body (`Move`) or one of the
//! four corners. At grant time the state machine freezes a [`GestureAnchor`]
//! holding the rectangle as it was when the pointer went down. Every move
//! event is then resolved against that snapshot using the *total*
//! displacement since grant, so a move event is a pure function of where the
//! pointer is now. Replaying or dropping intermediate events cannot make the
//! box drift.
//!
//! ## Pipeline per move event
//!
//! 1. [`resolve`] - candidate rectangle from anchor + `(dx, dy)`
//! 2. [`crate::region::clamp_with_policy`] - minimum size and containment
//! 3. region model update
//! 4. [`FrameCoalescer`] - at most one emission per rendering frame

pub mod coalesce;
pub mod machine;
pub mod resolve;

pub use coalesce::{Emission, FrameCoalescer};
pub use machine::{GestureMachine, GestureState};
pub use resolve::resolve;

use crate::geometry::{Point, Rect};
use crate::region::{AxisAnchor, ClampPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The drag target a gesture started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HandleType {
    /// The body of the box: translate without resizing
    Move,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl HandleType {
    /// Every handle, corners last.
    pub const ALL: [HandleType; 5] = [
        HandleType::Move,
        HandleType::TopLeft,
        HandleType::TopRight,
        HandleType::BottomLeft,
        HandleType::BottomRight,
    ];

    /// The four corner handles.
    pub const CORNERS: [HandleType; 4] = [
        HandleType::TopLeft,
        HandleType::TopRight,
        HandleType::BottomLeft,
        HandleType::BottomRight,
    ];

    /// Returns true for the four resize handles.
    #[inline]
    pub fn is_corner(self) -> bool {
        !matches!(self, HandleType::Move)
    }

    /// Name used by UI layers (`"move"`, `"topLeft"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            HandleType::Move => "move",
            HandleType::TopLeft => "topLeft",
            HandleType::TopRight => "topRight",
            HandleType::BottomLeft => "bottomLeft",
            HandleType::BottomRight => "bottomRight",
        }
    }

    /// The clamp policy matching this handle.
    ///
    /// Corners stay pinned to the opposite corner when the size floor
    /// engages. The body translates.
    pub fn clamp_policy(self) -> ClampPolicy {
        match self {
            HandleType::Move => ClampPolicy::Translate,
            HandleType::TopLeft => ClampPolicy::Resize {
                x: AxisAnchor::Far,
                y: AxisAnchor::Far,
            },
            HandleType::TopRight => ClampPolicy::Resize {
                x: AxisAnchor::Near,
                y: AxisAnchor::Far,
            },
            HandleType::BottomLeft => ClampPolicy::Resize {
                x: AxisAnchor::Far,
                y: AxisAnchor::Near,
            },
            HandleType::BottomRight => ClampPolicy::Resize {
                x: AxisAnchor::Near,
                y: AxisAnchor::Near,
            },
        }
    }

    /// Position of this handle on `rect`. The body handle sits at the center.
    pub fn position(self, rect: &Rect) -> Point {
        match self {
            HandleType::Move => rect.center(),
            HandleType::TopLeft => rect.top_left(),
            HandleType::TopRight => rect.top_right(),
            HandleType::BottomLeft => rect.bottom_left(),
            HandleType::BottomRight => rect.bottom_right(),
        }
    }
}

impl fmt::Display for HandleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown handle name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown handle type: {0}")]
pub struct ParseHandleError(pub String);

impl FromStr for HandleType {
    type Err = ParseHandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandleType::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| ParseHandleError(s.to_string()))
    }
}

/// Snapshot of the region taken when a gesture is granted.
///
/// Owned by the [`GestureMachine`] for the lifetime of one gesture and
/// dropped when it ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureAnchor {
    pub handle: HandleType,
    /// The region at grant time
    pub start: Rect,
    /// Pointer position at grant time, when the caller supplied one
    pub pointer: Point,
}

/// Find the handle under `point`.
///
/// Corner handles are circular targets of diameter `handle_size` centered on
/// the corners and win over the body, so the corners stay grabbable even
/// though they overlap the box. When a small box makes corner targets
/// overlap, the nearest corner wins. Returns `None` outside every target.
pub fn hit_test(rect: &Rect, point: Point, handle_size: f64) -> Option<HandleType> {
    let radius = handle_size / 2.0;
    let radius_sq = radius * radius;

    let corner = HandleType::CORNERS
        .into_iter()
        .map(|h| (h, h.position(rect).distance_sq(point)))
        .filter(|(_, d)| *d <= radius_sq)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(h, _)| h);

    corner.or_else(|| rect.contains_point(point).then_some(HandleType::Move))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_names_round_trip() {
        for handle in HandleType::ALL {
            assert_eq!(handle.as_str().parse::<HandleType>(), Ok(handle));
            assert_eq!(handle.to_string(), handle.as_str());
        }
        assert!("middle".parse::<HandleType>().is_err());
    }

    #[test]
    fn test_is_corner() {
        assert!(!HandleType::Move.is_corner());
        assert!(HandleType::CORNERS.iter().all(|h| h.is_corner()));
    }

    #[test]
    fn test_corner_policies_pin_opposite_corner() {
        assert_eq!(
            HandleType::TopLeft.clamp_policy(),
            ClampPolicy::Resize {
                x: AxisAnchor::Far,
                y: AxisAnchor::Far
            }
        );
        assert_eq!(
            HandleType::BottomRight.clamp_policy(),
            ClampPolicy::Resize {
                x: AxisAnchor::Near,
                y: AxisAnchor::Near
            }
        );
        assert_eq!(HandleType::Move.clamp_policy(), ClampPolicy::Translate);
    }

    #[test]
    fn test_hit_test_corners_win_over_body() {
        let r = Rect::new(100.0, 100.0, 200.0, 100.0);
        assert_eq!(
            hit_test(&r, Point::new(105.0, 105.0), 30.0),
            Some(HandleType::TopLeft)
        );
        assert_eq!(
            hit_test(&r, Point::new(290.0, 95.0), 30.0),
            Some(HandleType::TopRight)
        );
        assert_eq!(
            hit_test(&r, Point::new(100.0, 210.0), 30.0),
            Some(HandleType::BottomLeft)
        );
        assert_eq!(
            hit_test(&r, Point::new(301.0, 201.0), 30.0),
            Some(HandleType::BottomRight)
        );
    }

    #[test]
    fn test_hit_test_body_and_miss() {
        let r = Rect::new(100.0, 100.0, 200.0, 100.0);
        assert_eq!(
            hit_test(&r, Point::new(200.0, 150.0), 30.0),
            Some(HandleType::Move)
        );
        assert_eq!(hit_test(&r, Point::new(10.0, 10.0), 30.0), None);
    }

    #[test]
    fn test_hit_test_overlapping_corners_pick_nearest() {
        // 20x20 box with 30-unit handles: all corner targets overlap
        let r = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert_eq!(
            hit_test(&r, Point::new(14.0, 4.0), 30.0),
            Some(HandleType::TopRight)
        );
    }
}
