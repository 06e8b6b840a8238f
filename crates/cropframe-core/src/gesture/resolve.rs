//! Candidate rectangles from an anchor snapshot and a pointer displacement.
//!
//! Each corner handle resizes toward the dragged corner while the opposite
//! corner stays where it was at grant time:
//!
//! | Handle        | Fixed edges    | width      | height     |
//! |---------------|----------------|------------|------------|
//! | `TopLeft`     | right, bottom  | `w - dx`   | `h - dy`   |
//! | `TopRight`    | left, bottom   | `w + dx`   | `h - dy`   |
//! | `BottomLeft`  | right, top     | `w - dx`   | `h + dy`   |
//! | `BottomRight` | left, top      | `w + dx`   | `h + dy`   |
//!
//! `Move` translates by `(dx, dy)`.
//!
//! The result is deliberately left unclamped, negative sizes included. The
//! boundary clamp is the only place the minimum size is enforced.

use super::HandleType;
use crate::geometry::Rect;

/// Compute the candidate rectangle for `handle` dragged by `(dx, dy)` from `start`.
///
/// `(dx, dy)` is the total displacement since the gesture was granted, not
/// the delta since the previous move event. The function is pure: the same
/// inputs always give the same rectangle.
pub fn resolve(handle: HandleType, start: &Rect, dx: f64, dy: f64) -> Rect {
    let right = start.right();
    let bottom = start.bottom();

    match handle {
        HandleType::Move => Rect::new(start.x + dx, start.y + dy, start.width, start.height),
        HandleType::TopLeft => {
            let width = start.width - dx;
            let height = start.height - dy;
            Rect::new(right - width, bottom - height, width, height)
        }
        HandleType::TopRight => {
            let width = start.width + dx;
            let height = start.height - dy;
            Rect::new(start.x, bottom - height, width, height)
        }
        HandleType::BottomLeft => {
            let width = start.width - dx;
            let height = start.height + dy;
            Rect::new(right - width, start.y, width, height)
        }
        HandleType::BottomRight => {
            Rect::new(start.x, start.y, start.width + dx, start.height + dy)
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn handle_strategy() -> impl Strategy<Value = HandleType> {
        prop::sample::select(HandleType::ALL.to_vec())
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (0.0f64..=1000.0, 0.0f64..=1000.0, 40.0f64..=1000.0, 40.0f64..=1000.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        /// Property: Resolving is deterministic, replaying an event is harmless.
        #[test]
        fn prop_resolve_is_pure(
            handle in handle_strategy(),
            start in rect_strategy(),
            dx in -2000.0f64..=2000.0,
            dy in -2000.0f64..=2000.0,
        ) {
            let a = resolve(handle, &start, dx, dy);
            let b = resolve(handle, &start, dx, dy);
            prop_assert_eq!(a, b);
        }

        /// Property: Corner handles keep the opposite corner fixed.
        #[test]
        fn prop_opposite_corner_fixed(
            start in rect_strategy(),
            dx in -2000.0f64..=2000.0,
            dy in -2000.0f64..=2000.0,
        ) {
            let tol = 1e-9;

            let r = resolve(HandleType::TopLeft, &start, dx, dy);
            prop_assert!((r.right() - start.right()).abs() < tol);
            prop_assert!((r.bottom() - start.bottom()).abs() < tol);

            let r = resolve(HandleType::TopRight, &start, dx, dy);
            prop_assert_eq!(r.x, start.x);
            prop_assert!((r.bottom() - start.bottom()).abs() < tol);

            let r = resolve(HandleType::BottomLeft, &start, dx, dy);
            prop_assert!((r.right() - start.right()).abs() < tol);
            prop_assert_eq!(r.y, start.y);

            let r = resolve(HandleType::BottomRight, &start, dx, dy);
            prop_assert_eq!(r.x, start.x);
            prop_assert_eq!(r.y, start.y);
        }

        /// Property: Moving never changes the size.
        #[test]
        fn prop_move_keeps_size(
            start in rect_strategy(),
            dx in -2000.0f64..=2000.0,
            dy in -2000.0f64..=2000.0,
        ) {
            let r = resolve(HandleType::Move, &start, dx, dy);
            prop_assert_eq!(r.width, start.width);
            prop_assert_eq!(r.height, start.height);
        }
    }
}
