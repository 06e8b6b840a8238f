//! Display space <-> image space conversion.

use crate::geometry::{clamp_between, Rect, Size};
use crate::placement::Placement;

/// Largest relative disagreement tolerated between the horizontal and
/// vertical scale factors before it is reported.
pub const SCALE_TOLERANCE: f64 = 1e-6;

/// Map a display-space rectangle onto the source image's pixel grid.
///
/// `placement` must be the placement computed for `image`. The result is
/// clamped to the image as a safety net against accumulated rounding; for a
/// rectangle inside the displayed image it moves values by a fraction of a
/// pixel at most.
///
/// ```text
/// scale  = image_width / displayed_width
/// x      = clamp((rect.x - offset_x) * scale, 0, image_width)
/// y      = clamp((rect.y - offset_y) * scale, 0, image_height)
/// width  = min(rect.width * scale, image_width - x)
/// height = min(rect.height * scale, image_height - y)
/// ```
pub fn to_image_space(rect: &Rect, placement: &Placement, image: Size) -> Rect {
    let (scale, scale_y) = placement.scale_to(image);
    if (scale - scale_y).abs() > scale * SCALE_TOLERANCE {
        log::warn!(
            "Placement scale mismatch: {} horizontal vs {} vertical",
            scale,
            scale_y
        );
    }

    let x = clamp_between((rect.x - placement.offset_x) * scale, 0.0, image.width());
    let y = clamp_between((rect.y - placement.offset_y) * scale, 0.0, image.height());
    let width = (rect.width * scale).min(image.width() - x);
    let height = (rect.height * scale).min(image.height() - y);

    Rect::new(x, y, width, height)
}

/// Map an image-space rectangle back into display space.
///
/// Inverse of [`to_image_space`] for rectangles inside the image.
pub fn to_display_space(rect: &Rect, placement: &Placement, image: Size) -> Rect {
    let (scale, _) = placement.scale_to(image);
    Rect::new(
        rect.x / scale + placement.offset_x,
        rect.y / scale + placement.offset_y,
        rect.width / scale,
        rect.height / scale,
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::placement::compute_placement;
    use proptest::prelude::*;

    fn size_strategy(max: f64) -> impl Strategy<Value = Size> {
        (10.0f64..=max, 10.0f64..=max).prop_map(|(w, h)| Size::new(w, h).unwrap())
    }

    proptest! {
        /// Property: Mapping an in-bounds rectangle to image space and
        /// scaling back recovers it.
        #[test]
        fn prop_round_trip_in_bounds(
            image in size_strategy(8000.0),
            container in size_strategy(2000.0),
            fx in 0.0f64..=1.0,
            fy in 0.0f64..=1.0,
            fw in 0.0f64..=1.0,
            fh in 0.0f64..=1.0,
        ) {
            let p = compute_placement(image, container);
            let width = fw * p.displayed_width;
            let height = fh * p.displayed_height;
            let display = Rect::new(
                p.offset_x + fx * (p.displayed_width - width),
                p.offset_y + fy * (p.displayed_height - height),
                width,
                height,
            );

            let back = to_display_space(&to_image_space(&display, &p, image), &p, image);
            prop_assert!(back.approx_eq(&display, 1e-6), "{:?} vs {:?}", back, display);
        }

        /// Property: The result never leaves the image.
        #[test]
        fn prop_result_inside_image(
            image in size_strategy(8000.0),
            container in size_strategy(2000.0),
            x in -500.0f64..=2500.0,
            y in -500.0f64..=2500.0,
            w in 0.0f64..=3000.0,
            h in 0.0f64..=3000.0,
        ) {
            let p = compute_placement(image, container);
            let r = to_image_space(&Rect::new(x, y, w, h), &p, image);

            prop_assert!(r.x >= 0.0 && r.x <= image.width());
            prop_assert!(r.y >= 0.0 && r.y <= image.height());
            prop_assert!(r.right() <= image.width() + 1e-6);
            prop_assert!(r.bottom() <= image.height() + 1e-6);
        }
    }
}
