//! Letterbox ("contain") placement of an image inside its display container.
//!
//! The image is scaled uniformly until it touches the container on one axis
//! and centered on the other, leaving bars of padding where the aspect
//! ratios differ. The crop box may only live inside the displayed image,
//! never in the padding.
//!
//! # Example
//!
//! ```ignore
//! let image = Size::new(4000.0, 3000.0)?;
//! let container = Size::new(1000.0, 800.0)?;
//! let placement = compute_placement(image, container);
//! // 1000x750 image, 25 units of padding above and below
//! assert_eq!(placement.offset_y, 25.0);
//! ```

use crate::geometry::{Rect, Size, EPSILON};
use serde::{Deserialize, Serialize};

/// Where the letterboxed image lands inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Width of the image as displayed (display units)
    pub displayed_width: f64,
    /// Height of the image as displayed (display units)
    pub displayed_height: f64,
    /// Horizontal padding on the left of the image
    pub offset_x: f64,
    /// Vertical padding above the image
    pub offset_y: f64,
}

/// Compute the aspect-preserving, centered placement of `image` in `container`.
///
/// Both sizes are validated on construction, so this cannot fail.
pub fn compute_placement(image: Size, container: Size) -> Placement {
    let image_aspect = image.aspect();
    let container_aspect = container.aspect();

    if image_aspect > container_aspect {
        // Relatively wider image: full width, bars above and below
        let displayed_height = container.width() / image_aspect;
        Placement {
            displayed_width: container.width(),
            displayed_height,
            offset_x: 0.0,
            offset_y: (container.height() - displayed_height) / 2.0,
        }
    } else {
        // Relatively taller (or same aspect): full height, bars left and right
        let displayed_width = container.height() * image_aspect;
        Placement {
            displayed_width,
            displayed_height: container.height(),
            offset_x: (container.width() - displayed_width) / 2.0,
            offset_y: 0.0,
        }
    }
}

impl Placement {
    /// The displayed image area as a rectangle in container coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            self.displayed_width,
            self.displayed_height,
        )
    }

    /// Right edge of the displayed image.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.offset_x + self.displayed_width
    }

    /// Bottom edge of the displayed image.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.offset_y + self.displayed_height
    }

    /// Check whether `rect` lies entirely inside the displayed image.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x >= self.offset_x - EPSILON
            && rect.y >= self.offset_y - EPSILON
            && rect.right() <= self.max_x() + EPSILON
            && rect.bottom() <= self.max_y() + EPSILON
    }

    /// True when the displayed image is smaller than `min_size` on either axis.
    ///
    /// The clamp still produces a valid rectangle in that case (the largest
    /// one that fits), it just cannot honor the minimum size.
    pub fn is_degenerate(&self, min_size: f64) -> bool {
        self.displayed_width < min_size || self.displayed_height < min_size
    }

    /// Horizontal and vertical factors converting display units to image pixels.
    ///
    /// The two agree up to rounding since the placement preserves aspect ratio.
    pub fn scale_to(&self, image: Size) -> (f64, f64) {
        (
            image.width() / self.displayed_width,
            image.height() / self.displayed_height,
        )
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
