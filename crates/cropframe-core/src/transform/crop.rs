//! Output forms of an image-space crop.
//!
//! An image-space [`Rect`] is still fractional. Croppers want either whole
//! pixels ([`PixelRegion`]) or a resolution-independent description
//! ([`NormalizedCrop`]) that can be applied to a preview and the full
//! resolution photo alike.

use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};

/// Crop region in whole source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRegion {
    /// Round an image-space rectangle to whole pixels.
    ///
    /// # Behavior
    ///
    /// - Coordinates are rounded to the nearest pixel and clamped to the image
    /// - The region never extends past the right or bottom edge
    /// - Minimum output dimension is 1x1 pixels
    pub fn from_image_rect(rect: &Rect, image: Size) -> Self {
        let img_w = image.width().round().max(1.0) as u32;
        let img_h = image.height().round().max(1.0) as u32;

        let px_left = rect.x.max(0.0).round() as u32;
        let px_top = rect.y.max(0.0).round() as u32;
        let px_width = rect.width.max(0.0).round() as u32;
        let px_height = rect.height.max(0.0).round() as u32;

        // Clamp to image bounds
        let px_left = px_left.min(img_w.saturating_sub(1));
        let px_top = px_top.min(img_h.saturating_sub(1));
        let px_right = px_left.saturating_add(px_width).min(img_w);
        let px_bottom = px_top.saturating_add(px_height).min(img_h);

        Self {
            x: px_left,
            y: px_top,
            width: px_right.saturating_sub(px_left).max(1),
            height: px_bottom.saturating_sub(px_top).max(1),
        }
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Crop region relative to the image dimensions.
///
/// - (0.0, 0.0) = top-left corner
/// - (1.0, 1.0) = bottom-right corner
/// - width/height are fractions of the full image size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCrop {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for NormalizedCrop {
    fn default() -> Self {
        Self::FULL
    }
}

impl NormalizedCrop {
    /// The whole image.
    pub const FULL: NormalizedCrop = NormalizedCrop {
        left: 0.0,
        top: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Normalize an image-space rectangle, clamping every value to 0.0..=1.0.
    pub fn from_image_rect(rect: &Rect, image: Size) -> Self {
        let left = (rect.x / image.width()).clamp(0.0, 1.0);
        let top = (rect.y / image.height()).clamp(0.0, 1.0);
        Self {
            left,
            top,
            width: (rect.width / image.width()).clamp(0.0, 1.0 - left),
            height: (rect.height / image.height()).clamp(0.0, 1.0 - top),
        }
    }

    /// Scale back to image space for an image of the given size.
    pub fn to_image_rect(&self, image: Size) -> Rect {
        Rect::new(
            self.left * image.width(),
            self.top * image.height(),
            self.width * image.width(),
            self.height * image.height(),
        )
    }

    /// Returns true when the crop covers the whole image.
    pub fn is_full(&self) -> bool {
        self.left <= 0.0 && self.top <= 0.0 && self.width >= 1.0 && self.height >= 1.0
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions.
    fn dimensions_strategy() -> impl Strategy<Value = Size> {
        (1u32..=8000, 1u32..=8000).prop_map(|(w, h)| Size::from_pixels(w, h).unwrap())
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -1000.0f64..=9000.0,
            -1000.0f64..=9000.0,
            0.0f64..=9000.0,
            0.0f64..=9000.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        /// Property: Pixel regions are at least 1x1 and inside the image.
        #[test]
        fn prop_pixel_region_valid(
            image in dimensions_strategy(),
            rect in rect_strategy(),
        ) {
            let r = PixelRegion::from_image_rect(&rect, image);
            prop_assert!(r.width >= 1, "Width should be at least 1");
            prop_assert!(r.height >= 1, "Height should be at least 1");
            prop_assert!(r.x + r.width <= image.width() as u32);
            prop_assert!(r.y + r.height <= image.height() as u32);
        }

        /// Property: Normalized values stay within 0.0..=1.0.
        #[test]
        fn prop_normalized_in_unit_range(
            image in dimensions_strategy(),
            rect in rect_strategy(),
        ) {
            let n = NormalizedCrop::from_image_rect(&rect, image);
            prop_assert!((0.0..=1.0).contains(&n.left));
            prop_assert!((0.0..=1.0).contains(&n.top));
            prop_assert!(n.left + n.width <= 1.0 + 1e-12);
            prop_assert!(n.top + n.height <= 1.0 + 1e-12);
        }
    }
}
