//! The crop region and the invariants it upholds.
//!
//! ## Invariants
//!
//! Whenever the region model holds a rectangle:
//! - `width >= min_size` and `height >= min_size` (or the full displayed
//!   extent, when the displayed image is smaller than `min_size`)
//! - the rectangle lies entirely inside the letterboxed image area
//!
//! The model never repairs a rectangle itself. The [`clamp`] stage does that
//! before every update, and the model rejects anything that slipped through.

pub mod clamp;

pub use clamp::{clamp_region, clamp_with_policy, AxisAnchor, ClampPolicy};

use crate::config::EditorConfig;
use crate::error::RegionError;
use crate::geometry::{Rect, EPSILON};
use crate::placement::Placement;

/// Compute the default crop box: centered, sized as a fraction of the
/// displayed image.
pub fn initial_region(placement: &Placement, config: &EditorConfig) -> Rect {
    let width = placement.displayed_width * config.initial_width_fraction;
    let height = placement.displayed_height * config.initial_height_fraction;
    let candidate = Rect::new(
        placement.offset_x + (placement.displayed_width - width) / 2.0,
        placement.offset_y + (placement.displayed_height - height) / 2.0,
        width,
        height,
    );
    // Small images can make the fractional size fall under the minimum
    clamp_region(candidate, placement, config.min_size)
}

/// Holds the current crop rectangle for one editing session.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionModel {
    rect: Rect,
    placement: Placement,
    min_size: f64,
}

impl RegionModel {
    /// Start a session with the default region for `placement`.
    pub fn new(placement: Placement, config: &EditorConfig) -> Self {
        Self {
            rect: initial_region(&placement, config),
            placement,
            min_size: config.min_size,
        }
    }

    /// The current crop rectangle.
    #[inline]
    pub fn current(&self) -> Rect {
        self.rect
    }

    /// The placement the region is confined to.
    #[inline]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    #[inline]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// Replace the region after it has been clamped.
    ///
    /// Only the gesture state machine and the editor facade update the
    /// region. A rectangle that violates the invariants is rejected and the
    /// previous value kept.
    pub(crate) fn set(&mut self, rect: Rect) -> Result<(), RegionError> {
        self.validate(&rect)?;
        self.rect = rect;
        Ok(())
    }

    /// Swap in a new placement and a rectangle valid for it.
    pub(crate) fn rebase(&mut self, placement: Placement, rect: Rect) -> Result<(), RegionError> {
        let previous = self.placement;
        self.placement = placement;
        if let Err(e) = self.set(rect) {
            self.placement = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Check `rect` against the minimum size and containment invariants.
    pub fn validate(&self, rect: &Rect) -> Result<(), RegionError> {
        if !rect.is_finite() {
            return Err(RegionError::InvariantViolation(format!(
                "non-finite rectangle {rect:?}"
            )));
        }

        let min_w = self.min_size.min(self.placement.displayed_width);
        let min_h = self.min_size.min(self.placement.displayed_height);
        if rect.width < min_w - EPSILON || rect.height < min_h - EPSILON {
            return Err(RegionError::InvariantViolation(format!(
                "{}x{} is below the minimum size {}",
                rect.width, rect.height, self.min_size
            )));
        }

        if !self.placement.contains(rect) {
            return Err(RegionError::InvariantViolation(format!(
                "{rect:?} is outside the displayed image {:?}",
                self.placement.bounds()
            )));
        }

        Ok(())
    }
}
