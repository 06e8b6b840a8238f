//! Geometric primitives shared by every stage of the editor.
//!
//! All values are `f64` display units unless a type says otherwise. The
//! origin is the top-left corner of the container, y grows downward.

use crate::error::RegionError;
use serde::{Deserialize, Serialize};

/// Tolerance used when checking geometric invariants.
///
/// Clamping is exact in real arithmetic but may leave a few ulps of slack
/// in floating point.
pub const EPSILON: f64 = 1e-6;

/// Validated width/height pair (both finite and strictly positive).
///
/// Used for the image's native pixel dimensions as well as the container
/// the image is displayed in. Only serializable: deserializing would skip
/// validation, go through [`Size::new`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Create a size, rejecting zero, negative or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, RegionError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(RegionError::InvalidDimensions { width, height })
        }
    }

    /// Create a size from integer pixel dimensions.
    pub fn from_pixels(width: u32, height: u32) -> Result<Self, RegionError> {
        Self::new(width as f64, height as f64)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width divided by height.
    #[inline]
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// A pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_sq(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Axis-aligned rectangle: top-left corner plus size.
///
/// A `Rect` on its own carries no invariants. The region model is what
/// guarantees minimum size and containment for the crop box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Check whether a point lies inside the rectangle (edges inclusive).
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Check whether every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Component-wise comparison within `tolerance`.
    pub fn approx_eq(&self, other: &Rect, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

/// Clamp `value` into `[lo, hi]` without panicking when `lo > hi`.
///
/// `f64::clamp` asserts `lo <= hi`; rounding can violate that by an ulp
/// when `hi` was computed as `edge - size`. The lower bound wins.
#[inline]
pub(crate) fn clamp_between(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}
