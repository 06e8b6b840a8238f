//! Mapping the finished crop box from display space to image space.
//!
//! The editor works in display space: container coordinates of the
//! letterboxed preview. Once editing finishes the rectangle is mapped back
//! onto the source image's native pixel grid.
//!
//! # Coordinate Systems
//!
//! - **Display space**: `f64` container units, origin at the container's
//!   top-left corner, includes the letterbox padding
//! - **Image space**: `f64` source pixels, origin at the image's top-left
//! - **Pixel region**: image space rounded to whole pixels
//! - **Normalized crop**: image space divided by the image dimensions
//!   (0.0 to 1.0), independent of resolution

mod crop;
mod space;

pub use crop::{NormalizedCrop, PixelRegion};
pub use space::{to_display_space, to_image_space, SCALE_TOLERANCE};
