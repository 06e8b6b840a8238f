//! Cropframe Core - Crop region editor geometry
//!
//! This crate provides the toolkit-independent core of an interactive crop
//! box: letterbox placement of a photo in its display container, the
//! anchor-based move/resize algorithm driven by pointer drags, the boundary
//! clamp, and the mapping of the final box onto the source image's pixels.
//!
//! ## Pipeline
//!
//! 1. [`compute_placement`] - where the image sits inside the container
//! 2. [`initial_region`] - default centered crop box
//! 3. [`GestureMachine`] - grant / move / release, each move resolved
//!    against the gesture-start snapshot and clamped
//! 4. [`to_image_space`] - display rectangle to source pixels
//!
//! [`RegionEditor`] bundles all of it behind one owned value.
//!
//! The crate produces geometry only. It never touches pixels, owns no
//! threads and never blocks.

pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod observer;
pub mod placement;
pub mod region;
pub mod transform;

pub use config::{EditorConfig, DEFAULT_HANDLE_SIZE, DEFAULT_MIN_SIZE};
pub use editor::RegionEditor;
pub use error::RegionError;
pub use geometry::{Point, Rect, Size};
pub use gesture::{hit_test, resolve, Emission, GestureAnchor, GestureMachine, HandleType};
pub use observer::{FrameStats, FrameSummary, GestureObserver, NoopObserver, PerformanceTier};
pub use placement::{compute_placement, Placement};
pub use region::{clamp_region, initial_region, RegionModel};
pub use transform::{to_display_space, to_image_space, NormalizedCrop, PixelRegion};
