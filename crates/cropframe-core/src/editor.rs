//! Region editor facade.
//!
//! [`RegionEditor`] owns everything one crop session needs: the placement
//! of the image in its container, the region model, the gesture state
//! machine and an optional observer. A UI layer forwards pointer events to
//! it, drains one [`Emission`] per rendered frame, and asks for the image
//! space crop once the user confirms.
//!
//! # Example
//!
//! ```ignore
//! let image = Size::new(4000.0, 3000.0)?;
//! let container = Size::new(1000.0, 800.0)?;
//! let mut editor = RegionEditor::new(image, container, EditorConfig::default())?;
//!
//! editor.grant(HandleType::BottomRight);
//! editor.move_by(HandleType::BottomRight, 50.0, 20.0);
//! editor.release();
//!
//! let crop = editor.pixel_crop();
//! ```

use crate::config::EditorConfig;
use crate::error::RegionError;
use crate::geometry::{Point, Rect, Size};
use crate::gesture::{hit_test, Emission, GestureMachine, HandleType};
use crate::observer::{GestureObserver, NoopObserver};
use crate::placement::{compute_placement, Placement};
use crate::region::{clamp_region, RegionModel};
use crate::transform::{to_display_space, to_image_space, NormalizedCrop, PixelRegion};
use web_time::Instant;

/// Interactive crop box over a letterboxed image.
#[derive(Debug, Clone)]
pub struct RegionEditor<O = NoopObserver> {
    config: EditorConfig,
    image: Size,
    container: Size,
    region: RegionModel,
    gestures: GestureMachine,
    observer: O,
}

impl RegionEditor<NoopObserver> {
    /// Create an editor for `image` shown in `container`.
    ///
    /// The crop box starts at its default centered position, which is also
    /// queued as the first emission.
    pub fn new(image: Size, container: Size, config: EditorConfig) -> Result<Self, RegionError> {
        Self::with_observer(image, container, config, NoopObserver)
    }
}

impl<O: GestureObserver> RegionEditor<O> {
    /// Create an editor reporting gesture events to `observer`.
    pub fn with_observer(
        image: Size,
        container: Size,
        config: EditorConfig,
        observer: O,
    ) -> Result<Self, RegionError> {
        config.validate()?;

        let placement = placement_for(image, container, &config);
        let region = RegionModel::new(placement, &config);
        let mut gestures = GestureMachine::new();
        gestures.publish(region.current());

        log::debug!(
            "Region editor ready: image {}x{}, container {}x{}, region {:?}",
            image.width(),
            image.height(),
            container.width(),
            container.height(),
            region.current()
        );

        Ok(Self {
            config,
            image,
            container,
            region,
            gestures,
            observer,
        })
    }

    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[inline]
    pub fn placement(&self) -> &Placement {
        self.region.placement()
    }

    /// Current crop box in display space.
    #[inline]
    pub fn region(&self) -> Rect {
        self.region.current()
    }

    #[inline]
    pub fn image_size(&self) -> Size {
        self.image
    }

    #[inline]
    pub fn container_size(&self) -> Size {
        self.container
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn is_active(&self) -> bool {
        self.gestures.is_active()
    }

    pub fn active_handle(&self) -> Option<HandleType> {
        self.gestures.active_handle()
    }

    /// Handle under `point`, using the configured handle size.
    pub fn hit_test(&self, point: Point) -> Option<HandleType> {
        hit_test(&self.region.current(), point, self.config.handle_size)
    }

    /// Start a gesture on `handle` from the current region.
    ///
    /// Returns `false` if another gesture is already active.
    pub fn grant(&mut self, handle: HandleType) -> bool {
        self.grant_with_pointer(handle, Point::default())
    }

    /// Start a gesture on whichever handle lies under `point`.
    ///
    /// The pointer position is kept so later [`move_to`](Self::move_to)
    /// calls can pass absolute positions. Returns the grabbed handle, or
    /// `None` when nothing was hit or a gesture is already active.
    pub fn grant_at(&mut self, point: Point) -> Option<HandleType> {
        let handle = self.hit_test(point)?;
        self.grant_with_pointer(handle, point).then_some(handle)
    }

    fn grant_with_pointer(&mut self, handle: HandleType, pointer: Point) -> bool {
        let granted = self.gestures.grant(handle, self.region.current(), pointer);
        if granted {
            self.observer.on_grant(handle);
        }
        granted
    }

    /// Apply the total displacement since grant and return the region.
    ///
    /// Ignored events (no active gesture, wrong handle, non-finite values)
    /// leave the region unchanged; the unchanged region is returned.
    pub fn move_by(&mut self, handle: HandleType, dx: f64, dy: f64) -> Rect {
        let started = Instant::now();
        if self
            .gestures
            .on_move(&mut self.region, handle, dx, dy)
            .is_some()
        {
            self.observer.on_move(handle, started.elapsed());
        }
        self.region.current()
    }

    /// Apply a move given as the absolute pointer position.
    pub fn move_to(&mut self, handle: HandleType, pointer: Point) -> Rect {
        let started = Instant::now();
        if self
            .gestures
            .on_move_to(&mut self.region, handle, pointer)
            .is_some()
        {
            self.observer.on_move(handle, started.elapsed());
        }
        self.region.current()
    }

    /// End the active gesture and return the authoritative region.
    ///
    /// When idle, returns the current region without queueing an emission.
    pub fn release(&mut self) -> Rect {
        let handle = self.gestures.active_handle();
        match (self.gestures.release(&mut self.region), handle) {
            (Some(rect), Some(handle)) => {
                self.observer.on_release(handle, &rect);
                rect
            }
            _ => self.region.current(),
        }
    }

    /// Abandon the active gesture, keeping the last clamped region.
    pub fn cancel(&mut self) -> bool {
        let handle = self.gestures.active_handle();
        let cancelled = self.gestures.cancel();
        if let (true, Some(handle)) = (cancelled, handle) {
            self.observer.on_cancel(handle);
        }
        cancelled
    }

    /// Drain the coalesced update for this frame.
    ///
    /// Call once per rendered frame. Returns `None` when nothing changed.
    pub fn next_frame(&mut self) -> Option<Emission> {
        self.gestures.take_frame()
    }

    /// The container was resized: recompute the placement and carry the
    /// selection over to the same part of the image.
    ///
    /// Any active gesture is cancelled, its anchor refers to the old layout.
    pub fn resize_container(&mut self, container: Size) {
        self.cancel();

        let old = *self.region.placement();
        let placement = placement_for(self.image, container, &self.config);
        let image_rect = to_image_space(&self.region.current(), &old, self.image);
        let carried = clamp_region(
            to_display_space(&image_rect, &placement, self.image),
            &placement,
            self.config.min_size,
        );

        self.container = container;
        self.rebase(placement, carried);
    }

    /// A new image replaces the current one: new placement, default region.
    pub fn load_image(&mut self, image: Size) {
        self.image = image;
        let placement = placement_for(image, self.container, &self.config);
        self.region = RegionModel::new(placement, &self.config);
        self.gestures.reset();
        self.gestures.publish(self.region.current());
        log::debug!("Loaded {}x{} image", image.width(), image.height());
    }

    /// Put the crop box back to its default position.
    pub fn reset(&mut self) {
        let placement = *self.region.placement();
        self.region = RegionModel::new(placement, &self.config);
        self.gestures.reset();
        self.gestures.publish(self.region.current());
    }

    /// Current region in source image pixels (fractional).
    pub fn image_crop(&self) -> Rect {
        to_image_space(&self.region.current(), self.region.placement(), self.image)
    }

    /// Current region rounded to whole source pixels.
    pub fn pixel_crop(&self) -> PixelRegion {
        PixelRegion::from_image_rect(&self.image_crop(), self.image)
    }

    /// Current region relative to the image dimensions.
    pub fn normalized_crop(&self) -> NormalizedCrop {
        NormalizedCrop::from_image_rect(&self.image_crop(), self.image)
    }

    fn rebase(&mut self, placement: Placement, rect: Rect) {
        if let Err(e) = self.region.rebase(placement, rect) {
            log::error!("Resetting region after failed rebase: {}", e);
            self.region = RegionModel::new(placement, &self.config);
        }
        self.gestures.publish(self.region.current());
    }
}

fn placement_for(image: Size, container: Size, config: &EditorConfig) -> Placement {
    let placement = compute_placement(image, container);
    if placement.is_degenerate(config.min_size) {
        log::warn!(
            "Displayed image {}x{} is smaller than the minimum crop size {}",
            placement.displayed_width,
            placement.displayed_height,
            config.min_size
        );
    }
    placement
}
