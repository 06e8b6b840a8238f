//! Gesture lifecycle: `Idle -> Active(handle) -> Idle`.
//!
//! The machine owns the anchor snapshot for the active gesture and is the
//! only writer of the region model during a drag.

use super::coalesce::{Emission, FrameCoalescer};
use super::resolve::resolve;
use super::{GestureAnchor, HandleType};
use crate::geometry::{Point, Rect};
use crate::region::{clamp_region, clamp_with_policy, RegionModel};

/// Current phase of the gesture machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Active(GestureAnchor),
}

/// Sequences grant / move / release events for one crop box.
#[derive(Debug, Clone, Default)]
pub struct GestureMachine {
    state: GestureState,
    frames: FrameCoalescer,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.state, GestureState::Active(_))
    }

    /// Handle of the gesture in progress, if any.
    pub fn active_handle(&self) -> Option<HandleType> {
        match self.state {
            GestureState::Active(anchor) => Some(anchor.handle),
            GestureState::Idle => None,
        }
    }

    /// Start a gesture on `handle`, snapshotting `current` as its anchor.
    ///
    /// Only one gesture runs at a time: a grant while another gesture is
    /// active is ignored and `false` is returned.
    pub fn grant(&mut self, handle: HandleType, current: Rect, pointer: Point) -> bool {
        if let GestureState::Active(anchor) = &self.state {
            log::debug!(
                "Ignoring {} grant: {} gesture already active",
                handle,
                anchor.handle
            );
            return false;
        }

        self.state = GestureState::Active(GestureAnchor {
            handle,
            start: current,
            pointer,
        });
        log::debug!("{} gesture granted at {:?}", handle, current);
        true
    }

    /// Apply the total displacement `(dx, dy)` since grant.
    ///
    /// Returns the clamped rectangle now held by `region`, or `None` when
    /// the event was ignored: no active gesture, a different handle, or a
    /// non-finite displacement.
    pub fn on_move(
        &mut self,
        region: &mut RegionModel,
        handle: HandleType,
        dx: f64,
        dy: f64,
    ) -> Option<Rect> {
        let GestureState::Active(anchor) = &self.state else {
            log::trace!("Ignoring {} move: no active gesture", handle);
            return None;
        };
        if anchor.handle != handle {
            log::debug!(
                "Ignoring {} move during {} gesture",
                handle,
                anchor.handle
            );
            return None;
        }
        if !dx.is_finite() || !dy.is_finite() {
            log::warn!("Ignoring non-finite displacement ({}, {})", dx, dy);
            return None;
        }

        let candidate = resolve(handle, &anchor.start, dx, dy);
        let clamped = clamp_with_policy(
            candidate,
            region.placement(),
            region.min_size(),
            handle.clamp_policy(),
        );

        match region.set(clamped) {
            Ok(()) => {
                log::trace!("{} moved by ({}, {}) -> {:?}", handle, dx, dy, clamped);
                self.frames.push_live(clamped);
                Some(clamped)
            }
            Err(e) => {
                log::error!("Dropping {} move: {}", handle, e);
                None
            }
        }
    }

    /// Apply a move given as an absolute pointer position.
    ///
    /// The displacement is measured from the pointer position captured at
    /// grant time.
    pub fn on_move_to(
        &mut self,
        region: &mut RegionModel,
        handle: HandleType,
        pointer: Point,
    ) -> Option<Rect> {
        let GestureState::Active(anchor) = &self.state else {
            return None;
        };
        let dx = pointer.x - anchor.pointer.x;
        let dy = pointer.y - anchor.pointer.y;
        self.on_move(region, handle, dx, dy)
    }

    /// Finish the active gesture.
    ///
    /// Runs one last clamp pass over the region, queues the result as a
    /// terminal emission and returns it. Returns `None` when idle.
    pub fn release(&mut self, region: &mut RegionModel) -> Option<Rect> {
        let GestureState::Active(anchor) = std::mem::take(&mut self.state) else {
            log::trace!("Ignoring release: no active gesture");
            return None;
        };

        let settled = clamp_region(region.current(), region.placement(), region.min_size());
        if let Err(e) = region.set(settled) {
            log::error!("Keeping last region on release: {}", e);
        }

        let rect = region.current();
        self.frames.push_terminal(rect);
        log::debug!("{} gesture released at {:?}", anchor.handle, rect);
        Some(rect)
    }

    /// Abandon the active gesture without a release.
    ///
    /// The region keeps the last clamped value it received and no terminal
    /// emission is queued. Returns `false` when there was nothing to cancel.
    pub fn cancel(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            GestureState::Active(anchor) => {
                log::debug!("{} gesture cancelled", anchor.handle);
                true
            }
            GestureState::Idle => false,
        }
    }

    /// Drain the coalesced update for the current frame.
    pub fn take_frame(&mut self) -> Option<Emission> {
        self.frames.take_frame()
    }

    /// The coalescing buffer, for inspection.
    pub fn frames(&self) -> &FrameCoalescer {
        &self.frames
    }

    /// Queue a region change made outside a gesture (initial placement,
    /// container resize).
    pub(crate) fn publish(&mut self, rect: Rect) {
        self.frames.push_live(rect);
    }

    /// Cancel any gesture and drop pending emissions.
    pub(crate) fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.frames.clear();
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::placement::Placement;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Event {
        Grant(HandleType),
        Move(HandleType, f64, f64),
        Release,
        Cancel,
    }

    fn handle_strategy() -> impl Strategy<Value = HandleType> {
        prop::sample::select(HandleType::ALL.to_vec())
    }

    fn event_strategy() -> impl Strategy<Value = Event> {
        prop_oneof![
            handle_strategy().prop_map(Event::Grant),
            (handle_strategy(), -3000.0f64..=3000.0, -3000.0f64..=3000.0)
                .prop_map(|(h, dx, dy)| Event::Move(h, dx, dy)),
            Just(Event::Release),
            Just(Event::Cancel),
        ]
    }

    fn placement_strategy() -> impl Strategy<Value = Placement> {
        (0.0f64..=300.0, 0.0f64..=300.0, 50.0f64..=1500.0, 50.0f64..=1500.0).prop_map(
            |(offset_x, offset_y, displayed_width, displayed_height)| Placement {
                displayed_width,
                displayed_height,
                offset_x,
                offset_y,
            },
        )
    }

    proptest! {
        /// Property: Whatever the event sequence, the region and every
        /// emitted rectangle satisfy the invariants.
        #[test]
        fn prop_invariants_hold_for_any_sequence(
            p in placement_strategy(),
            events in prop::collection::vec(event_strategy(), 1..40),
        ) {
            let config = EditorConfig::default();
            let mut region = RegionModel::new(p, &config);
            let mut m = GestureMachine::new();

            for event in events {
                let emitted = match event {
                    Event::Grant(h) => {
                        m.grant(h, region.current(), Point::default());
                        None
                    }
                    Event::Move(h, dx, dy) => m.on_move(&mut region, h, dx, dy),
                    Event::Release => m.release(&mut region),
                    Event::Cancel => {
                        m.cancel();
                        None
                    }
                };

                if let Some(r) = emitted {
                    prop_assert!(region.validate(&r).is_ok(), "{:?} invalid", r);
                }
                prop_assert!(region.validate(&region.current()).is_ok());
            }
        }

        /// Property: Dragging bottomRight outward never moves the top-left
        /// corner while the box stays clear of the edges.
        #[test]
        fn prop_bottom_right_anchor_fixed(
            steps in prop::collection::vec((0.0f64..=5.0, 0.0f64..=5.0), 1..20),
        ) {
            let p = Placement {
                displayed_width: 1000.0,
                displayed_height: 750.0,
                offset_x: 0.0,
                offset_y: 25.0,
            };
            let mut region = RegionModel::new(p, &EditorConfig::default());
            let start = region.current();
            let mut m = GestureMachine::new();
            m.grant(HandleType::BottomRight, start, Point::default());

            let (mut dx, mut dy) = (0.0, 0.0);
            for (sx, sy) in steps {
                dx += sx;
                dy += sy;
                let r = m.on_move(&mut region, HandleType::BottomRight, dx, dy).unwrap();
                prop_assert_eq!(r.x, start.x);
                prop_assert_eq!(r.y, start.y);
                prop_assert!((r.width - (start.width + dx)).abs() < 1e-9);
                prop_assert!((r.height - (start.height + dy)).abs() < 1e-9);
            }
        }
    }
}
