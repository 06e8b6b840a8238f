//! Frame-aligned coalescing of region updates.
//!
//! Pointer move events can arrive several times per rendered frame. The UI
//! layer only needs the freshest rectangle once per frame, so updates are
//! parked here and drained by the caller from its frame callback (for
//! example `requestAnimationFrame`).
//!
//! A live update replaces any older live update still waiting. A terminal
//! update (gesture release) is kept separately and is always delivered
//! before any live update queued after it, so it is never lost to a burst
//! of events from the next gesture.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// One update handed to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emission {
    pub rect: Rect,
    /// True for the authoritative value produced on gesture release
    pub terminal: bool,
}

/// Holds at most one pending live update and one pending terminal update.
#[derive(Debug, Clone, Default)]
pub struct FrameCoalescer {
    live: Option<Rect>,
    terminal: Option<Rect>,
    superseded: u64,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a live update, replacing an older one not yet drained.
    pub fn push_live(&mut self, rect: Rect) {
        if self.live.replace(rect).is_some() {
            self.superseded += 1;
        }
    }

    /// Queue the terminal update of a gesture.
    ///
    /// A live update still waiting belongs to the same gesture and is older
    /// than the terminal value, so it is discarded.
    pub fn push_terminal(&mut self, rect: Rect) {
        if self.live.take().is_some() {
            self.superseded += 1;
        }
        self.terminal = Some(rect);
    }

    /// Drain the update for this frame, terminal updates first.
    pub fn take_frame(&mut self) -> Option<Emission> {
        if let Some(rect) = self.terminal.take() {
            return Some(Emission {
                rect,
                terminal: true,
            });
        }
        self.live.take().map(|rect| Emission {
            rect,
            terminal: false,
        })
    }

    /// Returns true if an update is waiting.
    pub fn has_pending(&self) -> bool {
        self.live.is_some() || self.terminal.is_some()
    }

    /// Number of live updates that were replaced before being drained.
    pub fn superseded(&self) -> u64 {
        self.superseded
    }

    /// Drop everything pending.
    pub fn clear(&mut self) {
        self.live = None;
        self.terminal = None;
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
