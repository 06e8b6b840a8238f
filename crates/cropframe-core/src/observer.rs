//! Optional instrumentation of gesture processing.
//!
//! The editor reports lifecycle events to an injected [`GestureObserver`].
//! [`NoopObserver`] is the default and compiles away. [`FrameStats`]
//! records how long each move event took to process and classifies the
//! average against frame budgets.

use crate::geometry::Rect;
use crate::gesture::HandleType;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Receives gesture lifecycle events from a region editor.
///
/// Every method has an empty default so observers only implement what they
/// care about.
pub trait GestureObserver {
    fn on_grant(&mut self, _handle: HandleType) {}

    /// Called after each applied move with the time spent resolving,
    /// clamping and storing the new region.
    fn on_move(&mut self, _handle: HandleType, _elapsed: Duration) {}

    fn on_release(&mut self, _handle: HandleType, _rect: &Rect) {}

    fn on_cancel(&mut self, _handle: HandleType) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GestureObserver for NoopObserver {}

/// Responsiveness classes for average move processing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PerformanceTier {
    /// At most 7ms: well inside a 120Hz frame
    Fluid,
    /// At most 16ms: fits a 60Hz frame
    Smooth,
    /// At most 33ms: 30Hz, slight visible lag
    Good,
    /// Anything slower
    Sluggish,
}

impl PerformanceTier {
    /// Classify an average processing time.
    pub fn classify(average: Duration) -> Self {
        if average <= Duration::from_millis(7) {
            PerformanceTier::Fluid
        } else if average <= Duration::from_millis(16) {
            PerformanceTier::Smooth
        } else if average <= Duration::from_millis(33) {
            PerformanceTier::Good
        } else {
            PerformanceTier::Sluggish
        }
    }
}

/// Aggregated view of the samples recorded by [`FrameStats`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSummary {
    /// Number of move events measured
    pub samples: u64,
    /// Completed gestures (releases)
    pub gestures: u64,
    /// Abandoned gestures
    pub cancelled: u64,
    /// Mean move processing time in milliseconds
    pub average_ms: f64,
    /// Slowest move processing time in milliseconds
    pub max_ms: f64,
    /// `None` until at least one move was measured
    pub tier: Option<PerformanceTier>,
}

/// Observer collecting move timing statistics.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    samples: u64,
    total: Duration,
    max: Duration,
    gestures: u64,
    cancelled: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mean processing time per move, `None` without samples.
    pub fn average(&self) -> Option<Duration> {
        u32::try_from(self.samples)
            .ok()
            .filter(|n| *n > 0)
            .map(|n| self.total / n)
    }

    pub fn summary(&self) -> FrameSummary {
        let average = self.average();
        FrameSummary {
            samples: self.samples,
            gestures: self.gestures,
            cancelled: self.cancelled,
            average_ms: average.map_or(0.0, |d| d.as_secs_f64() * 1000.0),
            max_ms: self.max.as_secs_f64() * 1000.0,
            tier: average.map(PerformanceTier::classify),
        }
    }

    /// Forget all recorded samples.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl GestureObserver for FrameStats {
    fn on_move(&mut self, _handle: HandleType, elapsed: Duration) {
        self.samples += 1;
        self.total += elapsed;
        self.max = self.max.max(elapsed);
    }

    fn on_release(&mut self, _handle: HandleType, _rect: &Rect) {
        self.gestures += 1;
    }

    fn on_cancel(&mut self, _handle: HandleType) {
        self.cancelled += 1;
    }
}
