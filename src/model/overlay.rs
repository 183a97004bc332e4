//! Confetti overlay visibility
//!
//! The overlay is shown on [`OverlayTimer::trigger`] and hidden by a
//! deferred reset. Each trigger cancels the previous reset before scheduling
//! its own, so the overlay stays up for the full duration after the most
//! recent trigger.

use super::scheduler::{Scheduler, TaskHandle};
use std::time::{Duration, Instant};

/// How long the overlay stays visible after a trigger
pub const DEFAULT_OVERLAY_DURATION: Duration = Duration::from_millis(3000);

/// Events the app schedules on its deferred task queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Hide the confetti overlay
    HideOverlay,
    /// Start-up confetti burst
    IntroConfetti,
}

#[derive(Debug)]
pub struct OverlayTimer {
    visible: bool,
    duration: Duration,
    /// Outstanding hide task, if any
    pending: Option<TaskHandle>,
    /// When the current burst started
    triggered_at: Option<Instant>,
}

impl Default for OverlayTimer {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_DURATION)
    }
}

impl OverlayTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            visible: false,
            duration,
            pending: None,
            triggered_at: None,
        }
    }

    /// Show the overlay and (re)schedule its reset `duration` from `now`
    pub fn trigger(&mut self, scheduler: &mut Scheduler<TimerEvent>, now: Instant) {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        self.visible = true;
        self.triggered_at = Some(now);
        self.pending = Some(scheduler.schedule(now, self.duration, TimerEvent::HideOverlay));
    }

    /// Apply a fired reset
    ///
    /// Resets that are no longer the pending one are stale and ignored.
    pub fn expire(&mut self, handle: TaskHandle) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        self.visible = false;
        self.triggered_at = None;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn triggered_at(&self) -> Option<Instant> {
        self.triggered_at
    }

    pub fn pending(&self) -> Option<TaskHandle> {
        self.pending
    }
}
