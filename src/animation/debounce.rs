use crate::foundation::core::{TargetId, TimerHandle};
use crate::host::TimerScheduler;

/// Quiet period applied to host resize bursts.
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;

/// Owned, cancelable trailing-edge debounce timer.
///
/// At most one host timer is outstanding; triggering while one is pending clears it and
/// arms a fresh one, so a burst collapses into a single firing `delay_ms` after the last event.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay_ms: f64,
    pending: Option<TimerHandle>,
}

impl Debounce {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn trigger<H: TimerScheduler + ?Sized>(&mut self, host: &mut H, target: TargetId) {
        if let Some(prev) = self.pending.take() {
            host.clear_timeout(prev);
        }
        self.pending = Some(host.set_timeout(target, self.delay_ms));
    }

    pub fn cancel<H: TimerScheduler + ?Sized>(&mut self, host: &mut H) {
        if let Some(prev) = self.pending.take() {
            host.clear_timeout(prev);
        }
    }

    /// Consumes a timer delivery. Returns `true` only for the currently armed timer.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE_MS)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/debounce.rs"]
mod tests;
