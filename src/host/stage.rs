use std::ops::Range;

use tracing::debug;

use crate::foundation::core::{Bounds, TargetId};
use crate::foundation::error::{WavifyError, WavifyResult};
use crate::host::headless::HeadlessHost;
use crate::wave::batch::create_waves;
use crate::wave::config::{WaveBatch, WaveConfig};
use crate::wave::controller::{WaveController, wavify};

/// Highest frame rate [`Stage::run_for`] accepts.
pub const MAX_FPS: f64 = 1000.0;

/// Owns a [`HeadlessHost`] and the waves living on it, and plays host-side event delivery
/// against a virtual clock.
#[derive(Debug, Default)]
pub struct Stage {
    host: HeadlessHost,
    waves: Vec<WaveController>,
}

impl Stage {
    pub fn new(host: HeadlessHost) -> Self {
        Self {
            host,
            waves: Vec::new(),
        }
    }

    pub fn host(&self) -> &HeadlessHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut HeadlessHost {
        &mut self.host
    }

    pub fn now_ms(&self) -> f64 {
        self.host.now_ms()
    }

    pub fn waves(&self) -> &[WaveController] {
        &self.waves
    }

    pub fn wave(&self, index: usize) -> Option<&WaveController> {
        self.waves.get(index)
    }

    /// Runs `f` with mutable access to one wave and the host it lives on.
    pub fn with_wave<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut WaveController, &mut HeadlessHost) -> R,
    ) -> Option<R> {
        let wave = self.waves.get_mut(index)?;
        Some(f(wave, &mut self.host))
    }

    /// Adds a target to `config.container` and boots a wave on it.
    pub fn spawn(&mut self, config: WaveConfig) -> WavifyResult<usize> {
        let key = format!("wave-{}", self.waves.len());
        let target = self.host.add_target(&config.container, key);
        let wave = wavify(&mut self.host, target, config)?;
        self.waves.push(wave);
        Ok(self.waves.len() - 1)
    }

    /// Synthesizes one target per batch entry and boots a wave on each.
    ///
    /// Synthesis replaces the container's targets, so waves bound to targets that are gone
    /// afterwards are released and dropped. Indices of the surviving waves may shift.
    pub fn spawn_batch(&mut self, batch: &WaveBatch) -> WavifyResult<Range<usize>> {
        let waves = create_waves(&mut self.host, &batch.waves, Some(&batch.container))?;
        self.prune_orphans();
        let start = self.waves.len();
        self.waves.extend(waves);
        Ok(start..self.waves.len())
    }

    fn prune_orphans(&mut self) {
        let (kept, orphaned): (Vec<_>, Vec<_>) = std::mem::take(&mut self.waves)
            .into_iter()
            .partition(|w| self.host.target(w.target()).is_some());
        if !orphaned.is_empty() {
            debug!(count = orphaned.len(), "releasing waves on replaced targets");
        }
        for wave in orphaned {
            wave.release(&mut self.host);
        }
        self.waves = kept;
    }

    /// Moves the clock forward by `dt_ms` and delivers, in order: due timers, finished
    /// transitions, then one tick for every frame requested before this call.
    pub fn advance(&mut self, dt_ms: f64) -> WavifyResult<()> {
        let now = self.host.now_ms() + dt_ms.max(0.0);
        self.host.set_now_ms(now);

        for (timer, target) in self.host.take_due_timers(now) {
            for wave in self.waves.iter_mut().filter(|w| w.target() == target) {
                wave.on_timer(&mut self.host, timer);
            }
        }

        for (handle, target) in self.host.step_tweens(now) {
            for wave in self.waves.iter_mut().filter(|w| w.target() == target) {
                wave.on_transition_complete(handle);
            }
        }

        for (frame, target) in self.host.take_frames() {
            for wave in self.waves.iter_mut().filter(|w| w.target() == target) {
                wave.on_frame(&mut self.host, frame, now)?;
            }
        }
        Ok(())
    }

    /// Advances in steps of `1000 / fps` ms until `duration_ms` has elapsed.
    ///
    /// `fps` must be finite and within `(0, MAX_FPS]`.
    pub fn run_for(&mut self, duration_ms: f64, fps: f64) -> WavifyResult<()> {
        if !fps.is_finite() || fps <= 0.0 || fps > MAX_FPS {
            return Err(WavifyError::configuration(format!(
                "fps must be finite and in (0, {MAX_FPS}], got {fps}"
            )));
        }
        if !duration_ms.is_finite() {
            return Err(WavifyError::configuration(format!(
                "duration must be finite, got {duration_ms}"
            )));
        }
        let step = 1000.0 / fps;
        let end = self.host.now_ms() + duration_ms.max(0.0);
        while self.host.now_ms() + step <= end {
            let before = self.host.now_ms();
            self.advance(step)?;
            // Far from zero the step can vanish in rounding.
            if self.host.now_ms() <= before {
                break;
            }
        }
        let rest = end - self.host.now_ms();
        if rest > 0.0 {
            self.advance(rest)?;
        }
        Ok(())
    }

    /// Updates the container's size and fires a host resize event to every subscriber.
    pub fn resize(&mut self, selector: &str, bounds: Bounds) {
        self.host.set_container_bounds(selector, bounds);
        let subscribers: Vec<TargetId> = self.host.resize_subscribers();
        debug!(selector, ?bounds, subscribers = subscribers.len(), "resize");
        for target in subscribers {
            for wave in self.waves.iter_mut().filter(|w| w.target() == target) {
                wave.on_resize(&mut self.host);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/stage.rs"]
mod tests;
