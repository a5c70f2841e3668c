use std::f64::consts::PI;

/// Accumulates real elapsed time into the phase that seeds the waveform.
///
/// The first tick without a baseline only records the timestamp. Later ticks fold the
/// wall-clock delta (ms) into `total_phase_secs` and report the phase factor
/// `total_phase_secs * PI`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhaseClock {
    last_update_ms: Option<f64>,
    total_phase_secs: f64,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        let Some(last) = self.last_update_ms else {
            self.last_update_ms = Some(now_ms);
            return None;
        };

        // A host clock stepping backwards must not rewind the phase.
        let elapsed = ((now_ms - last) / 1000.0).max(0.0);
        self.last_update_ms = Some(now_ms);
        self.total_phase_secs += elapsed;
        Some(self.factor())
    }

    pub fn reset(&mut self) {
        self.last_update_ms = None;
        self.total_phase_secs = 0.0;
    }

    pub fn factor(&self) -> f64 {
        self.total_phase_secs * PI
    }

    pub fn total_phase_secs(&self) -> f64 {
        self.total_phase_secs
    }

    pub fn last_update_ms(&self) -> Option<f64> {
        self.last_update_ms
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
