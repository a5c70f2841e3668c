use std::fmt;

use tracing::{debug, trace};

use crate::animation::clock::PhaseClock;
use crate::animation::debounce::Debounce;
use crate::animation::ease::Ease;
use crate::foundation::core::{Bounds, FrameHandle, TargetId, TimerHandle, TransitionHandle};
use crate::foundation::error::{WavifyError, WavifyResult};
use crate::host::{Attribute, Host, Measure, Tween};
use crate::wave::config::{WaveConfig, WaveOverrides};
use crate::wave::path::build_path;
use crate::wave::sampler::sample_points;

/// Resting states of a wave. The pending frame lives inside `Playing`, so a frame
/// subscription exists exactly when the wave is playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Playing(FrameHandle),
    Paused,
    /// Terminal until `reboot`.
    Killed,
}

/// Per-controller animation bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub lifecycle: Lifecycle,
    pub clock: PhaseClock,
    /// Path morph scheduled by the most recent frame, until the host reports completion.
    pub path_transition: Option<TransitionHandle>,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            lifecycle: Lifecycle::Idle,
            clock: PhaseClock::new(),
            path_transition: None,
        }
    }
}

pub type OnComplete = Box<dyn FnOnce() + 'static>;

/// Parameters of a standalone fill transition.
#[derive(Default)]
pub struct ColorUpdate {
    /// Seconds; defaults to 1.
    pub timing_secs: Option<f64>,
    /// Defaults to the configured color.
    pub color: Option<String>,
    pub on_complete: Option<OnComplete>,
}

impl ColorUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timing(mut self, secs: f64) -> Self {
        self.timing_secs = Some(secs);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for ColorUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorUpdate")
            .field("timing_secs", &self.timing_secs)
            .field("color", &self.color)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

struct ColorTransition {
    handle: TransitionHandle,
    on_complete: Option<OnComplete>,
}

/// Drives one render target: per-frame geometry, pause/resume, teardown and resize restarts.
///
/// The controller never holds its host. Operations borrow one, and the host reports back
/// through [`on_frame`](Self::on_frame), [`on_timer`](Self::on_timer),
/// [`on_resize`](Self::on_resize) and [`on_transition_complete`](Self::on_transition_complete).
/// Deliveries carrying a handle the controller no longer owns are ignored.
pub struct WaveController {
    target: TargetId,
    config: WaveConfig,
    bounds: Bounds,
    state: AnimationState,
    resize: Debounce,
    resize_subscribed: bool,
    color_transition: Option<ColorTransition>,
}

impl fmt::Debug for WaveController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaveController")
            .field("target", &self.target)
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("resize_subscribed", &self.resize_subscribed)
            .field(
                "color_transition",
                &self.color_transition.as_ref().map(|c| c.handle),
            )
            .finish()
    }
}

/// Creates a controller for `target` and boots it.
pub fn wavify<H: Host + ?Sized>(
    host: &mut H,
    target: TargetId,
    config: WaveConfig,
) -> WavifyResult<WaveController> {
    WaveController::new(host, target, config)
}

fn measure_container<H: Measure + ?Sized>(host: &H, selector: &str) -> WavifyResult<Bounds> {
    host.measure(selector).ok_or_else(|| {
        WavifyError::integration(format!("container \"{selector}\" not found on host surface"))
    })
}

impl WaveController {
    /// Validates, measures the container and boots.
    pub fn new<H: Host + ?Sized>(
        host: &mut H,
        target: TargetId,
        config: WaveConfig,
    ) -> WavifyResult<Self> {
        let mut wave = Self::idle(host, target, config)?;
        wave.boot(host);
        Ok(wave)
    }

    /// Validates and measures without touching the render target.
    pub fn idle<H: Host + ?Sized>(
        host: &mut H,
        target: TargetId,
        config: WaveConfig,
    ) -> WavifyResult<Self> {
        config.validate()?;
        let bounds = measure_container(host, &config.container)?;
        Ok(Self {
            target,
            config,
            bounds,
            state: AnimationState::default(),
            resize: Debounce::default(),
            resize_subscribed: false,
            color_transition: None,
        })
    }

    pub fn target(&self) -> TargetId {
        self.target
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state.lifecycle, Lifecycle::Playing(_))
    }

    pub fn phase_secs(&self) -> f64 {
        self.state.clock.total_phase_secs()
    }

    pub fn is_resize_subscribed(&self) -> bool {
        self.resize_subscribed
    }

    /// Applies the fill, starts frames and listens for resizes. Only acts from `Idle`.
    pub fn boot<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.state.lifecycle != Lifecycle::Idle {
            debug!(target_id = self.target.0, lifecycle = ?self.state.lifecycle, "boot ignored");
            return;
        }

        host.set_immediate(self.target, &[Attribute::Fill(Some(self.config.color.clone()))]);
        self.state.clock.reset();
        self.start_frames(host);
        self.subscribe_resize(host);
        debug!(target_id = self.target.0, "booted");
    }

    /// Resumes frame ticks from any state but `Killed`.
    pub fn play<H: Host + ?Sized>(&mut self, host: &mut H) {
        match self.state.lifecycle {
            Lifecycle::Idle | Lifecycle::Paused => {
                self.start_frames(host);
                debug!(target_id = self.target.0, "playing");
            }
            Lifecycle::Playing(_) => {}
            Lifecycle::Killed => {
                debug!(target_id = self.target.0, "play ignored on killed wave");
            }
        }
    }

    /// Stops frame ticks and the in-flight path morph. Fill and phase are kept.
    pub fn pause<H: Host + ?Sized>(&mut self, host: &mut H) {
        let Lifecycle::Playing(frame) = self.state.lifecycle else {
            return;
        };
        host.cancel_frame(frame);
        if let Some(t) = self.state.path_transition.take() {
            host.cancel(t);
        }
        self.state.lifecycle = Lifecycle::Paused;
        debug!(target_id = self.target.0, "paused");
    }

    /// Tears the wave down to a cleared target. Requires an active frame subscription.
    pub fn kill<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.is_playing() {
            debug!(target_id = self.target.0, lifecycle = ?self.state.lifecycle, "kill ignored");
            return;
        }
        self.teardown(host);
        self.state.lifecycle = Lifecycle::Killed;
        debug!(target_id = self.target.0, "killed");
    }

    /// Consumes the controller for a target the host no longer has, dropping its frame,
    /// transitions, resize listener and pending timer whatever the lifecycle.
    pub fn release<H: Host + ?Sized>(mut self, host: &mut H) {
        self.detach(host);
        debug!(target_id = self.target.0, "released");
    }

    /// Tears down unconditionally, merges `overrides` and starts playing again.
    ///
    /// The merged config is validated and the container measured first; on error nothing
    /// changes. Phase time carries over (only boot and resize restarts reset it).
    pub fn reboot<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        overrides: &WaveOverrides,
    ) -> WavifyResult<()> {
        let config = self.config.merged(overrides)?;
        let bounds = measure_container(host, &config.container)?;

        self.teardown(host);
        self.config = config;
        self.bounds = bounds;

        host.set_immediate(
            self.target,
            &[
                Attribute::Fill(Some(self.config.color.clone())),
                Attribute::Opacity(1.0),
            ],
        );
        self.state.lifecycle = Lifecycle::Idle;
        self.start_frames(host);
        self.subscribe_resize(host);
        debug!(target_id = self.target.0, phase = self.phase_secs(), "rebooted");
        Ok(())
    }

    /// Schedules a standalone fill transition; the frame loop is unaffected.
    /// A newer color transition replaces a pending one without running its callback.
    pub fn update_color<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        update: ColorUpdate,
    ) -> WavifyResult<TransitionHandle> {
        let timing = update.timing_secs.unwrap_or(1.0);
        if !timing.is_finite() || timing < 0.0 {
            return Err(WavifyError::configuration(format!(
                "color timing must be finite and >= 0, got {timing}"
            )));
        }
        let color = update.color.unwrap_or_else(|| self.config.color.clone());

        if let Some(prev) = self.color_transition.take() {
            host.cancel(prev.handle);
        }
        let handle = host.transition(
            self.target,
            Tween {
                attribute: Attribute::Fill(Some(color)),
                duration_secs: timing,
                ease: Ease::OutQuad,
            },
        );
        self.color_transition = Some(ColorTransition {
            handle,
            on_complete: update.on_complete,
        });
        Ok(handle)
    }

    /// Frame tick delivery. The first tick without a baseline only records `now_ms`.
    pub fn on_frame<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        frame: FrameHandle,
        now_ms: f64,
    ) -> WavifyResult<()> {
        if self.state.lifecycle != Lifecycle::Playing(frame) {
            trace!(target_id = self.target.0, ?frame, "stale frame ignored");
            return Ok(());
        }

        if let Some(factor) = self.state.clock.tick(now_ms)
            && let Err(err) = self.render(host, factor)
        {
            self.state.lifecycle = Lifecycle::Paused;
            return Err(err);
        }

        self.state.lifecycle = Lifecycle::Playing(host.request_frame(self.target));
        Ok(())
    }

    /// Host resize event; restarts after the debounce window goes quiet.
    pub fn on_resize<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.resize_subscribed {
            return;
        }
        self.resize.trigger(host, self.target);
        trace!(target_id = self.target.0, delay_ms = self.resize.delay_ms(), "resize debounced");
    }

    /// Timer delivery. Only the armed debounce timer restarts the wave.
    pub fn on_timer<H: Host + ?Sized>(&mut self, host: &mut H, timer: TimerHandle) {
        if !self.resize.fire(timer) {
            trace!(target_id = self.target.0, ?timer, "stale timer ignored");
            return;
        }

        self.pause(host);
        if let Some(bounds) = host.measure(&self.config.container) {
            self.bounds = bounds;
        }
        self.state.clock.reset();
        self.play(host);
        debug!(target_id = self.target.0, bounds = ?self.bounds, "restarted after resize");
    }

    /// Transition completion delivery; runs the color callback when it is ours.
    pub fn on_transition_complete(&mut self, handle: TransitionHandle) {
        if self.state.path_transition == Some(handle) {
            self.state.path_transition = None;
            return;
        }
        if self
            .color_transition
            .as_ref()
            .is_some_and(|c| c.handle == handle)
            && let Some(done) = self.color_transition.take().and_then(|c| c.on_complete)
        {
            done();
        }
    }

    fn render<H: Host + ?Sized>(&mut self, host: &mut H, factor: f64) -> WavifyResult<()> {
        let points = sample_points(factor, &self.config, self.bounds.width)?;
        let path = build_path(&points, self.bounds)?;
        trace!(target_id = self.target.0, factor, "frame");

        if let Some(prev) = self.state.path_transition.take() {
            host.cancel(prev);
        }
        self.state.path_transition = Some(host.transition(
            self.target,
            Tween {
                attribute: Attribute::Path(path),
                duration_secs: self.config.speed,
                ease: Ease::InOutQuad,
            },
        ));
        Ok(())
    }

    fn start_frames<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.state.lifecycle = Lifecycle::Playing(host.request_frame(self.target));
    }

    fn subscribe_resize<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.resize_subscribed {
            host.subscribe_resize(self.target);
            self.resize_subscribed = true;
        }
    }

    fn teardown<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.detach(host);
        host.set_immediate(self.target, &Attribute::neutral());
    }

    /// Drops every host registration: frame, transitions, resize listener and timer.
    fn detach<H: Host + ?Sized>(&mut self, host: &mut H) {
        if let Lifecycle::Playing(frame) = self.state.lifecycle {
            host.cancel_frame(frame);
        }
        if let Some(t) = self.state.path_transition.take() {
            host.cancel(t);
        }
        if let Some(c) = self.color_transition.take() {
            host.cancel(c.handle);
        }
        if self.resize_subscribed {
            host.unsubscribe_resize(self.target);
            self.resize_subscribed = false;
        }
        self.resize.cancel(host);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/controller.rs"]
mod tests;
