use super::*;
use crate::foundation::core::{
    Bounds, FrameHandle, TargetId, TimerHandle, TransitionHandle,
};
use crate::host::{
    Attribute, FrameScheduler, HeadlessHost, Measure, ResizeEvents, TargetFactory,
    TimerScheduler, TransitionEngine, Tween,
};
use crate::wave::controller::Lifecycle;

fn host() -> HeadlessHost {
    HeadlessHost::new().with_container("#app", Bounds::new(800.0, 400.0).unwrap())
}

/// Loses track of one synthesized target.
struct LossyHost {
    inner: HeadlessHost,
    lost: &'static str,
}

impl Measure for LossyHost {
    fn measure(&self, selector: &str) -> Option<Bounds> {
        self.inner.measure(selector)
    }
}

impl FrameScheduler for LossyHost {
    fn request_frame(&mut self, target: TargetId) -> FrameHandle {
        self.inner.request_frame(target)
    }
    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.inner.cancel_frame(handle)
    }
}

impl TimerScheduler for LossyHost {
    fn set_timeout(&mut self, target: TargetId, delay_ms: f64) -> TimerHandle {
        self.inner.set_timeout(target, delay_ms)
    }
    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.inner.clear_timeout(handle)
    }
}

impl ResizeEvents for LossyHost {
    fn subscribe_resize(&mut self, target: TargetId) {
        self.inner.subscribe_resize(target)
    }
    fn unsubscribe_resize(&mut self, target: TargetId) {
        self.inner.unsubscribe_resize(target)
    }
}

impl TransitionEngine for LossyHost {
    fn transition(&mut self, target: TargetId, tween: Tween) -> TransitionHandle {
        self.inner.transition(target, tween)
    }
    fn cancel(&mut self, handle: TransitionHandle) {
        self.inner.cancel(handle)
    }
    fn set_immediate(&mut self, target: TargetId, attributes: &[Attribute]) {
        self.inner.set_immediate(target, attributes)
    }
}

impl TargetFactory for LossyHost {
    fn synthesize_targets(&mut self, container: &str, count: usize) -> WavifyResult<()> {
        self.inner.synthesize_targets(container, count)
    }
    fn locate_target(&self, key: &str) -> Option<TargetId> {
        if key == self.lost {
            None
        } else {
            self.inner.locate_target(key)
        }
    }
}

#[test]
fn empty_batch_leaves_host_untouched() {
    // No containers at all: any host access would fail.
    let mut h = HeadlessHost::new();
    let waves = create_waves(&mut h, &[], Some("#app")).unwrap();
    assert!(waves.is_empty());
    assert_eq!(h.pending_frames(), 0);
    assert!(h.targets_in("#app").is_empty());
}

#[test]
fn one_playing_wave_per_config_in_order() {
    let mut h = host();
    let configs = [
        WaveOverrides::default().height(440.0).bones(4),
        WaveOverrides::default().height(430.0).color("#fff"),
    ];
    let waves = create_waves(&mut h, &configs, Some("#app")).unwrap();
    assert_eq!(waves.len(), 2);

    let stack = h.targets_in("#app");
    for (index, wave) in waves.iter().enumerate() {
        assert!(matches!(wave.lifecycle(), Lifecycle::Playing(_)));
        assert_eq!(wave.target(), stack[index].0);
        assert_eq!(wave.config().container, "#app");
        assert_eq!(wave.bounds(), Bounds::new(800.0, 400.0).unwrap());
    }
    assert_eq!(waves[0].config().bones, 4);
    assert_eq!(waves[1].config().color, "#fff");
    assert_eq!(stack[1].1.fill.as_deref(), Some("#fff"));
}

#[test]
fn invalid_entry_aborts_before_synthesis() {
    let mut h = host();
    let configs = [WaveOverrides::default(), WaveOverrides::default().bones(0)];
    let err = create_waves(&mut h, &configs, Some("#app")).unwrap_err();
    assert!(err.is_configuration());
    assert!(h.targets_in("#app").is_empty());
}

#[test]
fn missing_synthesized_target_is_an_integration_error() {
    let mut h = LossyHost {
        inner: host(),
        lost: "c-wave-1",
    };
    let configs = [WaveOverrides::default(), WaveOverrides::default()];
    let err = create_waves(&mut h, &configs, Some("#app")).unwrap_err();
    assert!(err.is_integration());
    assert!(err.to_string().contains("c-wave-1"));
    // The first wave was booted before the failure and is torn down again.
    assert_eq!(h.inner.pending_frames(), 0);
    assert!(h.inner.resize_subscribers().is_empty());
}

#[test]
fn missing_entry_container_aborts_before_synthesis() {
    let mut h = host();
    let configs = [
        WaveOverrides::default(),
        WaveOverrides::default().container("#missing"),
    ];
    let err = create_waves(&mut h, &configs, Some("#app")).unwrap_err();
    assert!(err.is_integration());
    assert!(err.to_string().contains("#missing"));
    assert!(h.targets_in("#app").is_empty());
    assert_eq!(h.pending_frames(), 0);
    assert!(h.resize_subscribers().is_empty());
}

#[test]
fn default_container_is_body() {
    let mut h = HeadlessHost::new().with_container("body", Bounds::new(100.0, 50.0).unwrap());
    let waves = create_waves(&mut h, &[WaveOverrides::default()], None).unwrap();
    assert_eq!(waves[0].config().container, "body");
}
