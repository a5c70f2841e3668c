use super::*;

#[derive(Default)]
struct Timers {
    next: u64,
    armed: Vec<TimerHandle>,
    cleared: Vec<TimerHandle>,
}

impl TimerScheduler for Timers {
    fn set_timeout(&mut self, _target: TargetId, _delay_ms: f64) -> TimerHandle {
        self.next += 1;
        let h = TimerHandle(self.next);
        self.armed.push(h);
        h
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.cleared.push(handle);
    }
}

#[test]
fn retrigger_replaces_pending_timer() {
    let mut timers = Timers::default();
    let mut d = Debounce::default();
    for _ in 0..5 {
        d.trigger(&mut timers, TargetId(0));
    }
    assert_eq!(timers.armed.len(), 5);
    assert_eq!(timers.cleared, timers.armed[..4].to_vec());
    assert!(d.is_pending());

    let last = *timers.armed.last().unwrap();
    assert!(!d.fire(timers.armed[0]));
    assert!(d.fire(last));
    assert!(!d.is_pending());
    assert!(!d.fire(last));
}

#[test]
fn cancel_clears_outstanding_timer() {
    let mut timers = Timers::default();
    let mut d = Debounce::new(100.0);
    d.trigger(&mut timers, TargetId(3));
    d.cancel(&mut timers);
    assert!(!d.is_pending());
    assert_eq!(timers.cleared, timers.armed);
    assert!(!d.fire(timers.armed[0]));

    d.cancel(&mut timers);
    assert_eq!(timers.cleared.len(), 1);
}

#[test]
fn default_delay_matches_resize_window() {
    assert_eq!(Debounce::default().delay_ms(), RESIZE_DEBOUNCE_MS);
}
