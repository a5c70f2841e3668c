use std::collections::{BTreeMap, BTreeSet};

use kurbo::{Affine, BezPath};
use tracing::warn;

use crate::animation::ease::Ease;
use crate::animation::tween::Lerp;
use crate::foundation::color::Rgba;
use crate::foundation::core::{
    Bounds, FrameHandle, HandleSeq, TargetId, TimerHandle, TransitionHandle,
};
use crate::foundation::error::{WavifyError, WavifyResult};
use crate::host::{
    Attribute, AttributeKind, FrameScheduler, Measure, ResizeEvents, TargetFactory,
    TimerScheduler, TransitionEngine, Tween, target_key,
};

/// Current attribute values of one render target.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetState {
    pub key: String,
    pub container: String,
    /// Stacking order; higher draws on top.
    pub z_index: usize,
    pub path: Option<BezPath>,
    pub fill: Option<String>,
    pub opacity: f64,
    pub transform: Affine,
}

impl TargetState {
    fn new(key: String, container: String, z_index: usize) -> Self {
        Self {
            key,
            container,
            z_index,
            path: None,
            fill: None,
            opacity: 1.0,
            transform: Affine::IDENTITY,
        }
    }

    fn get(&self, kind: AttributeKind) -> Option<Attribute> {
        match kind {
            AttributeKind::Path => self.path.clone().map(Attribute::Path),
            AttributeKind::Fill => Some(Attribute::Fill(self.fill.clone())),
            AttributeKind::Opacity => Some(Attribute::Opacity(self.opacity)),
            AttributeKind::Transform => Some(Attribute::Transform(self.transform)),
        }
    }

    fn set(&mut self, attr: Attribute) {
        match attr {
            Attribute::Path(p) => self.path = Some(p),
            Attribute::Fill(f) => self.fill = f,
            Attribute::Opacity(o) => self.opacity = o,
            Attribute::Transform(t) => self.transform = t,
        }
    }
}

#[derive(Clone, Debug)]
struct PendingTimer {
    handle: TimerHandle,
    target: TargetId,
    due_ms: f64,
}

#[derive(Clone, Debug)]
struct RunningTween {
    handle: TransitionHandle,
    target: TargetId,
    from: Option<Attribute>,
    to: Attribute,
    start_ms: f64,
    duration_ms: f64,
    ease: Ease,
}

fn interpolate(from: &Attribute, to: &Attribute, t: f64) -> Option<Attribute> {
    match (from, to) {
        (Attribute::Path(a), Attribute::Path(b)) => BezPath::lerp(a, b, t).map(Attribute::Path),
        (Attribute::Opacity(a), Attribute::Opacity(b)) => {
            f64::lerp(a, b, t).map(Attribute::Opacity)
        }
        (Attribute::Transform(a), Attribute::Transform(b)) => {
            Affine::lerp(a, b, t).map(Attribute::Transform)
        }
        (Attribute::Fill(Some(a)), Attribute::Fill(Some(b))) => {
            let a = Rgba::parse_css(a)?;
            let b = Rgba::parse_css(b)?;
            Rgba::lerp(&a, &b, t).map(|c| Attribute::Fill(Some(c.to_css())))
        }
        _ => None,
    }
}

/// Deterministic in-memory host: containers, targets, frames, timers, resizes and tweens
/// all live here and advance only when told to.
#[derive(Clone, Debug, Default)]
pub struct HeadlessHost {
    now_ms: f64,
    seq: HandleSeq,
    containers: BTreeMap<String, Bounds>,
    targets: BTreeMap<TargetId, TargetState>,
    keys: BTreeMap<String, TargetId>,
    frames: Vec<(FrameHandle, TargetId)>,
    timers: Vec<PendingTimer>,
    resize_subscribers: BTreeSet<TargetId>,
    tweens: Vec<RunningTween>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, selector: impl Into<String>, bounds: Bounds) -> Self {
        self.set_container_bounds(selector, bounds);
        self
    }

    pub fn set_container_bounds(&mut self, selector: impl Into<String>, bounds: Bounds) {
        self.containers.insert(selector.into(), bounds);
    }

    pub fn container_bounds(&self, selector: &str) -> Option<Bounds> {
        self.containers.get(selector).copied()
    }

    /// Adds one target to `container` on top of the existing ones.
    pub fn add_target(&mut self, container: &str, key: impl Into<String>) -> TargetId {
        let key = key.into();
        let z = self
            .targets
            .values()
            .filter(|t| t.container == container)
            .map(|t| t.z_index)
            .max()
            .unwrap_or(0)
            + 1;
        let id = TargetId(self.seq.next_raw());
        self.keys.insert(key.clone(), id);
        self.targets
            .insert(id, TargetState::new(key, container.to_owned(), z));
        id
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn set_now_ms(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    pub fn target(&self, id: TargetId) -> Option<&TargetState> {
        self.targets.get(&id)
    }

    /// Targets of `container` in stacking order, bottom first.
    pub fn targets_in(&self, container: &str) -> Vec<(TargetId, &TargetState)> {
        let mut out: Vec<_> = self
            .targets
            .iter()
            .filter(|(_, t)| t.container == container)
            .map(|(id, t)| (*id, t))
            .collect();
        out.sort_by_key(|(_, t)| t.z_index);
        out
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn has_pending_frame(&self, target: TargetId) -> bool {
        self.frames.iter().any(|(_, t)| *t == target)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn running_tweens(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_resize_subscribed(&self, target: TargetId) -> bool {
        self.resize_subscribers.contains(&target)
    }

    pub fn resize_subscribers(&self) -> Vec<TargetId> {
        self.resize_subscribers.iter().copied().collect()
    }

    /// Removes and returns every frame request made so far.
    pub fn take_frames(&mut self) -> Vec<(FrameHandle, TargetId)> {
        std::mem::take(&mut self.frames)
    }

    /// Removes and returns timers due at `now_ms`, earliest first.
    pub fn take_due_timers(&mut self, now_ms: f64) -> Vec<(TimerHandle, TargetId)> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|t| t.due_ms <= now_ms);
        self.timers = rest;
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms));
        due.into_iter().map(|t| (t.handle, t.target)).collect()
    }

    /// Applies tween progress at `now_ms`; returns the tweens that finished.
    pub fn step_tweens(&mut self, now_ms: f64) -> Vec<(TransitionHandle, TargetId)> {
        let mut done = Vec::new();
        let mut running = Vec::with_capacity(self.tweens.len());

        for tw in std::mem::take(&mut self.tweens) {
            let progress = if tw.duration_ms <= 0.0 {
                1.0
            } else {
                ((now_ms - tw.start_ms) / tw.duration_ms).clamp(0.0, 1.0)
            };

            let Some(state) = self.targets.get_mut(&tw.target) else {
                warn!(handle = tw.handle.0, "tween target vanished");
                continue;
            };

            if progress >= 1.0 {
                state.set(tw.to.clone());
                done.push((tw.handle, tw.target));
                continue;
            }

            let eased = tw.ease.apply(progress);
            if let Some(v) = tw
                .from
                .as_ref()
                .and_then(|from| interpolate(from, &tw.to, eased))
            {
                state.set(v);
            }
            running.push(tw);
        }

        self.tweens = running;
        done
    }
}

impl Measure for HeadlessHost {
    fn measure(&self, selector: &str) -> Option<Bounds> {
        self.container_bounds(selector)
    }
}

impl FrameScheduler for HeadlessHost {
    fn request_frame(&mut self, target: TargetId) -> FrameHandle {
        let h = FrameHandle(self.seq.next_raw());
        self.frames.push((h, target));
        h
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|(h, _)| *h != handle);
    }
}

impl TimerScheduler for HeadlessHost {
    fn set_timeout(&mut self, target: TargetId, delay_ms: f64) -> TimerHandle {
        let handle = TimerHandle(self.seq.next_raw());
        self.timers.push(PendingTimer {
            handle,
            target,
            due_ms: self.now_ms + delay_ms.max(0.0),
        });
        handle
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }
}

impl ResizeEvents for HeadlessHost {
    fn subscribe_resize(&mut self, target: TargetId) {
        self.resize_subscribers.insert(target);
    }

    fn unsubscribe_resize(&mut self, target: TargetId) {
        self.resize_subscribers.remove(&target);
    }
}

impl TransitionEngine for HeadlessHost {
    /// Values with nothing to morph from (no current value, different path structure,
    /// unparseable colors) are applied at once; the tween still completes on schedule.
    fn transition(&mut self, target: TargetId, tween: Tween) -> TransitionHandle {
        let handle = TransitionHandle(self.seq.next_raw());
        let from = match self.targets.get_mut(&target) {
            Some(state) => {
                let from = state
                    .get(tween.attribute.kind())
                    .filter(|from| interpolate(from, &tween.attribute, 0.0).is_some());
                if from.is_none() {
                    state.set(tween.attribute.clone());
                }
                from
            }
            None => {
                warn!(target_id = target.0, "transition scheduled on unknown target");
                None
            }
        };
        self.tweens.push(RunningTween {
            handle,
            target,
            from,
            to: tween.attribute,
            start_ms: self.now_ms,
            duration_ms: tween.duration_secs * 1000.0,
            ease: tween.ease,
        });
        handle
    }

    fn cancel(&mut self, handle: TransitionHandle) {
        self.tweens.retain(|t| t.handle != handle);
    }

    fn set_immediate(&mut self, target: TargetId, attributes: &[Attribute]) {
        let Some(state) = self.targets.get_mut(&target) else {
            warn!(target_id = target.0, "set_immediate on unknown target");
            return;
        };
        for attr in attributes {
            state.set(attr.clone());
        }
    }
}

impl TargetFactory for HeadlessHost {
    fn synthesize_targets(&mut self, container: &str, count: usize) -> WavifyResult<()> {
        if !self.containers.contains_key(container) {
            return Err(WavifyError::integration(format!(
                "container \"{container}\" not found on host surface"
            )));
        }

        // Synthesis replaces the container's content.
        let stale: Vec<TargetId> = self
            .targets
            .iter()
            .filter(|(_, t)| t.container == container)
            .map(|(id, _)| *id)
            .collect();
        for id in stale {
            if let Some(t) = self.targets.remove(&id)
                && self.keys.get(&t.key) == Some(&id)
            {
                self.keys.remove(&t.key);
            }
        }

        for index in 0..count {
            self.add_target(container, target_key(index));
        }
        Ok(())
    }

    fn locate_target(&self, key: &str) -> Option<TargetId> {
        self.keys.get(key).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/headless.rs"]
mod tests;
