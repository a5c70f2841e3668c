//! Capabilities a wave controller consumes from its host surface.
//!
//! Controllers never store a host. Every operation borrows one for its duration, and the
//! host delivers frames, timers, resizes and transition completions back by calling the
//! controller with the handle it was given. See [`Stage`] for the in-memory driver.

pub mod headless;
pub mod stage;
pub mod svg;

use kurbo::{Affine, BezPath};

use crate::animation::ease::Ease;
use crate::foundation::core::{Bounds, FrameHandle, TargetId, TimerHandle, TransitionHandle};
use crate::foundation::error::WavifyResult;

pub use headless::HeadlessHost;
pub use stage::Stage;

/// Attribute values a host render target understands.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    Path(BezPath),
    /// `None` clears the fill back to the host default.
    Fill(Option<String>),
    Opacity(f64),
    Transform(Affine),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKind {
    Path,
    Fill,
    Opacity,
    Transform,
}

impl Attribute {
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Path(_) => AttributeKind::Path,
            Self::Fill(_) => AttributeKind::Fill,
            Self::Opacity(_) => AttributeKind::Opacity,
            Self::Transform(_) => AttributeKind::Transform,
        }
    }

    /// The cleared state a killed target is left in.
    pub fn neutral() -> [Attribute; 4] {
        let mut origin = BezPath::new();
        origin.move_to((0.0, 0.0));
        [
            Attribute::Transform(Affine::IDENTITY),
            Attribute::Opacity(0.0),
            Attribute::Path(origin),
            Attribute::Fill(None),
        ]
    }
}

/// One scheduled attribute transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub attribute: Attribute,
    pub duration_secs: f64,
    pub ease: Ease,
}

pub trait Measure {
    fn measure(&self, selector: &str) -> Option<Bounds>;
}

pub trait FrameScheduler {
    fn request_frame(&mut self, target: TargetId) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

pub trait TimerScheduler {
    fn set_timeout(&mut self, target: TargetId, delay_ms: f64) -> TimerHandle;
    fn clear_timeout(&mut self, handle: TimerHandle);
}

pub trait ResizeEvents {
    fn subscribe_resize(&mut self, target: TargetId);
    fn unsubscribe_resize(&mut self, target: TargetId);
}

pub trait TransitionEngine {
    fn transition(&mut self, target: TargetId, tween: Tween) -> TransitionHandle;
    fn cancel(&mut self, handle: TransitionHandle);
    fn set_immediate(&mut self, target: TargetId, attributes: &[Attribute]);
}

pub trait TargetFactory {
    /// Replaces the container's content with `count` fresh targets keyed by [`target_key`].
    fn synthesize_targets(&mut self, container: &str, count: usize) -> WavifyResult<()>;
    fn locate_target(&self, key: &str) -> Option<TargetId>;
}

/// Everything a controller needs from its surroundings.
pub trait Host:
    Measure + FrameScheduler + TimerScheduler + ResizeEvents + TransitionEngine + TargetFactory
{
}

impl<T> Host for T where
    T: Measure + FrameScheduler + TimerScheduler + ResizeEvents + TransitionEngine + TargetFactory
{
}

/// Stable identifier of the `index`-th synthesized target.
pub fn target_key(index: usize) -> String {
    format!("c-wave-{index}")
}
