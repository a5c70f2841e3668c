use crate::foundation::error::{WavifyError, WavifyResult};

pub use kurbo::{Affine, BezPath, PathEl, Point, Vec2};

/// Size of a container in device-independent units, measured at boot/reboot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> WavifyResult<Self> {
        if !width.is_finite() || width < 0.0 {
            return Err(WavifyError::integration(format!(
                "container width must be finite and >= 0, got {width}"
            )));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(WavifyError::integration(format!(
                "container height must be finite and >= 0, got {height}"
            )));
        }
        Ok(Self { width, height })
    }
}

/// Host-side identity of one renderable wave surface.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TargetId(pub u64);

/// Pending per-frame callback registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Pending one-shot timer registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// In-flight attribute transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionHandle(pub u64);

/// Monotonic allocator for the opaque handle newtypes above. Never yields 0.
#[derive(Clone, Debug, Default)]
pub struct HandleSeq {
    last: u64,
}

impl HandleSeq {
    pub fn next_raw(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
