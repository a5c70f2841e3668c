//! Wavify renders a continuously animated, organic wave as a filled path.
//!
//! Each frame the wave signal is sampled into `bones + 1` points across the container, the
//! points are joined by cubic segments into a closed contour that floods the area below the
//! wave, and the contour is handed to the host's transition engine as the next target value
//! of the target's path.
//!
//! # Pieces
//!
//! - [`sample_points`] and [`build_path`]: pure geometry.
//! - [`WaveController`]: per-wave lifecycle (boot, play, pause, kill, reboot, color updates)
//!   with debounced resize restarts.
//! - [`create_waves`]: one stacked target and controller per configuration.
//! - [`host`]: the capabilities a controller consumes, plus [`HeadlessHost`] and [`Stage`]
//!   for driving waves without a real surface.
//!
//! Controllers never keep a reference to their host; every operation borrows it, and the
//! host reports frames, timers, resizes and finished transitions back by handle.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod wave;

/// Host capabilities and the in-memory host.
pub mod host;

pub use animation::clock::PhaseClock;
pub use animation::debounce::{Debounce, RESIZE_DEBOUNCE_MS};
pub use animation::ease::Ease;
pub use animation::tween::Lerp;
pub use foundation::color::Rgba;
pub use foundation::core::{
    Affine, BezPath, Bounds, FrameHandle, PathEl, Point, TargetId, TimerHandle,
    TransitionHandle, Vec2,
};
pub use foundation::error::{WavifyError, WavifyResult};
pub use host::svg::{FrameRgba, rasterize, snapshot_svg, write_png};
pub use host::{Attribute, HeadlessHost, Host, Stage, Tween};
pub use wave::batch::create_waves;
pub use wave::config::{DEFAULT_COLOR, DEFAULT_CONTAINER, WaveBatch, WaveConfig, WaveOverrides};
pub use wave::controller::{
    AnimationState, ColorUpdate, Lifecycle, OnComplete, WaveController, wavify,
};
pub use wave::path::build_path;
pub use wave::sampler::sample_points;
