pub mod clock;
pub mod debounce;
pub mod ease;
pub mod tween;
