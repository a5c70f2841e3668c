use kurbo::{Affine, BezPath, PathEl};

use crate::foundation::color::Rgba;

/// Interpolation contract for values a transition engine can morph.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    /// `None` means the pair has no continuous path between them.
    fn lerp(a: &Self, b: &Self, t: f64) -> Option<Self>;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Option<Self> {
        Some(a + (b - a) * t)
    }
}

impl Lerp for Affine {
    fn lerp(a: &Self, b: &Self, t: f64) -> Option<Self> {
        let ca = a.as_coeffs();
        let cb = b.as_coeffs();
        let mut out = [0.0; 6];
        for (o, (x, y)) in out.iter_mut().zip(ca.iter().zip(cb.iter())) {
            *o = x + (y - x) * t;
        }
        Some(Affine::new(out))
    }
}

impl Lerp for Rgba {
    fn lerp(a: &Self, b: &Self, t: f64) -> Option<Self> {
        Some(Rgba::new(
            a.r + (b.r - a.r) * t,
            a.g + (b.g - a.g) * t,
            a.b + (b.b - a.b) * t,
            a.a + (b.a - a.a) * t,
        ))
    }
}

/// Element-wise morph; both paths must share the same verb sequence.
impl Lerp for BezPath {
    fn lerp(a: &Self, b: &Self, t: f64) -> Option<Self> {
        let (ea, eb) = (a.elements(), b.elements());
        if ea.len() != eb.len() {
            return None;
        }

        let mut out = BezPath::new();
        for (x, y) in ea.iter().zip(eb) {
            let el = match (*x, *y) {
                (PathEl::MoveTo(p), PathEl::MoveTo(q)) => PathEl::MoveTo(p.lerp(q, t)),
                (PathEl::LineTo(p), PathEl::LineTo(q)) => PathEl::LineTo(p.lerp(q, t)),
                (PathEl::QuadTo(p1, p2), PathEl::QuadTo(q1, q2)) => {
                    PathEl::QuadTo(p1.lerp(q1, t), p2.lerp(q2, t))
                }
                (PathEl::CurveTo(p1, p2, p3), PathEl::CurveTo(q1, q2, q3)) => {
                    PathEl::CurveTo(p1.lerp(q1, t), p2.lerp(q2, t), p3.lerp(q3, t))
                }
                (PathEl::ClosePath, PathEl::ClosePath) => PathEl::ClosePath,
                _ => return None,
            };
            out.push(el);
        }
        Some(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
