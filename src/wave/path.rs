use kurbo::{BezPath, Point};

use crate::foundation::core::Bounds;
use crate::foundation::error::{WavifyError, WavifyResult};

/// Builds the closed, fillable wave contour through `points`.
///
/// Each segment is a cubic whose two control points coincide. The first control point is
/// derived from the first segment; every later one reflects the previous control point
/// through the current vertex. The contour then drops to the container's bottom-right and
/// bottom-left corners and closes, so the area under the wave is always filled.
pub fn build_path(points: &[Point], bounds: Bounds) -> WavifyResult<BezPath> {
    let [p0, p1, ..] = points else {
        return Err(WavifyError::configuration(format!(
            "a wave path needs at least 2 points (bones >= 1), got {}",
            points.len()
        )));
    };

    let mut path = BezPath::new();
    path.move_to(*p0);

    let mut cp = Point::new((p1.x - p0.x) / 2.0, (p1.y - p0.y) * 2.0 + p0.y);
    path.curve_to(cp, cp, *p1);

    for w in points[1..].windows(2) {
        let (cur, next) = (w[0], w[1]);
        cp = Point::new(cur.x - cp.x + cur.x, cur.y - cp.y + cur.y);
        path.curve_to(cp, cp, next);
    }

    path.line_to((bounds.width, bounds.height));
    path.line_to((0.0, bounds.height));
    path.close_path();
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/wave/path.rs"]
mod tests;
