use kurbo::Point;

use crate::foundation::error::{WavifyError, WavifyResult};
use crate::wave::config::WaveConfig;

/// Samples the wave signal at `phase` into `bones + 1` points spread across `width`.
///
/// For point `i` the sine seed is `(phase + i + (i mod bones)) * speed * 100`; the height
/// term is the squared sine scaled by `amplitude`, offset by the baseline `height`.
/// Pure and deterministic for identical inputs.
pub fn sample_points(phase: f64, config: &WaveConfig, width: f64) -> WavifyResult<Vec<Point>> {
    let bones = config.bones;
    if bones < 1 {
        return Err(WavifyError::configuration("bones must be >= 1"));
    }

    let n = f64::from(bones);
    let points = (0..=bones)
        .map(|i| {
            let fi = f64::from(i);
            let x = (fi / n) * width;
            let seed = (phase + (fi + f64::from(i % bones))) * config.speed * 100.0;
            let s = (seed / 100.0).sin();
            let inner_height = s * config.amplitude;
            Point::new(x, s * inner_height + config.height)
        })
        .collect();
    Ok(points)
}

#[cfg(test)]
#[path = "../../tests/unit/wave/sampler.rs"]
mod tests;
