use tracing::warn;

use crate::foundation::error::{WavifyError, WavifyResult};
use crate::host::{Host, target_key};
use crate::wave::config::{DEFAULT_CONTAINER, WaveConfig, WaveOverrides};
use crate::wave::controller::WaveController;

/// Creates one stacked render target per entry inside `container` (default `"body"`) and
/// boots a controller on each, in input order.
///
/// An empty input returns immediately without touching the host. Every entry is validated
/// and its container measured before the host is mutated. A synthesized target that cannot
/// be located afterwards is an integration error and aborts the batch; waves already booted
/// are killed before the error is returned.
#[tracing::instrument(skip(host, configs), fields(count = configs.len()))]
pub fn create_waves<H: Host + ?Sized>(
    host: &mut H,
    configs: &[WaveOverrides],
    container: Option<&str>,
) -> WavifyResult<Vec<WaveController>> {
    if configs.is_empty() {
        return Ok(Vec::new());
    }
    let container = container.unwrap_or(DEFAULT_CONTAINER);

    let resolved = configs
        .iter()
        .map(|o| WaveConfig::from_overrides(o, container))
        .collect::<WavifyResult<Vec<_>>>()?;
    for config in &resolved {
        if host.measure(&config.container).is_none() {
            return Err(WavifyError::integration(format!(
                "container \"{}\" not found on host surface",
                config.container
            )));
        }
    }

    host.synthesize_targets(container, resolved.len())?;

    let mut waves = Vec::with_capacity(resolved.len());
    for (index, config) in resolved.into_iter().enumerate() {
        match boot_entry(host, index, config) {
            Ok(wave) => waves.push(wave),
            Err(err) => {
                // Waves booted so far must not keep frames or listeners alive.
                for wave in &mut waves {
                    wave.kill(host);
                }
                warn!(index, error = %err, "wave batch aborted");
                return Err(err);
            }
        }
    }
    Ok(waves)
}

fn boot_entry<H: Host + ?Sized>(
    host: &mut H,
    index: usize,
    config: WaveConfig,
) -> WavifyResult<WaveController> {
    let key = target_key(index);
    let target = host.locate_target(&key).ok_or_else(|| {
        WavifyError::integration(format!("wave target \"{key}\" missing after synthesis"))
    })?;
    WaveController::new(host, target, config)
}

#[cfg(test)]
#[path = "../../tests/unit/wave/batch.rs"]
mod tests;
