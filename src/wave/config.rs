use serde::{Deserialize, Serialize};

use crate::foundation::error::{WavifyError, WavifyResult};

pub const DEFAULT_CONTAINER: &str = "body";
pub const DEFAULT_COLOR: &str = "rgba(255,255,255,0.20)";

/// Immutable per-epoch wave settings. Replaced wholesale, or merged by `reboot`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Selector of the bounding surface; fixed for a controller's lifetime.
    pub container: String,
    /// Baseline vertical offset of the waveform.
    pub height: f64,
    /// Peak vertical swing added below the baseline.
    pub amplitude: f64,
    /// Seconds per animation step, also scales phase into the sine seed. Must be > 0.
    pub speed: f64,
    /// Interior subdivisions; the wave has `bones + 1` points.
    pub bones: u32,
    /// CSS fill color applied at boot and reboot.
    pub color: String,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_owned(),
            height: 94.0,
            amplitude: 100.0,
            speed: 0.15,
            bones: 3,
            color: DEFAULT_COLOR.to_owned(),
        }
    }
}

impl WaveConfig {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            ..Self::default()
        }
    }

    /// Defaults overlaid with `overrides`, container falling back to `container`.
    pub fn from_overrides(overrides: &WaveOverrides, container: &str) -> WavifyResult<Self> {
        let base = Self::new(overrides.container.as_deref().unwrap_or(container));
        let cfg = base.overlay(overrides);
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> WavifyResult<()> {
        if self.bones < 1 {
            return Err(WavifyError::configuration("bones must be >= 1"));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(WavifyError::configuration(format!(
                "speed must be finite and > 0, got {}",
                self.speed
            )));
        }
        if !self.height.is_finite() {
            return Err(WavifyError::configuration("height must be finite"));
        }
        if !self.amplitude.is_finite() {
            return Err(WavifyError::configuration("amplitude must be finite"));
        }
        if self.container.trim().is_empty() {
            return Err(WavifyError::configuration("container must not be empty"));
        }
        Ok(())
    }

    /// Merge used by `reboot`: explicit overrides win, the container may not change.
    /// The result is validated; `self` is never modified.
    pub fn merged(&self, overrides: &WaveOverrides) -> WavifyResult<Self> {
        if let Some(container) = &overrides.container
            && container != &self.container
        {
            return Err(WavifyError::configuration(format!(
                "container is fixed for the wave's lifetime (\"{}\" -> \"{container}\")",
                self.container
            )));
        }
        let cfg = self.overlay(overrides);
        cfg.validate()?;
        Ok(cfg)
    }

    fn overlay(&self, o: &WaveOverrides) -> Self {
        Self {
            container: self.container.clone(),
            height: o.height.unwrap_or(self.height),
            amplitude: o.amplitude.unwrap_or(self.amplitude),
            speed: o.speed.unwrap_or(self.speed),
            bones: o.bones.unwrap_or(self.bones),
            color: o.color.clone().unwrap_or_else(|| self.color.clone()),
        }
    }
}

/// Sparse settings; `None` keeps the current (or default) value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bones: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl WaveOverrides {
    pub fn container(mut self, v: impl Into<String>) -> Self {
        self.container = Some(v.into());
        self
    }

    pub fn height(mut self, v: f64) -> Self {
        self.height = Some(v);
        self
    }

    pub fn amplitude(mut self, v: f64) -> Self {
        self.amplitude = Some(v);
        self
    }

    pub fn speed(mut self, v: f64) -> Self {
        self.speed = Some(v);
        self
    }

    pub fn bones(mut self, v: u32) -> Self {
        self.bones = Some(v);
        self
    }

    pub fn color(mut self, v: impl Into<String>) -> Self {
        self.color = Some(v.into());
        self
    }
}

/// Several waves stacked inside one container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveBatch {
    #[serde(default = "default_container")]
    pub container: String,
    #[serde(alias = "wavesSetup")]
    pub waves: Vec<WaveOverrides>,
}

fn default_container() -> String {
    DEFAULT_CONTAINER.to_owned()
}

impl WaveBatch {
    pub fn from_json_str(s: &str) -> WavifyResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &std::path::Path) -> WavifyResult<Self> {
        use anyhow::Context as _;
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read wave batch '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wave/config.rs"]
mod tests;
