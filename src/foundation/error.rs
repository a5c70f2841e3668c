pub type WavifyResult<T> = Result<T, WavifyError>;

#[derive(thiserror::Error, Debug)]
pub enum WavifyError {
    /// Rejected configuration: changed container, `bones == 0`, non-positive speed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The host surface did not behave as integrated (missing container or target).
    #[error("integration error: {0}")]
    Integration(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavifyError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn integration(msg: impl Into<String>) -> Self {
        Self::Integration(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_integration(&self) -> bool {
        matches!(self, Self::Integration(_))
    }
}

impl From<serde_json::Error> for WavifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
