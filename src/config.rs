use serde::Deserialize;
use std::path::Path;

use crate::error::GlideError;
use crate::DEFAULT_SAMPLE_SIZE;

/// Runtime parameters for a recognition session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Fixed number of points every trajectory is resampled to. All paths
    /// compared against each other must share this value.
    pub sample_size: usize,
    /// How many of the most frequent corpus entries to search per stroke.
    /// Bounds the cost of a ranking pass.
    pub corpus_window: usize,
    /// Maximum number of candidates returned per stroke.
    pub top_k: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            corpus_window: 1000,
            top_k: 5,
        }
    }
}

impl RecognizerConfig {
    /// Load from a JSON file; missing fields fall back to the defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GlideError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| GlideError::Config(format!("invalid config file: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GlideError> {
        if self.sample_size == 0 {
            return Err(GlideError::Config("sample_size must be positive".into()));
        }
        if self.top_k == 0 {
            return Err(GlideError::Config("top_k must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RecognizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_size, DEFAULT_SAMPLE_SIZE);
    }

    #[test]
    fn zero_sample_size_is_rejected() {
        let config = RecognizerConfig {
            sample_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
