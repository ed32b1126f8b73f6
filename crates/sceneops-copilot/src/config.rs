//! Generation client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default generate endpoint of a local Ollama server
pub const DEFAULT_URL: &str = "http://localhost:11434/api/generate";

/// Default model tag
pub const DEFAULT_MODEL: &str = "gemma3:12b";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for the text generation backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Full URL of the generate endpoint
    pub url: String,
    /// Model tag
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GenerationConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With endpoint URL
    #[inline]
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// With model tag
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With sampling temperature
    #[inline]
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// With request timeout in seconds
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Request timeout
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_server() {
        let config = GenerationConfig::default();
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn builders_override_fields() {
        let config = GenerationConfig::new()
            .with_model("llama3:8b")
            .with_timeout_secs(5);
        assert_eq!(config.model, "llama3:8b");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.url, DEFAULT_URL);
    }
}
