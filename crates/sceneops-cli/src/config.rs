//! Configuration loading
//!
//! Resolution order, later wins: built-in defaults, TOML file, environment.

use sceneops_copilot::GenerationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Overrides `generation.url`
pub const ENV_URL: &str = "SCENEOPS_OLLAMA_URL";

/// Overrides `generation.model`
pub const ENV_MODEL: &str = "SCENEOPS_MODEL";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneopsConfig {
    /// Text generation backend
    pub generation: GenerationConfig,
}

impl SceneopsConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With generation settings
    #[inline]
    #[must_use]
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Parse from TOML text; missing keys keep their defaults
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on malformed TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply environment-style overrides from a lookup
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_URL).filter(|v| !v.is_empty()) {
            self.generation.url = url;
        }
        if let Some(model) = lookup(ENV_MODEL).filter(|v| !v.is_empty()) {
            self.generation.model = model;
        }
        self
    }

    /// Defaults, then the optional file, then process environment
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a given file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SceneopsConfig::from_toml_str("[generation]\nmodel = \"llama3:8b\"\n").unwrap();
        assert_eq!(config.generation.model, "llama3:8b");
        assert_eq!(config.generation.timeout_secs, 60);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(SceneopsConfig::from_toml_str("").unwrap(), SceneopsConfig::default());
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = SceneopsConfig::from_toml_str("[generation\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn overrides_replace_non_empty_values() {
        let config = SceneopsConfig::new().with_overrides(|key| match key {
            ENV_URL => Some("http://gpu-box:11434/api/generate".to_string()),
            ENV_MODEL => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.generation.url, "http://gpu-box:11434/api/generate");
        assert_eq!(config.generation.model, "gemma3:12b");
    }
}
