//! Text generation client
//!
//! [`TextGenerator`] is the seam between the pipeline and whatever produces
//! completions. [`OllamaClient`] talks to a local Ollama server with a single
//! blocking, non-streaming request per prompt.

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use serde::Deserialize;
use serde_json::json;

/// Produces a completion for a prompt
pub trait TextGenerator {
    /// Generate a completion
    ///
    /// # Errors
    /// Returns [`GenerationError`] if no completion could be obtained.
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Blocking Ollama `/api/generate` client
#[derive(Debug, Clone)]
pub struct OllamaClient {
    config: GenerationConfig,
    http: reqwest::blocking::Client,
}

impl OllamaClient {
    /// Create client with a configured timeout
    ///
    /// # Errors
    /// Returns [`GenerationError::Client`] if the HTTP client cannot be built.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GenerationError::Client(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    fn map_send_error(&self, e: &reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout {
                secs: self.config.timeout_secs,
            }
        } else {
            GenerationError::transport(&self.config.url, e.to_string())
        }
    }
}

impl TextGenerator for OllamaClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        tracing::info!(
            "Sending request to {} with model {}",
            self.config.url,
            self.config.model
        );

        let body = json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
            "options": { "temperature": self.config.temperature },
        });

        let resp = self
            .http
            .post(&self.config.url)
            .json(&body)
            .send()
            .map_err(|e| self.map_send_error(&e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            tracing::warn!("Generation request failed with status {}", status);
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().map_err(|e| self.map_send_error(&e))?;
        let out: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| GenerationError::Decode(e.to_string()))?;

        let response = out.response.trim().to_string();
        let preview: String = response.chars().take(100).collect();
        tracing::info!("Received response: {}...", preview);
        Ok(response)
    }
}
