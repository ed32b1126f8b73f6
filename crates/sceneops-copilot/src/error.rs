//! Generation error types

/// Prefix marking a generation failure in string form
pub const ERROR_SENTINEL: &str = "__ERROR__";

/// Errors from the text generation backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// HTTP client could not be constructed
    #[error("failed to build http client: {0}")]
    Client(String),

    /// Server unreachable or connection dropped
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// No response within the configured timeout
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Non-success HTTP status
    #[error("http error {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON
    #[error("invalid JSON response: {0}")]
    Decode(String),
}

impl GenerationError {
    /// Create transport error
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Sentinel-tagged string form, e.g. `__ERROR__: request timed out after 60s`
    #[must_use]
    pub fn to_sentinel(&self) -> String {
        format!("{ERROR_SENTINEL}: {self}")
    }
}

/// Whether a completion string is a sentinel-tagged error
#[must_use]
pub fn is_error_response(text: &str) -> bool {
    text.starts_with(ERROR_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_round_trip() {
        let err = GenerationError::Timeout { secs: 60 };
        let text = err.to_sentinel();
        assert_eq!(text, "__ERROR__: request timed out after 60s");
        assert!(is_error_response(&text));
        assert!(!is_error_response("{\"plan\": []}"));
    }

    #[test]
    fn status_display() {
        let err = GenerationError::Status {
            status: 404,
            body: "model not found".into(),
        };
        assert_eq!(err.to_string(), "http error 404: model not found");
    }
}
