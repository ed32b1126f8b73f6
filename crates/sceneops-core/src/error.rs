//! Error types for plan execution
//!
//! Two layers of failure:
//! - [`ParseError`]: the whole run is rejected before any step is attempted
//! - [`DispatchError`]: a single step failed; the runner records it and moves on

/// Maximum number of characters of offending input carried by a [`ParseError`].
pub const EXCERPT_LIMIT: usize = 400;

/// Errors while turning generated text into a plan (run-level)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No `{ ... }` object could be located in the text
    #[error("invalid plan: no JSON object found in response\n---\n{excerpt}")]
    NoObject { excerpt: String },

    /// The located object is not valid JSON
    #[error("invalid plan (JSON): {message}\n---\n{excerpt}")]
    Decode { message: String, excerpt: String },

    /// The object decoded but has no `plan` sequence
    #[error("invalid plan: missing 'plan' as list")]
    MissingPlan,
}

impl ParseError {
    /// Create a no-object error for the given raw text
    pub fn no_object(text: &str) -> Self {
        Self::NoObject {
            excerpt: excerpt(text),
        }
    }

    /// Create a decode error carrying the decoder diagnostic
    pub fn decode(message: impl Into<String>, text: &str) -> Self {
        Self::Decode {
            message: message.into(),
            excerpt: excerpt(text),
        }
    }

    /// The bounded excerpt of offending input, if this error carries one
    #[must_use]
    pub fn excerpt(&self) -> Option<&str> {
        match self {
            Self::NoObject { excerpt } | Self::Decode { excerpt, .. } => Some(excerpt),
            Self::MissingPlan => None,
        }
    }
}

/// Errors while dispatching a single step (step-level)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// Tool is not in the capability registry
    #[error("tool not allowed: {0}")]
    UnknownCapability(String),

    /// Capability needs an active selection and none exists after repair
    #[error("operator {tool} requires an active object")]
    Precondition { tool: String },

    /// The capability itself failed
    #[error("execution failed: {message}")]
    Execution { tool: String, message: String },
}

impl DispatchError {
    /// Create precondition error for tool
    pub fn precondition(tool: impl Into<String>) -> Self {
        Self::Precondition { tool: tool.into() }
    }

    /// Create execution error wrapping the underlying message
    pub fn execution(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Tool identifier the error refers to
    #[must_use]
    pub fn tool(&self) -> &str {
        match self {
            Self::UnknownCapability(tool)
            | Self::Precondition { tool }
            | Self::Execution { tool, .. } => tool,
        }
    }
}

/// Truncate text to at most [`EXCERPT_LIMIT`] characters.
#[must_use]
pub fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_LIMIT).collect()
}
