//! Scene error types

use sceneops_core::HostError;

/// Errors raised by in-memory scene operators
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("{operator}: no active object")]
    NoActiveObject { operator: String },

    #[error("{operator}: missing or malformed argument '{key}'")]
    InvalidArgument { operator: String, key: String },

    #[error("Modifier '{0}' not found")]
    ModifierNotFound(String),

    #[error("object not found: {0}")]
    ObjectNotFound(String),
}

impl SceneError {
    /// Create no-active-object error
    pub fn no_active(operator: impl Into<String>) -> Self {
        Self::NoActiveObject {
            operator: operator.into(),
        }
    }

    /// Create invalid-argument error
    pub fn invalid_argument(operator: impl Into<String>, key: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operator: operator.into(),
            key: key.into(),
        }
    }
}

impl From<SceneError> for HostError {
    fn from(err: SceneError) -> Self {
        HostError::new(err.to_string())
    }
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, SceneError>;
