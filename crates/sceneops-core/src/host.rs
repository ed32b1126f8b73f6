//! Host scene interface
//!
//! [`HostContext`] is the minimal surface the core needs from the stateful 3D
//! scene it mutates. It is injected into the runner, dispatcher and context
//! validator; nothing in this crate reads scene state any other way.

use crate::args::{TypedArgs, Vec3};
use serde::Serialize;
use serde_json::Value;

/// Opaque failure reported by the host
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HostError {
    message: String,
}

impl HostError {
    /// Create from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Underlying message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Snapshot of the active scene object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSummary {
    pub name: String,
    pub location: Vec3,
    pub visible: bool,
}

/// Stateful scene host
///
/// Every method runs on the host's own thread; the runner holds `&mut` for
/// the whole run so two runs can never interleave on one host.
pub trait HostContext {
    /// Whether an object is currently active
    fn has_active_selection(&self) -> bool;

    /// Make the named object active and selected
    fn set_active_selection(&mut self, object: &str) -> Result<(), HostError>;

    /// Names of existing scene objects, oldest first (last is most recent)
    fn objects(&self) -> Vec<String>;

    /// Summary of the active object, if the host can report one
    fn active_object(&self) -> Option<ObjectSummary> {
        None
    }

    /// Invoke a host operator with a keyword argument set
    ///
    /// An empty `args` means the operator is called with no arguments.
    fn invoke(&mut self, operator: &str, args: &TypedArgs) -> Result<Value, HostError>;
}
