//! sceneops scene - in-memory host
//!
//! [`InMemoryScene`] implements [`sceneops_core::HostContext`] with
//! deterministic effects, so plans can be run and inspected without a 3D
//! editor attached.

pub mod error;
pub mod object;
pub mod scene;

pub use error::{Result, SceneError};
pub use object::{Modifier, PrimitiveKind, SceneObject};
pub use scene::InMemoryScene;
