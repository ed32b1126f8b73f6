//! sceneops command-line front end
//!
//! Library half of the `sceneops` binary: configuration, logging setup and
//! the subcommand bodies.

pub mod commands;
pub mod config;
pub mod logging;

pub use config::{ConfigError, SceneopsConfig};
