//! sceneops copilot - natural language to scene plans
//!
//! Renders a whitelist-aware prompt, obtains a completion from a
//! [`TextGenerator`] (by default a local Ollama server) and hands the result
//! to the core plan runner.

pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompt;

pub use client::{OllamaClient, TextGenerator};
pub use config::GenerationConfig;
pub use error::{is_error_response, GenerationError, ERROR_SENTINEL};
pub use pipeline::{Copilot, CopilotOutcome};
pub use prompt::{PromptTemplate, DEFAULT_PROMPT, EXAMPLES};
