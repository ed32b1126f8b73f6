//! Prompt-to-scene pipeline
//!
//! prompt → generate → parse → run. A generation failure stops before the
//! parser; a parse failure stops before any step is attempted.

use crate::client::TextGenerator;
use crate::error::GenerationError;
use crate::prompt::PromptTemplate;
use sceneops_core::{execute_plan_text, CapabilityRegistry, HostContext, ParseError, RunReport};

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopilotOutcome {
    /// No completion was obtained
    GenerationFailed(GenerationError),
    /// The completion held no usable plan
    ParseFailed {
        error: ParseError,
        response: String,
    },
    /// The plan ran; individual steps may still have failed
    Completed {
        response: String,
        report: RunReport,
    },
}

impl CopilotOutcome {
    /// True only when the plan ran and every step succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { report, .. } if report.succeeded())
    }

    /// Human-readable summary: the sentinel error, the parse error or the log
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::GenerationFailed(e) => e.to_sentinel(),
            Self::ParseFailed { error, .. } => error.to_string(),
            Self::Completed { report, .. } => report.render(),
        }
    }

    /// Run log, if the plan ran
    #[must_use]
    pub fn report(&self) -> Option<&RunReport> {
        match self {
            Self::Completed { report, .. } => Some(report),
            _ => None,
        }
    }
}

/// Natural-language request runner
#[derive(Debug)]
pub struct Copilot<G> {
    generator: G,
    registry: CapabilityRegistry,
    template: PromptTemplate,
}

impl<G: TextGenerator> Copilot<G> {
    /// Create with the default registry and prompt template
    #[must_use]
    pub fn new(generator: G) -> Self {
        let registry = CapabilityRegistry::with_defaults();
        let template = PromptTemplate::for_registry(&registry);
        Self {
            generator,
            registry,
            template,
        }
    }

    /// With a custom prompt template
    #[must_use]
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// Registry plans are checked against
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &CapabilityRegistry {
        &self.registry
    }

    /// Generate a plan for `user_text` and run it against the host
    pub fn run(&self, user_text: &str, host: &mut dyn HostContext) -> CopilotOutcome {
        tracing::info!("User prompt: {}", user_text.trim());
        let prompt = self.template.render(user_text);

        let response = match self.generator.generate(&prompt) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Generation failed: {}", e);
                return CopilotOutcome::GenerationFailed(e);
            }
        };

        match execute_plan_text(&response, &self.registry, host) {
            Ok(report) => CopilotOutcome::Completed { response, report },
            Err(error) => {
                tracing::error!("Plan rejected: {}", error);
                CopilotOutcome::ParseFailed { error, response }
            }
        }
    }
}
