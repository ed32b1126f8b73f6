//! Plan runner
//!
//! Drives the dispatcher over every step of a plan, in order, and records one
//! [`ExecutionLogEntry`] per step. A failing step is logged and the run moves
//! on; nothing already applied to the host is rolled back.

use crate::dispatch::Dispatcher;
use crate::error::ParseError;
use crate::host::HostContext;
use crate::parser::parse_plan;
use crate::plan::Plan;
use crate::registry::CapabilityRegistry;
use crate::state_machine::{StepState, StepTracker};
use serde::Serialize;
use std::fmt;

/// Glyph marking a successful step
pub const SUCCESS_GLYPH: char = '✓';

/// Glyph marking a failed step
pub const FAILURE_GLYPH: char = '✗';

/// Fixed log text for a step without a tool
pub const MISSING_TOOL: &str = "Missing tool";

/// Result of one attempted step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Glyph used in rendered log lines
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Success => SUCCESS_GLYPH,
            Self::Failure => FAILURE_GLYPH,
        }
    }
}

/// One line of the execution log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionLogEntry {
    pub index: usize,
    /// `None` when the step named no tool
    pub tool: Option<String>,
    pub outcome: Outcome,
    pub message: Option<String>,
}

impl ExecutionLogEntry {
    /// Successful step
    #[must_use]
    pub fn success(index: usize, tool: impl Into<String>) -> Self {
        Self {
            index,
            tool: Some(tool.into()),
            outcome: Outcome::Success,
            message: None,
        }
    }

    /// Failed step with the captured message
    #[must_use]
    pub fn failure(index: usize, tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            index,
            tool: Some(tool.into()),
            outcome: Outcome::Failure,
            message: Some(message.into()),
        }
    }

    /// Step that named no tool
    #[must_use]
    pub fn missing_tool(index: usize) -> Self {
        Self {
            index,
            tool: None,
            outcome: Outcome::Failure,
            message: None,
        }
    }
}

impl fmt::Display for ExecutionLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tool = self.tool.as_deref().unwrap_or(MISSING_TOOL);
        write!(f, "[{}] {} {}", self.index, tool, self.outcome.glyph())?;
        if let Some(message) = &self.message {
            write!(f, " {message}")?;
        }
        Ok(())
    }
}

/// Aggregated log of a run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RunReport {
    entries: Vec<ExecutionLogEntry>,
}

impl RunReport {
    /// Entries in step order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[ExecutionLogEntry] {
        &self.entries
    }

    /// Number of attempted steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no step was attempted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of failed entries
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.outcome == Outcome::Failure)
            .count()
    }

    /// True when no entry failed (an empty run counts as success)
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failure_count() == 0
    }

    /// Newline-joined log lines
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Sequential, failure-isolating plan runner
#[derive(Debug, Clone, Copy)]
pub struct PlanRunner<'r> {
    dispatcher: Dispatcher<'r>,
}

impl<'r> PlanRunner<'r> {
    /// Create runner over a registry
    #[inline]
    #[must_use]
    pub fn new(registry: &'r CapabilityRegistry) -> Self {
        Self {
            dispatcher: Dispatcher::new(registry),
        }
    }

    /// Run every step in order against the host
    pub fn run(&self, plan: &Plan, host: &mut dyn HostContext) -> RunReport {
        let mut entries = Vec::with_capacity(plan.len());

        for (index, step) in plan.iter().enumerate() {
            let mut tracker = StepTracker::new(index);

            let Some(tool) = step.tool() else {
                tracing::warn!("Step {} missing tool", index);
                tracker.advance(StepState::LoggedFailure);
                entries.push(ExecutionLogEntry::missing_tool(index));
                continue;
            };

            tracing::info!("Executing step {}: {} with args {:?}", index, tool, step.args());
            tracker.advance(StepState::Attempted);

            let entry = match self.dispatcher.dispatch(host, tool, step.args()) {
                Ok(_) => {
                    tracker.advance(StepState::LoggedSuccess);
                    ExecutionLogEntry::success(index, tool)
                }
                Err(e) => {
                    tracing::warn!("Step {} failed: {}", index, e);
                    tracker.advance(StepState::LoggedFailure);
                    ExecutionLogEntry::failure(index, tool, e.to_string())
                }
            };
            debug_assert!(tracker.state().is_terminal());
            entries.push(entry);
        }

        tracing::info!("Plan execution complete");
        RunReport { entries }
    }
}

/// Parse generated text and run the resulting plan
///
/// # Errors
/// Returns [`ParseError`] if the text holds no usable plan; no step is
/// attempted in that case.
pub fn execute_plan_text(
    text: &str,
    registry: &CapabilityRegistry,
    host: &mut dyn HostContext,
) -> Result<RunReport, ParseError> {
    let preview: String = text.chars().take(200).collect();
    tracing::info!("Executing plan: {}...", preview);

    let plan = parse_plan(text)?;
    Ok(PlanRunner::new(registry).run(&plan, host))
}
