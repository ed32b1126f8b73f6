use serde::Serialize;

/// Lifecycle of a single plan step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Pending,
    Attempted,
    LoggedSuccess,
    LoggedFailure,
}

impl StepState {
    /// Whether the step has produced its log entry
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::LoggedSuccess | Self::LoggedFailure)
    }
}

/// Attempted transition is not in the step lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal step transition: {from:?} -> {to:?}")]
pub struct IllegalTransition {
    pub from: StepState,
    pub to: StepState,
}

/// Validates a step state transition.
///
/// A step with no tool goes straight from `Pending` to `LoggedFailure`.
pub fn validate_transition(from: StepState, to: StepState) -> Result<(), IllegalTransition> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(IllegalTransition { from, to })
    }
}

pub fn allowed_transitions(from: StepState) -> &'static [StepState] {
    use StepState::*;
    match from {
        Pending => &[Attempted, LoggedFailure],
        Attempted => &[LoggedSuccess, LoggedFailure],
        LoggedSuccess | LoggedFailure => &[],
    }
}

/// Tracks one step through its lifecycle
#[derive(Debug)]
pub(crate) struct StepTracker {
    index: usize,
    state: StepState,
}

impl StepTracker {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            state: StepState::Pending,
        }
    }

    pub(crate) fn advance(&mut self, to: StepState) {
        if let Err(e) = validate_transition(self.state, to) {
            tracing::error!("Step {}: {}", self.index, e);
        }
        self.state = to;
    }

    pub(crate) fn state(&self) -> StepState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_path() {
        assert!(validate_transition(StepState::Pending, StepState::LoggedFailure).is_ok());
        assert!(validate_transition(StepState::Pending, StepState::LoggedSuccess).is_err());
    }

    #[test]
    fn tracker_reaches_terminal_state() {
        let mut tracker = StepTracker::new(0);
        tracker.advance(StepState::Attempted);
        tracker.advance(StepState::LoggedSuccess);
        assert!(tracker.state().is_terminal());
    }
}
