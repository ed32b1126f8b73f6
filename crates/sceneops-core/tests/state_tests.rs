use proptest::prelude::*;
use sceneops_core::state_machine::{allowed_transitions, validate_transition, StepState};

#[test]
fn test_pending_transitions() {
    assert!(validate_transition(StepState::Pending, StepState::Attempted).is_ok());
    assert!(validate_transition(StepState::Pending, StepState::LoggedFailure).is_ok());

    // A step is never logged as a success without being attempted
    assert!(validate_transition(StepState::Pending, StepState::LoggedSuccess).is_err());
}

#[test]
fn test_attempted_transitions() {
    assert!(validate_transition(StepState::Attempted, StepState::LoggedSuccess).is_ok());
    assert!(validate_transition(StepState::Attempted, StepState::LoggedFailure).is_ok());
    assert!(validate_transition(StepState::Attempted, StepState::Pending).is_err());
}

#[test]
fn test_terminal_states() {
    assert!(allowed_transitions(StepState::LoggedSuccess).is_empty());
    assert!(allowed_transitions(StepState::LoggedFailure).is_empty());
    assert!(StepState::LoggedFailure.is_terminal());
    assert!(!StepState::Attempted.is_terminal());
}

fn any_state() -> impl Strategy<Value = StepState> {
    prop_oneof![
        Just(StepState::Pending),
        Just(StepState::Attempted),
        Just(StepState::LoggedSuccess),
        Just(StepState::LoggedFailure),
    ]
}

proptest! {
    #[test]
    fn prop_all_transitions_are_subset_of_allowed(from in any_state(), to in any_state()) {
        let res = validate_transition(from, to);
        let allowed = allowed_transitions(from);

        if res.is_ok() {
            assert!(allowed.contains(&to));
        } else {
            assert!(!allowed.contains(&to));
        }
    }

    #[test]
    fn prop_terminal_states_have_no_exit(from in any_state(), to in any_state()) {
        if from.is_terminal() {
            prop_assert!(validate_transition(from, to).is_err());
        }
    }
}
