//! Custom Test Assertions
//!
//! Provides assertion helpers for state histories and event histories that
//! print fully-qualified state names and event codes on failure.

use std::collections::HashSet;

use domain_claims::{FlowState, StateFlowResult};
use domain_robotics::{EventHistory, EventType};

/// Asserts that a result's history is exactly `expected`
pub fn assert_history(result: &StateFlowResult, expected: &[FlowState]) {
    let expected_names: Vec<&str> = expected.iter().map(|state| state.full_name()).collect();
    assert_eq!(
        result.history_names(),
        expected_names,
        "State history mismatch"
    );
}

/// Asserts the current state of a result
pub fn assert_current_state(result: &StateFlowResult, expected: FlowState) {
    assert_eq!(
        result.current_state(),
        expected,
        "Expected current state {}, history was {:?}",
        expected,
        result.history_names()
    );
}

/// Asserts that no state appears twice in a history
pub fn assert_no_repeated_states(result: &StateFlowResult) {
    let mut seen = HashSet::new();
    for state in result.history() {
        assert!(
            seen.insert(*state),
            "State {} repeated in history {:?}",
            state,
            result.history_names()
        );
    }
}

/// Asserts the events, ordered by sequence, as (sequence, category) pairs
pub fn assert_event_sequence(history: &EventHistory, expected: &[(u32, EventType)]) {
    let actual: Vec<(u32, EventType)> = history
        .in_sequence()
        .into_iter()
        .map(|(event_type, event)| (event.event_sequence, event_type))
        .collect();
    assert_eq!(actual, expected, "Event sequence mismatch");
}

/// Asserts every event carries the code of its category
pub fn assert_event_codes_match_categories(history: &EventHistory) {
    for (event_type, event) in history.in_sequence() {
        assert_eq!(
            event.event_type(),
            event_type,
            "Event {} filed under {} has code {}",
            event.event_sequence,
            event_type,
            event.event_code.code()
        );
    }
}
