//! Configuration checks performed when a flow is built

use domain_claims::predicates::{CLAIM_ISSUED, CLAIM_NOTIFIED, CLAIM_SUBMITTED};
use domain_claims::{
    ConfigurationError, FlowName, FlowPredicate, FlowState::*, StateFlowBuilder, StateFlowEngine,
};
use test_utils::{assert_history, CaseDataBuilder, TemporalFixtures};

const ALWAYS: FlowPredicate = FlowPredicate::new("always", |_| true);

#[test]
fn test_duplicate_state_is_rejected() {
    let err = StateFlowBuilder::flow(FlowName::Main)
        .initial(Draft)
        .state(ClaimSubmitted)
        .state(ClaimSubmitted)
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigurationError::DuplicateState(ClaimSubmitted));
}

#[test]
fn test_initial_state_declared_again_is_rejected() {
    let err = StateFlowBuilder::flow(FlowName::Main)
        .initial(Draft)
        .state(Draft)
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigurationError::DuplicateState(Draft));
}

#[test]
fn test_undeclared_target_is_rejected() {
    let err = StateFlowBuilder::flow(FlowName::Main)
        .initial(Draft)
            .transition_to(ClaimSubmitted, CLAIM_SUBMITTED)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::UndeclaredTarget {
            source_state: Draft,
            target: ClaimSubmitted,
        }
    );
}

#[test]
fn test_missing_initial_state_is_rejected() {
    let err = StateFlowBuilder::flow(FlowName::Main)
        .state(ClaimSubmitted)
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigurationError::MissingInitialState(FlowName::Main));
}

#[test]
fn test_second_initial_state_is_rejected() {
    let err = StateFlowBuilder::flow(FlowName::Main)
        .initial(Draft)
        .initial(ClaimSubmitted)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::MultipleInitialStates {
            first: Draft,
            second: ClaimSubmitted,
        }
    );
}

#[test]
fn test_transition_before_any_state_is_rejected() {
    let err = StateFlowBuilder::flow(FlowName::Main)
        .transition_to(ClaimSubmitted, CLAIM_SUBMITTED)
        .initial(Draft)
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigurationError::TransitionWithoutState { target: ClaimSubmitted });
}

#[test]
fn test_first_error_is_kept() {
    let err = StateFlowBuilder::flow(FlowName::Main)
        .initial(Draft)
        .state(Draft)
        .initial(ClaimSubmitted)
        .build()
        .unwrap_err();
    assert_eq!(err, ConfigurationError::DuplicateState(Draft));
}

#[test]
fn test_small_flow_walks_in_declaration_order() {
    let flow = StateFlowBuilder::flow(FlowName::Main)
        .initial(Draft)
            .transition_to(ClaimSubmitted, CLAIM_SUBMITTED)
        .state(ClaimSubmitted)
            .transition_to(ClaimIssued, CLAIM_ISSUED)
            .transition_to(ClaimNotified, CLAIM_NOTIFIED)
        .state(ClaimIssued)
        .state(ClaimNotified)
        .build()
        .unwrap();

    let engine = StateFlowEngine::new(&flow, TemporalFixtures::clock());
    let case_data = CaseDataBuilder::new().at_state_claim_notified().build();
    assert_history(&engine.evaluate(&case_data).unwrap(), &[Draft, ClaimSubmitted, ClaimIssued]);
}

#[test]
fn test_cycle_is_reported_not_followed() {
    let flow = StateFlowBuilder::flow(FlowName::Main)
        .initial(Draft)
            .transition_to(ClaimSubmitted, ALWAYS)
        .state(ClaimSubmitted)
            .transition_to(Draft, ALWAYS)
        .build()
        .unwrap();

    let engine = StateFlowEngine::new(&flow, TemporalFixtures::clock());
    let err = engine.evaluate(&Default::default()).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(
        err,
        domain_claims::FlowError::Configuration(ConfigurationError::StateRevisited(Draft))
    );
}
