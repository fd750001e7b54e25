//! Property-based tests for the state-flow engine
//!
//! Arbitrary snapshots combine fields no real case would have, so these
//! properties hold for any input the engine can be handed.

use proptest::prelude::*;

use domain_claims::predicates::{self, FlowPredicate};
use domain_claims::{main_flow, FlowContext, FlowState, StateFlowEngine};
use test_utils::{
    arbitrary_case_data_strategy, assert_no_repeated_states, instant_strategy,
    scenario_strategy, TemporalFixtures,
};

fn engine() -> StateFlowEngine<'static> {
    StateFlowEngine::main(TemporalFixtures::clock()).unwrap()
}

/// Guard pairs that split on a single field and so never hold together
const EXCLUSIVE_PAIRS: &[(FlowPredicate, FlowPredicate)] = &[
    (predicates::FULL_DEFENCE_AFTER_NOTIFY_DETAILS, predicates::FULL_DEFENCE_AFTER_ACKNOWLEDGE),
    (predicates::FULL_ADMISSION_AFTER_NOTIFY_DETAILS, predicates::FULL_ADMISSION_AFTER_ACKNOWLEDGE),
    (predicates::PART_ADMISSION_AFTER_NOTIFY_DETAILS, predicates::PART_ADMISSION_AFTER_ACKNOWLEDGE),
    (predicates::COUNTER_CLAIM_AFTER_NOTIFY_DETAILS, predicates::COUNTER_CLAIM_AFTER_ACKNOWLEDGE),
    (predicates::FULL_DEFENCE_PROCEED, predicates::FULL_DEFENCE_NOT_PROCEED),
    (predicates::CLAIM_DETAILS_NOTIFIED_TIME_EXTENSION, predicates::NOTIFICATION_ACKNOWLEDGED),
    (predicates::FULL_DEFENCE, predicates::FULL_ADMISSION),
    (predicates::PART_ADMISSION, predicates::COUNTER_CLAIM),
    (predicates::PENDING_CLAIM_ISSUED, predicates::RESPONDENT_NOT_REPRESENTED),
    (predicates::PENDING_CLAIM_ISSUED, predicates::RESPONDENT_ORG_NOT_REGISTERED),
    (predicates::RESPONDENT_NOT_REPRESENTED, predicates::RESPONDENT_ORG_NOT_REGISTERED),
    (predicates::CLAIM_NOTIFIED, predicates::PAST_CLAIM_NOTIFICATION_DEADLINE),
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn history_starts_at_initial_state(case_data in arbitrary_case_data_strategy()) {
        let result = engine().evaluate(&case_data).unwrap();
        prop_assert_eq!(result.history()[0], FlowState::Draft);
        prop_assert_eq!(result.current_state(), *result.history().last().unwrap());
    }

    #[test]
    fn history_never_repeats(case_data in arbitrary_case_data_strategy()) {
        assert_no_repeated_states(&engine().evaluate(&case_data).unwrap());
    }

    #[test]
    fn history_follows_declared_transitions(case_data in arbitrary_case_data_strategy()) {
        let flow = main_flow().unwrap();
        let result = engine().evaluate(&case_data).unwrap();

        for pair in result.history().windows(2) {
            let edge = flow
                .transitions_from(pair[0])
                .iter()
                .find(|transition| transition.target() == pair[1]);
            prop_assert!(edge.is_some(), "no edge {} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn walk_stops_only_when_no_guard_holds(
        case_data in arbitrary_case_data_strategy(),
        now in instant_strategy(),
    ) {
        let flow = main_flow().unwrap();
        let result = engine().evaluate_at(&case_data, now).unwrap();
        let ctx = FlowContext::new(&case_data, now);

        let open = flow
            .transitions_from(result.current_state())
            .iter()
            .any(|transition| transition.guard().test(&ctx));
        prop_assert!(!open);
    }

    #[test]
    fn evaluation_is_deterministic(
        case_data in arbitrary_case_data_strategy(),
        now in instant_strategy(),
    ) {
        let engine = engine();
        prop_assert_eq!(
            engine.evaluate_at(&case_data, now).unwrap(),
            engine.evaluate_at(&case_data, now).unwrap()
        );
    }

    #[test]
    fn has_transitioned_to_matches_history(
        case_data in arbitrary_case_data_strategy(),
        state in test_utils::flow_state_strategy(),
    ) {
        let engine = engine();
        let history = engine.evaluate(&case_data).unwrap();
        prop_assert_eq!(
            engine.has_transitioned_to(&case_data, state).unwrap(),
            history.contains(state)
        );
    }

    #[test]
    fn exclusive_guards_never_both_hold(
        case_data in arbitrary_case_data_strategy(),
        now in instant_strategy(),
    ) {
        let ctx = FlowContext::new(&case_data, now);
        for (left, right) in EXCLUSIVE_PAIRS {
            prop_assert!(
                !(left.test(&ctx) && right.test(&ctx)),
                "{} and {} both hold",
                left.name(),
                right.name()
            );
        }
    }

    #[test]
    fn scenario_reaches_its_state((state, case_data) in scenario_strategy()) {
        let result = engine().evaluate(&case_data).unwrap();
        prop_assert_eq!(result.current_state(), state);
    }

    #[test]
    fn result_survives_serialization(case_data in arbitrary_case_data_strategy()) {
        let result = engine().evaluate(&case_data).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let restored: domain_claims::StateFlowResult = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, result);
    }
}

#[test]
fn test_full_name_round_trip() {
    for state in FlowState::ALL {
        let parsed = FlowState::from_full_name(state.full_name()).unwrap();
        assert_eq!(parsed, *state);
        assert!(state.full_name().starts_with("MAIN."));
    }
}

#[test]
fn test_every_predicate_is_named_once() {
    for predicate in predicates::ALL {
        assert_eq!(predicates::by_name(predicate.name()), Some(*predicate));
    }
    assert_eq!(predicates::by_name("noSuchPredicate"), None);
}
