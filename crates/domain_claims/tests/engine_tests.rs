//! Scenario tests for the state-flow engine over the MAIN flow

use domain_claims::{CaseData, FlowError, FlowState, StateFlowEngine};
use test_utils::{
    assert_current_state, assert_history, assert_no_repeated_states, CaseDataBuilder,
    PaymentFixtures, TemporalFixtures,
};

use FlowState::*;

fn engine() -> StateFlowEngine<'static> {
    StateFlowEngine::main(TemporalFixtures::clock()).unwrap()
}

fn evaluate(case_data: &CaseData) -> domain_claims::StateFlowResult {
    engine().evaluate(case_data).unwrap()
}

fn at(state: FlowState) -> CaseData {
    CaseDataBuilder::new().at_state(state).build()
}

const ISSUED: &[FlowState] = &[
    Draft,
    ClaimSubmitted,
    ClaimIssuedPaymentSuccessful,
    PendingClaimIssued,
    ClaimIssued,
];

fn issued_then(rest: &[FlowState]) -> Vec<FlowState> {
    ISSUED.iter().chain(rest).copied().collect()
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_only_submitted() {
        let case_data = CaseData {
            submitted_date: Some(TemporalFixtures::days_before(1)),
            ..Default::default()
        };
        assert_history(&evaluate(&case_data), &[Draft, ClaimSubmitted]);
    }

    #[test]
    fn test_every_builder_state_is_reached() {
        for state in FlowState::ALL {
            let result = evaluate(&at(*state));
            assert_current_state(&result, *state);
        }
    }

    #[test]
    fn test_payment_paths() {
        assert_history(
            &evaluate(&at(ClaimIssuedPaymentFailed)),
            &[Draft, ClaimSubmitted, ClaimIssuedPaymentFailed],
        );
        assert_history(
            &evaluate(&at(ClaimIssuedPaymentSuccessful)),
            &[Draft, ClaimSubmitted, ClaimIssuedPaymentSuccessful],
        );
    }

    #[test]
    fn test_unrepresented_defendant_taken_offline() {
        assert_history(
            &evaluate(&at(TakenOfflineUnrepresentedDefendant)),
            &[
                Draft,
                ClaimSubmitted,
                ClaimIssuedPaymentSuccessful,
                PendingClaimIssuedUnrepresentedDefendant,
                TakenOfflineUnrepresentedDefendant,
            ],
        );
    }

    #[test]
    fn test_unregistered_defendant_taken_offline() {
        assert_history(
            &evaluate(&at(TakenOfflineUnregisteredDefendant)),
            &[
                Draft,
                ClaimSubmitted,
                ClaimIssuedPaymentSuccessful,
                PendingClaimIssuedUnregisteredDefendant,
                TakenOfflineUnregisteredDefendant,
            ],
        );
    }

    #[test]
    fn test_notification_path() {
        assert_history(
            &evaluate(&at(ClaimDetailsNotified)),
            &issued_then(&[ClaimNotified, ClaimDetailsNotified]),
        );
        assert_history(
            &evaluate(&at(ClaimDetailsNotifiedTimeExtension)),
            &issued_then(&[ClaimNotified, ClaimDetailsNotified, ClaimDetailsNotifiedTimeExtension]),
        );
        assert_history(
            &evaluate(&at(NotificationAcknowledgedTimeExtension)),
            &issued_then(&[
                ClaimNotified,
                ClaimDetailsNotified,
                NotificationAcknowledged,
                NotificationAcknowledgedTimeExtension,
            ]),
        );
    }

    #[test]
    fn test_full_admission_after_acknowledgement() {
        assert_history(
            &evaluate(&at(FullAdmission)),
            &issued_then(&[
                ClaimNotified,
                ClaimDetailsNotified,
                NotificationAcknowledged,
                FullAdmission,
            ]),
        );
    }

    #[test]
    fn test_full_defence_then_proceed() {
        assert_history(
            &evaluate(&at(FullDefenceProceed)),
            &issued_then(&[
                ClaimNotified,
                ClaimDetailsNotified,
                NotificationAcknowledged,
                FullDefence,
                FullDefenceProceed,
            ]),
        );
    }

    #[test]
    fn test_response_without_acknowledgement() {
        let case_data = CaseDataBuilder::new()
            .at_state_full_defence()
            .with(|c| c.respondent1_acknowledge_notification_date = None)
            .build();
        assert_history(
            &evaluate(&case_data),
            &issued_then(&[ClaimNotified, ClaimDetailsNotified, FullDefence]),
        );
    }

    #[test]
    fn test_counter_claim_after_time_extension() {
        let case_data = CaseDataBuilder::new()
            .at_state_claim_details_notified_time_extension()
            .with(|c| {
                c.respondent1_claim_response_type =
                    Some(domain_claims::RespondentResponseType::CounterClaim);
                c.respondent1_response_date = Some(TemporalFixtures::days_before(2));
            })
            .build();
        assert_history(
            &evaluate(&case_data),
            &issued_then(&[
                ClaimNotified,
                ClaimDetailsNotified,
                ClaimDetailsNotifiedTimeExtension,
                CounterClaim,
            ]),
        );
    }

    #[test]
    fn test_dismissal_paths() {
        assert_history(
            &evaluate(&at(ClaimDismissedPastClaimNotificationDeadline)),
            &issued_then(&[ClaimDismissedPastClaimNotificationDeadline]),
        );
        assert_history(
            &evaluate(&at(ClaimDismissedPastClaimDetailsNotificationDeadline)),
            &issued_then(&[ClaimNotified, ClaimDismissedPastClaimDetailsNotificationDeadline]),
        );
        assert_history(
            &evaluate(&at(ClaimDismissedPastClaimDismissedDeadline)),
            &issued_then(&[
                ClaimNotified,
                ClaimDetailsNotified,
                NotificationAcknowledged,
                ClaimDismissedPastClaimDismissedDeadline,
            ]),
        );
    }

    #[test]
    fn test_taken_offline_paths() {
        assert_history(
            &evaluate(&at(TakenOfflineByStaff)),
            &issued_then(&[ClaimNotified, TakenOfflineByStaff]),
        );
        assert_current_state(
            &evaluate(&at(TakenOfflinePastApplicantResponseDeadline)),
            TakenOfflinePastApplicantResponseDeadline,
        );
    }
}

mod priority_tests {
    use super::*;

    #[test]
    fn test_successful_payment_wins_over_failed_status() {
        let case_data = CaseDataBuilder::new()
            .at_state_payment_successful()
            .with_payment_details(PaymentFixtures::failed())
            .build();
        assert_history(
            &evaluate(&case_data),
            &[Draft, ClaimSubmitted, ClaimIssuedPaymentSuccessful],
        );
    }

    #[test]
    fn test_failed_payment_is_terminal_for_the_snapshot() {
        let result = evaluate(&at(ClaimIssuedPaymentFailed));
        assert_current_state(&result, ClaimIssuedPaymentFailed);
        assert!(!result.contains(PendingClaimIssued));
    }

    #[test]
    fn test_staff_offline_beats_withdrawal() {
        let case_data = CaseDataBuilder::new()
            .at_state_taken_offline_by_staff()
            .withdraw_claim()
            .build();
        assert_current_state(&evaluate(&case_data), TakenOfflineByStaff);
    }

    #[test]
    fn test_dismissal_beats_discontinuance() {
        let case_data = CaseDataBuilder::new()
            .at_state_claim_dismissed_past_claim_notification_deadline()
            .discontinue_claim()
            .build();
        assert_current_state(&evaluate(&case_data), ClaimDismissedPastClaimNotificationDeadline);
    }
}

mod closure_tests {
    use super::*;

    /// States from which a claim can still be withdrawn or discontinued
    const OPEN_STATES: &[FlowState] = &[
        ClaimIssued,
        ClaimNotified,
        ClaimDetailsNotified,
        ClaimDetailsNotifiedTimeExtension,
        NotificationAcknowledged,
        NotificationAcknowledgedTimeExtension,
        FullDefence,
    ];

    #[test]
    fn test_discontinued_from_any_open_state() {
        for state in OPEN_STATES {
            let case_data = CaseDataBuilder::new().discontinue_claim_from(*state).build();
            let result = evaluate(&case_data);
            assert_current_state(&result, ClaimDiscontinued);
            assert_eq!(
                result.history()[result.history().len() - 2],
                *state,
                "discontinued from {state}"
            );
        }
    }

    #[test]
    fn test_withdrawn_from_any_open_state() {
        for state in OPEN_STATES {
            let case_data = CaseDataBuilder::new().withdraw_claim_from(*state).build();
            let result = evaluate(&case_data);
            assert_current_state(&result, ClaimWithdrawn);
            assert!(result.contains(*state));
        }
    }

    #[test]
    fn test_discontinue_without_dismissed_state_is_ignored() {
        let case_data = CaseDataBuilder::new()
            .at_state_claim_notified()
            .discontinue_claim()
            .with_ccd_state(domain_claims::CaseState::AwaitingCaseDetailsNotification)
            .build();
        assert_current_state(&evaluate(&case_data), ClaimNotified);
    }

    #[test]
    fn test_terminal_states_ignore_closure() {
        for state in [FullAdmission, FullDefenceProceed, TakenOfflineByStaff] {
            let case_data = CaseDataBuilder::new().discontinue_claim_from(state).build();
            assert_current_state(&evaluate(&case_data), state);
        }
    }
}

mod clock_tests {
    use super::*;

    #[test]
    fn test_deadline_passes_as_clock_moves() {
        let case_data = CaseDataBuilder::new()
            .at_state_claim_issued()
            .with_claim_notification_deadline(TemporalFixtures::days_after(1))
            .with_claim_dismissed_date(TemporalFixtures::now())
            .build();

        let today = StateFlowEngine::main(TemporalFixtures::clock()).unwrap();
        assert_current_state(&today.evaluate(&case_data).unwrap(), ClaimIssued);

        let later_clock = TemporalFixtures::clock_at(TemporalFixtures::days_after(2));
        let later = StateFlowEngine::main(later_clock).unwrap();
        assert_current_state(
            &later.evaluate(&case_data).unwrap(),
            ClaimDismissedPastClaimNotificationDeadline,
        );
    }

    #[test]
    fn test_evaluate_at_matches_clock() {
        let case_data = at(ClaimDismissedPastClaimDismissedDeadline);
        let engine = engine();
        assert_eq!(
            engine.evaluate(&case_data).unwrap(),
            engine.evaluate_at(&case_data, TemporalFixtures::now()).unwrap()
        );
    }

    #[test]
    fn test_same_snapshot_same_result() {
        let case_data = at(FullDefenceNotProceed);
        let first = evaluate(&case_data);
        let second = evaluate(&case_data);
        assert_eq!(first, second);
        assert_no_repeated_states(&first);
    }
}

mod transition_query_tests {
    use super::*;

    #[test]
    fn test_has_transitioned_to() {
        let engine = engine();
        let case_data = at(FullDefence);

        assert!(engine.has_transitioned_to(&case_data, NotificationAcknowledged).unwrap());
        assert!(engine.has_transitioned_to(&case_data, FullDefence).unwrap());
        assert!(!engine.has_transitioned_to(&case_data, FullDefenceProceed).unwrap());
        assert!(!engine.has_transitioned_to(&case_data, ClaimIssuedPaymentFailed).unwrap());
    }

    #[test]
    fn test_has_transitioned_to_by_name() {
        let engine = engine();
        let case_data = at(ClaimNotified);

        assert!(engine
            .has_transitioned_to_name(&case_data, "MAIN.CLAIM_ISSUED")
            .unwrap());
        assert!(matches!(
            engine.has_transitioned_to_name(&case_data, "CLAIM_ISSUED"),
            Err(FlowError::InvalidInput(_))
        ));
    }
}
