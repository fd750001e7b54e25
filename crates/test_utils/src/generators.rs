//! Property-Based Test Generators
//!
//! Provides proptest strategies for case snapshots. Two families:
//!
//! - scenario strategies, which pick a flow state and build a realistic
//!   case sitting at it;
//! - arbitrary strategies, which fill each field independently and so
//!   produce combinations no real case would have.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::option;
use proptest::prelude::*;

use domain_claims::{
    CaseData, CaseState, CloseClaim, FlowState, PaymentDetails, PaymentStatus,
    RespondentResponseType, ResponseIntention, YesOrNo,
};

use crate::builders::CaseDataBuilder;
use crate::fixtures::{DqFixtures, TemporalFixtures};

/// Strategy for any flow state
pub fn flow_state_strategy() -> impl Strategy<Value = FlowState> {
    proptest::sample::select(FlowState::ALL)
}

/// Strategy for a realistic case at a random flow state
pub fn scenario_strategy() -> impl Strategy<Value = (FlowState, CaseData)> {
    flow_state_strategy().prop_map(|state| (state, CaseDataBuilder::new().at_state(state).build()))
}

/// Strategy for instants within a year either side of the fixture instant
pub fn instant_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (-365i64 * 24..365i64 * 24)
        .prop_map(|hours| TemporalFixtures::now() + Duration::hours(hours))
}

/// Strategy for calendar dates within a year either side of the fixture instant
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    instant_strategy().prop_map(|instant| instant.date())
}

pub fn yes_or_no_strategy() -> impl Strategy<Value = YesOrNo> {
    any::<bool>().prop_map(YesOrNo::from)
}

pub fn case_state_strategy() -> impl Strategy<Value = CaseState> {
    prop_oneof![
        Just(CaseState::PendingCaseIssued),
        Just(CaseState::CaseIssued),
        Just(CaseState::AwaitingCaseDetailsNotification),
        Just(CaseState::AwaitingRespondentAcknowledgement),
        Just(CaseState::AwaitingApplicantIntention),
        Just(CaseState::ProceedsInHeritageSystem),
        Just(CaseState::CaseDismissed),
    ]
}

pub fn response_type_strategy() -> impl Strategy<Value = RespondentResponseType> {
    prop_oneof![
        Just(RespondentResponseType::FullDefence),
        Just(RespondentResponseType::FullAdmission),
        Just(RespondentResponseType::PartAdmission),
        Just(RespondentResponseType::CounterClaim),
    ]
}

pub fn response_intention_strategy() -> impl Strategy<Value = ResponseIntention> {
    prop_oneof![
        Just(ResponseIntention::FullDefence),
        Just(ResponseIntention::PartDefence),
        Just(ResponseIntention::ContestJurisdiction),
    ]
}

pub fn payment_details_strategy() -> impl Strategy<Value = PaymentDetails> {
    prop_oneof![Just(PaymentStatus::Success), Just(PaymentStatus::Failed)].prop_map(|status| {
        PaymentDetails {
            status: Some(status),
            ..Default::default()
        }
    })
}

fn close_claim_strategy() -> impl Strategy<Value = CloseClaim> {
    option::of(date_strategy()).prop_map(|date| CloseClaim {
        date,
        reason: Some("Generated".to_string()),
    })
}

fn timestamp() -> impl Strategy<Value = Option<NaiveDateTime>> {
    option::of(instant_strategy())
}

/// Strategy for snapshots with every field chosen independently
pub fn arbitrary_case_data_strategy() -> impl Strategy<Value = CaseData> {
    let lifecycle = (
        timestamp(),
        timestamp(),
        timestamp(),
        timestamp(),
        timestamp(),
        timestamp(),
        timestamp(),
        timestamp(),
    );
    let responses = (
        timestamp(),
        timestamp(),
        timestamp(),
        timestamp(),
        timestamp(),
        timestamp(),
        timestamp(),
        timestamp(),
    );
    let answers = (
        option::of(date_strategy()),
        option::of(date_strategy()),
        option::of(payment_details_strategy()),
        option::of(yes_or_no_strategy()),
        option::of(yes_or_no_strategy()),
        option::of(yes_or_no_strategy()),
        option::of(response_type_strategy()),
        option::of(response_intention_strategy()),
    );
    let closure = (
        option::of(case_state_strategy()),
        option::of(close_claim_strategy()),
        option::of(close_claim_strategy()),
        any::<bool>(),
    );

    (lifecycle, responses, answers, closure).prop_map(
        |(
            (
                submitted,
                paid,
                notification_deadline,
                notified,
                details_deadline,
                details_notified,
                response_deadline,
                dismissed_deadline,
            ),
            (
                extension,
                acknowledged,
                responded,
                applicant_deadline,
                applicant_responded,
                taken_offline,
                taken_offline_by_staff,
                dismissed,
            ),
            (
                issue_date,
                agreed_extension,
                payment,
                represented,
                registered,
                proceed,
                response_type,
                intention,
            ),
            (ccd_state, withdraw, discontinue, with_dqs),
        )| CaseData {
            ccd_state,
            submitted_date: submitted,
            payment_successful_date: paid,
            claim_notification_deadline: notification_deadline,
            claim_notification_date: notified,
            claim_details_notification_deadline: details_deadline,
            claim_details_notification_date: details_notified,
            respondent1_response_deadline: response_deadline,
            claim_dismissed_deadline: dismissed_deadline,
            respondent1_time_extension_date: extension,
            respondent1_acknowledge_notification_date: acknowledged,
            respondent1_response_date: responded,
            applicant1_response_deadline: applicant_deadline,
            applicant1_response_date: applicant_responded,
            taken_offline_date: taken_offline,
            taken_offline_by_staff_date: taken_offline_by_staff,
            claim_dismissed_date: dismissed,
            issue_date,
            respondent_solicitor1_agreed_deadline_extension: agreed_extension,
            payment_details: payment,
            respondent1_represented: represented,
            respondent1_org_registered: registered,
            applicant1_proceed_with_claim: proceed,
            respondent1_claim_response_type: response_type,
            respondent1_claim_response_intention_type: intention,
            withdraw_claim: withdraw,
            discontinue_claim: discontinue,
            respondent1_dq: with_dqs.then(DqFixtures::respondent_dq),
            applicant1_dq: with_dqs.then(DqFixtures::applicant_dq),
            ..Default::default()
        },
    )
}
