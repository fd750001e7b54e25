//! Event history mapper
//!
//! Projects the state history of a case onto robotics events. Each state
//! in the history that carries legal significance contributes its events;
//! states without a handler contribute nothing.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use core_kernel::Clock;
use domain_claims::{
    CaseData, DirectionsQuestionnaire, FlowState, StateFlowEngine, StateFlowResult,
};

use crate::error::RoboticsError;
use crate::event::{Event, EventDetails, EventHistory, EventType, APPLICANT_ID, RESPONDENT_ID};

type Handler = fn(&CaseData, &mut EventHistory) -> Result<(), RoboticsError>;

/// Builds event histories from case snapshots
pub struct EventHistoryMapper<'f> {
    engine: StateFlowEngine<'f>,
    handlers: HashMap<FlowState, Handler>,
}

impl EventHistoryMapper<'static> {
    /// Mapper over the shared MAIN flow
    pub fn main(clock: Arc<dyn Clock>) -> Result<Self, RoboticsError> {
        Ok(Self::new(StateFlowEngine::main(clock)?))
    }
}

impl<'f> EventHistoryMapper<'f> {
    pub fn new(engine: StateFlowEngine<'f>) -> Self {
        let handlers: [(FlowState, Handler); 13] = [
            (FlowState::TakenOfflineUnrepresentedDefendant, unrepresented_defendant),
            (FlowState::TakenOfflineUnregisteredDefendant, unregistered_defendant),
            (FlowState::NotificationAcknowledged, acknowledgement_of_service),
            (FlowState::ClaimDetailsNotifiedTimeExtension, consent_extension),
            (FlowState::NotificationAcknowledgedTimeExtension, consent_extension),
            (FlowState::FullDefence, respondent_full_defence),
            (FlowState::FullAdmission, respondent_full_admission),
            (FlowState::PartAdmission, respondent_part_admission),
            (FlowState::CounterClaim, respondent_counter_claim),
            (FlowState::FullDefenceProceed, full_defence_proceed),
            (FlowState::FullDefenceNotProceed, full_defence_not_proceed),
            (FlowState::TakenOfflineByStaff, taken_offline_by_staff),
            (
                FlowState::TakenOfflinePastApplicantResponseDeadline,
                taken_offline_past_applicant_deadline,
            ),
        ];

        Self {
            engine,
            handlers: handlers.into_iter().collect(),
        }
    }

    pub fn engine(&self) -> &StateFlowEngine<'f> {
        &self.engine
    }

    /// States that produce events
    pub fn mapped_states(&self) -> impl Iterator<Item = FlowState> + '_ {
        self.handlers.keys().copied()
    }

    /// Derives the event history of a case
    pub fn build_events(&self, case_data: &CaseData) -> Result<EventHistory, RoboticsError> {
        let result = self.engine.evaluate(case_data)?;
        self.project(case_data, &result)
    }

    /// Events implied by an already evaluated state history
    ///
    /// Callers that also report the state should evaluate once and project
    /// that result, so state and events come from the same walk.
    pub fn project(
        &self,
        case_data: &CaseData,
        result: &StateFlowResult,
    ) -> Result<EventHistory, RoboticsError> {
        let mut history = EventHistory::new();

        for state in result.history() {
            match self.handlers.get(state) {
                Some(handler) => handler(case_data, &mut history)?,
                None => trace!(state = %state, "No events for state"),
            }
        }

        debug!(
            case_reference = ?case_data.ccd_case_reference,
            state = %result.current_state(),
            events = history.len(),
            "Event history built"
        );
        Ok(history)
    }
}

fn required<T>(
    value: Option<T>,
    state: FlowState,
    field: &'static str,
) -> Result<T, RoboticsError> {
    value.ok_or_else(|| RoboticsError::missing(state, field))
}

fn date_of(
    value: Option<NaiveDateTime>,
    state: FlowState,
    field: &'static str,
) -> Result<NaiveDate, RoboticsError> {
    required(value, state, field).map(|instant| instant.date())
}

/// Questionnaire summary; a missing questionnaire reads as no court and no stay
fn dq_details(dq: Option<&DirectionsQuestionnaire>) -> (EventDetails, String) {
    let court = dq.and_then(DirectionsQuestionnaire::preferred_court_code);
    let stay = dq.is_some_and(DirectionsQuestionnaire::stay_requested);

    let text = format!(
        "preferredCourtCode: {}; stayClaim: {}",
        court.unwrap_or("null"),
        stay
    );
    let details = EventDetails {
        preferred_court_code: court.map(str::to_string),
        stay_claim: Some(stay),
        ..Default::default()
    };
    (details, text)
}

fn directions_questionnaire(
    sequence: u32,
    date: NaiveDate,
    party: &str,
    dq: Option<&DirectionsQuestionnaire>,
) -> Event {
    let (details, text) = dq_details(dq);
    Event::new(EventType::DirectionsQuestionnaireFiled, sequence, date)
        .with_party(party)
        .with_details(details)
        .with_details_text(text)
}

fn unrepresented_defendant(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    let date = date_of(
        case_data.submitted_date,
        FlowState::TakenOfflineUnrepresentedDefendant,
        "submittedDate",
    )?;
    history.push(Event::miscellaneous(1, date, "RPA Reason: Unrepresented defendant."));
    Ok(())
}

fn unregistered_defendant(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    let date = date_of(
        case_data.submitted_date,
        FlowState::TakenOfflineUnregisteredDefendant,
        "submittedDate",
    )?;
    history.push(Event::miscellaneous(
        1,
        date,
        "RPA Reason: Unregistered defendant solicitor firm.",
    ));
    Ok(())
}

fn acknowledgement_of_service(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    let state = FlowState::NotificationAcknowledged;
    let date = date_of(
        case_data.respondent1_acknowledge_notification_date,
        state,
        "respondent1AcknowledgeNotificationDate",
    )?;
    let intention = required(
        case_data.respondent1_claim_response_intention_type,
        state,
        "respondent1ClaimResponseIntentionType",
    )?;

    history.push(
        Event::new(EventType::AcknowledgementOfServiceReceived, 2, date)
            .with_party(RESPONDENT_ID)
            .with_details(EventDetails {
                response_intention: Some(intention.label().to_string()),
                ..Default::default()
            })
            .with_details_text(format!("responseIntention: {}", intention.label())),
    );
    Ok(())
}

fn consent_extension(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    let state = if case_data.respondent1_acknowledge_notification_date.is_some() {
        FlowState::NotificationAcknowledgedTimeExtension
    } else {
        FlowState::ClaimDetailsNotifiedTimeExtension
    };
    let date = date_of(
        case_data.respondent1_time_extension_date,
        state,
        "respondent1TimeExtensionDate",
    )?;
    let agreed = required(
        case_data.respondent_solicitor1_agreed_deadline_extension,
        state,
        "respondentSolicitor1AgreedDeadlineExtension",
    )?;

    history.push(
        Event::new(EventType::ConsentExtensionFilingDefence, 3, date)
            .with_party(RESPONDENT_ID)
            .with_details(EventDetails {
                agreed_extension_date: Some(agreed),
                ..Default::default()
            })
            .with_details_text(format!("agreedExtensionDate: {}", agreed.format("%Y-%m-%d"))),
    );
    Ok(())
}

fn respondent_response_date(
    case_data: &CaseData,
    state: FlowState,
) -> Result<NaiveDate, RoboticsError> {
    date_of(case_data.respondent1_response_date, state, "respondent1ResponseDate")
}

fn respondent_full_defence(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    let date = respondent_response_date(case_data, FlowState::FullDefence)?;
    history.push(Event::new(EventType::DefenceFiled, 4, date).with_party(RESPONDENT_ID));
    history.push(directions_questionnaire(
        5,
        date,
        RESPONDENT_ID,
        case_data.respondent1_dq.as_ref(),
    ));
    Ok(())
}

/// Response event at 4 followed by its offline reason at 5
fn respondent_offline_response(
    case_data: &CaseData,
    history: &mut EventHistory,
    state: FlowState,
    event_type: EventType,
    reason: &str,
) -> Result<(), RoboticsError> {
    let date = respondent_response_date(case_data, state)?;
    history.push(Event::new(event_type, 4, date).with_party(RESPONDENT_ID));
    history.push(Event::miscellaneous(5, date, format!("RPA Reason: {reason}")));
    Ok(())
}

fn respondent_full_admission(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    respondent_offline_response(
        case_data,
        history,
        FlowState::FullAdmission,
        EventType::ReceiptOfAdmission,
        "Defendant fully admits.",
    )
}

fn respondent_part_admission(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    respondent_offline_response(
        case_data,
        history,
        FlowState::PartAdmission,
        EventType::ReceiptOfPartAdmission,
        "Defendant partial admission.",
    )
}

fn respondent_counter_claim(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    respondent_offline_response(
        case_data,
        history,
        FlowState::CounterClaim,
        EventType::DefenceAndCounterClaim,
        "Defendant rejects and counter claims.",
    )
}

fn full_defence_proceed(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    let date = date_of(
        case_data.applicant1_response_date,
        FlowState::FullDefenceProceed,
        "applicant1ResponseDate",
    )?;
    history.push(Event::new(EventType::ReplyToDefence, 6, date).with_party(APPLICANT_ID));
    history.push(directions_questionnaire(7, date, APPLICANT_ID, case_data.applicant1_dq.as_ref()));
    history.push(Event::miscellaneous(8, date, "RPA Reason: Applicant proceeds"));
    Ok(())
}

fn full_defence_not_proceed(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    let date = date_of(
        case_data.applicant1_response_date,
        FlowState::FullDefenceNotProceed,
        "applicant1ResponseDate",
    )?;
    history.push(Event::miscellaneous(6, date, "RPA Reason: Claimant intends not to proceed"));
    Ok(())
}

fn taken_offline_by_staff(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    let date = date_of(
        case_data.taken_offline_by_staff_date,
        FlowState::TakenOfflineByStaff,
        "takenOfflineByStaffDate",
    )?;
    history.push(Event::miscellaneous(9, date, "RPA Reason: Manually moved offline."));
    Ok(())
}

fn taken_offline_past_applicant_deadline(
    case_data: &CaseData,
    history: &mut EventHistory,
) -> Result<(), RoboticsError> {
    let date = date_of(
        case_data.taken_offline_date,
        FlowState::TakenOfflinePastApplicantResponseDeadline,
        "takenOfflineDate",
    )?;
    history.push(Event::miscellaneous(
        9,
        date,
        "RPA Reason: Claimant failed to respond to defence in time.",
    ));
    Ok(())
}
