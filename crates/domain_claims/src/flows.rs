//! The MAIN claim flow
//!
//! Built once per process and shared. Transition order within a state is
//! significant: where two guards can both hold, the one declared first wins.

use once_cell::sync::OnceCell;

use crate::error::ConfigurationError;
use crate::flow_state::{FlowName, FlowState::*};
use crate::predicates::*;
use crate::state_flow::{StateFlow, StateFlowBuilder};

static MAIN_FLOW: OnceCell<StateFlow> = OnceCell::new();

/// Shared MAIN flow, built on first use
pub fn main_flow() -> Result<&'static StateFlow, ConfigurationError> {
    MAIN_FLOW.get_or_try_init(build_main_flow)
}

/// Declares the MAIN flow; transitions are indented under their source state
#[rustfmt::skip]
pub fn build_main_flow() -> Result<StateFlow, ConfigurationError> {
    StateFlowBuilder::flow(FlowName::Main)
        .initial(Draft)
            .transition_to(ClaimSubmitted, CLAIM_SUBMITTED)
        .state(ClaimSubmitted)
            .transition_to(ClaimIssuedPaymentSuccessful, PAYMENT_SUCCESSFUL)
            .transition_to(ClaimIssuedPaymentFailed, PAYMENT_FAILED)
        .state(ClaimIssuedPaymentFailed)
        .state(ClaimIssuedPaymentSuccessful)
            .transition_to(PendingClaimIssued, PENDING_CLAIM_ISSUED)
            .transition_to(PendingClaimIssuedUnrepresentedDefendant, RESPONDENT_NOT_REPRESENTED)
            .transition_to(PendingClaimIssuedUnregisteredDefendant, RESPONDENT_ORG_NOT_REGISTERED)
        .state(PendingClaimIssuedUnrepresentedDefendant)
            .transition_to(TakenOfflineUnrepresentedDefendant, TAKEN_OFFLINE_NOT_REPRESENTED)
        .state(PendingClaimIssuedUnregisteredDefendant)
            .transition_to(TakenOfflineUnregisteredDefendant, TAKEN_OFFLINE_NOT_REGISTERED)
        .state(PendingClaimIssued)
            .transition_to(ClaimIssued, CLAIM_ISSUED)
        .state(ClaimIssued)
            .transition_to(ClaimNotified, CLAIM_NOTIFIED)
            .transition_to(TakenOfflineByStaff, TAKEN_OFFLINE_BY_STAFF)
            .transition_to(ClaimDismissedPastClaimNotificationDeadline, PAST_CLAIM_NOTIFICATION_DEADLINE)
            .transition_to(ClaimWithdrawn, CLAIM_WITHDRAWN)
            .transition_to(ClaimDiscontinued, CLAIM_DISCONTINUED)
        .state(ClaimNotified)
            .transition_to(ClaimDetailsNotified, CLAIM_DETAILS_NOTIFIED)
            .transition_to(TakenOfflineByStaff, TAKEN_OFFLINE_BY_STAFF)
            .transition_to(ClaimDismissedPastClaimDetailsNotificationDeadline, PAST_CLAIM_DETAILS_NOTIFICATION_DEADLINE)
            .transition_to(ClaimWithdrawn, CLAIM_WITHDRAWN)
            .transition_to(ClaimDiscontinued, CLAIM_DISCONTINUED)
        .state(ClaimDetailsNotified)
            .transition_to(ClaimDetailsNotifiedTimeExtension, CLAIM_DETAILS_NOTIFIED_TIME_EXTENSION)
            .transition_to(NotificationAcknowledged, NOTIFICATION_ACKNOWLEDGED)
            .transition_to(FullDefence, FULL_DEFENCE_AFTER_NOTIFY_DETAILS)
            .transition_to(FullAdmission, FULL_ADMISSION_AFTER_NOTIFY_DETAILS)
            .transition_to(PartAdmission, PART_ADMISSION_AFTER_NOTIFY_DETAILS)
            .transition_to(CounterClaim, COUNTER_CLAIM_AFTER_NOTIFY_DETAILS)
            .transition_to(TakenOfflineByStaff, TAKEN_OFFLINE_BY_STAFF)
            .transition_to(ClaimDismissedPastClaimDismissedDeadline, PAST_CLAIM_DISMISSED_DEADLINE)
            .transition_to(ClaimWithdrawn, CLAIM_WITHDRAWN)
            .transition_to(ClaimDiscontinued, CLAIM_DISCONTINUED)
        .state(ClaimDetailsNotifiedTimeExtension)
            .transition_to(NotificationAcknowledged, NOTIFICATION_ACKNOWLEDGED)
            .transition_to(FullDefence, FULL_DEFENCE_AFTER_NOTIFY_DETAILS)
            .transition_to(FullAdmission, FULL_ADMISSION_AFTER_NOTIFY_DETAILS)
            .transition_to(PartAdmission, PART_ADMISSION_AFTER_NOTIFY_DETAILS)
            .transition_to(CounterClaim, COUNTER_CLAIM_AFTER_NOTIFY_DETAILS)
            .transition_to(TakenOfflineByStaff, TAKEN_OFFLINE_BY_STAFF)
            .transition_to(ClaimDismissedPastClaimDismissedDeadline, PAST_CLAIM_DISMISSED_DEADLINE)
            .transition_to(ClaimWithdrawn, CLAIM_WITHDRAWN)
            .transition_to(ClaimDiscontinued, CLAIM_DISCONTINUED)
        .state(NotificationAcknowledged)
            .transition_to(NotificationAcknowledgedTimeExtension, NOTIFICATION_ACKNOWLEDGED_TIME_EXTENSION)
            .transition_to(FullDefence, FULL_DEFENCE_AFTER_ACKNOWLEDGE)
            .transition_to(FullAdmission, FULL_ADMISSION_AFTER_ACKNOWLEDGE)
            .transition_to(PartAdmission, PART_ADMISSION_AFTER_ACKNOWLEDGE)
            .transition_to(CounterClaim, COUNTER_CLAIM_AFTER_ACKNOWLEDGE)
            .transition_to(TakenOfflineByStaff, TAKEN_OFFLINE_BY_STAFF)
            .transition_to(ClaimDismissedPastClaimDismissedDeadline, PAST_CLAIM_DISMISSED_DEADLINE)
            .transition_to(ClaimWithdrawn, CLAIM_WITHDRAWN)
            .transition_to(ClaimDiscontinued, CLAIM_DISCONTINUED)
        .state(NotificationAcknowledgedTimeExtension)
            .transition_to(FullDefence, FULL_DEFENCE_AFTER_ACKNOWLEDGE)
            .transition_to(FullAdmission, FULL_ADMISSION_AFTER_ACKNOWLEDGE)
            .transition_to(PartAdmission, PART_ADMISSION_AFTER_ACKNOWLEDGE)
            .transition_to(CounterClaim, COUNTER_CLAIM_AFTER_ACKNOWLEDGE)
            .transition_to(TakenOfflineByStaff, TAKEN_OFFLINE_BY_STAFF)
            .transition_to(ClaimDismissedPastClaimDismissedDeadline, PAST_CLAIM_DISMISSED_DEADLINE)
            .transition_to(ClaimWithdrawn, CLAIM_WITHDRAWN)
            .transition_to(ClaimDiscontinued, CLAIM_DISCONTINUED)
        .state(FullDefence)
            .transition_to(FullDefenceProceed, FULL_DEFENCE_PROCEED)
            .transition_to(FullDefenceNotProceed, FULL_DEFENCE_NOT_PROCEED)
            .transition_to(TakenOfflineByStaff, TAKEN_OFFLINE_BY_STAFF)
            .transition_to(TakenOfflinePastApplicantResponseDeadline, TAKEN_OFFLINE_PAST_APPLICANT_RESPONSE_DEADLINE)
            .transition_to(ClaimWithdrawn, CLAIM_WITHDRAWN)
            .transition_to(ClaimDiscontinued, CLAIM_DISCONTINUED)
        .state(FullAdmission)
        .state(PartAdmission)
        .state(CounterClaim)
        .state(FullDefenceProceed)
        .state(FullDefenceNotProceed)
        .state(TakenOfflineUnrepresentedDefendant)
        .state(TakenOfflineUnregisteredDefendant)
        .state(TakenOfflineByStaff)
        .state(TakenOfflinePastApplicantResponseDeadline)
        .state(ClaimDismissedPastClaimNotificationDeadline)
        .state(ClaimDismissedPastClaimDetailsNotificationDeadline)
        .state(ClaimDismissedPastClaimDismissedDeadline)
        .state(ClaimWithdrawn)
        .state(ClaimDiscontinued)
        .build()
}
