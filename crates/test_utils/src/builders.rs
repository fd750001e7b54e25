//! Test Data Builders
//!
//! [`CaseDataBuilder`] assembles snapshots the way a case accumulates data
//! in real life: each `at_state_*` step calls the step before it and adds
//! the fields that move the case on. Deadlines are set in the future
//! relative to [`TemporalFixtures::now`] unless a scenario needs them past.

use chrono::{NaiveDate, NaiveDateTime};

use core_kernel::CaseReference;
use domain_claims::{
    CaseData, CaseState, CloseClaim, DirectionsQuestionnaire, FlowState, PaymentDetails,
    RespondentResponseType, ResponseIntention, YesOrNo,
};

use crate::fixtures::{DqFixtures, PaymentFixtures, ReferenceFixtures, TemporalFixtures};

/// Builder for case data snapshots
#[derive(Debug, Clone, Default)]
pub struct CaseDataBuilder {
    case_data: CaseData,
}

impl CaseDataBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts the case at the given flow state
    pub fn at_state(self, state: FlowState) -> Self {
        match state {
            FlowState::Draft => self.at_state_claim_draft(),
            FlowState::ClaimSubmitted => self.at_state_claim_submitted(),
            FlowState::ClaimIssuedPaymentSuccessful => self.at_state_payment_successful(),
            FlowState::ClaimIssuedPaymentFailed => self.at_state_payment_failed(),
            FlowState::PendingClaimIssued => self.at_state_pending_claim_issued(),
            FlowState::PendingClaimIssuedUnrepresentedDefendant => {
                self.at_state_pending_claim_issued_unrepresented_defendant()
            }
            FlowState::PendingClaimIssuedUnregisteredDefendant => {
                self.at_state_pending_claim_issued_unregistered_defendant()
            }
            FlowState::ClaimIssued => self.at_state_claim_issued(),
            FlowState::TakenOfflineUnrepresentedDefendant => {
                self.at_state_taken_offline_unrepresented_defendant()
            }
            FlowState::TakenOfflineUnregisteredDefendant => {
                self.at_state_taken_offline_unregistered_defendant()
            }
            FlowState::ClaimNotified => self.at_state_claim_notified(),
            FlowState::ClaimDetailsNotified => self.at_state_claim_details_notified(),
            FlowState::ClaimDetailsNotifiedTimeExtension => {
                self.at_state_claim_details_notified_time_extension()
            }
            FlowState::NotificationAcknowledged => self.at_state_notification_acknowledged(),
            FlowState::NotificationAcknowledgedTimeExtension => {
                self.at_state_notification_acknowledged_time_extension()
            }
            FlowState::FullDefence => self.at_state_full_defence(),
            FlowState::FullAdmission => self.at_state_full_admission(),
            FlowState::PartAdmission => self.at_state_part_admission(),
            FlowState::CounterClaim => self.at_state_counter_claim(),
            FlowState::FullDefenceProceed => self.at_state_full_defence_proceed(),
            FlowState::FullDefenceNotProceed => self.at_state_full_defence_not_proceed(),
            FlowState::TakenOfflineByStaff => self.at_state_taken_offline_by_staff(),
            FlowState::TakenOfflinePastApplicantResponseDeadline => {
                self.at_state_taken_offline_past_applicant_response_deadline()
            }
            FlowState::ClaimDismissedPastClaimNotificationDeadline => {
                self.at_state_claim_dismissed_past_claim_notification_deadline()
            }
            FlowState::ClaimDismissedPastClaimDetailsNotificationDeadline => {
                self.at_state_claim_dismissed_past_claim_details_notification_deadline()
            }
            FlowState::ClaimDismissedPastClaimDismissedDeadline => {
                self.at_state_claim_dismissed_past_claim_dismissed_deadline()
            }
            FlowState::ClaimWithdrawn => self.at_state_claim_issued().withdraw_claim(),
            FlowState::ClaimDiscontinued => self.at_state_claim_issued().discontinue_claim(),
        }
    }

    pub fn at_state_claim_draft(mut self) -> Self {
        self.case_data.respondent1_represented = Some(YesOrNo::Yes);
        self.case_data.respondent1_org_registered = Some(YesOrNo::Yes);
        self
    }

    pub fn at_state_claim_submitted(self) -> Self {
        let mut builder = self.at_state_claim_draft();
        let c = &mut builder.case_data;
        c.ccd_case_reference = Some(ReferenceFixtures::case_reference());
        c.legacy_case_reference = Some(ReferenceFixtures::legacy_reference());
        c.ccd_state = Some(CaseState::PendingCaseIssued);
        c.submitted_date = Some(TemporalFixtures::days_before(30));
        builder
    }

    pub fn at_state_payment_failed(self) -> Self {
        let mut builder = self.at_state_claim_submitted();
        builder.case_data.payment_details = Some(PaymentFixtures::failed());
        builder
    }

    pub fn at_state_payment_successful(self) -> Self {
        let mut builder = self.at_state_claim_submitted();
        builder.case_data.payment_details = Some(PaymentFixtures::successful());
        builder.case_data.payment_successful_date = Some(TemporalFixtures::days_before(29));
        builder
    }

    pub fn at_state_pending_claim_issued(self) -> Self {
        let mut builder = self.at_state_payment_successful();
        builder.case_data.issue_date = Some(TemporalFixtures::issue_date());
        builder.case_data.ccd_state = Some(CaseState::PendingCaseIssued);
        builder
    }

    pub fn at_state_pending_claim_issued_unrepresented_defendant(self) -> Self {
        let mut builder = self.at_state_payment_successful();
        builder.case_data.issue_date = Some(TemporalFixtures::issue_date());
        builder.case_data.respondent1_represented = Some(YesOrNo::No);
        builder
    }

    pub fn at_state_pending_claim_issued_unregistered_defendant(self) -> Self {
        let mut builder = self.at_state_payment_successful();
        builder.case_data.issue_date = Some(TemporalFixtures::issue_date());
        builder.case_data.respondent1_represented = Some(YesOrNo::Yes);
        builder.case_data.respondent1_org_registered = Some(YesOrNo::No);
        builder
    }

    pub fn at_state_taken_offline_unrepresented_defendant(self) -> Self {
        let mut builder = self.at_state_pending_claim_issued_unrepresented_defendant();
        builder.case_data.ccd_state = Some(CaseState::ProceedsInHeritageSystem);
        builder.case_data.taken_offline_date = Some(TemporalFixtures::days_before(27));
        builder
    }

    pub fn at_state_taken_offline_unregistered_defendant(self) -> Self {
        let mut builder = self.at_state_pending_claim_issued_unregistered_defendant();
        builder.case_data.ccd_state = Some(CaseState::ProceedsInHeritageSystem);
        builder.case_data.taken_offline_date = Some(TemporalFixtures::days_before(27));
        builder
    }

    pub fn at_state_claim_issued(self) -> Self {
        let mut builder = self.at_state_pending_claim_issued();
        builder.case_data.claim_notification_deadline = Some(TemporalFixtures::days_after(90));
        builder.case_data.ccd_state = Some(CaseState::CaseIssued);
        builder
    }

    pub fn at_state_claim_notified(self) -> Self {
        let mut builder = self.at_state_claim_issued();
        let c = &mut builder.case_data;
        c.ccd_state = Some(CaseState::AwaitingCaseDetailsNotification);
        c.claim_notification_date = Some(TemporalFixtures::days_before(20));
        c.claim_details_notification_deadline = Some(TemporalFixtures::days_after(14));
        builder
    }

    pub fn at_state_claim_details_notified(self) -> Self {
        let mut builder = self.at_state_claim_notified();
        let c = &mut builder.case_data;
        c.ccd_state = Some(CaseState::AwaitingRespondentAcknowledgement);
        c.claim_details_notification_date = Some(TemporalFixtures::days_before(15));
        c.respondent1_response_deadline = Some(TemporalFixtures::days_after(14));
        c.claim_dismissed_deadline = Some(TemporalFixtures::days_after(180));
        builder
    }

    pub fn at_state_claim_details_notified_time_extension(self) -> Self {
        let mut builder = self.at_state_claim_details_notified();
        let c = &mut builder.case_data;
        c.respondent1_time_extension_date = Some(TemporalFixtures::days_before(10));
        c.respondent_solicitor1_agreed_deadline_extension =
            Some(TemporalFixtures::agreed_extension_date());
        c.respondent1_response_deadline = Some(TemporalFixtures::days_after(28));
        builder
    }

    pub fn at_state_notification_acknowledged(self) -> Self {
        let mut builder = self.at_state_claim_details_notified();
        let c = &mut builder.case_data;
        c.respondent1_claim_response_intention_type = Some(ResponseIntention::FullDefence);
        c.respondent1_acknowledge_notification_date = Some(TemporalFixtures::days_before(12));
        c.respondent1_response_deadline = Some(TemporalFixtures::days_after(14));
        builder
    }

    pub fn at_state_notification_acknowledged_time_extension(self) -> Self {
        let mut builder = self.at_state_notification_acknowledged();
        let c = &mut builder.case_data;
        c.respondent1_time_extension_date = Some(TemporalFixtures::days_before(10));
        c.respondent_solicitor1_agreed_deadline_extension =
            Some(TemporalFixtures::agreed_extension_date());
        c.respondent1_response_deadline = Some(TemporalFixtures::days_after(28));
        builder
    }

    /// Respondent has answered the claim after acknowledging it
    pub fn at_state_respondent_responded(self, response: RespondentResponseType) -> Self {
        let mut builder = self.at_state_notification_acknowledged();
        let c = &mut builder.case_data;
        c.respondent1_claim_response_type = Some(response);
        c.applicant1_response_deadline = Some(TemporalFixtures::days_after(28));
        c.respondent1_response_date = Some(TemporalFixtures::days_before(5));
        c.ccd_state = Some(CaseState::AwaitingApplicantIntention);
        builder
    }

    pub fn at_state_full_defence(self) -> Self {
        let mut builder = self.at_state_respondent_responded(RespondentResponseType::FullDefence);
        builder.case_data.respondent1_dq = Some(DqFixtures::respondent_dq());
        builder
    }

    pub fn at_state_full_admission(self) -> Self {
        self.at_state_respondent_responded(RespondentResponseType::FullAdmission)
            .taken_offline_now()
    }

    pub fn at_state_part_admission(self) -> Self {
        self.at_state_respondent_responded(RespondentResponseType::PartAdmission)
            .taken_offline_now()
    }

    pub fn at_state_counter_claim(self) -> Self {
        self.at_state_respondent_responded(RespondentResponseType::CounterClaim)
            .taken_offline_now()
    }

    pub fn at_state_full_defence_proceed(self) -> Self {
        let mut builder = self.at_state_full_defence();
        let c = &mut builder.case_data;
        c.applicant1_proceed_with_claim = Some(YesOrNo::Yes);
        c.applicant1_dq = Some(DqFixtures::applicant_dq());
        c.applicant1_response_date = Some(TemporalFixtures::days_before(1));
        builder
    }

    pub fn at_state_full_defence_not_proceed(self) -> Self {
        let mut builder = self.at_state_full_defence();
        builder.case_data.applicant1_proceed_with_claim = Some(YesOrNo::No);
        builder.case_data.applicant1_response_date = Some(TemporalFixtures::days_before(1));
        builder
    }

    pub fn at_state_taken_offline_by_staff(self) -> Self {
        let mut builder = self.at_state_claim_notified();
        builder.case_data.taken_offline_by_staff_date = Some(TemporalFixtures::now());
        builder
    }

    pub fn at_state_taken_offline_past_applicant_response_deadline(self) -> Self {
        let mut builder = self.at_state_full_defence();
        builder.case_data.applicant1_response_deadline = Some(TemporalFixtures::days_before(1));
        builder.taken_offline_now()
    }

    pub fn at_state_claim_dismissed_past_claim_notification_deadline(self) -> Self {
        let mut builder = self.at_state_claim_issued();
        builder.case_data.claim_notification_deadline = Some(TemporalFixtures::days_before(1));
        builder.dismissed_now()
    }

    pub fn at_state_claim_dismissed_past_claim_details_notification_deadline(self) -> Self {
        let mut builder = self.at_state_claim_notified();
        builder.case_data.claim_details_notification_deadline =
            Some(TemporalFixtures::days_before(5));
        builder.dismissed_now()
    }

    pub fn at_state_claim_dismissed_past_claim_dismissed_deadline(self) -> Self {
        let mut builder = self.at_state_notification_acknowledged();
        builder.case_data.claim_dismissed_deadline = Some(TemporalFixtures::days_before(1));
        builder.dismissed_now()
    }

    /// Marks the claim withdrawn, leaving everything else as it is
    pub fn withdraw_claim(mut self) -> Self {
        self.case_data.ccd_state = Some(CaseState::CaseDismissed);
        self.case_data.withdraw_claim = Some(Self::close_claim());
        self
    }

    /// Marks the claim discontinued, leaving everything else as it is
    pub fn discontinue_claim(mut self) -> Self {
        self.case_data.ccd_state = Some(CaseState::CaseDismissed);
        self.case_data.discontinue_claim = Some(Self::close_claim());
        self
    }

    /// Puts the case at `state`, then withdraws it
    pub fn withdraw_claim_from(self, state: FlowState) -> Self {
        self.at_state(state).withdraw_claim()
    }

    /// Puts the case at `state`, then discontinues and dismisses it
    pub fn discontinue_claim_from(self, state: FlowState) -> Self {
        let mut builder = self.at_state(state).discontinue_claim();
        builder.case_data.claim_dismissed_date = Some(TemporalFixtures::now());
        builder
    }

    pub fn with_case_reference(mut self, reference: CaseReference) -> Self {
        self.case_data.ccd_case_reference = Some(reference);
        self
    }

    pub fn with_ccd_state(mut self, state: CaseState) -> Self {
        self.case_data.ccd_state = Some(state);
        self
    }

    pub fn with_payment_details(mut self, details: PaymentDetails) -> Self {
        self.case_data.payment_details = Some(details);
        self
    }

    pub fn with_payment_successful_date(mut self, date: NaiveDateTime) -> Self {
        self.case_data.payment_successful_date = Some(date);
        self
    }

    pub fn with_claim_notification_deadline(mut self, deadline: NaiveDateTime) -> Self {
        self.case_data.claim_notification_deadline = Some(deadline);
        self
    }

    pub fn with_claim_dismissed_deadline(mut self, deadline: NaiveDateTime) -> Self {
        self.case_data.claim_dismissed_deadline = Some(deadline);
        self
    }

    pub fn with_claim_dismissed_date(mut self, date: NaiveDateTime) -> Self {
        self.case_data.claim_dismissed_date = Some(date);
        self
    }

    pub fn with_agreed_extension(mut self, date: NaiveDate) -> Self {
        self.case_data.respondent_solicitor1_agreed_deadline_extension = Some(date);
        self
    }

    pub fn with_response_intention(mut self, intention: ResponseIntention) -> Self {
        self.case_data.respondent1_claim_response_intention_type = Some(intention);
        self
    }

    pub fn with_respondent1_dq(mut self, dq: Option<DirectionsQuestionnaire>) -> Self {
        self.case_data.respondent1_dq = dq;
        self
    }

    pub fn with_applicant1_dq(mut self, dq: Option<DirectionsQuestionnaire>) -> Self {
        self.case_data.applicant1_dq = dq;
        self
    }

    /// Applies an arbitrary edit for fields without a dedicated setter
    pub fn with(mut self, edit: impl FnOnce(&mut CaseData)) -> Self {
        edit(&mut self.case_data);
        self
    }

    pub fn build(self) -> CaseData {
        self.case_data
    }

    fn taken_offline_now(mut self) -> Self {
        self.case_data.taken_offline_date = Some(TemporalFixtures::now());
        self
    }

    fn dismissed_now(mut self) -> Self {
        self.case_data.ccd_state = Some(CaseState::CaseDismissed);
        self.case_data.claim_dismissed_date = Some(TemporalFixtures::now());
        self
    }

    fn close_claim() -> CloseClaim {
        CloseClaim {
            date: Some(TemporalFixtures::now().date()),
            reason: Some("My reason".to_string()),
        }
    }
}
