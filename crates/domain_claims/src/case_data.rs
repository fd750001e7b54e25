//! Case data snapshot
//!
//! The persisted field values of a claim as held by case management. A
//! snapshot is read-only: the flow engine and the event-history mapper
//! derive everything they need from it and never write back.
//!
//! Field names follow the case-management JSON (camelCase). Every field is
//! optional and unknown fields are ignored, so partially completed cases
//! deserialize without ceremony.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use core_kernel::{CaseReference, LegacyCaseReference};

/// Workflow status persisted by case management
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseState {
    PendingCaseIssued,
    CaseIssued,
    AwaitingCaseDetailsNotification,
    AwaitingRespondentAcknowledgement,
    AwaitingApplicantIntention,
    ProceedsInHeritageSystem,
    CaseDismissed,
}

/// Yes/No answer as captured on case-management forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesOrNo {
    Yes,
    No,
}

impl YesOrNo {
    pub fn is_yes(self) -> bool {
        self == YesOrNo::Yes
    }
}

impl From<bool> for YesOrNo {
    fn from(value: bool) -> Self {
        if value {
            YesOrNo::Yes
        } else {
            YesOrNo::No
        }
    }
}

/// Outcome of the issue-fee payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub status: Option<PaymentStatus>,
    pub reference: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}

/// How the first respondent answered the claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RespondentResponseType {
    FullDefence,
    FullAdmission,
    PartAdmission,
    CounterClaim,
}

/// Intention stated by the respondent when acknowledging service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseIntention {
    FullDefence,
    PartDefence,
    ContestJurisdiction,
}

impl ResponseIntention {
    /// Human readable label used in event details
    pub fn label(self) -> &'static str {
        match self {
            ResponseIntention::FullDefence => "Defend all of the claim",
            ResponseIntention::PartDefence => "Defend part of the claim",
            ResponseIntention::ContestJurisdiction => "Contest jurisdiction",
        }
    }
}

/// Withdrawal or discontinuance marker
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseClaim {
    pub date: Option<NaiveDate>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDirectionsQuestionnaire {
    pub one_month_stay_requested: Option<YesOrNo>,
    pub explained_to_client: Option<Vec<String>>,
    pub reaction_protocol_complied_with: Option<YesOrNo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedCourt {
    pub request_hearing_at_specific_court: Option<YesOrNo>,
    pub response_court_code: Option<String>,
    pub reason_for_hearing_at_specific_court: Option<String>,
}

/// Directions questionnaire filed by a party
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsQuestionnaire {
    #[serde(alias = "fileDirectionQuestionnaire")]
    pub file_directions_questionnaire: Option<FileDirectionsQuestionnaire>,
    pub requested_court: Option<RequestedCourt>,
}

impl DirectionsQuestionnaire {
    /// Court code the party asked for, if any
    pub fn preferred_court_code(&self) -> Option<&str> {
        self.requested_court
            .as_ref()
            .and_then(|court| court.response_court_code.as_deref())
    }

    /// Whether a one month stay was requested; unanswered counts as no
    pub fn stay_requested(&self) -> bool {
        self.file_directions_questionnaire
            .as_ref()
            .and_then(|fdq| fdq.one_month_stay_requested)
            .is_some_and(YesOrNo::is_yes)
    }
}

/// Read-only snapshot of a claim
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseData {
    // Identity
    pub ccd_case_reference: Option<CaseReference>,
    pub legacy_case_reference: Option<LegacyCaseReference>,
    pub ccd_state: Option<CaseState>,

    // Lifecycle timestamps, court-local
    pub submitted_date: Option<NaiveDateTime>,
    pub payment_successful_date: Option<NaiveDateTime>,
    pub claim_notification_deadline: Option<NaiveDateTime>,
    pub claim_notification_date: Option<NaiveDateTime>,
    pub claim_details_notification_deadline: Option<NaiveDateTime>,
    pub claim_details_notification_date: Option<NaiveDateTime>,
    pub respondent1_response_deadline: Option<NaiveDateTime>,
    pub claim_dismissed_deadline: Option<NaiveDateTime>,
    pub respondent1_time_extension_date: Option<NaiveDateTime>,
    pub respondent1_acknowledge_notification_date: Option<NaiveDateTime>,
    pub respondent1_response_date: Option<NaiveDateTime>,
    pub applicant1_response_deadline: Option<NaiveDateTime>,
    pub applicant1_response_date: Option<NaiveDateTime>,
    pub taken_offline_date: Option<NaiveDateTime>,
    pub taken_offline_by_staff_date: Option<NaiveDateTime>,
    pub claim_dismissed_date: Option<NaiveDateTime>,

    // Calendar dates
    pub issue_date: Option<NaiveDate>,
    pub respondent_solicitor1_agreed_deadline_extension: Option<NaiveDate>,

    pub payment_details: Option<PaymentDetails>,

    pub respondent1_represented: Option<YesOrNo>,
    pub respondent1_org_registered: Option<YesOrNo>,
    pub applicant1_proceed_with_claim: Option<YesOrNo>,

    pub respondent1_claim_response_type: Option<RespondentResponseType>,
    pub respondent1_claim_response_intention_type: Option<ResponseIntention>,

    pub withdraw_claim: Option<CloseClaim>,
    pub discontinue_claim: Option<CloseClaim>,

    #[serde(rename = "respondent1DQ")]
    pub respondent1_dq: Option<DirectionsQuestionnaire>,
    #[serde(rename = "applicant1DQ")]
    pub applicant1_dq: Option<DirectionsQuestionnaire>,
}

impl CaseData {
    /// Parses a snapshot from case-management JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn payment_status(&self) -> Option<PaymentStatus> {
        self.payment_details.as_ref().and_then(|details| details.status)
    }

    pub fn is_dismissed(&self) -> bool {
        self.ccd_state == Some(CaseState::CaseDismissed)
    }
}
