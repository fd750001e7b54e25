//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for claims. Every timestamp is derived
//! from one fixed instant, [`TemporalFixtures::now`], so tests that pair it
//! with [`TemporalFixtures::clock`] are fully reproducible.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use std::sync::Arc;

use core_kernel::{CaseReference, Clock, FixedClock, LegacyCaseReference};
use domain_claims::{
    DirectionsQuestionnaire, FileDirectionsQuestionnaire, PaymentDetails, PaymentStatus,
    RequestedCourt, YesOrNo,
};

static FIXED_CLOCK: Lazy<Arc<FixedClock>> =
    Lazy::new(|| Arc::new(FixedClock::new(TemporalFixtures::now())));

/// Fixture for instants and clocks
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The instant every fixture is relative to
    pub fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .and_then(|date| date.and_hms_opt(10, 0, 0))
            .expect("valid fixture instant")
    }

    /// Clock frozen at [`now`](Self::now)
    pub fn clock() -> Arc<dyn Clock> {
        FIXED_CLOCK.clone()
    }

    /// Clock frozen at an arbitrary instant
    pub fn clock_at(now: NaiveDateTime) -> Arc<dyn Clock> {
        Arc::new(FixedClock::new(now))
    }

    pub fn days_before(days: i64) -> NaiveDateTime {
        Self::now() - Duration::days(days)
    }

    pub fn days_after(days: i64) -> NaiveDateTime {
        Self::now() + Duration::days(days)
    }

    /// Date the claim is issued by the court
    pub fn issue_date() -> NaiveDate {
        Self::days_before(28).date()
    }

    /// Deadline the parties agreed for the defence
    pub fn agreed_extension_date() -> NaiveDate {
        Self::days_after(28).date()
    }
}

/// Fixture for case identifiers
pub struct ReferenceFixtures;

impl ReferenceFixtures {
    pub fn case_reference() -> CaseReference {
        CaseReference::new(1594901956117591).expect("valid fixture reference")
    }

    pub fn other_case_reference() -> CaseReference {
        CaseReference::new(1234567890123456).expect("valid fixture reference")
    }

    pub fn legacy_reference() -> LegacyCaseReference {
        "000DC001".parse().expect("valid fixture legacy reference")
    }
}

/// Fixture for fee payments
pub struct PaymentFixtures;

impl PaymentFixtures {
    pub fn successful() -> PaymentDetails {
        PaymentDetails {
            status: Some(PaymentStatus::Success),
            reference: Some("RC-1604-0739-2145-4711".to_string()),
            ..Default::default()
        }
    }

    pub fn failed() -> PaymentDetails {
        PaymentDetails {
            status: Some(PaymentStatus::Failed),
            error_code: Some("CA-E0004".to_string()),
            error_message: Some("Your account is deleted".to_string()),
            ..Default::default()
        }
    }
}

/// Fixture for directions questionnaires
pub struct DqFixtures;

impl DqFixtures {
    /// Court code requested in [`respondent_dq`](Self::respondent_dq)
    pub const RESPONDENT_COURT: &'static str = "444";
    /// Court code requested in [`applicant_dq`](Self::applicant_dq)
    pub const APPLICANT_COURT: &'static str = "121";

    /// Respondent asks for a specific court, no stay
    pub fn respondent_dq() -> DirectionsQuestionnaire {
        Self::questionnaire(Some(Self::RESPONDENT_COURT), YesOrNo::No)
    }

    /// Applicant asks for a specific court and a one month stay
    pub fn applicant_dq() -> DirectionsQuestionnaire {
        Self::questionnaire(Some(Self::APPLICANT_COURT), YesOrNo::Yes)
    }

    pub fn questionnaire(court: Option<&str>, stay: YesOrNo) -> DirectionsQuestionnaire {
        DirectionsQuestionnaire {
            file_directions_questionnaire: Some(FileDirectionsQuestionnaire {
                one_month_stay_requested: Some(stay),
                explained_to_client: Some(vec!["CONFIRM".to_string()]),
                reaction_protocol_complied_with: Some(YesOrNo::Yes),
            }),
            requested_court: court.map(|code| RequestedCourt {
                request_hearing_at_specific_court: Some(YesOrNo::Yes),
                response_court_code: Some(code.to_string()),
                reason_for_hearing_at_specific_court: Some("Close to witnesses".to_string()),
            }),
        }
    }
}
