//! Named flow predicates
//!
//! Guards for the state flow. Each predicate is a pure, total function of
//! the case snapshot and the evaluation instant: a missing field makes the
//! predicate false, never an error. Predicates have no view of the walk
//! that is using them.
//!
//! Pairs that split on the acknowledgement date (`*_after_notify_details`
//! against `*_after_acknowledge`) and on the proceed flag
//! (`full_defence_proceed` against `full_defence_not_proceed`) can never
//! both hold for the same snapshot.

use chrono::NaiveDateTime;
use std::fmt;

use crate::case_data::{CaseData, CaseState, PaymentStatus, RespondentResponseType, YesOrNo};

/// Inputs visible to a predicate
#[derive(Debug, Clone, Copy)]
pub struct FlowContext<'a> {
    pub case_data: &'a CaseData,
    pub now: NaiveDateTime,
}

impl<'a> FlowContext<'a> {
    pub fn new(case_data: &'a CaseData, now: NaiveDateTime) -> Self {
        Self { case_data, now }
    }

    fn is_past(&self, deadline: Option<NaiveDateTime>) -> bool {
        deadline.is_some_and(|deadline| deadline < self.now)
    }
}

/// A named guard
#[derive(Clone, Copy)]
pub struct FlowPredicate {
    name: &'static str,
    check: fn(&FlowContext<'_>) -> bool,
}

impl FlowPredicate {
    pub const fn new(name: &'static str, check: fn(&FlowContext<'_>) -> bool) -> Self {
        Self { name, check }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn test(&self, ctx: &FlowContext<'_>) -> bool {
        (self.check)(ctx)
    }
}

impl fmt::Debug for FlowPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FlowPredicate").field(&self.name).finish()
    }
}

impl PartialEq for FlowPredicate {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FlowPredicate {}

fn is(flag: Option<YesOrNo>, expected: YesOrNo) -> bool {
    flag == Some(expected)
}

fn responded_with(case_data: &CaseData, response: RespondentResponseType) -> bool {
    case_data.respondent1_response_date.is_some()
        && case_data.respondent1_claim_response_type == Some(response)
}

fn acknowledged(case_data: &CaseData) -> bool {
    case_data.respondent1_acknowledge_notification_date.is_some()
}

// Submission and payment

pub const CLAIM_SUBMITTED: FlowPredicate =
    FlowPredicate::new("claimSubmitted", |ctx| ctx.case_data.submitted_date.is_some());

pub const PAYMENT_SUCCESSFUL: FlowPredicate = FlowPredicate::new("paymentSuccessful", |ctx| {
    ctx.case_data.payment_successful_date.is_some()
});

pub const PAYMENT_FAILED: FlowPredicate = FlowPredicate::new("paymentFailed", |ctx| {
    ctx.case_data.payment_status() == Some(PaymentStatus::Failed)
});

// Issue

pub const PENDING_CLAIM_ISSUED: FlowPredicate = FlowPredicate::new("pendingClaimIssued", |ctx| {
    let c = ctx.case_data;
    c.issue_date.is_some()
        && is(c.respondent1_represented, YesOrNo::Yes)
        && is(c.respondent1_org_registered, YesOrNo::Yes)
});

pub const RESPONDENT_NOT_REPRESENTED: FlowPredicate =
    FlowPredicate::new("respondentNotRepresented", |ctx| {
        let c = ctx.case_data;
        c.issue_date.is_some() && is(c.respondent1_represented, YesOrNo::No)
    });

pub const RESPONDENT_ORG_NOT_REGISTERED: FlowPredicate =
    FlowPredicate::new("respondentOrgNotRegistered", |ctx| {
        let c = ctx.case_data;
        c.issue_date.is_some()
            && is(c.respondent1_represented, YesOrNo::Yes)
            && is(c.respondent1_org_registered, YesOrNo::No)
    });

pub const TAKEN_OFFLINE_NOT_REPRESENTED: FlowPredicate =
    FlowPredicate::new("takenOfflineNotRepresented", |ctx| {
        let c = ctx.case_data;
        is(c.respondent1_represented, YesOrNo::No) && c.taken_offline_date.is_some()
    });

pub const TAKEN_OFFLINE_NOT_REGISTERED: FlowPredicate =
    FlowPredicate::new("takenOfflineNotRegistered", |ctx| {
        let c = ctx.case_data;
        is(c.respondent1_org_registered, YesOrNo::No) && c.taken_offline_date.is_some()
    });

pub const CLAIM_ISSUED: FlowPredicate = FlowPredicate::new("claimIssued", |ctx| {
    ctx.case_data.claim_notification_deadline.is_some()
});

// Notification

pub const CLAIM_NOTIFIED: FlowPredicate =
    FlowPredicate::new("claimNotified", |ctx| ctx.case_data.claim_notification_date.is_some());

pub const CLAIM_DETAILS_NOTIFIED: FlowPredicate = FlowPredicate::new("claimDetailsNotified", |ctx| {
    ctx.case_data.claim_details_notification_date.is_some()
});

pub const CLAIM_DETAILS_NOTIFIED_TIME_EXTENSION: FlowPredicate =
    FlowPredicate::new("claimDetailsNotifiedTimeExtension", |ctx| {
        ctx.case_data.respondent1_time_extension_date.is_some() && !acknowledged(ctx.case_data)
    });

pub const NOTIFICATION_ACKNOWLEDGED: FlowPredicate =
    FlowPredicate::new("notificationAcknowledged", |ctx| acknowledged(ctx.case_data));

pub const NOTIFICATION_ACKNOWLEDGED_TIME_EXTENSION: FlowPredicate =
    FlowPredicate::new("notificationAcknowledgedTimeExtension", |ctx| {
        acknowledged(ctx.case_data) && ctx.case_data.respondent1_time_extension_date.is_some()
    });

// Respondent response

pub const FULL_DEFENCE: FlowPredicate = FlowPredicate::new("fullDefence", |ctx| {
    responded_with(ctx.case_data, RespondentResponseType::FullDefence)
});

pub const FULL_ADMISSION: FlowPredicate = FlowPredicate::new("fullAdmission", |ctx| {
    responded_with(ctx.case_data, RespondentResponseType::FullAdmission)
});

pub const PART_ADMISSION: FlowPredicate = FlowPredicate::new("partAdmission", |ctx| {
    responded_with(ctx.case_data, RespondentResponseType::PartAdmission)
});

pub const COUNTER_CLAIM: FlowPredicate = FlowPredicate::new("counterClaim", |ctx| {
    responded_with(ctx.case_data, RespondentResponseType::CounterClaim)
});

pub const FULL_DEFENCE_AFTER_NOTIFY_DETAILS: FlowPredicate =
    FlowPredicate::new("fullDefenceAfterNotifyDetails", |ctx| {
        FULL_DEFENCE.test(ctx) && !acknowledged(ctx.case_data)
    });

pub const FULL_ADMISSION_AFTER_NOTIFY_DETAILS: FlowPredicate =
    FlowPredicate::new("fullAdmissionAfterNotifyDetails", |ctx| {
        FULL_ADMISSION.test(ctx) && !acknowledged(ctx.case_data)
    });

pub const PART_ADMISSION_AFTER_NOTIFY_DETAILS: FlowPredicate =
    FlowPredicate::new("partAdmissionAfterNotifyDetails", |ctx| {
        PART_ADMISSION.test(ctx) && !acknowledged(ctx.case_data)
    });

pub const COUNTER_CLAIM_AFTER_NOTIFY_DETAILS: FlowPredicate =
    FlowPredicate::new("counterClaimAfterNotifyDetails", |ctx| {
        COUNTER_CLAIM.test(ctx) && !acknowledged(ctx.case_data)
    });

pub const FULL_DEFENCE_AFTER_ACKNOWLEDGE: FlowPredicate =
    FlowPredicate::new("fullDefenceAfterAcknowledge", |ctx| {
        FULL_DEFENCE.test(ctx) && acknowledged(ctx.case_data)
    });

pub const FULL_ADMISSION_AFTER_ACKNOWLEDGE: FlowPredicate =
    FlowPredicate::new("fullAdmissionAfterAcknowledge", |ctx| {
        FULL_ADMISSION.test(ctx) && acknowledged(ctx.case_data)
    });

pub const PART_ADMISSION_AFTER_ACKNOWLEDGE: FlowPredicate =
    FlowPredicate::new("partAdmissionAfterAcknowledge", |ctx| {
        PART_ADMISSION.test(ctx) && acknowledged(ctx.case_data)
    });

pub const COUNTER_CLAIM_AFTER_ACKNOWLEDGE: FlowPredicate =
    FlowPredicate::new("counterClaimAfterAcknowledge", |ctx| {
        COUNTER_CLAIM.test(ctx) && acknowledged(ctx.case_data)
    });

// Applicant response

pub const FULL_DEFENCE_PROCEED: FlowPredicate = FlowPredicate::new("fullDefenceProceed", |ctx| {
    let c = ctx.case_data;
    is(c.applicant1_proceed_with_claim, YesOrNo::Yes) && c.applicant1_response_date.is_some()
});

pub const FULL_DEFENCE_NOT_PROCEED: FlowPredicate =
    FlowPredicate::new("fullDefenceNotProceed", |ctx| {
        let c = ctx.case_data;
        is(c.applicant1_proceed_with_claim, YesOrNo::No) && c.applicant1_response_date.is_some()
    });

// Closure and offline

pub const TAKEN_OFFLINE_BY_STAFF: FlowPredicate = FlowPredicate::new("takenOfflineByStaff", |ctx| {
    ctx.case_data.taken_offline_by_staff_date.is_some()
});

pub const CLAIM_WITHDRAWN: FlowPredicate = FlowPredicate::new("claimWithdrawn", |ctx| {
    ctx.case_data.withdraw_claim.is_some() && ctx.case_data.is_dismissed()
});

pub const CLAIM_DISCONTINUED: FlowPredicate = FlowPredicate::new("claimDiscontinued", |ctx| {
    ctx.case_data.discontinue_claim.is_some() && ctx.case_data.is_dismissed()
});

pub const CLAIM_TAKEN_OFFLINE: FlowPredicate = FlowPredicate::new("claimTakenOffline", |ctx| {
    ctx.case_data.ccd_state == Some(CaseState::ProceedsInHeritageSystem)
});

pub const CASE_DISMISSED: FlowPredicate =
    FlowPredicate::new("caseDismissed", |ctx| ctx.case_data.claim_dismissed_date.is_some());

// Deadlines, compared against the evaluation instant

pub const PAST_CLAIM_NOTIFICATION_DEADLINE: FlowPredicate =
    FlowPredicate::new("pastClaimNotificationDeadline", |ctx| {
        let c = ctx.case_data;
        c.claim_dismissed_date.is_some()
            && ctx.is_past(c.claim_notification_deadline)
            && c.claim_notification_date.is_none()
    });

pub const PAST_CLAIM_DETAILS_NOTIFICATION_DEADLINE: FlowPredicate =
    FlowPredicate::new("pastClaimDetailsNotificationDeadline", |ctx| {
        let c = ctx.case_data;
        c.claim_dismissed_date.is_some()
            && ctx.is_past(c.claim_details_notification_deadline)
            && c.claim_details_notification_date.is_none()
            && c.claim_notification_date.is_some()
    });

pub const PAST_CLAIM_DISMISSED_DEADLINE: FlowPredicate =
    FlowPredicate::new("pastClaimDismissedDeadline", |ctx| {
        let c = ctx.case_data;
        c.claim_dismissed_date.is_some()
            && ctx.is_past(c.claim_dismissed_deadline)
            && c.respondent1_response_date.is_none()
    });

pub const TAKEN_OFFLINE_PAST_APPLICANT_RESPONSE_DEADLINE: FlowPredicate =
    FlowPredicate::new("takenOfflinePastApplicantResponseDeadline", |ctx| {
        let c = ctx.case_data;
        c.taken_offline_date.is_some()
            && ctx.is_past(c.applicant1_response_deadline)
            && c.applicant1_response_date.is_none()
    });

/// Every predicate in the library
pub const ALL: &[FlowPredicate] = &[
    CLAIM_SUBMITTED,
    PAYMENT_SUCCESSFUL,
    PAYMENT_FAILED,
    PENDING_CLAIM_ISSUED,
    RESPONDENT_NOT_REPRESENTED,
    RESPONDENT_ORG_NOT_REGISTERED,
    TAKEN_OFFLINE_NOT_REPRESENTED,
    TAKEN_OFFLINE_NOT_REGISTERED,
    CLAIM_ISSUED,
    CLAIM_NOTIFIED,
    CLAIM_DETAILS_NOTIFIED,
    CLAIM_DETAILS_NOTIFIED_TIME_EXTENSION,
    NOTIFICATION_ACKNOWLEDGED,
    NOTIFICATION_ACKNOWLEDGED_TIME_EXTENSION,
    FULL_DEFENCE,
    FULL_ADMISSION,
    PART_ADMISSION,
    COUNTER_CLAIM,
    FULL_DEFENCE_AFTER_NOTIFY_DETAILS,
    FULL_ADMISSION_AFTER_NOTIFY_DETAILS,
    PART_ADMISSION_AFTER_NOTIFY_DETAILS,
    COUNTER_CLAIM_AFTER_NOTIFY_DETAILS,
    FULL_DEFENCE_AFTER_ACKNOWLEDGE,
    FULL_ADMISSION_AFTER_ACKNOWLEDGE,
    PART_ADMISSION_AFTER_ACKNOWLEDGE,
    COUNTER_CLAIM_AFTER_ACKNOWLEDGE,
    FULL_DEFENCE_PROCEED,
    FULL_DEFENCE_NOT_PROCEED,
    TAKEN_OFFLINE_BY_STAFF,
    CLAIM_WITHDRAWN,
    CLAIM_DISCONTINUED,
    CLAIM_TAKEN_OFFLINE,
    CASE_DISMISSED,
    PAST_CLAIM_NOTIFICATION_DEADLINE,
    PAST_CLAIM_DETAILS_NOTIFICATION_DEADLINE,
    PAST_CLAIM_DISMISSED_DEADLINE,
    TAKEN_OFFLINE_PAST_APPLICANT_RESPONSE_DEADLINE,
];

/// Looks a predicate up by name
pub fn by_name(name: &str) -> Option<FlowPredicate> {
    ALL.iter().copied().find(|predicate| predicate.name() == name)
}
