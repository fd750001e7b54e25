//! Flow states and their fully-qualified names
//!
//! Every state belongs to exactly one flow. Outside the process a state is
//! known only by its fully-qualified name, `<FLOW>.<STATE>` (for example
//! `MAIN.CLAIM_ISSUED`), which is what workflow variables and serialized
//! results carry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::FlowError;

/// Name of a state flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowName {
    Main,
}

impl FlowName {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowName::Main => "MAIN",
        }
    }
}

impl fmt::Display for FlowName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowName {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MAIN" => Ok(FlowName::Main),
            other => Err(FlowError::invalid_input(format!("unknown flow '{other}'"))),
        }
    }
}

macro_rules! define_flow_states {
    ($flow:expr, $prefix:literal { $($variant:ident => $name:literal),+ $(,)? }) => {
        /// State of a claim within its flow
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FlowState {
            $($variant),+
        }

        impl FlowState {
            /// Every state, in declaration order
            pub const ALL: &'static [FlowState] = &[$(FlowState::$variant),+];

            /// State name without the flow prefix
            pub fn name(self) -> &'static str {
                match self {
                    $(FlowState::$variant => $name),+
                }
            }

            /// Fully-qualified name, `<FLOW>.<STATE>`
            pub fn full_name(self) -> &'static str {
                match self {
                    $(FlowState::$variant => concat!($prefix, ".", $name)),+
                }
            }

            /// Flow this state belongs to
            pub fn flow(self) -> FlowName {
                $flow
            }

            fn from_name(name: &str) -> Option<FlowState> {
                match name {
                    $($name => Some(FlowState::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

define_flow_states!(FlowName::Main, "MAIN" {
    Draft => "DRAFT",
    ClaimSubmitted => "CLAIM_SUBMITTED",
    ClaimIssuedPaymentSuccessful => "CLAIM_ISSUED_PAYMENT_SUCCESSFUL",
    ClaimIssuedPaymentFailed => "CLAIM_ISSUED_PAYMENT_FAILED",
    PendingClaimIssued => "PENDING_CLAIM_ISSUED",
    PendingClaimIssuedUnrepresentedDefendant => "PENDING_CLAIM_ISSUED_UNREPRESENTED_DEFENDANT",
    PendingClaimIssuedUnregisteredDefendant => "PENDING_CLAIM_ISSUED_UNREGISTERED_DEFENDANT",
    ClaimIssued => "CLAIM_ISSUED",
    TakenOfflineUnrepresentedDefendant => "TAKEN_OFFLINE_UNREPRESENTED_DEFENDANT",
    TakenOfflineUnregisteredDefendant => "TAKEN_OFFLINE_UNREGISTERED_DEFENDANT",
    ClaimNotified => "CLAIM_NOTIFIED",
    ClaimDetailsNotified => "CLAIM_DETAILS_NOTIFIED",
    ClaimDetailsNotifiedTimeExtension => "CLAIM_DETAILS_NOTIFIED_TIME_EXTENSION",
    NotificationAcknowledged => "NOTIFICATION_ACKNOWLEDGED",
    NotificationAcknowledgedTimeExtension => "NOTIFICATION_ACKNOWLEDGED_TIME_EXTENSION",
    FullDefence => "FULL_DEFENCE",
    FullAdmission => "FULL_ADMISSION",
    PartAdmission => "PART_ADMISSION",
    CounterClaim => "COUNTER_CLAIM",
    FullDefenceProceed => "FULL_DEFENCE_PROCEED",
    FullDefenceNotProceed => "FULL_DEFENCE_NOT_PROCEED",
    TakenOfflineByStaff => "TAKEN_OFFLINE_BY_STAFF",
    TakenOfflinePastApplicantResponseDeadline => "TAKEN_OFFLINE_PAST_APPLICANT_RESPONSE_DEADLINE",
    ClaimDismissedPastClaimNotificationDeadline => "CLAIM_DISMISSED_PAST_CLAIM_NOTIFICATION_DEADLINE",
    ClaimDismissedPastClaimDetailsNotificationDeadline => "CLAIM_DISMISSED_PAST_CLAIM_DETAILS_NOTIFICATION_DEADLINE",
    ClaimDismissedPastClaimDismissedDeadline => "CLAIM_DISMISSED_PAST_CLAIM_DISMISSED_DEADLINE",
    ClaimWithdrawn => "CLAIM_WITHDRAWN",
    ClaimDiscontinued => "CLAIM_DISCONTINUED",
});

impl FlowState {
    /// Parses a fully-qualified name such as `MAIN.CLAIM_ISSUED`
    pub fn from_full_name(full_name: &str) -> Result<Self, FlowError> {
        let (flow, name) = full_name.split_once('.').ok_or_else(|| {
            FlowError::invalid_input(format!("'{full_name}' is not a fully-qualified state name"))
        })?;
        let flow: FlowName = flow.parse()?;

        FlowState::from_name(name)
            .filter(|state| state.flow() == flow)
            .ok_or_else(|| {
                FlowError::invalid_input(format!("unknown state '{name}' in flow {flow}"))
            })
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

impl FromStr for FlowState {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowState::from_full_name(s)
    }
}

impl Serialize for FlowState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.full_name())
    }
}

impl<'de> Deserialize<'de> for FlowState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FlowState::from_full_name(&s).map_err(serde::de::Error::custom)
    }
}
