//! Claims Lifecycle Domain
//!
//! This crate derives where a civil claim is in its lifecycle purely from
//! the claim's persisted fields. Nothing here stores a "current state":
//! every answer is recomputed from a [`CaseData`] snapshot and a clock.
//!
//! # Main flow
//!
//! ```text
//! DRAFT -> CLAIM_SUBMITTED -> CLAIM_ISSUED_PAYMENT_SUCCESSFUL -> PENDING_CLAIM_ISSUED
//!       -> CLAIM_ISSUED -> CLAIM_NOTIFIED -> CLAIM_DETAILS_NOTIFIED
//!       -> NOTIFICATION_ACKNOWLEDGED -> FULL_DEFENCE -> FULL_DEFENCE_PROCEED
//! ```
//!
//! with branches for failed payment, unrepresented or unregistered
//! defendants, time extensions, admissions, counter claims, withdrawal,
//! discontinuance, dismissal and cases taken offline.

pub mod case_data;
pub mod flow_state;
pub mod predicates;
pub mod state_flow;
pub mod flows;
pub mod engine;
pub mod ports;
pub mod services;
pub mod error;

pub use case_data::{
    CaseData, CaseState, CloseClaim, DirectionsQuestionnaire, FileDirectionsQuestionnaire,
    PaymentDetails, PaymentStatus, RequestedCourt, RespondentResponseType, ResponseIntention,
    YesOrNo,
};
pub use flow_state::{FlowName, FlowState};
pub use predicates::{FlowContext, FlowPredicate};
pub use state_flow::{StateFlow, StateFlowBuilder, Transition};
pub use flows::main_flow;
pub use engine::{StateFlowEngine, StateFlowResult};
pub use ports::CaseDataPort;
pub use services::FlowStateService;
pub use error::{ClaimError, ConfigurationError, FlowError};
