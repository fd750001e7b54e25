//! Robotics domain errors

use thiserror::Error;

use domain_claims::{FlowError, FlowState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoboticsError {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("Case reached {state} but {field} is missing")]
    MissingField {
        state: FlowState,
        field: &'static str,
    },

    #[error("Unknown event code {0}")]
    UnknownEventCode(String),
}

impl RoboticsError {
    pub fn missing(state: FlowState, field: &'static str) -> Self {
        RoboticsError::MissingField { state, field }
    }
}
