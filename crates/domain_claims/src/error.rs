//! Claims domain errors

use thiserror::Error;

use core_kernel::PortError;

use crate::flow_state::{FlowName, FlowState};

/// Defects in a flow definition
///
/// These are programming errors: the graph is fixed at build time, so any
/// of them means the declared flow is wrong, not the case data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("State {0} declared more than once")]
    DuplicateState(FlowState),

    #[error("Transition from {source_state} targets undeclared state {target}")]
    UndeclaredTarget {
        source_state: FlowState,
        target: FlowState,
    },

    #[error("Flow {0} has no initial state")]
    MissingInitialState(FlowName),

    #[error("Flow has more than one initial state: {first} and {second}")]
    MultipleInitialStates { first: FlowState, second: FlowState },

    #[error("Transition to {target} declared before any state")]
    TransitionWithoutState { target: FlowState },

    #[error("State {state} does not belong to flow {flow}")]
    ForeignState { state: FlowState, flow: FlowName },

    #[error("State {0} visited twice in one evaluation")]
    StateRevisited(FlowState),
}

/// Errors raised while evaluating a case against a flow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Flow configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FlowError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        FlowError::InvalidInput(message.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, FlowError::Configuration(_))
    }
}

/// Errors surfaced by claim services
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error("Case data unavailable: {0}")]
    Port(#[from] PortError),
}
