//! Flow state service
//!
//! Application-facing entry point: loads a case through its port,
//! evaluates it and shapes the outcome for the workflow engine, which
//! branches on a single `flowState` variable.

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, instrument};

use core_kernel::CaseReference;

use crate::case_data::CaseData;
use crate::engine::{StateFlowEngine, StateFlowResult};
use crate::error::ClaimError;
use crate::flow_state::FlowState;
use crate::ports::CaseDataPort;

/// Name of the workflow variable carrying the current state
pub const FLOW_STATE_VARIABLE: &str = "flowState";

pub struct FlowStateService<P: CaseDataPort> {
    cases: Arc<P>,
    engine: StateFlowEngine<'static>,
}

impl<P: CaseDataPort> FlowStateService<P> {
    pub fn new(cases: Arc<P>, engine: StateFlowEngine<'static>) -> Self {
        Self { cases, engine }
    }

    pub fn engine(&self) -> &StateFlowEngine<'static> {
        &self.engine
    }

    /// Loads and evaluates a case
    #[instrument(skip(self), fields(case_reference = %reference))]
    pub async fn flow_state(
        &self,
        reference: CaseReference,
    ) -> Result<StateFlowResult, ClaimError> {
        let case_data = self.cases.load(reference).await?;
        let result = self.engine.evaluate(&case_data)?;
        info!(state = %result.current_state(), "Resolved flow state");
        Ok(result)
    }

    /// Whether a stored case has ever reached `state`
    #[instrument(skip(self), fields(case_reference = %reference, state = %state))]
    pub async fn has_transitioned_to(
        &self,
        reference: CaseReference,
        state: FlowState,
    ) -> Result<bool, ClaimError> {
        let case_data = self.cases.load(reference).await?;
        Ok(self.engine.has_transitioned_to(&case_data, state)?)
    }

    /// Variables to hand to the workflow engine for this snapshot
    pub fn workflow_variables(
        &self,
        case_data: &CaseData,
    ) -> Result<Map<String, Value>, ClaimError> {
        let result = self.engine.evaluate(case_data)?;
        let mut variables = Map::new();
        variables.insert(
            FLOW_STATE_VARIABLE.to_string(),
            Value::String(result.current_state().full_name().to_string()),
        );
        Ok(variables)
    }
}
