//! Evaluation report printed by the CLI

use serde::Serialize;

use core_kernel::CaseReference;
use domain_claims::{CaseData, CaseDataPort, FlowState};
use domain_robotics::{EventHistory, EventHistoryMapper};

use crate::error::CliError;

/// Flow state, state history and robotics events of one case
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowReport {
    pub flow_state: FlowState,
    pub history: Vec<FlowState>,
    pub event_history: EventHistory,
}

impl FlowReport {
    /// Evaluates a snapshot once and projects its events from that walk
    pub fn build(mapper: &EventHistoryMapper<'_>, case_data: &CaseData) -> Result<Self, CliError> {
        let result = mapper.engine().evaluate(case_data)?;
        let event_history = mapper.project(case_data, &result)?;

        Ok(Self {
            flow_state: result.current_state(),
            history: result.history().to_vec(),
            event_history,
        })
    }

    /// Loads a case through a port and reports on it
    pub async fn load<P: CaseDataPort>(
        cases: &P,
        mapper: &EventHistoryMapper<'_>,
        reference: CaseReference,
    ) -> Result<Self, CliError> {
        let case_data = cases.load(reference).await?;
        Self::build(mapper, &case_data)
    }
}
