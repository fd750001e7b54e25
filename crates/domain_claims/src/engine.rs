//! State-flow evaluator
//!
//! Walks a [`StateFlow`] for a case snapshot. Starting from the initial
//! state, the evaluator scans the current state's transitions in priority
//! order and follows the first one whose guard holds; the walk stops at the
//! first state where no guard holds. The visited states, in order, are the
//! case's state history and the last of them is its current state.
//!
//! The clock is read once per evaluation so every guard sees the same
//! instant. Evaluating the same snapshot with the same clock always yields
//! the same result.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace};

use core_kernel::Clock;

use crate::case_data::CaseData;
use crate::error::{ConfigurationError, FlowError};
use crate::flow_state::FlowState;
use crate::flows::main_flow;
use crate::predicates::FlowContext;
use crate::state_flow::StateFlow;

/// Outcome of one evaluation: the ordered states a case passed through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SerializedResult", into = "SerializedResult")]
pub struct StateFlowResult {
    history: Vec<FlowState>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SerializedResult {
    current_state: FlowState,
    history: Vec<FlowState>,
}

impl StateFlowResult {
    fn new(history: Vec<FlowState>) -> Self {
        Self { history }
    }

    /// Last state reached
    pub fn current_state(&self) -> FlowState {
        // history always holds at least the initial state
        self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[FlowState] {
        &self.history
    }

    /// Fully-qualified names of the history, in order
    pub fn history_names(&self) -> Vec<&'static str> {
        self.history.iter().map(|state| state.full_name()).collect()
    }

    pub fn contains(&self, state: FlowState) -> bool {
        self.history.contains(&state)
    }
}

impl TryFrom<SerializedResult> for StateFlowResult {
    type Error = String;

    fn try_from(value: SerializedResult) -> Result<Self, Self::Error> {
        match value.history.last() {
            Some(last) if *last == value.current_state => Ok(Self::new(value.history)),
            Some(last) => Err(format!(
                "currentState {} does not match last history entry {last}",
                value.current_state
            )),
            None => Err("history must not be empty".to_string()),
        }
    }
}

impl From<StateFlowResult> for SerializedResult {
    fn from(result: StateFlowResult) -> Self {
        Self {
            current_state: result.current_state(),
            history: result.history,
        }
    }
}

/// Evaluates case snapshots against a state flow
#[derive(Clone)]
pub struct StateFlowEngine<'f> {
    flow: &'f StateFlow,
    clock: Arc<dyn Clock>,
}

impl StateFlowEngine<'static> {
    /// Engine over the shared MAIN flow
    pub fn main(clock: Arc<dyn Clock>) -> Result<Self, FlowError> {
        Ok(Self::new(main_flow()?, clock))
    }
}

impl<'f> StateFlowEngine<'f> {
    pub fn new(flow: &'f StateFlow, clock: Arc<dyn Clock>) -> Self {
        Self { flow, clock }
    }

    pub fn flow(&self) -> &'f StateFlow {
        self.flow
    }

    /// Derives the state history of a case at the clock's current instant
    pub fn evaluate(&self, case_data: &CaseData) -> Result<StateFlowResult, FlowError> {
        self.evaluate_at(case_data, self.clock.now())
    }

    /// Derives the state history of a case at a given instant
    ///
    /// A walk never enters a state twice, so it ends within
    /// [`StateFlow::state_count`] steps; a transition back into a visited
    /// state is reported as [`ConfigurationError::StateRevisited`].
    pub fn evaluate_at(
        &self,
        case_data: &CaseData,
        now: NaiveDateTime,
    ) -> Result<StateFlowResult, FlowError> {
        let ctx = FlowContext::new(case_data, now);

        let mut current = self.flow.initial_state();
        let mut history = vec![current];
        let mut visited = HashSet::from([current]);

        while let Some(transition) = self
            .flow
            .transitions_from(current)
            .iter()
            .find(|transition| transition.guard().test(&ctx))
        {
            let target = transition.target();
            trace!(
                from = %current,
                to = %target,
                guard = transition.guard().name(),
                "Transition taken"
            );

            if !visited.insert(target) {
                return Err(ConfigurationError::StateRevisited(target).into());
            }
            history.push(target);
            current = target;
        }

        debug!(
            case_reference = ?case_data.ccd_case_reference,
            state = %current,
            steps = history.len(),
            "State flow evaluated"
        );
        Ok(StateFlowResult::new(history))
    }

    /// Whether the case's history passes through `state`
    pub fn has_transitioned_to(
        &self,
        case_data: &CaseData,
        state: FlowState,
    ) -> Result<bool, FlowError> {
        Ok(self.evaluate(case_data)?.contains(state))
    }

    /// As [`has_transitioned_to`](Self::has_transitioned_to), taking a fully-qualified name
    pub fn has_transitioned_to_name(
        &self,
        case_data: &CaseData,
        full_name: &str,
    ) -> Result<bool, FlowError> {
        let state = FlowState::from_full_name(full_name)?;
        self.has_transitioned_to(case_data, state)
    }
}

impl std::fmt::Debug for StateFlowEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateFlowEngine")
            .field("flow", &self.flow.name())
            .finish_non_exhaustive()
    }
}
