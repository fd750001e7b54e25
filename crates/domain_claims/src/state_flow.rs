//! State graph definition
//!
//! A [`StateFlow`] is an immutable directed graph of states with guarded
//! transitions. Transitions leaving a state are kept in declaration order,
//! and that order is their priority: the evaluator follows the first one
//! whose guard holds.
//!
//! Graphs are assembled with [`StateFlowBuilder`]:
//!
//! ```rust,ignore
//! let flow = StateFlowBuilder::flow(FlowName::Main)
//!     .initial(FlowState::Draft)
//!         .transition_to(FlowState::ClaimSubmitted, predicates::CLAIM_SUBMITTED)
//!     .state(FlowState::ClaimSubmitted)
//!     .build()?;
//! ```

use std::collections::{HashMap, HashSet};

use crate::error::ConfigurationError;
use crate::flow_state::{FlowName, FlowState};
use crate::predicates::FlowPredicate;

/// Guarded edge between two states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    source: FlowState,
    target: FlowState,
    guard: FlowPredicate,
}

impl Transition {
    pub fn source(&self) -> FlowState {
        self.source
    }

    pub fn target(&self) -> FlowState {
        self.target
    }

    pub fn guard(&self) -> FlowPredicate {
        self.guard
    }
}

/// An immutable, validated state flow
#[derive(Debug, Clone)]
pub struct StateFlow {
    name: FlowName,
    initial: FlowState,
    states: Vec<FlowState>,
    transitions: HashMap<FlowState, Vec<Transition>>,
}

impl StateFlow {
    pub fn name(&self) -> FlowName {
        self.name
    }

    pub fn initial_state(&self) -> FlowState {
        self.initial
    }

    /// Declared states, in declaration order
    pub fn states(&self) -> &[FlowState] {
        &self.states
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn contains(&self, state: FlowState) -> bool {
        self.transitions.contains_key(&state)
    }

    /// Outgoing transitions of `state`, highest priority first
    pub fn transitions_from(&self, state: FlowState) -> &[Transition] {
        self.transitions.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// A state with no outgoing transitions
    pub fn is_terminal(&self, state: FlowState) -> bool {
        self.transitions_from(state).is_empty()
    }

    pub fn terminal_states(&self) -> impl Iterator<Item = FlowState> + '_ {
        self.states.iter().copied().filter(|state| self.is_terminal(*state))
    }
}

/// Fluent builder for [`StateFlow`]
///
/// Declaration mistakes are collected as they happen and reported by
/// [`build`](StateFlowBuilder::build); the first one wins.
#[derive(Debug)]
pub struct StateFlowBuilder {
    name: FlowName,
    initial: Option<FlowState>,
    states: Vec<FlowState>,
    transitions: Vec<Transition>,
    current: Option<FlowState>,
    error: Option<ConfigurationError>,
}

impl StateFlowBuilder {
    /// Starts a flow definition
    pub fn flow(name: FlowName) -> Self {
        Self {
            name,
            initial: None,
            states: Vec::new(),
            transitions: Vec::new(),
            current: None,
            error: None,
        }
    }

    /// Declares the initial state; subsequent transitions leave from it
    pub fn initial(mut self, state: FlowState) -> Self {
        if let Some(first) = self.initial {
            self.fail(ConfigurationError::MultipleInitialStates { first, second: state });
        } else {
            self.initial = Some(state);
        }
        self.declare(state)
    }

    /// Declares a state; subsequent transitions leave from it
    pub fn state(self, state: FlowState) -> Self {
        self.declare(state)
    }

    /// Adds a transition from the most recently declared state
    pub fn transition_to(mut self, target: FlowState, guard: FlowPredicate) -> Self {
        match self.current {
            Some(source) => self.transitions.push(Transition {
                source,
                target,
                guard,
            }),
            None => self.fail(ConfigurationError::TransitionWithoutState { target }),
        }
        self
    }

    /// Validates the definition and freezes it
    pub fn build(self) -> Result<StateFlow, ConfigurationError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let initial = self
            .initial
            .ok_or(ConfigurationError::MissingInitialState(self.name))?;

        let declared: HashSet<FlowState> = self.states.iter().copied().collect();
        let mut transitions: HashMap<FlowState, Vec<Transition>> =
            self.states.iter().map(|state| (*state, Vec::new())).collect();

        for transition in self.transitions {
            if !declared.contains(&transition.target) {
                return Err(ConfigurationError::UndeclaredTarget {
                    source_state: transition.source,
                    target: transition.target,
                });
            }
            transitions
                .entry(transition.source)
                .or_default()
                .push(transition);
        }

        Ok(StateFlow {
            name: self.name,
            initial,
            states: self.states,
            transitions,
        })
    }

    fn declare(mut self, state: FlowState) -> Self {
        if state.flow() != self.name {
            self.fail(ConfigurationError::ForeignState {
                state,
                flow: self.name,
            });
        } else if self.states.contains(&state) {
            self.fail(ConfigurationError::DuplicateState(state));
        } else {
            self.states.push(state);
        }
        self.current = Some(state);
        self
    }

    fn fail(&mut self, error: ConfigurationError) {
        self.error.get_or_insert(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates;

    #[test]
    fn test_build_simple_flow() {
        let flow = StateFlowBuilder::flow(FlowName::Main)
            .initial(FlowState::Draft)
            .transition_to(FlowState::ClaimSubmitted, predicates::CLAIM_SUBMITTED)
            .state(FlowState::ClaimSubmitted)
            .build()
            .unwrap();

        assert_eq!(flow.initial_state(), FlowState::Draft);
        assert_eq!(flow.state_count(), 2);
        assert_eq!(flow.transitions_from(FlowState::Draft).len(), 1);
        assert!(flow.is_terminal(FlowState::ClaimSubmitted));
        assert!(!flow.contains(FlowState::ClaimIssued));
    }

    #[test]
    fn test_transition_order_is_kept() {
        let flow = StateFlowBuilder::flow(FlowName::Main)
            .initial(FlowState::ClaimSubmitted)
            .transition_to(FlowState::ClaimIssuedPaymentSuccessful, predicates::PAYMENT_SUCCESSFUL)
            .transition_to(FlowState::ClaimIssuedPaymentFailed, predicates::PAYMENT_FAILED)
            .state(FlowState::ClaimIssuedPaymentSuccessful)
            .state(FlowState::ClaimIssuedPaymentFailed)
            .build()
            .unwrap();

        let targets: Vec<_> = flow
            .transitions_from(FlowState::ClaimSubmitted)
            .iter()
            .map(Transition::target)
            .collect();
        assert_eq!(
            targets,
            vec![FlowState::ClaimIssuedPaymentSuccessful, FlowState::ClaimIssuedPaymentFailed]
        );
    }

    #[test]
    fn test_terminal_states() {
        let flow = StateFlowBuilder::flow(FlowName::Main)
            .initial(FlowState::Draft)
            .transition_to(FlowState::ClaimSubmitted, predicates::CLAIM_SUBMITTED)
            .state(FlowState::ClaimSubmitted)
            .build()
            .unwrap();

        assert_eq!(flow.terminal_states().collect::<Vec<_>>(), vec![FlowState::ClaimSubmitted]);
    }
}
