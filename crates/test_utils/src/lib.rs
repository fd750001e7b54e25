//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims state-flow test suite.
//!
//! # Modules
//!
//! - `fixtures`: Fixed instants, references and questionnaires
//! - `builders`: `CaseDataBuilder`, which puts a case at any flow state
//! - `assertions`: Custom assertion helpers for histories and events
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
