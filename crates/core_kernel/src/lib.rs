//! Core Kernel - Foundational types for the claims state-flow system
//!
//! This crate provides the building blocks shared by the domain crates:
//! - Case references as strongly-typed identifiers
//! - Court-local time and an injectable clock
//! - Port error types for external collaborators

pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use temporal::{Clock, SystemClock, FixedClock, Timezone, TemporalError};
pub use identifiers::{CaseReference, LegacyCaseReference};
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
