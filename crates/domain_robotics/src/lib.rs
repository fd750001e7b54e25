//! Robotics Event History
//!
//! The external case-tracking ("robotics") system keeps a legal record of
//! each claim as numbered events. This crate derives that record from a
//! case snapshot by walking the claim's state history and emitting the
//! events each significant state implies.
//!
//! # Sequence numbers
//!
//! ```text
//! 1  offline reason (unrepresented / unregistered defendant)
//! 2  acknowledgement of service
//! 3  consent extension for filing defence
//! 4  respondent response        5  respondent DQ or offline reason
//! 6  reply to defence           7  applicant DQ       8  applicant proceeds
//! 9  taken offline
//! ```

pub mod event;
pub mod mapper;
pub mod error;

pub use event::{Event, EventDetails, EventHistory, EventType, APPLICANT_ID, RESPONDENT_ID};
pub use mapper::EventHistoryMapper;
pub use error::RoboticsError;
