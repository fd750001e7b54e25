//! Command-Line Interface
//!
//! Evaluates stored case snapshots against the MAIN claim flow and prints
//! the resulting flow state, state history and robotics event history.
//!
//! # Configuration
//!
//! * `FLOW_CASE_DATA_DIR` - directory of `<case reference>.json` snapshots (default: cases)
//! * `FLOW_TIMEZONE` - timezone of the system clock (default: Europe/London)
//! * `FLOW_FIXED_NOW` - evaluate as of `YYYY-MM-DDTHH:MM:SS` instead of now
//! * `FLOW_LOG_LEVEL` - trace, debug, info, warn, error (default: info)

pub mod adapters;
pub mod config;
pub mod error;
pub mod report;

pub use adapters::FileCaseDataAdapter;
pub use config::FlowConfig;
pub use error::CliError;
pub use report::FlowReport;
