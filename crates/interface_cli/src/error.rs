//! CLI error handling

use thiserror::Error;

use core_kernel::{CoreError, PortError};
use domain_claims::{ClaimError, FlowError};
use domain_robotics::RoboticsError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Robotics(#[from] RoboticsError),
}

impl From<PortError> for CliError {
    fn from(err: PortError) -> Self {
        CliError::Claim(ClaimError::Port(err))
    }
}

impl From<FlowError> for CliError {
    fn from(err: FlowError) -> Self {
        CliError::Claim(ClaimError::Flow(err))
    }
}
