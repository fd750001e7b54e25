//! CLI configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use core_kernel::{Clock, CoreError, FixedClock, SystemClock, Timezone};

/// Flow evaluation configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Directory holding `<case reference>.json` snapshots
    pub case_data_dir: PathBuf,
    /// Timezone the system clock reads in
    pub timezone: Timezone,
    /// Evaluate as of this local instant instead of now
    pub fixed_now: Option<String>,
    /// Log level
    pub log_level: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            case_data_dir: PathBuf::from("cases"),
            timezone: Timezone::court(),
            fixed_now: None,
            log_level: "info".to_string(),
        }
    }
}

impl FlowConfig {
    /// Loads configuration from `FLOW_` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("FLOW"))
            .build()?
            .try_deserialize()
    }

    /// Clock the engine should use
    pub fn clock(&self) -> Result<Arc<dyn Clock>, CoreError> {
        match &self.fixed_now {
            Some(instant) => Ok(Arc::new(FixedClock::parse(instant)?)),
            None => Ok(Arc::new(SystemClock::new(self.timezone))),
        }
    }
}
