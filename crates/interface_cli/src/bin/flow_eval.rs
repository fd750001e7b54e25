//! Claim flow evaluation binary
//!
//! # Usage
//!
//! ```bash
//! flow-eval eval 1594901956117591
//! flow-eval check 1594901956117591 MAIN.FULL_DEFENCE
//! flow-eval variables 1594901956117591
//! FLOW_FIXED_NOW=2024-06-03T10:00:00 flow-eval eval 1594901956117591
//! ```

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::CaseReference;
use domain_claims::{CaseDataPort, FlowState, FlowStateService, StateFlowEngine};
use domain_robotics::EventHistoryMapper;
use interface_cli::{FileCaseDataAdapter, FlowConfig, FlowReport};

/// Derives claim flow states from stored case snapshots
#[derive(Parser)]
#[command(name = "flow-eval", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print flow state, history and event history of a case
    Eval { reference: CaseReference },

    /// Report whether a case has ever reached a state
    Check {
        reference: CaseReference,
        /// Fully-qualified state name, e.g. MAIN.CLAIM_ISSUED
        state: FlowState,
    },

    /// Print the variables handed to the workflow engine
    Variables { reference: CaseReference },

    /// List every state of the MAIN flow
    States,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = FlowConfig::from_env().context("Failed to load FLOW_ configuration")?;
    init_tracing(&config.log_level);

    let clock = config.clock()?;
    let engine = StateFlowEngine::main(clock)?;
    let adapter = Arc::new(FileCaseDataAdapter::new(config.case_data_dir.clone()));

    tracing::debug!(
        case_data_dir = %adapter.dir().display(),
        fixed_now = ?config.fixed_now,
        "Configuration loaded"
    );

    match cli.command {
        Command::Eval { reference } => {
            let mapper = EventHistoryMapper::new(engine);
            let report = FlowReport::load(adapter.as_ref(), &mapper, reference).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Check { reference, state } => {
            let service = FlowStateService::new(adapter, engine);
            let reached = service.has_transitioned_to(reference, state).await?;
            println!("{}", serde_json::json!({ "state": state, "reached": reached }));
        }
        Command::Variables { reference } => {
            let case_data = adapter.load(reference).await?;
            let service = FlowStateService::new(adapter, engine);
            let variables = service.workflow_variables(&case_data)?;
            println!("{}", serde_json::to_string_pretty(&variables)?);
        }
        Command::States => {
            for state in FlowState::ALL {
                println!("{state}");
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
