//! Claims Domain Ports
//!
//! The state-flow core never reads case management directly. Services
//! receive a [`CaseDataPort`] and adapters decide where snapshots come
//! from (files on disk, an HTTP client to case management, memory in
//! tests).
//!
//! ```rust,ignore
//! pub struct FlowStateService<P: CaseDataPort> {
//!     cases: Arc<P>,
//!     engine: StateFlowEngine<'static>,
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{CaseReference, DomainPort, PortError};

use crate::case_data::CaseData;

/// Source of case data snapshots
#[async_trait]
pub trait CaseDataPort: DomainPort {
    /// Fetches the current snapshot of a case
    async fn load(&self, reference: CaseReference) -> Result<CaseData, PortError>;
}

/// In-memory implementation of CaseDataPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[derive(Debug, Default, Clone)]
    pub struct InMemoryCaseDataAdapter {
        cases: Arc<RwLock<HashMap<CaseReference, CaseData>>>,
    }

    impl InMemoryCaseDataAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Stores a snapshot, replacing any previous one for the same case
        pub async fn insert(&self, reference: CaseReference, case_data: CaseData) {
            self.cases.write().await.insert(reference, case_data);
        }
    }

    impl DomainPort for InMemoryCaseDataAdapter {}

    #[async_trait]
    impl CaseDataPort for InMemoryCaseDataAdapter {
        async fn load(&self, reference: CaseReference) -> Result<CaseData, PortError> {
            self.cases
                .read()
                .await
                .get(&reference)
                .cloned()
                .ok_or_else(|| PortError::not_found("Case", reference))
        }
    }
}
