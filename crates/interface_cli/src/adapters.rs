//! Case data adapters

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use core_kernel::{CaseReference, DomainPort, PortError};
use domain_claims::{CaseData, CaseDataPort};

/// Reads snapshots from `<dir>/<case reference>.json`
#[derive(Debug, Clone)]
pub struct FileCaseDataAdapter {
    dir: PathBuf,
}

impl FileCaseDataAdapter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, reference: CaseReference) -> PathBuf {
        self.dir.join(format!("{reference}.json"))
    }
}

impl DomainPort for FileCaseDataAdapter {}

#[async_trait]
impl CaseDataPort for FileCaseDataAdapter {
    async fn load(&self, reference: CaseReference) -> Result<CaseData, PortError> {
        let path = self.path_for(reference);
        debug!(path = %path.display(), "Reading case snapshot");

        let json = tokio::fs::read_to_string(&path).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                PortError::not_found("Case", reference)
            } else {
                PortError::connection(format!("Failed to read {}", path.display()), err)
            }
        })?;

        CaseData::from_json(&json).map_err(|err| {
            PortError::transformation(format!("Invalid snapshot {}: {err}", path.display()))
        })
    }
}
