//! Job definition stores.

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::definition::{has_job_id, JobRecord, JobsDocument};
use crate::error::ApiError;

/// Read-only source of job definitions.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Load all job records as stored, in file order.
    async fn load_all(&self) -> Result<Vec<Value>, ApiError>;

    /// Load a job by ID. The first record with a matching id wins.
    ///
    /// Only the matched record has to have the full job shape; other records
    /// are not inspected.
    async fn load(&self, id: &str) -> Result<Option<JobRecord>, ApiError> {
        let jobs = self.load_all().await?;
        let Some(raw) = jobs.into_iter().find(|raw| has_job_id(raw, id)) else {
            return Ok(None);
        };

        serde_json::from_value(raw)
            .map(Some)
            .map_err(|e| ApiError::InvalidJob {
                id: id.to_string(),
                reason: e.to_string(),
            })
    }
}

/// In-memory job store for testing.
pub struct MemoryJobStore {
    jobs: Vec<Value>,
}

impl MemoryJobStore {
    /// Create a store holding `jobs` in the given order.
    pub fn new(jobs: Vec<JobRecord>) -> Self {
        Self::from_values(jobs.iter().map(JobRecord::to_value).collect())
    }

    /// Create a store from raw records, which need not be complete jobs.
    pub fn from_values(jobs: Vec<Value>) -> Self {
        Self { jobs }
    }
}

impl Default for MemoryJobStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn load_all(&self) -> Result<Vec<Value>, ApiError> {
        Ok(self.jobs.clone())
    }
}

/// Job store backed by a JSON file.
///
/// The file is read on every call, so edits made out-of-band are picked up by
/// the next request.
pub struct FileJobStore {
    path: PathBuf,
}

impl FileJobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl JobStore for FileJobStore {
    async fn load_all(&self) -> Result<Vec<Value>, ApiError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            ApiError::JobsUnavailable(format!("failed to read {}: {}", self.path.display(), e))
        })?;

        let document: JobsDocument = serde_json::from_str(&content).map_err(|e| {
            ApiError::JobsUnavailable(format!("failed to parse {}: {}", self.path.display(), e))
        })?;

        debug!("Loaded {} jobs from {:?}", document.jobs.len(), self.path);
        Ok(document.jobs)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
