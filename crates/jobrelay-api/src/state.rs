//! Application state.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use jobrelay_config::{Config, JobsConfig, RemoteConfig};
use jobrelay_gitlab::{CommitRelay, GitLabClient};

use crate::error::ApiError;
use crate::job::{CommitRequest, CommitResponse, FileJobStore, JobStore, JobView};

/// Application state shared across handlers.
///
/// Immutable after construction; every request reads the job file and talks
/// to the remote on its own.
pub struct AppState {
    pub job_store: Arc<dyn JobStore>,
    pub relay: Arc<CommitRelay>,
    pub remote: RemoteConfig,
    pub jobs: JobsConfig,
}

impl AppState {
    pub fn new(
        job_store: Arc<dyn JobStore>,
        relay: Arc<CommitRelay>,
        remote: RemoteConfig,
        jobs: JobsConfig,
    ) -> Self {
        Self {
            job_store,
            relay,
            remote,
            jobs,
        }
    }

    /// Wire the file-backed store and the GitLab client from configuration.
    pub fn from_config(config: &Config) -> Self {
        let job_store = Arc::new(FileJobStore::new(config.jobs.file.clone()));
        let client = Arc::new(GitLabClient::new(config.remote.clone()));
        let relay = Arc::new(CommitRelay::new(client, config.remote.branch.clone()));
        Self::new(job_store, relay, config.remote.clone(), config.jobs.clone())
    }

    /// All job records in file order, exactly as stored.
    pub async fn list_jobs(&self) -> Result<Vec<Value>, ApiError> {
        self.job_store.load_all().await
    }

    /// A single job with its raw file URL.
    pub async fn get_job(&self, job_id: &str) -> Result<JobView, ApiError> {
        let job = self
            .job_store
            .load(job_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(job_id.to_string()))?;
        Ok(JobView::new(job, &self.remote))
    }

    /// Commit caller-supplied content to the job's file in the repository.
    ///
    /// Validation happens before any store access or remote call.
    pub async fn commit_job(
        &self,
        job_id: &str,
        request: CommitRequest,
    ) -> Result<CommitResponse, ApiError> {
        let content = request
            .content
            .ok_or_else(|| ApiError::InvalidRequest("missing field `content`".to_string()))?;

        let job = self
            .job_store
            .load(job_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(job_id.to_string()))?;

        let path = self.jobs.commit_path(&job.script_name);
        let message = request
            .commit_message
            .unwrap_or_else(|| job.default_commit_message());

        info!("Committing job '{}' to {}", job.job_id, path);
        let result = self.relay.commit(&path, content, message).await?;

        Ok(CommitResponse {
            job_id: job.job_id,
            file_path: result.file_path,
            action: result.action,
            status: result.status,
        })
    }
}
