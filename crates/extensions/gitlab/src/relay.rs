//! Create-or-update commit relay.
//!
//! A commit probes the target path first and then issues exactly one write:
//! `PUT` when the file is present, `POST` otherwise. The probe and the write
//! are two separate remote calls, so a file created or deleted by someone else
//! in between can make the write fail; that error is returned as-is.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::{FileCommit, RepositoryFiles};
use crate::error::RemoteError;

/// Which write a commit performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitAction {
    Created,
    Updated,
}

/// Outcome reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitStatus {
    Success,
    Failure,
}

/// Normalized result of a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitResult {
    pub status: CommitStatus,
    pub action: CommitAction,
    pub file_path: String,
}

/// Relays commits to a remote repository on a single branch.
pub struct CommitRelay {
    files: Arc<dyn RepositoryFiles>,
    branch: String,
}

impl CommitRelay {
    pub fn new(files: Arc<dyn RepositoryFiles>, branch: impl Into<String>) -> Self {
        Self {
            files,
            branch: branch.into(),
        }
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Probe whether `path` exists at `branch`.
    pub async fn exists(&self, path: &str, branch: &str) -> bool {
        self.files.file_exists(path, branch).await
    }

    /// Create or update `path` with `content`.
    pub async fn commit(
        &self,
        path: &str,
        content: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<CommitResult, RemoteError> {
        let commit = FileCommit {
            branch: self.branch.clone(),
            content: content.into(),
            commit_message: message.into(),
        };

        let action = if self.exists(path, &self.branch).await {
            self.files.update_file(path, &commit).await?;
            CommitAction::Updated
        } else {
            self.files.create_file(path, &commit).await?;
            CommitAction::Created
        };

        info!("Committed '{}' on {} ({:?})", path, self.branch, action);

        Ok(CommitResult {
            status: CommitStatus::Success,
            action,
            file_path: path.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "relay_tests.rs"]
mod tests;
