//! GitLab repository files client.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

use jobrelay_config::RemoteConfig;

use crate::error::RemoteError;
use crate::urls::file_endpoint;

/// Body of a create or update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCommit {
    pub branch: String,
    pub content: String,
    pub commit_message: String,
}

/// Remote file operations the commit relay depends on.
#[async_trait]
pub trait RepositoryFiles: Send + Sync {
    /// Whether `path` exists at `branch`.
    ///
    /// Any non-success outcome, including transport failures, reads as absent.
    async fn file_exists(&self, path: &str, branch: &str) -> bool;

    /// Create a new file.
    async fn create_file(&self, path: &str, commit: &FileCommit) -> Result<(), RemoteError>;

    /// Replace the content of an existing file.
    async fn update_file(&self, path: &str, commit: &FileCommit) -> Result<(), RemoteError>;
}

/// HTTP client for the GitLab v4 repository files API.
pub struct GitLabClient {
    remote: RemoteConfig,
    client: reqwest::Client,
}

impl GitLabClient {
    pub fn new(remote: RemoteConfig) -> Self {
        Self::with_client(remote, reqwest::Client::new())
    }

    /// Create a client sharing an existing connection pool.
    pub fn with_client(remote: RemoteConfig, client: reqwest::Client) -> Self {
        Self { remote, client }
    }

    pub fn remote(&self) -> &RemoteConfig {
        &self.remote
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, file_endpoint(&self.remote, path))
            .header("PRIVATE-TOKEN", &self.remote.token)
            .header("Content-Type", "application/json")
    }

    async fn write(&self, method: Method, path: &str, commit: &FileCommit) -> Result<(), RemoteError> {
        let response = self
            .request(method.clone(), path)
            .json(commit)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        if !matches!(status, StatusCode::OK | StatusCode::CREATED) {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read {} error body for '{}': {}", status, path, e);
                    String::new()
                }
            };
            return Err(RemoteError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!("{} {} -> {}", method, path, status);
        Ok(())
    }
}

#[async_trait]
impl RepositoryFiles for GitLabClient {
    async fn file_exists(&self, path: &str, branch: &str) -> bool {
        let result = self
            .request(Method::GET, path)
            .query(&[("ref", branch)])
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => true,
            Ok(response) if response.status() == StatusCode::NOT_FOUND => false,
            Ok(response) => {
                warn!(
                    "Existence check for '{}' returned {}, treating as absent",
                    path,
                    response.status()
                );
                false
            }
            Err(e) => {
                warn!("Existence check for '{}' failed: {}, treating as absent", path, e);
                false
            }
        }
    }

    async fn create_file(&self, path: &str, commit: &FileCommit) -> Result<(), RemoteError> {
        self.write(Method::POST, path, commit).await
    }

    async fn update_file(&self, path: &str, commit: &FileCommit) -> Result<(), RemoteError> {
        self.write(Method::PUT, path, commit).await
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
