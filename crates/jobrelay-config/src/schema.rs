//! Configuration schema definitions.

use std::fmt;
use std::path::PathBuf;

/// Public GitLab v4 API.
pub const DEFAULT_BASE_URL: &str = "https://gitlab.com/api/v4";

/// Branch targeted by every read and write.
pub const DEFAULT_BRANCH: &str = "main";

pub const DEFAULT_JOBS_FILE: &str = "gitlab_jobs.json";

/// Repository directory that committed job files land in.
pub const DEFAULT_COMMIT_DIR: &str = "sas/optimized";

/// Root configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub remote: RemoteConfig,
    pub jobs: JobsConfig,
}

impl Config {
    /// Build a configuration with default server and job settings.
    pub fn new(remote: RemoteConfig) -> Self {
        Self {
            server: ServerConfig::default(),
            remote,
            jobs: JobsConfig::default(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Remote repository settings.
#[derive(Clone)]
pub struct RemoteConfig {
    /// Personal or project access token, sent as `PRIVATE-TOKEN`.
    pub token: String,
    /// Numeric project id used for write calls.
    pub project_id: u64,
    /// Human-readable `group/project` path used for raw file URLs.
    pub project_path: String,
    /// API root without a trailing slash.
    pub base_url: String,
    pub branch: String,
}

impl RemoteConfig {
    pub fn new(
        token: impl Into<String>,
        project_id: u64,
        project_path: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            project_id,
            project_path: project_path.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("token", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("project_path", &self.project_path)
            .field("base_url", &self.base_url)
            .field("branch", &self.branch)
            .finish()
    }
}

/// Job definitions file and commit layout.
#[derive(Debug, Clone)]
pub struct JobsConfig {
    /// JSON document with a top-level `jobs` array.
    pub file: PathBuf,
    pub commit_dir: String,
}

impl JobsConfig {
    /// Repository path a job's script is committed to.
    pub fn commit_path(&self, script_name: &str) -> String {
        let dir = self.commit_dir.trim_end_matches('/');
        if dir.is_empty() {
            script_name.to_string()
        } else {
            format!("{}/{}", dir, script_name)
        }
    }
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_JOBS_FILE),
            commit_dir: DEFAULT_COMMIT_DIR.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
