//! Configuration loader.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::schema::{Config, JobsConfig, RemoteConfig, ServerConfig, DEFAULT_BASE_URL, DEFAULT_BRANCH};

pub const ENV_TOKEN: &str = "GITLAB_TOKEN";
pub const ENV_PROJECT_ID: &str = "GITLAB_PROJECT_ID";
pub const ENV_PROJECT_PATH: &str = "GITLAB_PROJECT_PATH";
pub const ENV_BASE_URL: &str = "GITLAB_BASE_URL";
pub const ENV_BRANCH: &str = "GITLAB_BRANCH";
pub const ENV_JOBS_FILE: &str = "JOBRELAY_JOBS_FILE";
pub const ENV_COMMIT_DIR: &str = "JOBRELAY_COMMIT_DIR";

/// Builds [`Config`] from environment variables.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &str| get(name).ok_or_else(|| ConfigError::EnvVarNotSet(name.to_string()));

        let token = require(ENV_TOKEN)?;
        let project_id = Self::parse_project_id(&require(ENV_PROJECT_ID)?)?;
        let project_path = require(ENV_PROJECT_PATH)?;

        let remote = RemoteConfig::new(token, project_id, project_path)
            .with_base_url(get(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
            .with_branch(get(ENV_BRANCH).unwrap_or_else(|| DEFAULT_BRANCH.to_string()));

        let mut jobs = JobsConfig::default();
        if let Some(file) = get(ENV_JOBS_FILE) {
            jobs.file = PathBuf::from(file);
        }
        if let Some(dir) = get(ENV_COMMIT_DIR) {
            jobs.commit_dir = dir;
        }

        Ok(Config {
            server: ServerConfig::default(),
            remote,
            jobs,
        })
    }

    fn parse_project_id(raw: &str) -> Result<u64, ConfigError> {
        match raw.trim().parse::<u64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(ConfigError::InvalidValue {
                field: ENV_PROJECT_ID.to_string(),
                message: format!("expected a positive integer, got '{}'", raw),
            }),
        }
    }
}
