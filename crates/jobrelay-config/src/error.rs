//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_not_set_error() {
        let err = ConfigError::EnvVarNotSet("GITLAB_TOKEN".to_string());
        assert!(err.to_string().contains("GITLAB_TOKEN"));
        assert!(err.to_string().contains("not set"));
    }

    #[test]
    fn test_invalid_value_error() {
        let err = ConfigError::InvalidValue {
            field: "GITLAB_PROJECT_ID".to_string(),
            message: "must be a positive integer".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("GITLAB_PROJECT_ID"));
        assert!(display.contains("must be a positive integer"));
    }

    #[test]
    fn test_error_debug() {
        let err = ConfigError::EnvVarNotSet("GITLAB_PROJECT_PATH".to_string());
        let debug = format!("{:?}", err);
        assert!(debug.contains("EnvVarNotSet"));
    }
}
