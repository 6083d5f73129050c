//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use jobrelay_gitlab::RemoteError;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No job with the requested id.
    #[error("Job '{0}' not found")]
    NotFound(String),

    /// Request body failed validation.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The jobs file could not be read or parsed.
    #[error("Error loading jobs: {0}")]
    JobsUnavailable(String),

    /// The requested record lacks fields a job needs.
    #[error("Job '{id}' is invalid: {reason}")]
    InvalidJob { id: String, reason: String },

    /// The remote repository rejected or never answered a write.
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl ApiError {
    /// HTTP status for this error.
    ///
    /// Remote API errors keep the remote's own status.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::JobsUnavailable(_) | ApiError::InvalidJob { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Remote(RemoteError::Api { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Remote(RemoteError::Network(_)) => StatusCode::BAD_GATEWAY,
        }
    }

    fn message(&self) -> String {
        match self {
            // Remote body is passed through untouched.
            ApiError::Remote(RemoteError::Api { body, .. }) => body.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({"error": self.message()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let err = ApiError::NotFound("a1".to_string());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Job 'a1' not found");
    }

    #[test]
    fn test_invalid_request_status() {
        let err = ApiError::InvalidRequest("missing field `content`".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_jobs_unavailable_status() {
        let err = ApiError::JobsUnavailable("No such file or directory".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("No such file"));
    }

    #[test]
    fn test_invalid_job_status() {
        let err = ApiError::InvalidJob {
            id: "b2".to_string(),
            reason: "missing field `script_path`".to_string(),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Job 'b2' is invalid: missing field `script_path`");
    }

    #[test]
    fn test_remote_api_error_keeps_status_and_body() {
        let err = ApiError::from(RemoteError::Api {
            status: 403,
            body: r#"{"message":"403 Forbidden"}"#.to_string(),
        });
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert_eq!(err.message(), r#"{"message":"403 Forbidden"}"#);
    }

    #[test]
    fn test_remote_network_error_is_bad_gateway() {
        let err = ApiError::from(RemoteError::Network("timed out".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invalid_remote_status_falls_back() {
        let err = ApiError::from(RemoteError::Api {
            status: 42,
            body: String::new(),
        });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }
}
