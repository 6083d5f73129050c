//! Job HTTP route handlers.
//!
//! - GET  /jobs              - List jobs
//! - GET  /jobs/{id}         - Get job (with raw file URL)
//! - POST /jobs/{id}/commit  - Commit content to the job's file

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;
use tracing::error;

use super::definition::{CommitRequest, CommitResponse, JobView};
use crate::error::ApiError;
use crate::state::AppState;

/// List all jobs.
///
/// GET /jobs
pub async fn list_jobs(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>, ApiError> {
    state.list_jobs().await.map(Json).inspect_err(|e| {
        error!("Failed to list jobs: {}", e);
    })
}

/// Get a job by ID.
///
/// GET /jobs/{id}
pub async fn get_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<JobView>, ApiError> {
    state.get_job(&id).await.map(Json)
}

/// Commit content for a job.
///
/// POST /jobs/{id}/commit
pub async fn commit_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<CommitRequest>, JsonRejection>,
) -> Result<Json<CommitResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    state.commit_job(&id, request).await.map(Json).inspect_err(|e| {
        if !matches!(e, ApiError::NotFound(_) | ApiError::InvalidRequest(_)) {
            error!("Commit for job '{}' failed: {}", id, e);
        }
    })
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
