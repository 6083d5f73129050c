//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::http::monitoring;
use crate::job::routes as job_routes;
use crate::state::AppState;

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// /jobs
///   GET    /jobs              - List jobs
///   GET    /jobs/{id}         - Get job with raw file URL
///   POST   /jobs/{id}/commit  - Create or update the job's file
///
/// /health  - Health check
/// /livez   - Liveness probe
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let job_router = Router::new()
        .route("/", get(job_routes::list_jobs))
        .route("/{id}", get(job_routes::get_job))
        .route("/{id}/commit", post(job_routes::commit_job))
        .with_state(state);

    let monitoring_routes = Router::new()
        .route("/health", get(monitoring::health_check))
        .route("/livez", get(monitoring::liveness_probe));

    Router::new()
        .nest("/jobs", job_router)
        .merge(monitoring_routes)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
