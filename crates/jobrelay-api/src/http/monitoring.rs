//! Health check handlers.

use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Start time for uptime calculation.
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

/// Initialize start time (call on server start).
pub fn init_start_time() {
    START_TIME.get_or_init(SystemTime::now);
}

fn get_uptime() -> u64 {
    START_TIME
        .get()
        .and_then(|start| start.elapsed().ok())
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check handler.
///
/// Does not touch the jobs file or the remote.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: get_uptime(),
    })
}

/// Liveness probe.
pub async fn liveness_probe() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive"
    }))
}
