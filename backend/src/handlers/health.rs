//! Health check handlers

use axum::Json;
use shared::HealthStatus;

/// Health check endpoint handler
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
