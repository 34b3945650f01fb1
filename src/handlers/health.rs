use axum::Json;
use tracing::debug;

use crate::models::HealthResponse;

/// Health check endpoint
///
/// Liveness probe only: reports that the process can answer HTTP. It does
/// not verify any downstream dependency.
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
