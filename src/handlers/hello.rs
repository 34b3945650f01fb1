use axum::{extract::Query, Json};
use serde::Deserialize;
use tracing::debug;

use crate::models::HelloResponse;
use crate::services::greeting::generate_greeting;

/// Query parameters accepted by the greeting endpoint
#[derive(Deserialize)]
pub struct HelloParams {
    /// Optional name for a personalized greeting
    pub name: Option<String>,
}

/// Greeting endpoint
pub async fn hello(Query(params): Query<HelloParams>) -> Json<HelloResponse> {
    debug!("Greeting requested");
    Json(HelloResponse {
        message: generate_greeting(params.name.as_deref()),
    })
}
