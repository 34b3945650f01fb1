use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// API response for the greeting endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
}
