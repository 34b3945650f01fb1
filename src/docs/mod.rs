use utoipa::OpenApi;

use crate::models::*;

/// Greeting endpoint
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "greetings",
    params(
        ("name" = Option<String>, Query, description = "Optional name for personalized greeting")
    ),
    responses(
        (status = 200, description = "Greeting message", body = HelloResponse)
    )
)]
#[allow(dead_code)]
pub async fn hello_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "system",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hello Lambda",
        description = "Greeting API deployable on AWS Lambda"
    ),
    paths(
        hello_doc,
        health_check_doc,
    ),
    components(
        schemas(HelloResponse, HealthResponse)
    ),
    tags(
        (name = "greetings", description = "Greeting endpoints"),
        (name = "system", description = "Liveness and operational endpoints")
    )
)]
pub struct ApiDoc;
