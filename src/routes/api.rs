use axum::{routing::get, Router};

use crate::handlers::{health_check, hello};

/// Create API routes
///
/// The hello and health routes have disjoint paths, so their ordering here
/// is immaterial.
pub fn create_api_routes() -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().nest("/api", create_api_routes())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn hello_without_name_returns_default_greeting() {
        let (status, body) = get_json(app(), "/api/hello").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Hello World!"}));
    }

    #[tokio::test]
    async fn hello_with_name_returns_personalized_greeting() {
        let (status, body) = get_json(app(), "/api/hello?name=Ada").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Hello Ada!"}));
    }

    #[tokio::test]
    async fn hello_with_empty_name_returns_default_greeting() {
        let (status, body) = get_json(app(), "/api/hello?name=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Hello World!"}));
    }

    #[tokio::test]
    async fn hello_is_idempotent_for_equal_names() {
        let (_, first) = get_json(app(), "/api/hello?name=Grace").await;
        let (_, second) = get_json(app(), "/api/hello?name=Grace").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn health_returns_healthy() {
        let (status, body) = get_json(app(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy"}));
    }
}
