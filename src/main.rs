mod config;
mod docs;
mod handlers;
mod models;
mod routes;
mod services;

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use config::Config;
use docs::ApiDoc;
use routes::create_api_routes;
use std::panic;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "hello_lambda=debug,tower_http=debug,axum::rejection=trace,info".into()
        }))
        .init();

    info!(
        "Starting {} v{}...",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });
    info!("Environment: {}", config.environment);

    let app = build_app();

    // Inside the AWS Lambda runtime there is no listener to bind: the shim
    // translates invocation events to HTTP requests and feeds them to the
    // same router.
    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        info!("Lambda runtime detected, serving through the event adapter");
        lambda_http::run(app)
            .await
            .expect("Lambda event loop failed");
        return;
    }

    // Start the HTTP/API server
    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("🚀 Server running on http://{}", config.server_address());
    info!(
        "📚 Swagger UI available at http://{}/swagger",
        config.server_address()
    );

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}

/// Build the application router, once per process lifetime.
fn build_app() -> Router {
    Router::new()
        // Mount API routes
        .nest("/api", create_api_routes())
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
}
