use axum::{routing::get, Router};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, fmt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Module declarations for our application structure
mod config;
mod error;
mod extract;
mod handler;
mod model;
mod openapi;

use crate::config::Config;
use crate::handler::AppState;
use crate::openapi::ApiDoc;

#[tokio::main]
async fn main() {
    // Fallback to debug for our own crates if RUST_LOG is not set.
    // `log` records from matrix_stats_core are bridged by tracing-subscriber's tracing-log integration.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,matrix_stats_webservice=debug,matrix_stats_core=debug")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();

    let config = Config::parse();
    tracing::info!("Tracing initialized. Starting matrix statistics webservice with {:?}", config);

    let addr = config.socket_addr();
    let app = app(AppState {
        strict_shape: config.strict_shape,
    });

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to address {}: {}", addr, e);
            return;
        }
    };
    tracing::info!("Listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
    }
}

/// Builds the application router with middleware applied.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(health_check))
        .route("/analyze", axum::routing::post(handler::analyze_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
pub async fn health_check() -> &'static str {
    tracing::debug!("Health check endpoint hit");
    "Matrix statistics webservice is running!"
}
