//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

/// Slack on top of the circuit text limit for the JSON envelope.
const BODY_OVERHEAD: usize = 16 * 1024;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state
        .config
        .limits
        .max_source_bytes
        .saturating_add(BODY_OVERHEAD);

    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/templates", get(api::templates::list_templates))
        .route("/circuits/generate", post(api::circuits::generate))
        .route("/circuits/visualize", post(api::circuits::visualize))
        .route("/circuits/analyze", post(api::circuits::analyze))
        .route("/circuits/recommend", post(api::circuits::recommend));

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
