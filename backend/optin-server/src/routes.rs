use crate::{AppState, health, sendgrid_contact};

use axum::{
    Router,
    routing::{any, get},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Contact-list gateway (method check lives in the handler)
        .route("/api/sendgrid", any(sendgrid_contact))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        // The browser client posts cross-origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
