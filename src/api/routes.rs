//! API Route Configuration

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::Layer;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Create the router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // Any origin may read the portfolio data
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/projects", get(handlers::get_projects))
        .route("/skills", get(handlers::get_skills));

    Router::new()
        .nest("/api", api)
        .route("/", get(handlers::index))
        .fallback(handlers::not_found)
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}

/// Router wrapped so `/api/health/` resolves like `/api/health`.
/// Path normalization has to run before routing, hence outside the Router.
pub fn create_app(state: Arc<AppState>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(create_router(state))
}
