//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod health;
pub mod judge;
pub mod problems;

use axum::{middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{constants::MAX_REQUEST_BODY_BYTES, middleware::logging_middleware, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(judge::routes())
        .nest("/problems", problems::routes())
}

/// Full application router with its middleware stack
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
