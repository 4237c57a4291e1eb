use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{catch_panic_layer, cors_middleware, json_error_middleware},
    state::AppState,
};

use super::api;

pub const API_PREFIX: &str = "/api";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().nest(API_PREFIX, api::router(state))
}

/// The router with the full middleware stack, as served by the binary.
pub fn app(state: Arc<AppState>) -> Router {
    with_layers(router(state))
}

/// Outermost last: tracing sees every request, CORS headers land on
/// rewritten errors and caught panics alike.
pub fn with_layers(router: Router) -> Router {
    router
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
}
