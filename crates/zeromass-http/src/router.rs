//! Router for the ZeroMass host.
//!
//! Routing is left to plugins, so the router has a single fallback that
//! hands every request to the `answerPage` hook.

use axum::{Router, middleware as axum_middleware};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with the page fallback and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::page::answer_page)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}
