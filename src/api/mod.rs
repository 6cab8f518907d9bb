//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the router using the provided application state.
///
/// The asset set is fixed and enumerated; anything else falls through
/// to axum's default 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/bootstrap.min.css", get(handlers::bootstrap_css))
        .route("/bootstrap.min.js", get(handlers::bootstrap_js))
        .route("/jquery-3.3.1.slim.min.js", get(handlers::jquery_slim_js))
        .route("/popper.min.js", get(handlers::popper_js))
        .route("/index.js", get(handlers::index_js))
        .route("/status", get(handlers::status))
        .route("/open_garage", post(handlers::open_garage))
        .route("/close_garage", post(handlers::close_garage))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
