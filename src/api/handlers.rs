//! API handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use bytes::Bytes;

use crate::api::AppState;
use crate::assets;
use crate::types::DoorState;

/// Fixed body for `/status` when the backing file is absent or unreadable.
const STATE_UNAVAILABLE: &str = "door state storage is not initialized";

/// Home page (default document content type).
pub async fn home() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

pub async fn bootstrap_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, assets::CONTENT_TYPE_CSS)],
        assets::BOOTSTRAP_CSS,
    )
}

pub async fn bootstrap_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, assets::CONTENT_TYPE_JS)],
        assets::BOOTSTRAP_JS,
    )
}

pub async fn jquery_slim_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, assets::CONTENT_TYPE_JS)],
        assets::JQUERY_SLIM_JS,
    )
}

pub async fn popper_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, assets::CONTENT_TYPE_JS)],
        assets::POPPER_JS,
    )
}

pub async fn index_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, assets::CONTENT_TYPE_JS)],
        assets::INDEX_JS,
    )
}

/// Read-only projection of the stored flag as plain text.
pub async fn status(State(state): State<AppState>) -> Response {
    match state.store.read_raw().await {
        Ok(text) => (StatusCode::OK, text).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "status read failed");
            (StatusCode::INTERNAL_SERVER_ERROR, STATE_UNAVAILABLE).into_response()
        }
    }
}

/// Command the door open. Body is the raw shared secret.
pub async fn open_garage(State(state): State<AppState>, body: Bytes) -> Response {
    command(state, DoorState::Open, body).await
}

/// Command the door closed. Body is the raw shared secret.
pub async fn close_garage(State(state): State<AppState>, body: Bytes) -> Response {
    command(state, DoorState::Closed, body).await
}

/// Shared secret-gated command path.
///
/// The secret comparison is byte-exact: no trimming, no case-folding.
/// A mismatch answers 404 with an empty body, indistinguishable from an
/// unknown route, so unauthenticated callers cannot probe for the
/// command endpoints.
async fn command(state: AppState, target: DoorState, body: Bytes) -> Response {
    if body.as_ref() != state.secret.as_bytes() {
        tracing::warn!(%target, "command rejected: secret mismatch");
        return (StatusCode::NOT_FOUND, "").into_response();
    }

    match state.store.write(target).await {
        Ok(()) => {
            // Drive the hardware exactly once, before responding.
            state.relay.apply(target);
            tracing::info!(%target, "door commanded");
            (StatusCode::OK, "true").into_response()
        }
        Err(err) => {
            // Write rejected by the medium: 200 "false", distinct from
            // the 404 auth signal.
            tracing::error!(%target, error = %err, "state write rejected");
            (StatusCode::OK, "false").into_response()
        }
    }
}
