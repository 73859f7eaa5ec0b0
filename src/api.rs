//! REST API router for the matching engine.
//!
//! Used by the `clob_server` binary and by integration tests. Create with [`create_router`].
//! Every handler holds the engine lock for the whole call, so submissions are
//! applied one at a time in arrival order and book reads never see a half-done match.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Engine, NewOrder, Order, Trade};

/// Shared app state: one engine per process.
#[derive(Clone)]
pub struct AppState {
    pub(crate) engine: Arc<Mutex<Engine>>,
}

impl AppState {
    fn lock(&self) -> Result<MutexGuard<'_, Engine>, Response> {
        self.engine.lock().map_err(|e| {
            log::error!("engine lock poisoned: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "engine unavailable" })),
            )
                .into_response()
        })
    }
}

/// Builds the REST router with state. Returns `Router<()>` so you can call `.into_make_service()` for `axum::serve`.
pub fn create_router() -> Router<()> {
    let state = AppState {
        engine: Arc::new(Mutex::new(Engine::new())),
    };
    Router::new()
        .route("/health", get(health))
        .route("/orders", post(submit_order))
        .route("/book", get(book))
        .route("/reset", post(reset))
        .layer(Extension(state))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn submit_order(
    Extension(state): Extension<AppState>,
    Json(new_order): Json<NewOrder>,
) -> Response {
    let mut guard = match state.lock() {
        Ok(g) => g,
        Err(resp) => return resp,
    };
    let trades = guard.submit(Order::from(new_order));
    #[derive(serde::Serialize)]
    struct Out {
        trades: Vec<Trade>,
    }
    (StatusCode::OK, Json(Out { trades })).into_response()
}

async fn book(Extension(state): Extension<AppState>) -> Response {
    match state.lock() {
        Ok(guard) => (StatusCode::OK, Json(guard.snapshot())).into_response(),
        Err(resp) => resp,
    }
}

async fn reset(Extension(state): Extension<AppState>) -> Response {
    let mut guard = match state.lock() {
        Ok(g) => g,
        Err(resp) => return resp,
    };
    guard.reset();
    (StatusCode::OK, Json(serde_json::json!({ "reset": true }))).into_response()
}
