//! HTTP server for the matching engine.
//!
//! Endpoints: health, submit order, book snapshot, reset. Configured with
//! `BIND_ADDR` (default `0.0.0.0`), `PORT` (default 8080) and `RUST_LOG`.

use clob_engine::api;
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let _ = env_logger::try_init();
    let host = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    let app = api::create_router();

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        error!("failed to bind {}: {}", addr, e);
        e
    })?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await
}
