//! # intake-api
//!
//! HTTP layer for the intake backend: the axum router over the three intake
//! resources (bookings, contacts, chat) plus the health probe. Handlers get
//! the store through [`AppState`]; errors surface as a uniform
//! `{success: false, error}` envelope. CORS is fully permissive: the API is
//! open, with no authentication on any endpoint.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use storage::SqliteKvStore;

pub use config::ServerConfig;
pub use error::ApiError;
pub use state::AppState;

/// Builds the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/bookings",
            get(handlers::bookings::list_bookings).post(handlers::bookings::create_booking),
        )
        .route(
            "/contacts",
            get(handlers::contacts::list_contacts).post(handlers::contacts::create_contact),
        )
        .route(
            "/chat",
            get(handlers::chat::list_chat_messages).post(handlers::chat::create_chat_message),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Opens the SQLite store and serves the API until the process is stopped.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let store = SqliteKvStore::new(&config.database_url).await?;
    let state = AppState::new(Arc::new(store));
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
