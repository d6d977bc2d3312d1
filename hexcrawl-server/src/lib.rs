//! Hexcrawl Server - HTTP API for the shared campaign map
//!
//! This crate provides the web backend:
//! - Role-based auth (DM / player, shared passwords)
//! - Hex CRUD with field-level visibility and a per-field audit trail
//! - Ring add/remove keyed by the shared label generator
//! - Layout and palette endpoints for the renderer
//! - JSON/CSV export, JSON import, static file serving for the client

mod auth;
mod error;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub use auth::{AuthConfig, Role};
pub use error::ApiError;
pub use state::ServerState;
pub use store::{ExportData, HexPatch, HistoryEntry, MapStore, RemoveOutcome};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    /// JSON data file; None keeps the map in memory only
    pub data_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: "client/dist".to_string(),
            data_file: Some(PathBuf::from("hexcrawl-data.json")),
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status + login
        .route("/api/status", get(routes::status::status_handler))
        .route("/api/auth", post(routes::auth::authenticate))
        // Hexes
        .route("/api/hexes", get(routes::hexes::list_hexes))
        .route(
            "/api/hexes/:label",
            get(routes::hexes::get_hex).put(routes::hexes::update_hex),
        )
        .route("/api/hexes/:label/history", get(routes::hexes::hex_history))
        // Map metadata
        .route(
            "/api/meta",
            get(routes::meta::get_meta).put(routes::meta::update_meta),
        )
        // Rings
        .route("/api/rings/add", post(routes::rings::add_ring))
        .route("/api/rings/remove", post(routes::rings::remove_ring))
        // Renderer support
        .route("/api/layout", get(routes::layout::get_layout))
        .route("/api/palette", get(routes::palette::get_palette))
        // Export / import
        .route("/api/export/json", get(routes::export::export_json))
        .route("/api/export/csv", get(routes::export::export_csv))
        .route("/api/import/json", post(routes::export::import_json))
        // Shared state
        .with_state(state)
        .layer(CorsLayer::permissive())
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let auth = AuthConfig::from_env();
    let state = match &config.data_file {
        Some(path) => Arc::new(ServerState::with_data_file(auth, path.clone())?),
        None => Arc::new(ServerState::new(auth)),
    };
    let router = create_router(&config, state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Hexcrawl server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
