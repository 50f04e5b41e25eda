//! projectpulse server entry point.
//!
//! Starts the Axum HTTP server with the project REST endpoints and
//! static frontend hosting.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use projectpulse::api;
use projectpulse::app_state::AppState;
use projectpulse::config::AppConfig;
use projectpulse::frontend;
use projectpulse::persistence::sqlite::SqliteStore;
use projectpulse::service::ProjectService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting projectpulse backend");

    // Open the store and make sure the schema exists before serving.
    // Any failure here is fatal: the process must not accept traffic.
    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect_with(SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true))
        .await?;
    let store = SqliteStore::new(pool);
    store.init_schema().await?;

    // Build service layer and seed the starter record on first boot
    let project_service = Arc::new(ProjectService::new(store));
    project_service.seed_if_empty().await?;

    // Build application state
    let app_state = AppState { project_service };

    // Build router: API first, frontend bundle as the fallback
    let mut app = Router::new().merge(api::build_router());
    if let Some(static_files) = frontend::static_service(&config.frontend_dist_dir) {
        app = app.fallback_service(static_files);
    }
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins))
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer from the configured origin list. A `*` entry
/// allows any origin; otherwise only the listed origins are accepted.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let parsed = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        });

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}
