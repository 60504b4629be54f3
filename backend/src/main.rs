use dotenvy::dotenv;
use axum::{
    routing::{any, get},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::path::Path;
use std::sync::Arc;

mod error;
mod config {
    pub mod server_config;
}
mod handlers {
    pub mod health_handlers;
    pub mod fallback_handlers;
}

use config::server_config::ServerConfig;
use handlers::health_handlers;
use handlers::fallback_handlers;

pub struct AppState {
    config: ServerConfig,
}

/// Serves the built frontend bundle. Unknown paths get `index.html` so the
/// client-side router can resolve them.
fn static_files(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

/// A missing bundle is fatal in production. Elsewhere the API still runs.
fn check_static_dir(config: &ServerConfig) -> anyhow::Result<()> {
    if config.static_dir.join("index.html").exists() {
        return Ok(());
    }
    if config.environment.is_production() {
        anyhow::bail!("No index.html in {}", config.static_dir.display());
    }
    tracing::warn!(
        "No index.html in {}, build the frontend first or set STATIC_DIR",
        config.static_dir.display()
    );
    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();

    let api_routes = Router::new()
        .route("/api/health", get(health_handlers::health_check).head(health_handlers::health_head))
        .route("/api", any(fallback_handlers::api_not_found))
        .route("/api/", any(fallback_handlers::api_not_found))
        .route("/api/{*rest}", any(fallback_handlers::api_not_found));

    Router::new()
        .merge(api_routes)
        .fallback_service(static_files(&static_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::HEAD,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr()?;

    check_static_dir(&config)?;

    tracing::info!(
        "Starting server v{} ({:?}) on {}",
        config.version,
        config.environment,
        addr
    );

    let state = Arc::new(AppState { config });

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app(state).into_make_service()).await?;
    Ok(())
}
