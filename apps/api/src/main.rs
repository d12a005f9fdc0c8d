mod config;
mod icons;
mod profile;
mod render;
mod routes;
mod state;

use anyhow::Result;
use resvg::usvg::fontdb;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::profile::resolver::ProfileCache;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting itizme API v{}", env!("CARGO_PKG_VERSION"));

    // One outbound client for profile documents and avatar bytes
    let http = reqwest::Client::new();

    // Per-username revalidation cache for classified results
    let cache = Arc::new(ProfileCache::default());

    // Fonts for preview-image rasterization
    let fonts = Arc::new(load_fonts());
    info!("Font database loaded ({} faces)", fonts.len());

    // Build app state
    let state = AppState {
        http,
        cache,
        fonts,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Bundled faces first (assets/fonts, if the deployment ships any), system
/// fonts as the backstop. An empty database still renders the cards, just
/// without text.
fn load_fonts() -> fontdb::Database {
    let mut db = fontdb::Database::new();
    db.load_fonts_dir("assets/fonts");
    db.load_system_fonts();
    db
}
