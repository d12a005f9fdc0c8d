use std::sync::Arc;

use resvg::usvg::fontdb;

use crate::config::Config;
use crate::profile::resolver::ProfileCache;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// One reqwest client for all outbound fetches (profile documents,
    /// avatar bytes).
    pub http: reqwest::Client,
    /// Per-username revalidation cache for classified profile results.
    pub cache: Arc<ProfileCache>,
    /// Font database for preview-image rasterization, loaded once at startup.
    pub fonts: Arc<fontdb::Database>,
    pub config: Config,
}
