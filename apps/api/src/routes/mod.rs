pub mod health;
pub mod og;
pub mod pages;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(pages::handle_home))
        .route("/docs", get(pages::handle_docs))
        .route("/api/og/:username", get(og::handle_og_image))
        .route("/:username", get(pages::handle_user_page))
        .with_state(state)
}
