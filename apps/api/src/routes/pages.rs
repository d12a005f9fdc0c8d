use axum::extract::{Path, State};
use axum::response::Html;

use crate::profile::resolver::fetch_profile;
use crate::profile::FetchProfileResult;
use crate::render::page;
use crate::state::AppState;

/// GET /:username
pub async fn handle_user_page(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Html<String> {
    match fetch_profile(&state.http, &state.cache, &username).await {
        FetchProfileResult::Ok(profile) => Html(page::profile_page(
            &profile,
            &username,
            &state.config.base_url,
        )),
        FetchProfileResult::NotFound => Html(page::not_found_page()),
        FetchProfileResult::InvalidConfig => Html(page::invalid_config_page()),
    }
}

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Html<String> {
    let username = &state.config.home_username;
    match fetch_profile(&state.http, &state.cache, username).await {
        FetchProfileResult::Ok(profile) => Html(page::home_page(
            &profile,
            username,
            &state.config.base_url,
        )),
        // The home profile is operator-owned; both failure shapes read as
        // absent here.
        FetchProfileResult::NotFound | FetchProfileResult::InvalidConfig => {
            Html(page::not_found_page())
        }
    }
}

/// GET /docs
pub async fn handle_docs() -> Html<String> {
    Html(page::docs_page())
}
