use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use bytes::Bytes;

use crate::profile::resolver::fetch_profile;
use crate::profile::FetchProfileResult;
use crate::render::og;
use crate::state::AppState;

/// GET /api/og/:username
///
/// Always answers a 1200×630 PNG: the profile card on success, the fixed
/// "Not found" card for everything else.
pub async fn handle_og_image(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    let png = match fetch_profile(&state.http, &state.cache, &username).await {
        FetchProfileResult::Ok(profile) => {
            og::profile_image(&state.http, &state.fonts, &profile, &username).await
        }
        FetchProfileResult::NotFound | FetchProfileResult::InvalidConfig => {
            og::fallback_image(&state.fonts)
        }
    };
    (
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        Bytes::from(png),
    )
}
