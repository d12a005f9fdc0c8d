//! Profile resolution: username → canonical document URL → fetch →
//! three-way classification.
//!
//! The document lives at a fixed, username-parameterized path
//! (`<raw host>/<username>/it-iz-me/main/main.json`). A failed or non-2xx
//! fetch classifies as `NotFound`, a 2xx body that is not a well-formed
//! profile document as `InvalidConfig`. One attempt, no retries: the
//! remote document is third-party-owned and best-effort by design, so
//! every failure degrades to a deterministic fallback instead of a retry
//! loop. Transient origin errors (5xx) therefore also read as `NotFound`.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::profile::{FetchProfileResult, Profile};

const RAW_HOST: &str = "https://raw.githubusercontent.com";
const PROFILE_REPO: &str = "it-iz-me";
const PROFILE_BRANCH: &str = "main";
const PROFILE_FILE: &str = "main.json";

/// How long a classified result may be served without re-fetching.
pub const REVALIDATE_AFTER: Duration = Duration::from_secs(60);

/// Upper bound on a fetched document body. A real profile document is a
/// few KB; anything past this is not worth buffering or parsing.
const MAX_DOCUMENT_BYTES: usize = 1024 * 1024;

/// The canonical document URL for a username.
pub fn profile_json_url(username: &str) -> String {
    format!("{RAW_HOST}/{username}/{PROFILE_REPO}/{PROFILE_BRANCH}/{PROFILE_FILE}")
}

/// Resolves a possibly-relative `img` reference against the same repository
/// root the document came from. Absolute http(s) URLs pass through
/// unchanged; a single leading `/` on relative paths is stripped.
pub fn resolve_img_url(username: &str, img: &str) -> String {
    if img.starts_with("http://") || img.starts_with("https://") {
        return img.to_string();
    }
    let path = img.strip_prefix('/').unwrap_or(img);
    format!("{RAW_HOST}/{username}/{PROFILE_REPO}/{PROFILE_BRANCH}/{path}")
}

/// Why a fetch did not produce a profile. Internal only — callers see the
/// closed [`FetchProfileResult`], never this enum.
#[derive(Debug, Error)]
enum FetchFailure {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("origin answered {0}")]
    Status(StatusCode),

    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("document exceeds {MAX_DOCUMENT_BYTES} bytes")]
    TooLarge,
}

impl FetchFailure {
    /// Transport failures and error statuses fold into `NotFound`; a body
    /// that was delivered but is unparseable or oversized is
    /// `InvalidConfig`.
    fn classify(self) -> FetchProfileResult {
        match self {
            FetchFailure::Transport(_) | FetchFailure::Status(_) => FetchProfileResult::NotFound,
            FetchFailure::Malformed(_) | FetchFailure::TooLarge => {
                FetchProfileResult::InvalidConfig
            }
        }
    }
}

async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<Profile, FetchFailure> {
    let mut response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::Status(status));
    }
    if response
        .content_length()
        .is_some_and(|len| len > MAX_DOCUMENT_BYTES as u64)
    {
        return Err(FetchFailure::TooLarge);
    }
    // Read chunk-wise so a missing or lying Content-Length cannot make us
    // buffer an arbitrarily large body.
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > MAX_DOCUMENT_BYTES {
            return Err(FetchFailure::TooLarge);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(serde_json::from_slice(&body)?)
}

/// One fetch + classification for a URL. Total: always returns exactly one
/// of the three variants, never an error.
pub async fn fetch_and_classify(client: &reqwest::Client, url: &str) -> FetchProfileResult {
    match fetch_document(client, url).await {
        Ok(profile) => FetchProfileResult::Ok(profile),
        Err(failure) => {
            debug!("profile fetch failed for {url}: {failure}");
            failure.classify()
        }
    }
}

struct CacheEntry {
    fetched_at: Instant,
    result: FetchProfileResult,
}

/// Per-username revalidation cache so repeated requests within the window
/// do not hammer the origin. Classified outcomes are cached too — a
/// missing document stays missing for the window.
#[derive(Default)]
pub struct ProfileCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ProfileCache {
    fn get_fresh(&self, username: &str) -> Option<FetchProfileResult> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(username)?;
        (entry.fetched_at.elapsed() < REVALIDATE_AFTER).then(|| entry.result.clone())
    }

    fn store(&self, username: &str, result: FetchProfileResult) {
        if let Ok(mut entries) = self.entries.lock() {
            // The catch-all route caches a result for every path it sees,
            // so expired entries must go or the map grows forever.
            entries.retain(|_, entry| entry.fetched_at.elapsed() < REVALIDATE_AFTER);
            entries.insert(
                username.to_string(),
                CacheEntry {
                    fetched_at: Instant::now(),
                    result,
                },
            );
        }
    }
}

/// Resolves a username to a classified profile result, consulting the
/// revalidation cache first. At most one outbound request per call.
pub async fn fetch_profile(
    client: &reqwest::Client,
    cache: &ProfileCache,
    username: &str,
) -> FetchProfileResult {
    if let Some(cached) = cache.get_fresh(username) {
        debug!("profile cache hit for {username}");
        return cached;
    }
    let result = fetch_and_classify(client, &profile_json_url(username)).await;
    cache.store(username, result.clone());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::tests::VOID_PROFILE;
    use axum::routing::get;
    use axum::Router;

    #[test]
    fn test_profile_json_url_follows_repo_convention() {
        assert_eq!(
            profile_json_url("void"),
            "https://raw.githubusercontent.com/void/it-iz-me/main/main.json"
        );
    }

    #[test]
    fn test_resolve_img_url_passes_absolute_urls_through() {
        assert_eq!(
            resolve_img_url("void", "https://example.com/a.png"),
            "https://example.com/a.png"
        );
        assert_eq!(
            resolve_img_url("void", "http://example.com/a.png"),
            "http://example.com/a.png"
        );
    }

    #[test]
    fn test_resolve_img_url_anchors_relative_paths() {
        let expected = "https://raw.githubusercontent.com/void/it-iz-me/main/avatar.png";
        assert_eq!(resolve_img_url("void", "/avatar.png"), expected);
        assert_eq!(resolve_img_url("void", "avatar.png"), expected);
    }

    /// Serves canned bodies on a loopback port so classification can be
    /// exercised without touching the real origin.
    async fn serve_fixture(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_valid_document_classifies_ok_with_exact_fields() {
        let base = serve_fixture(Router::new().route("/p", get(|| async { VOID_PROFILE }))).await;
        let client = reqwest::Client::new();
        let result = fetch_and_classify(&client, &format!("{base}/p")).await;
        let expected: Profile = serde_json::from_str(VOID_PROFILE).unwrap();
        assert_eq!(result, FetchProfileResult::Ok(expected));
    }

    #[tokio::test]
    async fn test_http_404_classifies_not_found() {
        let base = serve_fixture(Router::new()).await;
        let client = reqwest::Client::new();
        let result = fetch_and_classify(&client, &format!("{base}/missing")).await;
        assert_eq!(result, FetchProfileResult::NotFound);
    }

    #[tokio::test]
    async fn test_http_500_folds_into_not_found() {
        let router = Router::new().route(
            "/p",
            get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve_fixture(router).await;
        let client = reqwest::Client::new();
        let result = fetch_and_classify(&client, &format!("{base}/p")).await;
        assert_eq!(result, FetchProfileResult::NotFound);
    }

    #[tokio::test]
    async fn test_truncated_json_classifies_invalid_config() {
        let router = Router::new().route("/p", get(|| async { r#"{"img": "a.png", "img_"# }));
        let base = serve_fixture(router).await;
        let client = reqwest::Client::new();
        let result = fetch_and_classify(&client, &format!("{base}/p")).await;
        assert_eq!(result, FetchProfileResult::InvalidConfig);
    }

    #[tokio::test]
    async fn test_wrong_shape_classifies_invalid_config() {
        let router = Router::new().route("/p", get(|| async { r#"{"hello": "world"}"# }));
        let base = serve_fixture(router).await;
        let client = reqwest::Client::new();
        let result = fetch_and_classify(&client, &format!("{base}/p")).await;
        assert_eq!(result, FetchProfileResult::InvalidConfig);
    }

    #[tokio::test]
    async fn test_oversized_document_classifies_invalid_config() {
        // Valid profile JSON padded past the byte cap: parseable, but too
        // big to be a real document.
        let mut doc: serde_json::Value = serde_json::from_str(VOID_PROFILE).unwrap();
        doc["desc_1"] = serde_json::Value::String("x".repeat(MAX_DOCUMENT_BYTES));
        let body = serde_json::to_string(&doc).unwrap();
        let base = serve_fixture(Router::new().route("/p", get(|| async move { body }))).await;
        let client = reqwest::Client::new();
        let result = fetch_and_classify(&client, &format!("{base}/p")).await;
        assert_eq!(result, FetchProfileResult::InvalidConfig);
    }

    #[tokio::test]
    async fn test_unreachable_origin_classifies_not_found() {
        // Bind then drop a listener so the port is known-closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = reqwest::Client::new();
        let result = fetch_and_classify(&client, &format!("http://{addr}/p")).await;
        assert_eq!(result, FetchProfileResult::NotFound);
    }

    #[tokio::test]
    async fn test_fresh_cache_entry_short_circuits_the_fetch() {
        let cache = ProfileCache::default();
        cache.store("void", FetchProfileResult::InvalidConfig);
        // No server is listening for this username; a cache miss would
        // classify NotFound instead.
        let client = reqwest::Client::new();
        let result = fetch_profile(&client, &cache, "void").await;
        assert_eq!(result, FetchProfileResult::InvalidConfig);
    }

    #[test]
    fn test_stale_cache_entry_is_ignored() {
        let cache = ProfileCache::default();
        {
            let mut entries = cache.entries.lock().unwrap();
            entries.insert(
                "void".to_string(),
                CacheEntry {
                    fetched_at: Instant::now() - (REVALIDATE_AFTER + Duration::from_secs(1)),
                    result: FetchProfileResult::NotFound,
                },
            );
        }
        assert_eq!(cache.get_fresh("void"), None);
    }

    #[test]
    fn test_store_evicts_expired_entries() {
        let cache = ProfileCache::default();
        {
            let mut entries = cache.entries.lock().unwrap();
            for i in 0..100 {
                entries.insert(
                    format!("stale-{i}"),
                    CacheEntry {
                        fetched_at: Instant::now() - (REVALIDATE_AFTER + Duration::from_secs(1)),
                        result: FetchProfileResult::NotFound,
                    },
                );
            }
        }
        cache.store("void", FetchProfileResult::NotFound);
        let entries = cache.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries.contains_key("void"));
    }

    #[test]
    fn test_fresh_entry_is_returned_within_window() {
        let cache = ProfileCache::default();
        cache.store("void", FetchProfileResult::NotFound);
        assert_eq!(cache.get_fresh("void"), Some(FetchProfileResult::NotFound));
    }
}
