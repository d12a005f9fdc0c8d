//! Social-preview image adapter.
//!
//! Composes a fixed 1200×630 card as an SVG document and rasterizes it
//! through usvg/resvg into a PNG-encoded `tiny_skia` pixmap. The palette is
//! a pure function of the current UTC hour (dark 18:00–05:59, light
//! otherwise). Any failure anywhere — avatar fetch, SVG parse, encoding —
//! degrades to the fixed "Not found" card; this route never propagates an
//! error.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{Timelike, Utc};
use reqwest::header::CONTENT_TYPE;
use resvg::usvg::fontdb;
use resvg::{tiny_skia, usvg};
use thiserror::Error;
use tracing::warn;

use crate::icons::{self, registry};
use crate::profile::resolver;
use crate::profile::{Profile, TechEntry};
use crate::render::page::escape_html;

pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;

const PAD: f32 = 64.0;

/// One of the two fixed color schemes.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub text_bold: &'static str,
    pub text_light: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub pill_bg: &'static str,
    pub pill_text: &'static str,
    pub icon: &'static str,
    pub avatar_bg: &'static str,
    pub avatar_glyph: &'static str,
}

pub static LIGHT: Palette = Palette {
    bg: "#fafafa",
    text_bold: "#262626",
    text_light: "#737373",
    text_muted: "#525252",
    border: "#d4d4d4",
    pill_bg: "#f5f5f5",
    pill_text: "#171717",
    icon: "#737373",
    avatar_bg: "#e5e5e5",
    avatar_glyph: "#a3a3a3",
};

pub static DARK: Palette = Palette {
    bg: "#0a0a0a",
    text_bold: "#fafafa",
    text_light: "#a3a3a3",
    text_muted: "#d4d4d4",
    border: "#525252",
    pill_bg: "#262626",
    pill_text: "#fafafa",
    icon: "#a3a3a3",
    avatar_bg: "#404040",
    avatar_glyph: "#737373",
};

/// Dark between 18:00 and 05:59 UTC inclusive, light otherwise. Not
/// user-configurable.
pub fn palette_for_hour(hour: u32) -> &'static Palette {
    if hour >= 18 || hour < 6 {
        &DARK
    } else {
        &LIGHT
    }
}

fn current_palette() -> &'static Palette {
    palette_for_hour(Utc::now().hour())
}

/// Why rasterization failed. Caught at the route boundary and replaced by
/// the fallback card, never surfaced.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("svg parse: {0}")]
    Svg(#[from] usvg::Error),

    #[error("pixmap allocation failed")]
    Pixmap,

    #[error("png encode: {0}")]
    Encode(String),
}

/// Fetches the avatar as raw bytes and re-encodes it as a data URL the SVG
/// can embed. Always revalidates; every failure is a silent `None` (the
/// card falls back to the person glyph).
async fn fetch_avatar_data_url(client: &reqwest::Client, url: &str) -> Option<String> {
    let response = client.get(url).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("image/png")
        .to_string();
    let bytes = response.bytes().await.ok()?;
    Some(format!("data:{content_type};base64,{}", BASE64.encode(&bytes)))
}

/// Clips to a character budget with an ellipsis. Wide enough budgets that
/// per-glyph metrics are not worth carrying.
fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn avatar_fragment(palette: &Palette, avatar: Option<&str>) -> String {
    let cy = 205.0;
    let top = cy - 40.0;
    match avatar {
        Some(data_url) => format!(
            r#"<clipPath id="avatar"><circle cx="{cx}" cy="{cy}" r="40"/></clipPath>
<image href="{href}" x="{x}" y="{top}" width="80" height="80" preserveAspectRatio="xMidYMid slice" clip-path="url(#avatar)"/>
<circle cx="{cx}" cy="{cy}" r="40" fill="none" stroke="{border}" stroke-width="2"/>"#,
            cx = PAD + 40.0,
            x = PAD,
            href = escape_html(data_url),
            border = palette.border,
        ),
        None => format!(
            r#"<circle cx="{cx}" cy="{cy}" r="40" fill="{bg}" stroke="{border}" stroke-width="2"/>
<path d="{glyph}" fill="{color}" transform="translate({gx},{gy}) scale(2)"/>"#,
            cx = PAD + 40.0,
            bg = palette.avatar_bg,
            border = palette.border,
            glyph = registry::USER.path,
            color = palette.avatar_glyph,
            gx = PAD + 40.0 - 24.0,
            gy = cy - 24.0,
        ),
    }
}

fn pill_fragment(tech: &TechEntry, palette: &Palette, x: f32, y: f32, width: f32) -> String {
    let glyph = icons::resolve_icon(&tech.icon_name).unwrap_or(&registry::CODE);
    format!(
        r#"<rect x="{x}" y="{y}" width="{width}" height="33" rx="6" fill="{pill_bg}" stroke="{border}"/>
<path d="{path}" fill="{icon}" transform="translate({ix},{iy}) scale(0.6667)"/>
<text x="{tx}" y="{ty}" font-size="14" font-weight="500" fill="{text}">{label}</text>"#,
        pill_bg = palette.pill_bg,
        border = palette.border,
        path = glyph.path,
        icon = palette.icon,
        ix = x + 10.0,
        iy = y + 8.5,
        tx = x + 34.0,
        ty = y + 22.0,
        text = palette.pill_text,
        label = escape_html(&clip(&tech.visible_name, 24)),
    )
}

/// Rows of tech pills, wrapped within the card width and capped at two rows.
fn pills_fragment(tech_stack: &[TechEntry], palette: &Palette) -> String {
    // Approximate text advance at 14px; the pill is padding + icon + gap + label.
    let mut out = String::new();
    let mut x = PAD;
    let mut y = 400.0;
    for tech in tech_stack {
        let label_chars = clip(&tech.visible_name, 24).chars().count() as f32;
        let width = 44.0 + label_chars * 7.7;
        if x + width > OG_WIDTH as f32 - PAD {
            x = PAD;
            y += 44.0;
            if y > 490.0 {
                break;
            }
        }
        out.push_str(&pill_fragment(tech, palette, x, y, width));
        x += width + 10.0;
    }
    out
}

fn build_profile_svg(profile: &Profile, palette: &Palette, avatar: Option<&str>) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<rect width="{w}" height="{h}" fill="{bg}"/>
{avatar}
<text x="{pad}" y="325" font-size="48" letter-spacing="-1"><tspan font-weight="700" fill="{bold}">{heading_bold}</tspan><tspan font-weight="400" fill="{light}"> {heading_light}</tspan></text>
<text x="{pad}" y="372" font-size="22" fill="{muted}">{desc}</text>
{pills}
</svg>"#,
        w = OG_WIDTH,
        h = OG_HEIGHT,
        bg = palette.bg,
        pad = PAD,
        avatar = avatar_fragment(palette, avatar),
        bold = palette.text_bold,
        light = palette.text_light,
        heading_bold = escape_html(&clip(&profile.heading_bold, 38)),
        heading_light = escape_html(&clip(&profile.heading_light, 42)),
        muted = palette.text_muted,
        desc = escape_html(&clip(&profile.desc_1, 88)),
        pills = pills_fragment(&profile.tech_stack, palette),
    )
}

fn build_fallback_svg() -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<rect width="{w}" height="{h}" fill="#0a0a0a"/>
<text x="{cx}" y="326" font-size="32" fill="#ffffff" text-anchor="middle">Not found</text>
</svg>"##,
        w = OG_WIDTH,
        h = OG_HEIGHT,
        cx = OG_WIDTH / 2,
    )
}

fn rasterize(svg: &str, fonts: &Arc<fontdb::Database>) -> Result<Vec<u8>, RenderError> {
    let options = usvg::Options {
        font_family: "sans-serif".to_string(),
        fontdb: Arc::clone(fonts),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(svg, &options)?;
    let mut pixmap =
        tiny_skia::Pixmap::new(OG_WIDTH, OG_HEIGHT).ok_or(RenderError::Pixmap)?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}

/// The fixed "Not found" card. Total: if even the fallback SVG fails to
/// rasterize, a solid fill is encoded instead.
pub fn fallback_image(fonts: &Arc<fontdb::Database>) -> Vec<u8> {
    match rasterize(&build_fallback_svg(), fonts) {
        Ok(png) => png,
        Err(err) => {
            warn!("fallback card rasterization failed: {err}");
            solid_fill_png()
        }
    }
}

fn solid_fill_png() -> Vec<u8> {
    let Some(mut pixmap) = tiny_skia::Pixmap::new(OG_WIDTH, OG_HEIGHT) else {
        return Vec::new();
    };
    pixmap.fill(tiny_skia::Color::from_rgba8(10, 10, 10, 255));
    pixmap.encode_png().unwrap_or_default()
}

/// Renders the preview card for a resolved profile. Fetches the avatar as
/// embedded bytes first; every failure path converges on the fallback card.
pub async fn profile_image(
    client: &reqwest::Client,
    fonts: &Arc<fontdb::Database>,
    profile: &Profile,
    username: &str,
) -> Vec<u8> {
    let palette = current_palette();
    let avatar_url = resolver::resolve_img_url(username, &profile.img);
    let avatar = fetch_avatar_data_url(client, &avatar_url).await;
    let svg = build_profile_svg(profile, palette, avatar.as_deref());
    match rasterize(&svg, fonts) {
        Ok(png) => png,
        Err(err) => {
            warn!("preview render failed for {username}: {err}");
            fallback_image(fonts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::tests::VOID_PROFILE;
    use axum::routing::get;
    use axum::Router;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn void_profile() -> Profile {
        serde_json::from_str(VOID_PROFILE).unwrap()
    }

    fn empty_fonts() -> Arc<fontdb::Database> {
        Arc::new(fontdb::Database::new())
    }

    #[test]
    fn test_palette_boundaries_by_utc_hour() {
        assert_eq!(palette_for_hour(17), &LIGHT);
        assert_eq!(palette_for_hour(18), &DARK);
        assert_eq!(palette_for_hour(5), &DARK);
        assert_eq!(palette_for_hour(6), &LIGHT);
    }

    #[test]
    fn test_palette_covers_midnight_and_noon() {
        assert_eq!(palette_for_hour(0), &DARK);
        assert_eq!(palette_for_hour(23), &DARK);
        assert_eq!(palette_for_hour(12), &LIGHT);
    }

    #[test]
    fn test_profile_svg_contains_document_text() {
        let svg = build_profile_svg(&void_profile(), &LIGHT, None);
        assert!(svg.contains("hi there, i&#39;m void"));
        assert!(svg.contains("TypeScript"));
        assert!(svg.contains(LIGHT.bg));
    }

    #[test]
    fn test_profile_svg_without_avatar_uses_person_glyph() {
        let svg = build_profile_svg(&void_profile(), &DARK, None);
        assert!(svg.contains(registry::USER.path));
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn test_profile_svg_embeds_avatar_data_url() {
        let svg = build_profile_svg(
            &void_profile(),
            &DARK,
            Some("data:image/png;base64,AAAA"),
        );
        assert!(svg.contains("data:image/png;base64,AAAA"));
        assert!(!svg.contains(registry::USER.path));
    }

    #[test]
    fn test_hostile_document_text_is_escaped() {
        let mut profile = void_profile();
        profile.heading_bold = r#"</text><script>"#.into();
        profile.desc_1 = "a & b < c".into();
        let svg = build_profile_svg(&profile, &LIGHT, None);
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("a &amp; b &lt; c"));
    }

    #[test]
    fn test_clip_budget() {
        assert_eq!(clip("short", 10), "short");
        let clipped = clip("a very long visible name indeed", 10);
        assert_eq!(clipped.chars().count(), 10);
        assert!(clipped.ends_with('…'));
    }

    #[test]
    fn test_fallback_card_says_not_found_and_encodes() {
        let svg = build_fallback_svg();
        assert!(svg.contains("Not found"));
        let png = fallback_image(&empty_fonts());
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_profile_card_rasterizes_without_fonts() {
        // With an empty font database the text is dropped but the card is
        // still a valid PNG of the fixed size.
        let svg = build_profile_svg(&void_profile(), &LIGHT, None);
        let png = rasterize(&svg, &empty_fonts()).unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_solid_fill_last_resort_is_a_png() {
        let png = solid_fill_png();
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_many_pills_stay_inside_the_card() {
        let mut profile = void_profile();
        profile.tech_stack = (0..40)
            .map(|i| TechEntry {
                icon_name: "Rust".into(),
                visible_name: format!("Technology number {i}"),
            })
            .collect();
        let svg = build_profile_svg(&profile, &LIGHT, None);
        // Rows are capped at two wraps; nothing may be placed below y=488.
        assert!(svg.contains(r#"y="488""#));
        assert!(!svg.contains(r#"y="532""#));
        assert!(rasterize(&svg, &empty_fonts()).is_ok());
    }

    #[tokio::test]
    async fn test_avatar_fetch_builds_data_url_with_content_type() {
        let router = Router::new().route(
            "/a.png",
            get(|| async {
                (
                    [("content-type", "image/jpeg")],
                    bytes::Bytes::from_static(&[1, 2, 3]),
                )
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        let client = reqwest::Client::new();
        let data_url = fetch_avatar_data_url(&client, &format!("http://{addr}/a.png"))
            .await
            .unwrap();
        assert_eq!(data_url, format!("data:image/jpeg;base64,{}", BASE64.encode([1u8, 2, 3])));
    }

    #[tokio::test]
    async fn test_avatar_fetch_failure_is_silent() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = reqwest::Client::new();
        assert!(fetch_avatar_data_url(&client, &format!("http://{addr}/a.png"))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_profile_image_is_total_even_when_avatar_is_unreachable() {
        let mut profile = void_profile();
        profile.img = "http://127.0.0.1:1/nope.png".into();
        let client = reqwest::Client::new();
        let png = profile_image(&client, &empty_fonts(), &profile, "void").await;
        assert_eq!(&png[..8], &PNG_MAGIC);
    }
}
