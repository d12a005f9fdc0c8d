//! The profile document model.
//!
//! A user's page is driven by a single `main.json` they host in their own
//! repository. The shape is trusted as-is: beyond being well-formed JSON
//! with the expected top-level fields, nothing is validated — a drifted
//! document renders oddly rather than erroring (deliberate; the owner fixes
//! it via the setup guide, not us).

pub mod resolver;

use serde::{Deserialize, Serialize};

/// One tech badge. The wire format accepts either a bare string or
/// `{iconName, visibleName}`; both normalize to this struct at the serde
/// boundary, so downstream code only ever sees one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TechEntryRaw", rename_all = "camelCase")]
pub struct TechEntry {
    /// Icon spec, e.g. `"SI Typescript"` or `"BiReact"`.
    pub icon_name: String,
    /// Label shown next to the icon.
    pub visible_name: String,
}

/// Wire form of a tech entry. A bare string is shorthand for a structured
/// entry with both fields set to that string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TechEntryRaw {
    Structured {
        #[serde(rename = "iconName")]
        icon_name: String,
        #[serde(rename = "visibleName")]
        visible_name: String,
    },
    Bare(String),
}

impl From<TechEntryRaw> for TechEntry {
    fn from(raw: TechEntryRaw) -> Self {
        match raw {
            TechEntryRaw::Structured {
                icon_name,
                visible_name,
            } => TechEntry {
                icon_name,
                visible_name,
            },
            TechEntryRaw::Bare(name) => TechEntry {
                icon_name: name.clone(),
                visible_name: name,
            },
        }
    }
}

/// Call-to-action style: `primary` renders filled, `secondary` outlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaKind {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaButton {
    #[serde(rename = "type")]
    pub kind: CtaKind,
    pub label: String,
    pub href: String,
    /// Optional icon spec; when absent the kind picks the default glyph
    /// (primary → document, secondary → send).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Doubles as the icon spec, e.g. `"SI Github"`.
    #[serde(rename = "type")]
    pub link_type: String,
    pub label: String,
    pub href: String,
}

/// The whole document. All top-level fields are required; the arrays may
/// be empty. Owned by exactly one rendering request and immutable once
/// parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub img: String,
    pub img_alt: String,
    pub heading_bold: String,
    pub heading_light: String,
    pub desc_1: String,
    pub tech_stack: Vec<TechEntry>,
    pub desc_2: String,
    pub desc_3: String,
    pub cta_buttons: Vec<CtaButton>,
    pub social_links: Vec<SocialLink>,
}

/// Outcome of resolving a username to a profile document. Closed set:
/// every consumer matches all three variants, nothing else exists.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchProfileResult {
    Ok(Profile),
    NotFound,
    InvalidConfig,
}
