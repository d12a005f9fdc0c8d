//! HTML views: the profile page, the home page, the setup guide, and the
//! two guidance pages for unresolvable profiles.
//!
//! Pages are composed with `format!` and a strict escaper — every piece of
//! document-supplied text goes through [`escape_html`]. Light/dark styling
//! follows `prefers-color-scheme`.

use crate::icons::{self, registry, IconGlyph};
use crate::profile::{CtaKind, Profile, TechEntry};
use crate::profile::resolver;

const GUIDE_URL: &str = "https://github.com/2xbuild/it-iz-me";

const STYLESHEET: &str = r#"
:root { color-scheme: light dark; }
* { box-sizing: border-box; }
body {
  margin: 0; background: #fafafa; color: #525252;
  font: 16px/1.6 ui-sans-serif, system-ui, sans-serif;
  display: flex; min-height: 100vh; align-items: center; justify-content: center;
}
main { width: 100%; max-width: 42rem; padding: 5rem 1rem; }
h1 { font-size: 2rem; font-weight: 700; letter-spacing: -0.025em; color: #262626; margin: 0 0 1rem; }
h1 .light { font-weight: 400; color: #737373; }
.avatar { width: 80px; height: 80px; border-radius: 9999px; border: 2px solid #d4d4d4;
  background: #f5f5f5; object-fit: cover; display: block; margin-bottom: 2rem; }
.avatar-missing { background: #d4d4d4; }
.pills { display: inline-flex; flex-wrap: wrap; gap: 0.5rem; }
.pill { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.25rem 0.625rem;
  font-size: 14px; font-weight: 500; color: #171717; background: #f5f5f5;
  border: 1px solid #d4d4d4; border-radius: 6px; }
.icon { width: 1rem; height: 1rem; flex-shrink: 0; }
.rule { border-top: 1px solid #e5e5e5; margin-top: 1.25rem; padding-top: 1rem; }
.ctas { margin-top: 1.25rem; display: flex; flex-wrap: wrap; gap: 0.75rem; }
.btn { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.625rem 1.25rem;
  border-radius: 8px; font-weight: 500; text-decoration: none; }
.btn-primary { background: #171717; color: #fff; }
.btn-secondary { background: #fff; color: #171717; border: 1px solid #d4d4d4; }
.socials { margin-top: 2.5rem; display: flex; gap: 1.5rem; color: #171717; }
.socials a { color: inherit; }
.socials .icon { width: 1.25rem; height: 1.25rem; }
.footer { margin-top: 3rem; text-align: center; font-size: 14px; color: #737373; }
a { color: #3b82f6; }
code { background: #e5e5e5; border-radius: 4px; padding: 0 0.25rem; }
.center { text-align: center; }
table { border-collapse: collapse; width: 100%; font-size: 14px; }
th, td { border: 1px solid #d4d4d4; padding: 0.5rem; text-align: left; vertical-align: top; }
pre { background: #f5f5f5; border: 1px solid #d4d4d4; border-radius: 6px;
  padding: 1rem; overflow-x: auto; font-size: 13px; }
@media (prefers-color-scheme: dark) {
  body { background: #0a0a0a; color: #d4d4d4; }
  h1 { color: #fafafa; }
  h1 .light { color: #a3a3a3; }
  .avatar { border-color: #525252; background: #262626; }
  .avatar-missing { background: #525252; }
  .pill { color: #fafafa; background: #262626; border-color: #525252; }
  .rule { border-color: #404040; }
  .btn-primary { background: #fafafa; color: #171717; }
  .btn-secondary { background: #262626; color: #fafafa; border-color: #525252; }
  .socials { color: #fafafa; }
  code { background: #404040; }
  th, td { border-color: #525252; }
  pre { background: #171717; border-color: #525252; }
}
"#;

/// Escapes text for interpolation into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn icon_svg(glyph: &IconGlyph) -> String {
    format!(
        r#"<svg class="icon" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="{}"/></svg>"#,
        glyph.path
    )
}

/// The person's name for page titles: `heading_bold` with a leading
/// "hi there, i'm" greeting stripped (case-insensitive), falling back to
/// the username when nothing usable remains.
pub fn display_name<'a>(heading_bold: &'a str, username: &'a str) -> &'a str {
    fn strip_ci<'s>(s: &'s str, prefix: &str) -> Option<&'s str> {
        s.get(..prefix.len())
            .filter(|p| p.eq_ignore_ascii_case(prefix))
            .map(|_| &s[prefix.len()..])
    }
    // The greeting only counts when whitespace separates "i'm" from the
    // name; "i'mvoid" is not a greeting.
    let stripped = strip_ci(heading_bold, "hi there,")
        .and_then(|rest| strip_ci(rest.trim_start(), "i'm"))
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim);
    match stripped {
        Some(name) if !name.is_empty() => name,
        Some(_) => username,
        None if heading_bold.trim().is_empty() => username,
        None => heading_bold,
    }
}

fn page_shell(title: &str, description: &str, og_image: Option<&str>, body: &str) -> String {
    let og_meta = og_image
        .map(|url| {
            format!(
                concat!(
                    "<meta property=\"og:image\" content=\"{url}\">",
                    "<meta name=\"twitter:card\" content=\"summary_large_image\">",
                    "<meta name=\"twitter:image\" content=\"{url}\">"
                ),
                url = escape_html(url)
            )
        })
        .unwrap_or_default();
    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{title}</title>\
         <meta name=\"description\" content=\"{description}\">\
         <meta property=\"og:title\" content=\"{title}\">\
         <meta property=\"og:description\" content=\"{description}\">\
         {og_meta}<style>{STYLESHEET}</style></head><body><main>{body}</main></body></html>",
        title = escape_html(title),
        description = escape_html(description),
    )
}

fn tech_pill(tech: &TechEntry) -> String {
    let glyph = icons::resolve_icon(&tech.icon_name).unwrap_or(&registry::CODE);
    format!(
        r#"<span class="pill">{}{}</span>"#,
        icon_svg(glyph),
        escape_html(&tech.visible_name)
    )
}

fn cta_button(cta: &crate::profile::CtaButton) -> String {
    let glyph = cta
        .icon
        .as_deref()
        .filter(|spec| !spec.trim().is_empty())
        .and_then(icons::resolve_icon)
        .unwrap_or(match cta.kind {
            CtaKind::Primary => &registry::FILE,
            CtaKind::Secondary => &registry::SEND,
        });
    let class = match cta.kind {
        CtaKind::Primary => "btn btn-primary",
        CtaKind::Secondary => "btn btn-secondary",
    };
    format!(
        r#"<a class="{class}" href="{}">{}{}</a>"#,
        escape_html(&cta.href),
        icon_svg(glyph),
        escape_html(&cta.label)
    )
}

fn social_link(link: &crate::profile::SocialLink) -> String {
    let glyph = icons::resolve_icon(&link.link_type).unwrap_or(&registry::CODE);
    let target = if link.href.starts_with("mailto:") {
        ""
    } else {
        r#" target="_blank" rel="noopener noreferrer""#
    };
    format!(
        r#"<a href="{}" aria-label="{}"{target}>{}</a>"#,
        escape_html(&link.href),
        escape_html(&link.label),
        icon_svg(glyph)
    )
}

fn profile_section(profile: &Profile) -> String {
    let pills: String = profile.tech_stack.iter().map(tech_pill).collect();
    let ctas: String = profile.cta_buttons.iter().map(cta_button).collect();
    let socials: String = profile.social_links.iter().map(social_link).collect();
    format!(
        r#"<img class="avatar" src="{img}" alt="{img_alt}" width="80" height="80"
 onerror="this.onerror=null;this.src='data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22/%3E';this.classList.add('avatar-missing')">
<h1>{heading_bold} <span class="light">{heading_light}</span></h1>
<p>{desc_1}</p>
<span class="pills">{pills}</span>
<p>{desc_2}</p>
<div class="rule"><p>{desc_3}</p>
<div class="ctas">{ctas}</div></div>
<div class="socials">{socials}</div>"#,
        img = escape_html(&profile.img),
        img_alt = escape_html(&profile.img_alt),
        heading_bold = escape_html(&profile.heading_bold),
        heading_light = escape_html(&profile.heading_light),
        desc_1 = escape_html(&profile.desc_1),
        desc_2 = escape_html(&profile.desc_2),
        desc_3 = escape_html(&profile.desc_3),
    )
}

/// `GET /<username>` — the interactive profile page.
pub fn profile_page(profile: &Profile, username: &str, base_url: &str) -> String {
    // The page displays img resolved against the user's repo; the raw value
    // may be relative.
    let mut shown = profile.clone();
    shown.img = resolver::resolve_img_url(username, &profile.img);
    let title = format!("Wanna hire {}?", display_name(&profile.heading_bold, username));
    let description = if profile.desc_2.is_empty() {
        &profile.desc_3
    } else {
        &profile.desc_2
    };
    let og_image = format!("{base_url}/api/og/{username}");
    page_shell(
        &title,
        description,
        Some(&og_image),
        &profile_section(&shown),
    )
}

/// `GET /` — the home profile plus a "create your own" footer.
pub fn home_page(profile: &Profile, username: &str, base_url: &str) -> String {
    let mut shown = profile.clone();
    shown.img = resolver::resolve_img_url(username, &profile.img);
    let body = format!(
        r#"{}<p class="footer">Create your own page. <a href="{GUIDE_URL}" target="_blank" rel="noopener noreferrer">here</a>.</p>"#,
        profile_section(&shown)
    );
    let og_image = format!("{base_url}/api/og/{username}");
    page_shell("That's me", "Everything you need to know about me.", Some(&og_image), &body)
}

/// Guidance page for a missing or unreachable document.
pub fn not_found_page() -> String {
    let body = format!(
        r#"<div class="center"><h1>Page not found</h1>
<p>Wanna set up your page? <a href="{GUIDE_URL}" target="_blank" rel="noopener noreferrer">Here is the guide</a></p></div>"#
    );
    page_shell("Not found", "Page not found", None, &body)
}

/// Guidance page for a reachable but unparseable document.
pub fn invalid_config_page() -> String {
    let body = format!(
        r#"<div class="center"><h1>Incorrect config</h1>
<p>Your <code>main.json</code> is invalid or broken. Follow the <a href="{GUIDE_URL}" target="_blank" rel="noopener noreferrer">guide</a> to fix it.</p></div>"#
    );
    page_shell("Not found", "Incorrect config", None, &body)
}

const DOC_FIELDS: &[(&str, bool, &str)] = &[
    ("img", true, "Profile image. Absolute URL, or a path relative to your it-iz-me repository root (e.g. /avatar.png)."),
    ("img_alt", true, "Accessibility description for the image."),
    ("heading_bold", true, "Primary heading. Start it with \"hi there, i'm <name>\" to get a personalized page title."),
    ("heading_light", true, "Secondary heading rendered in a lighter weight."),
    ("desc_1", true, "First body line, shown before the tech badges (also on the preview image)."),
    ("tech_stack", true, "Array of badges. Each entry is a bare name (\"Rust\") or {iconName, visibleName}. Icon specs: \"SI <name>\" for Simple Icons, \"BI <name>\" for Boxicons; SI is the default. Spell a literal dot as \"dot\" (\"SI Nextdotjs\")."),
    ("desc_2", true, "Second body line."),
    ("desc_3", true, "Closing body line, shown above the buttons."),
    ("cta_buttons", true, "Array of {type, label, href, icon?}. type is \"primary\" or \"secondary\"; icon is an optional icon spec."),
    ("social_links", true, "Array of {type, label, href}; type doubles as the icon spec."),
];

const DOC_EXAMPLE: &str = r#"{
  "img": "/avatar.png",
  "img_alt": "Void's profile photo",
  "heading_bold": "hi there, i'm void",
  "heading_light": ": a developer who builds in the dark.",
  "desc_1": "i build stuff with",
  "tech_stack": [
    { "iconName": "SI Typescript", "visibleName": "TypeScript" },
    { "iconName": "SI Nextdotjs", "visibleName": "Next.js" },
    "Rust"
  ],
  "desc_2": "I craft clean interfaces and reliable systems.",
  "desc_3": "Looking for a developer who ships? Let's talk.",
  "cta_buttons": [
    { "type": "primary", "label": "View Portfolio", "href": "https://void.dev" },
    { "type": "secondary", "label": "Get in touch", "href": "mailto:void@example.com", "icon": "BI Send" }
  ],
  "social_links": [
    { "type": "SI Github", "label": "GitHub", "href": "https://github.com/void" },
    { "type": "SI X", "label": "X", "href": "https://x.com/void" }
  ]
}"#;

/// `GET /docs` — the setup guide.
pub fn docs_page() -> String {
    let rows: String = DOC_FIELDS
        .iter()
        .map(|(field, required, description)| {
            format!(
                "<tr><td><code>{field}</code></td><td>{}</td><td>{}</td></tr>",
                if *required { "yes" } else { "no" },
                escape_html(description)
            )
        })
        .collect();
    let body = format!(
        r#"<h1>Set up your page</h1>
<p>Create a public repository named <code>it-iz-me</code> on GitHub and commit a
<code>main.json</code> on the <code>main</code> branch. Your page then lives at
<code>/&lt;your-username&gt;</code>.</p>
<table><tr><th>Field</th><th>Required</th><th>Description</th></tr>{rows}</table>
<h1>Example</h1>
<pre>{example}</pre>
<p>Broken or missing documents degrade to a guidance page, so you can iterate
safely — changes are picked up within a minute.</p>"#,
        example = escape_html(DOC_EXAMPLE)
    );
    page_shell(
        "Portfolio Setup Guide",
        "Complete guide to set up your profile page: fields, optional values, and examples.",
        None,
        &body,
    )
}
