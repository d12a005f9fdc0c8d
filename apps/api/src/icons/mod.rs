//! Icon-spec resolution.
//!
//! A profile document names icons with short free-text specs: an optional
//! two-letter family prefix (`SI` = Simple Icons, `BI` = Boxicons,
//! case-insensitive, optionally followed by a space) and an icon name.
//! `"SI Github"`, `"SIGithub"`, `"SiGithub"` and `"Github"` all resolve to
//! the same glyph; a missing prefix defaults to Simple Icons. Upstream names
//! spell a literal `.` as `dot`, so next.js is `"SI Nextdotjs"`.
//!
//! Resolution never fails loudly — an unknown name returns `None` and the
//! caller substitutes a context-appropriate fallback glyph.

pub mod registry;

pub use registry::IconGlyph;

/// The two icon families a spec can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFamily {
    Si,
    Bi,
}

impl IconFamily {
    fn tag(self) -> &'static str {
        match self {
            IconFamily::Si => "Si",
            IconFamily::Bi => "Bi",
        }
    }
}

/// Splits a spec into family and raw name. `None` when the name is empty
/// after stripping the prefix and surrounding whitespace.
fn parse_spec(spec: &str) -> Option<(IconFamily, &str)> {
    let s = spec.trim();
    if s.is_empty() {
        return None;
    }
    let (family, rest) = match s.get(..2) {
        Some(p) if p.eq_ignore_ascii_case("si") => (IconFamily::Si, &s[2..]),
        Some(p) if p.eq_ignore_ascii_case("bi") => (IconFamily::Bi, &s[2..]),
        _ => return Some((IconFamily::Si, s)),
    };
    let name = rest.trim();
    if name.is_empty() {
        return None;
    }
    Some((family, name))
}

/// Rebuilds the registry key: family tag + first char uppercased + the rest
/// lowercased, matching the upstream export naming (`SiGithub`, `BiStar`).
fn canonical_key(family: IconFamily, name: &str) -> String {
    let mut key = String::with_capacity(2 + name.len());
    key.push_str(family.tag());
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        key.extend(first.to_uppercase());
        key.push_str(chars.as_str().to_lowercase().as_str());
    }
    key
}

/// Resolves an icon spec to a glyph, or `None` on an invalid spec or a
/// registry miss.
pub fn resolve_icon(spec: &str) -> Option<&'static IconGlyph> {
    let (family, name) = parse_spec(spec)?;
    registry::lookup(&canonical_key(family, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_space_and_case_are_equivalent() {
        let a = resolve_icon("SI Github").unwrap();
        let b = resolve_icon("SiGithub").unwrap();
        let c = resolve_icon("Github").unwrap();
        let d = resolve_icon("si github").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
        assert_eq!(a.name, "SiGithub");
    }

    #[test]
    fn test_default_family_is_simple_icons() {
        assert_eq!(resolve_icon("Rust").unwrap().name, "SiRust");
    }

    #[test]
    fn test_bi_prefix_selects_boxicons() {
        assert_eq!(resolve_icon("BI Star").unwrap().name, "BiStar");
        assert_eq!(resolve_icon("BiStar").unwrap().name, "BiStar");
    }

    #[test]
    fn test_dot_convention() {
        assert_eq!(resolve_icon("SI Nextdotjs").unwrap().name, "SiNextdotjs");
    }

    #[test]
    fn test_empty_and_prefix_only_specs_fail() {
        assert!(resolve_icon("").is_none());
        assert!(resolve_icon("   ").is_none());
        assert!(resolve_icon("SI ").is_none());
        assert!(resolve_icon("BI").is_none());
    }

    #[test]
    fn test_unknown_name_misses_quietly() {
        assert!(resolve_icon("SI Definitelynotathing").is_none());
    }

    #[test]
    fn test_shouty_names_normalize() {
        assert_eq!(resolve_icon("GITHUB").unwrap().name, "SiGithub");
        assert_eq!(resolve_icon("SI TYPESCRIPT").unwrap().name, "SiTypescript");
    }

    #[test]
    fn test_canonical_key_shape() {
        assert_eq!(canonical_key(IconFamily::Si, "gitHub"), "SiGithub");
        assert_eq!(canonical_key(IconFamily::Bi, "SEND"), "BiSend");
    }
}
