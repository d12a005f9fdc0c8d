//! Static icon-glyph table for the two supported icon families.
//!
//! Keys follow the canonical `Si`/`Bi` PascalCase convention produced by
//! [`super::canonical_key`]. Paths are simplified single-path 24×24 marks
//! derived from the upstream Simple Icons / Boxicons sets — close enough to
//! read at badge size. The table is sorted by key; lookup is binary search.
//!
//! Coverage is intentionally partial. Every call site falls back to a
//! generic glyph on a miss, so adding an icon is just inserting a row in
//! sort order.

/// A resolved icon: canonical key plus SVG path data in a 24×24 viewbox.
#[derive(Debug, PartialEq, Eq)]
pub struct IconGlyph {
    pub name: &'static str,
    pub path: &'static str,
}

const BI_CODE_PATH: &str = "M8.7 6.3 3 12l5.7 5.7 1.4-1.4L5.8 12l4.3-4.3zm6.6 0-1.4 1.4 4.3 4.3-4.3 4.3 1.4 1.4L21 12z";
const BI_FILE_PATH: &str = "M6 2h9l5 5v15H6zm8 1.5V8h4.5zM8 12h8v1.5H8zm0 4h8v1.5H8z";
const BI_SEND_PATH: &str = "M2.8 3.2 21.2 12 2.8 20.8l2.4-7.3 8.3-1.5-8.3-1.5z";
const BI_USER_PATH: &str = "M12 4a4 4 0 1 1 0 8 4 4 0 0 1 0-8zm0 10c4.4 0 8 2.2 8 5v1H4v-1c0-2.8 3.6-5 8-5z";

/// Generic code-brackets glyph, the fallback for tech badges and
/// social links.
pub static CODE: IconGlyph = IconGlyph {
    name: "BiCode",
    path: BI_CODE_PATH,
};

/// Document glyph, the default for primary call-to-action buttons.
pub static FILE: IconGlyph = IconGlyph {
    name: "BiFile",
    path: BI_FILE_PATH,
};

/// Paper-plane glyph, the default for secondary call-to-action buttons.
pub static SEND: IconGlyph = IconGlyph {
    name: "BiSend",
    path: BI_SEND_PATH,
};

/// Person silhouette, the avatar placeholder in the preview image.
pub static USER: IconGlyph = IconGlyph {
    name: "BiUser",
    path: BI_USER_PATH,
};

static GLYPHS: [IconGlyph; 42] = [
    IconGlyph { name: "BiCode", path: BI_CODE_PATH },
    IconGlyph { name: "BiEnvelope", path: "M3 5h18v14H3zm2 2.4V17h14V7.4l-7 5.2zM5.6 7l6.4 4.8L18.4 7z" },
    IconGlyph { name: "BiFile", path: BI_FILE_PATH },
    IconGlyph { name: "BiHeart", path: "M12 21 4.3 13.3a5 5 0 0 1 7-7.1l.7.7.7-.7a5 5 0 0 1 7 7.1z" },
    IconGlyph { name: "BiLinkExternal", path: "M14 3h7v7h-2V6.4l-8.3 8.3-1.4-1.4L17.6 5H14zM5 5h6v2H7v10h10v-4h2v6H5z" },
    IconGlyph { name: "BiSend", path: BI_SEND_PATH },
    IconGlyph { name: "BiStar", path: "m12 2 3.1 6.3 6.9 1-5 4.9 1.2 6.8L12 17.8 5.8 21l1.2-6.8-5-4.9 6.9-1z" },
    IconGlyph { name: "BiUser", path: BI_USER_PATH },
    IconGlyph { name: "SiCplusplus", path: "M12 2 3.3 7v10L12 22l8.7-5V7zm0 2.3 6.7 3.9v7.6L12 19.7l-6.7-3.9V8.2zm0 2.7a5 5 0 1 0 4.3 7.5l-1.7-1a3 3 0 1 1 0-4l1.7-1A5 5 0 0 0 12 7zm4.5 3.5v1h-1v1h1v1h1v-1h1v-1h-1v-1zm3.2 0v1h-1v1h1v1h1v-1h1v-1h-1v-1z" },
    IconGlyph { name: "SiCss", path: "M3 3h18l-1.6 18L12 23l-7.4-2zm14.7 4.5H7.1l.2 2.2h8l-.5 5.7-2.8.8-2.8-.8-.2-1.9H6.8l.3 3.6 4.9 1.4 4.9-1.4.7-7.4h-7l-.2-2.2h7.5z" },
    IconGlyph { name: "SiDiscord", path: "M19.3 5.3A17 17 0 0 0 15 4l-.2.4a14 14 0 0 1 4 1.9 15 15 0 0 0-13.6 0 14 14 0 0 1 4-1.9L9 4a17 17 0 0 0-4.3 1.3C2.7 9.2 2.2 13 2.4 16.7A17 17 0 0 0 7.6 19l.9-1.5-1.6-.8.4-.3a12 12 0 0 0 9.4 0l.4.3-1.6.8.9 1.5a17 17 0 0 0 5.2-2.6c.3-4-.4-7.6-2.3-11.1zM9.7 14.4c-.8 0-1.5-.8-1.5-1.7s.7-1.7 1.5-1.7 1.5.8 1.5 1.7-.7 1.7-1.5 1.7zm4.6 0c-.8 0-1.5-.8-1.5-1.7s.7-1.7 1.5-1.7 1.5.8 1.5 1.7-.7 1.7-1.5 1.7z" },
    IconGlyph { name: "SiDocker", path: "M13.2 4.5h2.3v2.3h-2.3zM10.3 7.2h2.3v2.3h-2.3zm2.9 0h2.3v2.3h-2.3zM7.4 9.9h2.3v2.3H7.4zm2.9 0h2.3v2.3h-2.3zm2.9 0h2.3v2.3h-2.3zm2.9 0h2.3v2.3h-2.3zm4.2-.8c.7.4 1.6.5 2.3.3-.1.9-.6 1.7-1.4 2.1.1 4.6-3 8.3-8.6 8.3-3.8 0-6.9-1.7-8.3-5.1-.6-1.3-.8-2.7-.3-4h16.4c.3-.8 1-1.4 1.9-1.6z" },
    IconGlyph { name: "SiGit", path: "m21.6 11-8.6-8.6a1.4 1.4 0 0 0-2 0L9.2 4.2l2.3 2.3a1.7 1.7 0 0 1 2.1 2.1l2.2 2.2a1.7 1.7 0 1 1-1 1l-2-2v5.4a1.7 1.7 0 1 1-1.4-.1V9.6a1.7 1.7 0 0 1-.9-2.2L8.2 5.1 2.4 11a1.4 1.4 0 0 0 0 2l8.6 8.6a1.4 1.4 0 0 0 2 0l8.6-8.6a1.4 1.4 0 0 0 0-2z" },
    IconGlyph { name: "SiGithub", path: "M12 2a10 10 0 0 0-3.2 19.5c.5.1.7-.2.7-.5v-1.7c-2.8.6-3.4-1.2-3.4-1.2-.5-1.1-1.1-1.4-1.1-1.4-.9-.6.1-.6.1-.6 1 .1 1.5 1 1.5 1 .9 1.5 2.3 1.1 2.9.8.1-.6.3-1.1.6-1.3-2.2-.3-4.6-1.1-4.6-5 0-1.1.4-2 1-2.7-.1-.2-.4-1.3.1-2.6 0 0 .8-.3 2.7 1a9.4 9.4 0 0 1 5 0c1.9-1.3 2.7-1 2.7-1 .5 1.3.2 2.4.1 2.6.6.7 1 1.6 1 2.7 0 3.9-2.4 4.7-4.6 5 .4.3.7.9.7 1.8v2.7c0 .3.2.6.7.5A10 10 0 0 0 12 2z" },
    IconGlyph { name: "SiGitlab", path: "m12 21.4-3.7-11h7.4zM3.3 10.4 12 21.4l-8.2-6a.7.7 0 0 1-.3-.8zm17.4 0 .8 4.2a.7.7 0 0 1-.3.8l-8.2 6zM5.5 3.2l2.8 7.2H3.3l1.5-7a.4.4 0 0 1 .7-.2zm13 0a.4.4 0 0 1 .7.2l1.5 7h-5z" },
    IconGlyph { name: "SiGo", path: "M2.3 10.2h6.2l-.4 1H2.1zm-1.5 1.9h7.1l-.4 1H1zm11.7-3.6c-2.6 0-4.7 2-4.7 4.4a4 4 0 0 0 4.2 4.1c2.6 0 4.7-2 4.7-4.4 0-.3 0-.6-.1-.9h-4.3l-.4 1.2h3c-.3 1.5-1.5 2.6-3 2.6a2.6 2.6 0 0 1-2.7-2.7c0-1.8 1.5-3.2 3.3-3.2 1 0 1.8.4 2.3 1.1l1.2-.8a4.2 4.2 0 0 0-3.5-1.4zm6.2 1.7h4.2l-.3 1h-4.2z" },
    IconGlyph { name: "SiGraphql", path: "M12 2.5 3.8 7.2v9.6L12 21.5l8.2-4.7V7.2zm0 1.7 6.7 3.9v7.8L12 19.8l-6.7-3.9V8.1zM12 5 5.9 15.6h12.2zm0 3 3.5 6.1h-7z" },
    IconGlyph { name: "SiHtml5", path: "M3 2h18l-1.6 18.5L12 23l-7.4-2.5zm14.6 4H6.4l.2 2.2h8.6l-.6 6.6-2.6.8-2.6-.8-.2-1.8H7l.3 3.4 4.7 1.4 4.7-1.4.8-8.4H8.6l-.2-2z" },
    IconGlyph { name: "SiInstagram", path: "M7.5 2h9A5.5 5.5 0 0 1 22 7.5v9a5.5 5.5 0 0 1-5.5 5.5h-9A5.5 5.5 0 0 1 2 16.5v-9A5.5 5.5 0 0 1 7.5 2zm0 2A3.5 3.5 0 0 0 4 7.5v9A3.5 3.5 0 0 0 7.5 20h9a3.5 3.5 0 0 0 3.5-3.5v-9A3.5 3.5 0 0 0 16.5 4zM12 7a5 5 0 1 1 0 10 5 5 0 0 1 0-10zm0 2a3 3 0 1 0 0 6 3 3 0 0 0 0-6zm5.3-3.5a1.2 1.2 0 1 1 0 2.4 1.2 1.2 0 0 1 0-2.4z" },
    IconGlyph { name: "SiJavascript", path: "M2 2h20v20H2zm9.9 16.3c0 2-1.2 2.9-2.9 2.9-1.5 0-2.4-.8-2.9-1.8l1.6-1c.3.5.6 1 1.2 1 .6 0 1-.3 1-1.2v-6.4h2zm4.6 2.9c-1.8 0-2.9-.8-3.5-1.9l1.6-.9c.4.7 1 1.2 1.9 1.2.8 0 1.3-.4 1.3-1 0-.6-.5-.9-1.4-1.3l-.5-.2c-1.5-.6-2.4-1.4-2.4-3 0-1.5 1.1-2.7 2.9-2.7 1.3 0 2.2.5 2.9 1.6l-1.6 1c-.3-.6-.7-.9-1.3-.9-.6 0-1 .4-1 .9 0 .6.4.8 1.2 1.2l.5.2c1.7.7 2.7 1.5 2.7 3.2 0 1.8-1.4 2.8-3.3 2.8z" },
    IconGlyph { name: "SiKotlin", path: "M2 2h20L12 12l10 10H2zm0 0v20L12 12z" },
    IconGlyph { name: "SiKubernetes", path: "M12 2.1 3.4 6.2l-2.1 9.3 5.9 7.4h9.6l5.9-7.4-2.1-9.3zm0 2.2 6.9 3.3 1.7 7.4-4.8 6h-7.6l-4.8-6 1.7-7.4zm-1 3v3.2L8.5 8.6zm2 0 2.5 1.3L13 10.5zM7.4 9.9l2.5 2.5-3.5.4zm9.2 0 1 2.9-3.5-.4zm-5.7 3.7h2.2l.7 2.1-1.8 1.3-1.8-1.3zm-2 1.9 2.3 1.7-3 .9zm6.2 0 .7 2.6-3-.9z" },
    IconGlyph { name: "SiLinkedin", path: "M4.5 3a1.9 1.9 0 1 1 0 3.8 1.9 1.9 0 0 1 0-3.8zM3 8.5h3.1V21H3zm5.5 0h3v1.7c.6-1 1.8-1.9 3.6-1.9 2.9 0 4.4 1.8 4.4 5.2V21h-3.1v-6.9c0-1.9-.7-2.9-2.1-2.9-1.5 0-2.7 1-2.7 2.9V21H8.5z" },
    IconGlyph { name: "SiLinux", path: "M12 2c-2.2 0-3.6 1.6-3.6 4 0 1.6.2 2.8-.6 4.2-1 1.7-2.4 3.4-2.8 5.5-.3 1.6.2 3.1 1.3 3.1.5-1 1.7-.3 2.7.3 1 .5 2 .9 3 .9s2-.4 3-.9c1-.6 2.2-1.3 2.7-.3 1.1 0 1.6-1.5 1.3-3.1-.4-2.1-1.8-3.8-2.8-5.5-.8-1.4-.6-2.6-.6-4.2 0-2.4-1.4-4-3.6-4zm-1.6 5.4a.9.9 0 0 1 .9.9c0 .5-.4.9-.9.9s-.9-.4-.9-.9.4-.9.9-.9zm3.2 0c.5 0 .9.4.9.9s-.4.9-.9.9a.9.9 0 0 1-.9-.9c0-.5.4-.9.9-.9zM12 10l2.5 1.6-2.5 1.4-2.5-1.4z" },
    IconGlyph { name: "SiMongodb", path: "M12 2s.6 3 .8 4c.2 1.1 3.7 3.3 3.7 7.4 0 4-2.9 6.3-3.9 6.9l-.3 1.7h-.6l-.3-1.7c-1-.6-3.9-2.9-3.9-6.9 0-4.1 3.5-6.3 3.7-7.4.2-1 .8-4 .8-4zm0 4.5v12" },
    IconGlyph { name: "SiMysql", path: "M4 17.5C4 11 7 6.5 12 6.5c2.3 0 3.9 1 5.3 2.7.8 1 1.5 2.2 2.3 3.2.6.8 1.4 1.4 2.4 1.8v.6c-1 .2-1.8 0-2.5-.4.2 1 .5 1.9 1 2.7h-1.7a7.6 7.6 0 0 1-1-3.3c-.5-2.9-1.9-5.8-5.8-5.8-3.9 0-6 3.3-6 9.5zm12.4-10.7.8-1.3h.9l-1.2 1.6z" },
    IconGlyph { name: "SiNextdotjs", path: "M12 2a10 10 0 1 0 5.6 18.3L9.4 9.6V17H7.7V7h1.7l8.9 11.6A10 10 0 0 0 12 2zm3.1 5h1.7v7.6L15.1 13z" },
    IconGlyph { name: "SiNodedotjs", path: "M12 2 3.3 7v10L12 22l8.7-5V7zm0 2.3 6.7 3.9v7.6L12 19.7l-6.7-3.9V8.2zm.3 3.4c-2 0-3.2.9-3.2 2.3 0 1.6 1.2 2 3.1 2.2 2.2.2 2.4.5 2.4 1 0 .7-.6 1-2 1-1.8 0-2.2-.5-2.3-1.4H8.6c0 1.8 1.3 2.8 4 2.8 2.5 0 3.9-.9 3.9-2.5 0-1.6-1.1-2.1-3.4-2.4-2-.3-2.2-.4-2.2-.9s.5-.8 1.7-.8c1.3 0 1.8.3 1.9 1.2h1.7c-.1-1.7-1.3-2.5-3.9-2.5z" },
    IconGlyph { name: "SiPostgresql", path: "M12 2C7 2 4.5 5.5 4.5 10.5c0 4 1.6 7.3 3.5 8.8.8.6 1.8.4 2.3-.3l.5-.8c.4.1.8.1 1.2.1s.8 0 1.2-.1l.5.8c.5.7 1.5.9 2.3.3 1.9-1.5 3.5-4.8 3.5-8.8C19.5 5.5 17 2 12 2zM8.8 7.6c.6 0 1 .4 1 1s-.4 1-1 1-1-.4-1-1 .4-1 1-1zm6.4 0c.6 0 1 .4 1 1s-.4 1-1 1-1-.4-1-1 .4-1 1-1zm-5.7 5.2c.8.8 1.6 1.2 2.5 1.2s1.7-.4 2.5-1.2l1 1c-1 1-2.2 1.6-3.5 1.6s-2.5-.6-3.5-1.6z" },
    IconGlyph { name: "SiPython", path: "M11.9 2c-1.2 0-2.3.1-3.3.3C7 2.6 6.6 3.3 6.6 4.6V6h5.3v.7H4.9c-1.3 0-2.4.8-2.8 2.3a12 12 0 0 0 0 4.6c.3 1.3 1 2.2 2.3 2.2h1.5v-2.1c0-1.5 1.3-2.8 2.8-2.8h5.2c1.2 0 2.2-1 2.2-2.3V4.6c0-1.2-1-2.1-2.2-2.3-.8-.2-1.9-.3-3-.3zM9 3.9c.5 0 .9.4.9.9s-.4.9-.9.9-.9-.4-.9-.9.4-.9.9-.9zm10.6 2.8v2.1c0 1.6-1.3 2.9-2.8 2.9h-5.2c-1.2 0-2.2 1-2.2 2.2v4.5c0 1.2 1 1.9 2.2 2.3 1.4.4 2.8.5 4.5 0 1.1-.3 2.2-1 2.2-2.3V17h-5.3v-.7h6.9c1.3 0 1.8-.9 2.2-2.2.4-1.4.4-2.8 0-4.6-.3-1.3-.9-2.3-2.2-2.3zM15 18.3c.5 0 .9.4.9.9s-.4.9-.9.9-.9-.4-.9-.9.4-.9.9-.9z" },
    IconGlyph { name: "SiReact", path: "M12 9.9a2.1 2.1 0 1 1 0 4.2 2.1 2.1 0 0 1 0-4.2zM12 7c5.5 0 10 2.2 10 5s-4.5 5-10 5S2 14.8 2 12s4.5-5 10-5zm0 1.6c-4.7 0-8.4 1.8-8.4 3.4s3.7 3.4 8.4 3.4 8.4-1.8 8.4-3.4-3.7-3.4-8.4-3.4z" },
    IconGlyph { name: "SiRedis", path: "m12 4 9.5 3.6L12 11.2 2.5 7.6zm9.5 6.1v2L12 15.7l-9.5-3.6v-2L12 13.7zm0 4.5v2L12 20.2l-9.5-3.6v-2L12 18.2z" },
    IconGlyph { name: "SiRuby", path: "M6.2 3h11.6L22 8.5 12 21.5 2 8.5zm1 2L4.6 8.2h4zm9.6 0 2.6 3.2h-4zm-4.8.4L9.4 8.2h5.2zM5 10.2l5.6 8.1-1.5-8.1zm5.7 0 1.3 9 1.3-9zm5.6 0-1.5 8.1 5.6-8.1z" },
    IconGlyph { name: "SiRust", path: "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 1.8 1 1.7h-2zm-5.9 2.4 1.9.6-1.4 1.4zm11.8 0-.5 2-1.4-1.4zM8 8h5.6a2.7 2.7 0 0 1 1 5.2l2 3.5h-2.6l-1.8-3.2H10.2v3.2H8zm2.2 1.9v1.7h3.2a.85.85 0 0 0 0-1.7zM3.8 11l1.7 1-1.7 1zm16.4 0v2l-1.7-1zm-14 5.2 1.4 1.4-1.9.6zm11.6 0 .5 2-1.9-.6zm-6.8 2.3h2l-1 1.7z" },
    IconGlyph { name: "SiSvelte", path: "M18.8 4.2c-1.9-2.7-5.6-3.5-8.3-1.8L6 5.2A5.3 5.3 0 0 0 3.6 8.8c-.2 1.3 0 2.6.7 3.7a5.3 5.3 0 0 0-.8 2c-.3 1.4 0 2.9.9 4.1 1.9 2.7 5.6 3.5 8.3 1.8l4.5-2.8a5.3 5.3 0 0 0 2.4-3.6c.2-1.3 0-2.6-.7-3.7.4-.6.7-1.3.8-2 .3-1.4 0-2.9-.9-4.1zm-8.9 14.7a3.4 3.4 0 0 1-3.7-1.3 3.2 3.2 0 0 1-.5-2.5l.1-.4.3.2c.7.5 1.5.9 2.3 1.1l.2.1v.2c0 .3 0 .6.2.8a1 1 0 0 0 1.1.4l.3-.1 4.4-2.8c.2-.1.4-.4.4-.6a1 1 0 0 0-.2-.8 1 1 0 0 0-1.1-.4l-.3.1-1.7 1.1a3.4 3.4 0 0 1-4.8-1l-.1-.3a3.2 3.2 0 0 1 1.5-3.4l4.4-2.8.6-.3a3.4 3.4 0 0 1 3.7 1.3c.5.7.7 1.6.5 2.5l-.1.4-.3-.2a8 8 0 0 0-2.3-1.1l-.2-.1v-.2c0-.3 0-.6-.2-.8a1 1 0 0 0-1.1-.4l-.3.1-4.4 2.8a.9.9 0 0 0-.2 1.4 1 1 0 0 0 1.1.4l.3-.1 1.7-1.1a3.4 3.4 0 0 1 4.8 1c.5.7.7 1.6.5 2.5a3.2 3.2 0 0 1-1.4 2.1l-4.4 2.8z" },
    IconGlyph { name: "SiSwift", path: "M16.8 3.5c3.3 4.4 3.2 9.8 1.5 12.9 1.7 2.1 1.9 3.9 1.9 3.9s-2.4-1.6-4.3-.9c-2.8 1.3-6.9 1-9.9-1.8A16.4 16.4 0 0 1 2 12.9c1.5 1.2 3.5 2.6 5.2 3.3C4.4 13.5 2.9 10.3 2.9 10.3s3.4 2.9 5.9 4.1C6 11.6 4.1 8.1 4.1 8.1s5.2 4.6 8.6 6.3c.9-2.6-.3-6.8-3.7-10.7 4 2.2 6.9 5.8 8 8.2.8-2.5.3-5.6-.2-8.4z" },
    IconGlyph { name: "SiTailwindcss", path: "M12 6c-2.7 0-4.3 1.3-5 4 1-1.3 2.2-1.8 3.5-1.5.8.2 1.3.7 1.9 1.4.9 1 2 2.1 4.6 2.1 2.7 0 4.3-1.3 5-4-1 1.3-2.2 1.8-3.5 1.5-.8-.2-1.3-.7-1.9-1.4C15.7 7.1 14.6 6 12 6zM7 12c-2.7 0-4.3 1.3-5 4 1-1.3 2.2-1.8 3.5-1.5.8.2 1.3.7 1.9 1.4.9 1 2 2.1 4.6 2.1 2.7 0 4.3-1.3 5-4-1 1.3-2.2 1.8-3.5 1.5-.8-.2-1.3-.7-1.9-1.4C10.7 13.1 9.6 12 7 12z" },
    IconGlyph { name: "SiTelegram", path: "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm4.6 6.9-1.6 7.6c-.1.6-.5.7-.9.4l-2.5-1.8-1.2 1.1c-.1.1-.2.2-.5.2l.2-2.5 4.6-4.2c.2-.2 0-.3-.3-.1l-5.7 3.6-2.5-.8c-.5-.2-.5-.5.1-.8l9.6-3.7c.5-.2.9.1.7 1z" },
    IconGlyph { name: "SiTypescript", path: "M2 2h20v20H2zm10.5 9H5.5v2H8v7h2.5v-7h2zm1.9 8.6c.7.5 1.7.7 2.8.7 2 0 3.3-1 3.3-2.7 0-1.6-.9-2.3-2.5-3-1.1-.4-1.5-.7-1.5-1.2s.4-.8 1.1-.8c.7 0 1.4.2 2.1.7v-2.3a5.4 5.4 0 0 0-2.1-.4c-2 0-3.2 1-3.2 2.7 0 1.6.9 2.3 2.4 2.9 1.1.4 1.5.7 1.5 1.3 0 .6-.5.9-1.3.9-.8 0-1.8-.3-2.6-.9z" },
    IconGlyph { name: "SiVuedotjs", path: "M2 3.5h4.4L12 13l5.6-9.5H22L12 20.5zm5.9 0h4.1L9.9 7z" },
    IconGlyph { name: "SiX", path: "M17.8 3h3.1l-6.9 7.9L22 21h-6.3l-5-6.5L5 21H1.9l7.4-8.5L2 3h6.5l4.5 6zm-1.1 16.1h1.7L7.5 4.8H5.6z" },
    IconGlyph { name: "SiYoutube", path: "M21.6 7.2a2.5 2.5 0 0 0-1.8-1.8C18.2 5 12 5 12 5s-6.2 0-7.8.4A2.5 2.5 0 0 0 2.4 7.2 26 26 0 0 0 2 12c0 1.6.1 3.2.4 4.8.2.9.9 1.6 1.8 1.8C5.8 19 12 19 12 19s6.2 0 7.8-.4a2.5 2.5 0 0 0 1.8-1.8c.3-1.6.4-3.2.4-4.8s-.1-3.2-.4-4.8zM10 15.2V8.8l5.2 3.2z" },
];

/// Binary-search the table for a canonical key.
pub fn lookup(key: &str) -> Option<&'static IconGlyph> {
    GLYPHS
        .binary_search_by(|g| g.name.cmp(key))
        .ok()
        .map(|i| &GLYPHS[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_by_key() {
        for pair in GLYPHS.windows(2) {
            assert!(
                pair[0].name < pair[1].name,
                "{} must sort before {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn test_lookup_hit() {
        let glyph = lookup("SiGithub").unwrap();
        assert_eq!(glyph.name, "SiGithub");
        assert!(!glyph.path.is_empty());
    }

    #[test]
    fn test_lookup_miss() {
        assert!(lookup("SiNotarealicon").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_fallback_glyphs_present_in_table() {
        assert_eq!(lookup("BiCode"), Some(&CODE));
        assert_eq!(lookup("BiFile"), Some(&FILE));
        assert_eq!(lookup("BiSend"), Some(&SEND));
        assert_eq!(lookup("BiUser"), Some(&USER));
    }
}
