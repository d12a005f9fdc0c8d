//! Rendering adapters. Both consume a classified profile result: `page`
//! emits the interactive HTML views, `og` rasterizes the fixed-size
//! social-preview image.

pub mod og;
pub mod page;
