//! blogmark: the Markdown engine behind a blog post editor.
//!
//! One shared implementation of the three conversions the authoring UI
//! needs, replacing the per-page copies that used to drift apart:
//!
//! - [`markdown_to_html`] renders stored Markdown as editable HTML,
//! - [`html_to_markdown`] turns edited HTML back into Markdown for export,
//! - [`preview`] produces short plain-text previews of stored posts.
//!
//! All conversions are pure `&str -> String` transformations: no I/O, no
//! shared state, no failure modes. Malformed input comes out as best-effort
//! literal text rather than an error.

pub mod config;
pub mod document;
pub mod exit_codes;
pub mod html_to_markdown;
pub mod markdown_to_html;
pub mod preview;
pub mod utils;

pub use config::Config;
pub use document::{export_filename, extract_title, standalone_document, strip_title};
pub use html_to_markdown::html_to_markdown;
pub use markdown_to_html::markdown_to_html;
pub use preview::{PostStats, markdown_to_text, preview, preview_with, stats};
