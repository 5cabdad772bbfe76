//! Plain-text extraction, preview truncation, and post statistics.

use crate::utils::regex_cache::{
    BOLD, EXCESS_BLANK_LINES, FENCED_CODE_BLOCK, HEADING_MARKER, INLINE_CODE, INLINE_IMAGE,
    INLINE_LINK, ITALIC,
};
use serde::Serialize;

/// Default marker appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Words per minute assumed when estimating reading time.
const READING_WPM: usize = 200;

/// Strip Markdown markup down to plain text: heading markers and emphasis
/// markers go, link text survives its link, image alt text does not, fenced
/// code disappears entirely while inline code keeps its content.
pub fn markdown_to_text(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let text = HEADING_MARKER.replace_all(markdown, "");
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    // Images before links: both start with a bracketed segment, and the link
    // pattern would otherwise claim `[alt](url)` and leave the `!` behind.
    let text = INLINE_IMAGE.replace_all(&text, "");
    let text = INLINE_LINK.replace_all(&text, "$1");
    let text = FENCED_CODE_BLOCK.replace_all(&text, "");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = EXCESS_BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Plain-text preview of a Markdown document, truncated to the first
/// `word_limit` whitespace-separated words with an ellipsis iff truncated.
pub fn preview(markdown: &str, word_limit: usize) -> String {
    preview_with(markdown, word_limit, ELLIPSIS)
}

/// As [`preview`], with a caller-chosen truncation marker.
pub fn preview_with(markdown: &str, word_limit: usize, ellipsis: &str) -> String {
    let text = markdown_to_text(markdown);
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > word_limit {
        format!("{}{ellipsis}", words[..word_limit].join(" "))
    } else {
        words.join(" ")
    }
}

/// Word count and estimated reading time for a post body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PostStats {
    pub words: usize,
    pub reading_minutes: usize,
}

/// Compute stats the way the editor status bar does: whitespace-separated
/// word count, reading time at 200 wpm with a floor of one minute.
pub fn stats(text: &str) -> PostStats {
    let words = text.split_whitespace().count();
    let reading_minutes = std::cmp::max(1, words.div_ceil(READING_WPM));
    PostStats { words, reading_minutes }
}
