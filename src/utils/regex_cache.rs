//! Cached regex patterns shared across the conversion pipeline.
//!
//! Every pattern the engine uses is compiled exactly once and reused on all
//! subsequent calls, so repeated renders (live preview on every keystroke in
//! the original UI) never pay regex compilation cost twice.

use regex::Regex;
use std::sync::LazyLock;

// Title / heading patterns
pub static LEADING_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap());
pub static HEADING_H4: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#### (.+)$").unwrap());
pub static HEADING_H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.+)$").unwrap());
pub static HEADING_H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
pub static HEADING_H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
pub static HEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#+\s+").unwrap());
pub static FIRST_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(.+)$").unwrap());

// Code patterns. The rendered form is matched too so re-rendering engine
// output never reaches inside an emitted code block.
pub static FENCED_CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());
pub static PRE_CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<pre><code>.*?</code></pre>").unwrap());
pub static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

// Emphasis patterns. Longest marker first: the bold-italic pattern must be
// applied before bold, and bold before italic, or the shorter patterns eat
// the longer markers.
pub static BOLD_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
pub static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
pub static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
pub static UNDERSCORE_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.+?)_").unwrap());

// Link and image patterns
pub static INLINE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
pub static INLINE_IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

// Horizontal rules: a line that is exactly the marker, nothing else
pub static HR_DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^---$").unwrap());
pub static HR_STARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\*\*\*$").unwrap());

// Blockquote
pub static BLOCKQUOTE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^>\s+(.+)$").unwrap());

// Table pattern: header row, separator row, then one or more data rows
pub static TABLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|[^\n]+\|\n\|[-\s|:]+\|\n(?:\|[^\n]+\|\n?)+").unwrap());

// List item patterns, matched against the trimmed line
pub static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[*+-]\s+(.+)$").unwrap());
pub static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());

// Lines that already carry block-level markup are emitted verbatim by the
// block pass instead of being paragraph-wrapped. Closing tags and paragraph
// and list tags are included so re-rendering engine output is a no-op.
pub static BLOCK_LEVEL_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^</?(h[1-4]|pre|p|blockquote|hr|table|thead|tbody|tr|th|td|ul|ol|li)[\s/>]").unwrap()
});

// Cleanup patterns
pub static EMPTY_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<p>\s*</p>").unwrap());
pub static EXCESS_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

// HTML tag patterns for the reverse (HTML -> Markdown) conversion. The
// reverse pass is substitution over known tag shapes, not an HTML parse, so
// each pattern tolerates attributes but not nesting of the same tag.
pub static HTML_H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>(.*?)</h1>").unwrap());
pub static HTML_H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h2[^>]*>(.*?)</h2>").unwrap());
pub static HTML_H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h3[^>]*>(.*?)</h3>").unwrap());
pub static HTML_H4: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h4[^>]*>(.*?)</h4>").unwrap());
pub static HTML_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<p[^>]*>(.*?)</p>").unwrap());
pub static HTML_STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<strong[^>]*>(.*?)</strong>").unwrap());
pub static HTML_EM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<em[^>]*>(.*?)</em>").unwrap());
pub static HTML_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<code[^>]*>(.*?)</code>").unwrap());
pub static HTML_PRE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<pre[^>]*>(.*?)</pre>").unwrap());
pub static HTML_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<a[^>]*href=["']([^"']+)["'][^>]*>(.*?)</a>"#).unwrap());
pub static HTML_UL_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<ul[^>]*>").unwrap());
pub static HTML_UL_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</ul>").unwrap());
pub static HTML_OL_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<ol[^>]*>").unwrap());
pub static HTML_OL_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</ol>").unwrap());
pub static HTML_LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<li[^>]*>(.*?)</li>").unwrap());
pub static HTML_BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<blockquote[^>]*>(.*?)</blockquote>").unwrap());
pub static HTML_HR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<hr\s*/?>").unwrap());
pub static HTML_BR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
pub static HTML_ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

// Filename sanitization
pub static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
