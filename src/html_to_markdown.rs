//! HTML to Markdown conversion.
//!
//! The reverse direction is deliberately lossy: it converts the known tag
//! patterns the renderer emits back to their Markdown spellings and discards
//! everything else. It is ordered substitution over tag shapes, not an HTML
//! parse, so nested occurrences of the same tag come out wrong; the final
//! strip guarantees no tag survives regardless.

use crate::utils::regex_cache::{
    EXCESS_BLANK_LINES, HTML_ANCHOR, HTML_ANY_TAG, HTML_BLOCKQUOTE, HTML_BR, HTML_CODE, HTML_EM,
    HTML_H1, HTML_H2, HTML_H3, HTML_H4, HTML_HR, HTML_LIST_ITEM, HTML_OL_CLOSE, HTML_OL_OPEN,
    HTML_PARAGRAPH, HTML_PRE, HTML_STRONG, HTML_UL_CLOSE, HTML_UL_OPEN,
};

/// Convert the editor's HTML subset back to Markdown. Never fails; unknown
/// tags are dropped and their text content kept.
pub fn html_to_markdown(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let md = HTML_H1.replace_all(html, "# $1\n\n");
    let md = HTML_H2.replace_all(&md, "## $1\n\n");
    let md = HTML_H3.replace_all(&md, "### $1\n\n");
    let md = HTML_H4.replace_all(&md, "#### $1\n\n");
    let md = HTML_PARAGRAPH.replace_all(&md, "$1\n\n");
    let md = HTML_STRONG.replace_all(&md, "**$1**");
    let md = HTML_EM.replace_all(&md, "*$1*");
    let md = HTML_CODE.replace_all(&md, "`$1`");
    let md = HTML_PRE.replace_all(&md, "```\n$1\n```");
    let md = HTML_ANCHOR.replace_all(&md, "[$2]($1)");
    let md = HTML_UL_OPEN.replace_all(&md, "");
    let md = HTML_UL_CLOSE.replace_all(&md, "\n");
    let md = HTML_OL_OPEN.replace_all(&md, "");
    let md = HTML_OL_CLOSE.replace_all(&md, "\n");
    let md = HTML_LIST_ITEM.replace_all(&md, "- $1\n");
    let md = HTML_BLOCKQUOTE.replace_all(&md, "> $1\n");
    let md = HTML_HR.replace_all(&md, "---\n");
    let md = HTML_BR.replace_all(&md, "\n");

    // Anything still tagged at this point is not part of the known subset.
    let md = HTML_ANY_TAG.replace_all(&md, "");

    let md = EXCESS_BLANK_LINES.replace_all(&md, "\n\n");
    md.trim().to_string()
}
