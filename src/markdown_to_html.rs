//! Markdown to HTML rendering.
//!
//! The renderer is a fixed pipeline of ordered substitution stages over the
//! whole document, followed by a line-oriented block pass that handles lists
//! and paragraphs with an explicit nesting stack. It is pure and total:
//! malformed input is never an error, it simply falls through the stages
//! unchanged and comes out as literal text.
//!
//! Stage order is load-bearing. Fenced code is pulled out first so markup
//! characters inside code are never transformed; headings go longest prefix
//! first so `####` is not mis-tagged as `<h1>` with leftover hashes; the same
//! longest-first rule applies to emphasis markers.

use crate::utils::regex_cache::{
    BLOCKQUOTE_LINE, BLOCK_LEVEL_TAG, BOLD, BOLD_ITALIC, EMPTY_PARAGRAPH, EXCESS_BLANK_LINES,
    FENCED_CODE_BLOCK, HEADING_H1, HEADING_H2, HEADING_H3, HEADING_H4, HR_DASHES, HR_STARS,
    INLINE_CODE, INLINE_IMAGE, INLINE_LINK, ITALIC, LEADING_TITLE, ORDERED_ITEM, PRE_CODE_BLOCK,
    TABLE_BLOCK, UNDERSCORE_ITALIC, UNORDERED_ITEM,
};

/// Delimiter for fenced-code placeholders. NUL cannot survive in any
/// reasonable post text, so a placeholder never collides with content.
const PLACEHOLDER_DELIM: char = '\u{0}';

fn code_placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_DELIM}{index}{PLACEHOLDER_DELIM}")
}

/// Render Markdown to the restricted HTML subset used by the post editor.
///
/// The leading level-1 heading is dropped: titles are handled separately by
/// callers (see [`crate::document::extract_title`]).
pub fn markdown_to_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    // Stage 1: strip the title line, first match only.
    let html = LEADING_TITLE.replace(markdown, "").into_owned();

    // Stage 2: protect code regions before any other substitution. Fenced
    // blocks render to their final form here; blocks already in rendered
    // form (this engine's own output fed back in) are protected as-is, so
    // markup characters inside code survive a re-render untouched.
    let mut code_blocks: Vec<String> = Vec::new();
    let html = FENCED_CODE_BLOCK
        .replace_all(&html, |caps: &regex::Captures| {
            code_blocks.push(format!("<pre><code>{}</code></pre>", caps[1].trim()));
            code_placeholder(code_blocks.len() - 1)
        })
        .into_owned();
    let html = PRE_CODE_BLOCK
        .replace_all(&html, |caps: &regex::Captures| {
            code_blocks.push(caps[0].to_string());
            code_placeholder(code_blocks.len() - 1)
        })
        .into_owned();

    // Stage 3: inline code spans.
    let html = INLINE_CODE.replace_all(&html, "<code>$1</code>");

    // Stage 4: ATX headings, longest prefix first.
    let html = HEADING_H4.replace_all(&html, "<h4>$1</h4>");
    let html = HEADING_H3.replace_all(&html, "<h3>$1</h3>");
    let html = HEADING_H2.replace_all(&html, "<h2>$1</h2>");
    let html = HEADING_H1.replace_all(&html, "<h1>$1</h1>");

    // Stage 5: emphasis, longest marker first.
    let html = BOLD_ITALIC.replace_all(&html, "<strong><em>$1</em></strong>");
    let html = BOLD.replace_all(&html, "<strong>$1</strong>");
    let html = ITALIC.replace_all(&html, "<em>$1</em>");
    let html = UNDERSCORE_ITALIC.replace_all(&html, "<em>$1</em>");

    // Stage 6: links, then images.
    let html = INLINE_LINK.replace_all(&html, r#"<a href="$2" target="_blank" rel="noopener">$1</a>"#);
    let html = INLINE_IMAGE.replace_all(&html, r#"<img src="$2" alt="$1" style="max-width: 100%; height: auto;" />"#);

    // Stage 7: horizontal rules.
    let html = HR_DASHES.replace_all(&html, "<hr />");
    let html = HR_STARS.replace_all(&html, "<hr />");

    // Stage 8: blockquotes.
    let html = BLOCKQUOTE_LINE.replace_all(&html, "<blockquote>$1</blockquote>");

    // Stage 9: tables.
    let html = TABLE_BLOCK.replace_all(&html, |caps: &regex::Captures| render_table(&caps[0]));

    // Stage 10: line-oriented block pass (lists, paragraphs, verbatim lines).
    let html = render_blocks(&html);

    // Stage 11: cleanup.
    let html = EMPTY_PARAGRAPH.replace_all(&html, "");
    let html = EXCESS_BLANK_LINES.replace_all(&html, "\n\n");
    let mut html = html.trim().to_string();

    // Restore protected code blocks after cleanup so their content keeps its
    // exact whitespace.
    for (index, block) in code_blocks.iter().enumerate() {
        html = html.replace(&code_placeholder(index), block);
    }

    html
}

/// Render one recognized table block. A candidate block whose header row
/// yields no cells is returned unchanged (malformed tables pass through).
fn render_table(block: &str) -> String {
    let lines: Vec<&str> = block.trim().lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return block.to_string();
    }

    let headers: Vec<&str> = lines[0].split('|').map(str::trim).filter(|h| !h.is_empty()).collect();
    if headers.is_empty() {
        return block.to_string();
    }

    let mut table = String::from("<table>\n<thead>\n<tr>\n");
    for header in &headers {
        table.push_str(&format!("<th>{}</th>\n", cell_markup(header, false)));
    }
    table.push_str("</tr>\n</thead>\n<tbody>\n");

    // lines[1] is the separator row and contributes nothing.
    for row in &lines[2..] {
        let cells: Vec<&str> = row.split('|').map(str::trim).filter(|c| !c.is_empty()).collect();
        if cells.is_empty() {
            continue;
        }
        table.push_str("<tr>\n");
        for cell in cells {
            table.push_str(&format!("<td>{}</td>\n", cell_markup(cell, true)));
        }
        table.push_str("</tr>\n");
    }

    table.push_str("</tbody>\n</table>");
    table
}

/// Inline markup inside table headers and cells: bold, italic, and (in data
/// cells) links. Code and images are deliberately not applied here.
fn cell_markup(text: &str, allow_links: bool) -> String {
    let text = BOLD.replace_all(text, "<strong>$1</strong>");
    let text = ITALIC.replace_all(&text, "<em>$1</em>");
    if allow_links {
        INLINE_LINK
            .replace_all(&text, r#"<a href="$2" target="_blank" rel="noopener">$1</a>"#)
            .into_owned()
    } else {
        text.into_owned()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// One open list during the block pass.
#[derive(Debug)]
struct ListFrame {
    kind: ListKind,
    level: usize,
}

/// Nesting level from leading indentation: two spaces per level.
fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count() / 2
}

/// Line-oriented pass: list items open and close `<ul>`/`<ol>` frames on a
/// stack, block-tagged lines and raw table rows pass through verbatim, and
/// everything else non-blank becomes a paragraph. Blank lines inside an open
/// list do not close it.
fn render_blocks(html: &str) -> String {
    let mut stack: Vec<ListFrame> = Vec::new();
    let mut out: Vec<String> = Vec::new();
    let mut last_was_ordered_item = false;

    for line in html.split('\n') {
        let trimmed = line.trim();

        if let Some(caps) = UNORDERED_ITEM.captures(trimmed) {
            let mut level = indent_level(line);
            // An unindented bullet straight after an ordered item nests one
            // level under it: sub-bullets of a numbered step are usually
            // written without indentation. This applies only at level 0 with
            // an ordered list on top of the stack.
            if last_was_ordered_item
                && level == 0
                && stack.last().is_some_and(|frame| frame.kind == ListKind::Ordered)
            {
                level = stack.last().map(|frame| frame.level).unwrap_or(0) + 1;
            }
            push_item(&mut stack, &mut out, ListKind::Unordered, level, &caps[1]);
            last_was_ordered_item = false;
        } else if let Some(caps) = ORDERED_ITEM.captures(trimmed) {
            let level = indent_level(line);
            push_item(&mut stack, &mut out, ListKind::Ordered, level, &caps[1]);
            last_was_ordered_item = true;
        } else {
            last_was_ordered_item = false;

            // Any non-blank line ends all open lists; a blank line inside a
            // list is tolerated.
            if !trimmed.is_empty() || stack.is_empty() {
                close_frames(&mut stack, &mut out, 0, None);
            }

            if trimmed.is_empty() {
                continue;
            }
            if trimmed.starts_with(PLACEHOLDER_DELIM)
                || trimmed.starts_with('|')
                || BLOCK_LEVEL_TAG.is_match(trimmed)
            {
                out.push(trimmed.to_string());
            } else {
                out.push(format!("<p>{trimmed}</p>"));
            }
        }
    }

    close_frames(&mut stack, &mut out, 0, None);
    out.join("\n")
}

/// Append one list item, adjusting the frame stack first: frames at or below
/// the item's level are closed innermost-first until the top frame matches
/// the item's `(kind, level)`, then a new frame is opened if none matches.
/// The stack therefore never holds two adjacent frames with the same pair.
fn push_item(stack: &mut Vec<ListFrame>, out: &mut Vec<String>, kind: ListKind, level: usize, content: &str) {
    close_frames(stack, out, level, Some(kind));

    let top_matches = stack
        .last()
        .is_some_and(|frame| frame.kind == kind && frame.level == level);
    if !top_matches {
        out.push(format!("<{}>", kind.tag()));
        stack.push(ListFrame { kind, level });
    }

    out.push(format!("<li>{content}</li>"));
}

/// Close frames with level >= `level`, innermost first. When `reuse` names a
/// list kind, an exactly matching frame `(reuse, level)` survives so the next
/// item can continue it.
fn close_frames(stack: &mut Vec<ListFrame>, out: &mut Vec<String>, level: usize, reuse: Option<ListKind>) {
    while let Some(top) = stack.last() {
        let matches = reuse.is_some_and(|kind| top.kind == kind && top.level == level);
        if top.level < level || matches {
            break;
        }
        let kind = top.kind;
        stack.pop();
        out.push(format!("</{}>", kind.tag()));
    }
}
