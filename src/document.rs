//! Title handling and export document assembly.

use crate::utils::regex_cache::{FIRST_LINE, LEADING_TITLE, WHITESPACE_RUN};

/// Derive a post title: the first `#`-heading line, else the first non-empty
/// line. Returns `None` only for blank input.
pub fn extract_title(content: &str) -> Option<String> {
    if let Some(caps) = LEADING_TITLE.captures(content) {
        return Some(caps[1].trim().to_string());
    }
    FIRST_LINE
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|line| !line.is_empty())
}

/// Remove the leading level-1 heading line (first match only). The renderer
/// does this itself; callers that keep Markdown around use it to avoid
/// duplicating the title they display separately.
pub fn strip_title(markdown: &str) -> String {
    LEADING_TITLE.replace(markdown, "").trim_start().to_string()
}

/// Download filename for an exported post: whitespace runs become hyphens,
/// then the extension is appended.
pub fn export_filename(title: &str, extension: &str) -> String {
    format!("{}.{extension}", WHITESPACE_RUN.replace_all(title.trim(), "-"))
}

/// Wrap rendered post HTML in a self-contained page for `.html` export: the
/// title goes in `<title>` and as a leading `<h1>`, with the fixed styling
/// the exporter has always shipped. The title is interpolated unescaped,
/// matching the editor's behavior (see DESIGN.md on the injection gap).
pub fn standalone_document(title: &str, body_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; line-height: 1.8; }}
        h1, h2, h3 {{ color: #0f172a; }}
        p {{ margin-bottom: 16px; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    {body_html}
</body>
</html>"#
    )
}
