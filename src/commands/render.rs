//! Handler for the `render` command: Markdown in, HTML out.

use super::{read_input, write_output};
use anyhow::Result;
use blogmark::{extract_title, markdown_to_html, standalone_document};
use std::path::Path;

pub fn handle_render(file: &Path, output: Option<&Path>, full_page: bool) -> Result<()> {
    let markdown = read_input(file)?;
    let html = markdown_to_html(&markdown);

    let content = if full_page {
        let title = extract_title(&markdown).unwrap_or_else(|| "Untitled".to_string());
        standalone_document(&title, &html)
    } else {
        html
    };

    write_output(output, &content)
}
