//! Handler for the `export` command.
//!
//! Mirrors the editor's export menu: one run writes the `.md`, `.txt` and
//! `.html` variants of a post, named after the hyphenated title. The
//! Markdown variant is reconverted from the rendered HTML, exactly as the
//! editor exported the edited document rather than the stored source.

use super::read_input;
use anyhow::{Context, Result};
use blogmark::{
    Config, export_filename, extract_title, html_to_markdown, markdown_to_html, markdown_to_text,
    standalone_document,
};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

pub fn handle_export(
    file: &Path,
    title: Option<&str>,
    out_dir: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let markdown = read_input(file)?;

    let title = match title {
        Some(t) => t.to_string(),
        None => extract_title(&markdown).unwrap_or_else(|| "Untitled".to_string()),
    };

    let html = markdown_to_html(&markdown);
    let markdown_out = html_to_markdown(&html);
    let text_out = markdown_to_text(&markdown_out);
    let page = standalone_document(&title, &html);

    let out_dir = out_dir.unwrap_or_else(|| config.export.out_dir.as_path());
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for (extension, content) in [("md", &markdown_out), ("txt", &text_out), ("html", &page)] {
        let path: PathBuf = out_dir.join(export_filename(&title, extension));
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
        println!("{} {}", "Exported".green().bold(), path.display());
    }

    Ok(())
}
