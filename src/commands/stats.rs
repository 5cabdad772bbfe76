//! Handler for the `stats` command: the editor status bar, on the CLI.

use super::read_input;
use anyhow::Result;
use blogmark::{markdown_to_text, stats};
use std::path::Path;

pub fn handle_stats(file: &Path, json: bool) -> Result<()> {
    let markdown = read_input(file)?;
    let post_stats = stats(&markdown_to_text(&markdown));

    if json {
        println!("{}", serde_json::to_string_pretty(&post_stats)?);
    } else {
        println!("{} words", post_stats.words);
        println!("{} min read", post_stats.reading_minutes);
    }
    Ok(())
}
