//! Handler for the `preview` command.

use super::read_input;
use anyhow::Result;
use blogmark::Config;
use std::path::Path;

pub fn handle_preview(file: &Path, words: Option<usize>, config: &Config) -> Result<()> {
    let markdown = read_input(file)?;
    let word_limit = words.unwrap_or(config.preview.word_limit);
    println!("{}", blogmark::preview_with(&markdown, word_limit, &config.preview.ellipsis));
    Ok(())
}
