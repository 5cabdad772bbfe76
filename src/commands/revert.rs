//! Handler for the `revert` command: HTML in, Markdown out.

use super::{read_input, write_output};
use anyhow::Result;
use blogmark::html_to_markdown;
use std::path::Path;

pub fn handle_revert(file: &Path, output: Option<&Path>) -> Result<()> {
    let html = read_input(file)?;
    write_output(output, &html_to_markdown(&html))
}
