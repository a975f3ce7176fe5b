//! Clean subcommand handler.

use std::path::Path;

use anyhow::Result;

use ptc::extract::cleanup_clipboard_markdown;

use super::{read_input, save_or_print};

/// Apply the clipboard-markdown cleanup passes to a document.
pub fn handle(input: &Path, output: Option<&Path>) -> Result<()> {
    let markdown = read_input(input)?;
    save_or_print(&cleanup_clipboard_markdown(&markdown), output)
}
