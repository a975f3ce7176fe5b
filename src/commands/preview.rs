//! Preview subcommand handler.

use std::path::Path;

use anyhow::Result;

use ptc::thread::{self, preview};
use ptc::Config;

use super::{read_input, save_or_print};

/// Compose the document and render the thread boundaries for review.
pub fn handle(
    input: &Path,
    output: Option<&Path>,
    json: bool,
    mentions: &[String],
) -> Result<()> {
    let config = Config::load()?;
    let markdown = read_input(input)?;
    let thread = thread::compose(&markdown, mentions, &config)?;

    let rendered = if json {
        serde_json::to_string_pretty(&thread)?
    } else {
        preview::render(&thread)
    };
    save_or_print(&rendered, output)
}
