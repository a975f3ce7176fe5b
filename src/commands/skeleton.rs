//! Skeleton subcommand handler.

use std::path::Path;

use anyhow::{Context, Result};

use ptc::authors::resolve_author_handles;
use ptc::metadata::{ArxivSource, PaperMetadataSource};
use ptc::posting;
use ptc::skeleton::skeleton_for_paper;
use ptc::Config;

use super::save_or_print;

/// Fetch a paper's metadata and write a starter document for it.
pub fn handle(url: &str, output: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let metadata = ArxivSource::new()
        .fetch(url)
        .with_context(|| format!("failed to fetch metadata for {}", url))?;

    let service = posting::backend_from_config(&config.posting)?;
    let handles = resolve_author_handles(service.as_ref(), &metadata.authors)?;

    let document = skeleton_for_paper(&metadata, url, &handles, &config.templates);
    save_or_print(&document, output)
}
