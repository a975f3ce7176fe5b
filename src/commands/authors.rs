//! Authors subcommand handler.

use anyhow::{Context, Result};

use ptc::authors::resolve_author_handles;
use ptc::metadata::{ArxivSource, PaperMetadataSource};
use ptc::posting;
use ptc::Config;

/// Print a paper's authors and their best-guess handles.
pub fn handle(url: &str) -> Result<()> {
    let config = Config::load()?;
    let metadata = ArxivSource::new()
        .fetch(url)
        .with_context(|| format!("failed to fetch metadata for {}", url))?;

    println!("{}", metadata.title);
    println!();
    println!("Authors:");
    for author in &metadata.authors {
        println!("  {}", author);
    }

    let service = posting::backend_from_config(&config.posting)?;
    let handles = resolve_author_handles(service.as_ref(), &metadata.authors)?;
    if handles.is_empty() {
        println!();
        println!(
            "No confident handle matches (the '{}' backend has no user search).",
            service.name()
        );
    } else {
        println!();
        println!("Best-guess handles:");
        for handle in &handles {
            println!("  @{}", handle);
        }
    }
    Ok(())
}
