//! Publish subcommand handler.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use ptc::authors::resolve_author_handles;
use ptc::extract;
use ptc::metadata::{ArxivSource, PaperMetadataSource};
use ptc::posting::{self, PublishOptions};
use ptc::thread::{assemble, preview};
use ptc::Config;

use super::{prompt_confirmation, read_input};

/// Compose the document and post it as a thread through the configured
/// backend.
pub fn handle(input: &Path, yes: bool, no_quote_first: bool, mentions: &[String]) -> Result<()> {
    let config = Config::load()?;
    let markdown = read_input(input)?;

    let extraction = extract::extract(&markdown, &config.subject)?;
    let service = posting::backend_from_config(&config.posting)?;

    // explicit handles win over automatic resolution
    let mentions: Vec<String> = if !extraction.tagged_users.is_empty() {
        extraction.tagged_users.clone()
    } else if !mentions.is_empty() {
        mentions.to_vec()
    } else {
        resolve_mentions_from_subject(&extraction, service.as_ref())
    };

    let thread = assemble(extraction, &mentions, &config)?;

    println!("{}", preview::render(&thread));
    println!();

    let message = format!(
        "Publish {} post(s) via the '{}' backend?",
        thread.len(),
        service.name()
    );
    if !yes && !prompt_confirmation(&message)? {
        println!("Aborted.");
        return Ok(());
    }

    let mut options = PublishOptions::from_config(&config.thread);
    if no_quote_first {
        options.quote_first_in_final = false;
    }

    let report = posting::publish_thread(service.as_ref(), &thread, &options)
        .context("failed to publish thread")?;

    println!("Published {} post(s).", report.post_ids.len());
    if let Some(first) = report.first_post_id() {
        println!("First post id: {}", first);
    }
    Ok(())
}

/// Look the paper's authors up and resolve them to handles.
///
/// Best effort: a missing subject, a metadata failure, or a backend
/// without user search all degrade to "no mentions" (the closing then
/// uses the plain template).
fn resolve_mentions_from_subject(
    extraction: &extract::Extraction,
    service: &dyn posting::PostingService,
) -> Vec<String> {
    let Some(subject) = &extraction.subject else {
        return Vec::new();
    };
    let metadata = match ArxivSource::new().fetch(&subject.url) {
        Ok(metadata) => metadata,
        Err(error) => {
            warn!(url = %subject.url, %error, "could not fetch paper metadata");
            return Vec::new();
        }
    };
    match resolve_author_handles(service, &metadata.authors) {
        Ok(handles) => handles,
        Err(error) => {
            warn!(%error, "author resolution failed");
            Vec::new()
        }
    }
}
