//! Thread composition: sharding, assembly, and preview rendering.
//!
//! [`compose`] is the one-call pipeline from a markdown document to a
//! finished [`Thread`]; the submodules expose the individual stages.

pub mod assemble;
pub mod closing;
pub mod preview;
pub mod shard;
mod types;

pub use assemble::{assemble, AssembleError};
pub use types::{Post, Thread};

use crate::config::Config;
use crate::extract::{self, ExtractError};

/// Errors from the full compose pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Assemble(#[from] AssembleError),
}

/// Extract a markdown document and assemble it into a thread.
///
/// Handles from `TAG_USERS:` lines take precedence over `mentions`.
pub fn compose(markdown: &str, mentions: &[String], config: &Config) -> Result<Thread, ComposeError> {
    let extraction = extract::extract(markdown, &config.subject)?;
    let mentions: Vec<String> = if extraction.tagged_users.is_empty() {
        mentions.to_vec()
    } else {
        extraction.tagged_users.clone()
    };
    Ok(assemble(extraction, &mentions, config)?)
}
