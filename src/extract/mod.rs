//! Content extraction: markdown document -> ordered typed elements.
//!
//! The pipeline is three passes: line-level preprocessing
//! ([`preprocess`]), a markdown event walk producing `Text`/`Image`
//! elements and the subject reference ([`markdown`]), and a regex fallback
//! for documents that mention the paper URL without linking it.

mod markdown;
mod preprocess;
mod types;

pub use preprocess::{
    cleanup_clipboard_markdown, normalize_ordered_markers, split_tag_users, TAG_USERS_MARKER,
};
pub use types::{ContentElement, Extraction, SubjectReference};

use crate::config::SubjectConfig;

/// Errors from content extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid subject URL pattern: {0}")]
    InvalidSubjectPattern(#[from] regex::Error),
}

/// Extract typed content from a markdown document.
///
/// `TAG_USERS:` lines are split out first and never reach the parser;
/// ordered-list markers are neutralized so they cannot collide with thread
/// numbering. A document with no extractable content yields an empty
/// element list (the assembler decides whether that is an error).
pub fn extract(markdown: &str, policy: &SubjectConfig) -> Result<Extraction, ExtractError> {
    let (body, tagged_users) = preprocess::split_tag_users(markdown);
    let body = preprocess::normalize_ordered_markers(&body);
    let (elements, mut subject) = markdown::collect_elements(&body, policy);
    if subject.is_none() && !policy.fallback_url_pattern.is_empty() {
        subject = markdown::fallback_subject(markdown, &policy.fallback_url_pattern)?;
    }
    tracing::debug!(
        elements = elements.len(),
        has_subject = subject.is_some(),
        tagged_users = tagged_users.len(),
        "extracted document"
    );
    Ok(Extraction {
        elements,
        subject,
        tagged_users,
    })
}
