//! Typed content recovered from a markdown document.

use serde::Serialize;

/// One content unit in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentElement {
    Text { body: String },
    Image { url: String },
}

impl std::fmt::Display for ContentElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentElement::Text { body } => write!(f, "{}", body),
            ContentElement::Image { url } => {
                let short: String = url.chars().take(70).collect();
                write!(f, "img @ {}...", short)
            }
        }
    }
}

/// The paper/article the thread is about: first hyperlink's display text and
/// target, or a bare URL recovered by the fallback pattern (empty title).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectReference {
    pub title: String,
    pub url: String,
}

/// Everything the extractor recovers from one document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    /// Surviving text/image units in document order.
    pub elements: Vec<ContentElement>,
    pub subject: Option<SubjectReference>,
    /// Handles from `TAG_USERS:` lines; these short-circuit automatic
    /// author resolution.
    pub tagged_users: Vec<String>,
}
