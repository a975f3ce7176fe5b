//! Paper metadata collaborators.

mod arxiv;

pub use arxiv::ArxivSource;

/// Title, authors, and abstract of one paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperMetadata {
    pub title: String,
    pub authors: Vec<String>,
    pub abstract_text: String,
}

/// Errors from metadata sources.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page did not have the structure we scrape. Fails fast rather
    /// than guessing at partial data.
    #[error("unexpected page structure: {0}")]
    UnexpectedPage(&'static str),
}

/// A source of paper metadata keyed by abstract-page URL.
pub trait PaperMetadataSource {
    fn fetch(&self, url: &str) -> Result<PaperMetadata, MetadataError>;
}
