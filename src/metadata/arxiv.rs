//! Arxiv abstract-page metadata source.

use scraper::{Html, Selector};
use tracing::debug;

use super::{MetadataError, PaperMetadata, PaperMetadataSource};

/// Scrapes title, authors, and abstract from an arxiv abs page.
///
/// Requests go to the `export.arxiv.org` mirror, which arxiv designates
/// for programmatic access.
pub struct ArxivSource {
    client: reqwest::blocking::Client,
}

impl ArxivSource {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("ptc/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl Default for ArxivSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PaperMetadataSource for ArxivSource {
    fn fetch(&self, url: &str) -> Result<PaperMetadata, MetadataError> {
        let fetch_url = export_mirror_url(url);
        debug!(url = %fetch_url, "fetching arxiv abstract page");
        let html = self
            .client
            .get(&fetch_url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| MetadataError::Http {
                url: fetch_url.clone(),
                source,
            })?;
        parse_abs_page(&html)
    }
}

fn export_mirror_url(url: &str) -> String {
    if url.contains("export.arxiv.org") {
        url.to_string()
    } else {
        url.replace("arxiv.org", "export.arxiv.org")
    }
}

/// Scrape one abs page.
///
/// The selectors are static, so `Selector::parse` cannot fail at runtime.
fn parse_abs_page(html: &str) -> Result<PaperMetadata, MetadataError> {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse("title").expect("invalid title selector");
    let authors_selector = Selector::parse("div.authors a").expect("invalid authors selector");
    let abstract_selector =
        Selector::parse("blockquote.abstract").expect("invalid abstract selector");

    // <title> is "[2106.10860] Actual Title"
    let raw_title: String = document
        .select(&title_selector)
        .next()
        .ok_or(MetadataError::UnexpectedPage("missing <title>"))?
        .text()
        .collect();
    let title = match raw_title.find(']') {
        Some(pos) => raw_title[pos + 1..].trim().to_string(),
        None => raw_title.trim().to_string(),
    };

    let authors: Vec<String> = document
        .select(&authors_selector)
        .map(|anchor| anchor.text().collect::<String>().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    if authors.is_empty() {
        return Err(MetadataError::UnexpectedPage("missing authors block"));
    }

    let abstract_text: String = document
        .select(&abstract_selector)
        .next()
        .ok_or(MetadataError::UnexpectedPage("missing abstract blockquote"))?
        .text()
        .collect();
    let abstract_text = abstract_text
        .trim()
        .strip_prefix("Abstract:")
        .map(str::trim)
        .unwrap_or(abstract_text.trim())
        .to_string();

    debug!(authors = authors.len(), "scraped arxiv metadata");
    Ok(PaperMetadata {
        title,
        authors,
        abstract_text,
    })
}
