//! Starter-document generation for a paper.
//!
//! Produces a bare-bones markdown summary (title, abstract, closing) meant
//! to be hand-edited and then run through `preview`. The closing is
//! already embedded, so skeleton output must not be combined with the
//! composer's own closing synthesis twice; the closing here carries the
//! paper URL, which the composer's fallback subject detection picks up.

use crate::config::TemplateConfig;
use crate::metadata::PaperMetadata;
use crate::thread::closing;

/// Render a starter markdown document for one paper.
pub fn skeleton_for_paper(
    metadata: &PaperMetadata,
    url: &str,
    author_handles: &[String],
    templates: &TemplateConfig,
) -> String {
    let closing_text = closing::render_closing(url, author_handles, templates);
    format!(
        "{}\n{}\n\n{}\n",
        metadata.title, metadata.abstract_text, closing_text
    )
}
