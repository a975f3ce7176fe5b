//! Markdown event walk producing typed content elements.
//!
//! pulldown-cmark's event stream replaces the loosely-typed tag-name
//! dispatch a DOM walk would need: every construct the extractor cares
//! about is matched structurally, and everything else falls through a
//! single catch-all.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use regex::Regex;

use super::types::{ContentElement, SubjectReference};
use super::ExtractError;
use crate::config::SubjectConfig;

/// Walk `markdown` in document order.
///
/// Paragraph-like blocks (paragraphs, list items, headings) become `Text`
/// elements with whitespace runs collapsed; images become `Image` elements,
/// emitted after the text of the block containing them. The first hyperlink
/// with display text becomes the subject (under the first-link policy) and
/// is removed from body content; all other hyperlinks are unwrapped to
/// their display text. Code blocks and rules are dropped.
pub(super) fn collect_elements(
    markdown: &str,
    policy: &SubjectConfig,
) -> (Vec<ContentElement>, Option<SubjectReference>) {
    let mut collector = Collector::new(policy.from_first_link);
    for event in Parser::new(markdown) {
        collector.handle(event);
    }
    collector.finish()
}

/// Fallback subject: first match of the configured URL pattern in the raw
/// document, with an empty title.
pub(super) fn fallback_subject(
    markdown: &str,
    pattern: &str,
) -> Result<Option<SubjectReference>, ExtractError> {
    let re = Regex::new(pattern)?;
    Ok(re.find(markdown).map(|m| SubjectReference {
        title: String::new(),
        url: m.as_str().to_string(),
    }))
}

struct Collector {
    subject_from_first_link: bool,
    elements: Vec<ContentElement>,
    subject: Option<SubjectReference>,
    /// Text of the block currently being accumulated.
    text_buf: String,
    /// Images seen inside the current block, emitted at block end.
    pending_images: Vec<String>,
    /// Candidate subject link: (url, display text so far).
    capturing_link: Option<(String, String)>,
    block_depth: usize,
    image_depth: usize,
    code_block_depth: usize,
}

impl Collector {
    fn new(subject_from_first_link: bool) -> Self {
        Self {
            subject_from_first_link,
            elements: Vec::new(),
            subject: None,
            text_buf: String::new(),
            pending_images: Vec::new(),
            capturing_link: None,
            block_depth: 0,
            image_depth: 0,
            code_block_depth: 0,
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Paragraph | Tag::Item) | Event::Start(Tag::Heading { .. }) => {
                self.block_depth += 1;
            }
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::Heading(_)) => {
                self.block_depth = self.block_depth.saturating_sub(1);
                self.flush_block();
            }
            Event::Start(Tag::CodeBlock(_)) => self.code_block_depth += 1,
            Event::End(TagEnd::CodeBlock) => {
                self.code_block_depth = self.code_block_depth.saturating_sub(1);
            }
            Event::Start(Tag::Image { dest_url, .. }) => {
                self.pending_images.push(dest_url.to_string());
                self.image_depth += 1;
            }
            Event::End(TagEnd::Image) => {
                self.image_depth = self.image_depth.saturating_sub(1);
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                let eligible = self.subject_from_first_link
                    && self.subject.is_none()
                    && self.capturing_link.is_none()
                    && self.image_depth == 0;
                if eligible {
                    self.capturing_link = Some((dest_url.to_string(), String::new()));
                }
            }
            Event::End(TagEnd::Link) => {
                if let Some((url, title)) = self.capturing_link.take() {
                    let title = collapse_whitespace(&title);
                    // a link with no display text (e.g. one wrapping only an
                    // image) is not a usable subject; the slot stays open
                    if !title.is_empty() {
                        self.subject = Some(SubjectReference { title, url });
                    }
                }
            }
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => self.push_text(&code),
            Event::SoftBreak | Event::HardBreak => self.push_text(" "),
            // rules, raw HTML, block quotes markers, task markers, etc. carry
            // no extractable content of their own
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.image_depth > 0 || self.code_block_depth > 0 {
            return; // alt text and code listings are not body content
        }
        if let Some((_, title)) = &mut self.capturing_link {
            title.push_str(text);
        } else if self.block_depth > 0 {
            self.text_buf.push_str(text);
        }
    }

    /// Emit the accumulated block text (if any), then the block's images.
    fn flush_block(&mut self) {
        let body = collapse_whitespace(&self.text_buf);
        self.text_buf.clear();
        if !body.is_empty() {
            self.elements.push(ContentElement::Text { body });
        }
        for url in self.pending_images.drain(..) {
            self.elements.push(ContentElement::Image { url });
        }
    }

    fn finish(mut self) -> (Vec<ContentElement>, Option<SubjectReference>) {
        self.flush_block();
        (self.elements, self.subject)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
