//! Closing-text synthesis for the final post of a thread.

use crate::config::TemplateConfig;

/// Default closing when author handles were resolved. `{link}` and
/// `{authors}` are replaced at render time.
pub const DEFAULT_CLOSING_WITH_AUTHORS: &str =
    "Paper: {link}\n\nCongrats to {authors} on the great work!";

/// Default closing when no author handles are known.
pub const DEFAULT_CLOSING_WITHOUT_AUTHORS: &str = "Paper: {link}";

/// Prefix a handle with `@` unless it already has one.
pub(crate) fn ensure_mention(handle: &str) -> String {
    if handle.starts_with('@') {
        handle.to_string()
    } else {
        format!("@{}", handle)
    }
}

/// Render the closing text for a thread.
///
/// The with-authors variant is used only when there are mentions *and* a
/// subject URL; without a subject there is no paper to credit the authors
/// for, so the plain variant applies (degraded mode, not an error).
/// Returns an empty string when the selected template is empty, which
/// suppresses the closing entirely.
pub fn render_closing(subject_url: &str, mentions: &[String], templates: &TemplateConfig) -> String {
    let mentions: Vec<String> = mentions
        .iter()
        .filter(|m| !m.is_empty())
        .map(|m| ensure_mention(m))
        .collect();

    if mentions.is_empty() || subject_url.is_empty() {
        let template = templates
            .closing_without_authors
            .as_deref()
            .unwrap_or(DEFAULT_CLOSING_WITHOUT_AUTHORS);
        template.replace("{link}", subject_url)
    } else {
        let template = templates
            .closing_with_authors
            .as_deref()
            .unwrap_or(DEFAULT_CLOSING_WITH_AUTHORS);
        template
            .replace("{link}", subject_url)
            .replace("{authors}", &mentions.join(" "))
    }
}
