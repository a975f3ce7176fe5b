//! Textual passes applied to a document before markdown parsing.
//!
//! These operate on whole lines or literal patterns, not on parsed
//! structure, and each runs exactly once (no fixed-point iteration).

use std::sync::OnceLock;

use regex::Regex;

/// Prefix of lines that list user handles to tag.
pub const TAG_USERS_MARKER: &str = "TAG_USERS:";

fn ordered_marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^(\s*)(\d+)\.\s").expect("invalid ordered-marker regex"))
}

fn wrapped_image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\[!\[\]\(([^)\s]*)\)\]\([^)\s]*\)").expect("invalid wrapped-image regex")
    })
}

fn image_then_text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(!\[\]\([^)\s]*\))\n(\S)").expect("invalid image-spacing regex")
    })
}

/// Split out `TAG_USERS:` lines.
///
/// Returns the document without those lines and the whitespace-separated
/// handles they carried, in order of appearance.
pub fn split_tag_users(markdown: &str) -> (String, Vec<String>) {
    let mut handles = Vec::new();
    let mut kept = Vec::new();
    for line in markdown.lines() {
        match line.trim_start().strip_prefix(TAG_USERS_MARKER) {
            Some(rest) => handles.extend(rest.split_whitespace().map(str::to_string)),
            None => kept.push(line),
        }
    }
    (kept.join("\n"), handles)
}

/// Rewrite `1. ` ordered-list markers to `1): `.
///
/// A markdown parser would otherwise open an ordered list, and renumbered
/// list markers collide with the thread's own `[i/N]` numbering.
pub fn normalize_ordered_markers(markdown: &str) -> String {
    ordered_marker_re()
        .replace_all(markdown, "$1$2): ")
        .into_owned()
}

/// Cleanup for markdown converted from clipboard HTML.
///
/// Converters wrap images hosted behind a click-through link as
/// `[![](img)](target)`; unwrap those to plain `![](img)`, force a blank
/// line between an image and immediately following text (so the image stays
/// attached to the text above it), and drop decoration characters.
pub fn cleanup_clipboard_markdown(markdown: &str) -> String {
    let text = markdown.replace('\u{2b50}', "");
    // put each wrapped image on its own line so the unwrap pattern can match
    let text = text.replace("[![](", "\n[![](");
    let text = wrapped_image_re().replace_all(&text, "![]($1)\n");
    image_then_text_re()
        .replace_all(&text, "$1\n\n$2")
        .into_owned()
}
