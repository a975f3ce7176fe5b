//! Human-reviewable markdown rendering of an assembled thread.

use super::closing::ensure_mention;
use super::types::Thread;

/// Render a thread as a markdown document with `----` rules between posts.
///
/// Pure formatting over the thread state: no validation, and rendering the
/// same thread twice yields identical output.
pub fn render(thread: &Thread) -> String {
    let mut out = String::new();
    for (i, post) in thread.posts.iter().enumerate() {
        out.push_str(&double_isolated_newlines(&post.text));
        for img in &post.images {
            out.push_str(&format!("\n![]({})", img));
        }
        if !post.tagged_users.is_empty() {
            out.push_str("\n*Users to tag in image:*");
            for user in &post.tagged_users {
                out.push_str(&format!("\n 1. {}", ensure_mention(user)));
            }
        }
        if i + 1 < thread.posts.len() {
            out.push_str("\n\n----\n\n");
        }
    }
    out
}

/// Map each lone `\n` to `\n\n` so single linebreaks become markdown
/// paragraph breaks. Single pass: a newline that already neighbors another
/// newline is copied through unchanged, so existing breaks never inflate.
fn double_isolated_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_was_newline = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\n' && !prev_was_newline && chars.peek() != Some(&'\n') {
            out.push_str("\n\n");
        } else {
            out.push(c);
        }
        prev_was_newline = c == '\n';
    }
    out
}
