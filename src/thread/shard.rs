//! Length-bounded text sharding.
//!
//! Splits an oversized text block into fragments at whitespace boundaries,
//! aiming for visually balanced fragment sizes instead of greedily filling
//! each fragment (greedy filling leaves an ugly straggling tail). All
//! lengths are character counts.

use thiserror::Error;

/// Limits and policy for one sharding pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardConfig {
    /// Maximum characters per fragment, ellipsis included.
    pub max_unit_len: usize,
    /// Marker inserted at cut points.
    pub ellipsis: String,
    /// Slack added to the balanced chunk target.
    pub padding: usize,
    /// Append the trailing ellipsis even after sentence punctuation.
    pub always_ellipsis: bool,
}

impl Default for ShardConfig {
    fn default() -> Self {
        Self {
            max_unit_len: 272,
            ellipsis: "\u{2026}".to_string(),
            padding: 16,
            always_ellipsis: false,
        }
    }
}

/// Errors from sharding.
#[derive(Debug, Error)]
pub enum ShardError {
    /// A single token is longer than the fragment budget. This is a defect
    /// in the input, not a recoverable condition.
    #[error("no whitespace break within the first {target} characters; a single token exceeds the fragment budget")]
    UnshardableText { target: usize },
}

/// Split `text` into ordered fragments of at most `max_unit_len` characters.
///
/// Text short enough to fit is returned trimmed and unmarked. Otherwise
/// every cut lands on a space; non-first fragments get a leading ellipsis,
/// and a fragment cut mid-sentence gets a trailing one (sentence-final
/// punctuation is preserved instead unless `always_ellipsis` is set).
pub fn shard(text: &str, config: &ShardConfig) -> Result<Vec<String>, ShardError> {
    let text = text.trim();
    let total = text.chars().count();
    if total <= config.max_unit_len {
        return Ok(vec![text.to_string()]);
    }

    let ellipsis_len = config.ellipsis.chars().count();
    // room left for content once both edges may carry an ellipsis
    let snippet_len = config
        .max_unit_len
        .saturating_sub(2 * ellipsis_len)
        .max(1);

    // balance fragment sizes across the whole text
    let target_fragments = (total + snippet_len - 1) / snippet_len;
    let target_chunk_len = (config.padding + total / target_fragments).min(snippet_len);

    let mut remaining = text;
    let mut fragments = Vec::with_capacity(target_fragments);
    loop {
        let split_at = rightmost_space_before(remaining, target_chunk_len).ok_or(
            ShardError::UnshardableText {
                target: target_chunk_len,
            },
        )?;

        let mut chunk = remaining[..split_at].trim_end().to_string();
        let ends_sentence = chunk.ends_with(&['.', '!', '?'][..]);
        if config.always_ellipsis || !ends_sentence {
            chunk.push_str(&config.ellipsis);
        }
        if !fragments.is_empty() {
            chunk.insert_str(0, &config.ellipsis);
        }
        fragments.push(chunk);

        remaining = remaining[split_at + 1..].trim_start();
        if remaining.chars().count() < snippet_len {
            fragments.push(format!("{}{}", config.ellipsis, remaining));
            break;
        }
    }

    Ok(fragments)
}

/// Byte offset of the rightmost space strictly before `limit` characters.
fn rightmost_space_before(text: &str, limit: usize) -> Option<usize> {
    let mut found = None;
    for (seen, (byte, ch)) in text.char_indices().enumerate() {
        if seen >= limit {
            break;
        }
        if ch == ' ' {
            found = Some(byte);
        }
    }
    found
}
