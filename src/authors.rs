//! Best-guess mapping from paper author names to platform handles.
//!
//! Searching a name returns plenty of unrelated accounts; candidates are
//! scored on signals that correlate with "this is the researcher" and only
//! confident matches survive. Heuristic by nature - callers treat the
//! result as a suggestion to review, not ground truth.

use tracing::debug;

use crate::posting::{PostingError, PostingService, UserCandidate};

/// Case-insensitive bio substrings suggesting a researcher account.
const BIO_KEYWORDS_ANY_CASE: &[&str] = &[
    "research",
    "scien",
    "university",
    "phd",
    "ph.d",
    "faculty",
    "professor",
    "google",
    "msr",
    "microsoft",
    "deepmind",
    "facebook",
    "meta",
    "openai",
    "amazon",
    "stanford",
    "cmu",
    "harvard",
    "student",
    "machine learning",
    "data",
    "neural",
];

/// Case-sensitive bio substrings (lowercasing these would match noise).
const BIO_KEYWORDS_CASED: &[&str] = &["MIT", "AI", "ML"];

/// A candidate needs more than the top-position and name-match points
/// alone to count as a confident match.
const SCORE_THRESHOLD: u32 = 2;

/// Score one search result for one author name.
///
/// `rank` is the candidate's position in the search results.
pub fn score_candidate(author: &str, rank: usize, candidate: &UserCandidate) -> u32 {
    let mut score = 0;
    if rank == 0 {
        score += 1; // the top hit is usually right
    }
    if candidate.display_name.to_lowercase() == author.to_lowercase() {
        score += 1;
    }
    if candidate.follower_count > 10 {
        score += 1;
    }
    let bio_lower = candidate.bio.to_lowercase();
    score += BIO_KEYWORDS_ANY_CASE
        .iter()
        .filter(|keyword| bio_lower.contains(*keyword))
        .count() as u32;
    score += BIO_KEYWORDS_CASED
        .iter()
        .filter(|keyword| candidate.bio.contains(*keyword))
        .count() as u32;
    score
}

/// Resolve author names to handles via the backend's user search.
///
/// Returns handles for confidently matched authors only, in the input
/// author order; unresolved authors are skipped.
pub fn resolve_author_handles(
    service: &dyn PostingService,
    authors: &[String],
) -> Result<Vec<String>, PostingError> {
    let mut handles = Vec::new();
    for author in authors {
        let candidates = service.search_users(author)?;
        let mut best: Option<(u32, &UserCandidate)> = None;
        for (rank, candidate) in candidates.iter().enumerate() {
            let score = score_candidate(author, rank, candidate);
            if score <= SCORE_THRESHOLD {
                continue;
            }
            // first candidate wins ties
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, candidate));
            }
        }
        match best {
            Some((score, candidate)) => {
                debug!(author = %author, handle = %candidate.handle, score, "matched author");
                handles.push(candidate.handle.clone());
            }
            None => debug!(author = %author, "no confident match"),
        }
    }
    Ok(handles)
}
