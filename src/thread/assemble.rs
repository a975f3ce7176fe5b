//! Thread assembly: ordered content elements -> numbered posts.

use tracing::debug;

use super::closing;
use super::shard::{self, ShardError};
use super::types::{Post, Thread};
use crate::config::Config;
use crate::extract::{ContentElement, Extraction};

/// Errors from thread assembly.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("document contains no text or image content")]
    EmptyDocument,
    #[error("only one image may appear before the first text block")]
    UnsupportedLeadingImage,
    #[error(transparent)]
    Shard(#[from] ShardError),
}

/// Assemble a thread from extracted content.
///
/// `mentions` are the final author handles to credit (the caller has
/// already merged `TAG_USERS:` lines, CLI flags, and automatic
/// resolution). Walks runs of one text element plus its trailing images:
/// the text is sharded, the images are spread as evenly as possible over
/// the resulting posts, and the first image of the whole document (under
/// the hero policy) rides alone on the very first post.
pub fn assemble(
    extraction: Extraction,
    mentions: &[String],
    config: &Config,
) -> Result<Thread, AssembleError> {
    let Extraction {
        mut elements,
        subject,
        ..
    } = extraction;

    if elements.is_empty() {
        return Err(AssembleError::EmptyDocument);
    }

    // closing element; without a subject URL there is no paper to point at,
    // so no closing is synthesized
    if let Some(subject) = &subject {
        let closing_text = closing::render_closing(&subject.url, mentions, &config.templates);
        if !closing_text.trim().is_empty() {
            elements.push(ContentElement::Text { body: closing_text });
        }
    }

    // pull out the first image, if present, to lead the thread
    let mut hero: Option<String> = None;
    if config.subject.hero_from_first_image {
        if let Some(idx) = elements
            .iter()
            .position(|e| matches!(e, ContentElement::Image { .. }))
        {
            if let ContentElement::Image { url } = elements.remove(idx) {
                hero = Some(url);
            }
        }
    }

    // two or more images before any text is unsupported
    match elements.first_mut() {
        Some(ContentElement::Text { body }) => {
            if let Some(subject) = &subject {
                if !subject.title.is_empty() {
                    *body = format!("{}\n{}", subject.title, body);
                }
            }
        }
        _ => return Err(AssembleError::UnsupportedLeadingImage),
    }

    let shard_config = config.thread.shard_config();
    let mut posts: Vec<Post> = Vec::new();
    let mut carry_images: Vec<String> = Vec::new();
    let mut first_run = true;
    let mut iter = elements.into_iter().peekable();

    while let Some(element) = iter.next() {
        let body = match element {
            ContentElement::Text { body } => body,
            // images are drained with their preceding text run below; a
            // stray one joins the next run's pool
            ContentElement::Image { url } => {
                carry_images.push(url);
                continue;
            }
        };

        let mut run_posts: Vec<Post> = shard::shard(&body, &shard_config)?
            .into_iter()
            .map(Post::new)
            .collect();

        let mut run_images = std::mem::take(&mut carry_images);
        while matches!(iter.peek(), Some(ContentElement::Image { .. })) {
            if let Some(ContentElement::Image { url }) = iter.next() {
                run_images.push(url);
            }
        }

        if first_run {
            first_run = false;
            if let Some(url) = hero.take() {
                // the hero rides alone so it renders large; other images of
                // this run go to the remaining posts
                let mut hero_post = run_posts.remove(0);
                hero_post.images = vec![url];
                posts.push(hero_post);
            }
        }

        if run_posts.is_empty() {
            // the hero consumed this run's only post; its images roll over
            carry_images = run_images;
            continue;
        }

        distribute_images(&mut run_posts, run_images);
        posts.append(&mut run_posts);
    }

    // images with no run left to land in stay on the final post
    if !carry_images.is_empty() {
        if let Some(last) = posts.last_mut() {
            last.images.append(&mut carry_images);
        }
    }

    let total = posts.len();
    for (i, post) in posts.iter_mut().enumerate() {
        post.text.push_str(&format!(" [{}/{}]", i + 1, total));
    }

    let cap = config.thread.tag_users_max_posts;
    if !mentions.is_empty() && (cap == 0 || total <= cap) {
        if let Some(first) = posts.first_mut() {
            first.tagged_users = mentions
                .iter()
                .map(|m| m.trim_start_matches('@').to_string())
                .filter(|m| !m.is_empty())
                .collect();
        }
    }

    debug!(posts = total, "assembled thread");
    Ok(Thread { posts })
}

/// Spread `images` over `posts`: `ceil(images / posts)` per post, earlier
/// posts filling first, no wraparound.
fn distribute_images(posts: &mut [Post], images: Vec<String>) {
    if images.is_empty() {
        return;
    }
    let per_post = (images.len() + posts.len() - 1) / posts.len();
    for (i, post) in posts.iter_mut().enumerate() {
        let start = i * per_post;
        if start >= images.len() {
            break;
        }
        let end = (start + per_post).min(images.len());
        post.images = images[start..end].to_vec();
    }
}
