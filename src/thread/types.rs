//! Thread data model.

use serde::Serialize;

/// One size-bounded unit of the published thread.
///
/// Mutated only during assembly (numbering suffix, hero image, tag
/// assignment); immutable once the thread is returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Post {
    pub text: String,
    /// Image URLs attached to this post, in order.
    pub images: Vec<String>,
    /// Handles (without `@`) to tag in this post's media. Only ever
    /// non-empty on the first post of a thread.
    pub tagged_users: Vec<String>,
}

impl Post {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl std::fmt::Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)?;
        for img in &self.images {
            let short: String = img.chars().take(70).collect();
            write!(f, "\n - {}", short)?;
        }
        Ok(())
    }
}

/// An ordered sequence of posts; insertion order is publish order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Thread {
    pub posts: Vec<Post>,
}

impl Thread {
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
