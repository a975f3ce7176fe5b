//! PostingService trait and related types.

use serde::Serialize;

/// A backend that can publish posts and look up users.
///
/// Implementations wrap a concrete social-platform API. The core never
/// retries these calls; rate limiting and backoff belong to the
/// implementation.
pub trait PostingService {
    /// Backend identifier for messages and logs.
    fn name(&self) -> &'static str;

    /// Upload one image (URL or local path) and return its media id.
    fn upload_media(&self, source: &str) -> Result<String, PostingError>;

    /// Create one post and return its id.
    fn create_post(&self, request: &PostRequest) -> Result<String, PostingError>;

    /// Search the user directory. May return an empty list when the
    /// backend has no directory (the dry-run backend does).
    fn search_users(&self, query: &str) -> Result<Vec<UserCandidate>, PostingError>;

    /// Followers of a user, for audience inspection.
    fn followers(&self, handle: &str) -> Result<Vec<UserCandidate>, PostingError>;

    /// Resolve a handle to the backend's user id.
    fn lookup_user_id(&self, handle: &str) -> Result<String, PostingError>;
}

/// One post-creation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostRequest {
    pub text: String,
    pub media_ids: Vec<String>,
    /// User ids to tag in the attached media.
    pub tag_user_ids: Vec<String>,
    /// Id of the post this replies to (thread chaining).
    pub reply_to: Option<String>,
    /// Id of the post this quote-references.
    pub quote: Option<String>,
}

/// A user returned by `search_users` / `followers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCandidate {
    pub handle: String,
    pub display_name: String,
    pub bio: String,
    pub follower_count: u64,
}

/// Errors surfaced by posting backends.
#[derive(Debug, thiserror::Error)]
pub enum PostingError {
    /// The service rejected the post as a duplicate. Surfaced verbatim;
    /// never swallowed.
    #[error("posting service rejected a duplicate post: {0}")]
    DuplicatePost(String),

    #[error("media upload failed for {media}: {message}")]
    Media { media: String, message: String },

    #[error("user lookup failed for @{handle}: {message}")]
    UserLookup { handle: String, message: String },

    #[error("posting service error: {0}")]
    Service(String),

    #[error("unknown posting backend '{0}'")]
    UnknownBackend(String),
}
