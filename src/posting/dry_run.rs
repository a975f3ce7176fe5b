//! Dry-run posting backend.
//!
//! Prints every call it would make and hands back synthetic ids, so the
//! publish pipeline can be exercised end to end without credentials.

use std::cell::Cell;

use super::service::{PostRequest, PostingError, PostingService, UserCandidate};

/// Backend that narrates instead of posting.
#[derive(Debug, Default)]
pub struct DryRunPoster {
    counter: Cell<u64>,
}

impl DryRunPoster {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self, kind: &str) -> String {
        let n = self.counter.get() + 1;
        self.counter.set(n);
        format!("{}-{}", kind, n)
    }
}

impl PostingService for DryRunPoster {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn upload_media(&self, source: &str) -> Result<String, PostingError> {
        let id = self.next_id("media");
        println!("[dry-run] would upload media {} as {}", source, id);
        Ok(id)
    }

    fn create_post(&self, request: &PostRequest) -> Result<String, PostingError> {
        let id = self.next_id("post");
        println!("[dry-run] would create post {}:", id);
        println!("  text: {:?}", request.text);
        if !request.media_ids.is_empty() {
            println!("  media: {}", request.media_ids.join(", "));
        }
        if !request.tag_user_ids.is_empty() {
            println!("  tag users: {}", request.tag_user_ids.join(", "));
        }
        if let Some(reply_to) = &request.reply_to {
            println!("  in reply to: {}", reply_to);
        }
        if let Some(quote) = &request.quote {
            println!("  quoting: {}", quote);
        }
        Ok(id)
    }

    fn search_users(&self, _query: &str) -> Result<Vec<UserCandidate>, PostingError> {
        // no user directory without a real backend
        Ok(Vec::new())
    }

    fn followers(&self, _handle: &str) -> Result<Vec<UserCandidate>, PostingError> {
        Ok(Vec::new())
    }

    fn lookup_user_id(&self, handle: &str) -> Result<String, PostingError> {
        // echo the handle; real backends return numeric ids
        Ok(handle.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_per_kind() {
        let poster = DryRunPoster::new();
        assert_eq!(poster.upload_media("http://i/1.png").unwrap(), "media-1");
        let post = poster.create_post(&PostRequest::default()).unwrap();
        assert_eq!(post, "post-2");
    }

    #[test]
    fn search_has_no_directory() {
        let poster = DryRunPoster::new();
        assert!(poster.search_users("anyone").unwrap().is_empty());
    }
}
