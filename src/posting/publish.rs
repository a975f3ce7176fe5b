//! Publishing an assembled thread through a posting backend.

use tracing::{debug, info};

use super::service::{PostRequest, PostingError, PostingService};
use crate::config::ThreadConfig;
use crate::thread::Thread;

/// Publish-time policy.
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Quote-reference the first post from the final post of long threads.
    pub quote_first_in_final: bool,
    /// "Long" means more than this many posts.
    pub quote_threshold: usize,
}

impl PublishOptions {
    pub fn from_config(config: &ThreadConfig) -> Self {
        Self {
            quote_first_in_final: config.quote_first_at_end,
            quote_threshold: config.quote_threshold,
        }
    }
}

/// Ids of the created posts, in thread order.
#[derive(Debug, Clone)]
pub struct PublishReport {
    pub post_ids: Vec<String>,
}

impl PublishReport {
    pub fn first_post_id(&self) -> Option<&str> {
        self.post_ids.first().map(String::as_str)
    }
}

/// Publish every post of `thread` in order.
///
/// Each post's images are uploaded first; each subsequent post replies to
/// the previous one; the final post of a thread longer than the quote
/// threshold quote-references the first. Errors (including duplicate
/// rejection) propagate immediately without retries, leaving earlier posts
/// standing.
pub fn publish_thread(
    service: &dyn PostingService,
    thread: &Thread,
    options: &PublishOptions,
) -> Result<PublishReport, PostingError> {
    let total = thread.len();
    let mut post_ids: Vec<String> = Vec::with_capacity(total);

    for (i, post) in thread.posts.iter().enumerate() {
        let media_ids = post
            .images
            .iter()
            .map(|img| service.upload_media(img))
            .collect::<Result<Vec<_>, _>>()?;

        let tag_user_ids = post
            .tagged_users
            .iter()
            .map(|handle| service.lookup_user_id(handle))
            .collect::<Result<Vec<_>, _>>()?;

        let is_final = i + 1 == total;
        let quote = if options.quote_first_in_final && is_final && total > options.quote_threshold {
            post_ids.first().cloned()
        } else {
            None
        };

        let request = PostRequest {
            text: post.text.clone(),
            media_ids,
            tag_user_ids,
            reply_to: post_ids.last().cloned(),
            quote,
        };

        debug!(index = i, backend = service.name(), "creating post");
        let id = service.create_post(&request)?;
        post_ids.push(id);
    }

    info!(posts = total, backend = service.name(), "thread published");
    Ok(PublishReport { post_ids })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::posting::service::UserCandidate;
    use crate::thread::Post;

    /// Records every call; fails on demand.
    #[derive(Default)]
    struct RecordingService {
        requests: RefCell<Vec<PostRequest>>,
        uploads: RefCell<Vec<String>>,
        duplicate_on: Option<usize>,
    }

    impl PostingService for RecordingService {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn upload_media(&self, source: &str) -> Result<String, PostingError> {
            self.uploads.borrow_mut().push(source.to_string());
            Ok(format!("m{}", self.uploads.borrow().len()))
        }

        fn create_post(&self, request: &PostRequest) -> Result<String, PostingError> {
            let index = self.requests.borrow().len();
            if self.duplicate_on == Some(index) {
                return Err(PostingError::DuplicatePost(
                    "You are not allowed to create a Tweet with duplicate content.".to_string(),
                ));
            }
            self.requests.borrow_mut().push(request.clone());
            Ok(format!("id{}", index))
        }

        fn search_users(&self, _query: &str) -> Result<Vec<UserCandidate>, PostingError> {
            Ok(Vec::new())
        }

        fn followers(&self, _handle: &str) -> Result<Vec<UserCandidate>, PostingError> {
            Ok(Vec::new())
        }

        fn lookup_user_id(&self, handle: &str) -> Result<String, PostingError> {
            Ok(format!("uid-{}", handle))
        }
    }

    fn thread_of(n: usize) -> Thread {
        Thread {
            posts: (0..n).map(|i| Post::new(format!("post {}", i))).collect(),
        }
    }

    fn options() -> PublishOptions {
        PublishOptions {
            quote_first_in_final: true,
            quote_threshold: 3,
        }
    }

    #[test]
    fn posts_chain_as_replies_in_order() {
        let service = RecordingService::default();
        let report = publish_thread(&service, &thread_of(3), &options()).unwrap();
        assert_eq!(report.post_ids, vec!["id0", "id1", "id2"]);

        let requests = service.requests.borrow();
        assert_eq!(requests[0].reply_to, None);
        assert_eq!(requests[1].reply_to, Some("id0".to_string()));
        assert_eq!(requests[2].reply_to, Some("id1".to_string()));
    }

    #[test]
    fn long_thread_quotes_the_first_post_at_the_end() {
        let service = RecordingService::default();
        publish_thread(&service, &thread_of(4), &options()).unwrap();

        let requests = service.requests.borrow();
        assert_eq!(requests[3].quote, Some("id0".to_string()));
        for request in &requests[..3] {
            assert_eq!(request.quote, None);
        }
    }

    #[test]
    fn short_thread_never_quotes() {
        let service = RecordingService::default();
        publish_thread(&service, &thread_of(3), &options()).unwrap();
        assert!(service.requests.borrow().iter().all(|r| r.quote.is_none()));
    }

    #[test]
    fn quote_back_can_be_disabled() {
        let service = RecordingService::default();
        let options = PublishOptions {
            quote_first_in_final: false,
            quote_threshold: 3,
        };
        publish_thread(&service, &thread_of(5), &options).unwrap();
        assert!(service.requests.borrow().iter().all(|r| r.quote.is_none()));
    }

    #[test]
    fn images_upload_before_their_post() {
        let service = RecordingService::default();
        let mut thread = thread_of(2);
        thread.posts[0].images = vec!["http://i/a.png".to_string(), "http://i/b.png".to_string()];
        publish_thread(&service, &thread, &options()).unwrap();

        assert_eq!(
            *service.uploads.borrow(),
            vec!["http://i/a.png", "http://i/b.png"]
        );
        let requests = service.requests.borrow();
        assert_eq!(requests[0].media_ids, vec!["m1", "m2"]);
        assert!(requests[1].media_ids.is_empty());
    }

    #[test]
    fn tagged_handles_resolve_to_user_ids() {
        let service = RecordingService::default();
        let mut thread = thread_of(1);
        thread.posts[0].tagged_users = vec!["alice".to_string()];
        publish_thread(&service, &thread, &options()).unwrap();
        assert_eq!(
            service.requests.borrow()[0].tag_user_ids,
            vec!["uid-alice"]
        );
    }

    #[test]
    fn duplicate_rejection_surfaces_verbatim() {
        let service = RecordingService {
            duplicate_on: Some(1),
            ..RecordingService::default()
        };
        let err = publish_thread(&service, &thread_of(3), &options()).unwrap_err();
        match err {
            PostingError::DuplicatePost(message) => {
                assert!(message.contains("duplicate content"));
            }
            other => panic!("expected DuplicatePost, got {:?}", other),
        }
        // the post before the failure went out and stays out
        assert_eq!(service.requests.borrow().len(), 1);
    }
}
