//! Posting backends and thread publishing.
//!
//! [`PostingService`] is the seam to the social platform; backends receive
//! the explicit [`crate::config::Credentials`] object at construction (no
//! environment-variable singletons). The built-in `dry-run` backend needs
//! none and narrates the calls it would make; library users plug real
//! clients in through the trait.

mod dry_run;
pub mod publish;
mod service;

pub use dry_run::DryRunPoster;
pub use publish::{publish_thread, PublishOptions, PublishReport};
pub use service::{PostRequest, PostingError, PostingService, UserCandidate};

use crate::config::PostingConfig;

/// Construct the backend named by the config.
pub fn backend_from_config(config: &PostingConfig) -> Result<Box<dyn PostingService>, PostingError> {
    match config.backend.as_str() {
        "dry-run" => Ok(Box::new(DryRunPoster::new())),
        other => Err(PostingError::UnknownBackend(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_the_dry_run_backend() {
        let backend = backend_from_config(&PostingConfig::default()).unwrap();
        assert_eq!(backend.name(), "dry-run");
    }

    #[test]
    fn unknown_backend_is_an_error() {
        let config = PostingConfig {
            backend: "carrier-pigeon".to_string(),
            ..PostingConfig::default()
        };
        let err = backend_from_config(&config).err().unwrap();
        assert!(matches!(err, PostingError::UnknownBackend(_)));
    }
}
