//! TOML configuration with platform config-dir persistence.
//!
//! All sections use `#[serde(default)]`, so config files written by older
//! versions keep loading after new fields are added. Credentials are an
//! explicit object handed to posting backends at construction; nothing in
//! this crate reads credential environment variables.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::thread::shard::ShardConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub thread: ThreadConfig,
    pub subject: SubjectConfig,
    pub templates: TemplateConfig,
    pub posting: PostingConfig,
}

/// Length budget and assembly policy for composed threads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThreadConfig {
    /// Hard per-post length limit of the target platform (characters).
    pub max_post_length: usize,
    /// Characters reserved at the end of each post for the `" [##/##]"`
    /// numbering suffix. The sharding budget is the difference.
    pub numbering_reserve: usize,
    /// Marker inserted at shard boundaries.
    pub ellipsis: String,
    /// Slack added to the balanced chunk target so fragments break at a
    /// nearby space instead of straggling.
    pub shard_padding: usize,
    /// Append the ellipsis even when a fragment already ends in sentence
    /// punctuation. Off by default: `.` followed by an ellipsis reads badly.
    pub always_ellipsis: bool,
    /// Tag users in the first post only when the thread has at most this
    /// many posts (tagging notifies them once per reply). 0 disables the cap.
    pub tag_users_max_posts: usize,
    /// Quote-reference the first post from the final post when the thread
    /// has more than this many posts.
    pub quote_threshold: usize,
    /// Whether the final post of a long thread quotes the first post.
    pub quote_first_at_end: bool,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            max_post_length: 280,
            numbering_reserve: 8,
            ellipsis: "\u{2026}".to_string(),
            shard_padding: 16,
            always_ellipsis: false,
            tag_users_max_posts: 2,
            quote_threshold: 3,
            quote_first_at_end: true,
        }
    }
}

impl ThreadConfig {
    /// Sharding limits derived from the post budget.
    pub fn shard_config(&self) -> ShardConfig {
        ShardConfig {
            max_unit_len: self.max_post_length.saturating_sub(self.numbering_reserve),
            ellipsis: self.ellipsis.clone(),
            padding: self.shard_padding,
            always_ellipsis: self.always_ellipsis,
        }
    }
}

/// Subject-link and hero-image heuristics.
///
/// "First link is the subject" and "first image is the hero" are policies,
/// not protocol guarantees; both can be switched off for documents that
/// violate them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SubjectConfig {
    /// Treat the first hyperlink in the document as the paper reference.
    pub from_first_link: bool,
    /// Reserve the first image in the document for the first post.
    pub hero_from_first_image: bool,
    /// Regex matched against the raw markdown when no hyperlink was found;
    /// the first match becomes the subject URL (with an empty title).
    /// Empty string disables the fallback.
    pub fallback_url_pattern: String,
}

impl Default for SubjectConfig {
    fn default() -> Self {
        Self {
            from_first_link: true,
            hero_from_first_image: true,
            fallback_url_pattern: r"https://arxiv\.org/abs/[0-9]+\.[0-9]+(v[0-9]+)?".to_string(),
        }
    }
}

/// Closing-template overrides. `None` uses the built-in defaults in
/// [`crate::thread::closing`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template with `{link}` and `{authors}` placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_with_authors: Option<String>,
    /// Template with a `{link}` placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_without_authors: Option<String>,
}

/// Posting backend selection and credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PostingConfig {
    /// Backend name; `dry-run` is built in.
    pub backend: String,
    pub credentials: Credentials,
}

impl Default for PostingConfig {
    fn default() -> Self {
        Self {
            backend: "dry-run".to_string(),
            credentials: Credentials::default(),
        }
    }
}

/// API credentials passed to posting backends at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Credentials {
    pub api_key: String,
    pub api_key_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
    pub bearer_token: String,
}

impl Config {
    /// Path to the config file: `<config-dir>/ptc/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine config directory")?;
        Ok(base.join("ptc").join("config.toml"))
    }

    /// Load from the config file, falling back to defaults when it does not
    /// exist. A file that exists but fails to parse is an error, not a
    /// silent fallback.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parse a TOML document; missing fields take their defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write the config file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
