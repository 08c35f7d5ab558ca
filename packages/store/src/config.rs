//! # Application configuration: `clipit.toml`
//!
//! The web binary embeds a TOML file at build time and parses it into
//! [`ClipitConfig`] on startup.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"   # REST backend root
//! send_credentials = true              # send cookies with every request
//!
//! [feed]
//! page_size = 10
//!
//! [editor]
//! default_language = "javascript"
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every section and field has a default, so a missing or empty file is
//! equivalent to [`ClipitConfig::default`].

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialise configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `clipit.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipitConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Include ambient cookies on ordinary requests. The refresh call always
    /// includes them.
    #[serde(default = "default_true")]
    pub send_credentials: bool,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            send_credentials: true,
        }
    }
}

impl ApiConfig {
    /// URL of an identity-provider login entry point, e.g. `provider_login_url("github")`.
    pub fn provider_login_url(&self, provider: &str) -> String {
        format!("{}/auth/{provider}", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Posts requested per page; a shorter page marks the feed exhausted.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    10
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Language preselected for new posts and used to render posts that carry none.
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_language() -> String {
    "javascript".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl ClipitConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "clipit.toml"
    }

    /// Builder method to point at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to set the feed page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.feed.page_size = page_size;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from TOML, logging and falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("{} ignored: {e}", Self::filename());
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
