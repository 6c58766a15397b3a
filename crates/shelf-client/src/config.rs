//! Configuration for the catalog client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the catalog lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the catalog service.
    pub base_url: String,

    /// Path of the search endpoint.
    pub search_path: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Environment variable holding a bearer token, if requests must be authenticated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1271".to_string(),
            search_path: "/search".to_string(),
            timeout_secs: 10,
            token_env: None,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url` with default path and timeout.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Request timeout as a duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full URL of the search endpoint.
    #[must_use]
    pub fn search_url(&self) -> String {
        join_url(&self.base_url, &self.search_path)
    }
}

/// Join a base URL and a path with exactly one slash between them.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
