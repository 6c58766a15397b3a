//! Persisted front-end settings.
//!
//! Stored as TOML in the user's config directory. A missing file means
//! defaults; command-line flags override whatever the file says.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shelf_client::ClientConfig;
use shelf_query::ControllerConfig;

/// Front-end settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Debounce and paging.
    pub controller: ControllerConfig,

    /// Where the catalog lives.
    pub catalog: ClientConfig,
}

impl Settings {
    /// Load settings from a specific path.
    ///
    /// A missing file yields defaults. A file that exists but does not parse
    /// is an error so a typo is not silently ignored.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }

        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Settings rendered as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize settings")
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "shelf")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}
