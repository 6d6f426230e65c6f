use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::DEFAULT_BASE_URL;
use crate::http_client::HttpTimeouts;

/// Top-level settings file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Remote service connection settings.
    #[serde(default)]
    pub api: ApiSettings,
    /// Retrain panel behavior.
    #[serde(default)]
    pub retrain: RetrainSettings,
}

/// Where and how to reach the classification service.
///
/// Config keys: `base_url`, `connect_timeout_secs`, `read_timeout_secs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Unset means requests wait for the service indefinitely.
    #[serde(default)]
    pub read_timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: None,
        }
    }
}

impl ApiSettings {
    pub(crate) fn timeouts(&self) -> HttpTimeouts {
        let connect = (self.connect_timeout_secs > 0)
            .then(|| Duration::from_secs(self.connect_timeout_secs));
        let read = self
            .read_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        HttpTimeouts {
            connect,
            read,
            write: read,
        }
    }
}

/// Retrain panel behavior.
///
/// Config keys: `status_display_ms`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrainSettings {
    /// How long the upload result stays visible before the panel hides itself.
    #[serde(default = "default_status_display_ms")]
    pub status_display_ms: u64,
}

impl Default for RetrainSettings {
    fn default() -> Self {
        Self {
            status_display_ms: default_status_display_ms(),
        }
    }
}

impl RetrainSettings {
    pub fn status_display(&self) -> Duration {
        Duration::from_millis(self.status_display_ms)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_status_display_ms() -> u64 {
    3_000
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No usable application directory.
    #[error("No suitable config directory found")]
    NoConfigDir,
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read the settings file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the settings file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for [`AppSettings`].
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Settings could not be serialized.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}
