//! JSON configuration with defaults and lenient recovery.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::hosts::HostsFile;

/// Default length bound for the status summary.
pub const DEFAULT_SUMMARY_MAX_LEN: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hosts file location; the platform default when absent.
    pub hosts_path: Option<PathBuf>,
    /// Length bound applied to the status summary.
    pub summary_max_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hosts_path: None,
            summary_max_len: DEFAULT_SUMMARY_MAX_LEN,
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when the file is
    /// missing or unparsable.
    ///
    /// A corrupt file is rewritten with defaults so the next run starts from
    /// a known state; load failure never blocks the caller.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(error) => {
                    tracing::warn!(
                        "invalid configuration at {}: {}; rewriting defaults",
                        path.display(),
                        error
                    );
                    let config = Self::default();
                    if let Err(error) = config.save(path) {
                        tracing::warn!("could not rewrite {}: {}", path.display(), error);
                    }
                    config
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Writes the configuration as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| StoreError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// The hosts file to operate on: the configured path or the platform
    /// default.
    pub fn hosts_file(&self) -> HostsFile {
        match &self.hosts_path {
            Some(path) => HostsFile::with_path(path),
            None => HostsFile::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.json"));
        assert_eq!(config, Config::default());
        assert_eq!(config.summary_max_len, DEFAULT_SUMMARY_MAX_LEN);
    }

    #[test]
    fn saves_and_reloads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            hosts_path: Some(PathBuf::from("/tmp/hosts")),
            summary_max_len: 80,
        };
        config.save(&path).unwrap();

        let loaded = Config::load_or_default(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn corrupt_file_recovers_to_defaults_and_rewrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = Config::load_or_default(&path);
        assert_eq!(config, Config::default());

        // the file was replaced with a parsable default document
        let reloaded = Config::load_or_default(&path);
        assert_eq!(reloaded, Config::default());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<Config>(&content).is_ok());
    }

    #[test]
    fn partial_document_fills_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "summary_max_len": 40 }"#).unwrap();

        let config = Config::load_or_default(&path);
        assert_eq!(config.summary_max_len, 40);
        assert_eq!(config.hosts_path, None);
    }

    #[test]
    fn configured_path_overrides_platform_default() {
        let config = Config {
            hosts_path: Some(PathBuf::from("/tmp/hosts")),
            summary_max_len: DEFAULT_SUMMARY_MAX_LEN,
        };
        assert_eq!(config.hosts_file().path(), Path::new("/tmp/hosts"));

        let default_config = Config::default();
        assert_eq!(
            default_config.hosts_file().path(),
            crate::hosts::default_hosts_path()
        );
    }
}
