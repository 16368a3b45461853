//! Line-oriented hosts file storage.

use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

/// Platform hosts file location.
pub fn default_hosts_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Windows\System32\drivers\etc\hosts")
    } else {
        PathBuf::from("/etc/hosts")
    }
}

/// Ordered-line access to a hosts file.
///
/// The file is treated as an opaque sequence of text lines; all interpretation
/// happens in the core. Reads and writes are whole-file operations.
#[derive(Debug, Clone)]
pub struct HostsFile {
    path: PathBuf,
}

impl Default for HostsFile {
    fn default() -> Self {
        Self {
            path: default_hosts_path(),
        }
    }
}

impl HostsFile {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full ordered line sequence.
    ///
    /// A missing file is a distinct error; an empty file yields an empty
    /// sequence.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        if !self.path.is_file() {
            return Err(StoreError::FileNotFound {
                path: self.path.clone(),
            });
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| StoreError::FileRead {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Writes the line sequence back, newline-joined with a final newline.
    ///
    /// On failure the caller still holds the computed line set and may retry.
    pub fn write_lines(&self, lines: &[String]) -> Result<()> {
        let content = if lines.is_empty() {
            String::new()
        } else {
            format!("{}\n", lines.join("\n"))
        };
        std::fs::write(&self.path, content).map_err(|e| StoreError::FileWrite {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::info!("wrote {} lines to {}", lines.len(), self.path.display());
        Ok(())
    }
}
