use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("hosts file not found: {path}")]
    FileNotFound { path: PathBuf },
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode configuration: {0}")]
    ConfigEncode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
