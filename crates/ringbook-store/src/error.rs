use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("migration error: {0}")]
    Migration(String),
    #[error("storage quota exceeded for '{key}': {size} bytes (limit {limit})")]
    QuotaExceeded {
        key: String,
        size: usize,
        limit: usize,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Sql,
    Serialize,
    MissingHomeDir,
    InvalidDataPath,
    Migration,
    QuotaExceeded,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Sql(_) => StoreErrorKind::Sql,
            StoreError::Serialize(_) => StoreErrorKind::Serialize,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::Migration(_) => StoreErrorKind::Migration,
            StoreError::QuotaExceeded { .. } => StoreErrorKind::QuotaExceeded,
        }
    }
}
