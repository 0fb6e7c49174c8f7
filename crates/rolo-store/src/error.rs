use rolo_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("contact not found: {0}")]
    NotFound(String),
    #[error("a contact named {0:?} already exists")]
    NameTaken(String),
    #[error("enter at least {min} characters to search by name or phone")]
    QueryTooShort { min: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Snapshot,
    Core,
    MissingHomeDir,
    InvalidDataPath,
    NotFound,
    NameTaken,
    QueryTooShort,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Snapshot(_) => StoreErrorKind::Snapshot,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::NameTaken(_) => StoreErrorKind::NameTaken,
            StoreError::QueryTooShort { .. } => StoreErrorKind::QueryTooShort,
        }
    }
}
