use shortseq_core::CodeError;
use thiserror::Error;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("code already issued: {0}")]
    Conflict(String),
    #[error("gave up after {attempts} conflicting attempts")]
    Exhausted { attempts: u32 },
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("invalid code: {0}")]
    Code(#[from] CodeError),
}
