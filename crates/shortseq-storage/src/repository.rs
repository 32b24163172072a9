use crate::error::Result;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use shortseq_core::Code;

/// A code that has been persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedCode {
    pub code: Code,
    pub issued_at: Timestamp,
}

/// Storage for issued codes.
///
/// Implementations must enforce uniqueness of codes at insert time; that
/// check is what makes concurrent allocation from a stale "last code" safe.
#[async_trait]
pub trait CodeRepository: Send + Sync + 'static {
    /// Returns the greatest issued code under the sequence ordering.
    /// Returns `None` if nothing has been issued yet.
    async fn last_issued(&self) -> Result<Option<Code>>;

    /// Records `code` as issued. Returns `Err(Conflict)` if it already exists.
    async fn insert(&self, code: &Code) -> Result<IssuedCode>;

    /// Retrieves the record for an issued code.
    async fn get(&self, code: &Code) -> Result<Option<IssuedCode>>;

    /// Checks whether a code has been issued.
    async fn exists(&self, code: &Code) -> Result<bool>;
}
