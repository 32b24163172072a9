use crate::error::{Result, StorageError};
use crate::repository::{CodeRepository, IssuedCode};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use shortseq_core::Code;
use std::sync::{Mutex, MutexGuard};

/// In-memory implementation of [`CodeRepository`] using DashMap.
///
/// Lookups go straight to the sharded map. Inserts are serialized by the
/// lock on the latest code so that a successful insert is visible to
/// [`CodeRepository::last_issued`] as soon as it returns.
#[derive(Debug)]
pub struct InMemoryRepository {
    issued: DashMap<Code, Timestamp>,
    latest: Mutex<Option<Code>>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            issued: DashMap::new(),
            latest: Mutex::new(None),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            issued: DashMap::with_capacity(capacity),
            latest: Mutex::new(None),
        }
    }

    /// Number of issued codes.
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }

    fn lock_latest(&self) -> Result<MutexGuard<'_, Option<Code>>> {
        self.latest
            .lock()
            .map_err(|_| StorageError::Unavailable("latest code lock is poisoned".to_string()))
    }

    fn insert_sync(&self, code: &Code) -> Result<IssuedCode> {
        let mut latest = self.lock_latest()?;

        let issued_at = match self.issued.entry(code.clone()) {
            Entry::Occupied(_) => return Err(StorageError::Conflict(code.to_string())),
            Entry::Vacant(slot) => *slot.insert(Timestamp::now()),
        };

        if latest.as_ref().map_or(true, |current| code > current) {
            *latest = Some(code.clone());
        }

        Ok(IssuedCode {
            code: code.clone(),
            issued_at,
        })
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeRepository for InMemoryRepository {
    async fn last_issued(&self) -> Result<Option<Code>> {
        Ok(self.lock_latest()?.clone())
    }

    async fn insert(&self, code: &Code) -> Result<IssuedCode> {
        self.insert_sync(code)
    }

    async fn get(&self, code: &Code) -> Result<Option<IssuedCode>> {
        Ok(self.issued.get(code).map(|entry| IssuedCode {
            code: entry.key().clone(),
            issued_at: *entry.value(),
        }))
    }

    async fn exists(&self, code: &Code) -> Result<bool> {
        Ok(self.issued.contains_key(code))
    }
}
