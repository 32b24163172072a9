use crate::error::{Result, StorageError};
use crate::repository::{CodeRepository, IssuedCode};
use shortseq_core::Code;
use std::sync::Arc;
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// Configures a [`CodeAllocator`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct AllocatorSettings {
    /// How many inserts to try before giving up. At least one attempt is
    /// always made, so `0` behaves like `1`.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
    /// Code issued when the repository is empty.
    #[builder(default = Code::seed())]
    pub seed: Code,
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Issues codes against a shared repository.
///
/// Each attempt reads the last issued code, computes its successor and
/// inserts it. Two allocators reading the same last code compute the same
/// successor; the loser sees a conflict from the repository's unique check
/// and retries with a fresh read.
#[derive(Debug)]
pub struct CodeAllocator<R> {
    repository: Arc<R>,
    settings: AllocatorSettings,
}

impl<R> Clone for CodeAllocator<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            settings: self.settings.clone(),
        }
    }
}

impl<R: CodeRepository> CodeAllocator<R> {
    pub fn new(repository: R, settings: AllocatorSettings) -> Self {
        Self::with_shared(Arc::new(repository), settings)
    }

    /// Creates an allocator over a repository that is also used elsewhere.
    pub fn with_shared(repository: Arc<R>, settings: AllocatorSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Issues the next code in the sequence.
    ///
    /// Returns `Err(Exhausted)` if every attempt lost to a concurrent
    /// writer. Errors other than conflicts are returned immediately.
    pub async fn issue(&self) -> Result<IssuedCode> {
        let max_attempts = self.settings.max_attempts.max(1);
        for attempt in 1..=max_attempts {
            let candidate = match self.repository.last_issued().await? {
                Some(last) => last.next(),
                None => self.settings.seed.clone(),
            };

            match self.repository.insert(&candidate).await {
                Ok(issued) => {
                    debug!(code = %issued.code, attempt, "issued code");
                    return Ok(issued);
                }
                Err(StorageError::Conflict(code)) => {
                    warn!(%code, attempt, "code already issued, retrying");
                    tokio::task::yield_now().await;
                }
                Err(err) => return Err(err),
            }
        }

        Err(StorageError::Exhausted {
            attempts: max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryRepository;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn code(s: &str) -> Code {
        Code::new(s).unwrap()
    }

    /// Answers `last_issued` from a fixed code for the first `stale_reads`
    /// calls, like a replica lagging behind the primary.
    struct LaggingRepository {
        inner: InMemoryRepository,
        stale: Code,
        stale_reads: Mutex<u32>,
    }

    #[async_trait]
    impl CodeRepository for LaggingRepository {
        async fn last_issued(&self) -> Result<Option<Code>> {
            let lagging = {
                let mut remaining = self.stale_reads.lock().unwrap();
                if *remaining > 0 {
                    *remaining -= 1;
                    true
                } else {
                    false
                }
            };
            if lagging {
                return Ok(Some(self.stale.clone()));
            }
            self.inner.last_issued().await
        }

        async fn insert(&self, code: &Code) -> Result<IssuedCode> {
            self.inner.insert(code).await
        }

        async fn get(&self, code: &Code) -> Result<Option<IssuedCode>> {
            self.inner.get(code).await
        }

        async fn exists(&self, code: &Code) -> Result<bool> {
            self.inner.exists(code).await
        }
    }

    struct BrokenRepository;

    #[async_trait]
    impl CodeRepository for BrokenRepository {
        async fn last_issued(&self) -> Result<Option<Code>> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }

        async fn insert(&self, _code: &Code) -> Result<IssuedCode> {
            unreachable!("insert should not be reached")
        }

        async fn get(&self, _code: &Code) -> Result<Option<IssuedCode>> {
            Ok(None)
        }

        async fn exists(&self, _code: &Code) -> Result<bool> {
            Ok(false)
        }
    }

    async fn lagging(stale_reads: u32) -> LaggingRepository {
        let inner = InMemoryRepository::new();
        inner.insert(&code("2")).await.unwrap();
        inner.insert(&code("5")).await.unwrap();
        LaggingRepository {
            inner,
            // "5" follows "2", which is already taken.
            stale: code("2"),
            stale_reads: Mutex::new(stale_reads),
        }
    }

    #[test]
    fn default_settings() {
        let settings = AllocatorSettings::default();
        assert_eq!(settings.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(settings.seed, Code::seed());
    }

    #[tokio::test]
    async fn first_code_is_seed() {
        let allocator = CodeAllocator::new(InMemoryRepository::new(), AllocatorSettings::default());

        let first = allocator.issue().await.unwrap();
        let second = allocator.issue().await.unwrap();

        assert_eq!(first.code.as_str(), "2");
        assert_eq!(second.code.as_str(), "5");
    }

    #[tokio::test]
    async fn custom_seed() {
        let settings = AllocatorSettings::builder().seed(code("Z")).build();
        let allocator = CodeAllocator::new(InMemoryRepository::new(), settings);

        assert_eq!(allocator.issue().await.unwrap().code.as_str(), "Z");
        assert_eq!(allocator.issue().await.unwrap().code.as_str(), "52");
    }

    #[tokio::test]
    async fn continues_after_existing_codes() {
        let repo = InMemoryRepository::new();
        repo.insert(&code("ZZ")).await.unwrap();
        let allocator = CodeAllocator::new(repo, AllocatorSettings::default());

        assert_eq!(allocator.issue().await.unwrap().code.as_str(), "522");
    }

    #[tokio::test]
    async fn stale_read_conflict_is_retried() {
        let allocator = CodeAllocator::new(lagging(1).await, AllocatorSettings::default());

        let issued = allocator.issue().await.unwrap();

        assert_eq!(issued.code.as_str(), "6");
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let settings = AllocatorSettings::builder().max_attempts(3).build();
        let allocator = CodeAllocator::new(lagging(u32::MAX).await, settings);

        let err = allocator.issue().await.unwrap_err();

        assert!(matches!(err, StorageError::Exhausted { attempts: 3 }));
        assert_eq!(allocator.repository().inner.len(), 2);
    }

    #[tokio::test]
    async fn zero_max_attempts_still_tries_once() {
        let settings = AllocatorSettings::builder().max_attempts(0).build();
        let allocator = CodeAllocator::new(InMemoryRepository::new(), settings);

        assert_eq!(allocator.issue().await.unwrap().code.as_str(), "2");
        assert_eq!(allocator.issue().await.unwrap().code.as_str(), "5");
    }

    #[tokio::test]
    async fn zero_max_attempts_reports_the_one_conflict() {
        let settings = AllocatorSettings::builder().max_attempts(0).build();
        let allocator = CodeAllocator::new(lagging(u32::MAX).await, settings);

        let err = allocator.issue().await.unwrap_err();

        assert!(matches!(err, StorageError::Exhausted { attempts: 1 }));
    }

    #[tokio::test]
    async fn non_conflict_errors_are_not_retried() {
        let allocator = CodeAllocator::new(BrokenRepository, AllocatorSettings::default());

        let err = allocator.issue().await.unwrap_err();

        assert!(matches!(err, StorageError::Unavailable(_)));
    }
}
