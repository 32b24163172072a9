use crate::Generator;
use shortseq_core::Code;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// A single-writer sequencer over the code alphabet.
///
/// Read-last, compute-next and store happen under one lock, so codes from
/// one instance are unique and strictly increasing even across threads.
///
/// For distributed deployments a single instance should own the sequence;
/// independent instances resumed from the same code will collide.
#[derive(Debug)]
pub struct SeqGenerator {
    last: Mutex<Option<Code>>,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            last: Mutex::new(self.lock().clone()),
        }
    }
}

impl SeqGenerator {
    /// Creates a generator for a fresh sequence; the first code is the seed.
    pub fn fresh() -> Self {
        Self {
            last: Mutex::new(None),
        }
    }

    /// Creates a generator that continues after a previously issued code.
    ///
    /// Useful for resuming from the last code a store has persisted.
    pub fn resume_after(last: Code) -> Self {
        Self {
            last: Mutex::new(Some(last)),
        }
    }

    /// The most recently issued code, if any.
    pub fn last_issued(&self) -> Option<Code> {
        self.lock().clone()
    }

    // The guarded value is always a valid code, so a panic in another
    // holder cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, Option<Code>> {
        self.last.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::fresh()
    }
}

impl Generator for SeqGenerator {
    type Output = Code;

    fn generate(&self) -> Code {
        let mut last = self.lock();
        let next = match last.as_ref() {
            Some(code) => code.next(),
            None => Code::seed(),
        };
        trace!(code = %next, "generated code");
        *last = Some(next.clone());
        next
    }
}
