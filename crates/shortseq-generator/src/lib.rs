pub mod seq;

pub use seq::SeqGenerator;

use shortseq_core::Code;

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// Uniqueness holds only within one generator instance; callers sharing a
/// sequence across processes still need a storage-level unique check.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Code>;

    /// Produces the next code of this generator's sequence.
    fn generate(&self) -> Self::Output;
}
