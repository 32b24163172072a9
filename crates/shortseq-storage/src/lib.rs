//! Persistence side of the code sequence.
//!
//! The core only computes successors; this crate provides the repository
//! contract a caller needs to issue codes safely (a unique constraint on
//! issued codes) and an allocator that runs read-last, compute-next, insert
//! with retry on conflict.

pub mod allocator;
pub mod error;
pub mod memory;
pub mod repository;

pub use allocator::{AllocatorSettings, CodeAllocator};
pub use error::{Result, StorageError};
pub use memory::InMemoryRepository;
pub use repository::{CodeRepository, IssuedCode};
