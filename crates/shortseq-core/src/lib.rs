//! Core types for the shortseq code sequence.
//!
//! A code is a positional number over a fixed, visually unambiguous
//! alphabet, written most-significant symbol first. [`next_code`] (or
//! [`Code::next`]) computes the successor of a code with carry propagation
//! and length growth. Allocation and uniqueness are left to the caller.

pub mod alphabet;
pub mod code;
pub mod digits;
pub mod error;

pub use alphabet::{ALPHABET, BASE};
pub use code::Code;
pub use digits::DigitVector;
pub use error::{CodeError, Result};

/// Computes the code that follows `current` in the sequence.
///
/// # Examples
///
/// ```
/// assert_eq!(shortseq_core::next_code("2").unwrap(), "5");
/// assert_eq!(shortseq_core::next_code("Z").unwrap(), "52");
/// ```
pub fn next_code(current: &str) -> Result<String> {
    let mut digits = DigitVector::decode(current)?;
    digits.increment();
    Ok(digits.encode())
}

/// Checks that `code` is non-empty and made only of alphabet symbols.
pub fn validate(code: &str) -> Result<()> {
    DigitVector::decode(code).map(|_| ())
}
