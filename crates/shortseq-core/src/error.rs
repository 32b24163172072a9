use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodeError>;

/// Errors raised when a string is not a well-formed code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("short code is empty")]
    EmptyInput,
    #[error("invalid character {character:?} at position {position} in short code")]
    InvalidCharacter { character: char, position: usize },
}
