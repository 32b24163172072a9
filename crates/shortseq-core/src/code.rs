use crate::alphabet;
use crate::digits::DigitVector;
use crate::error::{CodeError, Result};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

/// A validated code: a non-empty string of alphabet symbols.
///
/// Codes are ordered as positional numbers, not as strings: a shorter code
/// always sorts before a longer one, and codes of equal length compare by
/// digit value from the most significant symbol.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Code(SmolStr);

impl Code {
    /// The first code of a fresh sequence (digit 0).
    pub fn seed() -> Self {
        Self(SmolStr::new_inline("2"))
    }

    /// Parses and validates `code`.
    pub fn new(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref();
        crate::validate(code)?;
        Ok(Self(SmolStr::new(code)))
    }

    /// Returns the code that follows this one.
    pub fn next(&self) -> Self {
        let mut digits = self.digits();
        digits.increment();
        Self(SmolStr::new(digits.encode()))
    }

    /// Decodes the code into its digit values.
    pub fn digits(&self) -> DigitVector {
        DigitVector::from_validated(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols in the code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Ord for Code {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len()).then_with(|| {
            let lhs = self.0.chars().filter_map(alphabet::digit_of);
            let rhs = other.0.chars().filter_map(alphabet::digit_of);
            lhs.cmp(rhs)
        })
    }
}

impl PartialOrd for Code {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Debug for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Code").field(&self.0).finish()
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Code {
    type Error = CodeError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Code {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}
