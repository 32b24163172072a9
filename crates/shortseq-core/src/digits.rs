use crate::alphabet::{self, MAX_DIGIT};
use crate::error::{CodeError, Result};

/// Digit values of a code, least-significant first.
///
/// This is the working form used while incrementing; it is built from a
/// code, mutated in place and encoded back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitVector(Vec<u8>);

impl DigitVector {
    /// Decodes `code` (most-significant symbol first) into digit values.
    pub fn decode(code: &str) -> Result<Self> {
        if code.is_empty() {
            return Err(CodeError::EmptyInput);
        }

        let mut digits = code
            .chars()
            .enumerate()
            .map(|(position, character)| {
                alphabet::digit_of(character).ok_or(CodeError::InvalidCharacter {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        digits.reverse();

        Ok(Self(digits))
    }

    /// Decodes a string already known to be a valid code.
    pub(crate) fn from_validated(code: &str) -> Self {
        Self(code.chars().rev().filter_map(alphabet::digit_of).collect())
    }

    /// Adds one to the value, carrying into higher positions.
    ///
    /// Each position is tested against its current value after the carry
    /// from below has been applied. A carry out of the highest position
    /// appends a new digit with value 1.
    pub fn increment(&mut self) {
        let mut carry = true;
        for digit in self.0.iter_mut() {
            if !carry {
                break;
            }
            if *digit == MAX_DIGIT {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
            }
        }
        if carry {
            self.0.push(1);
        }
    }

    /// Encodes the digits back into a code, most-significant symbol first.
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .rev()
            .map(|&digit| alphabet::ALPHABET.as_bytes()[usize::from(digit)] as char)
            .collect()
    }

    /// Digit values, least-significant first.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
