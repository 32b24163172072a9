//! The ordered symbol set used as digits.
//!
//! Digits and lookalikes such as `0`, `1`, `O`, `I` and the vowels are left
//! out so codes can be read back and typed without confusion. The order of
//! [`ALPHABET`] is part of the published format: symbol `i` is digit `i`.

/// Symbols in digit order, `'2'` is digit 0.
pub const ALPHABET: &str = "256789bcdfghjklmnpqrstvwxzBCDFGHJKLMNPQRSTVWXZ";

/// Number of symbols, i.e. the radix of a code.
pub const BASE: usize = ALPHABET.len();

/// The largest digit value.
pub const MAX_DIGIT: u8 = (BASE - 1) as u8;

const NOT_IN_ALPHABET: u8 = u8::MAX;

const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let symbols = ALPHABET.as_bytes();
    let mut table = [NOT_IN_ALPHABET; 128];
    let mut i = 0;
    while i < symbols.len() {
        table[symbols[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the digit value of `symbol`, or `None` if it is not in the alphabet.
pub fn digit_of(symbol: char) -> Option<u8> {
    if !symbol.is_ascii() {
        return None;
    }
    match DECODE_TABLE[symbol as usize] {
        NOT_IN_ALPHABET => None,
        digit => Some(digit),
    }
}

/// Returns the symbol for `digit`, or `None` if `digit >= BASE`.
pub fn symbol_of(digit: u8) -> Option<char> {
    ALPHABET.as_bytes().get(usize::from(digit)).map(|&b| b as char)
}

pub fn contains(symbol: char) -> bool {
    digit_of(symbol).is_some()
}
