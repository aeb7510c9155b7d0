//! The 32-symbol alphabet and its inverse lookup.
//!
//! Symbols are lowercase ASCII picked to be hard to confuse when read aloud
//! or copied by hand: there is no `0`, `2`, `l` or `v`. Position in the table
//! is the 5-bit value a symbol stands for, so value 0 is `y` and value 31 is
//! `9`.
//!
//! The table is a fixed constant of the format. Nothing here is
//! configurable.

/// Symbol for each 5-bit value, indexed by value.
pub const ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// Marker for bytes that are not alphabet symbols.
const INVALID: u8 = 0xFF;

/// Inverse of [`ALPHABET`]: byte -> 5-bit value, or [`INVALID`].
///
/// Covers all 256 byte values so any input byte (including the pieces of a
/// multi-byte UTF-8 character) can be looked up without a range check.
const LOOKUP: [u8; 256] = build_lookup();

const fn build_lookup() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut value = 0;
    while value < ALPHABET.len() {
        table[ALPHABET[value] as usize] = value as u8;
        value += 1;
    }
    table
}

/// Map a 5-bit value to its symbol.
///
/// Only the low five bits of `value` are used.
#[inline]
pub fn symbol(value: u8) -> char {
    ALPHABET[(value & 0x1F) as usize] as char
}

/// Map a symbol byte back to its 5-bit value.
///
/// Returns `None` for anything outside the alphabet, including uppercase
/// forms of valid symbols.
#[inline]
pub fn value_of(byte: u8) -> Option<u8> {
    match LOOKUP[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Check whether `c` is one of the 32 symbols.
pub fn is_symbol(c: char) -> bool {
    u8::try_from(c).ok().and_then(value_of).is_some()
}
