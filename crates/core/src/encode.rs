//! Bytes -> symbol string.
//!
//! Input is consumed five bytes at a time. A trailing group shorter than
//! five bytes is copied into a zeroed scratch block, split like a full one,
//! and cut down to the number of symbols its bits need. No padding
//! characters are emitted.

use crate::alphabet;
use crate::regroup::split_block;
use crate::remainder::{encoded_len, symbols_for_bytes, GROUP_BYTES};

/// Encode `bytes` as a symbol string.
///
/// Never fails. The result has exactly [`encoded_len`]`(bytes.len())`
/// characters, all drawn from [`alphabet::ALPHABET`].
///
/// # Example
/// ```
/// assert_eq!(zb32_core::encode(b"hello"), "pb1sa5dx");
/// assert_eq!(zb32_core::encode(&[]), "");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));
    encode_into(bytes, &mut out);
    out
}

/// Encode `bytes` and append the symbols to `out`.
pub fn encode_into(bytes: &[u8], out: &mut String) {
    out.reserve(encoded_len(bytes.len()));
    for group in bytes.chunks(GROUP_BYTES) {
        encode_group(group, out);
    }
}

/// Encode one group of 1..=5 bytes.
fn encode_group(group: &[u8], out: &mut String) {
    let mut block = [0u8; GROUP_BYTES];
    block[..group.len()].copy_from_slice(group);

    let values = split_block(&block);
    let emit = symbols_for_bytes(group.len());
    out.extend(values[..emit].iter().map(|&v| alphabet::symbol(v)));
}
