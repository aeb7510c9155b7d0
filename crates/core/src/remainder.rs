//! Group sizing tables.
//!
//! Five bytes and eight symbols both hold exactly 40 bits, so full groups
//! convert one-to-one. A trailing partial group does not line up, and its
//! output size comes from a fixed table rather than from arithmetic on bit
//! counts. Both tables include the full-group entry so the engines can
//! treat full and partial groups the same way.

/// Bytes in a full group.
pub const GROUP_BYTES: usize = 5;

/// Symbols in a full group.
pub const GROUP_SYMBOLS: usize = 8;

/// Symbols emitted for a group of `n` bytes, `n` in `0..=5`.
const SYMBOLS_FOR_BYTES: [usize; GROUP_BYTES + 1] = [0, 2, 4, 5, 7, 8];

/// Bytes emitted for a group of `n` symbols, `n` in `0..=8`.
const BYTES_FOR_SYMBOLS: [usize; GROUP_SYMBOLS + 1] = [0, 1, 2, 2, 3, 4, 4, 5, 5];

/// Number of symbols a group of `bytes` input bytes encodes to.
///
/// # Panics
/// If `bytes > 5`. Callers slice their input into groups first.
#[inline]
pub fn symbols_for_bytes(bytes: usize) -> usize {
    SYMBOLS_FOR_BYTES[bytes]
}

/// Number of bytes a group of `symbols` input symbols decodes to.
///
/// # Panics
/// If `symbols > 8`.
#[inline]
pub fn bytes_for_symbols(symbols: usize) -> usize {
    BYTES_FOR_SYMBOLS[symbols]
}

/// Length of the encoding of `n` bytes.
pub fn encoded_len(n: usize) -> usize {
    n / GROUP_BYTES * GROUP_SYMBOLS + symbols_for_bytes(n % GROUP_BYTES)
}

/// Length of the decoding of `m` symbols, assuming they are all valid.
pub fn decoded_len(m: usize) -> usize {
    m / GROUP_SYMBOLS * GROUP_BYTES + bytes_for_symbols(m % GROUP_SYMBOLS)
}
