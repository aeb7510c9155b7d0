//! Symbol string -> bytes.
//!
//! Input is consumed eight symbols at a time. A trailing group shorter than
//! eight symbols has its missing slots filled with zero values and yields
//! the number of bytes given by the remainder table, so bits contributed
//! only by the filler slots come out as zero.
//!
//! Lookup is case-sensitive. Callers that accept uppercase must lowercase
//! before decoding; this module will not do it for them.

use crate::alphabet;
use crate::error::{DecodeError, Result};
use crate::regroup::join_block;
use crate::remainder::{bytes_for_symbols, decoded_len, GROUP_SYMBOLS};

/// Decode a symbol string into bytes.
///
/// # Errors
/// `DecodeError::InvalidSymbol` for the first character not in the
/// alphabet. Nothing is returned for the groups decoded before it.
///
/// # Example
/// ```
/// assert_eq!(zb32_core::decode("pb1sa5dx").unwrap(), b"hello");
/// assert!(zb32_core::decode("0").is_err());
/// ```
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(decoded_len(text.len()));
    decode_into(text, &mut out)?;
    Ok(out)
}

/// Decode `text` and append the bytes to `out`.
///
/// Returns the number of bytes appended. On error `out` is truncated back
/// to its length at entry.
pub fn decode_into(text: &str, out: &mut Vec<u8>) -> Result<usize> {
    let start = out.len();
    out.reserve(decoded_len(text.len()));

    for (index, group) in text.as_bytes().chunks(GROUP_SYMBOLS).enumerate() {
        if let Err(err) = decode_group(text, index * GROUP_SYMBOLS, group, out) {
            out.truncate(start);
            return Err(err);
        }
    }

    Ok(out.len() - start)
}

/// Check that every character of `text` is an alphabet symbol.
///
/// Same acceptance rule as [`decode`], without building the output.
pub fn validate(text: &str) -> Result<()> {
    match text.bytes().position(|b| alphabet::value_of(b).is_none()) {
        Some(position) => Err(invalid_symbol(text, position)),
        None => Ok(()),
    }
}

/// Decode one group of 1..=8 symbols starting at byte `offset` of `text`.
fn decode_group(text: &str, offset: usize, group: &[u8], out: &mut Vec<u8>) -> Result<()> {
    let mut values = [0u8; GROUP_SYMBOLS];
    for (i, (slot, &byte)) in values.iter_mut().zip(group).enumerate() {
        *slot = alphabet::value_of(byte).ok_or_else(|| invalid_symbol(text, offset + i))?;
    }

    let bytes = join_block(&values);
    out.extend_from_slice(&bytes[..bytes_for_symbols(group.len())]);
    Ok(())
}

/// Build the error for the first bad byte, found at `position`.
///
/// Every byte before `position` is ASCII, so `position` is on a char
/// boundary and the whole offending character can be reported.
fn invalid_symbol(text: &str, position: usize) -> DecodeError {
    let symbol = text
        .get(position..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    DecodeError::InvalidSymbol { symbol, position }
}
