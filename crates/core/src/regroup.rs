//! Conversion between 5-byte blocks and 8-value blocks.
//!
//! Both directions go through a 40-bit window held in a `u64`, MSB-first:
//! byte 0 occupies window bits 39..32 and value 0 occupies bits 39..35.
//! Each position has its own fixed shift, so a byte can straddle two values
//! and a value can straddle two bytes.
//!
//! ```text
//! bytes   |0       |1       |2       |3       |4       |
//! values  |0    |1    |2    |3    |4    |5    |6    |7    |
//! ```
//!
//! Callers always hand over a complete block. Partial groups are zero-padded
//! into a scratch block before they get here, so nothing in this module
//! reads outside its arguments.

use crate::remainder::{GROUP_BYTES, GROUP_SYMBOLS};

/// Right shift that brings byte `i` of the window down to bits 7..0.
const BYTE_SHIFTS: [u32; GROUP_BYTES] = [32, 24, 16, 8, 0];

/// Right shift that brings value `i` of the window down to bits 4..0.
const VALUE_SHIFTS: [u32; GROUP_SYMBOLS] = [35, 30, 25, 20, 15, 10, 5, 0];

/// Split 5 bytes into 8 values of 5 bits each.
#[inline]
pub fn split_block(block: &[u8; GROUP_BYTES]) -> [u8; GROUP_SYMBOLS] {
    let window = block
        .iter()
        .zip(BYTE_SHIFTS)
        .fold(0u64, |acc, (&byte, shift)| acc | u64::from(byte) << shift);

    VALUE_SHIFTS.map(|shift| ((window >> shift) & 0x1F) as u8)
}

/// Join 8 values of 5 bits each into 5 bytes.
///
/// Bits above the low five of each value are ignored.
#[inline]
pub fn join_block(values: &[u8; GROUP_SYMBOLS]) -> [u8; GROUP_BYTES] {
    let window = values
        .iter()
        .zip(VALUE_SHIFTS)
        .fold(0u64, |acc, (&value, shift)| {
            acc | u64::from(value & 0x1F) << shift
        });

    BYTE_SHIFTS.map(|shift| (window >> shift) as u8)
}
