//! Error types for the zb32 codec.
//!
//! Encoding is total: every byte sequence has an encoding. Decoding has a
//! single failure mode, a character outside the alphabet, and it aborts the
//! whole call. No partial output is ever returned alongside an error.

use thiserror::Error;

/// Failure returned by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A character of the input is not one of the 32 alphabet symbols.
    ///
    /// `position` is the byte offset of `symbol` within the input string.
    /// Uppercase letters land here too; lookup is case-sensitive.
    #[error("invalid symbol {symbol:?} at byte offset {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Type alias for Result with the decoder's error type
pub type Result<T> = std::result::Result<T, DecodeError>;
