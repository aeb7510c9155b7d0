//! zb32-core: human-oriented base-32 codec
//!
//! Turns arbitrary bytes into lowercase strings that are easy to read, type
//! and embed in path segments, and turns those strings back into bytes.
//!
//! # Format
//!
//! - 32 symbols, each standing for 5 bits: `ybndrfg8ejkmcpqxot1uwisza345h769`
//! - every 5 input bytes become exactly 8 symbols (40 bits either way)
//! - a trailing partial group is zero-padded and emits only the symbols
//!   (or bytes) its size calls for; no padding characters exist
//! - no framing, no checksum, no length prefix
//!
//! # Architecture
//!
//! - `alphabet`: the symbol table and inverse lookup
//! - `remainder`: output sizes for full and partial groups
//! - `regroup`: 5-byte <-> 8-value block conversion
//! - `encode` / `decode`: the public transforms
//! - `error`: the decoder's error type
//!
//! Everything is a pure function over caller-owned buffers: no global
//! state, no I/O, no logging. Calls can run concurrently from any thread.
//!
//! # Example
//! ```
//! let id = [0xde, 0xad, 0xbe, 0xef, 0x00];
//! let token = zb32_core::encode(&id);
//! assert_eq!(token, "54s575ay");
//! assert_eq!(zb32_core::decode(&token).unwrap(), id);
//! ```

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod error;
pub mod regroup;
pub mod remainder;

// Re-export commonly used items
pub use decode::{decode, decode_into, validate};
pub use encode::{encode, encode_into};
pub use error::{DecodeError, Result};
pub use remainder::{decoded_len, encoded_len};
