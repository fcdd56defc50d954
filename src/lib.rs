//! Base62 encoding for arbitrary byte strings and `u64` values.
//!
//! Two codecs share one [`Encoding`] table:
//!
//! - the arbitrary-length codec treats its input as a big-endian integer and
//!   keeps leading `0x00` bytes as leading zero symbols, so any byte string
//!   round-trips;
//! - the fixed-width codec maps a single `u64` to at most 11 symbols without
//!   allocating a big integer, and reports overflow on decode.
//!
//! The arbitrary-length [`decode`] turns invalid input into an empty vector,
//! while [`decode_u64`] returns a [`DecodeError`]. Use [`decode_checked`] when
//! an empty result must be told apart from bad input.
//!
//! # Example
//!
//! ```
//! assert_eq!(base62::encode(b"-1"), "30B");
//! assert_eq!(base62::decode("30B"), b"-1");
//!
//! assert_eq!(base62::encode_u64(0), "0");
//! assert_eq!(base62::decode_u64("Z"), Ok(61));
//! ```

mod core;
mod encoders;

pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, FALLBACK_ALPHABET, Settings};
pub use crate::core::encoding::{
    ALPHABET_LEN, Encoding, INVERTED_ALPHABET, STANDARD, STANDARD_ALPHABET,
};
pub use crate::encoders::algorithms::uint64::MAX_DIGITS;
pub use crate::encoders::algorithms::{
    AlphabetError, AlphabetNotFoundError, DecodeError, find_closest_alphabet,
};

/// Encodes bytes with the [`STANDARD`] alphabet.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decodes with the [`STANDARD`] alphabet; invalid input yields an empty vector.
pub fn decode<T: AsRef<[u8]>>(input: T) -> Vec<u8> {
    STANDARD.decode(input)
}

/// Decodes with the [`STANDARD`] alphabet, reporting invalid symbols.
pub fn decode_checked<T: AsRef<[u8]>>(input: T) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode_checked(input)
}

/// Encodes a `u64` with the [`STANDARD`] alphabet.
pub fn encode_u64(n: u64) -> String {
    STANDARD.encode_u64(n)
}

/// Decodes a `u64` with the [`STANDARD`] alphabet.
pub fn decode_u64<T: AsRef<[u8]>>(input: T) -> Result<u64, DecodeError> {
    STANDARD.decode_u64(input)
}
