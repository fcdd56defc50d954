pub mod errors;
pub mod radix;
pub mod uint64;

// Re-export error types for public API
pub use errors::{AlphabetError, AlphabetNotFoundError, DecodeError, find_closest_alphabet};
