use crate::encoders::algorithms::errors::{AlphabetError, DecodeError};
use crate::encoders::algorithms::{radix, uint64};

/// Number of symbols in every base62 alphabet.
pub const ALPHABET_LEN: usize = 62;

/// `0-9a-zA-Z`, the alphabet used by [`STANDARD`].
pub const STANDARD_ALPHABET: &[u8; ALPHABET_LEN] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `0-9A-Za-z`, uppercase before lowercase (GMP ordering).
pub const INVERTED_ALPHABET: &[u8; ALPHABET_LEN] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const INVALID: u8 = 0xFF;

/// The process-wide encoding over [`STANDARD_ALPHABET`].
pub static STANDARD: Encoding = Encoding::new(STANDARD_ALPHABET);

/// A base62 encoding table.
///
/// Holds the 62 symbols in digit order and a full 256-entry reverse lookup.
/// The table is never mutated after construction, so a single instance can be
/// shared freely between threads; any number of tables may coexist.
///
/// # Example
///
/// ```
/// use base62::{Encoding, INVERTED_ALPHABET};
///
/// let gmp = Encoding::new(INVERTED_ALPHABET);
/// assert_eq!(gmp.encode(b"-1"), "30b");
/// assert_eq!(gmp.decode("30b"), b"-1");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Encoding {
    alphabet: [u8; ALPHABET_LEN],
    decode_map: [u8; 256],
}

impl Encoding {
    /// Builds a table from 62 symbols, index 0 being the zero digit.
    ///
    /// Symbols are not checked: duplicates leave the later index winning in
    /// the reverse lookup, and non-ASCII symbols make [`Encoding::encode`]
    /// output meaningless (use [`Encoding::encode_to_vec`] for those). Use
    /// [`Encoding::from_alphabet`] for untrusted input.
    pub const fn new(alphabet: &[u8; ALPHABET_LEN]) -> Self {
        let mut decode_map = [INVALID; 256];
        let mut i = 0;
        while i < ALPHABET_LEN {
            decode_map[alphabet[i] as usize] = i as u8;
            i += 1;
        }
        Encoding {
            alphabet: *alphabet,
            decode_map,
        }
    }

    /// Builds a table from a string, rejecting anything other than exactly 62
    /// distinct ASCII symbols.
    pub fn from_alphabet(alphabet: &str) -> Result<Self, AlphabetError> {
        if let Some(c) = alphabet.chars().find(|c| !c.is_ascii()) {
            return Err(AlphabetError::NonAscii(c));
        }

        let symbols: &[u8; ALPHABET_LEN] =
            alphabet
                .as_bytes()
                .try_into()
                .map_err(|_| AlphabetError::InvalidLength {
                    actual: alphabet.len(),
                })?;

        let mut seen = [false; 128];
        for &b in symbols {
            if seen[b as usize] {
                return Err(AlphabetError::DuplicateSymbol(b as char));
            }
            seen[b as usize] = true;
        }

        Ok(Self::new(symbols))
    }

    /// The symbols in digit order.
    pub fn alphabet(&self) -> &[u8; ALPHABET_LEN] {
        &self.alphabet
    }

    /// The symbol for digit 0, also used to mark leading zero bytes.
    pub fn zero_symbol(&self) -> u8 {
        self.alphabet[0]
    }

    /// The digit value of `symbol`, or `None` if it is not in the alphabet.
    #[inline]
    pub fn digit(&self, symbol: u8) -> Option<u8> {
        match self.decode_map[symbol as usize] {
            INVALID => None,
            d => Some(d),
        }
    }

    /// The symbol for a digit in `0..62`.
    #[inline]
    pub(crate) fn symbol(&self, digit: u64) -> u8 {
        self.alphabet[digit as usize]
    }

    /// Encodes arbitrary bytes. Leading zero bytes map one-to-one onto leading
    /// zero symbols; empty input encodes to an empty string.
    pub fn encode(&self, data: &[u8]) -> String {
        self.encode_to_vec(data).into_iter().map(char::from).collect()
    }

    /// Like [`Encoding::encode`], returning the raw symbol bytes.
    pub fn encode_to_vec(&self, data: &[u8]) -> Vec<u8> {
        radix::encode(data, self)
    }

    /// Decodes a string produced by [`Encoding::encode`].
    ///
    /// Any symbol outside the alphabet, anywhere in the input, yields an empty
    /// vector. That is indistinguishable from decoding `""`; use
    /// [`Encoding::decode_checked`] to tell the two apart.
    pub fn decode<T: AsRef<[u8]>>(&self, input: T) -> Vec<u8> {
        radix::decode(input.as_ref(), self)
    }

    /// Decodes like [`Encoding::decode`] but reports the first invalid symbol.
    pub fn decode_checked<T: AsRef<[u8]>>(&self, input: T) -> Result<Vec<u8>, DecodeError> {
        radix::decode_checked(input.as_ref(), self)
    }

    /// Encodes a `u64` with the minimal number of symbols; zero encodes to a
    /// single zero symbol.
    pub fn encode_u64(&self, n: u64) -> String {
        self.encode_u64_to_vec(n).into_iter().map(char::from).collect()
    }

    /// Like [`Encoding::encode_u64`], returning the raw symbol bytes.
    pub fn encode_u64_to_vec(&self, n: u64) -> Vec<u8> {
        uint64::encode(n, self)
    }

    /// Decodes a string produced by [`Encoding::encode_u64`].
    pub fn decode_u64<T: AsRef<[u8]>>(&self, input: T) -> Result<u64, DecodeError> {
        uint64::decode(input.as_ref(), self)
    }
}

impl Default for Encoding {
    fn default() -> Self {
        STANDARD.clone()
    }
}

impl std::fmt::Debug for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encoding")
            .field("alphabet", &String::from_utf8_lossy(&self.alphabet))
            .finish()
    }
}
