use crate::core::encoding::Encoding;

pub use super::errors::DecodeError;

const RADIX: u64 = 62;

/// 62^11 > 2^64, so eleven symbols hold any `u64`.
pub const MAX_DIGITS: usize = 11;

/// Encodes `n` with the fewest symbols, most significant first.
pub fn encode(mut n: u64, encoding: &Encoding) -> Vec<u8> {
    if n == 0 {
        return vec![encoding.zero_symbol()];
    }

    let mut buf = [0u8; MAX_DIGITS];
    let mut i = MAX_DIGITS;
    while n > 0 {
        i -= 1;
        buf[i] = encoding.symbol(n % RADIX);
        n /= RADIX;
    }
    buf[i..].to_vec()
}

/// Decodes symbols into a `u64`. The empty input decodes to 0.
pub fn decode(input: &[u8], encoding: &Encoding) -> Result<u64, DecodeError> {
    let mut n = 0u64;
    for (position, &c) in input.iter().enumerate() {
        let digit = encoding
            .digit(c)
            .ok_or_else(|| DecodeError::invalid_character(c, position, input))?;
        n = n
            .checked_mul(RADIX)
            .and_then(|m| m.checked_add(u64::from(digit)))
            .ok_or_else(|| DecodeError::overflow(input))?;
    }
    Ok(n)
}
