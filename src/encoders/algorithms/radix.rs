use crate::core::encoding::Encoding;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

pub use super::errors::DecodeError;

const RADIX: u64 = 62;

/// Digits folded into one `u64` per big-integer operation.
const CHUNK_DIGITS: usize = 10;

/// `RADIX_POWERS[n]` is 62^n; 62^10 is the largest power below 2^64.
const RADIX_POWERS: [u64; CHUNK_DIGITS + 1] = {
    let mut powers = [1u64; CHUNK_DIGITS + 1];
    let mut i = 1;
    while i <= CHUNK_DIGITS {
        powers[i] = powers[i - 1] * RADIX;
        i += 1;
    }
    powers
};

/// Upper bound on symbols needed for `len` bytes: log(256) / log(62) ~= 1.344.
fn encoded_capacity(len: usize) -> usize {
    len.saturating_mul(1344) / 1000 + 1
}

/// Encodes `data` as base62 symbols, most significant first.
///
/// The input is read as a big-endian integer and divided by 62^10 at a time so
/// each big-integer division yields ten digits. Every leading `0x00` byte adds
/// one zero symbol in front, since the integer value alone cannot carry them.
pub fn encode(data: &[u8], encoding: &Encoding) -> Vec<u8> {
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();
    let zero = encoding.zero_symbol();

    let mut result = Vec::with_capacity(encoded_capacity(data.len()));

    let mut num = BigUint::from_bytes_be(&data[leading_zeros..]);
    let chunk_radix = BigUint::from(RADIX_POWERS[CHUNK_DIGITS]);

    // Digits are pushed least significant first and reversed at the end
    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&chunk_radix);
        num = quotient;
        let mut chunk = remainder.to_u64().unwrap_or_default();

        if num.is_zero() {
            // Most significant chunk: no padding
            while chunk > 0 {
                result.push(encoding.symbol(chunk % RADIX));
                chunk /= RADIX;
            }
        } else {
            for _ in 0..CHUNK_DIGITS {
                result.push(encoding.symbol(chunk % RADIX));
                chunk /= RADIX;
            }
        }
    }

    result.resize(result.len() + leading_zeros, zero);
    result.reverse();
    result
}

/// Decodes base62 symbols, reporting the first symbol outside the alphabet.
///
/// Symbols are folded ten at a time into a `u64` before touching the big
/// integer. Each leading zero symbol becomes a leading `0x00` byte.
pub fn decode_checked(input: &[u8], encoding: &Encoding) -> Result<Vec<u8>, DecodeError> {
    let mut num = BigUint::zero();

    for (chunk_index, chunk) in input.chunks(CHUNK_DIGITS).enumerate() {
        let mut total = 0u64;
        for (offset, &c) in chunk.iter().enumerate() {
            let digit = encoding.digit(c).ok_or_else(|| {
                DecodeError::invalid_character(c, chunk_index * CHUNK_DIGITS + offset, input)
            })?;
            total = total * RADIX + u64::from(digit);
        }

        num *= RADIX_POWERS[chunk.len()];
        num += total;
    }

    let zero = encoding.zero_symbol();
    let leading_zeros = input.iter().take_while(|&&c| c == zero).count();

    // to_bytes_be() renders zero as [0]; it contributes no bytes here
    let magnitude = if num.is_zero() {
        Vec::new()
    } else {
        num.to_bytes_be()
    };

    let mut result = Vec::with_capacity(leading_zeros + magnitude.len());
    result.resize(leading_zeros, 0u8);
    result.extend_from_slice(&magnitude);
    Ok(result)
}

/// Decodes base62 symbols; any symbol outside the alphabet yields an empty
/// vector rather than an error.
pub fn decode(input: &[u8], encoding: &Encoding) -> Vec<u8> {
    decode_checked(input, encoding).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoding::STANDARD;

    const STRING_VECTORS: &[(&str, &str)] = &[
        ("", ""),
        (" ", "w"),
        ("-", "J"),
        ("0", "M"),
        ("1", "N"),
        ("-1", "30B"),
        ("11", "3h7"),
        ("abc", "qMin"),
        ("1234598760", "1a0AFzKIPnihTq"),
        (
            "abcdefghijklmnopqrstuvwxyz",
            "hUBXsgd3F2swSlEgbVi2p0Ncr6kzVeJTLaW",
        ),
        (
            "00000000000000000000000000000000000000000000000000000000000000",
            "EGCwf6HLNqYIKFfPdd8N0wk949eQseyQb7Rkd652Qk6Akz2Q1ZDjhe3eAAYFYOHESnAVjdMrT9d3FOybe6Y",
        ),
    ];

    const HEX_VECTORS: &[(&str, &str)] = &[
        ("61", "1z"),
        ("626262", "r3lo"),
        ("636363", "rksz"),
        (
            "73696d706c792061206c6f6e6720737472696e67",
            "gsYMLccoKcplmYv0sl5XtRVCAdN",
        ),
        (
            "00eb15231dfceb60925886b67d065299925915aeb172c06647",
            "02xfEbo02ZLEX6ESUaRlLYJieqVj1OAbB5",
        ),
        ("516b6fcd0f", "69HRUw7"),
        ("bf4f89001e670274dd", "15OLCIkmyVeJD"),
        ("572e4794", "1AZ8hu"),
        ("ecac89cad93923c02321", "5AqnQ3pbuRDGN3"),
        ("10c8511e", "j3pvw"),
        ("00000000000000000000", "0000000000"),
        (
            "000111d38e5fc9071ffcd20b4a763cc9ae4f252bb4e48fd66a835e252ada93ff480d6dd43dc62a641155a5",
            "01x2HqU8qh3Dw0z1W2fUcC6mU7O5uQ3DDUZN1Onz3h7rNd4xCsAxeztat",
        ),
    ];

    #[test]
    fn test_radix_powers() {
        assert_eq!(RADIX_POWERS[0], 1);
        assert_eq!(RADIX_POWERS[1], 62);
        assert_eq!(RADIX_POWERS[10], 839_299_365_868_340_224);
    }

    #[test]
    fn test_encoded_capacity() {
        assert_eq!(encoded_capacity(0), 1);
        for len in [1, 9, 10, 11, 64, 300] {
            let data = vec![0xFFu8; len];
            assert!(encode(&data, &STANDARD).len() <= encoded_capacity(len), "{}", len);
        }
        // No overflow on huge lengths, even where usize is 32 bits
        assert_eq!(encoded_capacity(usize::MAX), usize::MAX / 1000 + 1);
        assert!(encoded_capacity(u32::MAX as usize) > 0);
    }

    #[test]
    fn test_string_vectors() {
        for (plain, encoded) in STRING_VECTORS {
            assert_eq!(
                encode(plain.as_bytes(), &STANDARD),
                encoded.as_bytes(),
                "encoding {:?}",
                plain
            );
            assert_eq!(
                decode(encoded.as_bytes(), &STANDARD),
                plain.as_bytes(),
                "decoding {:?}",
                encoded
            );
        }
    }

    #[test]
    fn test_hex_vectors() {
        for (hex_in, encoded) in HEX_VECTORS {
            let bytes = hex::decode(hex_in).unwrap();
            assert_eq!(decode(encoded.as_bytes(), &STANDARD), bytes, "decoding {}", encoded);
            assert_eq!(encode(&bytes, &STANDARD), encoded.as_bytes(), "encoding {}", hex_in);
        }
    }

    #[test]
    fn test_all_zero_bytes() {
        assert_eq!(encode(&[0u8; 10], &STANDARD), b"0000000000");
        assert_eq!(encode(&[0u8], &STANDARD), b"0");
        assert_eq!(decode(b"0000", &STANDARD), vec![0u8; 4]);
    }

    #[test]
    fn test_leading_zero_bytes() {
        assert_eq!(encode(&[0, 0, 1], &STANDARD), b"001");
        assert_eq!(decode(b"001", &STANDARD), vec![0, 0, 1]);
    }

    #[test]
    fn test_chunk_boundaries() {
        // 2^64 needs two chunks: one full, one partial
        let mut data = vec![1u8];
        data.extend_from_slice(&[0u8; 8]);
        assert_eq!(encode(&data, &STANDARD), b"lYGhA16ahyg");
        assert_eq!(decode(b"lYGhA16ahyg", &STANDARD), data);

        assert_eq!(encode(&[0xFF; 8], &STANDARD), b"lYGhA16ahyf");
        assert_eq!(decode(b"lYGhA16ahyf", &STANDARD), vec![0xFF; 8]);
    }

    #[test]
    fn test_invalid_input_decodes_empty() {
        for input in [
            "?", "/", ".", "%", "3mJr?", "%3yxU", "3sN#", "4k()", "????",
            "!@#$%^&*()-_=+~`",
        ] {
            assert!(decode(input.as_bytes(), &STANDARD).is_empty(), "{}", input);
        }
    }

    #[test]
    fn test_invalid_anywhere_rejects_whole_input() {
        // Valid prefix longer than one chunk does not leak through
        assert!(decode(b"gsYMLccoKcplmYv0sl5X tRVCAdN", &STANDARD).is_empty());
        assert!(decode(b"0000000000+", &STANDARD).is_empty());
    }

    #[test]
    fn test_decode_checked_reports_position() {
        assert_eq!(
            decode_checked(b"3mJr?", &STANDARD),
            Err(DecodeError::invalid_character(b'?', 4, b"3mJr?"))
        );
        let long = b"gsYMLccoKcplm-Yv0sl5XtRVCAdN";
        match decode_checked(long, &STANDARD) {
            Err(DecodeError::InvalidCharacter { byte, position, .. }) => {
                assert_eq!(byte, b'-');
                assert_eq!(position, 13);
            }
            other => panic!("expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_checked_empty() {
        assert_eq!(decode_checked(b"", &STANDARD), Ok(Vec::new()));
    }
}
