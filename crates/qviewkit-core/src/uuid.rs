//! qkit measurement identifiers.
//!
//! Each measurement file is named after the Unix timestamp (seconds) of its creation,
//! written in base 36 over `0-9A-Z`, most significant digit first. Timestamps between
//! December 1971 and December 2038 encode to exactly six characters.

use thiserror::Error;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UuidError {
    #[error("empty measurement identifier")]
    Empty,
    #[error("cannot decode measurement identifier: invalid digit {digit:?}")]
    InvalidDigit { digit: char },
    #[error("measurement identifier does not fit a 64-bit timestamp")]
    Overflow,
}

/// Encodes a Unix timestamp into its base-36 identifier.
pub fn encode_uuid(timestamp: u64) -> String {
    if timestamp == 0 {
        return "0".to_string();
    }
    let base = ALPHABET.len() as u64;
    let mut digits = Vec::new();
    let mut value = timestamp;
    while value > 0 {
        digits.push(ALPHABET[(value % base) as usize]);
        value /= base;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Decodes an identifier back into the Unix timestamp. Lowercase letters are accepted.
pub fn decode_uuid(id: &str) -> Result<u64, UuidError> {
    if id.is_empty() {
        return Err(UuidError::Empty);
    }
    let base = ALPHABET.len() as u64;
    id.chars().try_fold(0u64, |acc, c| {
        let digit = c
            .to_digit(36)
            .ok_or(UuidError::InvalidDigit { digit: c })?;
        acc.checked_mul(base)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(UuidError::Overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_timestamp() {
        // 2017-01-01T00:00:00Z
        assert_eq!(encode_uuid(1_483_228_800), "OJ2QO0");
        assert_eq!(encode_uuid(35), "Z");
        assert_eq!(encode_uuid(36), "10");
        assert_eq!(encode_uuid(0), "0");
    }

    #[test]
    fn decode_inverts_encode() {
        for ts in [1u64, 35, 36, 1_483_228_800, 1_700_000_000, u64::MAX] {
            assert_eq!(decode_uuid(&encode_uuid(ts)).unwrap(), ts);
        }
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode_uuid("oj2qo0").unwrap(), 1_483_228_800);
    }

    #[test]
    fn decode_errors() {
        assert_eq!(decode_uuid(""), Err(UuidError::Empty));
        assert_eq!(
            decode_uuid("AB-C"),
            Err(UuidError::InvalidDigit { digit: '-' })
        );
        assert_eq!(decode_uuid("ZZZZZZZZZZZZZZZZ"), Err(UuidError::Overflow));
    }

    #[test]
    fn six_chars_until_2038() {
        assert_eq!(encode_uuid(1_483_228_800).len(), 6);
        assert_eq!(encode_uuid(1_700_000_000), "S44WE8");
        assert_eq!(encode_uuid(4_000_000_000).len(), 7);
    }
}
