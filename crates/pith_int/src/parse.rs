//! Integer literal parsing.
//!
//! Grammar: `["+"|"-"] ["0x"|"0X"] digit+`. The digits must all be valid
//! for the active base; anything else rejects the whole input.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};

use crate::ExactInt;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseIntError {
    #[error("empty integer literal")]
    Empty,
    #[error("invalid integer literal: {0:?}")]
    Invalid(String),
}

/// Parse an integer literal.
///
/// A `0x`/`0X` prefix selects hexadecimal regardless of `force_hex`.
/// Returns `None` when there are no digits or a digit is invalid for the base.
pub fn parse(text: &str, force_hex: bool) -> Option<ExactInt> {
    let bytes = text.as_bytes();
    let (sign, rest) = match bytes.first() {
        Some(b'-') => (Sign::Minus, &bytes[1..]),
        Some(b'+') => (Sign::Plus, &bytes[1..]),
        _ => (Sign::Plus, bytes),
    };
    let (radix, digits) = match rest {
        [b'0', b'x' | b'X', tail @ ..] => (16, tail),
        _ if force_hex => (16, rest),
        _ => (10, rest),
    };
    if digits.is_empty() {
        return None;
    }
    let valid = if radix == 16 {
        digits.iter().all(u8::is_ascii_hexdigit)
    } else {
        digits.iter().all(u8::is_ascii_digit)
    };
    if !valid {
        return None;
    }
    let magnitude = BigUint::parse_bytes(digits, radix)?;
    Some(ExactInt(BigInt::from_biguint(sign, magnitude)))
}

impl FromStr for ExactInt {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIntError::Empty);
        }
        parse(s, false).ok_or_else(|| ParseIntError::Invalid(s.to_string()))
    }
}
