//! String helpers over UTF-16 `Text`.
//!
//! Offsets here are code units, clamped to the buffer.

use pith_int::ExactInt;
use pith_text::Text;
use pith_text::scanner::encode_codepoint;

use crate::RtResult;
use crate::errors::{RuntimeError, require};

pub fn join(parts: &[Text], sep: &Text) -> Text {
    let mut pieces: Vec<&[u16]> = Vec::with_capacity(parts.len() * 2);
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            pieces.push(sep.as_units());
        }
        pieces.push(part.as_units());
    }
    Text::concat_many(&pieces)
}

/// `s` repeated `n` times; empty when `n <= 0`.
pub fn repeat(s: &Text, n: &ExactInt) -> Text {
    let times = n.to_fixed32();
    if times <= 0 || s.is_empty() {
        return Text::new();
    }
    Text::from_units(s.as_units().repeat(times as usize))
}

/// Substring of at most `len` code units from `start`.
///
/// A negative `start` counts from the end of `s`.
pub fn substr(s: &Text, start: &ExactInt, len: &ExactInt) -> Text {
    let n = s.len() as isize;
    let start = start.to_isize_saturating();
    let len = len.to_isize_saturating();
    let idx = (if start >= 0 { start } else { n.saturating_add(start) }).max(0);
    if idx >= n || len <= 0 {
        return Text::new();
    }
    let end = idx.saturating_add(len).min(n);
    Text::from(&s.as_units()[idx as usize..end as usize])
}

/// Everything from `start` to the end of `s`.
pub fn substr_from(s: &Text, start: &ExactInt) -> Text {
    substr(s, start, &ExactInt::from(s.len()))
}

/// Number of non-overlapping occurrences of `pattern` in `s`.
pub fn count_occurrences(s: &Text, pattern: &Text) -> ExactInt {
    let hay = s.as_units();
    let pat = pattern.as_units();
    if pat.is_empty() {
        return ExactInt::zero();
    }
    let mut count = 0usize;
    let mut i = 0;
    while i + pat.len() <= hay.len() {
        if hay[i..i + pat.len()] == *pat {
            count += 1;
            i += pat.len();
        } else {
            i += 1;
        }
    }
    ExactInt::from(count)
}

pub fn char_to_string(cp: u32) -> Text {
    let (buf, n) = encode_codepoint(cp);
    Text::from(&buf[..n])
}

/// Parse an integer literal, failing with a named error when malformed.
pub fn parse_int(s: &Text, force_hex: bool) -> RtResult<ExactInt> {
    let literal = s.to_string_lossy();
    require(pith_int::parse(&literal, force_hex), || {
        RuntimeError::Error(format!("invalid integer literal: {literal:?}"))
    })
}
