//! Whole-buffer conversions between `Text` and codepoint sequences.

use pith_int::ExactInt;

use crate::scanner::{codepoint_width_at, decode_codepoint_at, encode_codepoint};
use crate::{List, Text};

/// Total number of codepoints in `text`.
pub fn string_count(text: &Text) -> ExactInt {
    ExactInt::from(text.codepoint_count())
}

pub fn string_to_codepoints(text: &Text) -> Vec<u32> {
    let units = text.as_units();
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        out.push(decode_codepoint_at(units, i));
        i += codepoint_width_at(units, i);
    }
    out
}

pub fn codepoints_to_string(codepoints: &[u32]) -> Text {
    encode_all(codepoints.iter().copied(), codepoints.len())
}

pub fn string_to_codepoint_list(text: &Text) -> List<u32> {
    List::from_vec_with_tail(string_to_codepoints(text), &List::nil())
}

pub fn codepoint_list_to_string(codepoints: &List<u32>) -> Text {
    encode_all(codepoints.iter().copied(), 0)
}

fn encode_all(codepoints: impl Iterator<Item = u32>, size_hint: usize) -> Text {
    let mut units = Vec::with_capacity(size_hint);
    for cp in codepoints {
        let (buf, n) = encode_codepoint(cp);
        units.extend_from_slice(&buf[..n]);
    }
    Text::from_units(units)
}
