//! Codepoint scanner over UTF-16 code units.
//!
//! Every other module asks `codepoint_width_at` how many units a codepoint
//! occupies; nothing else decides surrogate pairing. Unpaired surrogates are
//! treated as single-unit codepoints.

const HIGH_SURROGATE_START: u16 = 0xD800;
const HIGH_SURROGATE_END: u16 = 0xDBFF;
const LOW_SURROGATE_START: u16 = 0xDC00;
const LOW_SURROGATE_END: u16 = 0xDFFF;
const SUPPLEMENTARY_BASE: u32 = 0x1_0000;

pub const REPLACEMENT: u32 = 0xFFFD;
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

#[inline]
pub fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..=HIGH_SURROGATE_END).contains(&unit)
}

#[inline]
pub fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..=LOW_SURROGATE_END).contains(&unit)
}

/// Number of code units (1 or 2) of the codepoint starting at `offset`.
///
/// Returns 2 only for a high surrogate immediately followed, within bounds,
/// by a low surrogate.
#[inline]
pub fn codepoint_width_at(units: &[u16], offset: usize) -> usize {
    match (units.get(offset), offset.checked_add(1).and_then(|i| units.get(i))) {
        (Some(&hi), Some(&lo)) if is_high_surrogate(hi) && is_low_surrogate(lo) => 2,
        _ => 1,
    }
}

/// Number of code units (1 or 2) of the codepoint ending just before `end`.
#[inline]
pub fn codepoint_width_before(units: &[u16], end: usize) -> usize {
    if end >= 2 && codepoint_width_at(units, end - 2) == 2 {
        2
    } else {
        1
    }
}

/// Decode the codepoint starting at `offset`.
///
/// A valid pair combines into one scalar value; any other unit is returned
/// as is. Offsets past the end decode to U+FFFD.
pub fn decode_codepoint_at(units: &[u16], offset: usize) -> u32 {
    let Some(&unit) = units.get(offset) else {
        return REPLACEMENT;
    };
    if codepoint_width_at(units, offset) == 2 {
        let hi = u32::from(unit - HIGH_SURROGATE_START);
        let lo = u32::from(units[offset + 1] - LOW_SURROGATE_START);
        SUPPLEMENTARY_BASE + ((hi << 10) | lo)
    } else {
        u32::from(unit)
    }
}

/// Encode a codepoint as UTF-16, returning the buffer and its used length.
///
/// Values up to U+FFFF (including lone surrogate values) occupy one unit so
/// decoding and re-encoding round-trips. Values above U+10FFFF encode as
/// U+FFFD.
pub fn encode_codepoint(cp: u32) -> ([u16; 2], usize) {
    if cp < SUPPLEMENTARY_BASE {
        return ([cp as u16, 0], 1);
    }
    if cp > MAX_CODEPOINT {
        return ([REPLACEMENT as u16, 0], 1);
    }
    let v = cp - SUPPLEMENTARY_BASE;
    let hi = HIGH_SURROGATE_START + (v >> 10) as u16;
    let lo = LOW_SURROGATE_START + (v & 0x3FF) as u16;
    ([hi, lo], 2)
}

/// Count codepoints in `units[start..end]`.
pub fn count_codepoints(units: &[u16], start: usize, end: usize) -> usize {
    let end = end.min(units.len());
    let mut i = start;
    let mut n = 0;
    while i < end {
        i += codepoint_width_at(units, i);
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_requires_both_halves() {
        let pair = [0xD83D, 0xDE00];
        assert_eq!(codepoint_width_at(&pair, 0), 2);
        assert_eq!(codepoint_width_at(&pair, 1), 1);
        assert_eq!(codepoint_width_at(&[0xD83D], 0), 1);
        assert_eq!(codepoint_width_at(&[0xD83D, 0x0041], 0), 1);
        assert_eq!(codepoint_width_at(&[0xDE00, 0xD83D], 0), 1);
        assert_eq!(codepoint_width_at(&[], 0), 1);
        assert_eq!(codepoint_width_at(&pair, usize::MAX), 1);
    }

    #[test]
    fn width_before_looks_back_one_pair() {
        let units = [0x61, 0xD83D, 0xDE00];
        assert_eq!(codepoint_width_before(&units, 3), 2);
        assert_eq!(codepoint_width_before(&units, 1), 1);
        assert_eq!(codepoint_width_before(&[0x61, 0xDE00], 2), 1);
    }

    #[test]
    fn decode_and_encode_agree() {
        let units = [0xD83D, 0xDE00, 0x41, 0xDC00];
        assert_eq!(decode_codepoint_at(&units, 0), 0x1F600);
        assert_eq!(decode_codepoint_at(&units, 2), 0x41);
        assert_eq!(decode_codepoint_at(&units, 3), 0xDC00);
        assert_eq!(decode_codepoint_at(&units, 9), REPLACEMENT);
        assert_eq!(encode_codepoint(0x1F600), ([0xD83D, 0xDE00], 2));
        assert_eq!(encode_codepoint(0xDC00), ([0xDC00, 0], 1));
        assert_eq!(encode_codepoint(0x11_0000), ([0xFFFD, 0], 1));
    }
}
