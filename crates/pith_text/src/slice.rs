//! Zero-copy, codepoint-aligned views into a `Text`.
//!
//! A `Slice` is `(text, start, len)` in code units. Both ends sit on
//! codepoint boundaries, so no operation here ever splits a surrogate pair.
//! Counts crossing the API are `ExactInt`s; every operation clamps at the
//! buffer edges instead of failing.

use std::fmt;
use std::iter::FusedIterator;

use pith_int::ExactInt;

use crate::Text;
use crate::scanner::{codepoint_width_at, codepoint_width_before, count_codepoints, decode_codepoint_at};

#[derive(Clone)]
pub struct Slice {
    text: Text,
    start: usize,
    len: usize,
}

impl Slice {
    /// The first codepoint of `text`, or an empty slice for empty text.
    pub fn first(text: &Text) -> Slice {
        let len = if text.is_empty() {
            0
        } else {
            codepoint_width_at(text.as_units(), 0)
        };
        Slice {
            text: text.clone(),
            start: 0,
            len,
        }
    }

    /// The last codepoint of `text`, or an empty slice for empty text.
    pub fn last(text: &Text) -> Slice {
        let end = text.len();
        let len = if end == 0 {
            0
        } else {
            codepoint_width_before(text.as_units(), end)
        };
        Slice {
            text: text.clone(),
            start: end - len,
            len,
        }
    }

    pub fn whole(text: &Text) -> Slice {
        Slice {
            text: text.clone(),
            start: 0,
            len: text.len(),
        }
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Start offset in code units.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length in code units.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn covers_whole_text(&self) -> bool {
        self.start == 0 && self.len == self.text.len()
    }

    pub fn as_units(&self) -> &[u16] {
        &self.text.as_units()[self.start..self.end()]
    }

    /// Materialize the slice. A slice covering the whole buffer shares it.
    pub fn to_text(&self) -> Text {
        if self.covers_whole_text() {
            return self.text.clone();
        }
        Text::from(self.as_units())
    }

    /// Split off the leading codepoint.
    ///
    /// Returns `None` for an empty slice; otherwise the codepoint and the
    /// slice advanced past it.
    pub fn next(&self) -> Option<(u32, Slice)> {
        if self.len == 0 {
            return None;
        }
        let units = self.text.as_units();
        let cp = decode_codepoint_at(units, self.start);
        let width = codepoint_width_at(units, self.start).min(self.len);
        let rest = Slice {
            text: self.text.clone(),
            start: self.start + width,
            len: self.len - width,
        };
        Some((cp, rest))
    }

    /// Lazy iterator over the codepoints of this slice.
    pub fn codepoints(&self) -> Codepoints {
        Codepoints { rest: self.clone() }
    }

    /// Number of codepoints in the slice.
    pub fn count(&self) -> ExactInt {
        ExactInt::from(self.codepoint_len())
    }

    pub(crate) fn codepoint_len(&self) -> usize {
        if self.covers_whole_text() {
            return self.text.codepoint_count();
        }
        count_codepoints(self.text.as_units(), self.start, self.end())
    }

    /// Grow the end by `count` codepoints, or shrink it when `count` is
    /// negative. Stops at the end of the buffer or the start of the slice.
    pub fn extend(&self, count: &ExactInt) -> Slice {
        self.extend_by(count.to_isize_saturating())
    }

    fn extend_by(&self, count: isize) -> Slice {
        let units = self.text.as_units();
        let mut end = self.end();
        if count > 0 {
            for _ in 0..count {
                if end >= units.len() {
                    break;
                }
                end += codepoint_width_at(units, end);
            }
        } else {
            for _ in 0..count.unsigned_abs() {
                if end <= self.start {
                    break;
                }
                end -= codepoint_width_before(units, end).min(end - self.start);
            }
        }
        Slice {
            text: self.text.clone(),
            start: self.start,
            len: end - self.start,
        }
    }

    /// Slide the window: move the start by `count` codepoints and keep the
    /// original codepoint count where the buffer allows it.
    ///
    /// The result is the window of `self.count()` codepoints beginning at
    /// the moved start, truncated at the end of the buffer. Moving past
    /// either edge of the buffer clamps the start to that edge.
    pub fn advance(&self, count: &ExactInt) -> Slice {
        let n = count.to_isize_saturating();
        if n == 0 {
            return self.clone();
        }
        let units = self.text.as_units();
        let kept = self.codepoint_len();
        let mut start = self.start;
        if n > 0 {
            for _ in 0..n {
                if start >= units.len() {
                    break;
                }
                start += codepoint_width_at(units, start);
            }
            // Whatever part of the old window survives stays; the tail is
            // re-extended by the codepoints consumed from the front.
            let end = self.end().max(start);
            let remaining = count_codepoints(units, start, end);
            let moved = Slice {
                text: self.text.clone(),
                start,
                len: end - start,
            };
            moved.extend_by((kept - remaining) as isize)
        } else {
            for _ in 0..n.unsigned_abs() {
                if start == 0 {
                    break;
                }
                start -= codepoint_width_before(units, start).min(start);
            }
            let moved = Slice {
                text: self.text.clone(),
                start,
                len: 0,
            };
            moved.extend_by(kept as isize)
        }
    }

    /// Longest prefix of `self` whose code units equal a prefix of `other`,
    /// capped at `up_to` codepoints. A negative cap means no cap.
    pub fn common_prefix(&self, other: &Slice, up_to: &ExactInt) -> Slice {
        let mut budget = if up_to.is_negative() {
            None
        } else {
            Some(up_to.to_usize_saturating())
        };
        let ours = self.text.as_units();
        let theirs = other.as_units();
        let max = self.len.min(other.len);
        let mut i = 0;
        while i < max && budget != Some(0) {
            let width = codepoint_width_at(ours, self.start + i);
            if i + width > max {
                break;
            }
            let at = self.start + i;
            if ours[at..at + width] != theirs[i..i + width] {
                break;
            }
            i += width;
            budget = budget.map(|b| b - 1);
        }
        Slice {
            text: self.text.clone(),
            start: self.start,
            len: i,
        }
    }
}

impl PartialEq for Slice {
    fn eq(&self, other: &Self) -> bool {
        self.as_units() == other.as_units()
    }
}

impl Eq for Slice {}

impl fmt::Debug for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slice")
            .field("start", &self.start)
            .field("len", &self.len)
            .field("content", &String::from_utf16_lossy(self.as_units()))
            .finish()
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.as_units().iter().copied()) {
            fmt::Write::write_char(f, c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

/// Iterator over the codepoints of a slice, driven by `Slice::next`.
#[derive(Clone, Debug)]
pub struct Codepoints {
    rest: Slice,
}

impl Iterator for Codepoints {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let (cp, rest) = self.rest.next()?;
        self.rest = rest;
        Some(cp)
    }
}

impl FusedIterator for Codepoints {}
