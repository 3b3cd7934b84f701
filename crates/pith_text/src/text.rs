//! Immutable UTF-16 text buffer.
//!
//! Cloning a `Text` shares the buffer; slices keep a clone alive for as long
//! as they exist.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

use crate::scanner;

struct TextInner {
    units: Box<[u16]>,
    codepoints: OnceLock<usize>,
}

#[derive(Clone)]
pub struct Text {
    inner: Arc<TextInner>,
}

impl Text {
    pub fn new() -> Self {
        Self::from_units(Vec::new())
    }

    pub fn from_units(units: Vec<u16>) -> Self {
        Self {
            inner: Arc::new(TextInner {
                units: units.into_boxed_slice(),
                codepoints: OnceLock::new(),
            }),
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::from_units(s.encode_utf16().collect())
    }

    pub fn as_units(&self) -> &[u16] {
        &self.inner.units
    }

    /// Length in code units.
    pub fn len(&self) -> usize {
        self.inner.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of codepoints (not code units).
    pub fn codepoint_count(&self) -> usize {
        *self
            .inner
            .codepoints
            .get_or_init(|| scanner::count_codepoints(&self.inner.units, 0, self.len()))
    }

    /// True when both values share one buffer.
    pub fn ptr_eq(&self, other: &Text) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Decode to a Rust string, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.as_units())
    }

    /// Concatenate unit sequences, pre-sizing the buffer once.
    pub fn concat_many(parts: &[&[u16]]) -> Text {
        let total: usize = parts.iter().map(|p| p.len()).sum();
        let mut out = Vec::with_capacity(total);
        for p in parts {
            out.extend_from_slice(p);
        }
        Self::from_units(out)
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.as_units() == other.as_units()
    }
}

impl Eq for Text {}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_units().hash(state);
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in char::decode_utf16(self.as_units().iter().copied()) {
            fmt::Write::write_char(f, c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::from_str(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::from_str(&value)
    }
}

impl From<Vec<u16>> for Text {
    fn from(value: Vec<u16>) -> Self {
        Text::from_units(value)
    }
}

impl From<&[u16]> for Text {
    fn from(value: &[u16]) -> Self {
        Text::from_units(value.to_vec())
    }
}

impl AsRef<[u16]> for Text {
    fn as_ref(&self) -> &[u16] {
        self.as_units()
    }
}

impl Deref for Text {
    type Target = [u16];

    fn deref(&self) -> &Self::Target {
        self.as_units()
    }
}
