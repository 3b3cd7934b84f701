//! Saturating conversions between `ExactInt` and machine numbers.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive};

use crate::ExactInt;

impl ExactInt {
    /// Convert to `i32`, saturating at `i32::MIN` / `i32::MAX`.
    pub fn to_fixed32(&self) -> i32 {
        self.0.to_i32().unwrap_or(if self.0.is_negative() {
            i32::MIN
        } else {
            i32::MAX
        })
    }

    /// Convert to `isize`, saturating at the pointer-width bounds.
    pub fn to_isize_saturating(&self) -> isize {
        self.0.to_isize().unwrap_or(if self.0.is_negative() {
            isize::MIN
        } else {
            isize::MAX
        })
    }

    /// Convert to `usize`; negative values clamp to zero.
    pub fn to_usize_saturating(&self) -> usize {
        if self.0.is_negative() {
            return 0;
        }
        self.0.to_usize().unwrap_or(usize::MAX)
    }

    /// Truncate a double toward zero.
    ///
    /// NaN and the infinities have no integer value and map to zero.
    pub fn from_f64(d: f64) -> Self {
        BigInt::from_f64(d.trunc())
            .map(ExactInt)
            .unwrap_or_default()
    }
}

/// Convert a double to `i32`: truncate, saturate at the bounds, NaN is `0`.
pub fn double_to_fixed32(d: f64) -> i32 {
    // `as` already saturates and maps NaN to zero.
    d as i32
}
