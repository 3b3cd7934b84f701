//! Exact integer arithmetic for the pith runtime.
//!
//! `ExactInt` is the integer type every count, offset and arithmetic
//! operator in generated code goes through. All operations are total:
//! parsing reports absence with `Option`, conversions saturate, and
//! division by zero yields zero.

mod arith;
mod convert;
mod exact;
mod hex;
mod parse;

pub use convert::double_to_fixed32;
pub use exact::ExactInt;
pub use parse::{ParseIntError, parse};
