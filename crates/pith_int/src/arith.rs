//! Comparison, floor division and the arithmetic operators.
//!
//! Division never faults: a zero divisor gives a zero quotient and a zero
//! remainder, so generated code needs no guards around `/` and `%`.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::Zero;

use crate::ExactInt;

impl ExactInt {
    pub fn compare(&self, other: &ExactInt) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Sign relative to zero: `Less`, `Equal` or `Greater`.
    pub fn sign(&self) -> Ordering {
        match self.0.sign() {
            Sign::Minus => Ordering::Less,
            Sign::NoSign => Ordering::Equal,
            Sign::Plus => Ordering::Greater,
        }
    }

    /// Floor division returning `(quotient, remainder)`.
    ///
    /// The remainder takes the sign of the divisor and
    /// `self == quotient * divisor + remainder`. A zero divisor yields `(0, 0)`.
    pub fn div_mod(&self, divisor: &ExactInt) -> (ExactInt, ExactInt) {
        if divisor.0.is_zero() {
            return (ExactInt::zero(), ExactInt::zero());
        }
        let (q, r) = self.0.div_mod_floor(&divisor.0);
        (ExactInt(q), ExactInt(r))
    }

    pub fn div_floor(&self, divisor: &ExactInt) -> ExactInt {
        if divisor.0.is_zero() {
            return ExactInt::zero();
        }
        ExactInt(self.0.div_floor(&divisor.0))
    }

    pub fn mod_floor(&self, divisor: &ExactInt) -> ExactInt {
        if divisor.0.is_zero() {
            return ExactInt::zero();
        }
        ExactInt(self.0.mod_floor(&divisor.0))
    }
}

impl Neg for ExactInt {
    type Output = ExactInt;

    fn neg(self) -> ExactInt {
        ExactInt(-self.0)
    }
}

impl Neg for &ExactInt {
    type Output = ExactInt;

    fn neg(self) -> ExactInt {
        ExactInt(-&self.0)
    }
}

macro_rules! ring_op {
    ($trait:ident, $method:ident) => {
        impl $trait<ExactInt> for ExactInt {
            type Output = ExactInt;

            fn $method(self, rhs: ExactInt) -> ExactInt {
                ExactInt($trait::$method(self.0, rhs.0))
            }
        }

        impl $trait<&ExactInt> for &ExactInt {
            type Output = ExactInt;

            fn $method(self, rhs: &ExactInt) -> ExactInt {
                ExactInt($trait::$method(&self.0, &rhs.0))
            }
        }

        impl $trait<i64> for ExactInt {
            type Output = ExactInt;

            fn $method(self, rhs: i64) -> ExactInt {
                ExactInt($trait::$method(self.0, BigInt::from(rhs)))
            }
        }
    };
}

ring_op!(Add, add);
ring_op!(Sub, sub);
ring_op!(Mul, mul);

impl Div<&ExactInt> for &ExactInt {
    type Output = ExactInt;

    fn div(self, rhs: &ExactInt) -> ExactInt {
        self.div_floor(rhs)
    }
}

impl Div<ExactInt> for ExactInt {
    type Output = ExactInt;

    fn div(self, rhs: ExactInt) -> ExactInt {
        self.div_floor(&rhs)
    }
}

impl Rem<&ExactInt> for &ExactInt {
    type Output = ExactInt;

    fn rem(self, rhs: &ExactInt) -> ExactInt {
        self.mod_floor(rhs)
    }
}

impl Rem<ExactInt> for ExactInt {
    type Output = ExactInt;

    fn rem(self, rhs: ExactInt) -> ExactInt {
        self.mod_floor(&rhs)
    }
}
