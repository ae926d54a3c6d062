//! Number in form `n/2^m` with arbitrary precision numerator

use auto_ops::impl_op_ex;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::{cmp::Ordering, fmt::Display};

/// Number in form `n/2^m`
#[derive(Debug, Hash, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DyadicRationalNumber {
    numerator: BigInt,
    denominator_exponent: u32,
}

impl DyadicRationalNumber {
    /// Create a new dyadic
    pub fn new(numerator: impl Into<BigInt>, denominator_exponent: u32) -> Self {
        Self {
            numerator: numerator.into(),
            denominator_exponent,
        }
        .normalized()
    }

    /// Create a new integer
    pub fn new_integer(number: impl Into<BigInt>) -> Self {
        Self {
            numerator: number.into(),
            denominator_exponent: 0,
        }
    }

    /// Create a new fraction. Returns [None] if denominator is zero, or the number is not dyadic
    pub fn new_fraction(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Option<Self> {
        let mut numerator = numerator.into();
        let mut denominator = denominator.into();

        if denominator.is_zero() {
            return None;
        }

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        // Cancel common factors first so that e.g. 3/6 is not rejected
        let gcd = numerator.gcd(&denominator);
        numerator /= &gcd;
        denominator /= &gcd;

        let denominator_exponent = denominator.trailing_zeros().unwrap_or(0);
        if (&denominator >> denominator_exponent).is_one() {
            Some(
                Self {
                    numerator,
                    denominator_exponent: u32::try_from(denominator_exponent).ok()?,
                }
                .normalized(),
            )
        } else {
            None
        }
    }

    /// Get the numerator (`n` from `n/2^m`)
    pub const fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Get the denominator (`2^m` from `n/2^m`)
    pub fn denominator(&self) -> BigInt {
        BigInt::one() << self.denominator_exponent
    }

    /// Get denominator exponent (`m` from `n/2^m`)
    pub const fn denominator_exponent(&self) -> u32 {
        self.denominator_exponent
    }

    fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    fn normalize(&mut self) {
        if self.numerator.is_zero() {
            self.denominator_exponent = 0;
            return;
        }

        // [2*(n)]/[2*d] = n/d
        let twos = self
            .numerator
            .trailing_zeros()
            .map_or(0, |tz| tz.min(u64::from(self.denominator_exponent)));
        if twos != 0 {
            self.numerator >>= twos;
            self.denominator_exponent -= twos as u32;
        }
    }

    /// Convert to integer if it's an integer
    pub fn to_integer(&self) -> Option<&BigInt> {
        // exponent == 0 => denominator == 1 => It's an integer
        (self.denominator_exponent == 0).then_some(&self.numerator)
    }

    /// Check if the number is an integer
    pub const fn is_integer(&self) -> bool {
        self.denominator_exponent == 0
    }

    /// Arithmetic mean of two dyadics
    #[must_use]
    pub fn mean(&self, rhs: &Self) -> Self {
        let mut res = self + rhs;
        res.denominator_exponent += 1; // divide by 2
        res.normalized()
    }

    /// Convert rational to dyadic. Returns [None] if the denominator is not a power of two
    pub fn from_rational(rational: &BigRational) -> Option<Self> {
        Self::new_fraction(rational.numer().clone(), rational.denom().clone())
    }

    /// Convert dyadic to rational
    pub fn to_rational(&self) -> BigRational {
        BigRational::new(self.numerator.clone(), self.denominator())
    }

    /// Align both numbers to the larger denominator exponent and return their numerators
    fn aligned(lhs: &Self, rhs: &Self) -> (BigInt, BigInt, u32) {
        if lhs.denominator_exponent >= rhs.denominator_exponent {
            let shift = lhs.denominator_exponent - rhs.denominator_exponent;
            (
                lhs.numerator.clone(),
                &rhs.numerator << shift,
                lhs.denominator_exponent,
            )
        } else {
            let shift = rhs.denominator_exponent - lhs.denominator_exponent;
            (
                &lhs.numerator << shift,
                rhs.numerator.clone(),
                rhs.denominator_exponent,
            )
        }
    }
}

impl From<i64> for DyadicRationalNumber {
    fn from(value: i64) -> Self {
        Self::new_integer(value)
    }
}

impl From<BigInt> for DyadicRationalNumber {
    fn from(value: BigInt) -> Self {
        Self::new_integer(value)
    }
}

impl PartialOrd for DyadicRationalNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DyadicRationalNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs, _) = Self::aligned(self, other);
        lhs.cmp(&rhs)
    }
}

impl_op_ex!(+|lhs: &DyadicRationalNumber, rhs: &DyadicRationalNumber| -> DyadicRationalNumber {
    let (lhs, rhs, denominator_exponent) = DyadicRationalNumber::aligned(lhs, rhs);
    DyadicRationalNumber {
        numerator: lhs + rhs,
        denominator_exponent,
    }
    .normalized()
});

impl_op_ex!(+=|lhs: &mut DyadicRationalNumber, rhs: &DyadicRationalNumber| { *lhs = &*lhs + rhs; });

impl_op_ex!(
    -|lhs: &DyadicRationalNumber, rhs: &DyadicRationalNumber| -> DyadicRationalNumber {
        lhs + (-rhs)
    }
);

impl_op_ex!(-=|lhs: &mut DyadicRationalNumber, rhs: &DyadicRationalNumber| { *lhs = &*lhs - rhs; });

impl_op_ex!(-|lhs: &DyadicRationalNumber| -> DyadicRationalNumber {
    DyadicRationalNumber {
        numerator: -&lhs.numerator,
        denominator_exponent: lhs.denominator_exponent,
    }
});

impl Display for DyadicRationalNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(int) = self.to_integer() {
            write!(f, "{}", int)
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}
