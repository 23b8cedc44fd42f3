// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{ShamirError, ShamirResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::{
    fmt,
    ops::{Add, Mul},
};

#[cfg(test)]
#[path = "unit_tests/fraction_tests.rs"]
mod fraction_tests;

/// An exact rational number, always in lowest terms with a positive denominator.
#[derive(Eq, PartialEq, Clone, Hash, Debug)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    pub fn new(numerator: BigInt, denominator: BigInt) -> ShamirResult<Self> {
        ensure!(!denominator.is_zero(), ShamirError::ZeroDenominator);
        Ok(Self::normalized(numerator, denominator))
    }

    pub fn from_integer(value: BigInt) -> Self {
        Fraction {
            numerator: value,
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns the value as an integer, failing with `NonIntegerResult` if it has a fractional part.
    pub fn to_exact_integer(&self) -> ShamirResult<BigInt> {
        let (quotient, remainder) = self.numerator.div_rem(&self.denominator);
        ensure!(remainder.is_zero(), ShamirError::NonIntegerResult);
        Ok(quotient)
    }

    // The denominator must be non-zero.
    fn normalized(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        let divisor = numerator.gcd(&denominator);
        if !divisor.is_one() {
            numerator /= &divisor;
            denominator /= &divisor;
        }
        Fraction {
            numerator,
            denominator,
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, other: Self) -> Fraction {
        let numerator = &self.numerator * &other.denominator + &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;
        Fraction::normalized(numerator, denominator)
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Self) -> Fraction {
        &self + &other
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, other: Self) -> Fraction {
        let numerator = &self.numerator * &other.numerator;
        let denominator = &self.denominator * &other.denominator;
        Fraction::normalized(numerator, denominator)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, other: Self) -> Fraction {
        &self * &other
    }
}
