// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

use super::*;

fn frac(numerator: i64, denominator: i64) -> Fraction {
    Fraction::new(BigInt::from(numerator), BigInt::from(denominator)).unwrap()
}

#[test]
fn test_normalization() {
    let f = frac(4, -8);
    assert_eq!(f.numerator(), &BigInt::from(-1));
    assert_eq!(f.denominator(), &BigInt::from(2));

    let f = frac(0, 5);
    assert_eq!(f.numerator(), &BigInt::from(0));
    assert_eq!(f.denominator(), &BigInt::from(1));

    let f = frac(-6, -9);
    assert_eq!(f.numerator(), &BigInt::from(2));
    assert_eq!(f.denominator(), &BigInt::from(3));

    assert_eq!(frac(3, 6), frac(-1, -2));
}

#[test]
fn test_zero_denominator() {
    assert_eq!(
        Fraction::new(BigInt::from(1), BigInt::from(0)),
        Err(ShamirError::ZeroDenominator)
    );
    assert_eq!(
        Fraction::new(BigInt::from(0), BigInt::from(0)),
        Err(ShamirError::ZeroDenominator)
    );
}

#[test]
fn test_add() {
    assert_eq!(&frac(1, 2) + &frac(1, 3), frac(5, 6));
    assert_eq!(frac(1, 2) + frac(-1, 2), Fraction::zero());
    assert_eq!(&frac(3, 4) + &frac(1, 4), Fraction::from(1i64));
    assert!((frac(3, 4) + frac(1, 4)).is_integer());
}

#[test]
fn test_mul() {
    assert_eq!(&frac(2, 3) * &frac(3, 4), frac(1, 2));
    assert_eq!(frac(-2, 5) * frac(5, -2), Fraction::from(1i64));
    assert_eq!(frac(7, 9) * Fraction::zero(), Fraction::zero());
}

#[test]
fn test_to_exact_integer() {
    assert_eq!(
        frac(1, 3).to_exact_integer(),
        Err(ShamirError::NonIntegerResult)
    );
    assert_eq!(frac(6, 3).to_exact_integer().unwrap(), BigInt::from(2));
    assert_eq!(frac(-12, 4).to_exact_integer().unwrap(), BigInt::from(-3));
    assert_eq!(Fraction::zero().to_exact_integer().unwrap(), BigInt::from(0));
}

#[test]
fn test_display() {
    assert_eq!(frac(10, -4).to_string(), "-5/2");
    assert_eq!(Fraction::from(42i64).to_string(), "42");
}
