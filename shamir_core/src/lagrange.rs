// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    base_types::Point,
    error::{ShamirError, ShamirResult},
    fraction::Fraction,
};
use log::{debug, trace};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

#[cfg(test)]
#[path = "unit_tests/lagrange_tests.rs"]
mod lagrange_tests;

/// Computes $f(0)$ from the first `threshold` points, which must have pairwise distinct `x`.
/// Surplus points are ignored. Fails with `ZeroDenominator` on duplicate `x` and with
/// `NonIntegerResult` when the points do not interpolate to an integer constant term.
pub fn reconstruct_at_zero(points: &[Point], threshold: usize) -> ShamirResult<BigInt> {
    ensure!(threshold >= 1, ShamirError::InvalidThreshold);
    ensure!(
        points.len() >= threshold,
        ShamirError::InsufficientPoints {
            threshold,
            available: points.len(),
        }
    );
    let selected = &points[..threshold];
    debug!(
        "Interpolating at zero with {} of {} points",
        threshold,
        points.len()
    );

    let xs: Vec<BigInt> = selected.iter().map(|point| point.x.clone()).collect();
    let coefficients = lagrange_coefficients_at_zero(&xs)?;
    let mut sum = Fraction::zero();
    for (point, coefficient) in selected.iter().zip(coefficients.iter()) {
        trace!("Weight of {}: {}", point, coefficient);
        let term = &Fraction::from_integer(point.y.clone()) * coefficient;
        sum = &sum + &term;
    }
    sum.to_exact_integer()
}

/// Returns the Lagrange coefficients $\ell_i(0) = \prod_{j \ne i} \frac{0 - x_j}{x_i - x_j}$.
pub fn lagrange_coefficients_at_zero(xs: &[BigInt]) -> ShamirResult<Vec<Fraction>> {
    let xs: Vec<&BigInt> = xs.iter().collect();
    (0..xs.len())
        .map(|i| {
            let (numerator, denominator) = basis_weight_at_zero(&xs, i);
            Fraction::new(numerator, denominator)
        })
        .collect()
}

/// Unnormalized `(numerator, denominator)` of $\ell_i(0)$, reduced after every factor.
/// The denominator is zero iff some other `x` equals `xs[i]`.
fn basis_weight_at_zero(xs: &[&BigInt], i: usize) -> (BigInt, BigInt) {
    let x_i = xs[i];
    xs.iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .fold(
            (BigInt::one(), BigInt::one()),
            |(numerator, denominator), (_, x_j)| {
                let numerator = numerator * -*x_j;
                let denominator = denominator * (x_i - *x_j);
                reduce(numerator, denominator)
            },
        )
}

fn reduce(numerator: BigInt, denominator: BigInt) -> (BigInt, BigInt) {
    let divisor = numerator.gcd(&denominator);
    if divisor > BigInt::one() {
        (numerator / &divisor, denominator / &divisor)
    } else {
        (numerator, denominator)
    }
}
