// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::{
    error::{ShamirError, ShamirResult},
    lagrange,
};
use num_bigint::BigInt;
use std::fmt;

#[cfg(test)]
#[path = "unit_tests/base_types_tests.rs"]
mod base_types_tests;

/// A sample `(x, f(x))` of the secret polynomial.
#[derive(Eq, PartialEq, Clone, Hash, Debug)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

/// Points sorted by ascending `x`, together with the threshold `k`.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct PointSet {
    points: Vec<Point>,
    threshold: usize,
}

impl Point {
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<BigInt>,
        Y: Into<BigInt>,
    {
        Point {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
pub fn dbg_points(coefficients: &[i64], xs: &[i64]) -> Vec<Point> {
    use num_traits::Zero;

    xs.iter()
        .map(|x| {
            let x = BigInt::from(*x);
            let y = coefficients
                .iter()
                .rev()
                .fold(BigInt::zero(), |acc, c| acc * &x + *c);
            Point { x, y }
        })
        .collect()
}

impl PointSet {
    pub fn new(mut points: Vec<Point>, threshold: usize) -> ShamirResult<Self> {
        ensure!(threshold >= 1, ShamirError::InvalidThreshold);
        ensure!(
            points.len() >= threshold,
            ShamirError::InsufficientPoints {
                threshold,
                available: points.len(),
            }
        );
        points.sort_by(|a, b| a.x.cmp(&b.x));
        Ok(PointSet { points, threshold })
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points available, selected or not.
    pub fn available(&self) -> usize {
        self.points.len()
    }

    /// The points used for reconstruction: the first `threshold` by ascending `x`.
    pub fn selected(&self) -> &[Point] {
        &self.points[..self.threshold]
    }

    /// Number of points ignored by the reconstruction.
    pub fn surplus(&self) -> usize {
        self.points.len() - self.threshold
    }

    pub fn reconstruct_secret(&self) -> ShamirResult<BigInt> {
        lagrange::reconstruct_at_zero(&self.points, self.threshold)
    }
}
