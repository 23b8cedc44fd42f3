// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[macro_export]
macro_rules! bail {
    ($e:expr) => {
        return Err($e);
    };
}

#[macro_export(local_inner_macros)]
macro_rules! ensure {
    ($cond:expr, $e:expr) => {
        if !($cond) {
            bail!($e);
        }
    };
}

pub type ShamirResult<T> = Result<T, ShamirError>;

#[derive(Eq, PartialEq, Clone, Debug, Error)]
pub enum ShamirError {
    // Decoding
    #[error("Invalid digit {digit:?}")]
    InvalidDigit { digit: char },
    #[error("Digit {digit:?} is out of range for base {base}")]
    DigitOutOfRange { digit: char, base: u32 },
    #[error("Unsupported base {base} (expected 2 to 36)")]
    UnsupportedBase { base: u32 },

    // Exact arithmetic
    #[error("Fraction denominator is zero (duplicate x-coordinates?)")]
    ZeroDenominator,
    #[error("Interpolated value is not an integer")]
    NonIntegerResult,

    // Point selection
    #[error("Threshold {threshold} needs at least {threshold} points, got {available}")]
    InsufficientPoints { threshold: usize, available: usize },
    #[error("Threshold must be at least 1")]
    InvalidThreshold,
}
