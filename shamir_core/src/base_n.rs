// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{ShamirError, ShamirResult};
use num_bigint::BigInt;
use num_traits::Zero;

#[cfg(test)]
#[path = "unit_tests/base_n_tests.rs"]
mod base_n_tests;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

/// Decodes an unsigned digit string written in `base` (2 to 36), most significant digit first.
/// Surrounding whitespace is trimmed, letters are case-insensitive and inner spaces are skipped.
pub fn decode(digits: &str, base: u32) -> ShamirResult<BigInt> {
    ensure!(
        (MIN_BASE..=MAX_BASE).contains(&base),
        ShamirError::UnsupportedBase { base }
    );
    let radix = BigInt::from(base);
    let mut result = BigInt::zero();
    for digit in digits.trim().chars().map(|c| c.to_ascii_lowercase()) {
        if digit == ' ' {
            continue;
        }
        let value = digit_value(digit)?;
        ensure!(value < base, ShamirError::DigitOutOfRange { digit, base });
        result = result * &radix + value;
    }
    Ok(result)
}

fn digit_value(digit: char) -> ShamirResult<u32> {
    match digit {
        '0'..='9' => Ok(digit as u32 - '0' as u32),
        'a'..='z' => Ok(digit as u32 - 'a' as u32 + 10),
        _ => Err(ShamirError::InvalidDigit { digit }),
    }
}
