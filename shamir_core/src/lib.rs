// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

#[macro_use]
pub mod error;

pub mod base_n;
pub mod base_types;
pub mod fraction;
pub mod lagrange;

pub use base_types::{Point, PointSet};
pub use error::{ShamirError, ShamirResult};
pub use fraction::Fraction;
