// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use shamir_core::PointSet;
use std::str::FromStr;

#[cfg(test)]
#[path = "unit_tests/report_tests.rs"]
mod report_tests;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {:?} (expected text or json)", other)),
        }
    }
}

/// Outcome of one reconstruction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SecretReport {
    pub source: String,
    pub threshold: usize,
    pub declared: Option<usize>,
    pub available: usize,
    pub used: usize,
    #[serde(serialize_with = "bigint_as_decimal")]
    pub secret: BigInt,
}

impl SecretReport {
    pub fn new(source: &str, declared: Option<usize>, point_set: &PointSet, secret: BigInt) -> Self {
        SecretReport {
            source: source.to_string(),
            threshold: point_set.threshold(),
            declared,
            available: point_set.available(),
            used: point_set.selected().len(),
            secret,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(format!(
                "{}: secret = {} (k = {}, used {} of {} points)",
                self.source, self.secret, self.threshold, self.used, self.available
            )),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}

fn bigint_as_decimal<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}
