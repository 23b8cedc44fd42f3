// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::{error::IngestError, report::SecretReport};
use log::{debug, info, warn};
use num_bigint::BigInt;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use shamir_core::{base_n, ensure, Point, PointSet};
use std::{collections::BTreeMap, fmt, fs};

#[cfg(test)]
#[path = "unit_tests/config_tests.rs"]
mod config_tests;

pub trait Import: DeserializeOwned {
    fn import(path: &str) -> Result<Self, IngestError> {
        let data = fs::read(path).map_err(|source| IngestError::Io {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_slice(data.as_slice()).map_err(|source| IngestError::Json {
            path: path.to_string(),
            source,
        })
    }
}

/// The `keys` header: declared number of shares `n` and threshold `k`.
#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub struct ShareKeys {
    #[serde(default)]
    pub n: Option<usize>,
    #[serde(default)]
    pub k: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Base {
    Number(u32),
    Text(String),
    Other(serde_json::Value),
}

/// One share: `value` is written in `base`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShareRecord {
    pub base: Base,
    pub value: String,
}

/// A share file: the `keys` header plus one record per x-coordinate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShareFile {
    #[serde(default)]
    pub keys: ShareKeys,
    #[serde(flatten)]
    pub records: BTreeMap<String, ShareRecord>,
}

impl Import for ShareFile {}

impl Base {
    fn resolve(&self, key: &str) -> Result<u32, IngestError> {
        let invalid = || IngestError::InvalidBase {
            key: key.to_string(),
            base: self.to_string(),
        };
        match self {
            Base::Number(base) => Ok(*base),
            Base::Text(text) if is_decimal(text.trim()) => {
                text.trim().parse().map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base::Number(base) => write!(f, "{}", base),
            Base::Text(text) => write!(f, "{}", text),
            Base::Other(value) => write!(f, "{}", value),
        }
    }
}

impl ShareRecord {
    /// Decodes `value` in `base`; `key` only labels errors.
    pub fn decode_value(&self, key: &str) -> Result<BigInt, IngestError> {
        let base = self.base.resolve(key)?;
        let y = base_n::decode(&self.value, base).map_err(|source| IngestError::InvalidValue {
            key: key.to_string(),
            source,
        })?;
        debug!("Decoded share {} = {} (base {})", key, y, base);
        Ok(y)
    }
}

impl ShareFile {
    /// Parses every x-coordinate and returns the records sorted by ascending `x`.
    pub fn sorted_records(&self) -> Result<Vec<(BigInt, &str, &ShareRecord)>, IngestError> {
        let mut records = self
            .records
            .iter()
            .map(|(key, record)| parse_coordinate(key).map(|x| (x, key.as_str(), record)))
            .collect::<Result<Vec<_>, IngestError>>()?;
        records.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(records)
    }

    /// Decodes and checks the shares against the threshold, preferring `threshold_override`
    /// to `keys.k`. Values of the first `threshold` shares by ascending `x` must decode; a
    /// surplus share that fails to decode is skipped. A declared count `keys.n` that disagrees
    /// with the records is only reported.
    pub fn to_point_set(&self, threshold_override: Option<usize>) -> Result<PointSet, IngestError> {
        let threshold = threshold_override
            .or(self.keys.k)
            .ok_or(IngestError::MissingThreshold)?;
        let records = self.sorted_records()?;
        if let Some(declared) = self.keys.n {
            if declared != records.len() {
                warn!(
                    "Share file declares {} shares but contains {}",
                    declared,
                    records.len()
                );
            }
        }
        let mut points = Vec::with_capacity(records.len());
        for (index, (x, key, record)) in records.into_iter().enumerate() {
            match record.decode_value(key) {
                Ok(y) => points.push(Point { x, y }),
                Err(error) if index >= threshold => {
                    warn!("Ignoring surplus share {:?}: {}", key, error)
                }
                Err(error) => return Err(error),
            }
        }
        let point_set = PointSet::new(points, threshold)?;
        if point_set.surplus() > 0 {
            info!(
                "Using the first {} of {} shares, ignoring {}",
                threshold,
                point_set.available(),
                point_set.surplus()
            );
        }
        Ok(point_set)
    }

    pub fn recover_secret(
        &self,
        source: &str,
        threshold_override: Option<usize>,
    ) -> Result<SecretReport, IngestError> {
        let point_set = self.to_point_set(threshold_override)?;
        let secret = point_set.reconstruct_secret()?;
        Ok(SecretReport::new(source, self.keys.n, &point_set, secret))
    }
}

fn is_decimal(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_coordinate(key: &str) -> Result<BigInt, IngestError> {
    let digits = key.trim();
    let invalid = || IngestError::InvalidCoordinate {
        key: key.to_string(),
    };
    ensure!(is_decimal(digits), invalid());
    digits.parse().map_err(|_| invalid())
}
