// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

use shamir_core::ShamirError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("No threshold: set keys.k in the share file or pass --threshold")]
    MissingThreshold,

    #[error("Share key {key:?} is not a non-negative decimal x-coordinate")]
    InvalidCoordinate { key: String },

    #[error("Share {key:?} has an invalid base {base:?}")]
    InvalidBase { key: String, base: String },

    #[error("Share {key:?} has an invalid value: {source}")]
    InvalidValue { key: String, source: ShamirError },

    #[error("{0}")]
    Shamir(#[from] ShamirError),
}
