// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

pub mod config;
pub mod error;
pub mod report;
