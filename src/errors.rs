// ABOUTME: Unified error handling re-exported from nutrigap-core
// ABOUTME: Adds conversions for driver and IO errors raised by the data-source adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error type lives in `nutrigap-core` so the algorithm crates can use it
//! without pulling in storage drivers. This module re-exports it and adds the
//! helpers adapters use to classify driver failures.

pub use nutrigap_core::errors::*;

use std::io;

/// Name reported for `SQLite` failures
pub const SQLITE_DEPENDENCY: &str = "sqlite";

/// Name reported for JSON dataset failures
pub const DATASET_DEPENDENCY: &str = "json dataset";

/// Classify a `sqlx` error raised while reading reference or patient data.
///
/// Column decoding problems mean the stored data is malformed and surface as
/// data-integrity faults; everything else is an unavailable dependency.
#[must_use]
pub fn from_sqlx(operation: &str, error: sqlx::Error) -> AppError {
    match error {
        sqlx::Error::ColumnNotFound(ref column) => AppError::data_integrity(format!(
            "{operation}: column '{column}' is missing"
        ))
        .with_resource_id(column.clone())
        .with_source(error),
        sqlx::Error::ColumnDecode { ref index, .. } => AppError::data_integrity(format!(
            "{operation}: column {index} could not be decoded"
        ))
        .with_resource_id(index.clone())
        .with_source(error),
        other => AppError::dependency_unavailable(SQLITE_DEPENDENCY, format!("{operation}: {other}"))
            .with_source(other),
    }
}

/// Classify an IO error raised while loading a JSON dataset
#[must_use]
pub fn from_io(path: &str, error: io::Error) -> AppError {
    AppError::dependency_unavailable(DATASET_DEPENDENCY, format!("failed to read {path}: {error}"))
        .with_resource_id(path)
        .with_source(error)
}
