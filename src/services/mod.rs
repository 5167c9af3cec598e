// ABOUTME: Domain service layer combining data sources with the intelligence algorithms
// ABOUTME: Provides entry-point-agnostic operations reused by the CLI and library callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services load what an operation needs from a
//! [`NutritionDataSource`](crate::data_sources::NutritionDataSource) and hand
//! it to the pure algorithms in `nutrigap-intelligence`.

/// Deficiency, recommendation, and daily report operations for one patient
pub mod nutrition_engine;

pub use nutrition_engine::NutritionEngine;
