// ABOUTME: Core types and constants for the NutriGap nutrient deficiency engine
// ABOUTME: Foundation crate with error handling, nutrient vocabulary, models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriGap Core
//!
//! Foundation crate providing shared types and constants for the NutriGap
//! deficiency engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Named tuning constants organized by domain
//! - **nutrients**: The closed vocabulary of tracked micronutrients
//! - **models**: Patient, standard, food, and consumption data models

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Closed nutrient vocabulary bridging display names and food-table keys
pub mod nutrients;

/// Core data models (patients, standards, foods, recommendations)
pub mod models;
