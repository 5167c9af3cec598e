// ABOUTME: Main library entry point for the NutriGap deficiency engine
// ABOUTME: Wires configuration, logging, data sources, and the engine service together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriGap
//!
//! Detects a patient's micronutrient shortfalls for a day and recommends a
//! short list of foods that close them with as few calories as possible.
//!
//! ## Architecture
//!
//! - **nutrigap-core**: error type, nutrient vocabulary, domain models
//! - **nutrigap-intelligence**: deficiency calculator, greedy recommender,
//!   intake report
//! - **`data_sources`**: read-only ports onto patient, ledger, standards and
//!   food data (in-memory/JSON and `SQLite`)
//! - **services**: the [`NutritionEngine`](services::NutritionEngine) that
//!   runs the algorithms against a data source
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrigap::config::environment::EngineConfig;
//! use nutrigap::data_sources::factory::DataSource;
//! use nutrigap::errors::AppResult;
//! use nutrigap::models::PatientId;
//! use nutrigap::services::NutritionEngine;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = EngineConfig::from_env()?;
//!     let source = DataSource::connect(&config.data_source).await?;
//!     let engine = NutritionEngine::new(source, config.recommender);
//!
//!     for rec in engine.recommend_for_patient(PatientId(1), None, None).await? {
//!         println!("{} ({}): {}", rec.food_name, rec.serving, rec.reason);
//!     }
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants re-exported from `nutrigap-core`
pub mod constants;

/// Read-only data-source ports and adapters
pub mod data_sources;

/// Unified error handling re-exported from `nutrigap-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Domain models re-exported from `nutrigap-core`
pub mod models;

/// Engine services combining data sources with the intelligence algorithms
pub mod services;

/// Deficiency and recommendation algorithms
pub use nutrigap_intelligence as intelligence;
/// Closed nutrient vocabulary
pub use nutrigap_core::nutrients;
