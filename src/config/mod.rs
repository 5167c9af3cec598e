// ABOUTME: Configuration management module for engine settings and parameters
// ABOUTME: Loads the data-source location, log level, and recommender tunables from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for NutriGap
//!
//! Configuration is environment-only. See [`environment::EngineConfig`] for
//! the variables read.

/// Environment and engine configuration
pub mod environment;

pub use environment::{DataSourceUrl, EngineConfig, Environment, LogLevel};
pub use nutrigap_intelligence::config::{ReasonOrdering, RecommenderConfig};
