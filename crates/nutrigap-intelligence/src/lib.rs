// ABOUTME: Nutrient deficiency analysis and greedy recommendation engine
// ABOUTME: Pure functions over profiles, ledgers, standards, and food pools; performs no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriGap Intelligence
//!
//! The algorithmic core of NutriGap. Every entry point takes its inputs by
//! reference and returns fresh values, so concurrent calls for any number of
//! patients need no coordination.
//!
//! - [`deficiency`] turns a profile, a day's consumption, and the standards
//!   table into a [`DeficiencyMap`]
//! - [`recommender`] greedily picks foods that close those gaps per calorie
//! - [`intake_report`] grades each applicable standard as deficient,
//!   adequate, or in excess

/// Recommender tuning knobs
pub mod config;
/// Deficiency calculation and the gap map
pub mod deficiency;
/// Daily intake report with status bands
pub mod intake_report;
/// Greedy food recommendation
pub mod recommender;
/// Applicable-standard selection with gender precedence
pub mod standards;

pub use config::{ReasonOrdering, RecommenderConfig};
pub use deficiency::{
    assess_deficiencies, calculate_deficiencies, DeficiencyAssessment, DeficiencyMap,
};
pub use intake_report::{build_intake_report, IntakeReport, IntakeReportRow, IntakeStatus};
pub use recommender::{GreedyRecommender, RecommendationOutcome, TerminationReason};
pub use standards::select_applicable_standards;
