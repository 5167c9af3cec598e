// ABOUTME: Core data models for patients, nutrient standards, foods, and consumption
// ABOUTME: Re-exports each model family for flat `models::X` imports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models consumed and produced by the deficiency engine

/// Consumption ledger entries and per-day aggregates
pub mod consumption;
/// Food candidates and produced recommendations
pub mod food;
/// Patient identity, demographics, and physiological condition
pub mod patient;
/// Reference intake standards
pub mod standard;

pub use consumption::{ConsumedAmounts, ConsumptionEntry};
pub use food::{FoodCandidate, Recommendation};
pub use patient::{
    age_in_months, Gender, PatientId, PatientProfile, PatientRecord, PhysiologicalCondition,
};
pub use standard::{NutrientStandard, StandardGender};
