// ABOUTME: Reference daily intake standards keyed by gender, age range, and condition
// ABOUTME: Provides matching predicates and structural validation for standard rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::patient::{Gender, PatientProfile, PhysiologicalCondition};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Gender a standard row applies to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StandardGender {
    /// Male patients only
    Male,
    /// Female patients only
    Female,
    /// Any patient
    Both,
}

impl StandardGender {
    /// Parse a stored value, case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    /// Whether a patient of `gender` falls under this row
    #[must_use]
    pub const fn matches(self, gender: Gender) -> bool {
        matches!(
            (self, gender),
            (Self::Both, _) | (Self::Male, Gender::Male) | (Self::Female, Gender::Female)
        )
    }

    /// True for gender-specific rows, which take precedence over `Both`
    #[must_use]
    pub const fn is_specific(self) -> bool {
        !matches!(self, Self::Both)
    }
}

/// One row of the reference standards table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutrientStandard {
    /// Display name of the nutrient (`vitamin_b12`)
    pub nutrient_name: String,
    /// Gender the row applies to
    pub gender: StandardGender,
    /// Inclusive lower age bound in months
    pub min_age_months: u32,
    /// Inclusive upper age bound in months
    pub max_age_months: u32,
    /// Condition the row applies to
    pub condition: PhysiologicalCondition,
    /// Daily target amount
    pub daily_value: f64,
    /// Unit of the daily target
    pub unit: String,
}

impl NutrientStandard {
    /// Whether this row applies to the given patient profile
    #[must_use]
    pub fn applies_to(&self, profile: &PatientProfile) -> bool {
        self.gender.matches(profile.gender)
            && (self.min_age_months..=self.max_age_months).contains(&profile.age_months)
            && self.condition == profile.condition
    }

    /// Check the row's structural invariants
    ///
    /// # Errors
    ///
    /// Returns a data-integrity fault for an empty name, an inverted age range,
    /// or a negative or non-finite daily value.
    pub fn validate(&self) -> AppResult<()> {
        if self.nutrient_name.trim().is_empty() {
            return Err(AppError::data_integrity("nutrient standard has an empty name"));
        }
        if self.min_age_months > self.max_age_months {
            return Err(AppError::data_integrity(format!(
                "standard '{}' has min_age_months {} above max_age_months {}",
                self.nutrient_name, self.min_age_months, self.max_age_months
            ))
            .with_resource_id(self.nutrient_name.clone()));
        }
        if !self.daily_value.is_finite() || self.daily_value < 0.0 {
            return Err(AppError::data_integrity(format!(
                "standard '{}' has invalid daily value {}",
                self.nutrient_name, self.daily_value
            ))
            .with_resource_id(self.nutrient_name.clone()));
        }
        Ok(())
    }
}
