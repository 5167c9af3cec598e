// ABOUTME: Computes per-nutrient shortfalls between today's intake and applicable targets
// ABOUTME: Produces a gap map keyed by food-table nutrient keys with strictly positive values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Deficiency Calculator
//!
//! For each applicable standard with a positive target, the shortfall is
//! `target - consumed` when the patient consumed less than the target. The
//! standard's display name is translated to its food-table key through
//! [`NutrientKey::from_display_name`]; display names outside the tracked
//! vocabulary are dropped from the gap map, logged, and reported back in
//! [`DeficiencyAssessment::unmapped_nutrients`].

use crate::standards::select_applicable_standards;
use nutrigap_core::errors::{AppError, AppResult};
use nutrigap_core::models::{ConsumedAmounts, NutrientStandard, PatientProfile};
use nutrigap_core::nutrients::{normalize_display_name, NutrientKey};
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

/// Remaining shortfall per nutrient.
///
/// Every stored value is strictly positive; satisfied nutrients are absent.
/// Iteration follows insertion order, which for calculated maps is the order
/// the applicable standards were read in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeficiencyMap {
    gaps: Vec<(NutrientKey, f64)>,
}

impl DeficiencyMap {
    /// Empty gap map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: NutrientKey) -> Option<usize> {
        self.gaps.iter().position(|(existing, _)| *existing == key)
    }

    /// Record a shortfall. Non-positive or non-finite amounts are not stored.
    ///
    /// Re-inserting a key updates it in place. Returns `true` if the entry
    /// was stored.
    pub fn insert(&mut self, key: NutrientKey, missing: f64) -> bool {
        let stored = missing.is_finite() && missing > 0.0;
        match (self.position(key), stored) {
            (Some(index), true) => self.gaps[index].1 = missing,
            (None, true) => self.gaps.push((key, missing)),
            (Some(index), false) => {
                self.gaps.remove(index);
            }
            (None, false) => {}
        }
        stored
    }

    /// Subtract a supplied amount from one gap, removing it once it reaches zero.
    ///
    /// Returns the remaining shortfall, or `None` if the gap is now closed or
    /// was never open.
    pub fn reduce(&mut self, key: NutrientKey, supplied: f64) -> Option<f64> {
        let index = self.position(key)?;
        let remaining = self.gaps[index].1 - supplied;
        if remaining <= 0.0 {
            self.gaps.remove(index);
            None
        } else {
            self.gaps[index].1 = remaining;
            Some(remaining)
        }
    }

    /// Shortfall for `key`, if any
    #[must_use]
    pub fn get(&self, key: NutrientKey) -> Option<f64> {
        self.position(key).map(|index| self.gaps[index].1)
    }

    /// True when `key` still has a shortfall
    #[must_use]
    pub fn contains(&self, key: NutrientKey) -> bool {
        self.position(key).is_some()
    }

    /// Iterate `(key, missing)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (NutrientKey, f64)> + '_ {
        self.gaps.iter().copied()
    }

    /// Keys with an open shortfall, in insertion order
    pub fn keys(&self) -> impl Iterator<Item = NutrientKey> + '_ {
        self.gaps.iter().map(|(key, _)| *key)
    }

    /// Number of open gaps
    #[must_use]
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    /// True when no nutrient is short
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }
}

impl FromIterator<(NutrientKey, f64)> for DeficiencyMap {
    fn from_iter<I: IntoIterator<Item = (NutrientKey, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, missing) in iter {
            map.insert(key, missing);
        }
        map
    }
}

// Serialized as a JSON object in insertion order
impl Serialize for DeficiencyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.gaps.iter().map(|(key, missing)| (key, missing)))
    }
}

/// Gap map plus the applicable nutrients that could not be tracked
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeficiencyAssessment {
    /// Open shortfalls keyed by food-table key
    pub gaps: DeficiencyMap,
    /// Normalized display names of applicable standards with no food-table key
    pub unmapped_nutrients: Vec<String>,
}

/// Compute the gap map for one patient and one day of consumption.
///
/// # Errors
///
/// Returns a data-integrity fault for malformed or conflicting standards and
/// for negative or non-finite consumed totals.
pub fn calculate_deficiencies(
    profile: &PatientProfile,
    consumed: &ConsumedAmounts,
    standards: &[NutrientStandard],
) -> AppResult<DeficiencyMap> {
    assess_deficiencies(profile, consumed, standards).map(|assessment| assessment.gaps)
}

/// Compute the gap map and report nutrients dropped for lack of a food-table key.
///
/// # Errors
///
/// Same conditions as [`calculate_deficiencies`].
pub fn assess_deficiencies(
    profile: &PatientProfile,
    consumed: &ConsumedAmounts,
    standards: &[NutrientStandard],
) -> AppResult<DeficiencyAssessment> {
    for (name, total) in consumed.iter() {
        if !total.is_finite() || total < 0.0 {
            return Err(AppError::data_integrity(format!(
                "consumed total for '{name}' is invalid: {total}"
            ))
            .with_resource_id(name));
        }
    }

    let mut assessment = DeficiencyAssessment::default();

    for standard in select_applicable_standards(profile, standards)? {
        let target = standard.daily_value;
        if target <= 0.0 {
            continue;
        }

        let Some(key) = NutrientKey::from_display_name(&standard.nutrient_name) else {
            let name = normalize_display_name(&standard.nutrient_name);
            warn!(
                nutrient = %name,
                "applicable standard has no food-table key; nutrient excluded from recommendations"
            );
            assessment.unmapped_nutrients.push(name);
            continue;
        };

        let eaten = consumed.get(&standard.nutrient_name);
        if eaten < target {
            assessment.gaps.insert(key, target - eaten);
        }
    }

    debug!(
        gaps = assessment.gaps.len(),
        unmapped = assessment.unmapped_nutrients.len(),
        age_months = profile.age_months,
        condition = profile.condition.as_str(),
        "deficiency assessment complete"
    );

    Ok(assessment)
}
