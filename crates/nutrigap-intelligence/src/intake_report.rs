// ABOUTME: Daily intake report grading each applicable nutrient against its target
// ABOUTME: Bands intake as deficient (<90%), adequate (90-110%), or excess (>110%)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::standards::select_applicable_standards;
use nutrigap_core::constants::intake_bands::{DEFICIENT_BELOW_PCT, EXCESS_ABOVE_PCT};
use nutrigap_core::errors::{AppError, AppResult};
use nutrigap_core::models::{ConsumedAmounts, NutrientStandard, PatientProfile};
use nutrigap_core::nutrients::{normalize_display_name, NutrientKey};
use serde::{Deserialize, Serialize};

/// Intake status relative to the daily target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStatus {
    /// Below the deficient band
    Deficient,
    /// Within the adequate band (inclusive)
    Adequate,
    /// Above the adequate band
    Excess,
}

impl IntakeStatus {
    /// Classify a fulfilment percentage
    #[must_use]
    pub fn from_percent(percent_fulfilled: f64) -> Self {
        if percent_fulfilled < DEFICIENT_BELOW_PCT {
            Self::Deficient
        } else if percent_fulfilled <= EXCESS_ABOVE_PCT {
            Self::Adequate
        } else {
            Self::Excess
        }
    }
}

/// One nutrient line of the report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntakeReportRow {
    /// Normalized display name
    pub nutrient_name: String,
    /// Food-table key, when the nutrient is tracked
    pub nutrient_key: Option<NutrientKey>,
    /// Amount consumed in the window
    pub consumed: f64,
    /// Daily target
    pub target: f64,
    /// Unit of the target
    pub unit: String,
    /// `consumed / target * 100`
    pub percent_fulfilled: f64,
    /// Band for `percent_fulfilled`
    pub status: IntakeStatus,
    /// `consumed - target`; negative when short
    pub difference: f64,
}

/// Day's intake graded against every applicable standard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntakeReport {
    /// Profile the standards were selected for
    pub profile: PatientProfile,
    /// Rows sorted by `percent_fulfilled` ascending
    pub rows: Vec<IntakeReportRow>,
}

impl IntakeReport {
    /// Count rows with the given status
    #[must_use]
    pub fn count(&self, status: IntakeStatus) -> usize {
        self.rows.iter().filter(|row| row.status == status).count()
    }
}

/// Build the daily intake report.
///
/// Standards with a non-positive target are omitted. Nutrients with no logged
/// consumption appear at 0%.
///
/// # Errors
///
/// Returns a data-integrity fault for malformed or conflicting standards and
/// for negative or non-finite consumed totals.
pub fn build_intake_report(
    profile: &PatientProfile,
    consumed: &ConsumedAmounts,
    standards: &[NutrientStandard],
) -> AppResult<IntakeReport> {
    let mut rows = Vec::new();

    for standard in select_applicable_standards(profile, standards)? {
        let target = standard.daily_value;
        if target <= 0.0 {
            continue;
        }

        let eaten = consumed.get(&standard.nutrient_name);
        if !eaten.is_finite() || eaten < 0.0 {
            return Err(AppError::data_integrity(format!(
                "consumed total for '{}' is invalid: {eaten}",
                standard.nutrient_name
            ))
            .with_resource_id(standard.nutrient_name.clone()));
        }

        let percent_fulfilled = eaten * 100.0 / target;
        rows.push(IntakeReportRow {
            nutrient_name: normalize_display_name(&standard.nutrient_name),
            nutrient_key: NutrientKey::from_display_name(&standard.nutrient_name),
            consumed: eaten,
            target,
            unit: standard.unit.clone(),
            percent_fulfilled,
            status: IntakeStatus::from_percent(percent_fulfilled),
            difference: eaten - target,
        });
    }

    rows.sort_by(|a, b| {
        a.percent_fulfilled
            .total_cmp(&b.percent_fulfilled)
            .then_with(|| a.nutrient_name.cmp(&b.nutrient_name))
    });

    Ok(IntakeReport {
        profile: *profile,
        rows,
    })
}
