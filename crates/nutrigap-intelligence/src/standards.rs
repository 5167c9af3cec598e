// ABOUTME: Selects the reference standards that apply to one patient profile
// ABOUTME: Enforces one target per nutrient, preferring gender-specific rows over "both"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrigap_core::errors::{AppError, AppResult};
use nutrigap_core::models::{NutrientStandard, PatientProfile};
use nutrigap_core::nutrients::normalize_display_name;
use tracing::debug;

/// Select exactly one applicable standard per nutrient.
///
/// A row applies when its gender matches the patient (or is `Both`), the
/// patient's age lies within the inclusive month range, and the condition
/// matches exactly. When a gender-specific row and a `Both` row match the same
/// nutrient, the gender-specific row wins. Results keep the order in which
/// each nutrient first appears in `standards`.
///
/// # Errors
///
/// Returns a data-integrity fault if any row is malformed, or if two rows of
/// equal specificity match the same nutrient.
pub fn select_applicable_standards<'a>(
    profile: &PatientProfile,
    standards: &'a [NutrientStandard],
) -> AppResult<Vec<&'a NutrientStandard>> {
    let mut selected: Vec<(String, &'a NutrientStandard)> = Vec::new();

    for standard in standards {
        standard.validate()?;
        if !standard.applies_to(profile) {
            continue;
        }

        let name = normalize_display_name(&standard.nutrient_name);
        match selected.iter_mut().find(|(existing, _)| *existing == name) {
            None => selected.push((name, standard)),
            Some((_, current)) => {
                let incoming_specific = standard.gender.is_specific();
                if incoming_specific == current.gender.is_specific() {
                    return Err(AppError::data_integrity(format!(
                        "standards table has two {} rows for '{}' matching {:?}, age {} months, {}",
                        if incoming_specific { "gender-specific" } else { "'both'" },
                        name,
                        profile.gender,
                        profile.age_months,
                        profile.condition.as_str(),
                    ))
                    .with_resource_id(name));
                }
                if incoming_specific {
                    debug!(nutrient = %name, "gender-specific standard overrides 'both' row");
                    *current = standard;
                }
            }
        }
    }

    Ok(selected.into_iter().map(|(_, standard)| standard).collect())
}
