// ABOUTME: Closed vocabulary of tracked micronutrients and their two naming namespaces
// ABOUTME: Maps standards/ledger display names to food-table keys and back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrient Vocabulary
//!
//! Reference standards and the consumption ledger name nutrients with display
//! names such as `vitamin_b12`. Food candidates carry content under food-table
//! keys such as `vitamin_b12_mcg`. [`NutrientKey`] enumerates every nutrient
//! the engine tracks and is the only bridge between the two namespaces: a
//! display name without an entry here never reaches the recommender.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical food-table nutrient key
///
/// Variant order is the iteration order of every gap map in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NutrientKey {
    /// Vitamin A (mcg)
    #[serde(rename = "vitamin_a_mcg")]
    VitaminAMcg,
    /// Vitamin C (mg)
    #[serde(rename = "vitamin_c_mg")]
    VitaminCMg,
    /// Vitamin D (mcg)
    #[serde(rename = "vitamin_d_mcg")]
    VitaminDMcg,
    /// Vitamin E (mg)
    #[serde(rename = "vitamin_e_mg")]
    VitaminEMg,
    /// Vitamin K (mcg)
    #[serde(rename = "vitamin_k_mcg")]
    VitaminKMcg,
    /// Thiamin, vitamin B1 (mg)
    #[serde(rename = "vitamin_b1_mg")]
    VitaminB1Mg,
    /// Riboflavin, vitamin B2 (mg)
    #[serde(rename = "vitamin_b2_mg")]
    VitaminB2Mg,
    /// Niacin, vitamin B3 (mg)
    #[serde(rename = "vitamin_b3_mg")]
    VitaminB3Mg,
    /// Vitamin B6 (mg)
    #[serde(rename = "vitamin_b6_mg")]
    VitaminB6Mg,
    /// Vitamin B12 (mcg)
    #[serde(rename = "vitamin_b12_mcg")]
    VitaminB12Mcg,
    /// Folate (mcg)
    #[serde(rename = "folate_mcg")]
    FolateMcg,
    /// Calcium (mg)
    #[serde(rename = "calcium_mg")]
    CalciumMg,
    /// Iron (mg)
    #[serde(rename = "iron_mg")]
    IronMg,
    /// Magnesium (mg)
    #[serde(rename = "magnesium_mg")]
    MagnesiumMg,
    /// Phosphorus (mg)
    #[serde(rename = "phosphorus_mg")]
    PhosphorusMg,
    /// Potassium (mg)
    #[serde(rename = "potassium_mg")]
    PotassiumMg,
    /// Sodium (mg)
    #[serde(rename = "sodium_mg")]
    SodiumMg,
    /// Zinc (mg)
    #[serde(rename = "zinc_mg")]
    ZincMg,
}

/// One row of the vocabulary: key, display name, food-table column, label, unit
struct NutrientEntry {
    key: NutrientKey,
    display_name: &'static str,
    column_name: &'static str,
    label: &'static str,
    unit: &'static str,
}

const fn entry(
    key: NutrientKey,
    display_name: &'static str,
    column_name: &'static str,
    label: &'static str,
    unit: &'static str,
) -> NutrientEntry {
    NutrientEntry {
        key,
        display_name,
        column_name,
        label,
        unit,
    }
}

/// The vocabulary, in `NutrientKey` declaration order
static NUTRIENT_TABLE: [NutrientEntry; 18] = [
    // Vitamins
    entry(NutrientKey::VitaminAMcg, "vitamin_a", "vitamin_a_mcg", "Vitamin A", "mcg"),
    entry(NutrientKey::VitaminCMg, "vitamin_c", "vitamin_c_mg", "Vitamin C", "mg"),
    entry(NutrientKey::VitaminDMcg, "vitamin_d", "vitamin_d_mcg", "Vitamin D", "mcg"),
    entry(NutrientKey::VitaminEMg, "vitamin_e", "vitamin_e_mg", "Vitamin E", "mg"),
    entry(NutrientKey::VitaminKMcg, "vitamin_k", "vitamin_k_mcg", "Vitamin K", "mcg"),
    entry(NutrientKey::VitaminB1Mg, "thiamin_b1", "vitamin_b1_mg", "Vitamin B1", "mg"),
    entry(NutrientKey::VitaminB2Mg, "riboflavin_b2", "vitamin_b2_mg", "Vitamin B2", "mg"),
    entry(NutrientKey::VitaminB3Mg, "niacin_b3", "vitamin_b3_mg", "Vitamin B3", "mg"),
    entry(NutrientKey::VitaminB6Mg, "vitamin_b6", "vitamin_b6_mg", "Vitamin B6", "mg"),
    entry(NutrientKey::VitaminB12Mcg, "vitamin_b12", "vitamin_b12_mcg", "Vitamin B12", "mcg"),
    entry(NutrientKey::FolateMcg, "folate", "folate_mcg", "Folate", "mcg"),
    // Minerals
    entry(NutrientKey::CalciumMg, "calcium", "calcium_mg", "Calcium", "mg"),
    entry(NutrientKey::IronMg, "iron", "iron_mg", "Iron", "mg"),
    entry(NutrientKey::MagnesiumMg, "magnesium", "magnesium_mg", "Magnesium", "mg"),
    entry(NutrientKey::PhosphorusMg, "phosphorus", "phosphorus_mg", "Phosphorus", "mg"),
    entry(NutrientKey::PotassiumMg, "potassium", "potassium_mg", "Potassium", "mg"),
    entry(NutrientKey::SodiumMg, "sodium", "sodium_mg", "Sodium", "mg"),
    entry(NutrientKey::ZincMg, "zinc", "zinc_mg", "Zinc", "mg"),
];

/// Normalize a ledger or standards display name for lookup.
///
/// Lowercases, trims, and replaces inner whitespace with underscores, so
/// `"Vitamin B12"` and `"vitamin_b12"` name the same nutrient.
#[must_use]
pub fn normalize_display_name(name: &str) -> String {
    name.trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

impl NutrientKey {
    /// Every tracked nutrient, in canonical order
    pub const ALL: [Self; 18] = [
        Self::VitaminAMcg,
        Self::VitaminCMg,
        Self::VitaminDMcg,
        Self::VitaminEMg,
        Self::VitaminKMcg,
        Self::VitaminB1Mg,
        Self::VitaminB2Mg,
        Self::VitaminB3Mg,
        Self::VitaminB6Mg,
        Self::VitaminB12Mcg,
        Self::FolateMcg,
        Self::CalciumMg,
        Self::IronMg,
        Self::MagnesiumMg,
        Self::PhosphorusMg,
        Self::PotassiumMg,
        Self::SodiumMg,
        Self::ZincMg,
    ];

    fn entry(self) -> &'static NutrientEntry {
        &NUTRIENT_TABLE[self as usize]
    }

    /// Display name used by standards and the consumption ledger
    #[must_use]
    pub fn display_name(self) -> &'static str {
        self.entry().display_name
    }

    /// Food-table column name (`vitamin_b12_mcg`)
    #[must_use]
    pub fn column_name(self) -> &'static str {
        self.entry().column_name
    }

    /// Human-readable label used in recommendation reasons
    #[must_use]
    pub fn label(self) -> &'static str {
        self.entry().label
    }

    /// Unit of the food-table amount
    #[must_use]
    pub fn unit(self) -> &'static str {
        self.entry().unit
    }

    /// Translate a display name into its food-table key.
    ///
    /// Returns `None` for nutrients outside the tracked vocabulary.
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        let normalized = normalize_display_name(name);
        NUTRIENT_TABLE
            .iter()
            .find(|e| e.display_name == normalized)
            .map(|e| e.key)
    }

    /// Look up a key by its food-table column name
    #[must_use]
    pub fn from_column_name(column: &str) -> Option<Self> {
        NUTRIENT_TABLE
            .iter()
            .find(|e| e.column_name == column)
            .map(|e| e.key)
    }
}

impl fmt::Display for NutrientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for NutrientKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_column_name(s).ok_or_else(|| format!("unknown nutrient key: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_aligned_with_declaration_order() {
        for (index, key) in NutrientKey::ALL.iter().enumerate() {
            assert_eq!(NUTRIENT_TABLE[index].key, *key);
        }
    }

    #[test]
    fn test_translation_round_trips_through_both_namespaces() {
        for key in NutrientKey::ALL {
            assert_eq!(NutrientKey::from_display_name(key.display_name()), Some(key));
            assert_eq!(NutrientKey::from_column_name(key.column_name()), Some(key));
        }
    }

    #[test]
    fn test_display_names_are_normalized() {
        assert_eq!(
            NutrientKey::from_display_name("Vitamin B12"),
            Some(NutrientKey::VitaminB12Mcg)
        );
        assert_eq!(
            NutrientKey::from_display_name("  Thiamin B1 "),
            Some(NutrientKey::VitaminB1Mg)
        );
        assert_eq!(NutrientKey::from_display_name("iodine"), None);
    }

    #[test]
    fn test_serde_uses_column_names() {
        let json = serde_json::to_string(&NutrientKey::FolateMcg).unwrap_or_default();
        assert_eq!(json, "\"folate_mcg\"");
    }
}
