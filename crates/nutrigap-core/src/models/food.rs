// ABOUTME: Candidate foods with per-nutrient content and the recommendations built from them
// ABOUTME: Food records fail fast on missing or negative nutrient fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::nutrients::NutrientKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A food that may be recommended to close nutrient gaps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodCandidate {
    /// Food name, unique within one recommendation run
    pub food_name: String,
    /// Calories per serving
    pub calories: f64,
    /// Serving size in grams
    pub serving_grams: f64,
    /// Free-text descriptive tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Content per serving for every tracked nutrient
    pub nutrients: BTreeMap<NutrientKey, f64>,
}

impl FoodCandidate {
    /// Content of `key` per serving
    ///
    /// # Errors
    ///
    /// Returns a data-integrity fault when the field is missing, negative,
    /// or non-finite. Missing fields are never read as zero.
    pub fn nutrient_amount(&self, key: NutrientKey) -> AppResult<f64> {
        let amount = self.nutrients.get(&key).copied().ok_or_else(|| {
            AppError::data_integrity(format!(
                "food '{}' is missing nutrient field {key}",
                self.food_name
            ))
            .with_resource_id(self.food_name.clone())
        })?;

        if !amount.is_finite() || amount < 0.0 {
            return Err(AppError::data_integrity(format!(
                "food '{}' has invalid {key} amount {amount}",
                self.food_name
            ))
            .with_resource_id(self.food_name.clone()));
        }
        Ok(amount)
    }

    /// Check every field the recommender reads
    ///
    /// # Errors
    ///
    /// Returns a data-integrity fault for an empty name, negative or
    /// non-finite calories or serving size, or any invalid nutrient field.
    pub fn validate(&self) -> AppResult<()> {
        if self.food_name.trim().is_empty() {
            return Err(AppError::data_integrity("food candidate has an empty name"));
        }
        for (field, value) in [("calories", self.calories), ("serving_grams", self.serving_grams)]
        {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::data_integrity(format!(
                    "food '{}' has invalid {field} {value}",
                    self.food_name
                ))
                .with_resource_id(self.food_name.clone()));
            }
        }
        for key in NutrientKey::ALL {
            self.nutrient_amount(key)?;
        }
        Ok(())
    }

    /// Serving size rendered as `"<grams>g"`
    #[must_use]
    pub fn serving_label(&self) -> String {
        format!("{}g", self.serving_grams)
    }
}

/// One accepted food in a recommendation list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Recommended food
    pub food_name: String,
    /// Calories per serving
    pub calories: f64,
    /// Serving string, e.g. `"100g"`
    pub serving: String,
    /// Nutrients the food meaningfully covers, e.g. `"Iron (+60%), Vitamin C (+50%)"`
    pub reason: String,
    /// Tags copied from the food
    pub tags: Vec<String>,
}
