// ABOUTME: Consumption ledger entries and the per-day totals derived from them
// ABOUTME: Totals are keyed by normalized nutrient display name; absent means zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::patient::PatientId;
use crate::nutrients::normalize_display_name;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single logged nutrient amount from an analyzed meal item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsumptionEntry {
    /// Patient who ate the meal
    pub patient_id: PatientId,
    /// When the meal was logged
    pub consumed_at: NaiveDateTime,
    /// Nutrient display name
    pub nutrient_name: String,
    /// Amount consumed
    pub amount: f64,
    /// Unit reported by the analysis, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Total consumed amount per nutrient display name over one reference window
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ConsumedAmounts {
    totals: BTreeMap<String, f64>,
}

impl ConsumedAmounts {
    /// Empty ledger window
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the running total for `nutrient_name`
    pub fn add(&mut self, nutrient_name: &str, amount: f64) {
        *self
            .totals
            .entry(normalize_display_name(nutrient_name))
            .or_insert(0.0) += amount;
    }

    /// Total consumed for `nutrient_name`, zero when nothing was logged
    #[must_use]
    pub fn get(&self, nutrient_name: &str) -> f64 {
        self.totals
            .get(&normalize_display_name(nutrient_name))
            .copied()
            .unwrap_or(0.0)
    }

    /// Iterate over `(normalized name, total)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.totals.iter().map(|(name, total)| (name.as_str(), *total))
    }

    /// Number of nutrients with a logged total
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// True when nothing was logged in the window
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for ConsumedAmounts {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut amounts = Self::new();
        for (name, amount) in iter {
            amounts.add(name.as_ref(), amount);
        }
        amounts
    }
}
