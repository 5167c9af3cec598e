// ABOUTME: Tunable parameters of the greedy recommender with validated defaults
// ABOUTME: Defaults come from the named constants in nutrigap-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrigap_core::constants::recommendation::{
    DEFAULT_MAX_ITEMS, EFFICIENCY_CALORIE_OFFSET, MAX_REASON_NUTRIENTS, MIN_ACCEPTED_EFFICIENCY,
    NOTABLE_CONTRIBUTION_PCT,
};
use nutrigap_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Order in which notable nutrients are listed in a recommendation reason
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReasonOrdering {
    /// Largest contribution first; ties keep gap-map order
    #[default]
    ContributionDescending,
    /// Gap-map insertion order (the order standards were read); first
    /// qualifying nutrients win
    GapOrder,
}

impl ReasonOrdering {
    /// Parse a configuration value
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "contribution" | "contribution_descending" => Some(Self::ContributionDescending),
            "gap_order" | "gap" => Some(Self::GapOrder),
            _ => None,
        }
    }
}

/// Greedy recommender configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommenderConfig {
    /// Selection rounds when the caller does not specify a limit
    pub max_items: usize,
    /// Added to calories in the efficiency denominator
    pub calorie_offset: f64,
    /// Winner must have efficiency strictly above this to be accepted
    pub min_accepted_efficiency: f64,
    /// Contribution percentage a nutrient must exceed to be named in the reason
    pub notable_contribution_pct: f64,
    /// Maximum nutrients named in one reason
    pub max_reason_nutrients: usize,
    /// Ordering of nutrients in the reason
    pub reason_ordering: ReasonOrdering,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            calorie_offset: EFFICIENCY_CALORIE_OFFSET,
            min_accepted_efficiency: MIN_ACCEPTED_EFFICIENCY,
            notable_contribution_pct: NOTABLE_CONTRIBUTION_PCT,
            max_reason_nutrients: MAX_REASON_NUTRIENTS,
            reason_ordering: ReasonOrdering::default(),
        }
    }
}

impl RecommenderConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a config error when the calorie offset is not strictly positive,
    /// a threshold is negative or non-finite, or a count is zero.
    pub fn validate(&self) -> AppResult<()> {
        if !self.calorie_offset.is_finite() || self.calorie_offset <= 0.0 {
            return Err(AppError::config_invalid(format!(
                "calorie_offset must be positive, got {}",
                self.calorie_offset
            )));
        }
        if !self.min_accepted_efficiency.is_finite() || self.min_accepted_efficiency < 0.0 {
            return Err(AppError::config_invalid(format!(
                "min_accepted_efficiency must be non-negative, got {}",
                self.min_accepted_efficiency
            )));
        }
        if !self.notable_contribution_pct.is_finite() || self.notable_contribution_pct < 0.0 {
            return Err(AppError::config_invalid(format!(
                "notable_contribution_pct must be non-negative, got {}",
                self.notable_contribution_pct
            )));
        }
        if self.max_items == 0 {
            return Err(AppError::config_invalid("max_items must be at least 1"));
        }
        if self.max_reason_nutrients == 0 {
            return Err(AppError::config_invalid(
                "max_reason_nutrients must be at least 1",
            ));
        }
        Ok(())
    }
}
