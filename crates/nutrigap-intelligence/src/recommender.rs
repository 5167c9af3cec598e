// ABOUTME: Greedy multi-round food selection maximizing deficiency coverage per calorie
// ABOUTME: Works on a private copy of the gap map with a hard efficiency acceptance gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Greedy Recommender
//!
//! Each round scores every food not yet recommended against the remaining
//! gaps:
//!
//! ```text
//! covered_n   = min(content_n, missing_n)
//! score       = sum_n (covered_n / missing_n) * 100
//! efficiency  = score / (calories + calorie_offset)
//! ```
//!
//! The food with the strictly greatest efficiency wins the round; on ties the
//! earliest food in the pool keeps the win. A winner whose efficiency is not
//! above `min_accepted_efficiency` ends the whole run. Accepted foods have
//! their full content subtracted from every open gap, and gaps that reach
//! zero are closed.
//!
//! The caller's [`DeficiencyMap`] is never modified.

#![allow(clippy::cast_possible_truncation)] // Safe: percentages are bounded to 0..=100

use crate::config::{ReasonOrdering, RecommenderConfig};
use crate::deficiency::DeficiencyMap;
use nutrigap_core::errors::AppResult;
use nutrigap_core::models::{FoodCandidate, Recommendation};
use nutrigap_core::nutrients::NutrientKey;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Why a recommendation run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// The input gap map was empty; nothing to do
    NoDeficiencies,
    /// Every gap was closed
    GapsClosed,
    /// The round limit was reached with gaps still open
    MaxItemsReached,
    /// The best remaining food did not clear the efficiency gate
    BelowEfficiencyThreshold,
    /// No unrecommended food remained in the pool
    CandidatesExhausted,
}

/// Full result of a recommendation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationOutcome {
    /// Accepted foods in selection order
    pub recommendations: Vec<Recommendation>,
    /// Gaps still open after the last accepted food
    pub remaining_gaps: DeficiencyMap,
    /// Why the run stopped
    pub termination: TerminationReason,
}

/// One nutrient's share of a candidate's score
#[derive(Debug, Clone, Copy)]
struct Contribution {
    key: NutrientKey,
    percent: f64,
}

/// Score of one candidate against the current gaps
#[derive(Debug, Clone)]
struct CandidateScore {
    efficiency: f64,
    notable: Vec<Contribution>,
}

/// Greedy deficiency-closing recommender
#[derive(Debug, Clone, Default)]
pub struct GreedyRecommender {
    config: RecommenderConfig,
}

impl GreedyRecommender {
    /// Create a recommender with explicit configuration
    #[must_use]
    pub const fn new(config: RecommenderConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Recommend up to `max_items` foods for `gaps`, in selection order.
    ///
    /// # Errors
    ///
    /// Returns a data-integrity fault if any food in the pool is missing a
    /// nutrient field or carries a negative or non-finite value.
    pub fn recommend(
        &self,
        gaps: &DeficiencyMap,
        pool: &[FoodCandidate],
        max_items: usize,
    ) -> AppResult<Vec<Recommendation>> {
        self.recommend_with_outcome(gaps, pool, max_items)
            .map(|outcome| outcome.recommendations)
    }

    /// Run the greedy selection and report remaining gaps and the stop reason.
    ///
    /// # Errors
    ///
    /// Same conditions as [`GreedyRecommender::recommend`].
    pub fn recommend_with_outcome(
        &self,
        gaps: &DeficiencyMap,
        pool: &[FoodCandidate],
        max_items: usize,
    ) -> AppResult<RecommendationOutcome> {
        if gaps.is_empty() {
            return Ok(RecommendationOutcome {
                recommendations: Vec::new(),
                remaining_gaps: DeficiencyMap::new(),
                termination: TerminationReason::NoDeficiencies,
            });
        }

        for food in pool {
            food.validate()?;
        }

        let mut working = gaps.clone();
        let mut recommendations: Vec<Recommendation> = Vec::with_capacity(max_items);
        let mut chosen: HashSet<&str> = HashSet::new();
        let mut termination = TerminationReason::MaxItemsReached;

        for round in 1..=max_items {
            if working.is_empty() {
                break;
            }

            let mut best: Option<(&FoodCandidate, CandidateScore)> = None;
            for food in pool {
                if chosen.contains(food.food_name.as_str()) {
                    continue;
                }
                let score = self.score_candidate(food, &working)?;
                let improves = best
                    .as_ref()
                    .map_or(true, |(_, current)| score.efficiency > current.efficiency);
                if improves {
                    best = Some((food, score));
                }
            }

            let Some((food, score)) = best else {
                termination = TerminationReason::CandidatesExhausted;
                break;
            };

            debug!(
                round,
                food = %food.food_name,
                efficiency = score.efficiency,
                "round winner"
            );

            if score.efficiency <= self.config.min_accepted_efficiency {
                info!(
                    round,
                    food = %food.food_name,
                    efficiency = score.efficiency,
                    threshold = self.config.min_accepted_efficiency,
                    "best candidate below efficiency gate; stopping"
                );
                termination = TerminationReason::BelowEfficiencyThreshold;
                break;
            }

            recommendations.push(Recommendation {
                food_name: food.food_name.clone(),
                calories: food.calories,
                serving: food.serving_label(),
                reason: self.format_reason(score.notable),
                tags: food.tags.clone(),
            });
            chosen.insert(food.food_name.as_str());

            let open: Vec<NutrientKey> = working.keys().collect();
            for key in open {
                working.reduce(key, food.nutrient_amount(key)?);
            }
        }

        if working.is_empty() {
            termination = TerminationReason::GapsClosed;
        }

        info!(
            recommended = recommendations.len(),
            remaining_gaps = working.len(),
            termination = ?termination,
            "recommendation run complete"
        );

        Ok(RecommendationOutcome {
            recommendations,
            remaining_gaps: working,
            termination,
        })
    }

    fn score_candidate(
        &self,
        food: &FoodCandidate,
        gaps: &DeficiencyMap,
    ) -> AppResult<CandidateScore> {
        let mut score = 0.0;
        let mut notable = Vec::new();

        for (key, missing) in gaps.iter() {
            let covered = food.nutrient_amount(key)?.min(missing);
            let percent = covered / missing * 100.0;
            score += percent;
            if percent > self.config.notable_contribution_pct {
                notable.push(Contribution { key, percent });
            }
        }

        Ok(CandidateScore {
            efficiency: score / (food.calories + self.config.calorie_offset),
            notable,
        })
    }

    fn format_reason(&self, mut notable: Vec<Contribution>) -> String {
        if self.config.reason_ordering == ReasonOrdering::ContributionDescending {
            // stable: equal contributions keep gap-map order
            notable.sort_by(|a, b| b.percent.total_cmp(&a.percent));
        }
        notable
            .iter()
            .take(self.config.max_reason_nutrients)
            .map(|c| format!("{} (+{}%)", c.key.label(), c.percent.trunc() as i64))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
