// ABOUTME: Engine service computing deficiencies, recommendations, and intake reports per patient
// ABOUTME: Loads profile, ledger, standards, and foods from a data source; holds no mutable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::data_sources::NutritionDataSource;
use crate::errors::{AppError, AppResult};
use crate::models::{
    ConsumedAmounts, NutrientStandard, PatientId, PatientProfile, PatientRecord, Recommendation,
};
use chrono::{Local, NaiveDate};
use nutrigap_intelligence::{
    assess_deficiencies, build_intake_report, DeficiencyAssessment, DeficiencyMap,
    GreedyRecommender, IntakeReport, RecommendationOutcome, RecommenderConfig,
};
use tracing::{info, instrument};

/// Everything the calculators need for one patient-day
struct PatientDay {
    profile: PatientProfile,
    consumed: ConsumedAmounts,
    standards: Vec<NutrientStandard>,
}

/// Deficiency and recommendation engine bound to a data source
///
/// Every operation reads fresh data; concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct NutritionEngine<S> {
    source: S,
    recommender: GreedyRecommender,
}

impl<S: NutritionDataSource> NutritionEngine<S> {
    /// Create an engine over `source`
    #[must_use]
    pub const fn new(source: S, config: RecommenderConfig) -> Self {
        Self {
            source,
            recommender: GreedyRecommender::new(config),
        }
    }

    /// Underlying data source
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Active recommender configuration
    #[must_use]
    pub const fn config(&self) -> &RecommenderConfig {
        self.recommender.config()
    }

    /// List every patient known to the data source
    ///
    /// # Errors
    ///
    /// Returns a dependency-unavailable error if the data source fails.
    pub async fn list_patients(&self) -> AppResult<Vec<PatientRecord>> {
        self.source.list_patients().await
    }

    /// Current shortfall per tracked nutrient for one day.
    ///
    /// `reference_date` defaults to today in local time.
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown patient, a data-integrity fault for
    /// malformed reference data, and a dependency-unavailable error if the
    /// data source fails.
    pub async fn compute_deficiencies(
        &self,
        patient_id: PatientId,
        reference_date: Option<NaiveDate>,
    ) -> AppResult<DeficiencyMap> {
        self.assess_deficiencies(patient_id, reference_date)
            .await
            .map(|assessment| assessment.gaps)
    }

    /// Shortfalls plus the applicable nutrients that have no food-table key
    ///
    /// # Errors
    ///
    /// Same conditions as [`NutritionEngine::compute_deficiencies`].
    #[instrument(skip(self), fields(patient_id = %patient_id))]
    pub async fn assess_deficiencies(
        &self,
        patient_id: PatientId,
        reference_date: Option<NaiveDate>,
    ) -> AppResult<DeficiencyAssessment> {
        let day = self
            .load_patient_day(patient_id, resolve_date(reference_date))
            .await?;
        assess_deficiencies(&day.profile, &day.consumed, &day.standards)
            .map_err(|e| e.with_patient_id(patient_id.0))
    }

    /// Recommend up to `max_items` foods (configured default when `None`)
    ///
    /// # Errors
    ///
    /// Same conditions as [`NutritionEngine::compute_deficiencies`], plus a
    /// data-integrity fault for a malformed food pool.
    pub async fn recommend_for_patient(
        &self,
        patient_id: PatientId,
        reference_date: Option<NaiveDate>,
        max_items: Option<usize>,
    ) -> AppResult<Vec<Recommendation>> {
        self.recommendation_outcome(patient_id, reference_date, max_items)
            .await
            .map(|outcome| outcome.recommendations)
    }

    /// Recommendation run with the remaining gaps and stop reason
    ///
    /// # Errors
    ///
    /// Same conditions as [`NutritionEngine::recommend_for_patient`].
    #[instrument(skip(self), fields(patient_id = %patient_id))]
    pub async fn recommendation_outcome(
        &self,
        patient_id: PatientId,
        reference_date: Option<NaiveDate>,
        max_items: Option<usize>,
    ) -> AppResult<RecommendationOutcome> {
        let gaps = self.compute_deficiencies(patient_id, reference_date).await?;
        let max_items = max_items.unwrap_or(self.recommender.config().max_items);

        // No gaps means no food pool read
        let pool = if gaps.is_empty() {
            Vec::new()
        } else {
            self.source.food_pool().await?
        };

        let outcome = self
            .recommender
            .recommend_with_outcome(&gaps, &pool, max_items)
            .map_err(|e| e.with_patient_id(patient_id.0))?;

        info!(
            recommended = outcome.recommendations.len(),
            termination = ?outcome.termination,
            "recommendations computed"
        );
        Ok(outcome)
    }

    /// Day's intake graded against every applicable standard
    ///
    /// # Errors
    ///
    /// Same conditions as [`NutritionEngine::compute_deficiencies`].
    #[instrument(skip(self), fields(patient_id = %patient_id))]
    pub async fn daily_report(
        &self,
        patient_id: PatientId,
        reference_date: Option<NaiveDate>,
    ) -> AppResult<IntakeReport> {
        let day = self
            .load_patient_day(patient_id, resolve_date(reference_date))
            .await?;
        build_intake_report(&day.profile, &day.consumed, &day.standards)
            .map_err(|e| e.with_patient_id(patient_id.0))
    }

    async fn load_patient_day(
        &self,
        patient_id: PatientId,
        reference_date: NaiveDate,
    ) -> AppResult<PatientDay> {
        let record = self
            .source
            .get_patient(patient_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Patient {patient_id}")).with_patient_id(patient_id.0)
            })?;
        let profile = record.profile_at(reference_date)?;

        let (consumed, standards) = tokio::try_join!(
            self.source.consumed_amounts(patient_id, reference_date),
            self.source.nutrient_standards(),
        )?;

        Ok(PatientDay {
            profile,
            consumed,
            standards,
        })
    }
}

fn resolve_date(reference_date: Option<NaiveDate>) -> NaiveDate {
    reference_date.unwrap_or_else(|| Local::now().date_naive())
}
