// ABOUTME: Per-patient analysis commands for nutrigap-cli
// ABOUTME: Handles deficiencies, recommend, and report for one patient-day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use nutrigap::{
    data_sources::NutritionDataSource, errors::AppResult, models::PatientId,
    services::NutritionEngine,
};
use tracing::warn;

use crate::helpers::display::{
    display_deficiencies, display_intake_report, display_recommendations, print_json,
};
use crate::OutputFormat;

/// Show the day's remaining gaps
pub async fn deficiencies<S: NutritionDataSource>(
    engine: &NutritionEngine<S>,
    patient_id: PatientId,
    date: Option<NaiveDate>,
    format: OutputFormat,
) -> AppResult<()> {
    let assessment = engine.assess_deficiencies(patient_id, date).await?;
    if !assessment.unmapped_nutrients.is_empty() {
        warn!(
            "Standards without a food-table key were skipped: {}",
            assessment.unmapped_nutrients.join(", ")
        );
    }

    match format {
        OutputFormat::Json => print_json(&assessment),
        OutputFormat::Text => {
            display_deficiencies(patient_id, &assessment.gaps);
            Ok(())
        }
    }
}

/// Recommend foods for the day's gaps
pub async fn recommend<S: NutritionDataSource>(
    engine: &NutritionEngine<S>,
    patient_id: PatientId,
    date: Option<NaiveDate>,
    max_items: Option<usize>,
    format: OutputFormat,
) -> AppResult<()> {
    let outcome = engine
        .recommendation_outcome(patient_id, date, max_items)
        .await?;

    match format {
        OutputFormat::Json => print_json(&outcome),
        OutputFormat::Text => {
            display_recommendations(patient_id, &outcome);
            Ok(())
        }
    }
}

/// Grade the day's intake
pub async fn report<S: NutritionDataSource>(
    engine: &NutritionEngine<S>,
    patient_id: PatientId,
    date: Option<NaiveDate>,
    format: OutputFormat,
) -> AppResult<()> {
    let report = engine.daily_report(patient_id, date).await?;

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            display_intake_report(patient_id, &report);
            Ok(())
        }
    }
}
