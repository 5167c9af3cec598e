// ABOUTME: Patient listing command for nutrigap-cli
// ABOUTME: Prints every patient the data source knows about as a table or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrigap::{data_sources::NutritionDataSource, errors::AppResult, services::NutritionEngine};
use tracing::info;

use crate::helpers::display::{display_patients, print_json};
use crate::OutputFormat;

/// List all patients
pub async fn list<S: NutritionDataSource>(
    engine: &NutritionEngine<S>,
    format: OutputFormat,
) -> AppResult<()> {
    let patients = engine.list_patients().await?;
    info!("Found {} patients", patients.len());

    match format {
        OutputFormat::Json => print_json(&patients),
        OutputFormat::Text => {
            display_patients(&patients);
            Ok(())
        }
    }
}
