// ABOUTME: Integration tests for JSON dataset loading and the data-source factory
// ABOUTME: Uses temporary files and the bundled demo dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{dataset, init_test_logging, reference_date, FEMALE_ADULT, MALE_ADULT};
use nutrigap::config::DataSourceUrl;
use nutrigap::data_sources::{DataSource, InMemoryDataSource, NutritionDataSource};
use nutrigap::errors::ErrorCode;
use nutrigap::intelligence::RecommenderConfig;
use nutrigap::models::PatientId;
use nutrigap::services::NutritionEngine;
use std::io::Write;
use std::path::PathBuf;

fn demo_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demo/dataset.json")
}

#[tokio::test]
async fn test_dataset_file_round_trips_through_factory() {
    init_test_logging();
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(serde_json::to_string(&dataset()).unwrap().as_bytes())
        .unwrap();

    let url = DataSourceUrl::parse_url(&file.path().display().to_string()).unwrap();
    assert!(url.is_json());

    let source = DataSource::connect(&url).await.unwrap();
    assert_eq!(source.backend_info(), "in-memory dataset");

    let consumed = source
        .consumed_amounts(FEMALE_ADULT, reference_date())
        .await
        .unwrap();
    assert!((consumed.get("iron") - 8.0).abs() < 1e-9);
    assert_eq!(source.food_pool().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_missing_dataset_file_is_dependency_unavailable() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let url = DataSourceUrl::Json {
        path: dir.path().join("nowhere.json"),
    };

    let err = DataSource::connect(&url).await.unwrap_err();
    assert!(err.is_dependency_unavailable());
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let err = InMemoryDataSource::from_json_str("{ \"patients\": [").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_duplicate_patient_ids_are_rejected() {
    let mut data = dataset();
    data.patients.push(data.patients[0].clone());

    let err = InMemoryDataSource::from_dataset(data).unwrap_err();
    assert!(err.is_data_integrity_fault());
    assert_eq!(err.context.patient_id, Some(FEMALE_ADULT.0));
}

#[test]
fn test_sections_default_to_empty() {
    let source = InMemoryDataSource::from_json_str("{}").unwrap();
    assert!(source.dataset().patients.is_empty());
    assert!(source.dataset().foods.is_empty());
}

#[tokio::test]
async fn test_demo_dataset_drives_the_engine() {
    init_test_logging();
    let url = DataSourceUrl::Json {
        path: demo_dataset_path(),
    };
    let engine = NutritionEngine::new(
        DataSource::connect(&url).await.unwrap(),
        RecommenderConfig::default(),
    );

    assert_eq!(engine.list_patients().await.unwrap().len(), 3);

    let recs = engine
        .recommend_for_patient(FEMALE_ADULT, Some(reference_date()), None)
        .await
        .unwrap();
    assert!(!recs.is_empty());
    assert!(recs.len() <= 3);

    // Patient 2 meets every tracked target on the reference day
    let none = engine
        .recommend_for_patient(MALE_ADULT, Some(reference_date()), None)
        .await
        .unwrap();
    assert!(none.is_empty());

    let report = engine
        .daily_report(PatientId(3), Some(reference_date()))
        .await
        .unwrap();
    assert!(report.rows.iter().all(|row| row.consumed == 0.0));
}
