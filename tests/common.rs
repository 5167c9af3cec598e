// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup plus patient, standard, ledger, and food builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrigap`
//!
//! Fixtures model one adult woman (patient 1), one adult man (patient 2),
//! and a pregnant woman (patient 3), a small standards table, and a food pool
//! where Spinach and Orange cover iron and vitamin C.

use chrono::{NaiveDate, NaiveDateTime};
use nutrigap::data_sources::{Dataset, InMemoryDataSource};
use nutrigap::intelligence::RecommenderConfig;
use nutrigap::models::{
    ConsumptionEntry, FoodCandidate, Gender, NutrientStandard, PatientId, PatientRecord,
    PhysiologicalCondition, StandardGender,
};
use nutrigap::nutrients::NutrientKey;
use nutrigap::services::NutritionEngine;
use std::collections::BTreeMap;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub const FEMALE_ADULT: PatientId = PatientId(1);
pub const MALE_ADULT: PatientId = PatientId(2);
pub const PREGNANT_ADULT: PatientId = PatientId(3);

/// Day every fixture ledger entry is logged on
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, 0, 0).unwrap()
}

/// Food with every tracked nutrient at zero except `content`
pub fn food(name: &str, calories: f64, content: &[(NutrientKey, f64)]) -> FoodCandidate {
    let mut nutrients: BTreeMap<NutrientKey, f64> =
        NutrientKey::ALL.iter().map(|key| (*key, 0.0)).collect();
    nutrients.extend(content.iter().copied());
    FoodCandidate {
        food_name: name.to_owned(),
        calories,
        serving_grams: 100.0,
        tags: Vec::new(),
        nutrients,
    }
}

pub fn spinach() -> FoodCandidate {
    let mut spinach = food(
        "Spinach",
        40.0,
        &[(NutrientKey::IronMg, 6.0), (NutrientKey::VitaminCMg, 10.0)],
    );
    spinach.tags = vec!["leafy".to_owned(), "vegan".to_owned()];
    spinach
}

pub fn orange() -> FoodCandidate {
    food("Orange", 60.0, &[(NutrientKey::VitaminCMg, 25.0)])
}

pub fn standard(
    nutrient_name: &str,
    gender: StandardGender,
    condition: PhysiologicalCondition,
    daily_value: f64,
    unit: &str,
) -> NutrientStandard {
    NutrientStandard {
        nutrient_name: nutrient_name.to_owned(),
        gender,
        min_age_months: 228,
        max_age_months: 600,
        condition,
        daily_value,
        unit: unit.to_owned(),
    }
}

/// Adult standards: iron differs by gender, vitamin C is shared, plus one
/// nutrient outside the food-table vocabulary
pub fn adult_standards() -> Vec<NutrientStandard> {
    use PhysiologicalCondition::{Normal, Pregnancy};
    use StandardGender::{Both, Female, Male};
    vec![
        standard("iron", Female, Normal, 18.0, "mg"),
        standard("iron", Male, Normal, 8.0, "mg"),
        standard("iron", Both, Normal, 10.0, "mg"),
        standard("vitamin_c", Both, Normal, 75.0, "mg"),
        standard("iron", Female, Pregnancy, 27.0, "mg"),
        standard("vitamin_c", Both, Pregnancy, 85.0, "mg"),
        standard("omega_3", Both, Normal, 1.1, "g"),
    ]
}

pub fn patient(id: PatientId, gender: Gender, born: (i32, u32, u32)) -> PatientRecord {
    PatientRecord {
        patient_id: id,
        full_name: Some(format!("Patient {id}")),
        gender,
        date_of_birth: NaiveDate::from_ymd_opt(born.0, born.1, born.2),
        age_months: None,
        is_pregnant: false,
        is_lactating: false,
    }
}

pub fn patients() -> Vec<PatientRecord> {
    let mut pregnant = patient(PREGNANT_ADULT, Gender::Female, (1994, 6, 1));
    pregnant.is_pregnant = true;
    vec![
        patient(FEMALE_ADULT, Gender::Female, (1990, 5, 20)),
        patient(MALE_ADULT, Gender::Male, (1985, 1, 2)),
        pregnant,
    ]
}

pub fn entry(patient_id: PatientId, when: NaiveDateTime, name: &str, amount: f64) -> ConsumptionEntry {
    ConsumptionEntry {
        patient_id,
        consumed_at: when,
        nutrient_name: name.to_owned(),
        amount,
        unit: None,
    }
}

/// Patient 1 ate 8 mg iron and 55 mg vitamin C on the reference date, plus
/// entries on other days and for other patients that must not count
pub fn consumption() -> Vec<ConsumptionEntry> {
    let day = reference_date();
    let yesterday = day.pred_opt().unwrap();
    vec![
        entry(FEMALE_ADULT, at(day, 8), "iron", 5.0),
        entry(FEMALE_ADULT, at(day, 13), "Iron", 3.0),
        entry(FEMALE_ADULT, at(day, 13), "vitamin_c", 55.0),
        entry(FEMALE_ADULT, at(yesterday, 19), "iron", 40.0),
        entry(MALE_ADULT, at(day, 12), "iron", 9.0),
        entry(MALE_ADULT, at(day, 12), "vitamin_c", 80.0),
    ]
}

pub fn dataset() -> Dataset {
    Dataset {
        patients: patients(),
        consumption: consumption(),
        standards: adult_standards(),
        foods: vec![spinach(), orange()],
    }
}

pub fn memory_source() -> InMemoryDataSource {
    InMemoryDataSource::from_dataset(dataset()).unwrap()
}

pub fn engine() -> NutritionEngine<InMemoryDataSource> {
    init_test_logging();
    NutritionEngine::new(memory_source(), RecommenderConfig::default())
}
