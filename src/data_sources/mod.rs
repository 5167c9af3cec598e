// ABOUTME: Data-source abstraction over patients, the consumption ledger, standards, and foods
// ABOUTME: Read-only port with in-memory/JSON and SQLite adapters selected by URL

//! # Data Sources
//!
//! The engine never talks to storage directly. Every adapter implements
//! [`NutritionDataSource`]; driver and IO failures surface as
//! dependency-unavailable errors and malformed rows as data-integrity
//! faults, so an empty result is always a real empty result.

use crate::errors::AppResult;
use crate::models::{ConsumedAmounts, FoodCandidate, NutrientStandard, PatientId, PatientRecord};
use async_trait::async_trait;
use chrono::NaiveDate;

/// URL-driven adapter selection
pub mod factory;
/// In-memory adapter, optionally loaded from a JSON dataset
pub mod memory;
/// Read-only `SQLite` adapter
pub mod sqlite;

pub use factory::DataSource;
pub use memory::{Dataset, InMemoryDataSource};
pub use sqlite::SqliteDataSource;

/// Core data-source abstraction
///
/// All adapters implement this trait to give the engine a consistent,
/// read-only view of its collaborators.
#[async_trait]
pub trait NutritionDataSource: Send + Sync {
    /// Get a patient record by id
    async fn get_patient(&self, patient_id: PatientId) -> AppResult<Option<PatientRecord>>;

    /// List every patient record
    async fn list_patients(&self) -> AppResult<Vec<PatientRecord>>;

    /// Totals per nutrient display name for one calendar day
    async fn consumed_amounts(
        &self,
        patient_id: PatientId,
        date: NaiveDate,
    ) -> AppResult<ConsumedAmounts>;

    /// Full reference standards table
    async fn nutrient_standards(&self) -> AppResult<Vec<NutrientStandard>>;

    /// Candidate foods in stable storage order
    async fn food_pool(&self) -> AppResult<Vec<FoodCandidate>>;
}
