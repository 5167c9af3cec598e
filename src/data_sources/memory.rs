// ABOUTME: In-memory data source built programmatically or loaded from a JSON dataset file
// ABOUTME: Used for demos, fixtures, and tests; ledger totals are computed per calendar day

use super::NutritionDataSource;
use crate::errors::{self, AppError, AppResult};
use crate::models::{
    ConsumedAmounts, ConsumptionEntry, FoodCandidate, NutrientStandard, PatientId, PatientRecord,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Serialized dataset: the four collaborators in one JSON document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    /// Patient records
    #[serde(default)]
    pub patients: Vec<PatientRecord>,
    /// Consumption ledger entries
    #[serde(default)]
    pub consumption: Vec<ConsumptionEntry>,
    /// Reference standards table
    #[serde(default)]
    pub standards: Vec<NutrientStandard>,
    /// Candidate foods, in pool order
    #[serde(default)]
    pub foods: Vec<FoodCandidate>,
}

impl Dataset {
    /// Reject duplicate patient ids
    ///
    /// # Errors
    ///
    /// Returns a data-integrity fault naming the first duplicated id.
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        for patient in &self.patients {
            if !seen.insert(patient.patient_id) {
                return Err(AppError::data_integrity(format!(
                    "dataset lists patient {} more than once",
                    patient.patient_id
                ))
                .with_patient_id(patient.patient_id.0));
            }
        }
        Ok(())
    }
}

/// Data source backed by an immutable in-memory dataset
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    dataset: Arc<Dataset>,
}

impl InMemoryDataSource {
    /// Empty data source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a dataset
    ///
    /// # Errors
    ///
    /// Returns a data-integrity fault if the dataset fails validation.
    pub fn from_dataset(dataset: Dataset) -> AppResult<Self> {
        dataset.validate()?;
        Ok(Self {
            dataset: Arc::new(dataset),
        })
    }

    /// Parse a JSON dataset document
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON and a data-integrity
    /// fault if the dataset fails validation.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::from_dataset(dataset)
    }

    /// Load a JSON dataset file
    ///
    /// # Errors
    ///
    /// Returns a dependency-unavailable error if the file cannot be read, and
    /// the errors of [`InMemoryDataSource::from_json_str`] for its contents.
    pub async fn load_json(path: &Path) -> AppResult<Self> {
        let shown = path.display().to_string();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| errors::from_io(&shown, e))?;
        let source =
            Self::from_json_str(&contents).map_err(|e| e.with_resource_id(shown.clone()))?;

        info!(
            path = %shown,
            patients = source.dataset.patients.len(),
            standards = source.dataset.standards.len(),
            foods = source.dataset.foods.len(),
            "JSON dataset loaded"
        );
        Ok(source)
    }

    /// Borrow the underlying dataset
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

#[async_trait]
impl NutritionDataSource for InMemoryDataSource {
    async fn get_patient(&self, patient_id: PatientId) -> AppResult<Option<PatientRecord>> {
        Ok(self
            .dataset
            .patients
            .iter()
            .find(|p| p.patient_id == patient_id)
            .cloned())
    }

    async fn list_patients(&self) -> AppResult<Vec<PatientRecord>> {
        Ok(self.dataset.patients.clone())
    }

    #[instrument(skip(self), fields(source = "memory"))]
    async fn consumed_amounts(
        &self,
        patient_id: PatientId,
        date: NaiveDate,
    ) -> AppResult<ConsumedAmounts> {
        let mut totals = ConsumedAmounts::new();
        let mut entries = 0_usize;
        for entry in self
            .dataset
            .consumption
            .iter()
            .filter(|e| e.patient_id == patient_id && e.consumed_at.date() == date)
        {
            totals.add(&entry.nutrient_name, entry.amount);
            entries += 1;
        }
        debug!(entries, nutrients = totals.len(), "ledger window summed");
        Ok(totals)
    }

    async fn nutrient_standards(&self) -> AppResult<Vec<NutrientStandard>> {
        Ok(self.dataset.standards.clone())
    }

    async fn food_pool(&self) -> AppResult<Vec<FoodCandidate>> {
        Ok(self.dataset.foods.clone())
    }
}
