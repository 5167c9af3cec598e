// ABOUTME: Data-source factory selecting an adapter from a parsed data-source URL
// ABOUTME: Delegates every port operation to the in-memory or SQLite implementation
//! Data-source factory
//!
//! Picks the adapter from a [`DataSourceUrl`] so callers hold one concrete
//! type regardless of where data lives.

use super::memory::InMemoryDataSource;
use super::sqlite::SqliteDataSource;
use super::NutritionDataSource;
use crate::config::environment::DataSourceUrl;
use crate::errors::AppResult;
use crate::models::{ConsumedAmounts, FoodCandidate, NutrientStandard, PatientId, PatientRecord};
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info};

/// Data-source instance wrapper that delegates to the selected adapter
#[derive(Debug, Clone)]
pub enum DataSource {
    /// In-memory dataset, usually loaded from JSON
    Memory(InMemoryDataSource),
    /// `SQLite` database
    Sqlite(SqliteDataSource),
}

impl DataSource {
    /// Open the adapter for `url`
    ///
    /// # Errors
    ///
    /// Returns a dependency-unavailable error if the backing store cannot be
    /// opened, and a serialization or data-integrity error for a malformed
    /// JSON dataset.
    pub async fn connect(url: &DataSourceUrl) -> AppResult<Self> {
        debug!("Selecting data source for {}", url);
        let source = match url {
            DataSourceUrl::Json { path } => Self::Memory(InMemoryDataSource::load_json(path).await?),
            DataSourceUrl::SQLite { .. } | DataSourceUrl::Memory => {
                Self::Sqlite(SqliteDataSource::connect(url).await?)
            }
        };
        info!("Data source ready: {}", source.backend_info());
        Ok(source)
    }

    /// Get a descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "in-memory dataset",
            Self::Sqlite(_) => "SQLite",
        }
    }
}

impl From<InMemoryDataSource> for DataSource {
    fn from(source: InMemoryDataSource) -> Self {
        Self::Memory(source)
    }
}

impl From<SqliteDataSource> for DataSource {
    fn from(source: SqliteDataSource) -> Self {
        Self::Sqlite(source)
    }
}

#[async_trait]
impl NutritionDataSource for DataSource {
    async fn get_patient(&self, patient_id: PatientId) -> AppResult<Option<PatientRecord>> {
        match self {
            Self::Memory(db) => db.get_patient(patient_id).await,
            Self::Sqlite(db) => db.get_patient(patient_id).await,
        }
    }

    async fn list_patients(&self) -> AppResult<Vec<PatientRecord>> {
        match self {
            Self::Memory(db) => db.list_patients().await,
            Self::Sqlite(db) => db.list_patients().await,
        }
    }

    async fn consumed_amounts(
        &self,
        patient_id: PatientId,
        date: NaiveDate,
    ) -> AppResult<ConsumedAmounts> {
        match self {
            Self::Memory(db) => db.consumed_amounts(patient_id, date).await,
            Self::Sqlite(db) => db.consumed_amounts(patient_id, date).await,
        }
    }

    async fn nutrient_standards(&self) -> AppResult<Vec<NutrientStandard>> {
        match self {
            Self::Memory(db) => db.nutrient_standards().await,
            Self::Sqlite(db) => db.nutrient_standards().await,
        }
    }

    async fn food_pool(&self) -> AppResult<Vec<FoodCandidate>> {
        match self {
            Self::Memory(db) => db.food_pool().await,
            Self::Sqlite(db) => db.food_pool().await,
        }
    }
}
