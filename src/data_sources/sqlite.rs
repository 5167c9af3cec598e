// ABOUTME: Read-only SQLite adapter over users, meals, ledger, standards, and food tables
// ABOUTME: Maps driver failures to dependency errors and malformed rows to integrity faults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `SQLite` data source
//!
//! Expects the relational layout below. The adapter never creates or
//! migrates tables.
//!
//! ```text
//! users(user_id, full_name, date_of_birth, gender, is_pregnant, is_lactating)
//! meals(meal_id, user_id, created_at, ...)
//! food_items(item_id, meal_id, ...)
//! consumed_micros(item_id, nutrient_name, amount, unit)
//! nutrient_standards(nutrient_name, gender, min_age_months, max_age_months,
//!                    condition, daily_value, unit)
//! recommendation_foods(food_name, calories, serving_grams, tags,
//!                      vitamin_a_mcg, ..., zinc_mg)
//! ```

use super::NutritionDataSource;
use crate::config::environment::DataSourceUrl;
use crate::errors::{self, AppError, AppResult};
use crate::models::{
    ConsumedAmounts, FoodCandidate, Gender, NutrientStandard, PatientId, PatientRecord,
    PhysiologicalCondition, StandardGender,
};
use crate::nutrients::NutrientKey;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

const PATIENT_COLUMNS: &str =
    "user_id, full_name, date_of_birth, gender, is_pregnant, is_lactating";

/// `SQLite`-backed data source
#[derive(Debug, Clone)]
pub struct SqliteDataSource {
    pool: SqlitePool,
}

impl SqliteDataSource {
    /// Open a pool for a `SQLite` URL.
    ///
    /// Files are opened read-only. An in-memory database is held on a
    /// single connection so every query sees the same tables.
    ///
    /// # Errors
    ///
    /// Returns a config error for a non-`SQLite` URL and a
    /// dependency-unavailable error if the database cannot be opened.
    pub async fn connect(url: &DataSourceUrl) -> AppResult<Self> {
        let pool = match url {
            DataSourceUrl::Memory => {
                let options = SqliteConnectOptions::from_str("sqlite::memory:")
                    .map_err(|e| errors::from_sqlx("parse sqlite url", e))?;
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None::<Duration>)
                    .max_lifetime(None::<Duration>)
                    .connect_with(options)
                    .await
            }
            DataSourceUrl::SQLite { path } => {
                let options = SqliteConnectOptions::new()
                    .filename(path)
                    .read_only(true);
                SqlitePoolOptions::new().connect_with(options).await
            }
            DataSourceUrl::Json { .. } => {
                return Err(AppError::config_invalid(format!(
                    "{url} is not a SQLite data source"
                )));
            }
        }
        .map_err(|e| errors::from_sqlx("open database", e))?;

        info!(url = %url, "SQLite data source connected");
        Ok(Self { pool })
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl NutritionDataSource for SqliteDataSource {
    #[instrument(skip(self), fields(source = "sqlite"))]
    async fn get_patient(&self, patient_id: PatientId) -> AppResult<Option<PatientRecord>> {
        let query = format!("SELECT {PATIENT_COLUMNS} FROM users WHERE user_id = ?");
        let row = sqlx::query(&query)
            .bind(patient_id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| errors::from_sqlx("get patient", e))?;

        row.as_ref().map(row_to_patient).transpose()
    }

    #[instrument(skip(self), fields(source = "sqlite"))]
    async fn list_patients(&self) -> AppResult<Vec<PatientRecord>> {
        let query = format!("SELECT {PATIENT_COLUMNS} FROM users ORDER BY user_id");
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| errors::from_sqlx("list patients", e))?;

        rows.iter().map(row_to_patient).collect()
    }

    #[instrument(skip(self), fields(source = "sqlite"))]
    async fn consumed_amounts(
        &self,
        patient_id: PatientId,
        date: NaiveDate,
    ) -> AppResult<ConsumedAmounts> {
        let rows = sqlx::query(
            r"
            SELECT cm.nutrient_name AS nutrient_name, cm.amount AS amount
            FROM consumed_micros cm
            JOIN food_items fi ON cm.item_id = fi.item_id
            JOIN meals m ON fi.meal_id = m.meal_id
            WHERE m.user_id = ? AND date(m.created_at) = ?
            ",
        )
        .bind(patient_id.0)
        .bind(date.format("%Y-%m-%d").to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| errors::from_sqlx("sum consumption", e))?;

        let mut totals = ConsumedAmounts::new();
        for row in &rows {
            let name: Option<String> = row
                .try_get("nutrient_name")
                .map_err(|e| errors::from_sqlx("sum consumption", e))?;
            let amount = get_number(row, "amount")?;
            // NULLs contribute nothing, as in SUM()
            if let (Some(name), Some(amount)) = (name, amount) {
                totals.add(&name, amount);
            }
        }

        debug!(entries = rows.len(), nutrients = totals.len(), "ledger window summed");
        Ok(totals)
    }

    #[instrument(skip(self), fields(source = "sqlite"))]
    async fn nutrient_standards(&self) -> AppResult<Vec<NutrientStandard>> {
        let rows = sqlx::query(
            r"
            SELECT nutrient_name, gender, min_age_months, max_age_months,
                   condition, daily_value, unit
            FROM nutrient_standards
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| errors::from_sqlx("load standards", e))?;

        rows.iter().map(row_to_standard).collect()
    }

    #[instrument(skip(self), fields(source = "sqlite"))]
    async fn food_pool(&self) -> AppResult<Vec<FoodCandidate>> {
        let rows = sqlx::query("SELECT * FROM recommendation_foods ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| errors::from_sqlx("load food pool", e))?;

        let foods = rows.iter().map(row_to_food).collect::<AppResult<Vec<_>>>()?;
        debug!(foods = foods.len(), "food pool loaded");
        Ok(foods)
    }
}

fn get<'r, T>(row: &'r SqliteRow, column: &str) -> AppResult<T>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column)
        .map_err(|e| errors::from_sqlx(&format!("read column '{column}'"), e))
}

/// Read a numeric column that may be declared `REAL` or `INTEGER`.
///
/// `SQLite` keeps whole numbers in integer columns as integers, so a failed
/// `f64` decode is retried as `i64` before it counts as malformed data.
fn get_number(row: &SqliteRow, column: &str) -> AppResult<Option<f64>> {
    match row.try_get::<Option<f64>, _>(column) {
        Ok(value) => Ok(value),
        Err(sqlx::Error::ColumnDecode { .. }) => row
            .try_get::<Option<i64>, _>(column)
            .map(|value| value.map(|whole| whole as f64))
            .map_err(|e| errors::from_sqlx(&format!("read column '{column}'"), e)),
        Err(e) => Err(errors::from_sqlx(&format!("read column '{column}'"), e)),
    }
}

/// Like [`get_number`] for columns that must not be NULL
fn require_number(row: &SqliteRow, column: &str, owner: &str) -> AppResult<f64> {
    get_number(row, column)?.ok_or_else(|| {
        AppError::data_integrity(format!("'{owner}' has NULL {column}"))
            .with_resource_id(owner.to_owned())
    })
}

fn row_to_patient(row: &SqliteRow) -> AppResult<PatientRecord> {
    let patient_id = PatientId(get(row, "user_id")?);
    let gender_str: Option<String> = get(row, "gender")?;
    let gender = gender_str
        .as_deref()
        .and_then(Gender::parse)
        .ok_or_else(|| {
            AppError::data_integrity(format!(
                "patient has unrecognised gender {gender_str:?}"
            ))
            .with_patient_id(patient_id.0)
        })?;

    Ok(PatientRecord {
        patient_id,
        full_name: get(row, "full_name")?,
        gender,
        date_of_birth: get(row, "date_of_birth")?,
        age_months: None,
        is_pregnant: get::<Option<bool>>(row, "is_pregnant")?.unwrap_or(false),
        is_lactating: get::<Option<bool>>(row, "is_lactating")?.unwrap_or(false),
    })
}

fn row_to_standard(row: &SqliteRow) -> AppResult<NutrientStandard> {
    let nutrient_name: String = get(row, "nutrient_name")?;
    let integrity = |what: String| {
        AppError::data_integrity(format!("standard '{nutrient_name}' {what}"))
            .with_resource_id(nutrient_name.clone())
    };

    let gender_str: String = get(row, "gender")?;
    let gender = StandardGender::parse(&gender_str)
        .ok_or_else(|| integrity(format!("has unrecognised gender '{gender_str}'")))?;
    let condition_str: String = get(row, "condition")?;
    let condition = PhysiologicalCondition::parse(&condition_str)
        .ok_or_else(|| integrity(format!("has unrecognised condition '{condition_str}'")))?;
    let min_age: i64 = get(row, "min_age_months")?;
    let max_age: i64 = get(row, "max_age_months")?;
    let min_age_months = u32::try_from(min_age)
        .map_err(|_| integrity(format!("has invalid min_age_months {min_age}")))?;
    let max_age_months = u32::try_from(max_age)
        .map_err(|_| integrity(format!("has invalid max_age_months {max_age}")))?;

    Ok(NutrientStandard {
        gender,
        min_age_months,
        max_age_months,
        condition,
        daily_value: require_number(row, "daily_value", &nutrient_name)?,
        unit: get::<Option<String>>(row, "unit")?.unwrap_or_default(),
        nutrient_name,
    })
}

fn row_to_food(row: &SqliteRow) -> AppResult<FoodCandidate> {
    let food_name: String = get(row, "food_name")?;

    let mut nutrients = BTreeMap::new();
    for key in NutrientKey::ALL {
        let amount = require_number(row, key.column_name(), &food_name)
            .map_err(|e| e.with_resource_id(food_name.clone()))?;
        nutrients.insert(key, amount);
    }

    let tags: Option<String> = get(row, "tags")?;

    Ok(FoodCandidate {
        calories: require_number(row, "calories", &food_name)?,
        serving_grams: require_number(row, "serving_grams", &food_name)?,
        tags: tags.as_deref().map(parse_tags).unwrap_or_default(),
        nutrients,
        food_name,
    })
}

/// Tags are stored either as a JSON array or a comma-separated list
fn parse_tags(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        if let Ok(tags) = serde_json::from_str::<Vec<String>>(trimmed) {
            return tags;
        }
    }
    trimmed
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_accept_json_and_comma_lists() {
        assert_eq!(parse_tags(r#"["vegan", "iron"]"#), vec!["vegan", "iron"]);
        assert_eq!(parse_tags("vegan, iron ,"), vec!["vegan", "iron"]);
        assert!(parse_tags("  ").is_empty());
    }
}
