// ABOUTME: Patient identity, demographic profile, and the canonical age-in-months formula
// ABOUTME: Resolves stored patient records into the profile used to select standards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::calendar::MONTHS_PER_YEAR;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque patient identifier assigned by upstream storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub i64);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PatientId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Patient gender as recorded for reference-standard selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Parse a stored gender value, case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }

    /// Lowercase storage form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Physiological condition that selects a family of reference standards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PhysiologicalCondition {
    /// No special condition
    #[default]
    Normal,
    /// Pregnant
    Pregnancy,
    /// Lactating
    Lactation,
}

impl PhysiologicalCondition {
    /// Resolve the stored flags into one condition.
    ///
    /// Pregnancy takes precedence when both flags are set.
    #[must_use]
    pub const fn from_flags(is_pregnant: bool, is_lactating: bool) -> Self {
        if is_pregnant {
            Self::Pregnancy
        } else if is_lactating {
            Self::Lactation
        } else {
            Self::Normal
        }
    }

    /// Parse a stored condition value, case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "pregnancy" => Some(Self::Pregnancy),
            "lactation" => Some(Self::Lactation),
            _ => None,
        }
    }

    /// Lowercase storage form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Pregnancy => "pregnancy",
            Self::Lactation => "lactation",
        }
    }
}

/// Demographic profile used to select applicable reference standards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientProfile {
    /// Patient gender
    pub gender: Gender,
    /// Age in whole months at the reference date
    pub age_months: u32,
    /// Active physiological condition
    pub condition: PhysiologicalCondition,
}

/// Patient record as stored upstream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientRecord {
    /// Patient identifier
    pub patient_id: PatientId,
    /// Display name, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Gender
    pub gender: Gender,
    /// Date of birth; preferred source of age
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Pre-computed age, used only when no date of birth is recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_months: Option<u32>,
    /// Pregnancy flag
    #[serde(default)]
    pub is_pregnant: bool,
    /// Lactation flag
    #[serde(default)]
    pub is_lactating: bool,
}

impl PatientRecord {
    /// Resolve this record into a profile as of `reference_date`
    ///
    /// # Errors
    ///
    /// Returns a data-integrity fault when the record has neither a date of
    /// birth nor an age, or when the birth date lies after the reference date.
    pub fn profile_at(&self, reference_date: NaiveDate) -> AppResult<PatientProfile> {
        let age_months = match (self.date_of_birth, self.age_months) {
            (Some(dob), _) => age_in_months(dob, reference_date)
                .map_err(|e| e.with_patient_id(self.patient_id.0))?,
            (None, Some(age)) => age,
            (None, None) => {
                return Err(AppError::data_integrity(
                    "patient record has neither date_of_birth nor age_months",
                )
                .with_patient_id(self.patient_id.0));
            }
        };

        Ok(PatientProfile {
            gender: self.gender,
            age_months,
            condition: PhysiologicalCondition::from_flags(self.is_pregnant, self.is_lactating),
        })
    }
}

/// Age in whole calendar months between `date_of_birth` and `reference_date`.
///
/// Counts completed months: year difference times twelve plus month
/// difference, minus one when the reference day-of-month has not yet reached
/// the birth day-of-month.
///
/// # Errors
///
/// Returns a data-integrity fault if the birth date is after the reference date.
pub fn age_in_months(date_of_birth: NaiveDate, reference_date: NaiveDate) -> AppResult<u32> {
    if date_of_birth > reference_date {
        return Err(AppError::data_integrity(format!(
            "date of birth {date_of_birth} is after reference date {reference_date}"
        )));
    }

    let years = reference_date.year() - date_of_birth.year();
    let months = reference_date.month() as i32 - date_of_birth.month() as i32;
    let mut total = years * MONTHS_PER_YEAR + months;
    if reference_date.day() < date_of_birth.day() {
        total -= 1;
    }

    u32::try_from(total.max(0))
        .map_err(|_| AppError::internal(format!("age in months out of range: {total}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    #[test]
    fn test_age_counts_completed_months() {
        assert_eq!(age_in_months(date(1996, 5, 20), date(2026, 5, 20)).ok(), Some(360));
        assert_eq!(age_in_months(date(1996, 5, 20), date(2026, 5, 19)).ok(), Some(359));
        assert_eq!(age_in_months(date(2024, 1, 31), date(2024, 2, 29)).ok(), Some(0));
        assert_eq!(age_in_months(date(2024, 1, 15), date(2024, 1, 15)).ok(), Some(0));
    }

    #[test]
    fn test_future_birth_date_is_a_fault() {
        let err = age_in_months(date(2030, 1, 1), date(2026, 1, 1)).unwrap_err();
        assert!(err.is_data_integrity_fault());
    }

    #[test]
    fn test_pregnancy_wins_over_lactation() {
        assert_eq!(
            PhysiologicalCondition::from_flags(true, true),
            PhysiologicalCondition::Pregnancy
        );
        assert_eq!(
            PhysiologicalCondition::from_flags(false, true),
            PhysiologicalCondition::Lactation
        );
        assert_eq!(
            PhysiologicalCondition::from_flags(false, false),
            PhysiologicalCondition::Normal
        );
    }

    #[test]
    fn test_record_without_age_source_is_a_fault() {
        let record = PatientRecord {
            patient_id: PatientId(9),
            full_name: None,
            gender: Gender::Female,
            date_of_birth: None,
            age_months: None,
            is_pregnant: false,
            is_lactating: false,
        };
        let err = record.profile_at(date(2026, 1, 1)).unwrap_err();
        assert!(err.is_data_integrity_fault());
        assert_eq!(err.context.patient_id, Some(9));
    }
}
