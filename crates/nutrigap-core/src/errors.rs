// ABOUTME: Unified error type and error codes shared by every NutriGap crate
// ABOUTME: Separates missing resources, data-integrity faults, and unavailable dependencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. The error
//! code tells callers which class of failure occurred:
//!
//! - [`ErrorCode::ResourceNotFound`] - an unknown patient or other entity
//! - [`ErrorCode::DataIntegrityFault`] - reference data is malformed (missing
//!   nutrient fields, negative magnitudes, conflicting standards)
//! - [`ErrorCode::DependencyUnavailable`] - a storage collaborator failed
//!
//! An empty deficiency map or an empty recommendation list is never an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Resource Management (4000-4999)
    /// Requested resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Reference Data (5000-5999)
    /// Reference data violates a structural invariant
    #[serde(rename = "DATA_INTEGRITY_FAULT")]
    DataIntegrityFault = 5000,
    /// A data collaborator could not be reached or failed mid-query
    #[serde(rename = "DEPENDENCY_UNAVAILABLE")]
    DependencyUnavailable = 5001,

    // Configuration (6000-6999)
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ResourceNotFound => "The requested resource was not found",
            Self::DataIntegrityFault => "Reference data failed an integrity check",
            Self::DependencyUnavailable => "A data dependency is currently unavailable",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Patient identifier if the failure concerns one patient
    pub patient_id: Option<i64>,
    /// Resource identifier (food name, nutrient name, table)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            patient_id: None,
            resource_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a patient ID to the error context
    #[must_use]
    pub const fn with_patient_id(mut self, patient_id: i64) -> Self {
        self.context.patient_id = Some(patient_id);
        self
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// True when the error reports an unknown resource
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::ResourceNotFound
    }

    /// True when reference data failed an integrity check
    #[must_use]
    pub fn is_data_integrity_fault(&self) -> bool {
        self.code == ErrorCode::DataIntegrityFault
    }

    /// True when a data collaborator was unavailable
    #[must_use]
    pub fn is_dependency_unavailable(&self) -> bool {
        self.code == ErrorCode::DependencyUnavailable
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error response for CLI and API consumers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Error code
    pub code: ErrorCode,
    /// Error message
    pub message: String,
    /// Patient the error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i64>,
    /// Resource the error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Extra structured context
    #[serde(skip_serializing_if = "is_empty_details")]
    pub details: serde_json::Value,
}

fn is_empty_details(details: &serde_json::Value) -> bool {
    details.is_null() || details.as_object().is_some_and(serde_json::Map::is_empty)
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                patient_id: error.context.patient_id,
                resource_id: error.context.resource_id,
                details: error.context.details,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Reference data integrity fault
    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DataIntegrityFault, message)
    }

    /// Data dependency unavailable
    pub fn dependency_unavailable(dependency: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DependencyUnavailable,
            format!("{}: {}", dependency.into(), message.into()),
        )
    }

    /// Invalid configuration
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes_are_distinguishable() {
        let missing = AppError::not_found("Patient 7").with_patient_id(7);
        let fault = AppError::data_integrity("food 'Kale' lacks iron_mg");
        let down = AppError::dependency_unavailable("sqlite", "pool closed");

        assert!(missing.is_not_found());
        assert!(!missing.is_dependency_unavailable());
        assert!(fault.is_data_integrity_fault());
        assert!(down.is_dependency_unavailable());
        assert_eq!(missing.context.patient_id, Some(7));
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::not_found("Patient 3");
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Patient 3 not found"
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::data_integrity("negative calories")
            .with_resource_id("Spinach")
            .with_details(serde_json::json!({ "calories": -4.0 }));
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("DATA_INTEGRITY_FAULT"));
        assert!(json.contains("Spinach"));
        assert!(json.contains("calories"));
    }

    #[test]
    fn test_error_response_carries_patient_and_omits_empty_details() {
        let error = AppError::not_found("Patient 7").with_patient_id(7);
        let value = serde_json::to_value(ErrorResponse::from(error)).unwrap();

        assert_eq!(value["error"]["code"], "RESOURCE_NOT_FOUND");
        assert_eq!(value["error"]["patient_id"], 7);
        assert!(value["error"].get("details").is_none());
        assert!(value["error"].get("resource_id").is_none());
    }
}
