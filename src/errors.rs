// ABOUTME: Validation failure taxonomy and aggregated error reporting for payload construction
// ABOUTME: Defines ValidationErrorKind, FieldError, ValidationErrors, and the HTTP error envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! # Validation Errors
//!
//! Centralized error handling for the schema layer. A failed payload
//! construction surfaces a single [`ValidationErrors`] value carrying one
//! [`FieldError`] per offending field. The transport layer translates the
//! aggregate into a client-facing response via [`ErrorResponse`]; nothing in
//! this crate is fatal to the process and nothing is recovered internally.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of a single field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Missing required field, wrong primitive type, or unknown field
    #[serde(rename = "STRUCTURAL")]
    Structural,
    /// Numeric value outside its declared bounds, or a max/min ordering violation
    #[serde(rename = "RANGE")]
    Range,
    /// Value not in a fixed allowed set
    #[serde(rename = "ENUM_MEMBERSHIP")]
    EnumMembership,
    /// Required string or list empty after normalization
    #[serde(rename = "EMPTY_VALUE")]
    EmptyValue,
}

impl ValidationErrorKind {
    /// Get a user-friendly description of this error kind
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Structural => "The payload is structurally invalid",
            Self::Range => "A value is outside its acceptable range",
            Self::EnumMembership => "A value is not in the set of allowed values",
            Self::EmptyValue => "A required value is empty",
        }
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path of the offending field (e.g. `recipe_name`, `allergens[2]`)
    pub field: String,
    /// Failure classification
    pub kind: ValidationErrorKind,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(
        field: impl Into<String>,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Aggregated validation failure for one payload construction
///
/// Holds at least one [`FieldError`]. Independent field failures from the
/// same construction pass are collected here rather than reported one at a
/// time, so a client can fix every problem in a single round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Build an aggregate from collected field errors
    ///
    /// The slice must be non-empty; an empty collection means the payload
    /// was valid and no error value should exist at all.
    #[must_use]
    pub(crate) fn from_errors(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty(), "valid payloads produce no error value");
        Self { errors }
    }

    /// Build an aggregate holding a single field error
    #[must_use]
    pub fn single(
        field: impl Into<String>,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            errors: vec![FieldError::new(field, kind, message)],
        }
    }

    /// All field errors, in the order they were recorded
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Paths of every offending field, in recording order
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    /// Check whether any recorded error concerns the given field path
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Get the HTTP status code for this error
    ///
    /// Every validation failure is a client error on the single request
    /// being constructed.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        400
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request validation failed: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Result type alias for payload construction
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload wrapper
    pub error: ErrorResponseDetails,
}

/// Body of the HTTP error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Summary message for the whole failure
    pub message: String,
    /// Per-field failure details
    pub errors: Vec<FieldError>,
}

impl From<ValidationErrors> for ErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            error: ErrorResponseDetails {
                message: "Request validation failed".to_owned(),
                errors: errors.errors,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_is_client_error() {
        let errors = ValidationErrors::single(
            "recipe_name",
            ValidationErrorKind::EmptyValue,
            "Recipe name cannot be empty",
        );
        assert_eq!(errors.http_status(), 400);
    }

    #[test]
    fn test_display_joins_field_errors() {
        let errors = ValidationErrors::from_errors(vec![
            FieldError::new(
                "recipe_name",
                ValidationErrorKind::EmptyValue,
                "Recipe name cannot be empty",
            ),
            FieldError::new(
                "max_calories",
                ValidationErrorKind::Range,
                "max_calories must be greater than min_calories",
            ),
        ]);

        let rendered = errors.to_string();
        assert!(rendered.contains("recipe_name: Recipe name cannot be empty"));
        assert!(rendered.contains("; max_calories:"));
    }

    #[test]
    fn test_error_response_serialization() {
        let errors = ValidationErrors::single(
            "allergens[0]",
            ValidationErrorKind::EnumMembership,
            "Invalid allergen 'sesame'",
        );
        let response = ErrorResponse::from(errors);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ENUM_MEMBERSHIP"));
        assert!(json.contains("allergens[0]"));
        assert!(json.contains("Request validation failed"));
    }

    #[test]
    fn test_has_field() {
        let errors = ValidationErrors::single(
            "ingredients",
            ValidationErrorKind::EmptyValue,
            "Ingredients list cannot be empty if provided",
        );
        assert!(errors.has_field("ingredients"));
        assert!(!errors.has_field("recipe_name"));
    }
}
