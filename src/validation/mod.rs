// ABOUTME: Field validation toolkit shared by every schema type
// ABOUTME: Defines FromPayload, the ErrorCollector, and common normalizers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! # Validation Toolkit
//!
//! The machinery behind every schema constructor: a trait for building
//! typed requests from untyped JSON, an error collector that aggregates
//! every failure from one construction pass, and the normalizers shared
//! across fields. Validation is stateless and synchronous; each call is
//! independent and has no side effects beyond a `debug` log on failure.

pub(crate) mod payload;

use serde_json::Value;
use tracing::debug;

use crate::constants::limits;
use crate::errors::{FieldError, ValidationErrorKind, ValidationErrors, ValidationResult};

/// Construction of a typed request from an untyped JSON payload
///
/// Implementors run a single validation pass: structural extraction and
/// field validators record every failure, and either a fully normalized
/// immutable object or the aggregated [`ValidationErrors`] comes back.
pub trait FromPayload: Sized {
    /// Construct from a parsed JSON value
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] naming every offending field when the
    /// payload is malformed.
    fn from_value(value: &Value) -> ValidationResult<Self>;

    /// Construct from a raw JSON string
    ///
    /// # Errors
    ///
    /// Returns a single root-level structural error when the input is not
    /// valid JSON, otherwise whatever [`FromPayload::from_value`] returns.
    fn from_json_str(raw: &str) -> ValidationResult<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|e| {
            ValidationErrors::single(
                "$",
                ValidationErrorKind::Structural,
                format!("Payload is not valid JSON: {e}"),
            )
        })?;
        Self::from_value(&value)
    }
}

/// Accumulates field errors across one construction pass
///
/// Validators never abort early; they record into the collector so a single
/// response can name every problem at once.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<FieldError>,
}

impl ErrorCollector {
    /// Create an empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field failure
    pub fn push(
        &mut self,
        field: impl Into<String>,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) {
        self.errors.push(FieldError::new(field, kind, message));
    }

    /// Check whether any failure has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Close the pass: `Ok(())` when clean, the aggregate otherwise
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] carrying every recorded failure.
    pub fn into_result(self, schema: &'static str) -> ValidationResult<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let errors = ValidationErrors::from_errors(self.errors);
        debug!(
            schema,
            fields = ?errors.fields(),
            "payload failed validation"
        );
        Err(errors)
    }
}

/// Trim every entry of a string list, silently dropping blank entries
///
/// Order and duplicates are preserved. Whether the resulting list may be
/// empty is the caller's decision; only `FullAnalysisRequest.ingredients`
/// rejects an empty result.
#[must_use]
pub fn normalize_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        })
        .collect()
}

/// Check a score value against the closed 0-100 range
///
/// NaN is outside the range and fails like any other out-of-bounds value.
pub fn check_score(field: &str, value: f64, errors: &mut ErrorCollector) {
    if !(limits::SCORE_MIN..=limits::SCORE_MAX).contains(&value) {
        errors.push(
            field,
            ValidationErrorKind::Range,
            format!(
                "Must be between {} and {}",
                limits::SCORE_MIN,
                limits::SCORE_MAX
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_entries_trims_and_drops_blanks() {
        let normalized = normalize_entries(vec![
            "  rice ".to_owned(),
            "   ".to_owned(),
            String::new(),
            "dal".to_owned(),
        ]);
        assert_eq!(normalized, vec!["rice".to_owned(), "dal".to_owned()]);
    }

    #[test]
    fn test_normalize_entries_keeps_order_and_duplicates() {
        let normalized = normalize_entries(vec!["salt".to_owned(), "salt".to_owned()]);
        assert_eq!(normalized, vec!["salt".to_owned(), "salt".to_owned()]);
    }

    #[test]
    fn test_check_score_bounds() {
        let mut clean = ErrorCollector::new();
        check_score("health_score", 0.0, &mut clean);
        check_score("health_score", 100.0, &mut clean);
        assert!(clean.is_empty());

        let mut dirty = ErrorCollector::new();
        check_score("health_score", 100.000_1, &mut dirty);
        check_score("similarity_score", -0.1, &mut dirty);
        check_score("relevance_score", f64::NAN, &mut dirty);
        assert_eq!(dirty.errors.len(), 3);
    }
}
