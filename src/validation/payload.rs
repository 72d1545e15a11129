// ABOUTME: One-pass field extraction from untyped JSON payloads
// ABOUTME: Typed accessors that record structural and range errors instead of aborting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! Typed field accessors over `serde_json::Value`.
//!
//! Each accessor pulls one declared field out of the payload object and
//! records a failure into the shared [`ErrorCollector`] when the field is
//! missing, has the wrong primitive type, or carries an out-of-range
//! number. Accessors never abort the pass; the caller closes the collector
//! once every field has been visited.

use serde_json::{Map, Value};

use super::ErrorCollector;
use crate::errors::{ValidationErrorKind, ValidationErrors, ValidationResult};

/// Require the payload root to be a JSON object
pub(crate) fn as_object(value: &Value) -> ValidationResult<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        ValidationErrors::single(
            "$",
            ValidationErrorKind::Structural,
            "Expected a JSON object",
        )
    })
}

/// Record one structural error per key not declared by the schema
///
/// Request payloads are strict: a misspelled or extra key is rejected
/// rather than silently ignored.
pub(crate) fn reject_unknown_fields(
    map: &Map<String, Value>,
    allowed: &[&str],
    errors: &mut ErrorCollector,
) {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            errors.push(
                key.clone(),
                ValidationErrorKind::Structural,
                "Unknown field",
            );
        }
    }
}

/// Extract a required string field
pub(crate) fn required_string(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ErrorCollector,
) -> Option<String> {
    match map.get(field) {
        None => {
            errors.push(
                field,
                ValidationErrorKind::Structural,
                "Missing required field",
            );
            None
        }
        Some(value) => value.as_str().map_or_else(
            || {
                errors.push(field, ValidationErrorKind::Structural, "Expected a string");
                None
            },
            |s| Some(s.to_owned()),
        ),
    }
}

/// Extract an optional string field; absent and `null` both mean "not given"
pub(crate) fn optional_string(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ErrorCollector,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => value.as_str().map_or_else(
            || {
                errors.push(field, ValidationErrorKind::Structural, "Expected a string");
                None
            },
            |s| Some(s.to_owned()),
        ),
    }
}

/// Extract an optional list of strings
///
/// Every element must be a string; offending elements are reported by
/// index (`field[2]`).
pub(crate) fn optional_string_list(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ErrorCollector,
) -> Option<Vec<String>> {
    let value = match map.get(field) {
        None | Some(Value::Null) => return None,
        Some(value) => value,
    };

    let Some(entries) = value.as_array() else {
        errors.push(
            field,
            ValidationErrorKind::Structural,
            "Expected an array of strings",
        );
        return None;
    };

    let mut strings = Vec::with_capacity(entries.len());
    let mut malformed = false;
    for (index, entry) in entries.iter().enumerate() {
        if let Some(s) = entry.as_str() {
            strings.push(s.to_owned());
        } else {
            errors.push(
                format!("{field}[{index}]"),
                ValidationErrorKind::Structural,
                "Expected a string",
            );
            malformed = true;
        }
    }

    if malformed {
        None
    } else {
        Some(strings)
    }
}

/// Extract an optional non-negative integer field
///
/// Only JSON integers are accepted; a fractional number is a structural
/// error and a negative value is a range error.
pub(crate) fn optional_u32(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ErrorCollector,
) -> Option<u32> {
    let value = match map.get(field) {
        None | Some(Value::Null) => return None,
        Some(value) => value,
    };

    let Value::Number(number) = value else {
        errors.push(field, ValidationErrorKind::Structural, "Expected an integer");
        return None;
    };

    if let Some(signed) = number.as_i64() {
        if signed < 0 {
            errors.push(
                field,
                ValidationErrorKind::Range,
                "Must be greater than or equal to 0",
            );
            return None;
        }
        return u32::try_from(signed).map_or_else(
            |_| {
                errors.push(field, ValidationErrorKind::Range, "Value is too large");
                None
            },
            Some,
        );
    }

    if number.as_u64().is_some() {
        // Integral but beyond i64::MAX
        errors.push(field, ValidationErrorKind::Range, "Value is too large");
    } else {
        errors.push(field, ValidationErrorKind::Structural, "Expected an integer");
    }
    None
}

/// Extract an optional integer field constrained to a closed range
pub(crate) fn optional_u32_in_range(
    map: &Map<String, Value>,
    field: &str,
    min: u32,
    max: u32,
    errors: &mut ErrorCollector,
) -> Option<u32> {
    let value = optional_u32(map, field, errors)?;
    if (min..=max).contains(&value) {
        Some(value)
    } else {
        errors.push(
            field,
            ValidationErrorKind::Range,
            format!("Must be between {min} and {max}"),
        );
        None
    }
}

/// Extract an optional non-negative float field; integers widen to float
pub(crate) fn optional_non_negative_f64(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ErrorCollector,
) -> Option<f64> {
    let value = match map.get(field) {
        None | Some(Value::Null) => return None,
        Some(value) => value,
    };

    let Some(number) = value.as_f64() else {
        errors.push(field, ValidationErrorKind::Structural, "Expected a number");
        return None;
    };

    if number < 0.0 {
        errors.push(
            field,
            ValidationErrorKind::Range,
            "Must be greater than or equal to 0",
        );
        return None;
    }
    Some(number)
}

/// Extract an optional boolean field
pub(crate) fn optional_bool(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut ErrorCollector,
) -> Option<bool> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => value.as_bool().map_or_else(
            || {
                errors.push(field, ValidationErrorKind::Structural, "Expected a boolean");
                None
            },
            Some,
        ),
    }
}
