// ABOUTME: Integration tests for the recipe search and quick meal filter schemas
// ABOUTME: Tests min/max consistency checks, numeric bounds, and default values
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! Tests for the filter schemas including:
//! - Calorie and protein min/max ordering checks
//! - Bound enforcement on quick meal parameters
//! - Default values when fields are omitted

use mealwise::errors::ValidationErrorKind;
use mealwise::models::{QuickMealFilters, RecipeSearchFilters};
use mealwise::validation::FromPayload;
use serde_json::json;

// ============================================================================
// Recipe Search Filter Tests
// ============================================================================

#[test]
fn test_empty_search_filters_are_all_unset() {
    let filters = RecipeSearchFilters::from_value(&json!({})).unwrap();
    assert_eq!(filters, RecipeSearchFilters::default());
}

#[test]
fn test_calorie_range_accepts_ordered_pair() {
    let filters = RecipeSearchFilters::from_value(&json!({
        "min_calories": 200,
        "max_calories": 600
    }))
    .unwrap();
    assert_eq!(filters.min_calories, Some(200));
    assert_eq!(filters.max_calories, Some(600));
}

#[test]
fn test_calorie_range_accepts_equal_pair() {
    let filters = RecipeSearchFilters::from_value(&json!({
        "min_calories": 400,
        "max_calories": 400
    }))
    .unwrap();
    assert_eq!(filters.min_calories, filters.max_calories);
}

#[test]
fn test_inverted_calorie_range_is_rejected() {
    let errors = RecipeSearchFilters::from_value(&json!({
        "min_calories": 600,
        "max_calories": 200
    }))
    .unwrap_err();
    assert!(errors.has_field("max_calories"));
    assert_eq!(
        errors.errors()[0].message,
        "max_calories must be greater than min_calories"
    );
}

#[test]
fn test_lone_bound_skips_the_ordering_check() {
    assert!(
        RecipeSearchFilters::from_value(&json!({ "max_calories": 10 })).is_ok(),
        "a max with no min has nothing to compare against"
    );
    assert!(RecipeSearchFilters::from_value(&json!({ "min_calories": 9000 })).is_ok());
}

#[test]
fn test_unparseable_min_suppresses_the_ordering_check() {
    let errors = RecipeSearchFilters::from_value(&json!({
        "min_calories": "lots",
        "max_calories": 5
    }))
    .unwrap_err();
    assert_eq!(
        errors.errors().len(),
        1,
        "only the type failure is reported; no ordering check runs against it"
    );
    assert!(errors.has_field("min_calories"));
}

#[test]
fn test_inverted_protein_range_is_rejected() {
    let errors = RecipeSearchFilters::from_value(&json!({
        "min_protein": 30.0,
        "max_protein": 12.5
    }))
    .unwrap_err();
    assert_eq!(
        errors.errors()[0].message,
        "max_protein must be greater than min_protein"
    );
}

#[test]
fn test_protein_accepts_integer_numbers() {
    let filters = RecipeSearchFilters::from_value(&json!({ "min_protein": 10 })).unwrap();
    assert!(
        (filters.min_protein.unwrap() - 10.0).abs() < f64::EPSILON,
        "integer payloads widen to float for protein fields"
    );
}

#[test]
fn test_negative_bounds_are_range_errors() {
    let errors = RecipeSearchFilters::from_value(&json!({
        "min_calories": -1,
        "min_protein": -0.5
    }))
    .unwrap_err();
    assert_eq!(errors.errors().len(), 2);
    for error in errors.errors() {
        assert_eq!(error.kind, ValidationErrorKind::Range);
    }
}

#[test]
fn test_fractional_calories_are_structural() {
    let errors = RecipeSearchFilters::from_value(&json!({ "min_calories": 2.5 })).unwrap_err();
    assert_eq!(errors.errors()[0].kind, ValidationErrorKind::Structural);
}

// ============================================================================
// Quick Meal Filter Tests
// ============================================================================

#[test]
fn test_empty_payload_yields_exact_defaults() {
    let filters = QuickMealFilters::from_value(&json!({})).unwrap();
    assert_eq!(filters.max_prep_time, 5);
    assert_eq!(filters.max_ingredients, 3);
    assert_eq!(filters.max_cost, 100);
    assert!(filters.hostel_friendly);
    assert_eq!(filters.cuisine, None);
    assert_eq!(filters.diet_type, None);
    assert_eq!(filters, QuickMealFilters::default());
}

#[test]
fn test_quick_meal_bounds_accept_the_edges() {
    let low = QuickMealFilters::from_value(&json!({
        "max_prep_time": 1,
        "max_ingredients": 1,
        "max_cost": 10
    }))
    .unwrap();
    assert_eq!((low.max_prep_time, low.max_ingredients, low.max_cost), (1, 1, 10));

    let high = QuickMealFilters::from_value(&json!({
        "max_prep_time": 30,
        "max_ingredients": 10,
        "max_cost": 500
    }))
    .unwrap();
    assert_eq!(
        (high.max_prep_time, high.max_ingredients, high.max_cost),
        (30, 10, 500)
    );
}

#[test]
fn test_quick_meal_bounds_reject_outside_values() {
    for (field, value) in [
        ("max_prep_time", 0),
        ("max_prep_time", 31),
        ("max_ingredients", 0),
        ("max_ingredients", 11),
        ("max_cost", 9),
        ("max_cost", 501),
    ] {
        let mut payload = serde_json::Map::new();
        payload.insert(field.to_owned(), json!(value));

        let errors =
            QuickMealFilters::from_value(&serde_json::Value::Object(payload)).unwrap_err();
        assert!(errors.has_field(field), "{field}={value} should be rejected");
        assert_eq!(errors.errors()[0].kind, ValidationErrorKind::Range);
    }
}

#[test]
fn test_quick_meal_overrides_apply() {
    let filters = QuickMealFilters::from_value(&json!({
        "max_prep_time": 15,
        "hostel_friendly": false,
        "cuisine": "Indian",
        "diet_type": "vegetarian"
    }))
    .unwrap();
    assert_eq!(filters.max_prep_time, 15);
    assert!(!filters.hostel_friendly);
    assert_eq!(filters.cuisine.as_deref(), Some("Indian"));
    assert_eq!(filters.diet_type.as_deref(), Some("vegetarian"));
    // Untouched fields keep their defaults
    assert_eq!(filters.max_ingredients, 3);
    assert_eq!(filters.max_cost, 100);
}

#[test]
fn test_non_boolean_hostel_friendly_is_structural() {
    let errors =
        QuickMealFilters::from_value(&json!({ "hostel_friendly": "yes" })).unwrap_err();
    assert_eq!(errors.errors()[0].kind, ValidationErrorKind::Structural);
}

#[test]
fn test_unknown_filter_fields_are_rejected() {
    let errors = QuickMealFilters::from_value(&json!({ "max_preptime": 5 })).unwrap_err();
    assert!(errors.has_field("max_preptime"));
}

#[test]
fn test_multiple_bound_violations_aggregate() {
    let errors = QuickMealFilters::from_value(&json!({
        "max_prep_time": 45,
        "max_ingredients": 0,
        "max_cost": 1000
    }))
    .unwrap_err();
    assert_eq!(errors.errors().len(), 3, "every violation reports at once");
}
