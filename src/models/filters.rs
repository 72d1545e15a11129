// ABOUTME: Filter schemas for recipe search and quick meal suggestion endpoints
// ABOUTME: Defines RecipeSearchFilters with min/max consistency checks and defaulted QuickMealFilters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

use serde::Serialize;
use serde_json::Value;

use crate::constants::{defaults, limits};
use crate::errors::{ValidationErrorKind, ValidationResult};
use crate::validation::{payload, ErrorCollector, FromPayload};

/// Optional filters for recipe search
///
/// Used when querying for similar recipes or searching the recipe
/// database. Every field is optional; a min/max pair is checked for
/// ordering only when both sides are present.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RecipeSearchFilters {
    /// Cuisine type filter (e.g. "Italian", "Indian")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Diet classification filter (e.g. "vegetarian", "vegan")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
    /// Minimum calories per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_calories: Option<u32>,
    /// Maximum calories per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_calories: Option<u32>,
    /// Minimum protein per serving, in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_protein: Option<f64>,
    /// Maximum protein per serving, in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_protein: Option<f64>,
}

const SEARCH_FILTER_FIELDS: &[&str] = &[
    "cuisine",
    "diet_type",
    "min_calories",
    "max_calories",
    "min_protein",
    "max_protein",
];

impl FromPayload for RecipeSearchFilters {
    fn from_value(value: &Value) -> ValidationResult<Self> {
        let map = payload::as_object(value)?;
        let mut errors = ErrorCollector::new();

        payload::reject_unknown_fields(map, SEARCH_FILTER_FIELDS, &mut errors);

        let cuisine = payload::optional_string(map, "cuisine", &mut errors);
        let diet_type = payload::optional_string(map, "diet_type", &mut errors);
        let min_calories = payload::optional_u32(map, "min_calories", &mut errors);
        let max_calories = payload::optional_u32(map, "max_calories", &mut errors);
        let min_protein = payload::optional_non_negative_f64(map, "min_protein", &mut errors);
        let max_protein = payload::optional_non_negative_f64(map, "max_protein", &mut errors);

        // Ordering is checked over the fully-parsed candidate: a max whose
        // own parse failed is already reported, and an absent sibling
        // skips the check rather than requiring both fields together.
        if let (Some(min), Some(max)) = (min_calories, max_calories) {
            if max < min {
                errors.push(
                    "max_calories",
                    ValidationErrorKind::Range,
                    "max_calories must be greater than min_calories",
                );
            }
        }
        if let (Some(min), Some(max)) = (min_protein, max_protein) {
            if max < min {
                errors.push(
                    "max_protein",
                    ValidationErrorKind::Range,
                    "max_protein must be greater than min_protein",
                );
            }
        }

        errors.into_result("RecipeSearchFilters")?;
        Ok(Self {
            cuisine,
            diet_type,
            min_calories,
            max_calories,
            min_protein,
            max_protein,
        })
    }
}

/// Filter parameters for quick, practical meal suggestions
///
/// Designed for users who want fast, budget-friendly recipes with minimal
/// ingredients, particularly students cooking in hostels or PGs with no
/// oven and little equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickMealFilters {
    /// Maximum preparation time in minutes
    pub max_prep_time: u32,
    /// Maximum number of ingredients
    pub max_ingredients: u32,
    /// Maximum cost per serving in INR
    pub max_cost: u32,
    /// Whether recipes must be hostel/PG-friendly
    pub hostel_friendly: bool,
    /// Optional cuisine filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Optional diet type filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
}

impl Default for QuickMealFilters {
    fn default() -> Self {
        Self {
            max_prep_time: defaults::QUICK_MAX_PREP_TIME_MINS,
            max_ingredients: defaults::QUICK_MAX_INGREDIENTS,
            max_cost: defaults::QUICK_MAX_COST_INR,
            hostel_friendly: defaults::QUICK_HOSTEL_FRIENDLY,
            cuisine: None,
            diet_type: None,
        }
    }
}

const QUICK_MEAL_FILTER_FIELDS: &[&str] = &[
    "max_prep_time",
    "max_ingredients",
    "max_cost",
    "hostel_friendly",
    "cuisine",
    "diet_type",
];

impl FromPayload for QuickMealFilters {
    fn from_value(value: &Value) -> ValidationResult<Self> {
        let map = payload::as_object(value)?;
        let mut errors = ErrorCollector::new();

        payload::reject_unknown_fields(map, QUICK_MEAL_FILTER_FIELDS, &mut errors);

        let max_prep_time = payload::optional_u32_in_range(
            map,
            "max_prep_time",
            limits::QUICK_PREP_TIME_MIN_MINS,
            limits::QUICK_PREP_TIME_MAX_MINS,
            &mut errors,
        )
        .unwrap_or(defaults::QUICK_MAX_PREP_TIME_MINS);
        let max_ingredients = payload::optional_u32_in_range(
            map,
            "max_ingredients",
            limits::QUICK_INGREDIENTS_MIN,
            limits::QUICK_INGREDIENTS_MAX,
            &mut errors,
        )
        .unwrap_or(defaults::QUICK_MAX_INGREDIENTS);
        let max_cost = payload::optional_u32_in_range(
            map,
            "max_cost",
            limits::QUICK_COST_MIN_INR,
            limits::QUICK_COST_MAX_INR,
            &mut errors,
        )
        .unwrap_or(defaults::QUICK_MAX_COST_INR);
        let hostel_friendly = payload::optional_bool(map, "hostel_friendly", &mut errors)
            .unwrap_or(defaults::QUICK_HOSTEL_FRIENDLY);
        let cuisine = payload::optional_string(map, "cuisine", &mut errors);
        let diet_type = payload::optional_string(map, "diet_type", &mut errors);

        errors.into_result("QuickMealFilters")?;
        Ok(Self {
            max_prep_time,
            max_ingredients,
            max_cost,
            hostel_friendly,
            cuisine,
            diet_type,
        })
    }
}
