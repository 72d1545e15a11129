// ABOUTME: Request schemas for the recipe analysis endpoints
// ABOUTME: Defines AnalysisRequest, FullAnalysisRequest, and the Allergen vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::limits;
use crate::errors::{ValidationErrorKind, ValidationResult};
use crate::validation::{normalize_entries, payload, ErrorCollector, FromPayload};

/// Allergen categories a user can declare sensitivity to
///
/// The vocabulary is closed: any value outside this set is rejected at
/// construction, naming the offending value and listing the full set.
/// Input is trimmed and lowercased before matching, so `" Milk "` and
/// `"milk"` are the same allergen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    /// Hen eggs
    Eggs,
    /// Fish (fin fish)
    Fish,
    /// Milk and other dairy
    Milk,
    /// Peanuts
    Peanuts,
    /// Crustacean shellfish
    Shellfish,
    /// Soybeans
    Soy,
    /// Tree nuts (almonds, walnuts, cashews, ...)
    TreeNuts,
    /// Wheat and gluten-bearing grains
    Wheat,
}

impl Allergen {
    /// Every recognized allergen, in alphabetical order of its wire name
    pub const ALL: [Self; 8] = [
        Self::Eggs,
        Self::Fish,
        Self::Milk,
        Self::Peanuts,
        Self::Shellfish,
        Self::Soy,
        Self::TreeNuts,
        Self::Wheat,
    ];

    /// Get the wire name of this allergen
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eggs => "eggs",
            Self::Fish => "fish",
            Self::Milk => "milk",
            Self::Peanuts => "peanuts",
            Self::Shellfish => "shellfish",
            Self::Soy => "soy",
            Self::TreeNuts => "tree_nuts",
            Self::Wheat => "wheat",
        }
    }

    /// Parse a user-supplied allergen value
    ///
    /// The value is trimmed and lowercased before matching.
    ///
    /// # Errors
    ///
    /// Returns the rejection message for values outside the vocabulary.
    pub fn from_input(raw: &str) -> Result<Self, String> {
        let normalized = raw.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|allergen| allergen.as_str() == normalized)
            .copied()
            .ok_or_else(|| {
                format!(
                    "Invalid allergen '{normalized}'. Valid: {}",
                    Self::valid_list()
                )
            })
    }

    /// The full vocabulary as a comma-separated list, alphabetical
    fn valid_list() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Allergen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for the recipe health analysis endpoint
///
/// Used by `/analyze` to start a health analysis of a recipe looked up by
/// name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    /// Name of the recipe to analyze, trimmed and non-empty
    pub recipe_name: String,
}

const ANALYSIS_REQUEST_FIELDS: &[&str] = &["recipe_name"];

impl FromPayload for AnalysisRequest {
    fn from_value(value: &Value) -> ValidationResult<Self> {
        let map = payload::as_object(value)?;
        let mut errors = ErrorCollector::new();

        payload::reject_unknown_fields(map, ANALYSIS_REQUEST_FIELDS, &mut errors);
        let recipe_name = payload::required_string(map, "recipe_name", &mut errors)
            .and_then(|raw| validated_recipe_name(&raw, &mut errors));

        errors.into_result("AnalysisRequest")?;
        Ok(Self {
            recipe_name: recipe_name.unwrap_or_default(),
        })
    }
}

/// Request for the unified recipe analysis endpoint (`/analyze-full`)
///
/// Supports both database lookup (`recipe_name` only) and custom recipe
/// input (`recipe_name` plus `ingredients`), alongside user-declared
/// allergens and ingredients to avoid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullAnalysisRequest {
    /// Name of the recipe to analyze, trimmed and non-empty
    pub recipe_name: String,
    /// Custom ingredient list; entries trimmed, blanks dropped, never
    /// empty when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Declared allergen sensitivities; may be empty after blank entries
    /// are dropped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergens: Option<Vec<Allergen>>,
    /// Specific ingredients to avoid, passed through as given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_ingredients: Option<Vec<String>>,
}

const FULL_ANALYSIS_REQUEST_FIELDS: &[&str] = &[
    "recipe_name",
    "ingredients",
    "allergens",
    "avoid_ingredients",
];

impl FromPayload for FullAnalysisRequest {
    fn from_value(value: &Value) -> ValidationResult<Self> {
        let map = payload::as_object(value)?;
        let mut errors = ErrorCollector::new();

        payload::reject_unknown_fields(map, FULL_ANALYSIS_REQUEST_FIELDS, &mut errors);

        let recipe_name = payload::required_string(map, "recipe_name", &mut errors)
            .and_then(|raw| validated_recipe_name(&raw, &mut errors));

        let ingredients =
            payload::optional_string_list(map, "ingredients", &mut errors).map(normalize_entries);
        if let Some(entries) = &ingredients {
            if entries.is_empty() {
                errors.push(
                    "ingredients",
                    ValidationErrorKind::EmptyValue,
                    "Ingredients list cannot be empty if provided",
                );
            }
        }

        let allergens =
            payload::optional_string_list(map, "allergens", &mut errors).map(|entries| {
                let mut parsed = Vec::with_capacity(entries.len());
                for (index, entry) in entries.iter().enumerate() {
                    // Blank entries are dropped, not rejected
                    if entry.trim().is_empty() {
                        continue;
                    }
                    match Allergen::from_input(entry) {
                        Ok(allergen) => parsed.push(allergen),
                        Err(message) => errors.push(
                            format!("allergens[{index}]"),
                            ValidationErrorKind::EnumMembership,
                            message,
                        ),
                    }
                }
                parsed
            });

        let avoid_ingredients = payload::optional_string_list(map, "avoid_ingredients", &mut errors);

        errors.into_result("FullAnalysisRequest")?;
        Ok(Self {
            recipe_name: recipe_name.unwrap_or_default(),
            ingredients,
            allergens,
            avoid_ingredients,
        })
    }
}

/// Validate and normalize a recipe name
///
/// Length is checked on the raw value; trimming happens afterwards, so a
/// value of spaces inside the length bound still fails as empty.
fn validated_recipe_name(raw: &str, errors: &mut ErrorCollector) -> Option<String> {
    if raw.chars().count() > limits::RECIPE_NAME_MAX_CHARS {
        errors.push(
            "recipe_name",
            ValidationErrorKind::Range,
            format!(
                "Must be at most {} characters",
                limits::RECIPE_NAME_MAX_CHARS
            ),
        );
        return None;
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(
            "recipe_name",
            ValidationErrorKind::EmptyValue,
            "Recipe name cannot be empty",
        );
        return None;
    }
    Some(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allergen_wire_names_round_trip() {
        for allergen in Allergen::ALL {
            let json = serde_json::to_string(&allergen).unwrap();
            assert_eq!(json, format!("\"{allergen}\""));
            let back: Allergen = serde_json::from_str(&json).unwrap();
            assert_eq!(back, allergen);
        }
    }

    #[test]
    fn test_allergen_from_input_normalizes() {
        assert_eq!(Allergen::from_input("  MILK "), Ok(Allergen::Milk));
        assert_eq!(Allergen::from_input("Tree_Nuts"), Ok(Allergen::TreeNuts));
    }

    #[test]
    fn test_allergen_rejection_lists_vocabulary_sorted() {
        let message = Allergen::from_input("sesame").unwrap_err();
        assert_eq!(
            message,
            "Invalid allergen 'sesame'. Valid: eggs, fish, milk, peanuts, shellfish, soy, \
             tree_nuts, wheat"
        );
    }
}
