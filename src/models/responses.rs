// ABOUTME: Response schemas for recipe recommendations and quick meal suggestions
// ABOUTME: Defines RecipeBasic, RecipeRecommendation, QuickMealRecipe, and QuickMealResponse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::defaults;
use crate::errors::{ValidationErrorKind, ValidationResult};
use crate::validation::{check_score, ErrorCollector};

/// Basic recipe information
///
/// Essential recipe data without detailed nutrition information, shared by
/// every response shape. Identifiers are opaque strings issued by the
/// recipe database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeBasic {
    /// Unique recipe identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Cuisine type (e.g. "Italian", "Indian")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    /// Diet classification (e.g. "vegetarian", "vegan")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
    /// List of ingredients
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Cooking instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Preparation time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    /// Cooking time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<u32>,
    /// Number of servings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

impl RecipeBasic {
    /// Create a recipe with the required fields only
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cuisine: None,
            diet_type: None,
            ingredients: Vec::new(),
            instructions: None,
            prep_time: None,
            cook_time: None,
            servings: None,
        }
    }

    /// Set the cuisine type
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Set the diet classification
    #[must_use]
    pub fn with_diet_type(mut self, diet_type: impl Into<String>) -> Self {
        self.diet_type = Some(diet_type.into());
        self
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Add multiple ingredients
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    /// Set the cooking instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Set the preparation time
    #[must_use]
    pub const fn with_prep_time(mut self, mins: u32) -> Self {
        self.prep_time = Some(mins);
        self
    }

    /// Set the cooking time
    #[must_use]
    pub const fn with_cook_time(mut self, mins: u32) -> Self {
        self.cook_time = Some(mins);
        self
    }

    /// Set the number of servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Get total time (prep + cook), when either is known
    #[must_use]
    pub const fn total_time_mins(&self) -> Option<u32> {
        match (self.prep_time, self.cook_time) {
            (Some(prep), Some(cook)) => Some(prep.saturating_add(cook)),
            (Some(prep), None) => Some(prep),
            (None, Some(cook)) => Some(cook),
            (None, None) => None,
        }
    }
}

/// A single recommended recipe with scoring information
///
/// Scores live on a closed 0-100 scale and are range-checked at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecommendation {
    /// Recommended recipe data
    pub recipe: RecipeBasic,
    /// Similarity to the original recipe (0-100)
    pub similarity_score: f64,
    /// Health score of this recipe (0-100)
    pub health_score: f64,
    /// Combined relevance ranking score (0-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
    /// Explanation for why this recipe was recommended
    pub reason: String,
}

impl RecipeRecommendation {
    /// Create a recommendation, range-checking both scores
    ///
    /// # Errors
    ///
    /// Returns a failure naming every score outside the 0-100 range.
    pub fn new(
        recipe: RecipeBasic,
        similarity_score: f64,
        health_score: f64,
        reason: impl Into<String>,
    ) -> ValidationResult<Self> {
        let mut errors = ErrorCollector::new();
        check_score("similarity_score", similarity_score, &mut errors);
        check_score("health_score", health_score, &mut errors);
        errors.into_result("RecipeRecommendation")?;

        Ok(Self {
            recipe,
            similarity_score,
            health_score,
            relevance_score: None,
            reason: reason.into(),
        })
    }

    /// Set the combined relevance score
    ///
    /// # Errors
    ///
    /// Returns a failure when the score is outside the 0-100 range.
    pub fn with_relevance_score(mut self, relevance_score: f64) -> ValidationResult<Self> {
        let mut errors = ErrorCollector::new();
        check_score("relevance_score", relevance_score, &mut errors);
        errors.into_result("RecipeRecommendation")?;

        self.relevance_score = Some(relevance_score);
        Ok(self)
    }
}

/// A quick meal suggestion with practical metadata
///
/// Recipe data plus what a student actually needs to decide: how many
/// ingredients, what it costs, and what equipment it takes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickMealRecipe {
    /// Recipe data
    pub recipe: RecipeBasic,
    /// Number of ingredients in the recipe
    pub ingredient_count: u32,
    /// Estimated cost per serving in INR
    pub estimated_cost: u32,
    /// Simple equipment required (e.g. "pan", "bowl")
    #[serde(default)]
    pub equipment_needed: Vec<String>,
    /// Quick preparation tips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practical_tips: Option<String>,
}

impl QuickMealRecipe {
    /// Create a quick meal entry
    ///
    /// # Errors
    ///
    /// Returns a failure when `ingredient_count` is zero; a meal with no
    /// ingredients is not a meal.
    pub fn new(
        recipe: RecipeBasic,
        ingredient_count: u32,
        estimated_cost: u32,
    ) -> ValidationResult<Self> {
        let mut errors = ErrorCollector::new();
        if ingredient_count == 0 {
            errors.push(
                "ingredient_count",
                ValidationErrorKind::Range,
                "Must be greater than or equal to 1",
            );
        }
        errors.into_result("QuickMealRecipe")?;

        Ok(Self {
            recipe,
            ingredient_count,
            estimated_cost,
            equipment_needed: Vec::new(),
            practical_tips: None,
        })
    }

    /// Add a piece of required equipment
    #[must_use]
    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment_needed.push(equipment.into());
        self
    }

    /// Set the preparation tips
    #[must_use]
    pub fn with_practical_tips(mut self, tips: impl Into<String>) -> Self {
        self.practical_tips = Some(tips.into());
        self
    }
}

/// Response for the quick meal filter endpoint
///
/// The meals matching the filter criteria, along with metadata about the
/// search that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickMealResponse {
    /// Quick meal recipes matching the filters
    pub meals: Vec<QuickMealRecipe>,
    /// Total number of meals found
    pub total_found: u32,
    /// Summary of the filters that were applied
    pub filters_applied: HashMap<String, Value>,
    /// Psychological insight about healthy eating
    #[serde(default = "default_psychological_tip")]
    pub psychological_tip: String,
}

fn default_psychological_tip() -> String {
    defaults::PSYCHOLOGICAL_TIP.to_owned()
}

impl QuickMealResponse {
    /// Create a response with the default psychological tip
    #[must_use]
    pub fn new(
        meals: Vec<QuickMealRecipe>,
        total_found: u32,
        filters_applied: HashMap<String, Value>,
    ) -> Self {
        Self {
            meals,
            total_found,
            filters_applied,
            psychological_tip: default_psychological_tip(),
        }
    }

    /// Override the psychological tip
    #[must_use]
    pub fn with_psychological_tip(mut self, tip: impl Into<String>) -> Self {
        self.psychological_tip = tip.into();
        self
    }
}
