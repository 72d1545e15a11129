// ABOUTME: Schema-wide bounds and default values for the Mealwise contract layer
// ABOUTME: Contains numeric field limits, score ranges, and quick meal filter defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! # Constants Module
//!
//! Declared bounds and defaults for every schema field. Defaults are
//! attached here as `const` items rather than computed at call time, so
//! construction stays deterministic and side-effect-free.

/// Declared bounds for range-checked fields
pub mod limits {
    /// Maximum length of a recipe name, in characters, before trimming
    pub const RECIPE_NAME_MAX_CHARS: usize = 200;

    /// Lower bound for similarity, health, and relevance scores
    pub const SCORE_MIN: f64 = 0.0;

    /// Upper bound for similarity, health, and relevance scores
    pub const SCORE_MAX: f64 = 100.0;

    /// Minimum accepted quick meal preparation time, in minutes
    pub const QUICK_PREP_TIME_MIN_MINS: u32 = 1;

    /// Maximum accepted quick meal preparation time, in minutes
    pub const QUICK_PREP_TIME_MAX_MINS: u32 = 30;

    /// Minimum accepted quick meal ingredient cap
    pub const QUICK_INGREDIENTS_MIN: u32 = 1;

    /// Maximum accepted quick meal ingredient cap
    pub const QUICK_INGREDIENTS_MAX: u32 = 10;

    /// Minimum accepted quick meal cost cap, in INR per serving
    pub const QUICK_COST_MIN_INR: u32 = 10;

    /// Maximum accepted quick meal cost cap, in INR per serving
    pub const QUICK_COST_MAX_INR: u32 = 500;
}

/// Default values for fields with schema-level defaults
pub mod defaults {
    /// Default quick meal preparation time cap, in minutes
    pub const QUICK_MAX_PREP_TIME_MINS: u32 = 5;

    /// Default quick meal ingredient cap
    pub const QUICK_MAX_INGREDIENTS: u32 = 3;

    /// Default quick meal cost cap, in INR per serving
    pub const QUICK_MAX_COST_INR: u32 = 100;

    /// Quick meal searches prefer hostel/PG-friendly recipes unless asked otherwise
    pub const QUICK_HOSTEL_FRIENDLY: bool = true;

    /// Default psychological tip attached to quick meal responses
    pub const PSYCHOLOGICAL_TIP: &str = "Quick healthy meals help stabilize blood sugar and \
         reduce extreme hunger, making it easier to avoid cravings for junk food.";
}
