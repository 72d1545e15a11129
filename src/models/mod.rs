// ABOUTME: Schema definitions for the Mealwise recipe analysis API
// ABOUTME: Re-exports request, filter, and response types from their topic modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

//! # Data Models
//!
//! The typed shapes that cross the service boundary. These models provide a
//! validated representation of every request and response payload handled
//! by the recipe analysis endpoints.
//!
//! ## Design Principles
//!
//! - **Immutable**: objects never change after successful construction
//! - **Normalized**: strings are trimmed and enum-like fields lowercased
//!   before storage
//! - **Serializable**: all models support JSON serialization; optional
//!   fields are omitted from output when unset
//! - **Type Safe**: declared bounds hold for every constructed value
//!
//! ## Core Models
//!
//! - [`AnalysisRequest`] / [`FullAnalysisRequest`]: recipe analysis inputs
//! - [`RecipeSearchFilters`] / [`QuickMealFilters`]: search constraints
//! - [`RecipeBasic`]: essential recipe data shared by responses
//! - [`RecipeRecommendation`]: a scored recommendation entry
//! - [`QuickMealRecipe`] / [`QuickMealResponse`]: quick meal suggestions

/// Search and quick meal filter schemas
pub mod filters;
/// Request schemas for the analysis endpoints
pub mod requests;
/// Response schemas for recommendations and quick meals
pub mod responses;

pub use filters::{QuickMealFilters, RecipeSearchFilters};
pub use requests::{Allergen, AnalysisRequest, FullAnalysisRequest};
pub use responses::{QuickMealRecipe, QuickMealResponse, RecipeBasic, RecipeRecommendation};
