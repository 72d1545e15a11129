// ABOUTME: Main library entry point for the Mealwise recipe analysis schema layer
// ABOUTME: Provides typed request/response contracts and payload validation for recipe endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise

#![deny(unsafe_code)]

//! # Mealwise Schemas
//!
//! The request/response contract layer for the Mealwise recipe analysis API.
//! Every payload that crosses the service boundary (recipe analysis
//! requests, search filters, quick meal suggestions) is defined here as an
//! immutable typed object, constructed from untyped JSON through a single
//! aggregating validation pass.
//!
//! ## Features
//!
//! - **Typed contracts**: one struct per request/response shape
//! - **Early rejection**: malformed payloads never reach business logic
//! - **Normalization**: strings trimmed, allergen vocabulary lowercased
//! - **Aggregated errors**: every offending field reported in one failure
//!
//! ## Architecture
//!
//! - **Models**: request, filter, and response schema definitions
//! - **Validation**: payload extraction and the field validator toolkit
//! - **Errors**: the validation failure taxonomy and HTTP error envelope
//!
//! Recipe storage, similarity and health scoring, and HTTP routing are
//! collaborators of this crate, not part of it: handlers construct typed
//! requests with [`validation::FromPayload`], hand the object to the
//! scoring services, and serialize the typed response back out with `serde`.
//!
//! ## Example Usage
//!
//! ```rust
//! use mealwise::models::AnalysisRequest;
//! use mealwise::validation::FromPayload;
//!
//! let request = AnalysisRequest::from_json_str(r#"{"recipe_name": "  Chicken Curry  "}"#)?;
//! assert_eq!(request.recipe_name, "Chicken Curry");
//! # Ok::<(), mealwise::errors::ValidationErrors>(())
//! ```

/// Schema bounds and default values
pub mod constants;

/// Validation failure taxonomy with aggregated field errors and HTTP responses
pub mod errors;

/// Request, filter, and response schema definitions
pub mod models;

/// Payload extraction and field validation toolkit
pub mod validation;
