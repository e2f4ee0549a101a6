// ABOUTME: Engine error types for data-boundary and configuration faults
// ABOUTME: Defines EngineError and the EngineResult alias used across the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Engine error types.
//!
//! Errors surface only at construction and configuration boundaries. Inside the
//! engines, degenerate inputs (zero calories, zero budgets, missing values)
//! resolve to defined fallback values rather than errors, so every engine call
//! returns a valid, renderable result.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors raised at the engine's data and configuration boundaries
#[derive(Debug, Error)]
pub enum EngineError {
    /// Nutrient key outside the fixed micronutrient vocabulary
    #[error("unknown nutrient key: {key}")]
    UnknownNutrient {
        /// The rejected key as supplied by the caller
        key: String,
    },

    /// Record field that cannot be interpreted
    #[error("invalid {field}: {reason}")]
    InvalidRecord {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Configuration failed validation at load time
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience alias for engine results
pub type EngineResult<T> = Result<T, EngineError>;
