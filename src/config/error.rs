// ABOUTME: Configuration error types for engine config validation
// ABOUTME: Defines error variants for invalid ranges, weights, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Configuration error types for engine config validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., thresholds out of order)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse a configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights don't sum to the required total
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}
