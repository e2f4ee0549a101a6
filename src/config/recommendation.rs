// ABOUTME: Recommendation and catalog search configuration: limits and predicate thresholds
// ABOUTME: RecommendationConfig, RecommendationLimits, and SearchThresholds defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Recommendation Configuration
//!
//! Limits for the budget matcher and numeric thresholds for the catalog
//! search predicates (anti-inflammatory rule, low-carb rule, and the
//! percent-of-RDI micronutrient predicate).

use serde::{Deserialize, Serialize};

/// Recommendation and search configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Limits on recommendation output
    pub limits: RecommendationLimits,
    /// Numeric thresholds for search predicates
    pub thresholds: SearchThresholds,
}

/// Limits on recommendation output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Maximum dishes returned by the budget matcher
    pub max_suggestions: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self { max_suggestions: 3 }
    }
}

/// Numeric thresholds for catalog search predicates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchThresholds {
    /// Omega-3 amount (mg) that qualifies a dish as anti-inflammatory
    pub anti_inflammatory_omega3_mg: f64,
    /// Fiber amount (grams) that alternatively qualifies a dish as
    /// anti-inflammatory
    pub anti_inflammatory_fiber_g: f64,
    /// Percent of RDI a dish must exceed for a requested target micronutrient
    pub target_micronutrient_pct: f64,
    /// Carbohydrate ceiling (grams) for the numeric low-carb rule
    pub low_carb_max_g: f64,
}

impl Default for SearchThresholds {
    fn default() -> Self {
        Self {
            anti_inflammatory_omega3_mg: 200.0,
            anti_inflammatory_fiber_g: 5.0,
            target_micronutrient_pct: 20.0,
            low_carb_max_g: 30.0,
        }
    }
}
