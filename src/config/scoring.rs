// ABOUTME: Quality scoring configuration: composite weights and baseline fallback tuning
// ABOUTME: ScoringConfig, ScoringWeights, and BaselineScoring defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Quality Scoring Configuration
//!
//! Weights for the five-component composite health score and tuning for the
//! deprecated base-50 fallback used when a dish has no recorded nutrient
//! detail.

use serde::{Deserialize, Serialize};

/// Quality scoring configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weights for combining the five component scores
    pub weights: ScoringWeights,
    /// Tuning for the base-50 fallback variant
    pub baseline: BaselineScoring,
}

/// Weights for the five-component composite score.
///
/// Must sum to exactly 1.0; validated at configuration load. Components are
/// clamped to [0, 100] before weighting, never after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for protein-plus-fiber caloric density
    pub nutrient_density: f64,
    /// Weight for protein quality
    pub protein_quality: f64,
    /// Weight for absolute fiber content
    pub fiber_content: f64,
    /// Weight for micronutrient richness
    pub micronutrient_richness: f64,
    /// Weight for the processed-food (sugar/sodium) penalty score
    pub processed_score: f64,
}

impl ScoringWeights {
    /// Sum of all five weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.nutrient_density
            + self.protein_quality
            + self.fiber_content
            + self.micronutrient_richness
            + self.processed_score
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            nutrient_density: 0.25,
            protein_quality: 0.25,
            fiber_content: 0.15,
            micronutrient_richness: 0.20,
            processed_score: 0.15,
        }
    }
}

/// Tuning for the deprecated base-50 scoring fallback.
///
/// Bonus caps are chosen so a perfect dish reaches exactly 100 from the base:
/// 50 + 15 + 15 + 10 + 10.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineScoring {
    /// Starting score before bonuses
    pub base: f64,
    /// Multiplier applied to protein/fiber caloric density before capping
    pub density_bonus_scale: f64,
    /// Cap on the protein-density bonus
    pub protein_bonus_cap: f64,
    /// Cap on the fiber-density bonus
    pub fiber_bonus_cap: f64,
    /// Bonus per recorded micronutrient key
    pub micronutrient_bonus_per_key: f64,
    /// Cap on the micronutrient-count bonus
    pub micronutrient_bonus_cap: f64,
    /// Sugar amount (grams) under which the flat low-sugar bonus applies
    pub low_sugar_threshold_g: f64,
    /// Flat bonus for low-sugar dishes
    pub low_sugar_bonus: f64,
}

impl Default for BaselineScoring {
    fn default() -> Self {
        Self {
            base: 50.0,
            density_bonus_scale: 0.5,
            protein_bonus_cap: 15.0,
            fiber_bonus_cap: 15.0,
            micronutrient_bonus_per_key: 2.0,
            micronutrient_bonus_cap: 10.0,
            low_sugar_threshold_g: 10.0,
            low_sugar_bonus: 10.0,
        }
    }
}
