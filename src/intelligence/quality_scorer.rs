// ABOUTME: Five-component dish quality scoring with weighted composite health score
// ABOUTME: score_dish, the deprecated base-50 fallback, and effective_health_score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Quality Scoring Engine
//!
//! Computes a per-dish health score from five component scores, each clamped
//! to [0, 100] before weighting:
//!
//! - **Nutrient density**: percent of calories from protein and fiber, doubled
//! - **Protein quality**: percent of calories from protein, tripled
//! - **Fiber content**: absolute fiber against a 10 g per-dish reference
//! - **Micronutrient richness**: share of the 14-key vocabulary present
//! - **Processed score**: penalty for sugar and sodium against daily limits
//!
//! A zero-calorie dish is a valid placeholder state: the caloric denominator
//! is floored at 1 kcal, so every component stays finite.

use crate::config::ScoringConfig;
use crate::constants::{daily_intake, energy, scoring};
use crate::models::{Dish, Micronutrient};
use serde::{Deserialize, Serialize};

/// Component breakdown of a dish's quality score, all values in [0, 100]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityScore {
    /// Protein-plus-fiber caloric density
    pub nutrient_density: f64,
    /// Protein caloric density, scaled
    pub protein_quality: f64,
    /// Absolute fiber content
    pub fiber_content: f64,
    /// Share of the micronutrient vocabulary present
    pub micronutrient_richness: f64,
    /// Sugar/sodium penalty score (higher is less processed)
    pub processed_score: f64,
    /// Weighted composite of the five components
    pub overall: f64,
}

/// Percent of calories supplied by `grams` of a 4 kcal/g nutrient
fn caloric_density_pct(grams: f64, kcal_per_g: f64, calories: f64) -> f64 {
    // Floor the denominator at 1 kcal: calories == 0 is a valid placeholder
    let cal = calories.max(1.0);
    (grams * kcal_per_g / cal) * 100.0
}

/// Count of micronutrient keys with a strictly positive recorded amount
fn micronutrient_count(dish: &Dish) -> usize {
    Micronutrient::ALL
        .iter()
        .filter(|nutrient| dish.micronutrient(**nutrient) > 0.0)
        .count()
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(scoring::SCORE_MIN, scoring::SCORE_MAX)
}

/// Compute the full five-component quality score for a dish.
///
/// This is the canonical formula; the per-dish detail view always prefers
/// this breakdown over the base-50 variant whenever it is computable.
#[must_use]
pub fn score_dish(dish: &Dish, config: &ScoringConfig) -> QualityScore {
    let protein_density =
        caloric_density_pct(dish.protein_g, energy::PROTEIN_KCAL_PER_G, dish.calories);
    let fiber_density = caloric_density_pct(dish.fiber_g, energy::CARBS_KCAL_PER_G, dish.calories);

    let nutrient_density = clamp_score((protein_density + fiber_density) * 2.0);
    let protein_quality = clamp_score(protein_density * 3.0);
    let fiber_content = clamp_score((dish.fiber_g / scoring::FIBER_FULL_SCORE_G) * 100.0);

    let present = micronutrient_count(dish) as f64;
    let micronutrient_richness =
        clamp_score((present / Micronutrient::ALL.len() as f64) * 100.0);

    let sugar_score =
        clamp_score((dish.sugar_g / daily_intake::SUGAR_DAILY_LIMIT_G).mul_add(-100.0, 100.0));
    let sodium_score =
        clamp_score((dish.sodium_mg / daily_intake::SODIUM_DAILY_LIMIT_MG).mul_add(-100.0, 100.0));
    let processed_score = f64::midpoint(sugar_score, sodium_score);

    let weights = &config.weights;
    let overall = nutrient_density.mul_add(
        weights.nutrient_density,
        protein_quality.mul_add(
            weights.protein_quality,
            fiber_content.mul_add(
                weights.fiber_content,
                micronutrient_richness.mul_add(
                    weights.micronutrient_richness,
                    processed_score * weights.processed_score,
                ),
            ),
        ),
    );

    QualityScore {
        nutrient_density,
        protein_quality,
        fiber_content,
        micronutrient_richness,
        processed_score,
        overall: clamp_score(overall),
    }
}

/// Simplified base-50 catalog pre-scoring variant.
///
/// Deprecated fallback: starts from a base of 50 and adds bounded bonuses for
/// protein density, fiber density, micronutrient count, and low sugar. Used
/// only for dishes with literally zero recorded nutrient detail; see
/// [`effective_health_score`].
#[must_use]
pub fn baseline_score(dish: &Dish, config: &ScoringConfig) -> f64 {
    let baseline = &config.baseline;
    let protein_density =
        caloric_density_pct(dish.protein_g, energy::PROTEIN_KCAL_PER_G, dish.calories);
    let fiber_density = caloric_density_pct(dish.fiber_g, energy::CARBS_KCAL_PER_G, dish.calories);

    let mut score = baseline.base;
    score += (protein_density * baseline.density_bonus_scale).min(baseline.protein_bonus_cap);
    score += (fiber_density * baseline.density_bonus_scale).min(baseline.fiber_bonus_cap);
    score += (micronutrient_count(dish) as f64 * baseline.micronutrient_bonus_per_key)
        .min(baseline.micronutrient_bonus_cap);
    if dish.sugar_g < baseline.low_sugar_threshold_g {
        score += baseline.low_sugar_bonus;
    }

    clamp_score(score)
}

/// The single health score used for catalog-wide filtering and sorting.
///
/// Preference order, with no blending between formulas:
/// 1. a stored finite catalog `health_score`,
/// 2. the full five-component composite when the dish has any recorded
///    nutrient detail,
/// 3. the base-50 fallback otherwise.
#[must_use]
pub fn effective_health_score(dish: &Dish, config: &ScoringConfig) -> f64 {
    if let Some(stored) = dish.health_score {
        if stored.is_finite() {
            return clamp_score(stored);
        }
    }

    if dish.has_nutrient_detail() {
        score_dish(dish, config).overall
    } else {
        baseline_score(dish, config)
    }
}
