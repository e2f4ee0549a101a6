// ABOUTME: Budget-gap dish matcher ranking candidates against remaining daily macros
// ABOUTME: RecommendationEngine, per-macro deviation scoring, and MatchResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Recommendation Matcher
//!
//! Ranks candidate dishes against a user's remaining daily macro budget. A
//! perfect match contributes exactly the remaining protein, carb, and fat
//! budget; the score decays with the mean relative deviation across the three
//! macros.
//!
//! Eligibility is a hard filter, not a score of 0: dishes with no calorie
//! data, or exceeding the remaining calorie budget, are excluded from the
//! result set entirely.

use crate::config::{IntelligenceConfig, RecommendationConfig};
use crate::models::{DailyBudget, Dish};
use serde::{Deserialize, Serialize};

/// One ranked candidate, ephemeral and never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// The candidate dish (owned copy)
    pub dish: Dish,
    /// Fit against the remaining budget, in [0, 100]
    pub match_score: f64,
}

/// Relative deviation of a dish macro from the remaining budget for it.
///
/// A zero budget is the degenerate 0/0 case: a dish contributing exactly
/// nothing to a zero budget is a perfect match (deviation 0), anything else
/// is 100% off (deviation 1). An exceeded (negative) budget uses the absolute
/// denominator, driving deviations past 1 and the score to its 0 floor.
#[allow(clippy::float_cmp)] // exact zero is the degenerate-budget sentinel
fn deviation(dish_value: f64, budget_value: f64) -> f64 {
    if budget_value == 0.0 {
        if dish_value == 0.0 {
            0.0
        } else {
            1.0
        }
    } else {
        (dish_value - budget_value).abs() / budget_value.abs()
    }
}

/// Recommendation engine for budget-gap dish matching
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().recommendation.clone(),
        }
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub const fn with_config(config: RecommendationConfig) -> Self {
        Self { config }
    }

    /// Score one eligible dish against the budget
    fn match_score(dish: &Dish, budget: &DailyBudget) -> f64 {
        let deviations = [
            deviation(dish.protein_g, budget.protein_g),
            deviation(dish.carbs_g, budget.carbs_g),
            deviation(dish.fat_g, budget.fat_g),
        ];
        let avg_deviation = deviations.iter().sum::<f64>() / deviations.len() as f64;
        avg_deviation.mul_add(-100.0, 100.0).clamp(0.0, 100.0)
    }

    /// Rank a catalog against the remaining budget, returning the configured
    /// top-N matches in descending score order.
    ///
    /// Only the calorie budget hard-excludes. An exceeded (negative) macro
    /// gram budget instead degrades the score through its deviation, reaching
    /// the 0 floor once the mean deviation hits 1; a dish matching the other
    /// two macros perfectly still ranks, at roughly two thirds of full score.
    ///
    /// Ties retain catalog iteration order (stable sort).
    #[must_use]
    pub fn rank_candidates(&self, dishes: &[Dish], budget: &DailyBudget) -> Vec<MatchResult> {
        self.rank_candidates_with_limit(dishes, budget, self.config.limits.max_suggestions)
    }

    /// Rank a catalog with an explicit result limit
    #[must_use]
    pub fn rank_candidates_with_limit(
        &self,
        dishes: &[Dish],
        budget: &DailyBudget,
        limit: usize,
    ) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = dishes
            .iter()
            .filter(|dish| dish.calories > 0.0 && dish.calories <= budget.calories)
            .map(|dish| MatchResult {
                dish: dish.clone(),
                match_score: Self::match_score(dish, budget),
            })
            .collect();

        results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        results.truncate(limit);
        results
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn zero_budget_deviation_is_defined() {
        assert_eq!(deviation(0.0, 0.0), 0.0);
        assert_eq!(deviation(12.0, 0.0), 1.0);
    }

    #[test]
    fn negative_budget_uses_absolute_denominator() {
        // 10 g against a budget exceeded by 10 g: 200% off
        assert_eq!(deviation(10.0, -10.0), 2.0);
    }

    #[test]
    fn exact_budget_match_scores_one_hundred() {
        let budget = DailyBudget {
            calories: 600.0,
            protein_g: 40.0,
            carbs_g: 60.0,
            fat_g: 20.0,
        };
        let dish = Dish::new("d1", "Perfect fit").with_macros(500.0, 40.0, 60.0, 20.0);

        let engine = RecommendationEngine::with_config(RecommendationConfig::default());
        let results = engine.rank_candidates(&[dish], &budget);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_score, 100.0);
    }
}
