// ABOUTME: Multi-criteria catalog filtering and selectable sort strategies
// ABOUTME: CatalogSearchEngine, FilterCriteria, DietaryFlag, and SortStrategy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Multi-Criteria Filter & Sort Engine
//!
//! Applies a configurable chain of threshold predicates to a dish catalog and
//! orders the survivors with a single selected sort strategy. A dish must pass
//! every active predicate; predicates short-circuit in a fixed order for
//! efficiency, but the order never changes the result set.
//!
//! Missing numeric fields compare as 0 and are never a filter failure by
//! themselves. An unrecognized sort strategy is a presentation-facing no-op,
//! not an error.

use super::quality_scorer::effective_health_score;
use super::targets::resolve_target;
use crate::config::{IntelligenceConfig, RecommendationConfig, ScoringConfig};
use crate::models::{Dish, MealType, Micronutrient, MicronutrientGoals};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Meal-type filter: match everything or one specific slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealTypeFilter {
    /// No meal-type restriction
    #[default]
    All,
    /// Only dishes of this meal type
    Only(MealType),
}

/// Dietary restriction flags evaluated against dish tags.
///
/// `LowCarb` is the one numeric rule (carbohydrate ceiling) rather than a tag
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryFlag {
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// No gluten-containing ingredients
    GlutenFree,
    /// No dairy products
    DairyFree,
    /// Ketogenic
    Keto,
    /// Carbohydrates at or under the configured ceiling
    LowCarb,
}

impl DietaryFlag {
    /// Tag markers that satisfy this flag (any one is sufficient).
    ///
    /// Gluten-free and dairy-free also accept the allergen-exclusion markers
    /// catalogs record on dishes.
    const fn tag_markers(self) -> &'static [&'static str] {
        match self {
            Self::Vegetarian => &["vegetarian"],
            Self::Vegan => &["vegan"],
            Self::GlutenFree => &["gluten_free", "no_gluten"],
            Self::DairyFree => &["dairy_free", "no_dairy"],
            Self::Keto => &["keto"],
            Self::LowCarb => &[],
        }
    }
}

/// Selectable ordering for filtered results.
///
/// All strategies sort descending except `Calories`, which puts the
/// lowest-calorie dish first. `Unsorted` is a stable pass-through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Computed health score, descending
    HealthScore,
    /// Protein plus fiber as a nutrient-density proxy, descending
    NutrientDensity,
    /// Average user rating, descending
    Rating,
    /// Omega-3 content as an anti-inflammatory proxy, descending
    AntiInflammatory,
    /// Protein, descending
    Protein,
    /// Fiber, descending
    Fiber,
    /// Calories, ascending (the only ascending strategy)
    Calories,
    /// Keep catalog order
    #[default]
    Unsorted,
}

impl SortStrategy {
    /// Parse a strategy key, mapping unknown values to [`Self::Unsorted`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "health_score" => Self::HealthScore,
            "nutrient_density" => Self::NutrientDensity,
            "rating" => Self::Rating,
            "anti_inflammatory" => Self::AntiInflammatory,
            "protein" => Self::Protein,
            "fiber" => Self::Fiber,
            "calories" => Self::Calories,
            "unsorted" => Self::Unsorted,
            other => {
                debug!(strategy = other, "unknown sort strategy, leaving catalog order");
                Self::Unsorted
            }
        }
    }
}

/// Per-request search criteria. `Default` passes every dish unsorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive name substring; empty matches everything
    #[serde(default)]
    pub search_text: String,
    /// Ingredient substrings that must ALL be present
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Meal-type restriction
    #[serde(default)]
    pub meal_type: MealTypeFilter,
    /// Inclusive total-time range in minutes
    #[serde(default = "default_time_range")]
    pub total_time_mins: (u32, u32),
    /// Inclusive calorie range
    #[serde(default = "default_calorie_range")]
    pub calorie_range: (f64, f64),
    /// Minimum protein (grams)
    #[serde(default)]
    pub min_protein_g: f64,
    /// Active dietary flags; every flag must be satisfied
    #[serde(default)]
    pub dietary: Vec<DietaryFlag>,
    /// Minimum computed health score
    #[serde(default)]
    pub min_health_score: f64,
    /// Minimum average rating
    #[serde(default)]
    pub min_rating: f64,
    /// Independent calorie ceiling, applied on top of `calorie_range`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_calories: Option<f64>,
    /// Minimum fiber (grams)
    #[serde(default)]
    pub min_fiber_g: f64,
    /// Require the anti-inflammatory rule (omega-3 OR fiber)
    #[serde(default)]
    pub anti_inflammatory: bool,
    /// Pass when the dish exceeds the RDI share for at least one of these
    #[serde(default)]
    pub target_micronutrients: Vec<Micronutrient>,
    /// Active sort strategy
    #[serde(default)]
    pub sort: SortStrategy,
    /// Goals used to resolve RDI for the target-micronutrient predicate
    #[serde(default)]
    pub goals: MicronutrientGoals,
}

const fn default_time_range() -> (u32, u32) {
    (0, u32::MAX)
}

const fn default_calorie_range() -> (f64, f64) {
    (0.0, f64::MAX)
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            ingredients: Vec::new(),
            meal_type: MealTypeFilter::All,
            total_time_mins: default_time_range(),
            calorie_range: default_calorie_range(),
            min_protein_g: 0.0,
            dietary: Vec::new(),
            min_health_score: 0.0,
            min_rating: 0.0,
            max_calories: None,
            min_fiber_g: 0.0,
            anti_inflammatory: false,
            target_micronutrients: Vec::new(),
            sort: SortStrategy::Unsorted,
            goals: MicronutrientGoals::default(),
        }
    }
}

/// Catalog search engine composing the scorer and resolver outputs
#[derive(Debug, Clone)]
pub struct CatalogSearchEngine {
    scoring: ScoringConfig,
    recommendation: RecommendationConfig,
}

impl Default for CatalogSearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSearchEngine {
    /// Create an engine from the global configuration
    #[must_use]
    pub fn new() -> Self {
        let config = IntelligenceConfig::global();
        Self {
            scoring: config.scoring.clone(),
            recommendation: config.recommendation.clone(),
        }
    }

    /// Create an engine with custom configuration
    #[must_use]
    pub const fn with_config(scoring: ScoringConfig, recommendation: RecommendationConfig) -> Self {
        Self {
            scoring,
            recommendation,
        }
    }

    /// Filter a catalog with the criteria's predicate chain, then order the
    /// survivors with the selected strategy
    #[must_use]
    pub fn filter_and_sort(&self, dishes: &[Dish], criteria: &FilterCriteria) -> Vec<Dish> {
        let mut results: Vec<Dish> = dishes
            .iter()
            .filter(|dish| self.passes(dish, criteria))
            .cloned()
            .collect();
        self.sort(&mut results, criteria.sort);
        results
    }

    /// Evaluate the full predicate chain for one dish
    fn passes(&self, dish: &Dish, criteria: &FilterCriteria) -> bool {
        let thresholds = &self.recommendation.thresholds;

        // 1. Name substring
        if !criteria.search_text.is_empty()
            && !dish
                .name
                .to_lowercase()
                .contains(&criteria.search_text.to_lowercase())
        {
            return false;
        }

        // 2. Ingredient substrings, AND semantics
        if !criteria.ingredients.is_empty() {
            let haystack = dish.ingredient_search_text();
            if !criteria
                .ingredients
                .iter()
                .all(|needle| haystack.contains(&needle.to_lowercase()))
            {
                return false;
            }
        }

        // 3. Meal type
        if let MealTypeFilter::Only(meal_type) = criteria.meal_type {
            if dish.meal_type != meal_type {
                return false;
            }
        }

        // 4. Total time range
        let total_time = dish.total_time_mins();
        if total_time < criteria.total_time_mins.0 || total_time > criteria.total_time_mins.1 {
            return false;
        }

        // 5. Calorie range
        if dish.calories < criteria.calorie_range.0 || dish.calories > criteria.calorie_range.1 {
            return false;
        }

        // 6. Minimum protein
        if dish.protein_g < criteria.min_protein_g {
            return false;
        }

        // 7. Dietary flags
        for flag in &criteria.dietary {
            if !Self::satisfies_dietary_flag(dish, *flag, thresholds.low_carb_max_g) {
                return false;
            }
        }

        // 8. Health score floor
        if criteria.min_health_score > 0.0
            && effective_health_score(dish, &self.scoring) < criteria.min_health_score
        {
            return false;
        }

        // 9. Rating floor (missing rating counts as 0)
        if dish.avg_rating.unwrap_or(0.0) < criteria.min_rating {
            return false;
        }

        // 10. Independent calorie ceiling
        if let Some(max_calories) = criteria.max_calories {
            if dish.calories > max_calories {
                return false;
            }
        }

        // 11. Fiber floor
        if dish.fiber_g < criteria.min_fiber_g {
            return false;
        }

        // 12. Anti-inflammatory rule: omega-3 OR fiber
        if criteria.anti_inflammatory {
            let omega3 = dish.micronutrient(Micronutrient::Omega3);
            if omega3 < thresholds.anti_inflammatory_omega3_mg
                && dish.fiber_g < thresholds.anti_inflammatory_fiber_g
            {
                return false;
            }
        }

        // 13. Target micronutrients: OR across the requested set
        if !criteria.target_micronutrients.is_empty() {
            let fraction = thresholds.target_micronutrient_pct / 100.0;
            let any_over = criteria.target_micronutrients.iter().any(|nutrient| {
                dish.micronutrient(*nutrient)
                    > resolve_target(*nutrient, &criteria.goals) * fraction
            });
            if !any_over {
                return false;
            }
        }

        true
    }

    /// Whether a dish satisfies one dietary flag
    fn satisfies_dietary_flag(dish: &Dish, flag: DietaryFlag, low_carb_max_g: f64) -> bool {
        if flag == DietaryFlag::LowCarb {
            return dish.carbs_g <= low_carb_max_g;
        }

        dish.tags.iter().any(|tag| {
            let tag = tag.to_lowercase();
            flag.tag_markers().iter().any(|marker| tag == *marker)
        })
    }

    /// Order results with the selected strategy; `sort_by` is stable, so
    /// equal-key dishes retain their catalog order
    fn sort(&self, dishes: &mut [Dish], strategy: SortStrategy) {
        match strategy {
            SortStrategy::HealthScore => dishes.sort_by(|a, b| {
                effective_health_score(b, &self.scoring)
                    .total_cmp(&effective_health_score(a, &self.scoring))
            }),
            SortStrategy::NutrientDensity => dishes.sort_by(|a, b| {
                (b.protein_g + b.fiber_g).total_cmp(&(a.protein_g + a.fiber_g))
            }),
            SortStrategy::Rating => dishes.sort_by(|a, b| {
                b.avg_rating
                    .unwrap_or(0.0)
                    .total_cmp(&a.avg_rating.unwrap_or(0.0))
            }),
            SortStrategy::AntiInflammatory => dishes.sort_by(|a, b| {
                b.micronutrient(Micronutrient::Omega3)
                    .total_cmp(&a.micronutrient(Micronutrient::Omega3))
            }),
            SortStrategy::Protein => {
                dishes.sort_by(|a, b| b.protein_g.total_cmp(&a.protein_g));
            }
            SortStrategy::Fiber => dishes.sort_by(|a, b| b.fiber_g.total_cmp(&a.fiber_g)),
            SortStrategy::Calories => dishes.sort_by(|a, b| a.calories.total_cmp(&b.calories)),
            SortStrategy::Unsorted => {}
        }
    }
}
