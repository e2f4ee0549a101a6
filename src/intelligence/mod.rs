// ABOUTME: Scoring, analysis, matching, and search engines over dish profiles
// ABOUTME: Module root re-exporting the main engine entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! The engine modules.
//!
//! Each engine is an independent, pure computation over sanitized
//! [`crate::models::Dish`] profiles; the catalog search engine composes the
//! scorer's and resolver's outputs into a final ordered list.

pub mod catalog_search;
pub mod gap_analyzer;
pub mod quality_scorer;
pub mod recommendation_engine;
pub mod targets;

pub use catalog_search::{CatalogSearchEngine, DietaryFlag, FilterCriteria, MealTypeFilter, SortStrategy};
pub use gap_analyzer::{
    analyze_nutrient_gaps, DeficiencySeverity, NutrientAssessment, NutrientGapReport,
};
pub use quality_scorer::{baseline_score, effective_health_score, score_dish, QualityScore};
pub use recommendation_engine::{MatchResult, RecommendationEngine};
pub use targets::{resolve_target, resolve_target_detailed, ResolvedTarget, TargetSource};
