// ABOUTME: Main library entry point for the Morsel nutrition intelligence engine
// ABOUTME: Quality scoring, RDI gap analysis, budget matching, and catalog search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

#![deny(unsafe_code)]

//! # Morsel Intelligence
//!
//! The nutrition scoring and recommendation engine behind the Morsel platform.
//! Every operation is a pure, synchronous computation over already-materialized
//! in-memory collections: the engine has no network, file, or CLI surface, never
//! mutates its inputs, and is safe to call concurrently from multiple callers.
//!
//! ## Engines
//!
//! - **Quality scoring** ([`intelligence::quality_scorer`]): five-component
//!   weighted health score per dish, with a deprecated base-50 fallback for
//!   dishes with no recorded nutrient detail.
//! - **Gap analysis** ([`intelligence::gap_analyzer`]): per-nutrient
//!   deficiency/highlight classification against personalized or default RDI
//!   targets.
//! - **Budget matching** ([`intelligence::recommendation_engine`]): ranks
//!   candidate dishes against a user's remaining daily macro budget.
//! - **Catalog search** ([`intelligence::catalog_search`]): multi-criteria
//!   threshold filtering plus selectable sort strategies over a dish catalog.
//!
//! ## Example
//!
//! ```rust
//! use morsel_intelligence::config::ScoringConfig;
//! use morsel_intelligence::intelligence::quality_scorer::score_dish;
//! use morsel_intelligence::models::Dish;
//!
//! let dish = Dish::new("dish_1", "Salmon bowl")
//!     .with_macros(450.0, 32.0, 40.0, 16.0)
//!     .with_fiber(6.0);
//!
//! let score = score_dish(&dish, &ScoringConfig::default());
//! assert!(score.overall >= 0.0 && score.overall <= 100.0);
//! ```

/// Engine configuration: scoring weights, analysis thresholds, limits
pub mod config;

/// Shared nutrition constants (Atwater factors, daily intake references)
pub mod constants;

/// Engine error types
pub mod errors;

/// Scoring, analysis, matching, and search engines
pub mod intelligence;

/// Data models: dishes, nutrients, goals, intake
pub mod models;

pub use errors::{EngineError, EngineResult};
