// ABOUTME: Shared nutrition constants used throughout the scoring engines
// ABOUTME: Atwater energy factors, daily intake references, and scoring bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Nutrition constants based on established dietary guidelines.
//!
//! These values are shared by every engine in the crate. They are deliberately
//! consolidated here: the same reference value must never be duplicated with a
//! divergent copy at another call site.

/// Atwater general energy factors
///
/// Reference: Atwater, W.O. & Bryant, A.P. (1900). The availability and fuel
/// value of food materials. USDA Agricultural Experiment Station Report.
pub mod energy {
    /// Energy yield of protein (kcal per gram)
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;

    /// Energy yield of carbohydrate, including fiber (kcal per gram)
    pub const CARBS_KCAL_PER_G: f64 = 4.0;

    /// Energy yield of fat (kcal per gram)
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Daily intake reference values for macro-level nutrients
///
/// Sugar and sodium carry "maximum, not to exceed" semantics; fiber is a
/// minimum. The sugar and sodium values are exactly the denominators of the
/// processed-food penalty.
pub mod daily_intake {
    /// Added-sugar daily value (grams)
    ///
    /// Reference: FDA daily value for added sugars, 21 CFR 101.9(c)(9)
    pub const SUGAR_DAILY_LIMIT_G: f64 = 50.0;

    /// Sodium daily limit (milligrams)
    ///
    /// Reference: FDA daily value for sodium; 2020-2025 Dietary Guidelines
    pub const SODIUM_DAILY_LIMIT_MG: f64 = 2300.0;

    /// Minimum recommended daily fiber (grams)
    pub const FIBER_DAILY_MIN_G: f64 = 25.0;
}

/// Scoring bounds and per-dish reference amounts
pub mod scoring {
    /// Lower bound for every component and composite score
    pub const SCORE_MIN: f64 = 0.0;

    /// Upper bound for every component and composite score
    pub const SCORE_MAX: f64 = 100.0;

    /// Per-dish fiber amount that earns a full fiber-content score (grams)
    pub const FIBER_FULL_SCORE_G: f64 = 10.0;
}
