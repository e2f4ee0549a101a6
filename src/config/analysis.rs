// ABOUTME: Gap analysis configuration: deficiency/highlight thresholds and list caps
// ABOUTME: AnalysisConfig, GapThresholds, and AnalysisLimits defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Gap Analysis Configuration
//!
//! Percent-of-target thresholds that classify a nutrient as a high or medium
//! deficiency or a highlight, plus caps on the presented lists.

use serde::{Deserialize, Serialize};

/// Gap analysis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Percent-of-target classification thresholds
    pub thresholds: GapThresholds,
    /// Caps on presented deficiency/highlight lists
    pub limits: AnalysisLimits,
}

/// Percent-of-target thresholds for nutrient classification.
///
/// Below `deficiency_high_pct` is a high-severity deficiency; from there up to
/// (but excluding) `highlight_pct` is a medium deficiency; at or above
/// `highlight_pct` the nutrient is a highlight. The bands partition the range,
/// so one nutrient is never both deficient and highlighted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapThresholds {
    /// Upper bound (exclusive) of the high-severity deficiency band (percent)
    pub deficiency_high_pct: f64,
    /// Lower bound (inclusive) of the highlight band (percent)
    pub highlight_pct: f64,
}

impl Default for GapThresholds {
    fn default() -> Self {
        Self {
            deficiency_high_pct: 10.0,
            highlight_pct: 25.0,
        }
    }
}

/// Caps on presented analysis lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisLimits {
    /// Maximum deficiencies presented per analysis
    pub max_deficiencies: usize,
    /// Maximum highlights presented per analysis
    pub max_highlights: usize,
}

impl Default for AnalysisLimits {
    fn default() -> Self {
        Self {
            max_deficiencies: 5,
            max_highlights: 5,
        }
    }
}
