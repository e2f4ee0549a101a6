// ABOUTME: Engine configuration umbrella with global singleton and env overrides
// ABOUTME: IntelligenceConfig, load/validate pipeline, and startup RDI validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Engine configuration.
//!
//! All tunables live in serde-derived structs whose `Default` impls carry the
//! documented values. [`IntelligenceConfig::global`] exposes a lazily-loaded
//! singleton; [`IntelligenceConfig::load`] applies `MORSEL_*` environment
//! overrides and runs the startup validation pass, which includes the RDI
//! default-table positivity check.

mod analysis;
mod error;
mod recommendation;
mod scoring;

pub use analysis::{AnalysisConfig, AnalysisLimits, GapThresholds};
pub use error::ConfigError;
pub use recommendation::{RecommendationConfig, RecommendationLimits, SearchThresholds};
pub use scoring::{BaselineScoring, ScoringConfig, ScoringWeights};

use crate::intelligence::targets::validate_default_targets;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Tolerance for the scoring weight-sum invariant
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Top-level configuration for every engine in the crate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Quality scoring weights and baseline tuning
    pub scoring: ScoringConfig,
    /// Gap analysis thresholds and limits
    pub analysis: AnalysisConfig,
    /// Recommendation limits and search thresholds
    pub recommendation: RecommendationConfig,
}

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

impl IntelligenceConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an invalid value
    /// or the final configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// This is the startup validation pass: misconfiguration is caught here,
    /// once, so per-call engine logic never special-cases bad tables.
    ///
    /// # Errors
    ///
    /// Returns an error when weights don't sum to 1.0, thresholds are out of
    /// order, a limit is zero, or an RDI default is non-positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (self.scoring.weights.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "Scoring weights must sum to exactly 1.0",
            ));
        }

        let thresholds = &self.analysis.thresholds;
        if thresholds.deficiency_high_pct <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "deficiency_high_pct must be positive",
            ));
        }
        if thresholds.deficiency_high_pct >= thresholds.highlight_pct {
            return Err(ConfigError::InvalidRange(
                "deficiency_high_pct must be < highlight_pct",
            ));
        }

        if self.analysis.limits.max_deficiencies == 0 || self.analysis.limits.max_highlights == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "analysis limits must be positive",
            ));
        }
        if self.recommendation.limits.max_suggestions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_suggestions must be positive",
            ));
        }

        let search = &self.recommendation.thresholds;
        if search.target_micronutrient_pct <= 0.0 || search.target_micronutrient_pct > 100.0 {
            return Err(ConfigError::ValueOutOfRange(
                "target_micronutrient_pct must be in (0, 100]",
            ));
        }

        validate_default_targets()?;

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = std::env::var("MORSEL_MAX_SUGGESTIONS") {
            self.recommendation.limits.max_suggestions = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid MORSEL_MAX_SUGGESTIONS".into()))?;
        }

        if let Ok(val) = std::env::var("MORSEL_MAX_HIGHLIGHTS") {
            self.analysis.limits.max_highlights = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid MORSEL_MAX_HIGHLIGHTS".into()))?;
        }

        if let Ok(val) = std::env::var("MORSEL_MAX_DEFICIENCIES") {
            self.analysis.limits.max_deficiencies = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid MORSEL_MAX_DEFICIENCIES".into()))?;
        }

        Ok(self)
    }
}
