// ABOUTME: Per-nutrient deficiency and highlight classification against RDI targets
// ABOUTME: analyze_nutrient_gaps, NutrientAssessment, and the narrative insight payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Deficiency & Highlight Analyzer
//!
//! Compares a dish's (or a day's aggregated) micronutrient amounts against the
//! resolved targets and classifies each nutrient independently:
//!
//! - below the high-deficiency threshold: high-severity deficiency
//! - from there up to the highlight threshold: medium-severity deficiency
//! - at or above the highlight threshold: highlight ("excellent source")
//!
//! The bands partition the percent range, so a single nutrient is never both
//! deficient and highlighted; different nutrients of one dish can land on both
//! lists. Fiber, sugar, and sodium carry macro-level inverse targets and are
//! excluded from this vocabulary by construction.

use super::targets::resolve_target;
use crate::config::AnalysisConfig;
use crate::models::{Dish, Micronutrient, MicronutrientGoals};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Severity band of a nutrient deficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeficiencySeverity {
    /// Below the high-deficiency threshold of the target
    High,
    /// Between the high-deficiency and highlight thresholds
    Medium,
}

impl DeficiencySeverity {
    /// Display label for presentation and narrative payloads
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

/// One nutrient's assessment against its resolved target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientAssessment {
    /// The assessed nutrient
    pub nutrient: Micronutrient,
    /// Recorded amount in the nutrient's canonical unit
    pub amount: f64,
    /// Resolved daily target
    pub target: f64,
    /// Amount as a percent of the target
    pub percent_of_target: f64,
    /// Deficiency severity; `None` for highlights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<DeficiencySeverity>,
}

/// Output of a gap analysis pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientGapReport {
    /// Deficient nutrients in vocabulary order, capped for presentation
    pub deficiencies: Vec<NutrientAssessment>,
    /// Highlight nutrients sorted by percent of target descending, capped
    pub highlights: Vec<NutrientAssessment>,
}

impl NutrientGapReport {
    /// Numbers and labels shaped for an external narrative/coaching
    /// collaborator.
    ///
    /// The engine produces the payload but never calls the text-generation
    /// service itself.
    #[must_use]
    pub fn insight_payload(&self) -> serde_json::Value {
        json!({
            "deficiencies": self
                .deficiencies
                .iter()
                .map(|assessment| {
                    json!({
                        "nutrient": assessment.nutrient.key(),
                        "name": assessment.nutrient.display_name(),
                        "amount": assessment.amount,
                        "unit": assessment.nutrient.unit().abbreviation(),
                        "target": assessment.target,
                        "percent_of_target": assessment.percent_of_target,
                        "severity": assessment.severity.map(|s| s.label()),
                    })
                })
                .collect::<Vec<_>>(),
            "highlights": self
                .highlights
                .iter()
                .map(|assessment| {
                    json!({
                        "nutrient": assessment.nutrient.key(),
                        "name": assessment.nutrient.display_name(),
                        "percent_of_target": assessment.percent_of_target,
                    })
                })
                .collect::<Vec<_>>(),
        })
    }
}

/// Classify every vocabulary nutrient of a profile against resolved targets.
///
/// Deficiencies retain vocabulary iteration order; highlights are
/// threshold-filtered first, then stably sorted by percent of target
/// descending, then capped (filter-then-cap, never cap-then-filter).
#[must_use]
pub fn analyze_nutrient_gaps(
    profile: &Dish,
    goals: &MicronutrientGoals,
    config: &AnalysisConfig,
) -> NutrientGapReport {
    let thresholds = &config.thresholds;
    let mut deficiencies = Vec::new();
    let mut highlights = Vec::new();

    for nutrient in Micronutrient::ALL {
        let amount = profile.micronutrient(nutrient);
        let target = resolve_target(nutrient, goals);
        let percent_of_target = amount / target * 100.0;

        if percent_of_target < thresholds.deficiency_high_pct {
            deficiencies.push(NutrientAssessment {
                nutrient,
                amount,
                target,
                percent_of_target,
                severity: Some(DeficiencySeverity::High),
            });
        } else if percent_of_target < thresholds.highlight_pct {
            deficiencies.push(NutrientAssessment {
                nutrient,
                amount,
                target,
                percent_of_target,
                severity: Some(DeficiencySeverity::Medium),
            });
        } else {
            highlights.push(NutrientAssessment {
                nutrient,
                amount,
                target,
                percent_of_target,
                severity: None,
            });
        }
    }

    deficiencies.truncate(config.limits.max_deficiencies);

    highlights.sort_by(|a, b| b.percent_of_target.total_cmp(&a.percent_of_target));
    highlights.truncate(config.limits.max_highlights);

    NutrientGapReport {
        deficiencies,
        highlights,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::config::AnalysisLimits;

    /// Analysis config whose deficiency cap admits the whole vocabulary, so a
    /// mostly-empty fixture cannot truncate the nutrient under test
    fn uncapped_analysis() -> AnalysisConfig {
        AnalysisConfig {
            limits: AnalysisLimits {
                max_deficiencies: Micronutrient::ALL.len(),
                ..AnalysisLimits::default()
            },
            ..AnalysisConfig::default()
        }
    }

    #[test]
    fn boundary_percent_is_medium_not_high() {
        // Override iron to 10; 1.0 recorded is exactly 10% of target
        let goals = MicronutrientGoals::default().with_override(Micronutrient::Iron, 10.0);
        let dish = Dish::new("d1", "Boundary dish").with_micronutrient(Micronutrient::Iron, 1.0);

        let report = analyze_nutrient_gaps(&dish, &goals, &uncapped_analysis());
        let iron = report
            .deficiencies
            .iter()
            .find(|a| a.nutrient == Micronutrient::Iron)
            .unwrap();

        assert_eq!(iron.percent_of_target, 10.0);
        assert_eq!(iron.severity, Some(DeficiencySeverity::Medium));
    }

    #[test]
    fn no_nutrient_is_both_deficient_and_highlighted() {
        let dish = Dish::new("d1", "Mixed dish")
            .with_micronutrient(Micronutrient::VitaminC, 45.0)
            .with_micronutrient(Micronutrient::Iron, 1.0);

        let report =
            analyze_nutrient_gaps(&dish, &MicronutrientGoals::default(), &AnalysisConfig::default());
        for highlight in &report.highlights {
            assert!(report
                .deficiencies
                .iter()
                .all(|deficiency| deficiency.nutrient != highlight.nutrient));
        }
    }

    #[test]
    fn insight_payload_carries_labels_and_percentages() {
        let dish = Dish::new("d1", "Payload dish")
            .with_micronutrient(Micronutrient::VitaminC, 90.0);
        let report =
            analyze_nutrient_gaps(&dish, &MicronutrientGoals::default(), &AnalysisConfig::default());

        let payload = report.insight_payload();
        assert!(payload["deficiencies"].is_array());
        let highlight = &payload["highlights"][0];
        assert_eq!(highlight["nutrient"], "vitamin_c");
        assert_eq!(highlight["percent_of_target"], 100.0);
    }
}
