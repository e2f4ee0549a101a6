// ABOUTME: Two-tier RDI target resolution: user overrides layered over system defaults
// ABOUTME: resolve_target, auditable ResolvedTarget, and startup table validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Target resolution.
//!
//! The effective daily target for a nutrient is an explicit two-tier lookup:
//! a positive user override wins, otherwise the system default applies. The
//! tier that supplied the value is an inspectable fact
//! ([`ResolvedTarget::source`]), not a side effect of a map merge.
//!
//! Unknown nutrient keys are rejected at the string boundary
//! ([`Micronutrient::from_str`]); inside the engine the enum cannot hold an
//! invalid key. Resolution itself is therefore infallible and never returns a
//! non-positive target: defaults are validated at startup and non-positive
//! overrides are ignored.

use crate::config::ConfigError;
use crate::models::{Micronutrient, MicronutrientGoals};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which tier supplied a resolved target value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSource {
    /// A positive per-user override
    UserGoal,
    /// The system default RDI table
    SystemDefault,
}

/// A resolved target with its provenance
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResolvedTarget {
    /// The nutrient the target applies to
    pub nutrient: Micronutrient,
    /// Effective daily target in the nutrient's canonical unit; always > 0
    pub value: f64,
    /// Tier that supplied the value
    pub source: TargetSource,
}

/// Resolve the effective daily target for a nutrient.
///
/// A user override wins only when it is a positive finite number; anything
/// else falls through to the system default.
#[must_use]
pub fn resolve_target(nutrient: Micronutrient, goals: &MicronutrientGoals) -> f64 {
    resolve_target_detailed(nutrient, goals).value
}

/// Resolve the effective daily target with its provenance
#[must_use]
pub fn resolve_target_detailed(
    nutrient: Micronutrient,
    goals: &MicronutrientGoals,
) -> ResolvedTarget {
    if let Some(&override_value) = goals.overrides.get(&nutrient) {
        if override_value.is_finite() && override_value > 0.0 {
            return ResolvedTarget {
                nutrient,
                value: override_value,
                source: TargetSource::UserGoal,
            };
        }
        debug!(
            nutrient = nutrient.key(),
            value = override_value,
            "ignoring non-positive target override"
        );
    }

    ResolvedTarget {
        nutrient,
        value: nutrient.default_daily_target(),
        source: TargetSource::SystemDefault,
    }
}

/// Startup validation pass over the system RDI default table.
///
/// A non-positive default would make every intake an infinite percent of
/// target; that is a build-time invariant, not a runtime error path, so it is
/// checked once at configuration load.
///
/// # Errors
///
/// Returns an error if any default target is non-positive or non-finite
pub fn validate_default_targets() -> Result<(), ConfigError> {
    for nutrient in Micronutrient::ALL {
        let target = nutrient.default_daily_target();
        if !target.is_finite() || target <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "RDI default table contains a non-positive target",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn positive_override_wins() {
        let goals = MicronutrientGoals::default().with_override(Micronutrient::Iron, 10.0);
        let resolved = resolve_target_detailed(Micronutrient::Iron, &goals);
        assert_eq!(resolved.value, 10.0);
        assert_eq!(resolved.source, TargetSource::UserGoal);
    }

    #[test]
    fn missing_override_falls_back_to_default() {
        let goals = MicronutrientGoals::default();
        let resolved = resolve_target_detailed(Micronutrient::Iron, &goals);
        assert_eq!(resolved.value, 18.0);
        assert_eq!(resolved.source, TargetSource::SystemDefault);
    }

    #[test]
    fn non_positive_override_is_ignored() {
        let goals = MicronutrientGoals::default()
            .with_override(Micronutrient::Calcium, 0.0)
            .with_override(Micronutrient::Zinc, -4.0)
            .with_override(Micronutrient::Folate, f64::NAN);

        for nutrient in [
            Micronutrient::Calcium,
            Micronutrient::Zinc,
            Micronutrient::Folate,
        ] {
            let resolved = resolve_target_detailed(nutrient, &goals);
            assert_eq!(resolved.source, TargetSource::SystemDefault);
            assert!(resolved.value > 0.0);
        }
    }

    #[test]
    fn default_table_passes_validation() {
        validate_default_targets().unwrap();
    }
}
