// ABOUTME: Fixed micronutrient vocabulary with canonical units and RDI defaults
// ABOUTME: Micronutrient enum, NutrientUnit, and strict key parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

use crate::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical unit for a micronutrient amount
///
/// The unit is fixed per nutrient key and never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientUnit {
    /// International units (fat-soluble vitamins A and D)
    Iu,
    /// Milligrams
    Mg,
    /// Micrograms
    Mcg,
}

impl NutrientUnit {
    /// Abbreviation for display
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Iu => "IU",
            Self::Mg => "mg",
            Self::Mcg => "mcg",
        }
    }
}

/// The fixed micronutrient vocabulary tracked by the engine.
///
/// Extending this vocabulary is a breaking interface change: the richness
/// count, the gap analyzer, the RDI table, and the search predicates all
/// iterate [`Micronutrient::ALL`] in lockstep.
///
/// `Ord` follows declaration order, which is the canonical vocabulary order
/// used for stable iteration and reporting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Micronutrient {
    /// Vitamin A (IU)
    VitaminA,
    /// Vitamin C (mg)
    VitaminC,
    /// Vitamin D (IU)
    VitaminD,
    /// Vitamin E (mg)
    VitaminE,
    /// Vitamin K (mcg)
    VitaminK,
    /// Vitamin B6 (mg)
    VitaminB6,
    /// Vitamin B12 (mcg)
    VitaminB12,
    /// Folate (mcg)
    Folate,
    /// Calcium (mg)
    Calcium,
    /// Iron (mg)
    Iron,
    /// Magnesium (mg)
    Magnesium,
    /// Potassium (mg)
    Potassium,
    /// Zinc (mg)
    Zinc,
    /// Omega-3 fatty acids (mg)
    Omega3,
}

impl Micronutrient {
    /// Every nutrient in canonical vocabulary order
    pub const ALL: [Self; 14] = [
        Self::VitaminA,
        Self::VitaminC,
        Self::VitaminD,
        Self::VitaminE,
        Self::VitaminK,
        Self::VitaminB6,
        Self::VitaminB12,
        Self::Folate,
        Self::Calcium,
        Self::Iron,
        Self::Magnesium,
        Self::Potassium,
        Self::Zinc,
        Self::Omega3,
    ];

    /// Canonical `snake_case` key, matching the serde representation
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::VitaminA => "vitamin_a",
            Self::VitaminC => "vitamin_c",
            Self::VitaminD => "vitamin_d",
            Self::VitaminE => "vitamin_e",
            Self::VitaminK => "vitamin_k",
            Self::VitaminB6 => "vitamin_b6",
            Self::VitaminB12 => "vitamin_b12",
            Self::Folate => "folate",
            Self::Calcium => "calcium",
            Self::Iron => "iron",
            Self::Magnesium => "magnesium",
            Self::Potassium => "potassium",
            Self::Zinc => "zinc",
            Self::Omega3 => "omega3",
        }
    }

    /// Human-readable name for display and narrative payloads
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::VitaminA => "Vitamin A",
            Self::VitaminC => "Vitamin C",
            Self::VitaminD => "Vitamin D",
            Self::VitaminE => "Vitamin E",
            Self::VitaminK => "Vitamin K",
            Self::VitaminB6 => "Vitamin B6",
            Self::VitaminB12 => "Vitamin B12",
            Self::Folate => "Folate",
            Self::Calcium => "Calcium",
            Self::Iron => "Iron",
            Self::Magnesium => "Magnesium",
            Self::Potassium => "Potassium",
            Self::Zinc => "Zinc",
            Self::Omega3 => "Omega-3",
        }
    }

    /// Canonical unit for this nutrient's amounts
    #[must_use]
    pub const fn unit(self) -> NutrientUnit {
        match self {
            Self::VitaminA | Self::VitaminD => NutrientUnit::Iu,
            Self::VitaminC
            | Self::VitaminE
            | Self::VitaminB6
            | Self::Calcium
            | Self::Iron
            | Self::Magnesium
            | Self::Potassium
            | Self::Zinc
            | Self::Omega3 => NutrientUnit::Mg,
            Self::VitaminK | Self::VitaminB12 | Self::Folate => NutrientUnit::Mcg,
        }
    }

    /// System default recommended daily intake in this nutrient's canonical unit
    ///
    /// General adult values. Every default is strictly positive; the
    /// configuration loader validates this invariant at startup so downstream
    /// percent-of-target divisions never see a zero target.
    #[must_use]
    pub const fn default_daily_target(self) -> f64 {
        match self {
            Self::VitaminA => 5000.0,
            Self::VitaminC => 90.0,
            Self::VitaminD => 800.0,
            Self::VitaminE => 15.0,
            Self::VitaminK => 120.0,
            Self::VitaminB6 => 1.7,
            Self::VitaminB12 => 2.4,
            Self::Folate => 400.0,
            Self::Calcium => 1000.0,
            Self::Iron => 18.0,
            Self::Magnesium => 420.0,
            Self::Potassium => 4700.0,
            Self::Zinc => 11.0,
            Self::Omega3 => 1600.0,
        }
    }
}

impl fmt::Display for Micronutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Micronutrient {
    type Err = EngineError;

    /// Strict parse: unknown keys are rejected, never coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|n| n.key() == s)
            .copied()
            .ok_or_else(|| EngineError::UnknownNutrient { key: s.to_owned() })
    }
}
