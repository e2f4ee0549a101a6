// ABOUTME: User goal, budget, and daily intake models for gap analysis and matching
// ABOUTME: MicronutrientGoals, MacroTargets, DailyBudget, LoggedMeal, DailyIntake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

use super::dish::{Dish, MealType};
use super::nutrient::Micronutrient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Sparse per-user micronutrient target overrides.
///
/// Only overridden keys are present; every other nutrient falls back to the
/// system default table. Non-positive or non-finite override values are
/// ignored at resolution time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MicronutrientGoals {
    /// Owning user
    pub user_id: Uuid,
    /// Overridden daily targets in each nutrient's canonical unit
    #[serde(default)]
    pub overrides: HashMap<Micronutrient, f64>,
}

impl MicronutrientGoals {
    /// Create an empty goal set for a user
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            overrides: HashMap::new(),
        }
    }

    /// Add a target override
    #[must_use]
    pub fn with_override(mut self, nutrient: Micronutrient, target: f64) -> Self {
        self.overrides.insert(nutrient, target);
        self
    }
}

impl Default for MicronutrientGoals {
    /// Anonymous goal set with no overrides: every nutrient resolves to the
    /// system default
    fn default() -> Self {
        Self::new(Uuid::nil())
    }
}

/// Daily macro targets used to derive a remaining budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Daily calorie target (kcal)
    pub calories: f64,
    /// Daily protein target (grams)
    pub protein_g: f64,
    /// Daily carbohydrate target (grams)
    pub carbs_g: f64,
    /// Daily fat target (grams)
    pub fat_g: f64,
}

/// A user's remaining macro allowance for recommendation matching.
///
/// Each field may be negative, meaning the target is already exceeded;
/// candidates are then excluded or collapse to a 0 match score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyBudget {
    /// Remaining calories (kcal)
    pub calories: f64,
    /// Remaining protein (grams)
    pub protein_g: f64,
    /// Remaining carbohydrates (grams)
    pub carbs_g: f64,
    /// Remaining fat (grams)
    pub fat_g: f64,
}

impl DailyBudget {
    /// Derive the remaining budget from daily targets minus logged intake.
    ///
    /// `activity_credit_kcal` is an optional wearable-derived calorie credit;
    /// it adjusts calories only, never the macro gram budgets.
    #[must_use]
    pub fn remaining(targets: &MacroTargets, intake: &DailyIntake, activity_credit_kcal: f64) -> Self {
        Self {
            calories: targets.calories - intake.calories + activity_credit_kcal,
            protein_g: targets.protein_g - intake.protein_g,
            carbs_g: targets.carbs_g - intake.carbs_g,
            fat_g: targets.fat_g - intake.fat_g,
        }
    }
}

/// One logged meal with its nutrient totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedMeal {
    /// Opaque log identifier
    pub id: String,
    /// Meal name as logged
    pub name: String,
    /// Meal slot
    #[serde(default)]
    pub meal_type: MealType,
    /// When the meal was consumed
    pub consumed_at: DateTime<Utc>,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (grams)
    #[serde(default)]
    pub protein_g: f64,
    /// Carbohydrates (grams)
    #[serde(default)]
    pub carbs_g: f64,
    /// Fat (grams)
    #[serde(default)]
    pub fat_g: f64,
    /// Fiber (grams)
    #[serde(default)]
    pub fiber_g: f64,
    /// Sugar (grams)
    #[serde(default)]
    pub sugar_g: f64,
    /// Sodium (milligrams)
    #[serde(default)]
    pub sodium_mg: f64,
    /// Sparse micronutrient amounts in canonical units
    #[serde(default)]
    pub micronutrients: BTreeMap<Micronutrient, f64>,
}

impl LoggedMeal {
    /// Create a logged meal with zeroed nutrients
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, consumed_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            meal_type: MealType::Other,
            consumed_at,
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            fiber_g: 0.0,
            sugar_g: 0.0,
            sodium_mg: 0.0,
            micronutrients: BTreeMap::new(),
        }
    }

    /// Set the four core macros at once
    #[must_use]
    pub fn with_macros(mut self, calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        self.calories = calories;
        self.protein_g = protein_g;
        self.carbs_g = carbs_g;
        self.fat_g = fat_g;
        self
    }

    /// Record a micronutrient amount in its canonical unit
    #[must_use]
    pub fn with_micronutrient(mut self, nutrient: Micronutrient, amount: f64) -> Self {
        self.micronutrients.insert(nutrient, amount);
        self
    }
}

/// Aggregated nutrient totals over a day's logged meals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyIntake {
    /// Total energy (kcal)
    pub calories: f64,
    /// Total protein (grams)
    pub protein_g: f64,
    /// Total carbohydrates (grams)
    pub carbs_g: f64,
    /// Total fat (grams)
    pub fat_g: f64,
    /// Total fiber (grams)
    pub fiber_g: f64,
    /// Total sugar (grams)
    pub sugar_g: f64,
    /// Total sodium (milligrams)
    pub sodium_mg: f64,
    /// Summed micronutrient amounts in canonical units
    pub micronutrients: BTreeMap<Micronutrient, f64>,
}

impl DailyIntake {
    /// Sum a day's logged meals into one aggregate
    #[must_use]
    pub fn from_meals(meals: &[LoggedMeal]) -> Self {
        let mut intake = Self::default();
        for meal in meals {
            intake.calories += meal.calories;
            intake.protein_g += meal.protein_g;
            intake.carbs_g += meal.carbs_g;
            intake.fat_g += meal.fat_g;
            intake.fiber_g += meal.fiber_g;
            intake.sugar_g += meal.sugar_g;
            intake.sodium_mg += meal.sodium_mg;
            for (nutrient, amount) in &meal.micronutrients {
                *intake.micronutrients.entry(*nutrient).or_insert(0.0) += amount;
            }
        }
        intake
    }

    /// View the aggregate as a dish-shaped profile so the gap analyzer runs
    /// unchanged over a whole day
    #[must_use]
    pub fn as_profile(&self) -> Dish {
        let mut dish = Dish::new("daily_intake", "Daily intake").with_macros(
            self.calories,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
        );
        dish.fiber_g = self.fiber_g;
        dish.sugar_g = self.sugar_g;
        dish.sodium_mg = self.sodium_mg;
        dish.micronutrients = self.micronutrients.clone();
        dish
    }
}
