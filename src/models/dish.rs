// ABOUTME: Dish nutrient profile model with ingredients, tags, and derived fields
// ABOUTME: Defines Dish, Ingredient, MealType, and the boundary sanitization pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

use super::nutrient::Micronutrient;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type of meal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    #[default]
    Other,
}

impl MealType {
    /// Parse meal type from string, mapping unknown values to [`Self::Other`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            _ => Self::Other,
        }
    }
}

/// A recipe ingredient as it arrives from the catalog.
///
/// Upstream records carry ingredients in two shapes: a plain display string,
/// or a structured amount/unit/name object. Both resolve to a canonical search
/// string here at the model boundary; call sites never branch on the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    /// Plain display string ("2 cups cooked rice")
    Simple(String),
    /// Structured amount, unit, and name
    Structured {
        /// Quantity in the given unit
        #[serde(skip_serializing_if = "Option::is_none")]
        amount: Option<f64>,
        /// Measurement unit as recorded upstream
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        /// Ingredient name
        name: String,
    },
}

impl Ingredient {
    /// Create a structured ingredient
    #[must_use]
    pub fn structured(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self::Structured {
            amount: Some(amount),
            unit: Some(unit.into()),
            name: name.into(),
        }
    }

    /// Canonical lower-cased text used for substring search
    #[must_use]
    pub fn search_text(&self) -> String {
        match self {
            Self::Simple(text) => text.to_lowercase(),
            Self::Structured { name, .. } => name.to_lowercase(),
        }
    }
}

impl From<&str> for Ingredient {
    fn from(s: &str) -> Self {
        Self::Simple(s.to_owned())
    }
}

/// One food item, recipe, or logged dish with its nutrient profile.
///
/// `calories == 0` is a valid "unknown/placeholder" state; every downstream
/// formula guards its denominator, so a zero-calorie dish scores finitely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    /// Opaque catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
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
    /// Sparse micronutrient amounts in each nutrient's canonical unit
    #[serde(default)]
    pub micronutrients: BTreeMap<Micronutrient, f64>,
    /// Ingredient list
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Free-form tags (dietary markers, cuisine, allergen exclusions)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Meal type this dish is intended for
    #[serde(default)]
    pub meal_type: MealType,
    /// Preparation time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time_mins: Option<u16>,
    /// Cooking time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time_mins: Option<u16>,
    /// Catalog pre-computed health score, if one was stored (not authoritative)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    /// Average user rating (not authoritative)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_rating: Option<f64>,
    /// Number of reviews behind `avg_rating`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

/// Clamp a raw numeric to a non-negative finite value.
///
/// Negative and non-finite inputs become 0 at this boundary so no formula
/// downstream ever sees them.
fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl Dish {
    /// Create a dish with all nutrient values zeroed
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            fiber_g: 0.0,
            sugar_g: 0.0,
            sodium_mg: 0.0,
            micronutrients: BTreeMap::new(),
            ingredients: Vec::new(),
            tags: Vec::new(),
            meal_type: MealType::Other,
            prep_time_mins: None,
            cook_time_mins: None,
            health_score: None,
            avg_rating: None,
            review_count: None,
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

    /// Set fiber (grams)
    #[must_use]
    pub const fn with_fiber(mut self, fiber_g: f64) -> Self {
        self.fiber_g = fiber_g;
        self
    }

    /// Set sugar (grams)
    #[must_use]
    pub const fn with_sugar(mut self, sugar_g: f64) -> Self {
        self.sugar_g = sugar_g;
        self
    }

    /// Set sodium (milligrams)
    #[must_use]
    pub const fn with_sodium(mut self, sodium_mg: f64) -> Self {
        self.sodium_mg = sodium_mg;
        self
    }

    /// Record a micronutrient amount in its canonical unit
    #[must_use]
    pub fn with_micronutrient(mut self, nutrient: Micronutrient, amount: f64) -> Self {
        self.micronutrients.insert(nutrient, amount);
        self
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: impl Into<Ingredient>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the meal type
    #[must_use]
    pub const fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = meal_type;
        self
    }

    /// Set preparation and cooking times
    #[must_use]
    pub const fn with_times(mut self, prep_mins: u16, cook_mins: u16) -> Self {
        self.prep_time_mins = Some(prep_mins);
        self.cook_time_mins = Some(cook_mins);
        self
    }

    /// Set a catalog pre-computed health score
    #[must_use]
    pub const fn with_health_score(mut self, score: f64) -> Self {
        self.health_score = Some(score);
        self
    }

    /// Set rating data
    #[must_use]
    pub const fn with_rating(mut self, avg_rating: f64, review_count: u32) -> Self {
        self.avg_rating = Some(avg_rating);
        self.review_count = Some(review_count);
        self
    }

    /// Return a copy with every numeric clamped to a non-negative finite value.
    ///
    /// This is the ingestion boundary: engines assume sanitized input and never
    /// re-clamp inside their formulas.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let mut dish = self.clone();
        dish.calories = sanitize_amount(dish.calories);
        dish.protein_g = sanitize_amount(dish.protein_g);
        dish.carbs_g = sanitize_amount(dish.carbs_g);
        dish.fat_g = sanitize_amount(dish.fat_g);
        dish.fiber_g = sanitize_amount(dish.fiber_g);
        dish.sugar_g = sanitize_amount(dish.sugar_g);
        dish.sodium_mg = sanitize_amount(dish.sodium_mg);
        for amount in dish.micronutrients.values_mut() {
            *amount = sanitize_amount(*amount);
        }
        dish.health_score = dish.health_score.map(sanitize_amount);
        dish.avg_rating = dish.avg_rating.map(sanitize_amount);
        dish
    }

    /// Amount recorded for a micronutrient, 0 when absent
    #[must_use]
    pub fn micronutrient(&self, nutrient: Micronutrient) -> f64 {
        self.micronutrients.get(&nutrient).copied().unwrap_or(0.0)
    }

    /// Total preparation plus cooking time; missing components count as 0
    #[must_use]
    pub fn total_time_mins(&self) -> u32 {
        u32::from(self.prep_time_mins.unwrap_or(0)) + u32::from(self.cook_time_mins.unwrap_or(0))
    }

    /// Whether any macro, sodium, or micronutrient value is recorded.
    ///
    /// Gates the deprecated base-50 scoring fallback: only a dish with
    /// literally zero recorded nutrient detail falls back.
    #[must_use]
    pub fn has_nutrient_detail(&self) -> bool {
        self.calories > 0.0
            || self.protein_g > 0.0
            || self.carbs_g > 0.0
            || self.fat_g > 0.0
            || self.fiber_g > 0.0
            || self.sugar_g > 0.0
            || self.sodium_mg > 0.0
            || self.micronutrients.values().any(|amount| *amount > 0.0)
    }

    /// Concatenated lower-cased ingredient text used for substring search
    #[must_use]
    pub fn ingredient_search_text(&self) -> String {
        self.ingredients
            .iter()
            .map(Ingredient::search_text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn sanitized_clamps_negative_and_non_finite_values() {
        let dish = Dish::new("d1", "Bad record")
            .with_macros(f64::NAN, -5.0, 30.0, f64::INFINITY)
            .with_sugar(-1.0)
            .with_micronutrient(Micronutrient::Iron, -2.0)
            .sanitized();

        assert_eq!(dish.calories, 0.0);
        assert_eq!(dish.protein_g, 0.0);
        assert_eq!(dish.carbs_g, 30.0);
        assert_eq!(dish.fat_g, 0.0);
        assert_eq!(dish.sugar_g, 0.0);
        assert_eq!(dish.micronutrient(Micronutrient::Iron), 0.0);
    }

    #[test]
    fn total_time_treats_missing_components_as_zero() {
        let dish = Dish::new("d1", "No times");
        assert_eq!(dish.total_time_mins(), 0);

        let timed = Dish::new("d2", "Timed").with_times(15, 30);
        assert_eq!(timed.total_time_mins(), 45);
    }

    #[test]
    fn ingredient_shapes_resolve_to_one_search_text() {
        let dish = Dish::new("d1", "Chicken rice")
            .with_ingredient("2 cups Cooked Rice")
            .with_ingredient(Ingredient::structured("Chicken Breast", 200.0, "g"));

        let text = dish.ingredient_search_text();
        assert!(text.contains("cooked rice"));
        assert!(text.contains("chicken breast"));
    }

    #[test]
    fn nutrient_detail_gate() {
        assert!(!Dish::new("d1", "Empty").has_nutrient_detail());
        assert!(Dish::new("d2", "Sodium only")
            .with_sodium(100.0)
            .has_nutrient_detail());
        assert!(Dish::new("d3", "Micro only")
            .with_micronutrient(Micronutrient::VitaminC, 10.0)
            .has_nutrient_detail());
    }

    #[test]
    fn untagged_ingredient_deserializes_both_shapes() {
        let simple: Ingredient = serde_json::from_str("\"1 tbsp olive oil\"").unwrap();
        assert_eq!(simple.search_text(), "1 tbsp olive oil");

        let structured: Ingredient =
            serde_json::from_str(r#"{"amount": 2.0, "unit": "cups", "name": "Spinach"}"#).unwrap();
        assert_eq!(structured.search_text(), "spinach");
    }
}
