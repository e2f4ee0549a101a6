// ABOUTME: Data models for the nutrition intelligence engine
// ABOUTME: Dish, Micronutrient, Ingredient, goals, budgets, and daily intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

//! Data models consumed and produced by the engines.
//!
//! Inputs are immutable for the duration of a scoring pass; every engine output
//! is a new derived value, never a mutation of the input record.

mod dish;
mod intake;
mod nutrient;

pub use dish::{Dish, Ingredient, MealType};
pub use intake::{DailyBudget, DailyIntake, LoggedMeal, MacroTargets, MicronutrientGoals};
pub use nutrient::{Micronutrient, NutrientUnit};
