// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Deterministic dish catalogs, logged meals, and goal sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Morsel Nutrition Intelligence

#![allow(dead_code)] // each integration test binary uses a subset
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{TimeZone, Utc};
use morsel_intelligence::models::{Dish, LoggedMeal, MealType, Micronutrient};

/// The worked scoring example: 200 kcal, high protein, low sugar and sodium,
/// one recorded micronutrient
pub fn grilled_chicken_bowl() -> Dish {
    Dish::new("dish_chicken_bowl", "Grilled Chicken Bowl")
        .with_macros(200.0, 20.0, 10.0, 5.0)
        .with_fiber(8.0)
        .with_sugar(2.0)
        .with_sodium(100.0)
        .with_micronutrient(Micronutrient::VitaminC, 45.0)
        .with_ingredient("chicken breast")
        .with_ingredient("brown rice")
        .with_meal_type(MealType::Lunch)
        .with_times(10, 20)
        .with_rating(4.5, 120)
}

/// A small deterministic catalog spanning meal types, tags, and detail levels
pub fn sample_catalog() -> Vec<Dish> {
    vec![
        grilled_chicken_bowl(),
        Dish::new("dish_oatmeal", "Berry Oatmeal")
            .with_macros(320.0, 11.0, 54.0, 7.0)
            .with_fiber(9.0)
            .with_sugar(12.0)
            .with_sodium(150.0)
            .with_micronutrient(Micronutrient::Iron, 3.5)
            .with_micronutrient(Micronutrient::Magnesium, 110.0)
            .with_ingredient("rolled oats")
            .with_ingredient("blueberries")
            .with_tag("vegetarian")
            .with_meal_type(MealType::Breakfast)
            .with_times(5, 10)
            .with_rating(4.2, 88),
        Dish::new("dish_salmon", "Seared Salmon Plate")
            .with_macros(480.0, 38.0, 12.0, 28.0)
            .with_fiber(4.0)
            .with_sugar(3.0)
            .with_sodium(420.0)
            .with_micronutrient(Micronutrient::Omega3, 1800.0)
            .with_micronutrient(Micronutrient::VitaminD, 570.0)
            .with_micronutrient(Micronutrient::VitaminB12, 4.5)
            .with_ingredient("salmon fillet")
            .with_ingredient("asparagus")
            .with_tag("no_gluten")
            .with_tag("dairy_free")
            .with_meal_type(MealType::Dinner)
            .with_times(10, 15)
            .with_rating(4.8, 210),
        Dish::new("dish_pasta", "Creamy Pasta")
            .with_macros(720.0, 18.0, 92.0, 30.0)
            .with_fiber(3.0)
            .with_sugar(8.0)
            .with_sodium(900.0)
            .with_ingredient("penne")
            .with_ingredient("heavy cream")
            .with_tag("vegetarian")
            .with_meal_type(MealType::Dinner)
            .with_times(10, 25)
            .with_rating(4.0, 340),
        Dish::new("dish_lentil_soup", "Lentil Soup")
            .with_macros(260.0, 16.0, 40.0, 4.0)
            .with_fiber(12.0)
            .with_sugar(5.0)
            .with_sodium(480.0)
            .with_micronutrient(Micronutrient::Iron, 6.0)
            .with_micronutrient(Micronutrient::Folate, 180.0)
            .with_micronutrient(Micronutrient::Potassium, 730.0)
            .with_ingredient("red lentils")
            .with_ingredient("carrot")
            .with_tag("vegan")
            .with_tag("vegetarian")
            .with_tag("gluten_free")
            .with_meal_type(MealType::Lunch)
            .with_times(10, 30)
            .with_rating(4.6, 95),
        Dish::new("dish_omelette", "Three Egg Omelette")
            .with_macros(340.0, 21.0, 4.0, 26.0)
            .with_fiber(1.0)
            .with_sugar(2.0)
            .with_sodium(390.0)
            .with_micronutrient(Micronutrient::VitaminB12, 1.6)
            .with_ingredient("eggs")
            .with_ingredient("cheddar")
            .with_tag("vegetarian")
            .with_tag("no_gluten")
            .with_meal_type(MealType::Breakfast)
            .with_times(5, 5)
            .with_rating(4.3, 150),
        // Catalog record with no nutrient detail at all
        Dish::new("dish_mystery", "House Special")
            .with_ingredient("seasonal vegetables")
            .with_meal_type(MealType::Dinner),
        // Stored catalog score, still no per-nutrient detail
        Dish::new("dish_prescored", "Chef Salad")
            .with_health_score(82.0)
            .with_ingredient("romaine")
            .with_ingredient("chicken breast")
            .with_meal_type(MealType::Lunch)
            .with_rating(3.9, 60),
    ]
}

/// Two meals making up a deterministic logged day
pub fn sample_day() -> Vec<LoggedMeal> {
    let morning = Utc.with_ymd_and_hms(2025, 3, 14, 8, 0, 0).unwrap();
    let noon = Utc.with_ymd_and_hms(2025, 3, 14, 12, 30, 0).unwrap();
    vec![
        LoggedMeal::new("log_1", "Berry Oatmeal", morning)
            .with_macros(320.0, 11.0, 54.0, 7.0)
            .with_micronutrient(Micronutrient::Iron, 2.0)
            .with_micronutrient(Micronutrient::Magnesium, 110.0),
        LoggedMeal::new("log_2", "Grilled Chicken Bowl", noon)
            .with_macros(200.0, 20.0, 10.0, 5.0)
            .with_micronutrient(Micronutrient::VitaminC, 45.0)
            .with_micronutrient(Micronutrient::Iron, 0.5),
    ]
}
