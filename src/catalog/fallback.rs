// ABOUTME: Built-in five-dish catalog used when no dataset can be loaded
// ABOUTME: Keeps the recommender usable without a catalog file on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use meal_core::models::MealCandidate;

/// (name, calories, protein, carbs, fat)
const FALLBACK_MEALS: [(&str, f64, f64, f64, f64); 5] = [
    ("Chicken Curry", 300.0, 25.0, 15.0, 18.0),
    ("Dal Tadka", 200.0, 15.0, 30.0, 8.0),
    ("Paneer Tikka", 250.0, 18.0, 10.0, 15.0),
    ("Biryani", 400.0, 20.0, 50.0, 15.0),
    ("Roti", 100.0, 5.0, 20.0, 2.0),
];

/// The fallback dishes in catalog order
#[must_use]
pub fn fallback_meals() -> Vec<MealCandidate> {
    FALLBACK_MEALS
        .iter()
        .map(|&(name, calories, protein, carbs, fat)| {
            MealCandidate::new(name, calories, protein, carbs, fat)
        })
        .collect()
}
