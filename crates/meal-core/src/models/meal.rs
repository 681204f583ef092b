// ABOUTME: Meal candidate record loaded from the nutrition catalog
// ABOUTME: Immutable per-serving calories and macronutrients for one dish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A dish from the nutrition catalog, with per-serving values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCandidate {
    /// Dish name
    pub name: String,
    /// Energy per serving (kcal)
    pub calories: f64,
    /// Protein per serving (grams)
    pub protein: f64,
    /// Carbohydrates per serving (grams)
    #[serde(alias = "carbohydrates")]
    pub carbs: f64,
    /// Fat per serving (grams)
    #[serde(alias = "fats")]
    pub fat: f64,
}

impl MealCandidate {
    /// Build a candidate from its nutrient values
    #[must_use]
    pub fn new(name: impl Into<String>, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Protein density as grams of protein per 100 kcal
    ///
    /// Zero-calorie entries report a density of 0 instead of dividing by zero.
    #[must_use]
    pub fn protein_ratio(&self) -> f64 {
        if self.calories > 0.0 {
            (self.protein / self.calories) * 100.0
        } else {
            0.0
        }
    }

    /// True when every nutrient is finite and non-negative
    #[must_use]
    pub fn has_valid_nutrients(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .iter()
            .all(|value| value.is_finite() && *value >= 0.0)
    }
}
