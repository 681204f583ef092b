// ABOUTME: Scored recommendation output and the classification labels it carries
// ABOUTME: BmiCategory, MealCategory, and the per-meal ScoredRecommendation record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::profile::Goal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI classification, ordered from lowest to highest body mass
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI 18.5 to below 25
    Normal,
    /// BMI 25 to below 30
    Overweight,
    /// BMI 30 and above
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underweight => f.write_str("Underweight"),
            Self::Normal => f.write_str("Normal"),
            Self::Overweight => f.write_str("Overweight"),
            Self::Obese => f.write_str("Obese"),
        }
    }
}

/// Calorie-size label for a single dish
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealCategory {
    /// Under the balanced threshold
    Light,
    /// Between the light and high-calorie thresholds
    Balanced,
    /// At or above the high-calorie threshold
    #[serde(rename = "High-Calorie")]
    HighCalorie,
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("Light"),
            Self::Balanced => f.write_str("Balanced"),
            Self::HighCalorie => f.write_str("High-Calorie"),
        }
    }
}

/// One ranked meal with the targets that produced its ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    /// Dish name
    pub name: String,
    /// Energy per serving, truncated to whole kcal
    pub calories: u32,
    /// Protein per serving (grams)
    pub protein: f64,
    /// Carbohydrates per serving (grams)
    pub carbs: f64,
    /// Fat per serving (grams)
    pub fat: f64,
    /// Calorie-size label
    pub meal_category: MealCategory,
    /// Profile BMI category
    pub bmi_category: BmiCategory,
    /// Daily calorie target, truncated to whole kcal
    pub target_calories: u32,
    /// Profile goal
    pub goal: Goal,
    /// Fat ceiling applied during filtering (grams)
    pub max_fat: f64,
    /// Carbohydrate ceiling applied during filtering (grams)
    pub max_carbs: f64,
    /// Primary ranking score (lower ranks first)
    pub score: f64,
}
