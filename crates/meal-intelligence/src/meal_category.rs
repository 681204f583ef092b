// ABOUTME: Calorie-size labelling of catalog dishes
// ABOUTME: Light, Balanced, and High-Calorie labels plus per-catalog counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::MealCategoryThresholds;
use meal_core::models::{MealCandidate, MealCategory};
use serde::{Deserialize, Serialize};

/// Label a dish by its calories
#[must_use]
pub fn categorize(calories: f64, thresholds: &MealCategoryThresholds) -> MealCategory {
    if calories < thresholds.balanced_min_kcal {
        MealCategory::Light
    } else if calories < thresholds.high_calorie_min_kcal {
        MealCategory::Balanced
    } else {
        MealCategory::HighCalorie
    }
}

/// Number of dishes per label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    /// Light dishes
    pub light: usize,
    /// Balanced dishes
    pub balanced: usize,
    /// High-calorie dishes
    pub high_calorie: usize,
}

impl CategoryCounts {
    /// Count labels across a set of meals
    #[must_use]
    pub fn tally(meals: &[MealCandidate], thresholds: &MealCategoryThresholds) -> Self {
        meals
            .iter()
            .fold(Self::default(), |mut counts, meal| {
                match categorize(meal.calories, thresholds) {
                    MealCategory::Light => counts.light += 1,
                    MealCategory::Balanced => counts.balanced += 1,
                    MealCategory::HighCalorie => counts.high_calorie += 1,
                }
                counts
            })
    }

    /// Total dishes counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.light + self.balanced + self.high_calorie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_lower_inclusive() {
        let thresholds = MealCategoryThresholds::default();
        assert_eq!(categorize(399.9, &thresholds), MealCategory::Light);
        assert_eq!(categorize(400.0, &thresholds), MealCategory::Balanced);
        assert_eq!(categorize(599.0, &thresholds), MealCategory::Balanced);
        assert_eq!(categorize(600.0, &thresholds), MealCategory::HighCalorie);
    }
}
