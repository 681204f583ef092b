// ABOUTME: Body metric calculations feeding the calorie target
// ABOUTME: BMI and its category, Harris-Benedict BMR, and activity-adjusted TDEE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Metrics Module
//!
//! # Scientific References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//! - WHO (2000). Obesity: preventing and managing the global epidemic. TRS 894.

use crate::config::{ActivityFactorsConfig, BmiThresholds, BmrConfig};
use meal_core::models::{ActivityLevel, BmiCategory, Sex};

/// Body Mass Index: `weight_kg / height_m²`
///
/// Returns `None` when height or weight is not positive.
#[must_use]
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// Classify BMI into the four WHO adult classes
///
/// Non-positive height or weight classifies as `Normal` rather than failing,
/// so a malformed profile never aborts a recommendation mid-pipeline.
#[must_use]
pub fn classify_bmi(height_cm: f64, weight_kg: f64, thresholds: &BmiThresholds) -> BmiCategory {
    let Some(bmi) = calculate_bmi(height_cm, weight_kg) else {
        return BmiCategory::Normal;
    };

    if bmi < thresholds.normal_min {
        BmiCategory::Underweight
    } else if bmi < thresholds.overweight_min {
        BmiCategory::Normal
    } else if bmi < thresholds.obese_min {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// - Male: `88.362 + 13.397 x weight + 4.799 x height - 5.677 x age`
/// - Female/other: `447.593 + 9.247 x weight + 3.098 x height - 4.330 x age`
#[must_use]
pub fn calculate_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let age = f64::from(age);
    match sex {
        Sex::Male => config.male_age_coef.mul_add(
            -age,
            config.male_height_coef.mul_add(
                height_cm,
                config.male_weight_coef.mul_add(weight_kg, config.male_constant),
            ),
        ),
        Sex::Female | Sex::Other => config.female_age_coef.mul_add(
            -age,
            config.female_height_coef.mul_add(
                height_cm,
                config.female_weight_coef.mul_add(weight_kg, config.female_constant),
            ),
        ),
    }
}

/// Multiplier for an activity level
#[must_use]
pub const fn activity_factor(activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Very => config.very,
        ActivityLevel::Extra => config.extra,
    }
}

/// Total Daily Energy Expenditure: `BMR x activity factor`
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * activity_factor(activity_level, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_boundaries() {
        let thresholds = BmiThresholds::default();
        // 100 cm tall makes BMI equal to weight
        assert_eq!(classify_bmi(100.0, 18.4, &thresholds), BmiCategory::Underweight);
        assert_eq!(classify_bmi(100.0, 18.5, &thresholds), BmiCategory::Normal);
        assert_eq!(classify_bmi(100.0, 25.0, &thresholds), BmiCategory::Overweight);
        assert_eq!(classify_bmi(100.0, 30.0, &thresholds), BmiCategory::Obese);
    }

    #[test]
    fn test_non_positive_inputs_classify_normal() {
        let thresholds = BmiThresholds::default();
        assert_eq!(classify_bmi(0.0, 70.0, &thresholds), BmiCategory::Normal);
        assert_eq!(classify_bmi(170.0, -5.0, &thresholds), BmiCategory::Normal);
    }
}
