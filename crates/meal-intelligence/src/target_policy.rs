// ABOUTME: Daily calorie target and macro ceiling selection for a profile
// ABOUTME: Chooses the gain, weight-loss, or maintenance policy and the scoring mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::body_metrics::{calculate_harris_benedict, calculate_tdee, classify_bmi};
use crate::config::{ScoringConfig, TargetPolicy};
use meal_core::models::{BmiCategory, Goal, UserProfile};
use serde::{Deserialize, Serialize};

/// Which target policy matched
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Underweight or goal=gain
    Gain,
    /// Overweight, obese, or goal=lose
    WeightLoss,
    /// Neither of the above
    Maintenance,
}

/// Everything derived from the profile before any meal is looked at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionTarget {
    /// BMI class of the profile
    pub bmi_category: BmiCategory,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Policy that set the target and ceilings
    pub policy: PolicyKind,
    /// Daily calorie target (kcal)
    pub target_calories: f64,
    /// Fat ceiling (grams)
    pub max_fat: f64,
    /// Carbohydrate ceiling (grams)
    pub max_carbs: f64,
    /// Strict filter and weights apply
    pub weight_loss_mode: bool,
}

impl NutritionTarget {
    /// Meal-sized slice of the daily target
    #[must_use]
    pub fn meal_calorie_target(&self, config: &ScoringConfig) -> f64 {
        self.target_calories * config.meal_window.calorie_share
    }
}

/// Whether the profile should be scored for weight loss
///
/// Decided independently of the target policy: an overweight user whose goal
/// is gain gets the gain target and ceilings but the strict filter.
#[must_use]
pub fn is_weight_loss_mode(bmi_category: BmiCategory, goal: Goal) -> bool {
    matches!(bmi_category, BmiCategory::Overweight | BmiCategory::Obese) || goal == Goal::Lose
}

/// Pick the target policy; the gain check runs first and wins ties
#[must_use]
pub fn select_policy(bmi_category: BmiCategory, goal: Goal) -> PolicyKind {
    if bmi_category == BmiCategory::Underweight || goal == Goal::Gain {
        PolicyKind::Gain
    } else if is_weight_loss_mode(bmi_category, goal) {
        PolicyKind::WeightLoss
    } else {
        PolicyKind::Maintenance
    }
}

/// Compute the daily target and ceilings for a profile
#[must_use]
pub fn compute_target(profile: &UserProfile, config: &ScoringConfig) -> NutritionTarget {
    let bmi_category = classify_bmi(profile.height_cm, profile.weight_kg, &config.bmi);
    let bmr = calculate_harris_benedict(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.sex,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);

    let policy = select_policy(bmi_category, profile.goal);
    let TargetPolicy {
        calorie_multiplier,
        max_fat_g,
        max_carbs_g,
    } = match policy {
        PolicyKind::Gain => config.targets.gain,
        PolicyKind::WeightLoss => config.targets.weight_loss,
        PolicyKind::Maintenance => config.targets.maintenance,
    };

    NutritionTarget {
        bmi_category,
        bmr,
        tdee,
        policy,
        target_calories: tdee * calorie_multiplier,
        max_fat: max_fat_g,
        max_carbs: max_carbs_g,
        weight_loss_mode: is_weight_loss_mode(bmi_category, profile.goal),
    }
}
