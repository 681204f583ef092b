// ABOUTME: Integration tests for the meal scorer's filtering, scoring, and ordering
// ABOUTME: Covers target policy branches, calorie band bounds, macro ceilings, and tie-breaks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Meal scorer tests
//!
//! Scenario values are derived by hand from the Harris-Benedict equations and
//! the default policy table so a regression in any stage shows up as a
//! concrete number mismatch.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use meal_core::models::{
    ActivityLevel, BmiCategory, Goal, MealCandidate, MealCategory, Sex, UserProfile,
};
use meal_intelligence::recommender::score_meal;
use meal_intelligence::{compute_target, MealScorer, PolicyKind, ScoringConfig};

mod common;

fn scorer() -> MealScorer {
    common::init_test_logging();
    MealScorer::with_config(ScoringConfig::default())
}

// ============================================================================
// REFERENCE SCENARIO - 30 / male / 175 cm / 90 kg / maintain / moderate
// ============================================================================

#[test]
fn test_overweight_profile_takes_weight_loss_branch() {
    let profile = common::overweight_male();
    let target = compute_target(&profile, &ScoringConfig::default());

    // BMI = 90 / 1.75^2 = 29.39
    assert_eq!(target.bmi_category, BmiCategory::Overweight);
    // BMR = 88.362 + 13.397*90 + 4.799*175 - 5.677*30 = 1963.607
    assert!((target.bmr - 1963.607).abs() < 1e-6, "bmr {}", target.bmr);
    // TDEE = 1963.607 * 1.55 = 3043.59085
    assert!((target.tdee - 3_043.590_85).abs() < 1e-6);
    assert_eq!(target.policy, PolicyKind::WeightLoss);
    assert!(target.weight_loss_mode);
    // 0.75 * TDEE
    assert!((target.target_calories - 2_282.693_137_5).abs() < 1e-6);
    assert!((target.max_fat - 30.0).abs() < f64::EPSILON);
    assert!((target.max_carbs - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_reference_scenario_against_fallback_catalog() {
    let profile = common::overweight_male();
    let results = scorer()
        .recommend(&profile, &common::fallback_meals(), 15)
        .unwrap();

    // Meal target = 2282.69 * 0.3 = 684.81, band = [273.92, 821.77]
    // Chicken Curry (300) and Biryani (400) are inside; everything else is below
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Chicken Curry", "Biryani"]);

    let curry = &results[0];
    assert_eq!(curry.calories, 300);
    assert_eq!(curry.target_calories, 2282);
    assert_eq!(curry.bmi_category, BmiCategory::Overweight);
    assert_eq!(curry.goal, Goal::Maintain);
    assert_eq!(curry.meal_category, MealCategory::Light);
    // 3*18 + 2*15 - 5*25 + 0.1*|300 - 684.8079| = -41 + 38.48079
    assert!((curry.score - (-2.519_206)).abs() < 1e-3, "score {}", curry.score);

    assert_eq!(results[1].meal_category, MealCategory::Balanced);
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_targets_and_ceilings_are_positive() {
    let config = ScoringConfig::default();
    for sex in [Sex::Male, Sex::Female, Sex::Other] {
        for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
            for weight in [45.0, 70.0, 95.0, 140.0] {
                let profile =
                    UserProfile::new(35, sex, 170.0, weight, goal, ActivityLevel::Light).unwrap();
                let target = compute_target(&profile, &config);
                assert!(target.target_calories > 0.0);
                assert!(target.max_fat > 0.0);
                assert!(target.max_carbs > 0.0);
            }
        }
    }
}

#[test]
fn test_recommend_is_idempotent() {
    let scorer = scorer();
    let profile = common::active_normal_male();
    let catalog = common::synthetic_catalog();

    let first = scorer.recommend(&profile, &catalog, 20).unwrap();
    let second = scorer.recommend(&profile, &catalog, 20).unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_weight_loss_results_respect_strict_limits() {
    let profile = common::obese_female_losing();
    let results = scorer()
        .recommend(&profile, &common::synthetic_catalog(), 100)
        .unwrap();

    assert!(!results.is_empty());
    for rec in &results {
        assert!(rec.fat <= 30.0, "{} fat {}", rec.name, rec.fat);
        assert!(rec.carbs <= 80.0, "{} carbs {}", rec.name, rec.carbs);
        assert!(rec.protein >= 10.0, "{} protein {}", rec.name, rec.protein);
    }
}

#[test]
fn test_output_length_bounded_by_count_and_survivors() {
    let scorer = scorer();
    let profile = common::active_normal_male();
    let catalog = common::synthetic_catalog();

    let all = scorer.recommend(&profile, &catalog, usize::MAX).unwrap();
    assert!(all.len() <= catalog.len());

    for count in [0, 1, 3, all.len(), all.len() + 5] {
        let results = scorer.recommend(&profile, &catalog, count).unwrap();
        assert_eq!(results.len(), count.min(all.len()));
    }
}

#[test]
fn test_default_count_is_fifteen() {
    assert_eq!(ScoringConfig::default().limits.default_count, 15);
}

#[test]
fn test_single_survivor_from_fallback_catalog() {
    let profile = common::active_normal_male();
    let results = scorer()
        .recommend(&profile, &common::fallback_meals(), 15)
        .unwrap();

    // Maintenance target 3130.93, meal target 939.28, band [375.71, 1127.14]
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Biryani");
    assert_eq!(results[0].bmi_category, BmiCategory::Normal);
    assert!((results[0].max_fat - 50.0).abs() < f64::EPSILON);
    assert!((results[0].max_carbs - 130.0).abs() < f64::EPSILON);
}

#[test]
fn test_equal_scores_prefer_higher_protein_ratio() {
    let profile = common::active_normal_male();
    // Standard weights: 1.5*10 + 20 - 3*20 = -25 and 1.5*10 + 23 - 3*21 = -25
    let catalog = vec![
        MealCandidate::new("Lower Density", 900.0, 20.0, 20.0, 10.0),
        MealCandidate::new("Higher Density", 900.0, 21.0, 23.0, 10.0),
    ];

    let results = scorer().recommend(&profile, &catalog, 2).unwrap();
    assert_eq!(results.len(), 2);
    assert!((results[0].score - results[1].score).abs() < f64::EPSILON);
    assert_eq!(results[0].name, "Higher Density");
    assert_eq!(results[1].name, "Lower Density");
}

#[test]
fn test_scores_are_ascending() {
    let results = scorer()
        .recommend(&common::active_normal_male(), &common::synthetic_catalog(), 100)
        .unwrap();
    assert!(results.windows(2).all(|pair| pair[0].score <= pair[1].score));
}

// ============================================================================
// BAND AND FILTER EDGES
// ============================================================================

#[test]
fn test_band_bounds_are_inclusive() {
    let profile = common::active_normal_male();
    let config = ScoringConfig::default();
    let target = compute_target(&profile, &config);
    let meal_target = target.meal_calorie_target(&config);

    let lower = meal_target * 0.4;
    let upper = meal_target * 1.2;
    let catalog = vec![
        MealCandidate::new("At Lower", lower, 30.0, 20.0, 10.0),
        MealCandidate::new("At Upper", upper, 30.0, 20.0, 10.0),
        MealCandidate::new("Just Below", lower - 0.01, 30.0, 20.0, 10.0),
        MealCandidate::new("Just Above", upper + 0.01, 30.0, 20.0, 10.0),
    ];

    let results = scorer().recommend(&profile, &catalog, 10).unwrap();
    let mut names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["At Lower", "At Upper"]);
}

#[test]
fn test_protein_floor_depends_on_mode() {
    // 9 g protein passes the standard floor (8) but not the weight-loss floor (10)
    let standard = common::active_normal_male();
    let catalog = vec![MealCandidate::new("Nine Protein", 900.0, 9.0, 20.0, 10.0)];
    assert_eq!(scorer().recommend(&standard, &catalog, 5).unwrap().len(), 1);

    let strict = common::obese_female_losing();
    let catalog = vec![MealCandidate::new("Nine Protein", 400.0, 9.0, 20.0, 10.0)];
    assert!(scorer().recommend(&strict, &catalog, 5).unwrap().is_empty());
}

#[test]
fn test_macro_ceilings_filter_candidates() {
    let profile = common::active_normal_male();
    let catalog = vec![
        MealCandidate::new("Fatty", 900.0, 30.0, 20.0, 50.5),
        MealCandidate::new("Starchy", 900.0, 30.0, 130.5, 10.0),
        MealCandidate::new("At Limits", 900.0, 30.0, 130.0, 50.0),
    ];
    let results = scorer().recommend(&profile, &catalog, 5).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "At Limits");
}

#[test]
fn test_empty_catalog_returns_empty() {
    let results = scorer()
        .recommend(&common::overweight_male(), &[], 15)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_nothing_qualifies_returns_empty() {
    let catalog = vec![MealCandidate::new("Tiny", 10.0, 1.0, 1.0, 1.0)];
    let results = scorer()
        .recommend(&common::overweight_male(), &catalog, 15)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_zero_calorie_candidate_has_zero_ratio() {
    let meal = MealCandidate::new("Water", 0.0, 0.0, 0.0, 0.0);
    assert!(meal.protein_ratio().abs() < f64::EPSILON);
}

#[test]
fn test_fractional_calories_truncate_in_output() {
    let profile = common::active_normal_male();
    let catalog = vec![MealCandidate::new("Fractional", 900.9, 30.0, 20.0, 10.0)];
    let results = scorer().recommend(&profile, &catalog, 1).unwrap();
    assert_eq!(results[0].calories, 900);
}

// ============================================================================
// POLICY BRANCHES
// ============================================================================

#[test]
fn test_gain_goal_raises_target_and_ceilings() {
    let profile =
        UserProfile::new(25, Sex::Male, 180.0, 75.0, Goal::Gain, ActivityLevel::Very).unwrap();
    let config = ScoringConfig::default();
    let target = compute_target(&profile, &config);

    assert_eq!(target.policy, PolicyKind::Gain);
    assert!(!target.weight_loss_mode);
    assert!((target.target_calories - target.tdee * 1.15).abs() < 1e-9);
    assert!((target.max_fat - 100.0).abs() < f64::EPSILON);
    assert!((target.max_carbs - 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_underweight_losing_gets_gain_target() {
    let profile =
        UserProfile::new(22, Sex::Female, 170.0, 50.0, Goal::Lose, ActivityLevel::Light).unwrap();
    let target = compute_target(&profile, &ScoringConfig::default());

    assert_eq!(target.bmi_category, BmiCategory::Underweight);
    assert_eq!(target.policy, PolicyKind::Gain);
    assert!(target.weight_loss_mode);
}

#[test]
fn test_underweight_losing_combines_gain_ceilings_with_strict_scoring() {
    let profile =
        UserProfile::new(22, Sex::Female, 170.0, 50.0, Goal::Lose, ActivityLevel::Light).unwrap();
    let config = ScoringConfig::default();
    let target = compute_target(&profile, &config);

    // BMR = 447.593 + 9.247*50 + 3.098*170 - 4.330*22 = 1341.343
    // Target = 1341.343 * 1.375 * 1.15 = 2120.99; meal target = 636.30
    assert!((target.bmr - 1341.343).abs() < 1e-6, "bmr {}", target.bmr);
    assert!((target.max_fat - 100.0).abs() < f64::EPSILON);
    assert!((target.max_carbs - 300.0).abs() < f64::EPSILON);
    let meal_target = target.meal_calorie_target(&config);
    assert!((meal_target - 636.3).abs() < 0.01, "meal target {meal_target}");

    // 9 g protein clears the standard floor but not the weight-loss one;
    // 40 g fat would break the weight-loss ceiling but not the gain one
    let low_protein = MealCandidate::new("Nine Protein", 500.0, 9.0, 20.0, 10.0);
    let rich_curry = MealCandidate::new("Rich Curry", 500.0, 30.0, 20.0, 40.0);
    let catalog = vec![low_protein, rich_curry.clone()];

    let results = scorer().recommend(&profile, &catalog, 15).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Rich Curry");
    assert_eq!(results[0].bmi_category, BmiCategory::Underweight);
    assert_eq!(results[0].target_calories, 2120);

    // 3*40 + 2*20 - 5*30 + 0.1*|500 - 636.30| = 23.63
    let expected = score_meal(&rich_curry, meal_target, &config.weights.weight_loss);
    assert!((results[0].score - expected).abs() < 1e-9);
    assert!((results[0].score - 23.63).abs() < 0.01, "score {}", results[0].score);
}

#[test]
fn test_unknown_activity_scores_as_sedentary() {
    let config = ScoringConfig::default();
    let unknown = UserProfile::new(
        30,
        Sex::Male,
        175.0,
        70.0,
        Goal::Maintain,
        ActivityLevel::from_str_lossy("marathon"),
    )
    .unwrap();
    let target = compute_target(&unknown, &config);
    assert!((target.tdee - target.bmr * 1.2).abs() < 1e-9);
}
