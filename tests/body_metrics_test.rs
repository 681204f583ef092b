// ABOUTME: Algorithm tests for BMI classification, Harris-Benedict BMR, and TDEE
// ABOUTME: Checks reference values, monotonicity, and activity factor ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use meal_core::models::{ActivityLevel, BmiCategory, Sex};
use meal_intelligence::body_metrics::{
    activity_factor, calculate_bmi, calculate_harris_benedict, calculate_tdee, classify_bmi,
};
use meal_intelligence::config::{ActivityFactorsConfig, BmiThresholds, BmrConfig};

// ============================================================================
// BMI
// ============================================================================

#[test]
fn test_bmi_reference_value() {
    let bmi = calculate_bmi(175.0, 90.0).unwrap();
    assert!((bmi - 29.387_755).abs() < 1e-5, "bmi {bmi}");
}

#[test]
fn test_bmi_rejects_non_positive_inputs() {
    assert!(calculate_bmi(0.0, 70.0).is_none());
    assert!(calculate_bmi(170.0, 0.0).is_none());
    assert!(calculate_bmi(-170.0, 70.0).is_none());
}

#[test]
fn test_bmi_category_monotonic_in_weight() {
    let thresholds = BmiThresholds::default();
    for height in [150.0, 165.0, 180.0, 195.0] {
        let mut previous = BmiCategory::Underweight;
        for half_kg in 60..=400_u32 {
            let weight = f64::from(half_kg) / 2.0;
            let category = classify_bmi(height, weight, &thresholds);
            assert!(
                category >= previous,
                "height {height}: {category} after {previous} at {weight} kg"
            );
            previous = category;
        }
        assert_eq!(previous, BmiCategory::Obese);
    }
}

// ============================================================================
// BMR
// ============================================================================

#[test]
fn test_harris_benedict_male() {
    let bmr = calculate_harris_benedict(90.0, 175.0, 30, Sex::Male, &BmrConfig::default());
    assert!((bmr - 1963.607).abs() < 1e-6, "bmr {bmr}");
}

#[test]
fn test_harris_benedict_female() {
    // 447.593 + 9.247*95 + 3.098*160 - 4.330*45 = 1626.888
    let bmr = calculate_harris_benedict(95.0, 160.0, 45, Sex::Female, &BmrConfig::default());
    assert!((bmr - 1626.888).abs() < 1e-6, "bmr {bmr}");
}

#[test]
fn test_other_sex_uses_female_equation() {
    let config = BmrConfig::default();
    let female = calculate_harris_benedict(60.0, 165.0, 40, Sex::Female, &config);
    let other = calculate_harris_benedict(60.0, 165.0, 40, Sex::Other, &config);
    assert!((female - other).abs() < f64::EPSILON);
}

#[test]
fn test_bmr_decreases_with_age() {
    let config = BmrConfig::default();
    let young = calculate_harris_benedict(70.0, 175.0, 20, Sex::Male, &config);
    let old = calculate_harris_benedict(70.0, 175.0, 70, Sex::Male, &config);
    assert!(young > old);
}

// ============================================================================
// TDEE
// ============================================================================

#[test]
fn test_activity_factors_match_table() {
    let config = ActivityFactorsConfig::default();
    let expected = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::Light, 1.375),
        (ActivityLevel::Moderate, 1.55),
        (ActivityLevel::Very, 1.725),
        (ActivityLevel::Extra, 1.9),
    ];
    for (level, factor) in expected {
        assert!((activity_factor(level, &config) - factor).abs() < f64::EPSILON);
    }
}

#[test]
fn test_tdee_scales_bmr() {
    let config = ActivityFactorsConfig::default();
    let tdee = calculate_tdee(1963.607, ActivityLevel::Moderate, &config);
    assert!((tdee - 3_043.590_85).abs() < 1e-6);
}
