// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides profile builders, catalog fixtures, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `meal_recommender`

use meal_core::models::{ActivityLevel, Goal, MealCandidate, ProfileRecord, Sex, UserProfile};
use meal_intelligence::ScoringConfig;
use meal_recommender::catalog::Catalog;
use meal_recommender::service::RecommendationService;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 30-year-old male, 175 cm, 90 kg, maintain, moderate (BMI ~29.4, overweight)
pub fn overweight_male() -> UserProfile {
    UserProfile::new(
        30,
        Sex::Male,
        175.0,
        90.0,
        Goal::Maintain,
        ActivityLevel::Moderate,
    )
    .unwrap()
}

/// 25-year-old male, 180 cm, 75 kg, maintain, very active (BMI ~23.1, normal)
pub fn active_normal_male() -> UserProfile {
    UserProfile::new(25, Sex::Male, 180.0, 75.0, Goal::Maintain, ActivityLevel::Very).unwrap()
}

/// 45-year-old female, 160 cm, 95 kg, lose, sedentary (BMI ~37.1, obese)
pub fn obese_female_losing() -> UserProfile {
    UserProfile::new(
        45,
        Sex::Female,
        160.0,
        95.0,
        Goal::Lose,
        ActivityLevel::Sedentary,
    )
    .unwrap()
}

/// Raw record equivalent of [`overweight_male`]
pub fn overweight_male_record() -> ProfileRecord {
    ProfileRecord {
        age: Some(30),
        sex: Some("male".into()),
        height: Some(175.0),
        weight: Some(90.0),
        goal: Some("maintain".into()),
        activity_level: Some("moderate".into()),
    }
}

/// The built-in five-dish catalog as a slice-ready vector
pub fn fallback_meals() -> Vec<MealCandidate> {
    Catalog::fallback().meals().to_vec()
}

/// A larger synthetic catalog spanning every calorie label and macro mix
pub fn synthetic_catalog() -> Vec<MealCandidate> {
    let mut meals = Vec::new();
    for i in 0..60_u32 {
        let step = f64::from(i);
        meals.push(MealCandidate::new(
            format!("Dish {i}"),
            step.mul_add(13.0, 120.0),
            (step * 0.7) % 45.0,
            (step * 3.1) % 140.0,
            (step * 1.9) % 60.0,
        ));
    }
    meals
}

/// Service over the fallback catalog with default scoring
pub fn fallback_service() -> RecommendationService {
    init_test_logging();
    RecommendationService::new(Arc::new(Catalog::fallback()), ScoringConfig::default())
}
