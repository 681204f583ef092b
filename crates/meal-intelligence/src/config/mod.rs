// ABOUTME: Configuration module for meal-intelligence crate
// ABOUTME: Re-exports scoring configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration validation errors
pub mod error;
/// Scoring policy configuration
pub mod scoring;

pub use error::ConfigError;
pub use scoring::{
    ActivityFactorsConfig, BmiThresholds, BmrConfig, CountLimits, FilterConfig,
    MealCategoryThresholds, MealWindowConfig, ScoreWeights, ScoreWeightsConfig, ScoringConfig,
    TargetPolicy, TargetPolicyConfig, MEAL_CALORIE_SHARE,
};
