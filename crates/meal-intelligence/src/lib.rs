// ABOUTME: Meal scoring engine - body metrics, target policy, scorer, and meal labels
// ABOUTME: Pure, synchronous computations over borrowed catalogs and profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Intelligence
//!
//! Scoring core of the meal recommendation workspace. Every function here is a
//! pure computation over its arguments: no I/O, no shared mutable state, so a
//! catalog loaded once can be scored for many profiles concurrently.

/// BMI, BMR, and TDEE calculations
pub mod body_metrics;
/// Scoring configuration and validation
pub mod config;
/// Light / Balanced / High-Calorie labels
pub mod meal_category;
/// Catalog ranking
pub mod recommender;
/// Daily target and macro ceiling selection
pub mod target_policy;

pub use config::{ConfigError, ScoringConfig};
pub use meal_category::{categorize, CategoryCounts};
pub use recommender::{recommend, MealScorer};
pub use target_policy::{compute_target, NutritionTarget, PolicyKind};
