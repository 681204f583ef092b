// ABOUTME: Core data models for meal recommendation and intake tracking
// ABOUTME: Re-exports meal, profile, recommendation, and meal plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Catalog meal candidates
pub mod meal;
/// Logged meal plans and intake totals
pub mod meal_plan;
/// User nutrition profile and profile records
pub mod profile;
/// Ranked recommendation output
pub mod recommendation;

pub use meal::MealCandidate;
pub use meal_plan::{DailyTotals, Food, MacroPercentages, MealFood, MealPlan, MealTotals, MealType};
pub use profile::{ActivityLevel, Goal, ProfileRecord, Sex, UserProfile};
pub use recommendation::{BmiCategory, MealCategory, ScoredRecommendation};
