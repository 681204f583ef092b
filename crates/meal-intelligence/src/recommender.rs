// ABOUTME: Meal recommendation scorer ranking catalog dishes against a profile target
// ABOUTME: Calorie band filter, macro ceilings, protein floor, linear score, protein-density tie-break
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal recommendation scorer
//!
//! One linear pipeline per request:
//!
//! 1. Derive BMI class, BMR, TDEE, and the daily target ([`compute_target`]).
//! 2. Keep dishes whose calories fall in `[band_lower, band_upper] x meal target`.
//! 3. Keep dishes under both macro ceilings and over the protein floor.
//! 4. Score survivors (lower is better), break ties by protein density.
//! 5. Return the first `count`.
//!
//! The scorer holds no mutable state; the catalog is only borrowed.

use crate::config::{ScoreWeights, ScoringConfig};
use crate::meal_category::categorize;
use crate::target_policy::{compute_target, NutritionTarget};
use meal_core::errors::AppResult;
use meal_core::models::{MealCandidate, ScoredRecommendation, UserProfile};
use std::cmp::Ordering;
use tracing::debug;

/// Linear score for one dish; lower ranks first
#[must_use]
pub fn score_meal(meal: &MealCandidate, meal_target: f64, weights: &ScoreWeights) -> f64 {
    let calorie_gap = (meal.calories - meal_target).abs();
    weights.calorie_gap.mul_add(
        calorie_gap,
        weights.protein.mul_add(
            -meal.protein,
            weights.fat.mul_add(meal.fat, weights.carbs * meal.carbs),
        ),
    )
}

/// Ranking order: ascending score, then descending protein density
#[must_use]
pub fn rank_order(a_score: f64, a_ratio: f64, b_score: f64, b_ratio: f64) -> Ordering {
    a_score
        .total_cmp(&b_score)
        .then_with(|| b_ratio.total_cmp(&a_ratio))
}

struct ScoredCandidate<'a> {
    meal: &'a MealCandidate,
    score: f64,
    protein_ratio: f64,
}

/// Meal scorer bound to a scoring configuration
#[derive(Debug, Clone)]
pub struct MealScorer {
    config: ScoringConfig,
}

impl Default for MealScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MealScorer {
    /// Create a scorer using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ScoringConfig::global().clone(),
        }
    }

    /// Create a scorer with a custom configuration
    #[must_use]
    pub const fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Rank `catalog` for `profile`, returning at most `count` recommendations
    ///
    /// # Errors
    ///
    /// Returns an error if the profile fails validation; an empty catalog or a
    /// catalog with no qualifying dishes yields an empty list instead.
    pub fn recommend(
        &self,
        profile: &UserProfile,
        catalog: &[MealCandidate],
        count: usize,
    ) -> AppResult<Vec<ScoredRecommendation>> {
        self.recommend_with_target(profile, catalog, count)
            .map(|(_, recommendations)| recommendations)
    }

    /// Same as [`Self::recommend`], also returning the target the ranking used
    ///
    /// # Errors
    ///
    /// Returns an error if the profile fails validation
    pub fn recommend_with_target(
        &self,
        profile: &UserProfile,
        catalog: &[MealCandidate],
        count: usize,
    ) -> AppResult<(NutritionTarget, Vec<ScoredRecommendation>)> {
        profile.validate()?;

        let target = compute_target(profile, &self.config);
        if catalog.is_empty() {
            return Ok((target, Vec::new()));
        }

        let meal_target = target.meal_calorie_target(&self.config);
        let ranked = self.rank(&target, meal_target, catalog);

        debug!(
            bmi_category = %target.bmi_category,
            target_calories = target.target_calories,
            meal_target,
            weight_loss_mode = target.weight_loss_mode,
            candidates = catalog.len(),
            survivors = ranked.len(),
            "Scored meal catalog"
        );

        let recommendations = ranked
            .into_iter()
            .take(count)
            .map(|candidate| self.to_recommendation(profile, &target, &candidate))
            .collect();
        Ok((target, recommendations))
    }

    /// Filter and sort the catalog
    fn rank<'a>(
        &self,
        target: &NutritionTarget,
        meal_target: f64,
        catalog: &'a [MealCandidate],
    ) -> Vec<ScoredCandidate<'a>> {
        let window = &self.config.meal_window;
        let min_calories = meal_target * window.band_lower;
        let max_calories = meal_target * window.band_upper;

        let (weights, min_protein) = if target.weight_loss_mode {
            (
                &self.config.weights.weight_loss,
                self.config.filters.weight_loss_min_protein_g,
            )
        } else {
            (
                &self.config.weights.standard,
                self.config.filters.standard_min_protein_g,
            )
        };

        let mut ranked: Vec<ScoredCandidate<'a>> = catalog
            .iter()
            .filter(|meal| meal.calories >= min_calories && meal.calories <= max_calories)
            .filter(|meal| {
                meal.fat <= target.max_fat
                    && meal.carbs <= target.max_carbs
                    && meal.protein >= min_protein
            })
            .map(|meal| ScoredCandidate {
                meal,
                score: score_meal(meal, meal_target, weights),
                protein_ratio: meal.protein_ratio(),
            })
            .collect();

        // Stable sort keeps catalog order for exact ties on both keys
        ranked.sort_by(|a, b| rank_order(a.score, a.protein_ratio, b.score, b.protein_ratio));
        ranked
    }

    fn to_recommendation(
        &self,
        profile: &UserProfile,
        target: &NutritionTarget,
        candidate: &ScoredCandidate<'_>,
    ) -> ScoredRecommendation {
        let meal = candidate.meal;
        ScoredRecommendation {
            name: meal.name.clone(),
            calories: meal.calories.trunc() as u32,
            protein: meal.protein,
            carbs: meal.carbs,
            fat: meal.fat,
            meal_category: categorize(meal.calories, &self.config.meal_categories),
            bmi_category: target.bmi_category,
            target_calories: target.target_calories.trunc() as u32,
            goal: profile.goal,
            max_fat: target.max_fat,
            max_carbs: target.max_carbs,
            score: candidate.score,
        }
    }
}

/// Rank `catalog` for `profile` with the global configuration
///
/// # Errors
///
/// Returns an error if the profile fails validation
pub fn recommend(
    profile: &UserProfile,
    catalog: &[MealCandidate],
    count: usize,
) -> AppResult<Vec<ScoredRecommendation>> {
    MealScorer::new().recommend(profile, catalog, count)
}
