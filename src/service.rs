// ABOUTME: Recommendation service binding a shared catalog to the meal scorer
// ABOUTME: Validates profile records, applies count limits, and logs each request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::Catalog;
use meal_core::errors::{AppError, AppResult};
use meal_core::models::{ProfileRecord, ScoredRecommendation, UserProfile};
use meal_intelligence::{compute_target, CategoryCounts, MealScorer, NutritionTarget, ScoringConfig};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, info_span};

/// Catalog overview for the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    /// Where the dishes came from
    pub source: String,
    /// Number of dishes
    pub meals: usize,
    /// Rows dropped during loading
    pub skipped_rows: usize,
    /// Dishes per calorie label
    pub categories: CategoryCounts,
}

/// Scores profiles against one shared, read-only catalog
///
/// Cloning is cheap and clones share the catalog.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    scorer: Arc<MealScorer>,
}

impl RecommendationService {
    /// Create a service over a catalog
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: ScoringConfig) -> Self {
        Self {
            catalog,
            scorer: Arc::new(MealScorer::with_config(config)),
        }
    }

    /// Shared catalog
    #[must_use]
    pub const fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Scoring configuration in use
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        self.scorer.config()
    }

    /// Recommend meals for a raw profile record
    ///
    /// `count` falls back to the configured default.
    ///
    /// # Errors
    ///
    /// Returns an error if a required profile field is missing or invalid, or
    /// if `count` exceeds the configured maximum
    pub fn recommend(
        &self,
        record: &ProfileRecord,
        count: Option<usize>,
    ) -> AppResult<Vec<ScoredRecommendation>> {
        let profile = UserProfile::try_from(record)?;
        self.recommend_for_profile(&profile, count)
    }

    /// Recommend meals for an already-validated profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile is invalid or `count` exceeds the maximum
    pub fn recommend_for_profile(
        &self,
        profile: &UserProfile,
        count: Option<usize>,
    ) -> AppResult<Vec<ScoredRecommendation>> {
        let limits = &self.config().limits;
        let count = count.unwrap_or(limits.default_count);
        if count > limits.max_count {
            return Err(AppError::out_of_range(format!(
                "count {count} exceeds maximum of {}",
                limits.max_count
            )));
        }

        let span = info_span!("recommend", goal = %profile.goal, count);
        let _guard = span.enter();

        let (target, recommendations) =
            self.scorer
                .recommend_with_target(profile, self.catalog.meals(), count)?;

        info!(
            returned = recommendations.len(),
            catalog_size = self.catalog.len(),
            bmi_category = %target.bmi_category,
            target_calories = target.target_calories,
            "Generated meal recommendations"
        );

        Ok(recommendations)
    }

    /// Daily target and ceilings for a profile record, without scoring
    ///
    /// # Errors
    ///
    /// Returns an error if a required profile field is missing or invalid
    pub fn target_for(&self, record: &ProfileRecord) -> AppResult<NutritionTarget> {
        let profile = UserProfile::try_from(record)?;
        Ok(compute_target(&profile, self.config()))
    }

    /// Catalog overview
    #[must_use]
    pub fn catalog_summary(&self) -> CatalogSummary {
        CatalogSummary {
            source: self.catalog.source().to_string(),
            meals: self.catalog.len(),
            skipped_rows: self.catalog.skipped_rows(),
            categories: self.catalog.category_counts(&self.config().meal_categories),
        }
    }
}
