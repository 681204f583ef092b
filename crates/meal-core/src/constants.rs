// ABOUTME: Application-wide constants for the meal recommendation workspace
// ABOUTME: Service names, recommendation limits, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the recommendation binary
    pub const MEAL_RECOMMENDER: &str = "meal-recommender";
}

/// Limits applied to recommendation requests
pub mod limits {
    /// Number of recommendations returned when the caller does not ask for a count
    pub const DEFAULT_RECOMMENDATION_COUNT: usize = 15;

    /// Upper bound on a single request's count
    pub const MAX_RECOMMENDATION_COUNT: usize = 500;
}

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// Path of the catalog file (CSV or JSON)
    pub const CATALOG_PATH: &str = "MEAL_CATALOG_PATH";

    /// Prefix for scoring configuration overrides
    pub const SCORING_PREFIX: &str = "MEAL_SCORING_";
}

/// Energy content of macronutrients (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrates: 4 kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}
