// ABOUTME: Application configuration assembled from environment variables
// ABOUTME: Catalog location, scoring policy, and logging settings in one struct
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::logging::LoggingConfig;
use meal_core::constants::env_vars;
use meal_core::errors::AppResult;
use meal_intelligence::ScoringConfig;
use std::env;
use std::path::PathBuf;

/// Top-level configuration for the recommender
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Catalog file; `None` selects the built-in fallback
    pub catalog_path: Option<PathBuf>,
    /// Scoring policy
    pub scoring: ScoringConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a `MEAL_SCORING_*` override is malformed or the
    /// resulting scoring configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let catalog_path = env::var_os(env_vars::CATALOG_PATH)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            catalog_path,
            scoring: ScoringConfig::load()?,
            logging: LoggingConfig::from_env(),
        })
    }

    /// Replace the catalog path (command-line flags take precedence over env)
    #[must_use]
    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }
}
