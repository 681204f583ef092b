// ABOUTME: Main library entry point for the meal recommendation engine
// ABOUTME: Wires catalog loading, configuration, logging, and the recommendation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Recommender
//!
//! Ranks dishes from a nutrition catalog against a daily calorie target
//! derived from a user's body metrics, goal, and activity level.
//!
//! ## Architecture
//!
//! - **`meal-core`**: error types, constants, and domain models
//! - **`meal-intelligence`**: BMI/BMR/TDEE, target policy, and the scorer
//! - **Catalog**: CSV/JSON loading with a built-in fallback
//! - **Service**: shared catalog plus scorer, one call per profile
//!
//! ## Example
//!
//! ```rust,no_run
//! use meal_recommender::catalog::Catalog;
//! use meal_recommender::service::RecommendationService;
//! use meal_core::models::ProfileRecord;
//! use meal_intelligence::ScoringConfig;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load_or_fallback(None));
//! let service = RecommendationService::new(catalog, ScoringConfig::default());
//! let record = ProfileRecord {
//!     age: Some(30),
//!     sex: Some("male".into()),
//!     height: Some(175.0),
//!     weight: Some(70.0),
//!     goal: Some("maintain".into()),
//!     activity_level: Some("moderate".into()),
//! };
//! let meals = service.recommend(&record, Some(5))?;
//! # Ok::<(), meal_core::errors::AppError>(())
//! ```

/// Catalog loading
pub mod catalog;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Recommendation service
pub mod service;

pub use meal_core::errors;
pub use meal_core::models;
