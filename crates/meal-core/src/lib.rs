// ABOUTME: Core types and constants for the meal recommendation workspace
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Core
//!
//! Foundation crate providing shared types for the meal recommendation engine.
//! It changes infrequently so the scoring and application crates rebuild
//! incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Limits, environment variable names, and energy factors
//! - **models**: Meal candidates, profiles, recommendations, and meal plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
