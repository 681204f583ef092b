// ABOUTME: Meal catalog loading from CSV or JSON files with a built-in fallback
// ABOUTME: Loaded once at startup and shared read-only across recommendation calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Catalog
//!
//! The catalog is the only external data the scorer needs. It is read once,
//! validated row by row, and then never mutated; callers share it behind an
//! `Arc`.
//!
//! Loading never fails from the caller's point of view when using
//! [`Catalog::load_or_fallback`]: an unreadable or malformed file produces a
//! warning and the five built-in dishes.

/// CSV parsing and header normalization
pub mod csv;
/// Built-in fallback dishes
pub mod fallback;

use meal_core::errors::{AppError, ErrorCode};
use meal_core::models::MealCandidate;
use meal_intelligence::config::MealCategoryThresholds;
use meal_intelligence::CategoryCounts;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File could not be opened or read
    #[error("failed to read catalog: {0}")]
    Io(#[from] io::Error),

    /// Input contained no header line
    #[error("catalog is empty")]
    EmptyInput,

    /// Header lacks a required column
    #[error("catalog is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// JSON catalog could not be decoded
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is neither csv nor json
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        if matches!(&error, CatalogError::Io(e) if e.kind() == io::ErrorKind::NotFound) {
            return Self::not_found("Catalog file").with_source(error);
        }
        let code = match &error {
            CatalogError::Io(_) => ErrorCode::StorageError,
            CatalogError::Json(_) => ErrorCode::SerializationError,
            CatalogError::EmptyInput
            | CatalogError::MissingColumn(_)
            | CatalogError::UnsupportedFormat(_) => ErrorCode::InvalidFormat,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

/// One JSON catalog entry before validation
#[derive(Debug, Deserialize)]
struct JsonRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    calories: Option<f64>,
    #[serde(default)]
    protein: Option<f64>,
    #[serde(default, alias = "carbohydrates")]
    carbs: Option<f64>,
    #[serde(default, alias = "fats")]
    fat: Option<f64>,
}

impl JsonRow {
    fn into_meal(self) -> Option<MealCandidate> {
        let name = self.name.filter(|name| !name.trim().is_empty())?;
        let meal = MealCandidate::new(
            name.trim(),
            self.calories?,
            self.protein?,
            self.carbs?,
            self.fat?,
        );
        meal.has_valid_nutrients().then_some(meal)
    }
}

/// Where the catalog's dishes came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum CatalogSource {
    /// Loaded from a file
    File(PathBuf),
    /// Loaded from an in-memory reader
    Inline,
    /// Built-in fallback dishes
    Fallback,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline => write!(f, "inline"),
            Self::Fallback => write!(f, "built-in fallback"),
        }
    }
}

/// Immutable collection of meal candidates
#[derive(Debug, Clone)]
pub struct Catalog {
    meals: Vec<MealCandidate>,
    source: CatalogSource,
    skipped_rows: usize,
}

impl Catalog {
    /// Wrap an already-validated list of meals
    #[must_use]
    pub const fn from_meals(meals: Vec<MealCandidate>, source: CatalogSource) -> Self {
        Self {
            meals,
            source,
            skipped_rows: 0,
        }
    }

    /// The built-in five-dish catalog
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_meals(fallback::fallback_meals(), CatalogSource::Fallback)
    }

    /// Parse CSV from any buffered reader
    ///
    /// # Errors
    ///
    /// Returns an error if the input is unreadable, empty, or lacks a required column
    pub fn from_csv_reader<R: BufRead>(reader: R) -> Result<Self, CatalogError> {
        let rows = csv::read_rows(reader)?;
        Ok(Self {
            meals: rows.meals,
            source: CatalogSource::Inline,
            skipped_rows: rows.skipped,
        })
    }

    /// Load a CSV file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed
    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        let mut catalog = Self::from_csv_reader(BufReader::new(file))?;
        catalog.source = CatalogSource::File(path.to_path_buf());
        Ok(catalog)
    }

    /// Load a JSON array of `{name, calories, protein, carbs, fat}` objects
    ///
    /// Each entry is decoded on its own. Entries that are not objects, lack a
    /// name or nutrient, or carry negative or non-finite nutrients are skipped
    /// and counted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a JSON array
    pub fn from_json_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        let entries: Vec<serde_json::Value> = serde_json::from_reader(BufReader::new(file))?;

        let total = entries.len();
        let meals: Vec<MealCandidate> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<JsonRow>(entry).ok())
            .filter_map(JsonRow::into_meal)
            .collect();

        Ok(Self {
            skipped_rows: total - meals.len(),
            meals,
            source: CatalogSource::File(path.to_path_buf()),
        })
    }

    /// Load a file, choosing the parser by extension (`.json`, otherwise CSV)
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_path(path),
            Some("csv" | "txt") | None => Self::from_csv_path(path),
            Some(other) => Err(CatalogError::UnsupportedFormat(other.to_owned())),
        }
    }

    /// Load a file, falling back to the built-in dishes on any error
    ///
    /// A missing path also selects the fallback.
    #[must_use]
    pub fn load_or_fallback(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            info!("No catalog path configured, using built-in fallback");
            return Self::fallback();
        };

        match Self::from_path(path) {
            Ok(catalog) => {
                info!(
                    path = %path.display(),
                    meals = catalog.len(),
                    skipped_rows = catalog.skipped_rows,
                    "Loaded meal catalog"
                );
                catalog
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load meal catalog, using built-in fallback"
                );
                Self::fallback()
            }
        }
    }

    /// All dishes in load order
    #[must_use]
    pub fn meals(&self) -> &[MealCandidate] {
        &self.meals
    }

    /// Number of dishes
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// True when no dish survived loading
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Where the dishes came from
    #[must_use]
    pub const fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Rows dropped during loading
    #[must_use]
    pub const fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Dishes per calorie label
    #[must_use]
    pub fn category_counts(&self, thresholds: &MealCategoryThresholds) -> CategoryCounts {
        CategoryCounts::tally(&self.meals, thresholds)
    }
}
