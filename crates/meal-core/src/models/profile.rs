// ABOUTME: User nutrition profile consumed by the meal scorer
// ABOUTME: Sex, goal, and activity codes plus fail-fast conversion from key/value records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Sex used to select the BMR equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male equation
    Male,
    /// Female equation
    Female,
    /// Uses the female equation
    Other,
}

impl Sex {
    /// Parse a sex code (`male`/`m`, `female`/`f`, anything else is `Other`)
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Other,
        }
    }
}

/// Weight goal selected by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus
    Gain,
}

impl Goal {
    /// Parse a goal code; unknown codes read as `Maintain`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" | "l" => Self::Lose,
            "gain" | "g" => Self::Gain,
            _ => Self::Maintain,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lose => f.write_str("lose"),
            Self::Maintain => f.write_str("maintain"),
            Self::Gain => f.write_str("gain"),
        }
    }
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// 1-3 days/week
    Light,
    /// 3-5 days/week
    #[default]
    Moderate,
    /// 6-7 days/week
    Very,
    /// Hard training twice a day
    Extra,
}

impl ActivityLevel {
    /// Parse an activity code
    ///
    /// Unrecognized codes fall back to `Sedentary`, the lowest multiplier.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentary" | "s" => Self::Sedentary,
            "light" | "l" => Self::Light,
            "moderate" | "m" => Self::Moderate,
            "very" | "v" => Self::Very,
            "extra" | "e" => Self::Extra,
            other => {
                warn!(activity_level = other, "Unrecognized activity level, using sedentary");
                Self::Sedentary
            }
        }
    }
}

/// Profile fields required to compute a calorie target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Sex for BMR equation selection
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Weight goal
    pub goal: Goal,
    /// Activity level
    pub activity_level: ActivityLevel,
}

impl UserProfile {
    /// Build and validate a profile
    ///
    /// # Errors
    ///
    /// Returns an error if age, height, or weight is not positive
    pub fn new(
        age: u32,
        sex: Sex,
        height_cm: f64,
        weight_kg: f64,
        goal: Goal,
        activity_level: ActivityLevel,
    ) -> AppResult<Self> {
        let profile = Self {
            age,
            sex,
            height_cm,
            weight_kg,
            goal,
            activity_level,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the numeric fields
    ///
    /// # Errors
    ///
    /// Returns an error if age, height, or weight is not positive and finite
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::invalid_input("Age must be positive"));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::invalid_input("Height must be positive (cm)"));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be positive (kg)"));
        }
        Ok(())
    }
}

/// Key/value profile record as supplied by the user-management side
///
/// Every field is optional here; [`UserProfile::try_from`] decides which
/// absences are fatal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Age in years
    #[serde(default)]
    pub age: Option<u32>,
    /// Sex code
    #[serde(default, alias = "gender")]
    pub sex: Option<String>,
    /// Height in centimeters
    #[serde(default)]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// Goal code
    #[serde(default)]
    pub goal: Option<String>,
    /// Activity code
    #[serde(default)]
    pub activity_level: Option<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

impl TryFrom<&ProfileRecord> for UserProfile {
    type Error = AppError;

    fn try_from(record: &ProfileRecord) -> AppResult<Self> {
        let age = record.age.ok_or_else(|| AppError::missing_field("age"))?;
        let sex = non_blank(record.sex.as_ref())
            .map(Sex::from_str_lossy)
            .ok_or_else(|| AppError::missing_field("sex"))?;
        let height_cm = record
            .height
            .ok_or_else(|| AppError::missing_field("height"))?;
        let weight_kg = record
            .weight
            .ok_or_else(|| AppError::missing_field("weight"))?;

        // Goal and activity keep their historical defaults when absent
        let goal = non_blank(record.goal.as_ref()).map_or_else(Goal::default, Goal::from_str_lossy);
        let activity_level = non_blank(record.activity_level.as_ref())
            .map_or_else(ActivityLevel::default, ActivityLevel::from_str_lossy);

        Self::new(age, sex, height_cm, weight_kg, goal, activity_level)
    }
}
