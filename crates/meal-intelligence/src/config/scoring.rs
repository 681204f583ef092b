// ABOUTME: Scoring configuration for BMR, calorie targets, filters, and ranking weights
// ABOUTME: Defaults match the recommendation policy; env vars with MEAL_SCORING_ override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Scoring Configuration
//!
//! Every number the scorer uses lives here: Harris-Benedict coefficients,
//! activity multipliers, BMI cut-offs, the three target policies, the per-meal
//! calorie window, protein floors, and score weights. All values can be
//! overridden via environment variables with the `MEAL_SCORING_` prefix.
//!
//! # Scientific References
//!
//! - BMR: Harris, J.A., & Benedict, F.G. (1918), revised by Roza, A.M., &
//!   Shizgal, H.M. (1984). *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
//! - BMI classes: WHO Technical Report Series 894 (2000)

use super::error::ConfigError;
use meal_core::constants::{env_vars, limits};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static SCORING_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

// ============================================================================
// Main Configuration
// ============================================================================

/// Complete scoring configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// BMR equation coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// BMI classification cut-offs
    pub bmi: BmiThresholds,
    /// Calorie target and macro ceilings per policy
    pub targets: TargetPolicyConfig,
    /// Per-meal calorie window
    pub meal_window: MealWindowConfig,
    /// Protein floors
    pub filters: FilterConfig,
    /// Ranking weights
    pub weights: ScoreWeightsConfig,
    /// Meal size labelling thresholds
    pub meal_categories: MealCategoryThresholds,
    /// Recommendation count limits
    pub limits: CountLimits,
}

impl ScoringConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load scoring config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bmr.validate()?;
        self.activity_factors.validate()?;
        self.bmi.validate()?;
        self.targets.validate()?;
        self.meal_window.validate()?;
        self.weights.validate()?;

        let floors = [
            self.filters.weight_loss_min_protein_g,
            self.filters.standard_min_protein_g,
        ];
        if floors.iter().any(|floor| !floor.is_finite() || *floor < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "protein floors must be finite and >= 0",
            ));
        }

        let categories = &self.meal_categories;
        let (balanced, high) = (categories.balanced_min_kcal, categories.high_calorie_min_kcal);
        if !(balanced.is_finite() && high.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "meal category thresholds must be finite",
            ));
        }
        if categories.balanced_min_kcal >= categories.high_calorie_min_kcal {
            return Err(ConfigError::InvalidRange(
                "balanced_min_kcal must be below high_calorie_min_kcal",
            ));
        }

        if self.limits.default_count == 0 {
            return Err(ConfigError::ValueOutOfRange("default_count must be > 0"));
        }
        if self.limits.default_count > self.limits.max_count {
            return Err(ConfigError::InvalidRange(
                "default_count must not exceed max_count",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(suffix: &str, target: &mut T) -> Result<(), ConfigError> {
        let name = format!("{}{suffix}", env_vars::SCORING_PREFIX);
        match env::var(&name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity factors
        Self::apply_env_var("SEDENTARY_FACTOR", &mut self.activity_factors.sedentary)?;
        Self::apply_env_var("LIGHT_FACTOR", &mut self.activity_factors.light)?;
        Self::apply_env_var("MODERATE_FACTOR", &mut self.activity_factors.moderate)?;
        Self::apply_env_var("VERY_FACTOR", &mut self.activity_factors.very)?;
        Self::apply_env_var("EXTRA_FACTOR", &mut self.activity_factors.extra)?;

        // Target policies
        Self::apply_env_var(
            "GAIN_CALORIE_MULTIPLIER",
            &mut self.targets.gain.calorie_multiplier,
        )?;
        Self::apply_env_var(
            "LOSS_CALORIE_MULTIPLIER",
            &mut self.targets.weight_loss.calorie_multiplier,
        )?;
        Self::apply_env_var("LOSS_MAX_FAT_G", &mut self.targets.weight_loss.max_fat_g)?;
        Self::apply_env_var("LOSS_MAX_CARBS_G", &mut self.targets.weight_loss.max_carbs_g)?;

        // Meal window
        Self::apply_env_var("MEAL_CALORIE_SHARE", &mut self.meal_window.calorie_share)?;
        Self::apply_env_var("BAND_LOWER", &mut self.meal_window.band_lower)?;
        Self::apply_env_var("BAND_UPPER", &mut self.meal_window.band_upper)?;

        // Filters
        Self::apply_env_var(
            "LOSS_MIN_PROTEIN_G",
            &mut self.filters.weight_loss_min_protein_g,
        )?;
        Self::apply_env_var(
            "STANDARD_MIN_PROTEIN_G",
            &mut self.filters.standard_min_protein_g,
        )?;

        // Limits
        Self::apply_env_var("DEFAULT_COUNT", &mut self.limits.default_count)?;

        Ok(self)
    }
}

// ============================================================================
// Sub-Configurations
// ============================================================================

/// Harris-Benedict (revised) BMR coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male intercept (88.362)
    pub male_constant: f64,
    /// Male weight coefficient (13.397 per kg)
    pub male_weight_coef: f64,
    /// Male height coefficient (4.799 per cm)
    pub male_height_coef: f64,
    /// Male age coefficient (5.677 per year, subtracted)
    pub male_age_coef: f64,
    /// Female intercept (447.593)
    pub female_constant: f64,
    /// Female weight coefficient (9.247 per kg)
    pub female_weight_coef: f64,
    /// Female height coefficient (3.098 per cm)
    pub female_height_coef: f64,
    /// Female age coefficient (4.330 per year, subtracted)
    pub female_age_coef: f64,
}

impl BmrConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let coefficients = [
            self.male_constant,
            self.male_weight_coef,
            self.male_height_coef,
            self.male_age_coef,
            self.female_constant,
            self.female_weight_coef,
            self.female_height_coef,
            self.female_age_coef,
        ];
        if coefficients.iter().any(|coef| !coef.is_finite()) {
            return Err(ConfigError::ValueOutOfRange("BMR coefficients must be finite"));
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male_constant: 88.362,
            male_weight_coef: 13.397,
            male_height_coef: 4.799,
            male_age_coef: 5.677,
            female_constant: 447.593,
            female_weight_coef: 9.247,
            female_height_coef: 3.098,
            female_age_coef: 4.330,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderate: f64,
    /// Very active (6-7 days/week): 1.725
    pub very: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            very: 1.725,
            extra: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.sedentary,
            self.light,
            self.moderate,
            self.very,
            self.extra,
        ];
        if factors.iter().any(|factor| !factor.is_finite() || *factor <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be finite and > 0",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must not decrease with activity level",
            ));
        }
        Ok(())
    }
}

/// BMI classification cut-offs (kg/m²)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiThresholds {
    /// Below this is underweight: 18.5
    pub normal_min: f64,
    /// Below this is normal: 25.0
    pub overweight_min: f64,
    /// Below this is overweight, at or above is obese: 30.0
    pub obese_min: f64,
}

impl Default for BmiThresholds {
    fn default() -> Self {
        Self {
            normal_min: 18.5,
            overweight_min: 25.0,
            obese_min: 30.0,
        }
    }
}

impl BmiThresholds {
    fn validate(&self) -> Result<(), ConfigError> {
        if [self.normal_min, self.overweight_min, self.obese_min]
            .iter()
            .any(|cutoff| !cutoff.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange("BMI thresholds must be finite"));
        }
        if self.normal_min <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("BMI normal_min must be > 0"));
        }
        if self.normal_min >= self.overweight_min || self.overweight_min >= self.obese_min {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be strictly ascending",
            ));
        }
        Ok(())
    }
}

/// Calorie multiplier and macro ceilings for one target policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetPolicy {
    /// Multiplier applied to TDEE
    pub calorie_multiplier: f64,
    /// Fat ceiling per meal (grams)
    pub max_fat_g: f64,
    /// Carbohydrate ceiling per meal (grams)
    pub max_carbs_g: f64,
}

impl TargetPolicy {
    fn validate(&self) -> Result<(), ConfigError> {
        if [self.calorie_multiplier, self.max_fat_g, self.max_carbs_g]
            .iter()
            .any(|value| !value.is_finite() || *value <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "target multipliers and macro ceilings must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// The three target policies, checked in order gain, weight loss, maintenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetPolicyConfig {
    /// Underweight or goal=gain: surplus with generous ceilings
    pub gain: TargetPolicy,
    /// Overweight, obese, or goal=lose: deficit with tight ceilings
    pub weight_loss: TargetPolicy,
    /// Everyone else
    pub maintenance: TargetPolicy,
}

impl Default for TargetPolicyConfig {
    fn default() -> Self {
        Self {
            gain: TargetPolicy {
                calorie_multiplier: 1.15,
                max_fat_g: 100.0,
                max_carbs_g: 300.0,
            },
            weight_loss: TargetPolicy {
                calorie_multiplier: 0.75,
                max_fat_g: 30.0,
                max_carbs_g: 80.0,
            },
            maintenance: TargetPolicy {
                calorie_multiplier: 1.0,
                max_fat_g: 50.0,
                max_carbs_g: 130.0,
            },
        }
    }
}

impl TargetPolicyConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.gain.validate()?;
        self.weight_loss.validate()?;
        self.maintenance.validate()
    }
}

/// Share of the daily target assumed for one meal
pub const MEAL_CALORIE_SHARE: f64 = 0.3;

/// Per-meal calorie window around `target x calorie_share`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealWindowConfig {
    /// Fraction of the daily target one meal should supply: 0.3
    pub calorie_share: f64,
    /// Lower band bound as a fraction of the meal target: 0.4
    pub band_lower: f64,
    /// Upper band bound as a fraction of the meal target: 1.2
    pub band_upper: f64,
}

impl Default for MealWindowConfig {
    fn default() -> Self {
        Self {
            calorie_share: MEAL_CALORIE_SHARE,
            band_lower: 0.4,
            band_upper: 1.2,
        }
    }
}

impl MealWindowConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let share = self.calorie_share;
        if !share.is_finite() || share <= 0.0 || share > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "calorie_share must be in (0, 1]",
            ));
        }
        if !self.band_lower.is_finite() || !self.band_upper.is_finite() {
            return Err(ConfigError::ValueOutOfRange("calorie band bounds must be finite"));
        }
        if self.band_lower < 0.0 || self.band_lower >= self.band_upper {
            return Err(ConfigError::InvalidRange(
                "band_lower must be >= 0 and below band_upper",
            ));
        }
        Ok(())
    }
}

/// Protein floors applied in the second filter pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum protein in weight-loss mode (grams): 10
    pub weight_loss_min_protein_g: f64,
    /// Minimum protein otherwise (grams): 8
    pub standard_min_protein_g: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            weight_loss_min_protein_g: 10.0,
            standard_min_protein_g: 8.0,
        }
    }
}

/// Linear score weights; the protein weight is subtracted
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Penalty per gram of fat
    pub fat: f64,
    /// Penalty per gram of carbohydrate
    pub carbs: f64,
    /// Reward per gram of protein
    pub protein: f64,
    /// Penalty per kcal of distance from the meal target
    pub calorie_gap: f64,
}

impl ScoreWeights {
    fn validate(&self) -> Result<(), ConfigError> {
        if [self.fat, self.carbs, self.protein, self.calorie_gap]
            .iter()
            .any(|weight| !weight.is_finite() || *weight < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "score weights must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Score weights for both scoring modes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeightsConfig {
    /// Weight-loss mode weights
    pub weight_loss: ScoreWeights,
    /// Standard mode weights
    pub standard: ScoreWeights,
}

impl ScoreWeightsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.weight_loss.validate()?;
        self.standard.validate()
    }
}

impl Default for ScoreWeightsConfig {
    fn default() -> Self {
        Self {
            weight_loss: ScoreWeights {
                fat: 3.0,
                carbs: 2.0,
                protein: 5.0,
                calorie_gap: 0.1,
            },
            standard: ScoreWeights {
                fat: 1.5,
                carbs: 1.0,
                protein: 3.0,
                calorie_gap: 0.2,
            },
        }
    }
}

/// Calorie thresholds for Light / Balanced / High-Calorie labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCategoryThresholds {
    /// Meals at or above this are at least Balanced: 400 kcal
    pub balanced_min_kcal: f64,
    /// Meals at or above this are High-Calorie: 600 kcal
    pub high_calorie_min_kcal: f64,
}

impl Default for MealCategoryThresholds {
    fn default() -> Self {
        Self {
            balanced_min_kcal: 400.0,
            high_calorie_min_kcal: 600.0,
        }
    }
}

/// Recommendation count limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountLimits {
    /// Count used when the caller gives none
    pub default_count: usize,
    /// Largest count a single request may ask for
    pub max_count: usize,
}

impl Default for CountLimits {
    fn default() -> Self {
        Self {
            default_count: limits::DEFAULT_RECOMMENDATION_COUNT,
            max_count: limits::MAX_RECOMMENDATION_COUNT,
        }
    }
}
