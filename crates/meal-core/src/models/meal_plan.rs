// ABOUTME: Meal plan models for logged food intake
// ABOUTME: Foods per 100 g, weighed meal items, plan totals, and consumed daily totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::energy::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from a name or single-letter code, defaulting to `Snack`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "b" => Self::Breakfast,
            "lunch" | "l" => Self::Lunch,
            "dinner" | "d" => Self::Dinner,
            _ => Self::Snack,
        }
    }
}

/// Food item with nutrient values per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Food name
    pub name: String,
    /// Category name (e.g. "Legumes")
    pub category: String,
    /// Energy per 100 g (kcal)
    pub calories: u32,
    /// Protein per 100 g (grams)
    pub protein: f64,
    /// Carbohydrates per 100 g (grams)
    pub carbs: f64,
    /// Fats per 100 g (grams)
    pub fats: f64,
    /// Fiber per 100 g (grams)
    #[serde(default)]
    pub fiber: f64,
}

/// A weighed portion of a food inside a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealFood {
    /// Food being eaten
    pub food: Food,
    /// Portion size in grams
    pub quantity_g: f64,
}

impl MealFood {
    fn scale(&self, per_100g: f64) -> f64 {
        per_100g * self.quantity_g / 100.0
    }

    /// Energy of this portion (kcal)
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.scale(f64::from(self.food.calories))
    }

    /// Protein in this portion (grams)
    #[must_use]
    pub fn protein(&self) -> f64 {
        self.scale(self.food.protein)
    }

    /// Carbohydrates in this portion (grams)
    #[must_use]
    pub fn carbs(&self) -> f64 {
        self.scale(self.food.carbs)
    }

    /// Fats in this portion (grams)
    #[must_use]
    pub fn fats(&self) -> f64 {
        self.scale(self.food.fats)
    }
}

/// Summed nutrients for a plan or a day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MealTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein: f64,
    /// Carbohydrates (grams)
    pub carbs: f64,
    /// Fats (grams)
    pub fats: f64,
}

impl Add for MealTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
        }
    }
}

impl Sum for MealTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Macronutrient share of macro-derived energy, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    /// Protein as percentage of macro energy
    pub protein_percent: f64,
    /// Carbohydrates as percentage of macro energy
    pub carbs_percent: f64,
    /// Fat as percentage of macro energy
    pub fat_percent: f64,
}

impl MealTotals {
    /// Macro split by energy; `None` when no macro energy was logged
    #[must_use]
    pub fn macro_percentages(&self) -> Option<MacroPercentages> {
        let protein_kcal = self.protein * PROTEIN_KCAL_PER_G;
        let carbs_kcal = self.carbs * CARBS_KCAL_PER_G;
        let fat_kcal = self.fats * FAT_KCAL_PER_G;
        let total = protein_kcal + carbs_kcal + fat_kcal;
        if total <= 0.0 {
            return None;
        }
        Some(MacroPercentages {
            protein_percent: protein_kcal / total * 100.0,
            carbs_percent: carbs_kcal / total * 100.0,
            fat_percent: fat_kcal / total * 100.0,
        })
    }
}

/// A named meal on a given date made of weighed foods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Plan name
    pub name: String,
    /// Date the meal is planned for
    pub date: NaiveDate,
    /// Breakfast, lunch, dinner, or snack
    pub meal_type: MealType,
    /// Weighed foods
    #[serde(default)]
    pub items: Vec<MealFood>,
    /// Whether the meal has been eaten
    #[serde(default)]
    pub is_consumed: bool,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl MealPlan {
    /// Create an empty, unconsumed plan
    #[must_use]
    pub fn new(name: impl Into<String>, date: NaiveDate, meal_type: MealType) -> Self {
        Self {
            name: name.into(),
            date,
            meal_type,
            items: Vec::new(),
            is_consumed: false,
            notes: String::new(),
        }
    }

    /// Add a weighed food
    pub fn add_food(&mut self, food: Food, quantity_g: f64) {
        self.items.push(MealFood { food, quantity_g });
    }

    /// Sum of all items
    #[must_use]
    pub fn totals(&self) -> MealTotals {
        self.items
            .iter()
            .map(|item| MealTotals {
                calories: item.calories(),
                protein: item.protein(),
                carbs: item.carbs(),
                fats: item.fats(),
            })
            .sum()
    }
}

/// Consumed intake for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Day being summarized
    pub date: NaiveDate,
    /// Number of consumed plans counted
    pub meals_consumed: usize,
    /// Summed nutrients
    pub totals: MealTotals,
}

impl DailyTotals {
    /// Sum consumed plans dated `date`; planned-but-uneaten meals are ignored
    #[must_use]
    pub fn for_date(plans: &[MealPlan], date: NaiveDate) -> Self {
        let consumed: Vec<&MealPlan> = plans
            .iter()
            .filter(|plan| plan.date == date && plan.is_consumed)
            .collect();
        Self {
            date,
            meals_consumed: consumed.len(),
            totals: consumed.iter().map(|plan| plan.totals()).sum(),
        }
    }

    /// Consumed calories divided by the daily target (0 for a non-positive target)
    #[must_use]
    pub fn calorie_ratio(&self, target_calories: f64) -> f64 {
        if target_calories > 0.0 {
            self.totals.calories / target_calories
        } else {
            0.0
        }
    }
}
