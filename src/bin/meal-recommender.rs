// ABOUTME: Command-line front end for the meal recommendation engine
// ABOUTME: Reads a profile from flags or a JSON file and prints ranked meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal recommender CLI.
//!
//! Usage:
//! ```bash
//! # Built-in fallback catalog, profile from flags
//! cargo run --bin meal-recommender -- --age 30 --sex male --height 175 --weight 90
//!
//! # Dataset catalog, profile from a JSON file, table output
//! cargo run --bin meal-recommender -- --catalog data/indian_food.csv \
//!     --profile profile.json --count 10 --format table
//!
//! # Catalog overview only
//! cargo run --bin meal-recommender -- --catalog data/indian_food.csv --summary
//! ```
//!
//! Results go to stdout; logs go to stderr. Invalid profiles exit with code 2.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use meal_core::models::{ProfileRecord, ScoredRecommendation};
use meal_recommender::catalog::Catalog;
use meal_recommender::config::AppConfig;
use meal_recommender::service::RecommendationService;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

#[derive(Parser)]
#[command(
    name = "meal-recommender",
    about = "Meal Recommendation Scorer",
    long_about = "Rank catalog meals against a calorie target derived from body metrics, goal, and activity"
)]
struct Args {
    /// Catalog file (CSV or JSON); overrides `MEAL_CATALOG_PATH`
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Profile JSON file; individual flags override its fields
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Age in years
    #[arg(long)]
    age: Option<u32>,

    /// Sex (male, female, other)
    #[arg(long)]
    sex: Option<String>,

    /// Height in centimeters
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Goal (lose, maintain, gain)
    #[arg(long)]
    goal: Option<String>,

    /// Activity level (sedentary, light, moderate, very, extra)
    #[arg(long)]
    activity: Option<String>,

    /// Number of recommendations
    #[arg(long)]
    count: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print catalog category counts instead of recommendations
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn profile_record(&self) -> Result<ProfileRecord> {
        let mut record = match &self.profile {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read profile {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Invalid profile JSON in {}", path.display()))?
            }
            None => ProfileRecord::default(),
        };

        if self.age.is_some() {
            record.age = self.age;
        }
        if self.sex.is_some() {
            record.sex.clone_from(&self.sex);
        }
        if self.height.is_some() {
            record.height = self.height;
        }
        if self.weight.is_some() {
            record.weight = self.weight;
        }
        if self.goal.is_some() {
            record.goal.clone_from(&self.goal);
        }
        if self.activity.is_some() {
            record.activity_level.clone_from(&self.activity);
        }

        Ok(record)
    }
}

fn write_table(out: &mut impl Write, recommendations: &[ScoredRecommendation]) -> io::Result<()> {
    writeln!(
        out,
        "{:<4} {:<32} {:>6} {:>8} {:>8} {:>8}  {:<12} {:>8}",
        "#", "Meal", "kcal", "Protein", "Carbs", "Fat", "Category", "Score"
    )?;
    for (rank, rec) in recommendations.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<32} {:>6} {:>8.1} {:>8.1} {:>8.1}  {:<12} {:>8.2}",
            rank + 1,
            rec.name,
            rec.calories,
            rec.protein,
            rec.carbs,
            rec.fat,
            rec.meal_category.to_string(),
            rec.score
        )?;
    }
    if let Some(first) = recommendations.first() {
        writeln!(
            out,
            "\nBMI: {}  Goal: {}  Daily target: {} kcal  Ceilings: fat {} g, carbs {} g",
            first.bmi_category, first.goal, first.target_calories, first.max_fat, first.max_carbs
        )?;
    } else {
        writeln!(out, "No meals matched the profile's calorie window and macro limits")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::from_env()?.with_catalog_path(args.catalog.clone());
    let logging = if args.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    logging.init()?;

    let catalog = Arc::new(Catalog::load_or_fallback(config.catalog_path.as_deref()));
    let service = RecommendationService::new(catalog, config.scoring);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.summary {
        let summary = service.catalog_summary();
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
        return Ok(());
    }

    let record = args.profile_record()?;
    let recommendations = match service.recommend(&record, args.count) {
        Ok(recommendations) => recommendations,
        Err(e) if e.code.is_caller_error() => {
            eprintln!("Invalid request: {}", e.message);
            process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };
    info!(count = recommendations.len(), "Recommendations ready");

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &recommendations)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_table(&mut out, &recommendations)?,
    }

    Ok(())
}
