// ABOUTME: Criterion benchmarks for meal scoring and catalog parsing
// ABOUTME: Measures recommendation latency across catalog sizes and CSV load throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the meal recommender.
//!
//! Measures the scorer over synthetic catalogs of increasing size and the
//! CSV parser over an equivalent export.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use meal_core::models::{ActivityLevel, Goal, MealCandidate, Sex, UserProfile};
use meal_intelligence::{compute_target, MealScorer, ScoringConfig};
use meal_recommender::catalog::Catalog;
use std::fmt::Write;

/// Catalog sizes: the fallback scale, a typical dataset, and a stress size
const CATALOG_SIZES: [usize; 3] = [5, 1_000, 20_000];

#[allow(clippy::cast_precision_loss)]
fn generate_catalog(count: usize) -> Vec<MealCandidate> {
    (0..count)
        .map(|index| {
            let step = index as f64;
            MealCandidate::new(
                format!("Bench Dish {index}"),
                ((index * 37) % 900) as f64 + 50.0,
                (step * 0.7) % 45.0,
                (step * 3.1) % 140.0,
                (step * 1.9) % 60.0,
            )
        })
        .collect()
}

fn generate_csv(count: usize) -> String {
    let mut csv = String::from("Dish Name,Calories (kcal),Carbohydrates (g),Protein (g),Fats (g)\n");
    for meal in generate_catalog(count) {
        let _ = writeln!(
            csv,
            "\"{}\",{:.2},{:.2},{:.2},{:.2}",
            meal.name, meal.calories, meal.carbs, meal.protein, meal.fat
        );
    }
    csv
}

fn profiles() -> Vec<(&'static str, UserProfile)> {
    let build = |age, sex, height, weight, goal, activity| {
        UserProfile::new(age, sex, height, weight, goal, activity).ok()
    };
    [
        (
            "weight_loss",
            build(30, Sex::Male, 175.0, 90.0, Goal::Maintain, ActivityLevel::Moderate),
        ),
        (
            "maintenance",
            build(25, Sex::Male, 180.0, 75.0, Goal::Maintain, ActivityLevel::Very),
        ),
        (
            "gain",
            build(22, Sex::Female, 170.0, 50.0, Goal::Gain, ActivityLevel::Light),
        ),
    ]
    .into_iter()
    .filter_map(|(name, profile)| profile.map(|p| (name, p)))
    .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let scorer = MealScorer::with_config(ScoringConfig::default());

    for size in CATALOG_SIZES {
        let catalog = generate_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        for (name, profile) in profiles() {
            group.bench_with_input(BenchmarkId::new(name, size), &catalog, |b, catalog| {
                b.iter(|| scorer.recommend(black_box(&profile), black_box(catalog), 15));
            });
        }
    }

    group.finish();
}

fn bench_compute_target(c: &mut Criterion) {
    let config = ScoringConfig::default();
    let all = profiles();

    c.bench_function("compute_target", |b| {
        b.iter(|| {
            for (_, profile) in &all {
                black_box(compute_target(black_box(profile), &config));
            }
        });
    });
}

#[allow(clippy::cast_possible_truncation)]
fn bench_csv_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_csv");

    for size in [100, 5_000] {
        let csv = generate_csv(size);
        group.throughput(Throughput::Bytes(csv.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &csv, |b, csv| {
            b.iter(|| Catalog::from_csv_reader(black_box(csv.as_bytes())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recommend, bench_compute_target, bench_csv_parse);
criterion_main!(benches);
