// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Batch Report Types

use serde::Serialize;

// ─── Statistics (per-metric aggregation across seeds) ──────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    /// Sample statistics with a normal-approximation 95% interval.
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let half_width = 1.96 * std_dev / (n as f64).sqrt();
        Self {
            mean,
            std_dev,
            ci_lower: mean - half_width,
            ci_upper: mean + half_width,
            min: samples.iter().copied().fold(f64::INFINITY, f64::min),
            max: samples.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }

    pub fn of<T>(items: &[T], metric: impl Fn(&T) -> f64) -> Self {
        let samples: Vec<f64> = items.iter().map(metric).collect();
        Self::from_samples(&samples)
    }
}

// ─── Single-Run Result ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub territory: String,
    pub seed: u64,
    pub mean_population: f64,
    pub population_growth_pct: f64,
    pub mean_birth_rate: f64,
    pub mean_death_rate: f64,
    pub mean_natural_balance: f64,
    pub mean_migration_balance: f64,
    pub mean_hdi: f64,
    pub mean_life_expectancy: f64,
    pub youth_share_pct: f64,
    pub elderly_share_pct: f64,
    pub unemployment_pct: f64,
    pub mean_gdp_per_capita: f64,
    pub age_share_overflow_years: usize,
    pub elapsed_us: u128,
}

// ─── Per-Territory Aggregation ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct TerritoryReport {
    pub territory: String,
    pub category: String,
    pub n_runs: usize,
    pub failed_runs: Vec<FailedRun>,
    pub mean_population: Stats,
    pub population_growth_pct: Stats,
    pub mean_birth_rate: Stats,
    pub mean_death_rate: Stats,
    pub mean_natural_balance: Stats,
    pub mean_migration_balance: Stats,
    pub mean_hdi: Stats,
    pub mean_life_expectancy: Stats,
    pub youth_share_pct: Stats,
    pub elderly_share_pct: Stats,
    pub unemployment_pct: Stats,
    pub mean_gdp_per_capita: Stats,
    pub age_share_overflow_years: Stats,
    pub elapsed_us: Stats,
    pub individual_runs: Vec<RunResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedRun {
    pub seed: u64,
    pub error: String,
}

// ─── Top-Level Report ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub start_year: i32,
    pub end_year: i32,
    pub balance: String,
    pub base_seed: u64,
    pub n_runs_per_territory: usize,
    pub territories: Vec<TerritoryReport>,
}
