// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Multi-Seed Batch Runs
// Each territory runs N times with seeds base..base+N, territories in parallel.

use dromcom_engine::consistency::age_share_overflows;
use dromcom_engine::registry::{self, TERRITORIES};
use dromcom_engine::{Result, Synthesizer};
use rayon::prelude::*;

use crate::report::*;

use std::time::Instant;

/// One seeded synthesis reduced to its headline numbers.
pub fn run_single(synth: &Synthesizer, territory: &str, seed: u64) -> Result<RunResult> {
    let start = Instant::now();
    let run = synth.run(territory, seed)?;
    let summary = run.summary();
    let overflows = age_share_overflows(&run.series).len();

    Ok(RunResult {
        territory: territory.to_string(),
        seed,
        mean_population: summary.mean_population,
        population_growth_pct: summary.population_growth_pct(),
        mean_birth_rate: summary.mean_birth_rate,
        mean_death_rate: summary.mean_death_rate,
        mean_natural_balance: summary.mean_natural_balance,
        mean_migration_balance: summary.mean_migration_balance,
        mean_hdi: summary.mean_hdi,
        mean_life_expectancy: summary.mean_life_expectancy,
        youth_share_pct: summary.youth_share_pct(),
        elderly_share_pct: summary.elderly_share_pct(),
        unemployment_pct: summary.unemployment_pct(),
        mean_gdp_per_capita: summary.mean_gdp_per_capita,
        age_share_overflow_years: overflows,
        elapsed_us: start.elapsed().as_micros(),
    })
}

/// N runs of one territory, aggregated.
pub fn run_monte_carlo(
    synth: &Synthesizer,
    territory: &str,
    n_runs: usize,
    base_seed: u64,
) -> TerritoryReport {
    let mut results = Vec::with_capacity(n_runs);
    let mut failed = Vec::new();
    for i in 0..n_runs {
        let seed = base_seed.wrapping_add(i as u64);
        match run_single(synth, territory, seed) {
            Ok(result) => results.push(result),
            Err(e) => {
                tracing::warn!(territory, seed, error = %e, "run failed");
                failed.push(FailedRun { seed, error: e.to_string() });
            }
        }
    }
    aggregate(territory, results, failed)
}

/// Every registry territory, one rayon task each.
pub fn run_batch(synth: &Synthesizer, n_runs: usize, base_seed: u64) -> Vec<TerritoryReport> {
    TERRITORIES
        .par_iter()
        .map(|profile| run_monte_carlo(synth, profile.name, n_runs, base_seed))
        .collect()
}

fn aggregate(territory: &str, results: Vec<RunResult>, failed_runs: Vec<FailedRun>) -> TerritoryReport {
    TerritoryReport {
        territory: territory.to_string(),
        category: registry::profile(territory).category.label().to_string(),
        n_runs: results.len() + failed_runs.len(),
        failed_runs,
        mean_population: Stats::of(&results, |r| r.mean_population),
        population_growth_pct: Stats::of(&results, |r| r.population_growth_pct),
        mean_birth_rate: Stats::of(&results, |r| r.mean_birth_rate),
        mean_death_rate: Stats::of(&results, |r| r.mean_death_rate),
        mean_natural_balance: Stats::of(&results, |r| r.mean_natural_balance),
        mean_migration_balance: Stats::of(&results, |r| r.mean_migration_balance),
        mean_hdi: Stats::of(&results, |r| r.mean_hdi),
        mean_life_expectancy: Stats::of(&results, |r| r.mean_life_expectancy),
        youth_share_pct: Stats::of(&results, |r| r.youth_share_pct),
        elderly_share_pct: Stats::of(&results, |r| r.elderly_share_pct),
        unemployment_pct: Stats::of(&results, |r| r.unemployment_pct),
        mean_gdp_per_capita: Stats::of(&results, |r| r.mean_gdp_per_capita),
        age_share_overflow_years: Stats::of(&results, |r| r.age_share_overflow_years as f64),
        elapsed_us: Stats::of(&results, |r| r.elapsed_us as f64),
        individual_runs: results,
    }
}
