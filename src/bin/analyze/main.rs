// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Territory Analyzer
//
// Usage:
//   cargo run --release --bin analyze                           # Interactive menu
//   cargo run --release --bin analyze -- --territory Mayotte    # Skip the menu
//   cargo run --release --bin analyze -- --all --runs 30        # Every territory, 30 seeds each
//   cargo run --release --bin analyze -- --config run.toml      # Settings from TOML

mod insights;
mod monte_carlo;
mod panels;
mod report;
mod selection;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use dromcom_engine::export;
use dromcom_engine::{AgeShareCheck, BalanceStrategy, EngineConfig, Result, Synthesizer};
use tracing_subscriber::EnvFilter;

use insights::Insights;
use report::BatchReport;

const DEFAULT_LOG_FILTER: &str = "dromcom_engine=info,analyze=info";

// ─── CLI Parsing ────────────────────────────────────────────────────────────

/// Synthetic demographic analysis of the French overseas territories
#[derive(Parser, Debug)]
#[command(name = "analyze")]
#[command(about = "Generate and analyse synthetic demographic series for DROM-COM territories")]
struct Args {
    /// Territory name, used verbatim (unknown names use the default profile)
    #[arg(long)]
    territory: Option<String>,

    /// TOML file with engine settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    start_year: Option<i32>,

    #[arg(long)]
    end_year: Option<i32>,

    /// Natural balance derivation: consistent or independent
    #[arg(long)]
    balance: Option<BalanceStrategy>,

    /// Youth + elderly > 1 handling: off, warn or enforce
    #[arg(long)]
    age_share_check: Option<AgeShareCheck>,

    /// Directory for CSV and JSON output
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Skip writing the chart panel JSON
    #[arg(long)]
    no_panels: bool,

    /// Run every territory instead of one
    #[arg(long)]
    all: bool,

    /// Seeds per territory in batch mode
    #[arg(long, default_value_t = 30)]
    runs: usize,
}

impl Args {
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };
        if let Some(start) = self.start_year {
            config.start_year = start;
        }
        if let Some(end) = self.end_year {
            config.end_year = end;
        }
        if let Some(balance) = self.balance {
            config.balance = balance;
        }
        if let Some(check) = self.age_share_check {
            config.age_share_check = check;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "analysis failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.engine_config()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, "base seed");

    let synth = Synthesizer::new(&config)?;
    if args.all {
        run_batch(&synth, &config, seed, args.runs, &args.out_dir)
    } else {
        run_single(&synth, args, seed)
    }
}

fn run_single(synth: &Synthesizer, args: &Args, seed: u64) -> Result<()> {
    let years = *synth.years();
    println!("DEMOGRAPHIC ANALYSIS OF THE DROM-COM ({}-{})", years.start(), years.end());
    println!("{}", "=".repeat(60));

    let territory = match &args.territory {
        Some(name) => name.clone(),
        None => {
            let stdin = io::stdin();
            let selection = selection::prompt(&mut stdin.lock(), &mut io::stdout())?;
            if selection.fell_back {
                println!("Invalid choice. Selecting {} by default.", selection::FALLBACK_TERRITORY);
            }
            selection.territory
        }
    };

    let run = synth.run(&territory, seed)?;

    let csv_path = args.out_dir.join(export::csv_file_name(&territory, &years));
    export::save_csv(&run.series, &csv_path)?;
    println!("Data saved: {}", csv_path.display());

    println!("\nData preview:");
    println!("{:>6} {:>12} {:>11} {:>11} {:>7}", "year", "population", "birth_rate", "death_rate", "hdi");
    for row in run.series.rows().take(5) {
        println!(
            "{:>6} {:>12.0} {:>11.2} {:>11.2} {:>7.3}",
            row.year, row.population, row.birth_rate, row.death_rate, row.hdi
        );
    }

    if !args.no_panels {
        let panel_path = args.out_dir.join(export::panels_file_name(&territory));
        export::write_json(&panels::build_panels(&run), &panel_path)?;
        println!("Chart panels saved: {}", panel_path.display());
    }

    let insights = Insights::from_run(&run);
    println!("\n{}", insights);
    let summary_path = args.out_dir.join(export::summary_file_name(&territory));
    export::write_json(&insights, &summary_path)?;

    println!("Demographic analysis of {} complete.", territory);
    println!("Period: {}-{}", years.start(), years.end());
    Ok(())
}

fn run_batch(
    synth: &Synthesizer,
    config: &EngineConfig,
    seed: u64,
    runs: usize,
    out_dir: &Path,
) -> Result<()> {
    println!("\n  DROM-COM Batch Runner");
    println!("  PRNG: ChaCha8Rng | Runs/territory: {} | Base seed: {}", runs, seed);
    println!(
        "  {:<26} {:>6} {:>13} {:>9} {:>8} {:>8} {:>7}",
        "Territory", "Runs", "Growth%", "HDI", "Youth%", "Unemp%", "Failed"
    );
    println!("  {}", "-".repeat(84));

    let started = Instant::now();
    let territories = monte_carlo::run_batch(synth, runs, seed);

    for report in &territories {
        let growth_ci = (report.population_growth_pct.ci_upper - report.population_growth_pct.ci_lower) / 2.0;
        println!(
            "  {:<26} {:>6} {:>7.1}±{:<5.2} {:>9.3} {:>8.1} {:>8.1} {:>7}",
            report.territory,
            report.n_runs,
            report.population_growth_pct.mean,
            growth_ci,
            report.mean_hdi.mean,
            report.youth_share_pct.mean,
            report.unemployment_pct.mean,
            report.failed_runs.len(),
        );
    }
    tracing::info!(elapsed_ms = started.elapsed().as_millis() as u64, "batch complete");

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
        .to_string();
    let report = BatchReport {
        timestamp: timestamp.clone(),
        version: env!("CARGO_PKG_VERSION"),
        prng: "ChaCha8Rng",
        start_year: config.start_year,
        end_year: config.end_year,
        balance: config.balance.to_string(),
        base_seed: seed,
        n_runs_per_territory: runs,
        territories,
    };

    let path = out_dir.join("results").join(format!("batch-{}.json", timestamp));
    export::write_json(&report, &path)?;
    println!("\n  Results written to {}", path.display());
    Ok(())
}
