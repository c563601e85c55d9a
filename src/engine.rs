// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Synthesis Core

use serde::Serialize;

use crate::config::EngineConfig;
use crate::consistency::{self, AgeShareCheck, BalanceStrategy};
use crate::error::Result;
use crate::generators::{self, SeriesInput};
use crate::noise::{GaussianNoise, NoiseSource};
use crate::registry::{self, TerritoryProfile};
use crate::shocks::ShockTable;
use crate::summary::{self, SummaryStatistics};
use crate::types::{DemographicSeries, SeriesKind, TerritoryConfig, YearIndex};

// ─── Territory Run ──────────────────────────────────────────────────────────

/// One finished synthesis: the requested name, what it resolved to, and the
/// reconciled table.
#[derive(Debug, Clone, Serialize)]
pub struct TerritoryRun {
    pub territory: String,
    /// `false` when the registry fell back to the default profile.
    pub known: bool,
    pub seed: Option<u64>,
    pub config: TerritoryConfig,
    pub series: DemographicSeries,
}

impl TerritoryRun {
    pub fn profile(&self) -> &'static TerritoryProfile {
        registry::profile(&self.territory)
    }

    pub fn summary(&self) -> SummaryStatistics {
        summary::summarize(&self.series)
    }
}

// ─── Synthesizer ────────────────────────────────────────────────────────────

/// Registry → generators → consistency pass, for one territory at a time.
/// Holds no per-run state, so one instance can serve parallel runs.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    years: YearIndex,
    balance: BalanceStrategy,
    age_share_check: AgeShareCheck,
    shocks: ShockTable,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self {
            years: YearIndex::default(),
            balance: BalanceStrategy::default(),
            age_share_check: AgeShareCheck::default(),
            shocks: ShockTable::standard(),
        }
    }
}

impl Synthesizer {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Ok(Self {
            years: config.horizon()?,
            balance: config.balance,
            age_share_check: config.age_share_check,
            shocks: ShockTable::standard(),
        })
    }

    pub fn with_shocks(mut self, shocks: ShockTable) -> Self {
        self.shocks = shocks;
        self
    }

    pub fn with_balance(mut self, balance: BalanceStrategy) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_age_share_check(mut self, check: AgeShareCheck) -> Self {
        self.age_share_check = check;
        self
    }

    pub fn years(&self) -> &YearIndex {
        &self.years
    }

    pub fn shocks(&self) -> &ShockTable {
        &self.shocks
    }

    pub fn input<'a>(&'a self, territory: &'a str) -> SeriesInput<'a> {
        SeriesInput {
            territory,
            profile: registry::profile(territory),
            years: &self.years,
            shocks: &self.shocks,
        }
    }

    /// Seeded run with the Gaussian noise source.
    pub fn run(&self, territory: &str, seed: u64) -> Result<TerritoryRun> {
        let mut noise = GaussianNoise::seeded(seed);
        let mut run = self.run_with(territory, &mut noise)?;
        run.seed = Some(seed);
        Ok(run)
    }

    /// Full pipeline against any noise source.
    pub fn run_with(&self, territory: &str, noise: &mut dyn NoiseSource) -> Result<TerritoryRun> {
        let known = registry::is_known(territory);
        tracing::info!(
            territory,
            known,
            start = self.years.start(),
            end = self.years.end(),
            balance = %self.balance,
            "synthesizing series"
        );

        let mut series = self.generate_raw(territory, noise)?;
        self.reconcile(territory, &mut series, noise)?;

        Ok(TerritoryRun {
            territory: territory.to_string(),
            known,
            seed: None,
            config: registry::lookup(territory),
            series,
        })
    }

    /// Generators only, in column order. Natural balance is left at zero
    /// until [`Synthesizer::reconcile`] derives it.
    pub fn generate_raw(
        &self,
        territory: &str,
        noise: &mut dyn NoiseSource,
    ) -> Result<DemographicSeries> {
        let input = self.input(territory);
        let mut series = DemographicSeries::zeroed(self.years);
        for kind in SeriesKind::ALL {
            if let Some(values) = generators::generate(kind, &input, noise) {
                series.set(kind, values)?;
            }
        }
        Ok(series)
    }

    /// Consistency pass plus the configured age-share check.
    pub fn reconcile(
        &self,
        territory: &str,
        series: &mut DemographicSeries,
        noise: &mut dyn NoiseSource,
    ) -> Result<()> {
        let input = self.input(territory);
        consistency::reconcile(&input, series, self.balance, noise);
        consistency::check_age_shares(series, self.age_share_check)
    }
}
