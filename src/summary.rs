// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Summary Reducer

use serde::Serialize;

use crate::types::{DemographicSeries, SeriesKind};

/// Scalar aggregates of a finished series. Shares and unemployment are
/// fractions; the `*_pct` helpers scale them for reporting.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SummaryStatistics {
    pub mean_population: f64,
    pub mean_births: f64,
    pub mean_deaths: f64,
    pub mean_birth_rate: f64,
    pub mean_death_rate: f64,
    pub mean_natural_balance: f64,
    pub mean_hdi: f64,
    pub mean_life_expectancy: f64,
    pub mean_migration_balance: f64,
    pub mean_unemployment_rate: f64,
    pub mean_gdp_per_capita: f64,
    /// `last / first - 1` over the population column.
    pub population_growth: f64,
    pub youth_share: f64,
    /// `1 - youth - elderly`; negative if the shares overflow.
    pub working_age_share: f64,
    pub elderly_share: f64,
}

impl SummaryStatistics {
    pub fn population_growth_pct(&self) -> f64 {
        self.population_growth * 100.0
    }

    pub fn youth_share_pct(&self) -> f64 {
        self.youth_share * 100.0
    }

    pub fn working_age_share_pct(&self) -> f64 {
        100.0 - self.youth_share_pct() - self.elderly_share_pct()
    }

    pub fn elderly_share_pct(&self) -> f64 {
        self.elderly_share * 100.0
    }

    pub fn unemployment_pct(&self) -> f64 {
        self.mean_unemployment_rate * 100.0
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Fold a finished series into its summary. A series is never empty, so
/// every mean is defined; a zero first population yields a non-finite growth.
pub fn summarize(series: &DemographicSeries) -> SummaryStatistics {
    let m = |kind: SeriesKind| mean(series.get(kind));
    let population = series.get(SeriesKind::Population);
    let first = population[0];
    let last = population[population.len() - 1];

    let youth_share = m(SeriesKind::YouthShare);
    let elderly_share = m(SeriesKind::ElderlyShare);

    SummaryStatistics {
        mean_population: m(SeriesKind::Population),
        mean_births: m(SeriesKind::Births),
        mean_deaths: m(SeriesKind::Deaths),
        mean_birth_rate: m(SeriesKind::BirthRate),
        mean_death_rate: m(SeriesKind::DeathRate),
        mean_natural_balance: m(SeriesKind::NaturalBalance),
        mean_hdi: m(SeriesKind::Hdi),
        mean_life_expectancy: m(SeriesKind::LifeExpectancy),
        mean_migration_balance: m(SeriesKind::MigrationBalance),
        mean_unemployment_rate: m(SeriesKind::UnemploymentRate),
        mean_gdp_per_capita: m(SeriesKind::GdpPerCapita),
        population_growth: last / first - 1.0,
        youth_share,
        working_age_share: 1.0 - youth_share - elderly_share,
        elderly_share,
    }
}
