// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Series Generators

//! One generator per variable. Each value is
//! `level(i) * seasonal(year) * noise(σ)`, where `level` is the territory's
//! linear trend (capped for HDI and life expectancy), `seasonal` is the
//! product of the cycle-stage shock rules for that year, and `noise` is a
//! draw from the run's [`NoiseSource`] with the series' spread.

use crate::noise::NoiseSource;
use crate::registry::TerritoryProfile;
use crate::shocks::{ShockTable, Stage};
use crate::types::{SeriesKind, YearIndex};

/// Asymptote applied to the HDI trend before noise.
pub const HDI_CEILING: f64 = 0.95;

/// Asymptote applied to the life-expectancy trend before noise.
pub const LIFE_EXPECTANCY_CEILING: f64 = 85.0;

// ─── Generator Input ────────────────────────────────────────────────────────

/// Everything a generator reads. `territory` is the requested name (which
/// selects territory-scoped shocks); `profile` is what the registry resolved.
#[derive(Clone, Copy)]
pub struct SeriesInput<'a> {
    pub territory: &'a str,
    pub profile: &'a TerritoryProfile,
    pub years: &'a YearIndex,
    pub shocks: &'a ShockTable,
}

impl<'a> SeriesInput<'a> {
    /// Same inputs over a different window.
    pub fn with_years(&self, years: &'a YearIndex) -> Self {
        Self { years, ..*self }
    }

    pub fn seasonal(&self, kind: SeriesKind, year: i32) -> f64 {
        self.shocks.multiplier(Stage::Cycle, self.territory, kind, year)
    }

    fn sample(
        &self,
        kind: SeriesKind,
        noise: &mut dyn NoiseSource,
        level: impl Fn(usize) -> f64,
    ) -> Vec<f64> {
        let spread = kind.noise_spread();
        self.years
            .enumerate()
            .map(|(i, year)| {
                let draw = if spread > 0.0 { noise.factor(spread) } else { 1.0 };
                level(i) * self.seasonal(kind, year) * draw
            })
            .collect()
    }
}

// ─── Levels (pre-noise) ─────────────────────────────────────────────────────

/// Trend value at `offset` before the seasonal multiplier and noise.
/// `None` for natural balance, which is derived from births and deaths.
pub fn level(kind: SeriesKind, profile: &TerritoryProfile, offset: usize) -> Option<f64> {
    let cfg = &profile.config;
    let t = &profile.trends;
    let i = offset as f64;
    let value = match kind {
        SeriesKind::Population => cfg.population_base * (1.0 + t.population_growth * i),
        SeriesKind::Births => cfg.births_base() * (1.0 + t.births_slope * i),
        SeriesKind::Deaths => cfg.deaths_base() * (1.0 + t.deaths_slope * i),
        SeriesKind::BirthRate => cfg.birth_rate_base * (1.0 + t.birth_rate_slope * i),
        SeriesKind::DeathRate => cfg.death_rate_base * (1.0 + t.death_rate_slope * i),
        SeriesKind::NaturalBalance => return None,
        SeriesKind::Hdi => (cfg.hdi_base * (1.0 + t.hdi_slope * i)).min(HDI_CEILING),
        SeriesKind::LifeExpectancy => t.life_expectancy.at(offset).min(LIFE_EXPECTANCY_CEILING),
        SeriesKind::MigrationBalance => t.migration_balance.at(offset),
        SeriesKind::YouthShare => t.youth_share.at(offset),
        SeriesKind::ElderlyShare => t.elderly_share.at(offset),
        SeriesKind::UnemploymentRate => t.unemployment_rate.at(offset),
        SeriesKind::GdpPerCapita => t.gdp_per_capita.at(offset),
    };
    Some(value)
}

fn sampled(kind: SeriesKind, input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    input.sample(kind, noise, |i| level(kind, input.profile, i).unwrap_or(0.0))
}

// ─── Per-Variable Generators ────────────────────────────────────────────────

/// Deterministic: population carries no noise.
pub fn population(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::Population, input, noise)
}

pub fn births(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::Births, input, noise)
}

pub fn deaths(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::Deaths, input, noise)
}

pub fn birth_rate(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::BirthRate, input, noise)
}

pub fn death_rate(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::DeathRate, input, noise)
}

/// Element-wise `births - deaths`.
pub fn natural_balance(births: &[f64], deaths: &[f64]) -> Vec<f64> {
    births.iter().zip(deaths).map(|(b, d)| b - d).collect()
}

/// Capped at [`HDI_CEILING`] before noise; a draw above 1.0 can still lift
/// the stored value over the ceiling.
pub fn hdi(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::Hdi, input, noise)
}

/// Capped at [`LIFE_EXPECTANCY_CEILING`] before noise, like [`hdi`].
pub fn life_expectancy(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::LifeExpectancy, input, noise)
}

pub fn migration_balance(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::MigrationBalance, input, noise)
}

pub fn youth_share(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::YouthShare, input, noise)
}

pub fn elderly_share(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::ElderlyShare, input, noise)
}

pub fn unemployment_rate(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::UnemploymentRate, input, noise)
}

/// Thousands of euros per inhabitant.
pub fn gdp_per_capita(input: &SeriesInput<'_>, noise: &mut dyn NoiseSource) -> Vec<f64> {
    sampled(SeriesKind::GdpPerCapita, input, noise)
}

/// Dispatch by kind. Natural balance has no standalone generator and
/// yields `None`; see [`natural_balance`].
pub fn generate(
    kind: SeriesKind,
    input: &SeriesInput<'_>,
    noise: &mut dyn NoiseSource,
) -> Option<Vec<f64>> {
    let values = match kind {
        SeriesKind::Population => population(input, noise),
        SeriesKind::Births => births(input, noise),
        SeriesKind::Deaths => deaths(input, noise),
        SeriesKind::BirthRate => birth_rate(input, noise),
        SeriesKind::DeathRate => death_rate(input, noise),
        SeriesKind::NaturalBalance => return None,
        SeriesKind::Hdi => hdi(input, noise),
        SeriesKind::LifeExpectancy => life_expectancy(input, noise),
        SeriesKind::MigrationBalance => migration_balance(input, noise),
        SeriesKind::YouthShare => youth_share(input, noise),
        SeriesKind::ElderlyShare => elderly_share(input, noise),
        SeriesKind::UnemploymentRate => unemployment_rate(input, noise),
        SeriesKind::GdpPerCapita => gdp_per_capita(input, noise),
    };
    Some(values)
}
