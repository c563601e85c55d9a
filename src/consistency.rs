// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Cross-Series Consistency Pass

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::generators::{self, SeriesInput};
use crate::noise::NoiseSource;
use crate::shocks::Stage;
use crate::types::{DemographicSeries, SeriesKind, YearIndex};

// ─── Natural Balance Strategy ───────────────────────────────────────────────

/// How `natural_balance` is derived for each year.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStrategy {
    /// `births[i] - deaths[i]` from the generated columns. Exact.
    #[default]
    Consistent,
    /// Fresh births and deaths drawn over a single-year window, so the trend
    /// offset is always 0 and the noise is independent of the table's own
    /// births and deaths columns.
    Independent,
}

impl FromStr for BalanceStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "consistent" => Ok(Self::Consistent),
            "independent" => Ok(Self::Independent),
            _ => Err(EngineError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for BalanceStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consistent => write!(f, "consistent"),
            Self::Independent => write!(f, "independent"),
        }
    }
}

// ─── Age Share Check ────────────────────────────────────────────────────────

/// What to do with years where `youth_share + elderly_share > 1`.
/// Generation never prevents it; this only decides whether anyone hears.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgeShareCheck {
    Off,
    #[default]
    Warn,
    Enforce,
}

impl FromStr for AgeShareCheck {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "enforce" => Ok(Self::Enforce),
            _ => Err(EngineError::UnknownCheck(s.to_string())),
        }
    }
}

impl fmt::Display for AgeShareCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Warn => write!(f, "warn"),
            Self::Enforce => write!(f, "enforce"),
        }
    }
}

// ─── Reconcile ──────────────────────────────────────────────────────────────

/// Year-by-year, in index order:
/// 1. multiply every cell named by an active event-stage rule (rules compose
///    by product),
/// 2. derive `natural_balance` per `strategy`.
///
/// Natural balance is always written last for its year, so rules naming it
/// have no lasting effect and the consistent strategy stays exact even if a
/// rule targets births or deaths.
pub fn reconcile(
    input: &SeriesInput<'_>,
    series: &mut DemographicSeries,
    strategy: BalanceStrategy,
    noise: &mut dyn NoiseSource,
) {
    let years = *series.years();
    for (i, year) in years.enumerate() {
        for rule in input.shocks.active(Stage::Event, input.territory, year) {
            for &(kind, multiplier) in rule.effects {
                *series.cell_mut(kind, i) *= multiplier;
            }
            tracing::debug!(territory = input.territory, year, rule = rule.label, "applied event");
        }

        let balance = match strategy {
            BalanceStrategy::Consistent => {
                series.value(SeriesKind::Births, i) - series.value(SeriesKind::Deaths, i)
            }
            BalanceStrategy::Independent => {
                let window = YearIndex::single(year);
                let single = input.with_years(&window);
                let births = generators::births(&single, noise);
                let deaths = generators::deaths(&single, noise);
                births[0] - deaths[0]
            }
        };
        *series.cell_mut(SeriesKind::NaturalBalance, i) = balance;
    }
}

/// Years where youth and elderly shares together exceed one.
pub fn age_share_overflows(series: &DemographicSeries) -> Vec<(i32, f64)> {
    let youth = series.get(SeriesKind::YouthShare);
    let elderly = series.get(SeriesKind::ElderlyShare);
    series
        .years()
        .enumerate()
        .map(|(i, year)| (year, youth[i] + elderly[i]))
        .filter(|(_, total)| *total > 1.0)
        .collect()
}

pub fn check_age_shares(series: &DemographicSeries, check: AgeShareCheck) -> Result<()> {
    if check == AgeShareCheck::Off {
        return Ok(());
    }
    for (year, total) in age_share_overflows(series) {
        match check {
            AgeShareCheck::Enforce => return Err(EngineError::AgeShareOverflow { year, total }),
            _ => tracing::warn!(year, total, "youth and elderly shares exceed one"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shares(youth: Vec<f64>, elderly: Vec<f64>) -> DemographicSeries {
        let years = YearIndex::new(2002, 2002 + youth.len() as i32 - 1).unwrap();
        let mut series = DemographicSeries::zeroed(years);
        series.set(SeriesKind::YouthShare, youth).unwrap();
        series.set(SeriesKind::ElderlyShare, elderly).unwrap();
        series
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("Independent".parse::<BalanceStrategy>().unwrap(), BalanceStrategy::Independent);
        assert_eq!("consistent".parse::<BalanceStrategy>().unwrap(), BalanceStrategy::Consistent);
        assert!(matches!("both".parse::<BalanceStrategy>(), Err(EngineError::UnknownStrategy(_))));
        assert_eq!("enforce".parse::<AgeShareCheck>().unwrap(), AgeShareCheck::Enforce);
        assert!(matches!("loud".parse::<AgeShareCheck>(), Err(EngineError::UnknownCheck(_))));
    }

    #[test]
    fn test_overflow_detection() {
        let series = shares(vec![0.5, 0.7, 0.3], vec![0.4, 0.4, 0.2]);
        let overflows = age_share_overflows(&series);
        assert_eq!(overflows.len(), 1);
        assert_eq!(overflows[0].0, 2003);
        assert!((overflows[0].1 - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_check_policies() {
        let series = shares(vec![0.7], vec![0.4]);
        assert!(check_age_shares(&series, AgeShareCheck::Off).is_ok());
        assert!(check_age_shares(&series, AgeShareCheck::Warn).is_ok());
        let err = check_age_shares(&series, AgeShareCheck::Enforce).unwrap_err();
        assert!(matches!(err, EngineError::AgeShareOverflow { year: 2002, .. }));
    }

    #[test]
    fn test_sum_of_exactly_one_is_accepted() {
        let series = shares(vec![0.5], vec![0.5]);
        assert!(check_age_shares(&series, AgeShareCheck::Enforce).is_ok());
    }
}
