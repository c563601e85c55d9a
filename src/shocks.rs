// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Shock Table

//! Declarative table of historical shocks. Each rule names its years, its
//! territories and one multiplier per affected series.

use serde::Serialize;

use crate::types::SeriesKind;

// ─── Rule Parts ─────────────────────────────────────────────────────────────

/// Where a rule is applied.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Folded into the generator's seasonal multiplier, before noise.
    Cycle,
    /// Applied in place by the consistency pass, after generation.
    Event,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    All,
    Territory(&'static str),
}

impl Scope {
    pub fn covers(&self, territory: &str) -> bool {
        match self {
            Self::All => true,
            Self::Territory(name) => *name == territory,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum YearSpan {
    /// Inclusive range.
    Between(i32, i32),
    /// This year and every later one.
    From(i32),
    Only(&'static [i32]),
}

impl YearSpan {
    pub fn contains(&self, year: i32) -> bool {
        match self {
            Self::Between(start, end) => (*start..=*end).contains(&year),
            Self::From(start) => year >= *start,
            Self::Only(years) => years.contains(&year),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ShockRule {
    pub label: &'static str,
    pub stage: Stage,
    pub scope: Scope,
    pub years: YearSpan,
    pub effects: &'static [(SeriesKind, f64)],
}

impl ShockRule {
    pub fn applies(&self, stage: Stage, territory: &str, year: i32) -> bool {
        self.stage == stage && self.scope.covers(territory) && self.years.contains(year)
    }

    pub fn multiplier_for(&self, kind: SeriesKind) -> Option<f64> {
        self.effects.iter().find(|(k, _)| *k == kind).map(|(_, m)| *m)
    }
}

// ─── Standard Rules ─────────────────────────────────────────────────────────

pub const STANDARD_RULES: [ShockRule; 8] = [
    ShockRule {
        label: "economic downturn",
        stage: Stage::Cycle,
        scope: Scope::All,
        years: YearSpan::Only(&[2008, 2009, 2020, 2021]),
        effects: &[(SeriesKind::UnemploymentRate, 1.15), (SeriesKind::GdpPerCapita, 0.95)],
    },
    ShockRule {
        label: "favourable period",
        stage: Stage::Cycle,
        scope: Scope::All,
        years: YearSpan::Only(&[2006, 2012, 2017, 2023]),
        effects: &[(SeriesKind::UnemploymentRate, 0.92), (SeriesKind::GdpPerCapita, 1.06)],
    },
    ShockRule {
        label: "global financial crisis",
        stage: Stage::Event,
        scope: Scope::All,
        years: YearSpan::Between(2008, 2009),
        effects: &[(SeriesKind::UnemploymentRate, 1.12), (SeriesKind::GdpPerCapita, 0.96)],
    },
    ShockRule {
        label: "COVID-19 pandemic",
        stage: Stage::Event,
        scope: Scope::All,
        years: YearSpan::Between(2020, 2021),
        effects: &[
            (SeriesKind::DeathRate, 1.08),
            (SeriesKind::GdpPerCapita, 0.92),
            (SeriesKind::UnemploymentRate, 1.15),
        ],
    },
    ShockRule {
        label: "Mayotte departmentalization",
        stage: Stage::Event,
        scope: Scope::Territory("Mayotte"),
        years: YearSpan::From(2011),
        effects: &[(SeriesKind::Hdi, 1.01), (SeriesKind::GdpPerCapita, 1.02)],
    },
    ShockRule {
        label: "Guyane social movements",
        stage: Stage::Event,
        scope: Scope::Territory("Guyane"),
        years: YearSpan::Only(&[2017, 2018]),
        effects: &[(SeriesKind::GdpPerCapita, 0.97), (SeriesKind::UnemploymentRate, 1.08)],
    },
    ShockRule {
        label: "New Caledonia referendums",
        stage: Stage::Event,
        scope: Scope::Territory("Nouvelle-Calédonie"),
        years: YearSpan::Only(&[2018, 2020, 2021]),
        effects: &[(SeriesKind::MigrationBalance, 0.8), (SeriesKind::GdpPerCapita, 0.98)],
    },
    ShockRule {
        label: "Réunion digital development",
        stage: Stage::Event,
        scope: Scope::Territory("La Réunion"),
        years: YearSpan::From(2010),
        effects: &[(SeriesKind::Hdi, 1.005), (SeriesKind::GdpPerCapita, 1.01)],
    },
];

// ─── Shock Table ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShockTable {
    rules: Vec<ShockRule>,
}

impl Default for ShockTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ShockTable {
    pub fn standard() -> Self {
        Self { rules: STANDARD_RULES.to_vec() }
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn push(&mut self, rule: ShockRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[ShockRule] {
        &self.rules
    }

    /// Product of every matching rule's multiplier for `kind`; 1.0 if none.
    pub fn multiplier(&self, stage: Stage, territory: &str, kind: SeriesKind, year: i32) -> f64 {
        self.rules
            .iter()
            .filter(|r| r.applies(stage, territory, year))
            .filter_map(|r| r.multiplier_for(kind))
            .product()
    }

    /// Rules active for one territory and year, in table order.
    pub fn active<'a>(
        &'a self,
        stage: Stage,
        territory: &'a str,
        year: i32,
    ) -> impl Iterator<Item = &'a ShockRule> + 'a {
        self.rules.iter().filter(move |r| r.applies(stage, territory, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_quiet_year_is_neutral() {
        let table = ShockTable::standard();
        for kind in SeriesKind::ALL {
            assert_eq!(table.multiplier(Stage::Cycle, "Martinique", kind, 2004), 1.0);
            assert_eq!(table.multiplier(Stage::Event, "Martinique", kind, 2004), 1.0);
        }
    }

    #[test]
    fn test_cycle_multipliers() {
        let table = ShockTable::standard();
        let u = SeriesKind::UnemploymentRate;
        let g = SeriesKind::GdpPerCapita;
        assert_eq!(table.multiplier(Stage::Cycle, "x", u, 2009), 1.15);
        assert_eq!(table.multiplier(Stage::Cycle, "x", g, 2020), 0.95);
        assert_eq!(table.multiplier(Stage::Cycle, "x", u, 2017), 0.92);
        assert_eq!(table.multiplier(Stage::Cycle, "x", g, 2023), 1.06);
        assert_eq!(table.multiplier(Stage::Cycle, "x", SeriesKind::DeathRate, 2020), 1.0);
    }

    #[test]
    fn test_event_multipliers_compose() {
        let table = ShockTable::standard();
        // New Caledonia's 2020 GDP takes both the pandemic and the referendum hit
        let nc = table.multiplier(Stage::Event, "Nouvelle-Calédonie", SeriesKind::GdpPerCapita, 2020);
        assert!((nc - 0.92 * 0.98).abs() < EPS, "got {}", nc);

        let mayotte = table.multiplier(Stage::Event, "Mayotte", SeriesKind::GdpPerCapita, 2021);
        assert!((mayotte - 0.92 * 1.02).abs() < EPS, "got {}", mayotte);

        let guyane = table.multiplier(Stage::Event, "Guyane", SeriesKind::UnemploymentRate, 2017);
        assert!((guyane - 1.08).abs() < EPS);
    }

    #[test]
    fn test_territory_scope_is_exact() {
        let table = ShockTable::standard();
        assert_eq!(table.multiplier(Stage::Event, "Mayotte", SeriesKind::Hdi, 2010), 1.0);
        assert_eq!(table.multiplier(Stage::Event, "Mayotte", SeriesKind::Hdi, 2011), 1.01);
        assert_eq!(table.multiplier(Stage::Event, "mayotte", SeriesKind::Hdi, 2011), 1.0);
    }

    #[test]
    fn test_pushed_rule_is_additive() {
        let mut table = ShockTable::empty();
        table.push(ShockRule {
            label: "cyclone",
            stage: Stage::Event,
            scope: Scope::Territory("La Réunion"),
            years: YearSpan::Only(&[2007]),
            effects: &[(SeriesKind::GdpPerCapita, 0.9)],
        });
        assert_eq!(table.multiplier(Stage::Event, "La Réunion", SeriesKind::GdpPerCapita, 2007), 0.9);
        assert_eq!(table.active(Stage::Event, "La Réunion", 2007).count(), 1);
        assert_eq!(table.active(Stage::Event, "La Réunion", 2008).count(), 0);
    }
}
