// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Territory Registry

//! Static territory table: base parameters plus the per-variable trend
//! coefficients every generator reads. Lookup is an exact, case-sensitive
//! name match; anything else resolves to [`DEFAULT_PROFILE`].

use serde::Serialize;

use crate::types::{Specialty, TerritoryConfig};

// ---------------------------------------------------------------------------
// Trend coefficients
// ---------------------------------------------------------------------------

/// `base * (1 + slope * i)` for zero-based year offset `i`.
///
/// Slopes are signed: a declining series has a negative slope. Nothing bounds
/// the product, so long enough horizons take declining series below zero.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LinearTrend {
    pub base: f64,
    pub slope: f64,
}

impl LinearTrend {
    pub const fn new(base: f64, slope: f64) -> Self {
        Self { base, slope }
    }

    pub fn factor(&self, offset: usize) -> f64 {
        1.0 + self.slope * offset as f64
    }

    pub fn at(&self, offset: usize) -> f64 {
        self.base * self.factor(offset)
    }
}

/// Per-variable trend coefficients of one territory.
///
/// Variables whose base comes from [`TerritoryConfig`] only carry a slope;
/// the others carry their own territory-specific base.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TrendTable {
    pub population_growth: f64,
    pub births_slope: f64,
    pub deaths_slope: f64,
    pub birth_rate_slope: f64,
    pub death_rate_slope: f64,
    pub hdi_slope: f64,
    pub life_expectancy: LinearTrend,
    pub migration_balance: LinearTrend,
    pub youth_share: LinearTrend,
    pub elderly_share: LinearTrend,
    pub unemployment_rate: LinearTrend,
    /// Thousands of euros per inhabitant.
    pub gdp_per_capita: LinearTrend,
}

/// Coefficients shared by every territory without a dedicated branch.
pub const STANDARD_TRENDS: TrendTable = TrendTable {
    population_growth: 0.012,
    births_slope: -0.004,
    deaths_slope: 0.006,
    birth_rate_slope: -0.008,
    death_rate_slope: 0.005,
    hdi_slope: 0.006,
    life_expectancy: LinearTrend::new(77.0, 0.002),
    migration_balance: LinearTrend::new(800.0, -0.015),
    youth_share: LinearTrend::new(0.32, -0.009),
    elderly_share: LinearTrend::new(0.18, 0.011),
    unemployment_rate: LinearTrend::new(0.12, -0.003),
    gdp_per_capita: LinearTrend::new(18.0, 0.015),
};

// Martinique and Guadeloupe: ageing Antilles.
const ANTILLES_TRENDS: TrendTable = TrendTable {
    deaths_slope: 0.008,
    death_rate_slope: 0.006,
    life_expectancy: LinearTrend::new(78.5, 0.002),
    youth_share: LinearTrend::new(0.28, -0.010),
    elderly_share: LinearTrend::new(0.25, 0.012),
    unemployment_rate: LinearTrend::new(0.18, -0.004),
    gdp_per_capita: LinearTrend::new(22.0, 0.012),
    ..STANDARD_TRENDS
};

// Saint-Martin and Saint-Barthélemy: small tourist islands.
const SMALL_ISLAND_TRENDS: TrendTable = TrendTable {
    population_growth: 0.018,
    births_slope: -0.005,
    birth_rate_slope: -0.012,
    life_expectancy: LinearTrend::new(79.2, 0.002),
    migration_balance: LinearTrend::new(500.0, -0.01),
    ..STANDARD_TRENDS
};

const GUYANE_TRENDS: TrendTable = TrendTable {
    population_growth: 0.028,
    births_slope: -0.002,
    deaths_slope: 0.004,
    birth_rate_slope: -0.010,
    death_rate_slope: 0.003,
    hdi_slope: 0.008,
    life_expectancy: LinearTrend::new(76.3, 0.002),
    migration_balance: LinearTrend::new(2000.0, -0.02),
    youth_share: LinearTrend::new(0.45, -0.008),
    elderly_share: LinearTrend::new(0.08, 0.010),
    unemployment_rate: LinearTrend::new(0.22, -0.005),
    gdp_per_capita: LinearTrend::new(15.5, 0.022),
};

const MAYOTTE_TRENDS: TrendTable = TrendTable {
    population_growth: 0.035,
    births_slope: -0.003,
    birth_rate_slope: -0.015,
    life_expectancy: LinearTrend::new(75.8, 0.002),
    youth_share: LinearTrend::new(0.55, -0.008),
    gdp_per_capita: LinearTrend::new(8.5, 0.022),
    ..GUYANE_TRENDS
};

const SAINT_PIERRE_TRENDS: TrendTable = TrendTable {
    population_growth: -0.003,
    deaths_slope: 0.010,
    death_rate_slope: 0.008,
    life_expectancy: LinearTrend::new(77.6, 0.002),
    migration_balance: LinearTrend::new(-100.0, -0.005),
    youth_share: LinearTrend::new(0.22, -0.009),
    elderly_share: LinearTrend::new(0.28, 0.015),
    ..STANDARD_TRENDS
};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Coarse demographic profile, used by reporting only. Trends stay per
/// territory because territories group differently for each variable.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HighGrowth,
    Ageing,
    SmallIsland,
    Declining,
    Standard,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighGrowth => "high_growth",
            Self::Ageing => "ageing",
            Self::SmallIsland => "small_island",
            Self::Declining => "declining",
            Self::Standard => "standard",
        }
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TerritoryProfile {
    pub name: &'static str,
    pub category: Category,
    pub config: TerritoryConfig,
    pub trends: TrendTable,
}

/// Name reported for the fallback profile. Never matched by lookup.
pub const DEFAULT_NAME: &str = "default";

pub static DEFAULT_PROFILE: TerritoryProfile = TerritoryProfile {
    name: DEFAULT_NAME,
    category: Category::Standard,
    config: TerritoryConfig {
        population_base: 100_000.0,
        birth_rate_base: 12.0,
        death_rate_base: 7.0,
        hdi_base: 0.75,
        specialties: &[Specialty::Services, Specialty::Tourism],
    },
    trends: STANDARD_TRENDS,
};

const fn config(
    population_base: f64,
    birth_rate_base: f64,
    death_rate_base: f64,
    hdi_base: f64,
    specialties: &'static [Specialty],
) -> TerritoryConfig {
    TerritoryConfig { population_base, birth_rate_base, death_rate_base, hdi_base, specialties }
}

/// Known territories, in menu order.
pub static TERRITORIES: [TerritoryProfile; 11] = [
    TerritoryProfile {
        name: "Guadeloupe",
        category: Category::Ageing,
        config: config(390_000.0, 12.5, 7.2, 0.82,
            &[Specialty::Tourism, Specialty::Agriculture, Specialty::Services]),
        trends: ANTILLES_TRENDS,
    },
    TerritoryProfile {
        name: "Martinique",
        category: Category::Ageing,
        config: config(375_000.0, 11.8, 7.5, 0.84,
            &[Specialty::Tourism, Specialty::Banana, Specialty::Rum, Specialty::Services]),
        trends: TrendTable { hdi_slope: 0.004, ..ANTILLES_TRENDS },
    },
    TerritoryProfile {
        name: "Guyane",
        category: Category::HighGrowth,
        config: config(290_000.0, 25.4, 4.8, 0.76,
            &[Specialty::Space, Specialty::Gold, Specialty::Biodiversity, Specialty::Forest]),
        trends: GUYANE_TRENDS,
    },
    TerritoryProfile {
        name: "La Réunion",
        category: Category::Standard,
        config: config(860_000.0, 15.2, 6.3, 0.80,
            &[Specialty::Tourism, Specialty::SugarCane, Specialty::Services, Specialty::Digital]),
        trends: TrendTable {
            life_expectancy: LinearTrend::new(78.5, 0.002),
            ..STANDARD_TRENDS
        },
    },
    TerritoryProfile {
        name: "Mayotte",
        category: Category::HighGrowth,
        config: config(280_000.0, 35.7, 4.2, 0.69,
            &[Specialty::Agriculture, Specialty::Fishing, Specialty::Youth]),
        trends: MAYOTTE_TRENDS,
    },
    TerritoryProfile {
        name: "Saint-Martin",
        category: Category::SmallIsland,
        config: config(35_000.0, 14.3, 5.8, 0.78,
            &[Specialty::Tourism, Specialty::Commerce, Specialty::Beaches]),
        trends: SMALL_ISLAND_TRENDS,
    },
    TerritoryProfile {
        name: "Saint-Barthélemy",
        category: Category::SmallIsland,
        config: config(9_800.0, 9.8, 6.2, 0.88,
            &[Specialty::Luxury, Specialty::Tourism, Specialty::Beaches]),
        trends: TrendTable {
            hdi_slope: 0.004,
            unemployment_rate: LinearTrend::new(0.08, -0.003),
            gdp_per_capita: LinearTrend::new(35.0, 0.015),
            ..SMALL_ISLAND_TRENDS
        },
    },
    TerritoryProfile {
        name: "Saint-Pierre-et-Miquelon",
        category: Category::Declining,
        config: config(6_000.0, 8.5, 9.1, 0.83,
            &[Specialty::Fishing, Specialty::Tourism, Specialty::ColdClimate]),
        trends: SAINT_PIERRE_TRENDS,
    },
    TerritoryProfile {
        name: "Wallis-et-Futuna",
        category: Category::Standard,
        config: config(11_500.0, 16.2, 5.4, 0.79,
            &[Specialty::Traditions, Specialty::Fishing, Specialty::Agriculture]),
        trends: STANDARD_TRENDS,
    },
    TerritoryProfile {
        name: "Polynésie française",
        category: Category::Standard,
        config: config(280_000.0, 14.8, 5.6, 0.81,
            &[Specialty::Tourism, Specialty::PearlFarming, Specialty::Fishing]),
        trends: STANDARD_TRENDS,
    },
    TerritoryProfile {
        name: "Nouvelle-Calédonie",
        category: Category::Standard,
        config: config(270_000.0, 15.3, 5.9, 0.83,
            &[Specialty::Nickel, Specialty::Tourism, Specialty::Biodiversity]),
        trends: TrendTable {
            gdp_per_capita: LinearTrend::new(28.5, 0.018),
            ..STANDARD_TRENDS
        },
    },
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Profile for `name`, or the default profile when nothing matches.
pub fn profile(name: &str) -> &'static TerritoryProfile {
    match TERRITORIES.iter().find(|p| p.name == name) {
        Some(p) => p,
        None => {
            tracing::debug!(territory = name, "unknown territory, using default profile");
            &DEFAULT_PROFILE
        }
    }
}

/// Base parameters for `name`. Unknown names are not an error.
pub fn lookup(name: &str) -> TerritoryConfig {
    profile(name).config
}

pub fn is_known(name: &str) -> bool {
    TERRITORIES.iter().any(|p| p.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    TERRITORIES.iter().map(|p| p.name)
}
