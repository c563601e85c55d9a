// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Type Definitions

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{EngineError, Result};

// ─── Year Index ─────────────────────────────────────────────────────────────

/// Inclusive, ordered run of calendar years. Offset `i` always maps to
/// `start + i`; every series generated against an index has its length.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct YearIndex {
    start: i32,
    end: i32,
}

impl Default for YearIndex {
    fn default() -> Self {
        Self { start: 2002, end: 2025 }
    }
}

impl YearIndex {
    /// `end` must not precede `start`, and `end - start` must fit in `i32`.
    pub fn new(start: i32, end: i32) -> Result<Self> {
        match end.checked_sub(start) {
            Some(span) if span >= 0 => Ok(Self { start, end }),
            _ => Err(EngineError::InvalidHorizon { start, end }),
        }
    }

    /// Single-year window; offset 0 is `year`.
    pub fn single(year: i32) -> Self {
        Self { start: year, end: year }
    }

    pub fn start(&self) -> i32 { self.start }
    pub fn end(&self) -> i32 { self.end }

    pub fn len(&self) -> usize {
        (i64::from(self.end) - i64::from(self.start)) as usize + 1
    }

    /// Never true for a constructed index; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn year(&self, offset: usize) -> i32 {
        self.start + offset as i32
    }

    pub fn offset_of(&self, year: i32) -> Option<usize> {
        if year < self.start || year > self.end {
            None
        } else {
            Some((year - self.start) as usize)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }

    /// `(offset, year)` pairs in order.
    pub fn enumerate(&self) -> impl Iterator<Item = (usize, i32)> {
        self.iter().enumerate()
    }
}

// ─── Series Kind ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Population = 0,
    Births = 1,
    Deaths = 2,
    BirthRate = 3,
    DeathRate = 4,
    NaturalBalance = 5,
    Hdi = 6,
    LifeExpectancy = 7,
    MigrationBalance = 8,
    YouthShare = 9,
    ElderlyShare = 10,
    UnemploymentRate = 11,
    GdpPerCapita = 12,
}

impl SeriesKind {
    /// Export column order.
    pub const ALL: [SeriesKind; 13] = [
        Self::Population,
        Self::Births,
        Self::Deaths,
        Self::BirthRate,
        Self::DeathRate,
        Self::NaturalBalance,
        Self::Hdi,
        Self::LifeExpectancy,
        Self::MigrationBalance,
        Self::YouthShare,
        Self::ElderlyShare,
        Self::UnemploymentRate,
        Self::GdpPerCapita,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::Births => "births",
            Self::Deaths => "deaths",
            Self::BirthRate => "birth_rate",
            Self::DeathRate => "death_rate",
            Self::NaturalBalance => "natural_balance",
            Self::Hdi => "hdi",
            Self::LifeExpectancy => "life_expectancy",
            Self::MigrationBalance => "migration_balance",
            Self::YouthShare => "youth_share",
            Self::ElderlyShare => "elderly_share",
            Self::UnemploymentRate => "unemployment_rate",
            Self::GdpPerCapita => "gdp_per_capita",
        }
    }

    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.column() == name)
    }

    /// Standard deviation of the multiplicative noise draw. Zero means the
    /// series is deterministic (population) or derived (natural balance).
    pub fn noise_spread(&self) -> f64 {
        match self {
            Self::Population => 0.0,
            Self::Births => 0.07,
            Self::Deaths => 0.05,
            Self::BirthRate => 0.04,
            Self::DeathRate => 0.03,
            Self::NaturalBalance => 0.0,
            Self::Hdi => 0.01,
            Self::LifeExpectancy => 0.005,
            Self::MigrationBalance => 0.2,
            Self::YouthShare => 0.02,
            Self::ElderlyShare => 0.02,
            Self::UnemploymentRate => 0.05,
            Self::GdpPerCapita => 0.04,
        }
    }
}

// ─── Specialty ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    Tourism,
    Agriculture,
    Services,
    Banana,
    Rum,
    Space,
    Gold,
    Biodiversity,
    Forest,
    SugarCane,
    Digital,
    Fishing,
    Youth,
    Commerce,
    Beaches,
    Luxury,
    ColdClimate,
    Traditions,
    PearlFarming,
    Nickel,
}

impl Specialty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tourism => "tourism",
            Self::Agriculture => "agriculture",
            Self::Services => "services",
            Self::Banana => "banana",
            Self::Rum => "rum",
            Self::Space => "space",
            Self::Gold => "gold",
            Self::Biodiversity => "biodiversity",
            Self::Forest => "forest",
            Self::SugarCane => "sugar cane",
            Self::Digital => "digital",
            Self::Fishing => "fishing",
            Self::Youth => "youth",
            Self::Commerce => "commerce",
            Self::Beaches => "beaches",
            Self::Luxury => "luxury",
            Self::ColdClimate => "cold climate",
            Self::Traditions => "traditions",
            Self::PearlFarming => "pearl farming",
            Self::Nickel => "nickel",
        }
    }
}

// ─── Territory Config ───────────────────────────────────────────────────────

/// Base parameters of one territory. Rates are per 1000 inhabitants.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TerritoryConfig {
    pub population_base: f64,
    pub birth_rate_base: f64,
    pub death_rate_base: f64,
    pub hdi_base: f64,
    pub specialties: &'static [Specialty],
}

impl TerritoryConfig {
    pub fn births_base(&self) -> f64 {
        self.population_base * (self.birth_rate_base / 1000.0)
    }

    pub fn deaths_base(&self) -> f64 {
        self.population_base * (self.death_rate_base / 1000.0)
    }

    pub fn has_specialty(&self, specialty: Specialty) -> bool {
        self.specialties.contains(&specialty)
    }
}

// ─── Demographic Series ─────────────────────────────────────────────────────

/// Thirteen year-aligned columns. Every column has exactly `years.len()`
/// values; the constructors are the only way in, so the invariant holds.
#[derive(Debug, Clone, PartialEq)]
pub struct DemographicSeries {
    years: YearIndex,
    columns: [Vec<f64>; 13],
}

impl DemographicSeries {
    /// All columns zero-filled.
    pub fn zeroed(years: YearIndex) -> Self {
        let n = years.len();
        Self {
            years,
            columns: std::array::from_fn(|_| vec![0.0; n]),
        }
    }

    /// Assemble from externally produced columns, in `SeriesKind::ALL` order.
    pub fn from_columns(years: YearIndex, columns: [Vec<f64>; 13]) -> Result<Self> {
        for (kind, column) in SeriesKind::ALL.iter().zip(columns.iter()) {
            if column.len() != years.len() {
                return Err(EngineError::LengthMismatch {
                    column: kind.column(),
                    expected: years.len(),
                    actual: column.len(),
                });
            }
        }
        Ok(Self { years, columns })
    }

    pub fn years(&self) -> &YearIndex {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn get(&self, kind: SeriesKind) -> &[f64] {
        &self.columns[kind.index()]
    }

    pub fn value(&self, kind: SeriesKind, offset: usize) -> f64 {
        self.columns[kind.index()][offset]
    }

    /// Replace a column. Lengths must match the horizon.
    pub fn set(&mut self, kind: SeriesKind, values: Vec<f64>) -> Result<()> {
        if values.len() != self.years.len() {
            return Err(EngineError::LengthMismatch {
                column: kind.column(),
                expected: self.years.len(),
                actual: values.len(),
            });
        }
        self.columns[kind.index()] = values;
        Ok(())
    }

    /// In-place access to one cell; the column length is fixed.
    pub fn cell_mut(&mut self, kind: SeriesKind, offset: usize) -> &mut f64 {
        &mut self.columns[kind.index()][offset]
    }

    pub fn row(&self, offset: usize) -> YearRow {
        let v = |k: SeriesKind| self.value(k, offset);
        YearRow {
            year: self.years.year(offset),
            population: v(SeriesKind::Population),
            births: v(SeriesKind::Births),
            deaths: v(SeriesKind::Deaths),
            birth_rate: v(SeriesKind::BirthRate),
            death_rate: v(SeriesKind::DeathRate),
            natural_balance: v(SeriesKind::NaturalBalance),
            hdi: v(SeriesKind::Hdi),
            life_expectancy: v(SeriesKind::LifeExpectancy),
            migration_balance: v(SeriesKind::MigrationBalance),
            youth_share: v(SeriesKind::YouthShare),
            elderly_share: v(SeriesKind::ElderlyShare),
            unemployment_rate: v(SeriesKind::UnemploymentRate),
            gdp_per_capita: v(SeriesKind::GdpPerCapita),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = YearRow> + '_ {
        (0..self.len()).map(move |i| self.row(i))
    }
}

impl Serialize for DemographicSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SeriesKind::ALL.len() + 1))?;
        let years: Vec<i32> = self.years.iter().collect();
        map.serialize_entry("year", &years)?;
        for kind in SeriesKind::ALL {
            map.serialize_entry(kind.column(), self.get(kind))?;
        }
        map.end()
    }
}

// ─── Year Row ───────────────────────────────────────────────────────────────

/// One exported line: the year and its thirteen values, in column order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct YearRow {
    pub year: i32,
    pub population: f64,
    pub births: f64,
    pub deaths: f64,
    pub birth_rate: f64,
    pub death_rate: f64,
    pub natural_balance: f64,
    pub hdi: f64,
    pub life_expectancy: f64,
    pub migration_balance: f64,
    pub youth_share: f64,
    pub elderly_share: f64,
    pub unemployment_rate: f64,
    pub gdp_per_capita: f64,
}
