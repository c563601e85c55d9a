// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Insights Report

use std::fmt;

use dromcom_engine::registry::Category;
use dromcom_engine::{Specialty, SummaryStatistics, TerritoryRun};
use serde::Serialize;

// ─── Landmark Events ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Landmark {
    pub period: &'static str,
    pub label: &'static str,
}

/// Printed for every territory, whatever its shocks.
pub const LANDMARKS: [Landmark; 5] = [
    Landmark { period: "2008-2009", label: "Global financial crisis" },
    Landmark { period: "2011", label: "Departmentalization of Mayotte" },
    Landmark { period: "2017", label: "Social movements in Guyane" },
    Landmark { period: "2018-2021", label: "Referendums in Nouvelle-Calédonie" },
    Landmark { period: "2020-2021", label: "COVID-19 pandemic" },
];

// ─── Recommendations ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Youth share above 40%.
    YoungPopulation,
    /// Elderly share above 25%.
    AgeingPopulation,
    /// Unemployment above 15%.
    HighUnemployment,
    HighGrowthTerritory,
    TourismEconomy,
}

impl Trigger {
    pub fn actions(&self) -> [&'static str; 3] {
        match self {
            Self::YoungPopulation => [
                "Invest heavily in education and training",
                "Develop employment policies for young people",
                "Build infrastructure suited to a young population",
            ],
            Self::AgeingPopulation => [
                "Adapt the health system to an ageing population",
                "Develop services for the elderly",
                "Support ageing at home",
            ],
            Self::HighUnemployment => [
                "Develop vocational training programmes",
                "Support business creation and entrepreneurship",
                "Diversify the economy to create jobs",
            ],
            Self::HighGrowthTerritory => [
                "Improve access to basic services",
                "Develop transport infrastructure",
                "Tackle informal housing",
            ],
            Self::TourismEconomy => [
                "Develop sustainable and responsible tourism",
                "Promote cultural and natural heritage",
                "Train tourism professionals",
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub trigger: Trigger,
    pub actions: [&'static str; 3],
}

// ─── Insights ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub territory: String,
    pub start_year: i32,
    pub end_year: i32,
    pub summary: SummaryStatistics,
    pub population_growth_pct: f64,
    pub youth_share_pct: f64,
    pub working_age_share_pct: f64,
    pub elderly_share_pct: f64,
    pub unemployment_pct: f64,
    pub specialties: Vec<&'static str>,
    pub landmarks: &'static [Landmark],
    pub recommendations: Vec<Recommendation>,
}

impl Insights {
    pub fn from_run(run: &TerritoryRun) -> Self {
        let summary = run.summary();
        let years = run.series.years();
        Self {
            territory: run.territory.clone(),
            start_year: years.start(),
            end_year: years.end(),
            summary,
            population_growth_pct: summary.population_growth_pct(),
            youth_share_pct: summary.youth_share_pct(),
            working_age_share_pct: summary.working_age_share_pct(),
            elderly_share_pct: summary.elderly_share_pct(),
            unemployment_pct: summary.unemployment_pct(),
            specialties: run.config.specialties.iter().map(Specialty::label).collect(),
            landmarks: &LANDMARKS,
            recommendations: recommend(
                &summary,
                run.profile().category,
                run.config.has_specialty(Specialty::Tourism),
            ),
        }
    }
}

/// Triggers fire independently, in a fixed order.
pub fn recommend(summary: &SummaryStatistics, category: Category, tourism: bool) -> Vec<Recommendation> {
    let fired = [
        (summary.youth_share_pct() > 40.0, Trigger::YoungPopulation),
        (summary.elderly_share_pct() > 25.0, Trigger::AgeingPopulation),
        (summary.unemployment_pct() > 15.0, Trigger::HighUnemployment),
        (category == Category::HighGrowth, Trigger::HighGrowthTerritory),
        (tourism, Trigger::TourismEconomy),
    ];
    fired
        .into_iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, trigger)| Recommendation { trigger, actions: trigger.actions() })
        .collect()
}

impl fmt::Display for Insights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.summary;
        writeln!(f, "DEMOGRAPHIC INSIGHTS - {} (DROM-COM)", self.territory)?;
        writeln!(f, "{}", "=".repeat(60))?;

        writeln!(f, "\n1. GENERAL STATISTICS")?;
        writeln!(f, "Mean population: {:.0} inhabitants", s.mean_population)?;
        writeln!(f, "Mean birth rate: {:.1} per 1000", s.mean_birth_rate)?;
        writeln!(f, "Mean death rate: {:.1} per 1000", s.mean_death_rate)?;
        writeln!(f, "Mean HDI: {:.3}", s.mean_hdi)?;

        writeln!(f, "\n2. DEMOGRAPHIC EVOLUTION")?;
        writeln!(
            f,
            "Population growth ({}-{}): {:.1}%",
            self.start_year, self.end_year, self.population_growth_pct
        )?;
        writeln!(f, "Mean natural balance: {:.0} people/year", s.mean_natural_balance)?;
        writeln!(f, "Mean migration balance: {:.0} people/year", s.mean_migration_balance)?;

        writeln!(f, "\n3. AGE STRUCTURE")?;
        writeln!(f, "Under 20: {:.1}%", self.youth_share_pct)?;
        writeln!(f, "20 to 60: {:.1}%", self.working_age_share_pct)?;
        writeln!(f, "Over 60: {:.1}%", self.elderly_share_pct)?;

        writeln!(f, "\n4. DEVELOPMENT INDICATORS")?;
        writeln!(f, "Mean life expectancy: {:.1} years", s.mean_life_expectancy)?;
        writeln!(f, "Mean unemployment rate: {:.1}%", self.unemployment_pct)?;
        writeln!(f, "Mean GDP per capita: {:.1} k€", s.mean_gdp_per_capita)?;

        writeln!(f, "\n5. SPECIALTIES OF {}", self.territory.to_uppercase())?;
        writeln!(f, "Specialties: {}", self.specialties.join(", "))?;

        writeln!(f, "\n6. LANDMARK EVENTS")?;
        for event in self.landmarks {
            writeln!(f, "- {}: {}", event.period, event.label)?;
        }

        writeln!(f, "\n7. STRATEGIC RECOMMENDATIONS")?;
        for rec in &self.recommendations {
            for action in rec.actions {
                writeln!(f, "- {}", action)?;
            }
        }
        Ok(())
    }
}
