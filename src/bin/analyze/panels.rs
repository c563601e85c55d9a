// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Chart Panels
// Plot-ready data for an external renderer; nothing here draws.

use dromcom_engine::{DemographicSeries, SeriesKind, TerritoryRun};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Line,
    StackedBar,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    pub label: &'static str,
    pub axis: Axis,
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceLine {
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartPanel {
    pub title: &'static str,
    pub kind: PanelKind,
    pub y_label: &'static str,
    pub secondary_y_label: Option<&'static str>,
    pub y_range: Option<(f64, f64)>,
    pub traces: Vec<Trace>,
    pub reference_lines: Vec<ReferenceLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelSet {
    pub title: String,
    pub panels: Vec<ChartPanel>,
}

// ─── Builders ───────────────────────────────────────────────────────────────

fn line(title: &'static str, y_label: &'static str, traces: Vec<Trace>) -> ChartPanel {
    ChartPanel {
        title,
        kind: PanelKind::Line,
        y_label,
        secondary_y_label: None,
        y_range: None,
        traces,
        reference_lines: Vec::new(),
    }
}

fn stacked(title: &'static str, y_label: &'static str, traces: Vec<Trace>) -> ChartPanel {
    ChartPanel { kind: PanelKind::StackedBar, ..line(title, y_label, traces) }
}

struct Columns<'a> {
    series: &'a DemographicSeries,
    years: Vec<i32>,
}

impl<'a> Columns<'a> {
    fn trace(&self, label: &'static str, values: Vec<f64>) -> Trace {
        Trace { label, axis: Axis::Primary, years: self.years.clone(), values }
    }

    fn raw(&self, label: &'static str, kind: SeriesKind) -> Trace {
        self.trace(label, self.series.get(kind).to_vec())
    }

    fn scaled(&self, label: &'static str, kind: SeriesKind, factor: f64) -> Trace {
        self.trace(label, self.series.get(kind).iter().map(|v| v * factor).collect())
    }

    fn youth(&self) -> &'a [f64] {
        self.series.get(SeriesKind::YouthShare)
    }

    fn elderly(&self) -> &'a [f64] {
        self.series.get(SeriesKind::ElderlyShare)
    }

    fn population(&self) -> &'a [f64] {
        self.series.get(SeriesKind::Population)
    }
}

fn secondary(mut trace: Trace) -> Trace {
    trace.axis = Axis::Secondary;
    trace
}

/// Year-over-year population change in percent. The first year has no
/// predecessor and is left out.
pub fn growth_trace(series: &DemographicSeries) -> Trace {
    let population = series.get(SeriesKind::Population);
    let years: Vec<i32> = series.years().iter().skip(1).collect();
    let values = population.windows(2).map(|w| (w[1] / w[0] - 1.0) * 100.0).collect();
    Trace { label: "Growth rate (%)", axis: Axis::Secondary, years, values }
}

pub fn build_panels(run: &TerritoryRun) -> PanelSet {
    let series = &run.series;
    let cols = Columns { series, years: series.years().iter().collect() };

    let working_pct: Vec<f64> = cols
        .youth()
        .iter()
        .zip(cols.elderly())
        .map(|(y, e)| 100.0 - (y * 100.0 + e * 100.0))
        .collect();

    let mut population = line("Population", "Population", vec![
        cols.raw("Population", SeriesKind::Population),
        growth_trace(series),
    ]);
    population.secondary_y_label = Some("Growth rate (%)");

    let rates = line("Birth and death rates (per 1000 inhabitants)", "Rate (per 1000)", vec![
        cols.raw("Birth rate", SeriesKind::BirthRate),
        cols.raw("Death rate", SeriesKind::DeathRate),
    ]);

    let ages = line("Population by age group", "Share of population (%)", vec![
        cols.scaled("Under 20 (%)", SeriesKind::YouthShare, 100.0),
        cols.scaled("Over 60 (%)", SeriesKind::ElderlyShare, 100.0),
        cols.trace("20 to 60 (%)", working_pct),
    ]);

    let mut hdi = line("Human Development Index (HDI)", "HDI", vec![cols.raw("HDI", SeriesKind::Hdi)]);
    hdi.y_range = Some((0.6, 1.0));
    hdi.reference_lines = vec![
        ReferenceLine { label: "High development", value: 0.8 },
        ReferenceLine { label: "Medium development", value: 0.7 },
    ];

    let balances = stacked("Natural and migration balance", "People", vec![
        cols.raw("Natural balance", SeriesKind::NaturalBalance),
        cols.raw("Migration balance", SeriesKind::MigrationBalance),
    ]);

    let life = line("Life expectancy", "Years", vec![
        cols.raw("Life expectancy", SeriesKind::LifeExpectancy),
    ]);

    let mut economy = line("Economic indicators", "GDP per capita (k€)", vec![
        cols.raw("GDP per capita (k€)", SeriesKind::GdpPerCapita),
        secondary(cols.scaled("Unemployment rate (%)", SeriesKind::UnemploymentRate, 100.0)),
    ]);
    economy.secondary_y_label = Some("Unemployment rate (%)");

    let heads = |share: &dyn Fn(usize) -> f64| -> Vec<f64> {
        cols.population().iter().enumerate().map(|(i, p)| share(i) * p).collect()
    };
    let (youth, elderly) = (cols.youth(), cols.elderly());
    let projection = stacked("Population projection by age group", "Population", vec![
        cols.trace("Under 20", heads(&|i: usize| youth[i])),
        cols.trace("20 to 60", heads(&|i: usize| 1.0 - (youth[i] + elderly[i]))),
        cols.trace("Over 60", heads(&|i: usize| elderly[i])),
    ]);

    let years = series.years();
    PanelSet {
        title: format!(
            "Demographic analysis of {} - DROM-COM ({}-{})",
            run.territory,
            years.start(),
            years.end()
        ),
        panels: vec![population, rates, ages, hdi, balances, life, economy, projection],
    }
}
