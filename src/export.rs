// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Export

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::types::{DemographicSeries, SeriesKind, YearIndex};

/// Column order of every tabular export.
pub const CSV_HEADER: [&str; 14] = [
    "year",
    "population",
    "births",
    "deaths",
    "birth_rate",
    "death_rate",
    "natural_balance",
    "hdi",
    "life_expectancy",
    "migration_balance",
    "youth_share",
    "elderly_share",
    "unemployment_rate",
    "gdp_per_capita",
];

/// Territory name as a single path component: separators become `_`.
pub fn file_stem(territory: &str) -> String {
    territory.replace(['/', '\\'], "_")
}

pub fn csv_file_name(territory: &str, years: &YearIndex) -> String {
    format!("{}_demographic_data_{}_{}.csv", file_stem(territory), years.start(), years.end())
}

pub fn panels_file_name(territory: &str) -> String {
    format!("{}_demographic_panels.json", file_stem(territory))
}

pub fn summary_file_name(territory: &str) -> String {
    format!("{}_summary.json", file_stem(territory))
}

/// One header line, then one line per year. Values use `f64`'s shortest
/// round-trip display, so nothing is lost.
pub fn write_csv<W: Write>(series: &DemographicSeries, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", CSV_HEADER.join(","))?;
    for (i, year) in series.years().enumerate() {
        write!(writer, "{}", year)?;
        for kind in SeriesKind::ALL {
            write!(writer, ",{}", series.value(kind, i))?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

pub fn to_csv_string(series: &DemographicSeries) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(series, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// One JSON object per year.
pub fn write_jsonl(series: &DemographicSeries, path: &Path) -> Result<()> {
    let mut file = create(path)?;
    for row in series.rows() {
        let line = serde_json::to_string(&row)?;
        writeln!(file, "{}", line)?;
    }
    file.flush()?;
    Ok(())
}

/// Pretty-printed JSON document.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let mut file = create(path)?;
    serde_json::to_writer_pretty(&mut file, value)?;
    writeln!(file)?;
    file.flush()?;
    Ok(())
}

pub fn save_csv(series: &DemographicSeries, path: &Path) -> Result<()> {
    let mut file = create(path)?;
    write_csv(series, &mut file)?;
    file.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}
