// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Errors

/// Errors surfaced by the synthesis engine and its export layer.
///
/// Generators themselves are total; only horizon construction, column
/// assembly, the enforced age-share check, config parsing and I/O fail.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid horizon {start}..={end}: end precedes start or the span overflows")]
    InvalidHorizon { start: i32, end: i32 },

    #[error("column {column} has {actual} values, horizon has {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("age shares exceed one in {year}: youth + elderly = {total:.4}")]
    AgeShareOverflow { year: i32, total: f64 },

    #[error("unknown natural balance strategy: {0}")]
    UnknownStrategy(String),

    #[error("unknown age-share check: {0}")]
    UnknownCheck(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
