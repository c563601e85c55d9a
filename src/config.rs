// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite - Engine Configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consistency::{AgeShareCheck, BalanceStrategy};
use crate::error::Result;
use crate::types::YearIndex;

/// Run settings, loadable from TOML. Every field has a default, so an empty
/// file is a valid config.
///
/// ```toml
/// start_year = 2002
/// end_year = 2025
/// seed = 42
/// balance = "independent"
/// age_share_check = "enforce"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub start_year: i32,
    pub end_year: i32,
    /// Base seed for the noise source. `None` lets the caller pick one.
    pub seed: Option<u64>,
    pub balance: BalanceStrategy,
    pub age_share_check: AgeShareCheck,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_year: 2002,
            end_year: 2025,
            seed: None,
            balance: BalanceStrategy::default(),
            age_share_check: AgeShareCheck::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn horizon(&self) -> Result<YearIndex> {
        YearIndex::new(self.start_year, self.end_year)
    }
}
