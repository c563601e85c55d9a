// Copyright 2026 Hypermesh Foundation. All rights reserved.
// DROM-COM Demography Suite ("Outre-mer")

pub mod error;
pub mod types;
pub mod registry;
pub mod noise;
pub mod shocks;
pub mod generators;
pub mod consistency;
pub mod config;
pub mod summary;
pub mod engine;
pub mod export;

pub use config::EngineConfig;
pub use consistency::{AgeShareCheck, BalanceStrategy};
pub use engine::{Synthesizer, TerritoryRun};
pub use error::{EngineError, Result};
pub use noise::{FlatNoise, GaussianNoise, NoiseSource};
pub use registry::{Category, TerritoryProfile};
pub use shocks::{ShockRule, ShockTable};
pub use summary::{summarize, SummaryStatistics};
pub use types::*;

use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

/// Browser-facing handle on one synthesized territory over the default
/// 2002-2025 horizon.
#[wasm_bindgen]
pub struct TerritoryAnalyzer {
    run: TerritoryRun,
}

#[wasm_bindgen]
impl TerritoryAnalyzer {
    #[wasm_bindgen(constructor)]
    pub fn new(territory: &str, seed: u64) -> std::result::Result<TerritoryAnalyzer, JsValue> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let run = Synthesizer::default()
            .run(territory, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { run })
    }

    pub fn territory(&self) -> String {
        self.run.territory.clone()
    }

    pub fn known(&self) -> bool {
        self.run.known
    }

    /// One object per year, in column order.
    pub fn generate(&self) -> JsValue {
        let rows: Vec<YearRow> = self.run.series.rows().collect();
        serde_wasm_bindgen::to_value(&rows).unwrap_or(JsValue::NULL)
    }

    pub fn summary(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.run.summary()).unwrap_or(JsValue::NULL)
    }

    pub fn csv(&self) -> String {
        export::to_csv_string(&self.run.series).unwrap_or_default()
    }

    pub fn config(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.run.config).unwrap_or(JsValue::NULL)
    }

    pub fn territories() -> JsValue {
        let names: Vec<&str> = registry::names().collect();
        serde_wasm_bindgen::to_value(&names).unwrap_or(JsValue::NULL)
    }
}
