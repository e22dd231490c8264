//! Exportable result set

use crate::domain::{EngineConfig, FinalMetrics, TokenStream};
use serde::{Deserialize, Serialize};

/// Configuration plus every output of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub config: EngineConfig,
    pub stream: TokenStream,
    pub logic: Vec<f64>,
    pub aesthetic: Vec<f64>,
    pub understanding: Vec<f64>,
    pub utility: Vec<f64>,
    pub final_metrics: FinalMetrics,
}

impl SimulationReport {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a previously exported report
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
