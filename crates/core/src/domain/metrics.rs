//! Derived metric types
//!
//! The recurrence publishes four index-aligned series. These types name them,
//! snapshot a single tick, and summarize the final tick for text presenters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four published metric series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Decayed running sum of fidelity
    Logic,
    /// Decayed running sum of entropy
    Aesthetic,
    /// Geometric mean of logic and aesthetic
    Understanding,
    /// Fidelity minus penalty-weighted entropy
    Utility,
}

impl Metric {
    /// All metrics in presentation order
    pub const ALL: [Metric; 4] = [
        Metric::Logic,
        Metric::Aesthetic,
        Metric::Understanding,
        Metric::Utility,
    ];

    /// Display label used by text presenters
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Logic => "Logic",
            Metric::Aesthetic => "Aesthetic",
            Metric::Understanding => "Understanding",
            Metric::Utility => "Utility",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the recurrence knows about one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepMetrics {
    pub tick: usize,
    pub fidelity: f64,
    pub entropy: f64,
    pub logic: f64,
    pub aesthetic: f64,
    pub understanding: f64,
    pub utility: f64,
}

impl StepMetrics {
    /// Value of one metric at this tick
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Logic => self.logic,
            Metric::Aesthetic => self.aesthetic,
            Metric::Understanding => self.understanding,
            Metric::Utility => self.utility,
        }
    }
}

/// Last-tick value of each series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalMetrics {
    pub logic: f64,
    pub aesthetic: f64,
    pub understanding: f64,
    pub utility: f64,
}

impl FinalMetrics {
    /// Final value of one metric
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Logic => self.logic,
            Metric::Aesthetic => self.aesthetic,
            Metric::Understanding => self.understanding,
            Metric::Utility => self.utility,
        }
    }
}

impl fmt::Display for FinalMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Metrics:")?;
        for metric in Metric::ALL {
            writeln!(f, "{}: {:.4}", metric, self.get(metric))?;
        }
        Ok(())
    }
}

/// Scale used when plotting a series: its maximum, or 1.0 when that is zero
/// or the series is empty
pub fn peak(series: &[f64]) -> f64 {
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() && max != 0.0 { max } else { 1.0 }
}

/// Divide every value by [`peak`]
pub fn normalized(series: &[f64]) -> Vec<f64> {
    let scale = peak(series);
    series.iter().map(|v| v / scale).collect()
}
