//! Emergent Cognitive Metrics Engine
//!
//! Generates a seeded, heavy-tailed stream of token distributions and derives
//! four metric series from it through an exponentially decayed recurrence:
//!
//! - **Logic**: decayed running sum of fidelity (peak probability)
//! - **Aesthetic**: decayed running sum of entropy
//! - **Understanding**: geometric mean of logic and aesthetic
//! - **Utility**: fidelity minus penalty-weighted entropy
//!
//! This crate contains no async and no presentation; the only I/O is the
//! optional JSON configuration loader.
//!
//! ```
//! use emergent_core::{CognitiveEngine, EngineConfig};
//!
//! let engine = CognitiveEngine::new(EngineConfig::default().with_steps(20)).unwrap();
//! assert_eq!(engine.logic().len(), 20);
//! println!("{}", engine.final_metrics());
//! ```

pub mod application;
pub mod domain;
pub mod engine;
pub mod error;
pub mod report;

// Re-export key types at crate root
pub use application::{DecayDynamics, DecayState, MetricSeries, TokenStreamGenerator};
pub use domain::{
    EPSILON, EngineConfig, FinalMetrics, Metric, ProbabilityVector, StepMetrics, TokenStream,
    normalized, peak,
};
pub use engine::CognitiveEngine;
pub use error::{ConfigError, Result};
pub use report::SimulationReport;
