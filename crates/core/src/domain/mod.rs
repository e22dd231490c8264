//! Domain layer: Pure value objects and configuration

mod config;
mod distribution;
mod metrics;

pub use config::EngineConfig;
pub use distribution::{EPSILON, ProbabilityVector, TokenStream};
pub use metrics::{FinalMetrics, Metric, StepMetrics, normalized, peak};
