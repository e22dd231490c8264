//! Application layer: stream synthesis and the decay recurrence

pub mod dynamics;
pub mod generators;

pub use dynamics::{DecayDynamics, DecayState, MetricSeries};
pub use generators::TokenStreamGenerator;
