//! Decay dynamics over the token stream
//!
//! A single left-to-right fold carrying two running scalars:
//!
//! ```text
//! l ← l·decay + fidelity·1.2
//! a ← a·decay + entropy·0.8
//! understanding = sqrt(l·a)
//! utility       = fidelity − alpha·entropy
//! ```
//!
//! Tick `i` depends on ticks `0..=i` only. The product under the square root
//! is floored at zero.

use crate::domain::{ProbabilityVector, StepMetrics};

/// Gain applied to fidelity in the logic state
const LOGIC_GAIN: f64 = 1.2;
/// Gain applied to entropy in the aesthetic state
const AESTHETIC_GAIN: f64 = 0.8;

/// Carried state of the recurrence
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecayState {
    pub logic: f64,
    pub aesthetic: f64,
}

/// Recurrence parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayDynamics {
    pub decay: f64,
    pub alpha_penalty: f64,
}

/// Output of a full pass, index-aligned with the stream
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSeries {
    pub logic: Vec<f64>,
    pub aesthetic: Vec<f64>,
    pub understanding: Vec<f64>,
    pub utility: Vec<f64>,
}

impl MetricSeries {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            logic: Vec::with_capacity(capacity),
            aesthetic: Vec::with_capacity(capacity),
            understanding: Vec::with_capacity(capacity),
            utility: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, step: &StepMetrics) {
        self.logic.push(step.logic);
        self.aesthetic.push(step.aesthetic);
        self.understanding.push(step.understanding);
        self.utility.push(step.utility);
    }

    /// Number of ticks solved
    pub fn len(&self) -> usize {
        self.logic.len()
    }

    /// True when no tick has been solved
    pub fn is_empty(&self) -> bool {
        self.logic.is_empty()
    }
}

impl DecayDynamics {
    /// Recurrence with the given forgetting factor and entropy weight
    pub fn new(decay: f64, alpha_penalty: f64) -> Self {
        Self {
            decay,
            alpha_penalty,
        }
    }

    /// Advance the state by one tick and report the tick's metrics
    pub fn step(
        &self,
        state: &mut DecayState,
        tick: usize,
        probs: &ProbabilityVector,
    ) -> StepMetrics {
        let fidelity = probs.fidelity();
        let entropy = probs.entropy();

        state.logic = state.logic * self.decay + fidelity * LOGIC_GAIN;
        state.aesthetic = state.aesthetic * self.decay + entropy * AESTHETIC_GAIN;

        StepMetrics {
            tick,
            fidelity,
            entropy,
            logic: state.logic,
            aesthetic: state.aesthetic,
            // A near-certain tick has entropy of order -ε, so the product can dip
            // just below zero.
            understanding: (state.logic * state.aesthetic).max(0.0).sqrt(),
            utility: fidelity - self.alpha_penalty * entropy,
        }
    }

    /// Run the recurrence over the whole stream from a zero state
    pub fn solve(&self, stream: &[ProbabilityVector]) -> MetricSeries {
        let mut state = DecayState::default();
        let mut series = MetricSeries::with_capacity(stream.len());
        for (tick, probs) in stream.iter().enumerate() {
            let step = self.step(&mut state, tick, probs);
            series.push(&step);
        }
        series
    }
}
