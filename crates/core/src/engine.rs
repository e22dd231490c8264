//! Simulation engine
//!
//! Validates the configuration, seeds a private random source, generates the
//! token stream and solves the decay dynamics, all inside [`CognitiveEngine::new`].
//! After construction the engine is a read-only value.

use crate::application::{DecayDynamics, DecayState, MetricSeries, TokenStreamGenerator};
use crate::domain::{
    EngineConfig, FinalMetrics, Metric, ProbabilityVector, StepMetrics, TokenStream,
};
use crate::error::Result;
use crate::report::SimulationReport;
use log::{debug, info};

/// Memoized result of one deterministic forward pass
#[derive(Debug, Clone)]
pub struct CognitiveEngine {
    config: EngineConfig,
    dynamics: DecayDynamics,
    stream: TokenStream,
    series: MetricSeries,
}

impl CognitiveEngine {
    /// Build and run an engine
    ///
    /// Fails with a configuration error when `steps < 2` or `vocab_size < 1`;
    /// no random draw happens before validation passes.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "Building engine: steps={}, vocab_size={}, decay={}, alpha_penalty={}, seed={}",
            config.steps, config.vocab_size, config.decay, config.alpha_penalty, config.seed
        );

        let mut generator = TokenStreamGenerator::new(config.seed);
        let stream = generator.generate_stream(config.steps, config.vocab_size);

        let dynamics = DecayDynamics::new(config.decay, config.alpha_penalty);
        let series = dynamics.solve(&stream);

        let engine = Self {
            config,
            dynamics,
            stream,
            series,
        };
        let last = engine.final_metrics();
        info!(
            "Simulation complete: {} ticks, logic={:.4}, aesthetic={:.4}, understanding={:.4}, utility={:.4}",
            engine.steps(),
            last.logic,
            last.aesthetic,
            last.understanding,
            last.utility
        );
        Ok(engine)
    }

    /// Build an engine with the default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(EngineConfig::default())
    }

    /// Configuration the engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of ticks; equals the length of the stream and of every series
    pub fn steps(&self) -> usize {
        self.stream.len()
    }

    /// Per-tick distributions in tick order
    pub fn stream(&self) -> &[ProbabilityVector] {
        &self.stream
    }

    /// Decayed fidelity state per tick
    pub fn logic(&self) -> &[f64] {
        &self.series.logic
    }

    /// Decayed entropy state per tick
    pub fn aesthetic(&self) -> &[f64] {
        &self.series.aesthetic
    }

    /// Geometric mean of logic and aesthetic per tick
    pub fn understanding(&self) -> &[f64] {
        &self.series.understanding
    }

    /// Fidelity minus penalized entropy per tick
    pub fn utility(&self) -> &[f64] {
        &self.series.utility
    }

    /// Series for the given metric
    pub fn series(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Logic => self.logic(),
            Metric::Aesthetic => self.aesthetic(),
            Metric::Understanding => self.understanding(),
            Metric::Utility => self.utility(),
        }
    }

    /// Last value of a series
    pub fn final_value(&self, metric: Metric) -> f64 {
        // Validation guarantees at least two ticks
        self.series(metric)[self.steps() - 1]
    }

    /// Last value of every series
    pub fn final_metrics(&self) -> FinalMetrics {
        FinalMetrics {
            logic: self.final_value(Metric::Logic),
            aesthetic: self.final_value(Metric::Aesthetic),
            understanding: self.final_value(Metric::Understanding),
            utility: self.final_value(Metric::Utility),
        }
    }

    /// Full snapshot of one tick, or `None` past the end of the run
    ///
    /// Fidelity and entropy are recomputed from the stored distribution; the
    /// four series values are the stored ones.
    pub fn step_metrics(&self, tick: usize) -> Option<StepMetrics> {
        let probs = self.stream.get(tick)?;
        Some(StepMetrics {
            tick,
            fidelity: probs.fidelity(),
            entropy: probs.entropy(),
            logic: self.series.logic[tick],
            aesthetic: self.series.aesthetic[tick],
            understanding: self.series.understanding[tick],
            utility: self.series.utility[tick],
        })
    }

    /// Replay the recurrence tick by tick
    ///
    /// Yields the same values as the stored series; useful for consumers that
    /// want per-tick snapshots without indexing.
    pub fn replay(&self) -> impl Iterator<Item = StepMetrics> + '_ {
        let dynamics = self.dynamics;
        let mut state = DecayState::default();
        self.stream
            .iter()
            .enumerate()
            .map(move |(tick, probs)| dynamics.step(&mut state, tick, probs))
    }

    /// Serializable copy of the configuration and every output
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            config: self.config.clone(),
            stream: self.stream.clone(),
            logic: self.series.logic.clone(),
            aesthetic: self.series.aesthetic.clone(),
            understanding: self.series.understanding.clone(),
            utility: self.series.utility.clone(),
            final_metrics: self.final_metrics(),
        }
    }
}
