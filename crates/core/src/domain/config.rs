//! Engine configuration
//!
//! Supports JSON configuration files. Every field is optional and falls back
//! to the documented default, so `{}` is a valid configuration.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Immutable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of simulation ticks (>= 2)
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Dimensionality of each per-tick distribution (>= 1)
    #[serde(default = "default_vocab_size", alias = "vocabSize")]
    pub vocab_size: usize,

    /// Exponential forgetting factor applied to running state, in (0, 1)
    #[serde(default = "default_decay")]
    pub decay: f64,

    /// Weight applied to entropy when computing utility
    #[serde(default = "default_alpha_penalty", alias = "alphaPenalty")]
    pub alpha_penalty: f64,

    /// Seed for the engine's random source
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_steps() -> usize {
    150
}

fn default_vocab_size() -> usize {
    10
}

fn default_decay() -> f64 {
    0.91
}

fn default_alpha_penalty() -> f64 {
    0.4
}

fn default_seed() -> u64 {
    42
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            vocab_size: default_vocab_size(),
            decay: default_decay(),
            alpha_penalty: default_alpha_penalty(),
            seed: default_seed(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Override the number of ticks
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Override the distribution dimensionality
    pub fn with_vocab_size(mut self, vocab_size: usize) -> Self {
        self.vocab_size = vocab_size;
        self
    }

    /// Override the forgetting factor
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Override the entropy weight in utility
    pub fn with_alpha_penalty(mut self, alpha_penalty: f64) -> Self {
        self.alpha_penalty = alpha_penalty;
        self
    }

    /// Override the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the configuration
    ///
    /// Only `steps` and `vocab_size` are checked; `decay` and `alpha_penalty`
    /// are taken as given.
    pub fn validate(&self) -> Result<()> {
        if self.steps < 2 {
            return Err(ConfigError::InvalidSteps { steps: self.steps });
        }
        if self.vocab_size < 1 {
            return Err(ConfigError::InvalidVocabSize {
                vocab_size: self.vocab_size,
            });
        }
        Ok(())
    }
}
