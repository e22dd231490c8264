//! Engine errors

use thiserror::Error;

/// Configuration errors.
///
/// The engine has exactly one failure mode: a configuration that cannot
/// drive a simulation. Everything past construction is total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid steps: {steps} (at least 2 required)")]
    InvalidSteps { steps: usize },

    #[error("Invalid vocab size: {vocab_size} (at least 1 required)")]
    InvalidVocabSize { vocab_size: usize },

    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
