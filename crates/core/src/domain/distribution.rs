//! Per-tick probability distributions over the vocabulary

use serde::{Deserialize, Serialize};

/// Divisor for an all-zero weight vector and offset inside the entropy logarithm
pub const EPSILON: f64 = 1e-10;

/// A normalized distribution over `vocab_size` tokens
///
/// Components are non-negative and sum to 1 (within float tolerance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbabilityVector(Vec<f64>);

impl ProbabilityVector {
    /// Normalize raw non-negative weights into a distribution
    ///
    /// Divides by the sum, or by [`EPSILON`] when every weight is zero. Any
    /// positive sum, however small, yields a vector summing to 1.
    pub fn from_weights(weights: Vec<f64>) -> Self {
        let total: f64 = weights.iter().sum();
        let norm = if total > 0.0 { total } else { EPSILON };
        Self(weights.into_iter().map(|w| w / norm).collect())
    }

    /// Component probabilities in token order
    pub fn probabilities(&self) -> &[f64] {
        &self.0
    }

    /// Vocabulary size
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-token vector
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Probability mass on the most likely token
    pub fn fidelity(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Shannon entropy in nats, `-Σ p·ln(p + ε)`
    pub fn entropy(&self) -> f64 {
        -self.0.iter().map(|&p| p * (p + EPSILON).ln()).sum::<f64>()
    }
}

impl AsRef<[f64]> for ProbabilityVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Ordered sequence of per-tick distributions
pub type TokenStream = Vec<ProbabilityVector>;
