//! Heavy-tailed synthetic token stream generator
//!
//! Each tick draws `vocab_size` uniforms, raises them to the 4th power and
//! renormalizes. The power transform concentrates most of the mass near zero
//! and leaves a few dominant tokens per tick.

use crate::domain::{ProbabilityVector, TokenStream};
use log::debug;
use rand::prelude::*;

/// Exponent applied to each uniform draw
const TAIL_EXPONENT: i32 = 4;

/// Seeded generator for per-tick token distributions
pub struct TokenStreamGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
}

impl TokenStreamGenerator {
    /// Create a new generator; the seed is applied here and nowhere else
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one distribution
    pub fn next_distribution(&mut self, vocab_size: usize) -> ProbabilityVector {
        let raw: Vec<f64> = (0..vocab_size)
            .map(|_| self.rng.r#gen::<f64>().powi(TAIL_EXPONENT))
            .collect();
        ProbabilityVector::from_weights(raw)
    }

    /// Generate `steps` distributions in tick order
    pub fn generate_stream(&mut self, steps: usize, vocab_size: usize) -> TokenStream {
        debug!("Generating token stream: steps={steps}, vocab_size={vocab_size}");
        (0..steps)
            .map(|_| self.next_distribution(vocab_size))
            .collect()
    }
}
