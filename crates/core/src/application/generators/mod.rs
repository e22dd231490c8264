//! Synthetic data generators

mod token_stream;

pub use token_stream::TokenStreamGenerator;
