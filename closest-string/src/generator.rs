//! Random string sets for experiments and timing

use crate::error::StringSetError;
use crate::string_set::{Bit, StringSet, Symbol};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default share of wildcards, i.e. every symbol of the alphabet equally likely
pub const DEFAULT_WILDCARD_PROBABILITY: f64 = 1.0 / 3.0;

/// Generator of random [`StringSet`]s
///
/// Each symbol is a wildcard with the configured probability and otherwise `0` or `1`
/// with equal chance. Seeded generators are reproducible.
#[derive(Debug, Clone)]
pub struct RandomStringGenerator {
    rng: StdRng,
    wildcard_probability: f64,
}

impl RandomStringGenerator {
    /// Generator seeded from the operating system
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Reproducible generator
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            wildcard_probability: DEFAULT_WILDCARD_PROBABILITY,
        }
    }

    /// Set the chance of a wildcard, clamped to `[0, 1]`
    pub fn with_wildcard_probability(mut self, probability: f64) -> Self {
        self.wildcard_probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn wildcard_probability(&self) -> f64 {
        self.wildcard_probability
    }

    /// Generate `num_strings` strings of length `string_length`
    ///
    /// # Returns
    /// * `Err(StringSetError::EmptyLength)` - `string_length` is zero
    pub fn generate(
        &mut self,
        string_length: usize,
        num_strings: usize,
    ) -> Result<StringSet, StringSetError> {
        if string_length == 0 {
            return Err(StringSetError::EmptyLength);
        }

        let rows: Vec<Vec<Symbol>> = (0..num_strings)
            .map(|_| {
                (0..string_length)
                    .map(|_| self.random_symbol())
                    .collect()
            })
            .collect();

        tracing::trace!(
            strings = num_strings,
            length = string_length,
            "generated string set"
        );
        StringSet::new(string_length, rows)
    }

    fn random_symbol(&mut self) -> Symbol {
        if self.rng.random_bool(self.wildcard_probability) {
            Symbol::Wildcard
        } else if self.rng.random_bool(0.5) {
            Symbol::Bit(Bit::One)
        } else {
            Symbol::Bit(Bit::Zero)
        }
    }
}

impl Default for RandomStringGenerator {
    fn default() -> Self {
        Self::new()
    }
}
