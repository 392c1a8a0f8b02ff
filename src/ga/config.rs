//! Population configuration.
//!
//! [`PopulationConfig`] holds the alphabet, the target sequence and the
//! desired generation size, plus the run-level knobs (seed, parallelism).

use super::types::Symbol;
use crate::error::{GeneseqError, Result};
use std::collections::HashSet;

/// Configuration for a [`Population`](super::Population).
///
/// # Defaults
///
/// ```
/// use geneseq::ga::PopulationConfig;
///
/// let config = PopulationConfig::default();
/// assert_eq!(config.target_size, 128);
/// assert_eq!(config.target.len(), 8);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use geneseq::ga::PopulationConfig;
///
/// let config = PopulationConfig::from_strs("01", "1011", 32)
///     .with_seed(42)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationConfig<S: Symbol = char> {
    /// Symbols usable at any chromosome position.
    pub alphabet: Vec<S>,

    /// The sequence being searched for. Its length is the chromosome length.
    pub target: Vec<S>,

    /// Desired number of candidates per generation.
    ///
    /// Not a hard cap: small populations breed past it to recover size.
    pub target_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to score offspring in parallel using rayon.
    ///
    /// Only honored when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for PopulationConfig<char> {
    fn default() -> Self {
        Self::from_strs("012345678", "10300050", 128)
    }
}

impl PopulationConfig<char> {
    /// Builds a `char` configuration from an alphabet string and a target string.
    pub fn from_strs(alphabet: &str, target: &str, target_size: usize) -> Self {
        Self::new(alphabet.chars().collect(), target.chars().collect(), target_size)
    }
}

impl<S: Symbol> PopulationConfig<S> {
    /// Creates a configuration. Call [`validate`](Self::validate) before use.
    pub fn new(alphabet: Vec<S>, target: Vec<S>, target_size: usize) -> Self {
        Self {
            alphabet,
            target,
            target_size,
            seed: None,
            parallel: false,
        }
    }

    /// Sets the target generation size.
    pub fn with_target_size(mut self, n: usize) -> Self {
        self.target_size = n;
        self
    }

    /// Replaces the target sequence.
    pub fn with_target(mut self, target: Vec<S>) -> Self {
        self.target = target;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Chromosome length, i.e. the target length.
    pub fn chromosome_length(&self) -> usize {
        self.target.len()
    }

    /// Validates the configuration.
    ///
    /// A target symbol missing from the alphabet is rejected because the
    /// population could never converge.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_empty() {
            return Err(GeneseqError::EmptyAlphabet);
        }
        let mut seen = HashSet::with_capacity(self.alphabet.len());
        for symbol in &self.alphabet {
            if !seen.insert(*symbol) {
                return Err(GeneseqError::DuplicateSymbol(symbol.to_string()));
            }
        }
        if self.target.is_empty() {
            return Err(GeneseqError::EmptyTarget);
        }
        if let Some((position, symbol)) = self
            .target
            .iter()
            .enumerate()
            .find(|(_, s)| !seen.contains(*s))
        {
            return Err(GeneseqError::SymbolOutsideAlphabet {
                symbol: symbol.to_string(),
                position,
            });
        }
        if self.target_size == 0 {
            return Err(GeneseqError::ZeroTargetSize);
        }
        Ok(())
    }
}
