//! Core types: symbols, candidates, and per-generation summaries.
//!
//! A [`Candidate`] is a chromosome plus the fitness derived from it at
//! construction. Chromosomes are never mutated afterwards, so the stored
//! fitness always matches the chromosome.

use super::config::PopulationConfig;
use super::operators::{hamming_distance, random_chromosome, recombine};
use crate::error::{GeneseqError, Result};
use rand::Rng;
use std::fmt;
use std::hash::Hash;

/// Marker trait for chromosome symbols.
///
/// Symbols must be cheap to copy and comparable. [`fmt::Display`] is used
/// to render a chromosome as the concatenation of its symbols.
///
/// Blanket-implemented for every type meeting the bounds, so `char`, `u8`
/// and small enums work out of the box.
pub trait Symbol: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {}

impl<T> Symbol for T where T: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// Fitness score: Hamming distance to the target. Lower is better; 0 is solved.
pub type Score = usize;

/// A candidate solution in the population.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate<S: Symbol> {
    chromosome: Vec<S>,
    fitness: Score,
}

impl<S: Symbol> Candidate<S> {
    /// Builds a candidate and scores it against the configured target.
    ///
    /// # Errors
    /// [`GeneseqError::ChromosomeLength`] if `chromosome` is not as long as
    /// the target.
    pub fn new(config: &PopulationConfig<S>, chromosome: Vec<S>) -> Result<Self> {
        if chromosome.len() != config.target.len() {
            return Err(GeneseqError::ChromosomeLength {
                expected: config.target.len(),
                actual: chromosome.len(),
            });
        }
        Ok(Self::scored(chromosome, &config.target))
    }

    /// Scores a chromosome whose length is already known to match `target`.
    pub(crate) fn scored(chromosome: Vec<S>, target: &[S]) -> Self {
        let fitness = hamming_distance(&chromosome, target);
        Self {
            chromosome,
            fitness,
        }
    }

    /// Builds a candidate with uniformly random symbols at every position.
    pub fn random<R: Rng>(config: &PopulationConfig<S>, rng: &mut R) -> Self {
        let chromosome = random_chromosome(&config.alphabet, config.target.len(), rng);
        Self::scored(chromosome, &config.target)
    }

    /// Produces a child by position-wise recombination with `other`.
    ///
    /// Each position independently takes `self`'s symbol (p = 0.45),
    /// `other`'s symbol (p = 0.45) or a random alphabet symbol (p = 0.10).
    /// The child is scored from scratch.
    ///
    /// # Errors
    /// [`GeneseqError::ChromosomeLength`] if `other` has a different length.
    pub fn mate<R: Rng>(
        &self,
        other: &Self,
        config: &PopulationConfig<S>,
        rng: &mut R,
    ) -> Result<Self> {
        if other.chromosome.len() != self.chromosome.len() {
            return Err(GeneseqError::ChromosomeLength {
                expected: self.chromosome.len(),
                actual: other.chromosome.len(),
            });
        }
        let child = recombine(&self.chromosome, &other.chromosome, &config.alphabet, rng);
        Candidate::new(config, child)
    }

    /// The symbol sequence.
    pub fn chromosome(&self) -> &[S] {
        &self.chromosome
    }

    /// Hamming distance to the target this candidate was scored against.
    pub fn fitness(&self) -> Score {
        self.fitness
    }

    /// Whether this candidate exactly matches its target.
    pub fn is_solution(&self) -> bool {
        self.fitness == 0
    }

    /// Concatenation of the chromosome's symbols.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Candidate<char> {
    /// Parses a rendered `char` chromosome back into a candidate.
    pub fn from_rendered(config: &PopulationConfig<char>, rendered: &str) -> Result<Self> {
        Candidate::new(config, rendered.chars().collect())
    }
}

impl<S: Symbol> fmt::Display for Candidate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.chromosome {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Read-only snapshot of one generation, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Generation index, starting at 1.
    pub generation: usize,

    /// Number of candidates in the generation.
    pub size: usize,

    /// Rendering of a best candidate (ties broken at random).
    pub best: String,

    /// Fitness of that candidate.
    pub best_fitness: Score,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation: {} ({})\tBest Chromosome: {}\tFitness: {}",
            self.generation, self.size, self.best, self.best_fitness
        )
    }
}
