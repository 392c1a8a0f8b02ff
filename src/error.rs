//! Error type shared by every population operation.

use thiserror::Error;

/// Errors raised by configuration checks and generation transitions.
///
/// Configuration errors surface when a population or candidate is built.
/// [`GeneseqError::Starvation`] and [`GeneseqError::EmptyPopulation`] surface
/// from [`Population::advance`](crate::ga::Population::advance) before any
/// state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneseqError {
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("alphabet contains duplicate symbol {0}")]
    DuplicateSymbol(String),

    #[error("target sequence must not be empty")]
    EmptyTarget,

    #[error("target symbol {symbol} at position {position} is not in the alphabet")]
    SymbolOutsideAlphabet { symbol: String, position: usize },

    #[error("target_size must be at least 1")]
    ZeroTargetSize,

    #[error("chromosome length {actual} does not match target length {expected}")]
    ChromosomeLength { expected: usize, actual: usize },

    #[error("seed count must be at least 1")]
    EmptySeed,

    #[error("breeding needs at least 2 candidates, population has {available}")]
    Starvation { available: usize },

    #[error("population has no candidates; call seed first")]
    EmptyPopulation,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeneseqError>;
