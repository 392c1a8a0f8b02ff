//! Generational evolutionary search toward a target sequence.
//!
//! A [`Population`] of fixed-length symbol sequences is improved toward a
//! target through elitism, fitter-half parent selection and 45/45/10
//! recombination, until some candidate matches the target exactly.
//!
//! # Core Types
//!
//! - [`Candidate`]: A chromosome and its Hamming distance to the target
//! - [`Population`]: One generation plus the generation-advance algorithm
//! - [`PopulationConfig`]: Alphabet, target, target size, seed
//! - [`EvolutionRunner`]: Loops a population to convergence, reporting [`Summary`]s
//!
//! # Submodules
//!
//! - [`operators`]: Scoring, random chromosomes, recombination
//! - [`selection`]: Elite selection, offspring sizing, parent sampling
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod driver;
pub mod operators;
mod population;
pub mod selection;
mod types;

pub use config::PopulationConfig;
pub use driver::EvolutionRunner;
pub use population::{Population, DEFAULT_SEED_COUNT};
pub use types::{Candidate, Score, Summary, Symbol};
