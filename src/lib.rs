//! Generational evolutionary search over symbol sequences.
//!
//! A population of fixed-length candidate sequences is evolved toward a
//! target sequence:
//!
//! - **Fitness**: Hamming distance to the target (lower is better, 0 solves).
//! - **Elitism**: the fittest 10% carry over unchanged.
//! - **Mating**: random distinct pairs from the fitter half produce children
//!   position by position, 45% from each parent and 10% mutation.
//! - **Convergence**: the run ends when any candidate matches the target.
//!
//! All randomness flows through an explicit `&mut impl Rng`, so seeded runs
//! are reproducible (see [`random::create_rng`]).
//!
//! # Architecture
//!
//! The crate is a library only. Driving the loop and printing progress
//! belong to the caller; [`ga::EvolutionRunner`] is a thin helper for that.

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GeneseqError, Result};
