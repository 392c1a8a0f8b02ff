//! Sequence operators: scoring, random generation and recombination.
//!
//! These work on plain symbol slices so they can be reused outside the
//! [`Population`](super::Population) bookkeeping.

use rand::Rng;

/// Draws below this take the first parent's symbol.
pub const FIRST_PARENT_BAND: f64 = 0.45;

/// Draws below this (and at least [`FIRST_PARENT_BAND`]) take the second
/// parent's symbol. Draws at or above it mutate.
pub const MUTATION_THRESHOLD: f64 = 0.90;

/// Number of positions where `a` and `b` differ.
///
/// Only the common prefix is compared; callers guarantee equal lengths.
pub fn hamming_distance<S: PartialEq>(a: &[S], b: &[S]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

/// Builds a chromosome of `len` symbols drawn uniformly from `alphabet`.
///
/// # Panics
/// Panics if `alphabet` is empty.
pub fn random_chromosome<S: Copy, R: Rng>(alphabet: &[S], len: usize, rng: &mut R) -> Vec<S> {
    (0..len).map(|_| random_symbol(alphabet, rng)).collect()
}

/// One symbol drawn uniformly from `alphabet`.
///
/// # Panics
/// Panics if `alphabet` is empty.
pub fn random_symbol<S: Copy, R: Rng>(alphabet: &[S], rng: &mut R) -> S {
    alphabet[rng.random_range(0..alphabet.len())]
}

/// Uniform 45/45/10 recombination.
///
/// For each position a draw `r` in `[0, 1)` picks `first[i]` when
/// `r < 0.45`, `second[i]` when `r < 0.90`, otherwise a random symbol from
/// `alphabet`. Positions are independent. The split is asymmetric in that
/// `first` always owns the lower band.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths or `alphabet` is empty
/// and a mutation is drawn.
pub fn recombine<S: Copy, R: Rng>(first: &[S], second: &[S], alphabet: &[S], rng: &mut R) -> Vec<S> {
    assert_eq!(first.len(), second.len(), "parents must have equal length");

    first
        .iter()
        .zip(second)
        .map(|(&a, &b)| {
            let r: f64 = rng.random();
            if r < FIRST_PARENT_BAND {
                a
            } else if r < MUTATION_THRESHOLD {
                b
            } else {
                random_symbol(alphabet, rng)
            }
        })
        .collect()
}
