//! Generation sizing, elite selection and parent sampling.
//!
//! All functions here are pure over indices: they decide *which* members
//! of a generation take part, never touch candidates themselves.
//!
//! # Sizing rules
//!
//! - elites: `ceil(10% of current size)`
//! - offspring: see [`breed_count`]
//! - parent pool: the fitter half of the sorted generation, at least 2

use rand::seq::index;
use rand::Rng;

/// Number of elites carried unchanged into the next generation.
///
/// `ceil(10 * current_size / 100)`.
pub fn elite_count(current_size: usize) -> usize {
    (10 * current_size).div_ceil(100)
}

/// Number of offspring to breed.
///
/// With `ninety = floor(90% of pool_len)`:
/// - `ninety + elites < target_size`: `2 * pool_len` (regrow a small population)
/// - `ninety + elites > target_size`: `target_size - elites` (shrink to target)
/// - otherwise: `floor(90% of target_size)` (steady state)
pub fn breed_count(pool_len: usize, elites: usize, target_size: usize) -> usize {
    let ninety = 90 * pool_len / 100;
    if ninety + elites < target_size {
        2 * pool_len
    } else if ninety + elites > target_size {
        target_size.saturating_sub(elites)
    } else {
        90 * target_size / 100
    }
}

/// Size of the parent pool drawn from the front of the sorted generation.
///
/// 2 below four members, otherwise half the generation (rounded down).
pub fn parent_cutoff(pool_len: usize) -> usize {
    if pool_len < 4 {
        2
    } else {
        pool_len / 2
    }
}

/// Picks up to `count` elites from fitness buckets.
///
/// `buckets[score]` lists the arena indices of the members with that
/// score. Scores are walked ascending; inside a bucket, members are taken
/// in uniformly random order without replacement. Stops early, without
/// panicking, once every member has been taken.
pub fn select_elites<R: Rng>(buckets: &[Vec<usize>], count: usize, rng: &mut R) -> Vec<usize> {
    let mut elites = Vec::with_capacity(count);
    let mut scores = buckets.iter().filter(|b| !b.is_empty());
    let mut remaining: Vec<usize> = Vec::new();

    while elites.len() < count {
        if remaining.is_empty() {
            match scores.next() {
                Some(bucket) => remaining = bucket.clone(),
                None => break,
            }
        }
        let pick = rng.random_range(0..remaining.len());
        elites.push(remaining.swap_remove(pick));
    }
    elites
}

/// Draws two distinct positions from `0..cutoff`, in draw order.
///
/// # Panics
/// Panics if `cutoff < 2`.
pub fn sample_parents<R: Rng>(cutoff: usize, rng: &mut R) -> (usize, usize) {
    assert!(cutoff >= 2, "parent pool needs at least 2 members");
    let picked = index::sample(rng, cutoff, 2);
    (picked.index(0), picked.index(1))
}
