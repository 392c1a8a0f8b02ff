//! Population state and the generation-advance algorithm.
//!
//! [`Population`] owns one generation of [`Candidate`]s at a time. Members
//! live in an arena (`Vec<Candidate>`) and are grouped into fitness buckets
//! indexed directly by score, since scores are small dense integers in
//! `0..=target_len`.
//!
//! # Advance
//!
//! 1. Carry `ceil(10%)` elites over, lowest scores first, random order
//!    within a score.
//! 2. Size the offspring batch with [`selection::breed_count`].
//! 3. Mate random distinct pairs from the fitter half of the generation.
//! 4. Swap in the new generation and bump the generation index.
//!
//! The new generation is built on the side and committed in one step, so
//! callers never observe a half-built generation.

use super::config::PopulationConfig;
use super::selection;
use super::types::{Candidate, Score, Summary, Symbol};
use crate::error::{GeneseqError, Result};
use log::{debug, info, trace};
use rand::Rng;

/// Number of candidates seeded when the caller has no preference.
pub const DEFAULT_SEED_COUNT: usize = 2;

/// One generation: an arena of candidates plus score buckets into it.
#[derive(Debug, Clone)]
struct Generation<S: Symbol> {
    candidates: Vec<Candidate<S>>,
    buckets: Vec<Vec<usize>>,
}

impl<S: Symbol> Generation<S> {
    fn new(chromosome_length: usize, capacity: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(capacity),
            buckets: vec![Vec::new(); chromosome_length + 1],
        }
    }

    fn insert(&mut self, candidate: Candidate<S>) {
        let idx = self.candidates.len();
        self.buckets[candidate.fitness()].push(idx);
        self.candidates.push(candidate);
    }

    fn len(&self) -> usize {
        self.candidates.len()
    }

    fn scores(&self) -> impl Iterator<Item = Score> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(score, _)| score)
    }

    fn min_score(&self) -> Option<Score> {
        self.scores().next()
    }

    fn bucket(&self, score: Score) -> impl Iterator<Item = &Candidate<S>> + '_ {
        self.buckets
            .get(score)
            .into_iter()
            .flatten()
            .map(|&idx| &self.candidates[idx])
    }

    /// All members ascending by fitness, insertion order within a score.
    fn sorted(&self) -> Vec<&Candidate<S>> {
        self.buckets
            .iter()
            .flatten()
            .map(|&idx| &self.candidates[idx])
            .collect()
    }
}

/// A population evolving toward a target sequence.
///
/// # Usage
///
/// ```
/// use geneseq::ga::{Population, PopulationConfig};
/// use geneseq::random::create_rng;
///
/// let config = PopulationConfig::from_strs("01", "1", 10);
/// let mut population = Population::new(config).unwrap();
/// let mut rng = create_rng(42);
///
/// population.seed(10, &mut rng).unwrap();
/// while !population.has_converged() {
///     population.advance(&mut rng).unwrap();
/// }
/// assert_eq!(population.best_score(), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Population<S: Symbol = char> {
    config: PopulationConfig<S>,
    members: Generation<S>,
    generation: usize,
    current_size: usize,
}

impl<S: Symbol> Population<S> {
    /// Creates an unseeded population.
    ///
    /// # Errors
    /// Any configuration error from [`PopulationConfig::validate`].
    pub fn new(config: PopulationConfig<S>) -> Result<Self> {
        config.validate()?;
        let members = Generation::new(config.chromosome_length(), config.target_size);
        Ok(Self {
            config,
            members,
            generation: 1,
            current_size: 0,
        })
    }

    /// Adds `count` random candidates to the current generation.
    ///
    /// Meant to be called once before the first [`advance`](Self::advance).
    /// A second call appends rather than replaces.
    ///
    /// # Errors
    /// [`GeneseqError::EmptySeed`] if `count` is 0.
    pub fn seed<R: Rng>(&mut self, count: usize, rng: &mut R) -> Result<()> {
        if count == 0 {
            return Err(GeneseqError::EmptySeed);
        }
        for _ in 0..count {
            self.members.insert(Candidate::random(&self.config, rng));
        }
        self.current_size += count;
        info!(
            "seeded {} candidates (population now {}, best fitness {:?})",
            count,
            self.current_size,
            self.best_score()
        );
        Ok(())
    }

    /// True once some candidate matches the target exactly.
    ///
    /// There is no generation ceiling; an empty population has not converged.
    pub fn has_converged(&self) -> bool {
        self.best_score() == Some(0)
    }

    /// Lowest fitness present, if any.
    pub fn best_score(&self) -> Option<Score> {
        self.members.min_score()
    }

    /// One of the best candidates, chosen uniformly among ties.
    pub fn best_candidate<R: Rng>(&self, rng: &mut R) -> Option<&Candidate<S>> {
        let best = self.best_candidates();
        if best.is_empty() {
            return None;
        }
        Some(best[rng.random_range(0..best.len())])
    }

    /// All candidates sharing the lowest fitness.
    pub fn best_candidates(&self) -> Vec<&Candidate<S>> {
        match self.best_score() {
            Some(score) => self.candidates_with_score(score),
            None => Vec::new(),
        }
    }

    /// Fitness scores present in the generation, ascending.
    pub fn candidate_scores(&self) -> Vec<Score> {
        self.members.scores().collect()
    }

    /// Members with the given fitness, in insertion order.
    pub fn candidates_with_score(&self, score: Score) -> Vec<&Candidate<S>> {
        self.members.bucket(score).collect()
    }

    /// All members ascending by fitness, stable within a score.
    pub fn sorted_candidates(&self) -> Vec<&Candidate<S>> {
        self.members.sorted()
    }

    /// Moves the population forward one generation.
    ///
    /// Preconditions are checked before anything is built; on error the
    /// population is unchanged.
    ///
    /// # Errors
    /// - [`GeneseqError::EmptyPopulation`] if never seeded
    /// - [`GeneseqError::Starvation`] if offspring are needed but fewer than
    ///   2 candidates can breed
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let available = self.members.len();
        if available == 0 {
            return Err(GeneseqError::EmptyPopulation);
        }

        // Elites never outnumber the members they are drawn from.
        let elite_target = selection::elite_count(self.current_size);
        let breed_count =
            selection::breed_count(available, elite_target.min(available), self.config.target_size);
        if breed_count > 0 && available < 2 {
            return Err(GeneseqError::Starvation { available });
        }

        // 1. Elites
        let elites = selection::select_elites(&self.members.buckets, elite_target, rng);

        // 2. Parent pool
        let pool = self.members.sorted();
        let cutoff = selection::parent_cutoff(pool.len());

        // 3. Mating
        let mut offspring = Vec::with_capacity(breed_count);
        for _ in 0..breed_count {
            let (p1, p2) = selection::sample_parents(cutoff, rng);
            trace!("mating pool[{p1}] x pool[{p2}]");
            offspring.push(super::operators::recombine(
                pool[p1].chromosome(),
                pool[p2].chromosome(),
                &self.config.alphabet,
                rng,
            ));
        }
        let children = score_all(offspring, &self.config.target, self.config.parallel);

        let mut next = Generation::new(self.config.chromosome_length(), elites.len() + breed_count);
        for idx in &elites {
            next.insert(self.members.candidates[*idx].clone());
        }
        for child in children {
            next.insert(child);
        }

        // 4. Commit
        debug!(
            "generation {} -> {}: {} elites + {} offspring (pool cutoff {}), best fitness {:?}",
            self.generation,
            self.generation + 1,
            elites.len(),
            breed_count,
            cutoff,
            next.min_score()
        );
        self.members = next;
        self.current_size = elites.len() + breed_count;
        self.generation += 1;

        if self.has_converged() {
            info!("converged at generation {}", self.generation);
        }
        Ok(())
    }

    /// Replaces the target and regenerates the population from scratch.
    ///
    /// Reseeds with the previous generation size (or [`DEFAULT_SEED_COUNT`]
    /// if empty) and resets the generation index to 1.
    ///
    /// # Errors
    /// Any configuration error for the new target. The population is left
    /// unchanged on error.
    pub fn retarget<R: Rng>(&mut self, target: Vec<S>, rng: &mut R) -> Result<()> {
        let config = self.config.clone().with_target(target);
        config.validate()?;

        let count = if self.current_size > 0 {
            self.current_size
        } else {
            DEFAULT_SEED_COUNT
        };
        info!("retargeting; reseeding {} candidates", count);

        self.members = Generation::new(config.chromosome_length(), count);
        self.config = config;
        self.generation = 1;
        self.current_size = 0;
        self.seed(count, rng)
    }

    /// Snapshot for reporting.
    ///
    /// # Errors
    /// [`GeneseqError::EmptyPopulation`] if never seeded.
    pub fn summary<R: Rng>(&self, rng: &mut R) -> Result<Summary> {
        let best = self.best_candidate(rng).ok_or(GeneseqError::EmptyPopulation)?;
        Ok(Summary {
            generation: self.generation,
            size: self.current_size,
            best: best.render(),
            best_fitness: best.fitness(),
        })
    }

    /// Current generation index, starting at 1.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Number of candidates in the current generation.
    pub fn current_size(&self) -> usize {
        self.current_size
    }

    /// The target sequence.
    pub fn target(&self) -> &[S] {
        &self.config.target
    }

    /// The active configuration.
    pub fn config(&self) -> &PopulationConfig<S> {
        &self.config
    }
}

/// Scores freshly bred chromosomes.
#[cfg(feature = "parallel")]
fn score_all<S: Symbol>(chromosomes: Vec<Vec<S>>, target: &[S], parallel: bool) -> Vec<Candidate<S>> {
    use rayon::prelude::*;

    if parallel {
        chromosomes
            .into_par_iter()
            .map(|c| Candidate::scored(c, target))
            .collect()
    } else {
        chromosomes
            .into_iter()
            .map(|c| Candidate::scored(c, target))
            .collect()
    }
}

/// Scores freshly bred chromosomes.
#[cfg(not(feature = "parallel"))]
fn score_all<S: Symbol>(chromosomes: Vec<Vec<S>>, target: &[S], _parallel: bool) -> Vec<Candidate<S>> {
    chromosomes
        .into_iter()
        .map(|c| Candidate::scored(c, target))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
