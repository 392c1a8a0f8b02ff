//! Convenience driver loops.
//!
//! [`EvolutionRunner`] wraps the construct → seed → advance-until-converged
//! loop so callers only supply a configuration and a progress callback.

use super::config::PopulationConfig;
use super::population::Population;
use super::types::{Summary, Symbol};
use crate::error::Result;
use crate::random::rng_from_option;
use log::warn;
use rand::Rng;

/// Drives a [`Population`] until it converges.
///
/// # Usage
///
/// ```
/// use geneseq::ga::{EvolutionRunner, PopulationConfig};
///
/// let config = PopulationConfig::from_strs("01", "1011", 32).with_seed(42);
/// let last = EvolutionRunner::run(config, 8, |summary| println!("{summary}")).unwrap();
/// assert_eq!(last.best_fitness, 0);
/// assert_eq!(last.best, "1011");
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Builds, seeds and evolves a population until it converges.
    ///
    /// The RNG comes from `config.seed`. `on_generation` sees every
    /// generation's summary, the final converged one included, which is
    /// also returned. Runs forever if the population never converges.
    pub fn run<S, F>(config: PopulationConfig<S>, seed_count: usize, on_generation: F) -> Result<Summary>
    where
        S: Symbol,
        F: FnMut(&Summary),
    {
        let mut rng = rng_from_option(config.seed);
        let mut population = Population::new(config)?;
        population.seed(seed_count, &mut rng)?;
        Self::evolve_until_converged(&mut population, &mut rng, on_generation)
    }

    /// Advances a seeded population until it converges.
    pub fn evolve_until_converged<S, R, F>(
        population: &mut Population<S>,
        rng: &mut R,
        mut on_generation: F,
    ) -> Result<Summary>
    where
        S: Symbol,
        R: Rng,
        F: FnMut(&Summary),
    {
        while !population.has_converged() {
            on_generation(&population.summary(rng)?);
            population.advance(rng)?;
        }
        let last = population.summary(rng)?;
        on_generation(&last);
        Ok(last)
    }

    /// Like [`evolve_until_converged`](Self::evolve_until_converged) but
    /// gives up after `max_generations` advances.
    ///
    /// Returns `Ok(None)` if the cap was reached without convergence.
    pub fn evolve_with_limit<S, R, F>(
        population: &mut Population<S>,
        rng: &mut R,
        max_generations: usize,
        mut on_generation: F,
    ) -> Result<Option<Summary>>
    where
        S: Symbol,
        R: Rng,
        F: FnMut(&Summary),
    {
        let mut advanced = 0;
        while !population.has_converged() {
            if advanced >= max_generations {
                warn!(
                    "no convergence after {} generations (best fitness {:?})",
                    max_generations,
                    population.best_score()
                );
                return Ok(None);
            }
            on_generation(&population.summary(rng)?);
            population.advance(rng)?;
            advanced += 1;
        }
        let last = population.summary(rng)?;
        on_generation(&last);
        Ok(Some(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneseqError;
    use crate::random::create_rng;

    #[test]
    fn test_run_reports_every_generation() {
        let config = PopulationConfig::from_strs("012345678", "10300050", 64).with_seed(42);
        let mut seen = Vec::new();
        let last = EvolutionRunner::run(config, 2, |s| seen.push(s.clone())).unwrap();

        assert_eq!(last.best, "10300050");
        assert_eq!(last.best_fitness, 0);
        assert_eq!(seen.last(), Some(&last));
        for (i, summary) in seen.iter().enumerate() {
            assert_eq!(summary.generation, i + 1);
        }
        assert!(seen[..seen.len() - 1].iter().all(|s| s.best_fitness > 0));
    }

    #[test]
    fn test_run_same_seed_same_history() {
        let history = || {
            let config = PopulationConfig::from_strs("0123", "3210", 16).with_seed(3);
            let mut fitness = Vec::new();
            EvolutionRunner::run(config, 4, |s| fitness.push((s.size, s.best_fitness))).unwrap();
            fitness
        };
        assert_eq!(history(), history());
    }

    #[test]
    fn test_run_rejects_bad_config() {
        let config = PopulationConfig::from_strs("01", "", 16);
        let err = EvolutionRunner::run(config, 4, |_| {}).unwrap_err();
        assert_eq!(err, GeneseqError::EmptyTarget);
    }

    #[test]
    fn test_evolve_unseeded_fails() {
        let mut population = Population::new(PopulationConfig::from_strs("01", "1", 4)).unwrap();
        let mut rng = create_rng(42);
        let err = EvolutionRunner::evolve_until_converged(&mut population, &mut rng, |_| {})
            .unwrap_err();
        assert_eq!(err, GeneseqError::EmptyPopulation);
    }

    #[test]
    fn test_evolve_with_limit_zero() {
        let config = PopulationConfig::from_strs("012345678", "10300050", 64);
        let mut population = Population::new(config).unwrap();
        let mut rng = create_rng(42);
        population.seed(2, &mut rng).unwrap();

        let mut calls = 0;
        let result =
            EvolutionRunner::evolve_with_limit(&mut population, &mut rng, 0, |_| calls += 1)
                .unwrap();
        if population.has_converged() {
            assert!(result.is_some());
        } else {
            assert!(result.is_none());
            assert_eq!(calls, 0);
            assert_eq!(population.generation(), 1);
        }
    }

    #[test]
    fn test_evolve_with_limit_converges() {
        let config = PopulationConfig::from_strs("01", "1", 10);
        let mut population = Population::new(config).unwrap();
        let mut rng = create_rng(42);
        population.seed(10, &mut rng).unwrap();

        let last = EvolutionRunner::evolve_with_limit(&mut population, &mut rng, 50, |_| {})
            .unwrap()
            .expect("should converge within 50 generations");
        assert_eq!(last.best, "1");
    }
}
