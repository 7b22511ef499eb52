//! # Population
//!
//! A `Population` is the ranked set of individuals for one generation. It is
//! always sorted by descending fitness; ties keep their previous relative order.
//!
//! ## Example
//!
//! ```rust
//! use genesis::alphabet::Alphabet;
//! use genesis::fitness::FitnessEvaluator;
//! use genesis::individual::Individual;
//! use genesis::population::Population;
//! use genesis::rng::RandomNumberGenerator;
//!
//! let evaluator = FitnessEvaluator::new(Individual::from("hello"));
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let population = Population::initialize(10, &Alphabet::default(), &evaluator, &mut rng, 1000);
//!
//! assert_eq!(population.len(), 10);
//! assert!(population.scores().windows(2).all(|w| w[0] >= w[1]));
//! ```

use rayon::prelude::*;

use crate::{
    alphabet::Alphabet,
    error::{GeneticError, Result},
    fitness::FitnessEvaluator,
    individual::Individual,
    rng::RandomNumberGenerator,
};

/// Individuals ranked best-first, together with the score each was ranked by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    members: Vec<Individual>,
    scores: Vec<usize>,
}

impl Population {
    /// Creates `popsize` random individuals as long as the evaluator's target
    /// and ranks them.
    ///
    /// `popsize` is at least 2 for any validated configuration.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `popsize` is below 2. In release builds an
    /// empty population panics later, in [`Population::best`] and the other
    /// rank accessors.
    pub fn initialize(
        popsize: usize,
        alphabet: &Alphabet,
        evaluator: &FitnessEvaluator,
        rng: &mut RandomNumberGenerator,
        parallel_threshold: usize,
    ) -> Self {
        debug_assert!(
            popsize >= 2,
            "population needs at least two members, got {}",
            popsize
        );
        let length = evaluator.max_score();
        let members = (0..popsize)
            .map(|_| Individual::random(length, alphabet, rng))
            .collect();
        Self::ranked(members, evaluator, parallel_threshold)
    }

    /// Ranks an arbitrary, non-empty set of individuals.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyPopulation`] if `members` is empty.
    pub fn from_members(
        members: Vec<Individual>,
        evaluator: &FitnessEvaluator,
        parallel_threshold: usize,
    ) -> Result<Self> {
        if members.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        Ok(Self::ranked(members, evaluator, parallel_threshold))
    }

    /// Scores and stable-sorts `members` by descending fitness.
    ///
    /// Scoring is pure, so large populations are evaluated in parallel
    /// without affecting the result.
    pub(crate) fn ranked(
        members: Vec<Individual>,
        evaluator: &FitnessEvaluator,
        parallel_threshold: usize,
    ) -> Self {
        let scores: Vec<usize> = if members.len() >= parallel_threshold {
            members.par_iter().map(|m| evaluator.measure(m)).collect()
        } else {
            members.iter().map(|m| evaluator.measure(m)).collect()
        };

        let mut ranked: Vec<(usize, Individual)> = scores.into_iter().zip(members).collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        let (scores, members) = ranked.into_iter().unzip();
        Self { members, scores }
    }

    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Fitness of each member, in rank order.
    pub fn scores(&self) -> &[usize] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The highest ranked individual.
    ///
    /// # Panics
    ///
    /// Panics if the population is empty, as do the score accessors below.
    /// [`Population::from_members`] refuses empty input and
    /// [`Population::initialize`] asserts a minimum size.
    pub fn best(&self) -> &Individual {
        &self.members[0]
    }

    pub fn best_score(&self) -> usize {
        self.scores[0]
    }

    /// Fitness at rank `len / 2`.
    ///
    /// This is the score at the middle rank, not a statistical median. Even
    /// populations report the lower-ranked of the two middle members, with
    /// no averaging.
    pub fn median_score(&self) -> usize {
        self.scores[self.scores.len() / 2]
    }

    pub fn worst_score(&self) -> usize {
        self.scores[self.scores.len() - 1]
    }

    /// Whether an individual equal to `individual` is present.
    pub fn contains(&self, individual: &Individual) -> bool {
        self.members.contains(individual)
    }

    pub fn into_members(self) -> Vec<Individual> {
        self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator(target: &str) -> FitnessEvaluator {
        FitnessEvaluator::new(Individual::from(target))
    }

    #[test]
    fn test_initialize_size_length_and_order() {
        let evaluator = evaluator("genesis");
        let alphabet = Alphabet::default();
        let mut rng = RandomNumberGenerator::from_seed(21);

        let population = Population::initialize(50, &alphabet, &evaluator, &mut rng, 1000);

        assert_eq!(population.len(), 50);
        for member in population.members() {
            assert_eq!(member.len(), 7);
            assert!(member.chars().iter().all(|c| alphabet.contains(*c)));
        }
        assert!(population.scores().windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least two members")]
    fn test_initialize_rejects_empty_population() {
        let evaluator = evaluator("genesis");
        let mut rng = RandomNumberGenerator::from_seed(21);

        Population::initialize(0, &Alphabet::default(), &evaluator, &mut rng, 1000);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "at least two members")]
    fn test_initialize_rejects_single_member() {
        let evaluator = evaluator("genesis");
        let mut rng = RandomNumberGenerator::from_seed(21);

        Population::initialize(1, &Alphabet::default(), &evaluator, &mut rng, 1000);
    }

    #[test]
    fn test_parallel_ranking_matches_sequential() {
        let evaluator = evaluator("parallel");
        let alphabet = Alphabet::new("parlel".chars()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(8);
        let members: Vec<Individual> = (0..300)
            .map(|_| Individual::random(8, &alphabet, &mut rng))
            .collect();

        let sequential = Population::ranked(members.clone(), &evaluator, usize::MAX);
        let parallel = Population::ranked(members, &evaluator, 1);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_ranking_is_stable_for_ties() {
        let evaluator = evaluator("aaa");
        let members = vec![
            Individual::from("abc"),
            Individual::from("aaa"),
            Individual::from("acb"),
            Individual::from("bbb"),
        ];

        let population = Population::from_members(members, &evaluator, 1000).unwrap();
        let ranked: Vec<String> = population.members().iter().map(|m| m.to_string()).collect();

        assert_eq!(ranked, vec!["aaa", "abc", "acb", "bbb"]);
        assert_eq!(population.scores(), &[3, 1, 1, 0]);
    }

    #[test]
    fn test_rank_statistics() {
        let evaluator = evaluator("abcd");
        let members = vec![
            Individual::from("abcd"),
            Individual::from("abcx"),
            Individual::from("abxx"),
            Individual::from("axxx"),
        ];

        let population = Population::from_members(members, &evaluator, 1000).unwrap();

        assert_eq!(population.best_score(), 4);
        // Rank 4 / 2 = 2
        assert_eq!(population.median_score(), 2);
        assert_eq!(population.worst_score(), 1);
        assert_eq!(population.best(), &Individual::from("abcd"));
        assert!(population.contains(&Individual::from("abcd")));
        assert!(!population.contains(&Individual::from("dcba")));
    }

    #[test]
    fn test_from_members_rejects_empty() {
        let result = Population::from_members(Vec::new(), &evaluator("a"), 1000);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
