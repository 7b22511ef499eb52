use tracing::{debug, info, warn};

use super::options::{EvolutionOptions, LogLevel};
use crate::{
    alphabet::Alphabet,
    error::{GeneticError, Result},
    fitness::FitnessEvaluator,
    individual::Individual,
    metrics::{ConvergenceHistory, GenerationStats, MetricsSink},
    population::Population,
    rng::RandomNumberGenerator,
    selection::ElitistSelection,
    strategy::{BreedStrategy, MutatingCrossover},
};

/// How a run ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The target appeared verbatim in the population.
    Converged,
    /// The configured generation limit was reached first.
    Exhausted,
}

/// Represents the result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionReport {
    pub outcome: Outcome,
    /// Number of generations bred, not counting the initial population.
    pub generations: usize,
    /// The highest ranked individual of the final population.
    pub best: Individual,
    pub best_score: usize,
    /// Best/median/worst for every generation, starting at generation 0.
    pub history: ConvergenceHistory,
}

impl EvolutionReport {
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }
}

/// Formats the console line for a reported generation.
pub(crate) fn progress_line(generation: usize, best: &Individual, score: usize) -> String {
    format!("Generation {}: {} | Score: {}", generation, best, score)
}

/// Evolves a population of random strings toward a target string.
///
/// The launcher owns the population and replaces it wholesale each
/// generation. All randomness comes from the single generator it was given.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy = MutatingCrossover>
where
    Strategy: BreedStrategy,
{
    strategy: Strategy,
    evaluator: FitnessEvaluator,
    alphabet: Alphabet,
    options: EvolutionOptions,
    selection: ElitistSelection,
    rng: RandomNumberGenerator,
    population: Population,
    generation: usize,
    history: ConvergenceHistory,
}

impl EvolutionLauncher<MutatingCrossover> {
    /// Creates a launcher over the default alphabet.
    ///
    /// # Errors
    ///
    /// See [`EvolutionLauncher::with_parts`].
    pub fn new(
        target: &str,
        options: EvolutionOptions,
        rng: RandomNumberGenerator,
    ) -> Result<Self> {
        Self::with_parts(target, Alphabet::default(), options, MutatingCrossover, rng)
    }
}

impl<Strategy> EvolutionLauncher<Strategy>
where
    Strategy: BreedStrategy,
{
    /// Validates the configuration and creates the initial population.
    ///
    /// Nothing is drawn from `rng` unless every check passes.
    ///
    /// # Errors
    ///
    /// Checks run in this order, and the first failure is returned:
    /// - [`GeneticError::InvalidSizing`] if `popsize >= survivors >= top` does not hold
    /// - [`GeneticError::EmptyTarget`] if `target` is empty
    /// - [`GeneticError::InvalidCharacters`] if `target` uses characters outside `alphabet`
    /// - [`GeneticError::InvalidSizing`] if any of the three sizes is below 2
    pub fn with_parts(
        target: &str,
        alphabet: Alphabet,
        options: EvolutionOptions,
        strategy: Strategy,
        mut rng: RandomNumberGenerator,
    ) -> Result<Self> {
        options.check_ordering()?;

        if target.is_empty() {
            return Err(GeneticError::EmptyTarget);
        }

        let invalid = alphabet.invalid_characters(target);
        if !invalid.is_empty() {
            return Err(GeneticError::InvalidCharacters(invalid));
        }

        let options = options.validate()?;
        debug!(
            target_len = target.chars().count(),
            popsize = options.get_population_size(),
            survivors = options.get_survivors(),
            top = options.get_top(),
            mutation_rate = options.get_mutation_rate(),
            "configuration accepted"
        );

        let evaluator = FitnessEvaluator::new(Individual::from(target));
        let population = Population::initialize(
            options.get_population_size(),
            &alphabet,
            &evaluator,
            &mut rng,
            options.get_parallel_threshold(),
        );
        let selection = ElitistSelection::new(options.get_survivors(), options.get_top());

        let mut launcher = Self {
            strategy,
            evaluator,
            alphabet,
            options,
            selection,
            rng,
            population,
            generation: 0,
            history: ConvergenceHistory::new(),
        };
        launcher.record();
        Ok(launcher)
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Number of generations bred so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn history(&self) -> &ConvergenceHistory {
        &self.history
    }

    /// The validated options, with sizes already forced even.
    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn target(&self) -> &Individual {
        self.evaluator.target()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Whether the target string is a member of the current population.
    pub fn has_converged(&self) -> bool {
        self.population.contains(self.evaluator.target())
    }

    /// Breeds one generation and replaces the population with it.
    ///
    /// The survivors are carried over unchanged. The top breeders are
    /// shuffled and paired off first, one offspring per pair. The whole
    /// survivor pool is then reshuffled and paired off as often as needed
    /// until the population is full again. Breeding stops as soon as the
    /// population reaches its size, so some survivors may never breed.
    pub fn generate(&mut self) -> &Population {
        let popsize = self.options.get_population_size();
        let pools = self.selection.select(&self.population);

        let mut next = pools.survivors.clone();
        next.reserve(popsize.saturating_sub(next.len()));

        let mut top = pools.top;
        self.rng.shuffle(&mut top);
        self.breed_pairs(&top, &mut next, popsize);

        let mut survivors = pools.survivors;
        while next.len() < popsize {
            self.rng.shuffle(&mut survivors);
            self.breed_pairs(&survivors, &mut next, popsize);
        }

        self.population =
            Population::ranked(next, &self.evaluator, self.options.get_parallel_threshold());
        self.generation += 1;
        self.record();
        &self.population
    }

    /// Appends one offspring per consecutive pair of `parents` until `next`
    /// holds `popsize` individuals. An unpaired last parent is skipped.
    fn breed_pairs(&mut self, parents: &[Individual], next: &mut Vec<Individual>, popsize: usize) {
        for pair in parents.chunks_exact(2) {
            if next.len() >= popsize {
                break;
            }
            next.push(self.strategy.mate(
                &pair[0],
                &pair[1],
                self.options.get_mutation_rate(),
                &self.alphabet,
                &mut self.rng,
            ));
        }
    }

    fn record(&mut self) {
        self.history.push(GenerationStats::new(
            self.generation,
            self.population.best_score(),
            self.population.median_score(),
            self.population.worst_score(),
        ));
        if let Some(stats) = self.history.last() {
            debug!(
                generation = stats.generation,
                best = stats.best,
                median = stats.median,
                worst = stats.worst,
                reported = stats.reported,
                "generation ranked"
            );
        }
    }

    /// The progress line for the latest generation, if it was marked as
    /// reported when recorded.
    pub(crate) fn progress_message(&self) -> Option<String> {
        self.history
            .last()
            .filter(|stats| stats.reported)
            .map(|stats| progress_line(stats.generation, self.population.best(), stats.best))
    }

    /// Prints the progress line for the latest generation if it qualifies.
    fn announce(&self) {
        let level = self.options.get_log_level();
        if level == LogLevel::None {
            return;
        }
        if let Some(line) = self.progress_message() {
            println!("{}", line);
        }
        if level == LogLevel::Verbose {
            if let Some(latest) = self.history.last() {
                println!(
                    "Generation {}: best {} | median {} | worst {}",
                    latest.generation, latest.best, latest.median, latest.worst
                );
            }
        }
    }

    /// Breeds generations until the target string appears in the population.
    ///
    /// With no generation limit configured this can run forever, e.g. when
    /// mutation is disabled and the population lacks a needed character.
    /// With a limit, the run stops once the generation counter reaches it and
    /// reports [`Outcome::Exhausted`].
    pub fn run(&mut self) -> EvolutionReport {
        if self.generation == 0 {
            self.announce();
        }

        let outcome = loop {
            if self.has_converged() {
                info!(
                    generation = self.generation,
                    phrase = %self.evaluator.target(),
                    "target reached"
                );
                break Outcome::Converged;
            }
            if let Some(limit) = self.options.get_max_generations() {
                if self.generation >= limit {
                    warn!(
                        generation = self.generation,
                        best = self.population.best_score(),
                        max_score = self.evaluator.max_score(),
                        "generation limit reached before convergence"
                    );
                    break Outcome::Exhausted;
                }
            }
            self.generate();
            self.announce();
        };

        EvolutionReport {
            outcome,
            generations: self.generation,
            best: self.population.best().clone(),
            best_score: self.population.best_score(),
            history: self.history.clone(),
        }
    }

    /// Runs to completion, then hands the recorded history to `sink`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the sink reports.
    pub fn run_with_sink<S: MetricsSink>(&mut self, sink: &mut S) -> Result<EvolutionReport> {
        let report = self.run();
        sink.consume(&report.history)?;
        Ok(report)
    }
}
