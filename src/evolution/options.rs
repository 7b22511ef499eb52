//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the tunable parameters of a run: the
//! population size, the per-character mutation rate, the number of survivors
//! kept each generation, and the number of elite breeders among them.
//!
//! ## Example
//!
//! ```rust
//! use genesis::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(1000, 5, 400, 200);
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 200);
//! ```
//!
//! ## Validation
//!
//! [`EvolutionOptions::validate`] checks that `popsize >= survivors >= top` and
//! that all three are at least 2, then rounds odd sizes down to the next even
//! number. Validation happens once, when a launcher is built.

use crate::error::{GeneticError, Result};

/// Controls what the launcher prints while it runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Prints the progress lines plus best/median/worst for every generation.
    Verbose,
    /// Prints the progress lines for generation 0 and each later improvement.
    Minimal,
    /// Prints nothing.
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionOptions {
    population_size: usize,
    /// Percent chance per character of a random mutation during breeding
    mutation_rate: i32,
    survivors: usize,
    top: usize,
    /// Stop after this many generations even if the target has not appeared
    max_generations: Option<usize>,
    log_level: LogLevel,
    /// Minimum population size for scoring in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(population_size: usize, mutation_rate: i32, survivors: usize, top: usize) -> Self {
        Self {
            population_size,
            mutation_rate,
            survivors,
            top,
            ..Self::default()
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_rate(&self) -> i32 {
        self.mutation_rate
    }

    pub fn get_survivors(&self) -> usize {
        self.survivors
    }

    pub fn get_top(&self) -> usize {
        self.top
    }

    pub fn get_max_generations(&self) -> Option<usize> {
        self.max_generations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns the minimum population size for scoring in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the mutation rate, in percent.
    pub fn set_mutation_rate(&mut self, mutation_rate: i32) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_survivors(&mut self, survivors: usize) {
        self.survivors = survivors;
    }

    pub fn set_top(&mut self, top: usize) {
        self.top = top;
    }

    /// Sets an upper bound on the number of generations. `None` runs until
    /// the target appears.
    pub fn set_max_generations(&mut self, max_generations: Option<usize>) {
        self.max_generations = max_generations;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks the sizing invariant and returns a copy with the population,
    /// survivor and top sizes forced even.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidSizing`] unless
    /// `population_size >= survivors >= top >= 2`.
    pub fn validate(&self) -> Result<Self> {
        self.check_ordering()?;
        if self.population_size < 2 || self.survivors < 2 || self.top < 2 {
            return Err(self.sizing_error());
        }

        Ok(Self {
            population_size: self.population_size - self.population_size % 2,
            survivors: self.survivors - self.survivors % 2,
            top: self.top - self.top % 2,
            ..self.clone()
        })
    }

    /// Checks `population_size >= survivors >= top` only. Launchers run this
    /// before looking at the target, and the minimum sizes after.
    pub(crate) fn check_ordering(&self) -> Result<()> {
        if self.population_size >= self.survivors && self.survivors >= self.top {
            Ok(())
        } else {
            Err(self.sizing_error())
        }
    }

    fn sizing_error(&self) -> GeneticError {
        GeneticError::InvalidSizing {
            popsize: self.population_size,
            survivors: self.survivors,
            top: self.top,
        }
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use genesis::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .population_size(1000)
    ///     .survivors(400)
    ///     .top(200)
    ///     .log_level(LogLevel::None)
    ///     .max_generations(10_000)
    ///     .build();
    ///
    /// assert_eq!(options.get_mutation_rate(), 5);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 200,
            mutation_rate: 5,
            survivors: 50,
            top: 20,
            max_generations: None,
            log_level: LogLevel::Minimal,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields fall back to [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    mutation_rate: Option<i32>,
    survivors: Option<usize>,
    top: Option<usize>,
    max_generations: Option<usize>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: i32) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn survivors(mut self, value: usize) -> Self {
        self.survivors = Some(value);
        self
    }

    pub fn top(mut self, value: usize) -> Self {
        self.top = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance. No validation happens here.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            survivors: self.survivors.unwrap_or(defaults.survivors),
            top: self.top.unwrap_or(defaults.top),
            max_generations: self.max_generations.or(defaults.max_generations),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}
