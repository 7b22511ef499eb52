use crate::{
    alphabet::Alphabet,
    error::{GeneticError, OptionExt, Result},
    rng::RandomNumberGenerator,
    strategy::{BreedStrategy, MutatingCrossover},
};

use super::{EvolutionLauncher, EvolutionOptions};

/// Fluent construction of an [`EvolutionLauncher`].
///
/// Only the target is required. The alphabet, options and strategy fall back
/// to their defaults, and the generator to an entropy-seeded one.
///
/// ```rust
/// use genesis::evolution::{EvolutionLauncherBuilder, EvolutionOptions, LogLevel};
///
/// let launcher = EvolutionLauncherBuilder::new()
///     .with_target("shortr=fastr")
///     .with_options(EvolutionOptions::builder().log_level(LogLevel::None).build())
///     .with_seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(launcher.population().len(), 200);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncherBuilder<B = MutatingCrossover>
where
    B: BreedStrategy,
{
    target: Option<String>,
    alphabet: Option<Alphabet>,
    options: Option<EvolutionOptions>,
    strategy: Option<B>,
    rng: Option<RandomNumberGenerator>,
}

impl EvolutionLauncherBuilder<MutatingCrossover> {
    pub fn new() -> Self {
        Self {
            target: None,
            alphabet: None,
            options: None,
            strategy: None,
            rng: None,
        }
    }
}

impl<B> EvolutionLauncherBuilder<B>
where
    B: BreedStrategy + Default,
{
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Shorthand for `with_rng(RandomNumberGenerator::from_seed(seed))`.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(RandomNumberGenerator::from_seed(seed))
    }

    pub fn with_strategy<S>(self, strategy: S) -> EvolutionLauncherBuilder<S>
    where
        S: BreedStrategy + Default,
    {
        EvolutionLauncherBuilder {
            target: self.target,
            alphabet: self.alphabet,
            options: self.options,
            strategy: Some(strategy),
            rng: self.rng,
        }
    }

    /// Validates everything and creates the initial population.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyTarget`] if no target was given, and
    /// otherwise any error of [`EvolutionLauncher::with_parts`].
    pub fn build(self) -> Result<EvolutionLauncher<B>> {
        let options = self.options.unwrap_or_default();
        // Sizing mistakes take precedence over a missing target
        options.check_ordering()?;
        let target = self.target.ok_or_else_genetic(|| GeneticError::EmptyTarget)?;

        EvolutionLauncher::with_parts(
            &target,
            self.alphabet.unwrap_or_default(),
            options,
            self.strategy.unwrap_or_default(),
            self.rng.unwrap_or_default(),
        )
    }
}

impl Default for EvolutionLauncherBuilder<MutatingCrossover> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::LogLevel;

    fn quiet() -> EvolutionOptions {
        EvolutionOptions::builder()
            .population_size(20)
            .survivors(6)
            .top(2)
            .log_level(LogLevel::None)
            .build()
    }

    #[test]
    fn test_missing_target() {
        let result = EvolutionLauncherBuilder::new().with_options(quiet()).build();
        assert!(matches!(result, Err(GeneticError::EmptyTarget)));
    }

    #[test]
    fn test_sizing_checked_before_missing_target() {
        let options = EvolutionOptions::new(3, 5, 5, 1);
        let result = EvolutionLauncherBuilder::new().with_options(options).build();
        assert!(matches!(result, Err(GeneticError::InvalidSizing { .. })));
    }

    #[test]
    fn test_custom_alphabet_rejects_foreign_target() {
        let result = EvolutionLauncherBuilder::new()
            .with_target("abc")
            .with_alphabet(Alphabet::new("ab".chars()).unwrap())
            .with_options(quiet())
            .with_seed(1)
            .build();

        match result {
            Err(GeneticError::InvalidCharacters(chars)) => {
                assert_eq!(chars.into_iter().collect::<Vec<_>>(), vec!['c']);
            }
            other => panic!("Expected InvalidCharacters error, got {:?}", other),
        }
    }

    #[test]
    fn test_same_seed_same_initial_population() {
        let build = || {
            EvolutionLauncherBuilder::new()
                .with_target("seeded")
                .with_options(quiet())
                .with_seed(77)
                .with_strategy(MutatingCrossover::new())
                .build()
                .unwrap()
        };

        assert_eq!(build().population(), build().population());
    }
}
