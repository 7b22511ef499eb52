pub mod alphabet;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod individual;
pub mod metrics;
pub mod population;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionReport, LogLevel, Outcome};

/// Evolves a population toward `target` over the default alphabet until the
/// target appears, or until `options` caps the number of generations.
///
/// Uses an entropy-seeded generator; build an [`EvolutionLauncher`] with a
/// seeded [`rng::RandomNumberGenerator`] for reproducible runs.
///
/// ```rust,no_run
/// use genesis::{genesis, EvolutionOptions};
///
/// let report = genesis("This phrase has 30 characters.", EvolutionOptions::default()).unwrap();
/// println!("Converged after {} generations", report.generations);
/// ```
pub fn genesis(target: &str, options: EvolutionOptions) -> Result<EvolutionReport> {
    let mut launcher = EvolutionLauncher::new(target, options, rng::RandomNumberGenerator::new())?;
    Ok(launcher.run())
}
