//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines how a single offspring is produced from
//! two parents. Breeding is the only source of new genetic material after
//! initialization.
pub mod crossover;

use std::fmt::Debug;

use crate::{alphabet::Alphabet, individual::Individual, rng::RandomNumberGenerator};

/// # BreedStrategy
///
/// Produces one offspring from two parents of equal length.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds one offspring from `first` and `second`.
    ///
    /// ## Parameters
    ///
    /// - `first`, `second`: The parents. Both have the target's length.
    /// - `mutation_rate`: Percent chance, per character, of drawing a fresh
    ///   character from `alphabet` instead of inheriting one. Values outside
    ///   `0..=100` are not rejected.
    /// - `alphabet`: Characters available to mutation.
    /// - `rng`: The run's random number generator.
    ///
    /// ## Returns
    ///
    /// An offspring with the same length as its parents.
    fn mate(
        &self,
        first: &Individual,
        second: &Individual,
        mutation_rate: i32,
        alphabet: &Alphabet,
        rng: &mut RandomNumberGenerator,
    ) -> Individual;
}

pub use crossover::MutatingCrossover;
