//! # Fitness
//!
//! Scores individuals by how many positions already match the target.

use crate::individual::Individual;

/// Measures individuals against a fixed target.
///
/// The score is the number of positions `i` where `individual[i] == target[i]`,
/// so it always lies in `0..=target.len()` and equals `target.len()` only for
/// the target itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitnessEvaluator {
    target: Individual,
}

impl FitnessEvaluator {
    pub fn new(target: Individual) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Individual {
        &self.target
    }

    /// Length of the target, which is also the highest attainable score.
    pub fn max_score(&self) -> usize {
        self.target.len()
    }

    /// Counts positional matches between `individual` and the target.
    ///
    /// Callers guarantee equal lengths; extra positions on either side are
    /// not counted.
    pub fn measure(&self, individual: &Individual) -> usize {
        measure(individual, &self.target)
    }
}

/// Counts the positions at which `individual` and `target` agree.
pub fn measure(individual: &Individual, target: &Individual) -> usize {
    debug_assert_eq!(individual.len(), target.len());
    individual
        .chars()
        .iter()
        .zip(target.chars())
        .filter(|(a, b)| a == b)
        .count()
}
