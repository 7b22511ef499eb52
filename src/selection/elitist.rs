use crate::individual::Individual;
use crate::population::Population;

/// A selection strategy that keeps the best ranked individuals.
///
/// The first `survivors` members of a ranked population are carried into the
/// next generation unchanged. The first `top` of those are the elite breeders,
/// who get an extra breeding round before the whole survivor pool breeds.
///
/// # Examples
///
/// ```
/// use genesis::fitness::FitnessEvaluator;
/// use genesis::individual::Individual;
/// use genesis::population::Population;
/// use genesis::selection::ElitistSelection;
///
/// let evaluator = FitnessEvaluator::new(Individual::from("abcd"));
/// let members = ["abcd", "abcx", "abxx", "axxx"].into_iter().map(Individual::from).collect();
/// let population = Population::from_members(members, &evaluator, 1000).unwrap();
///
/// let pools = ElitistSelection::new(4, 2).select(&population);
/// assert_eq!(pools.survivors.len(), 4);
/// assert_eq!(pools.top, vec![Individual::from("abcd"), Individual::from("abcx")]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElitistSelection {
    survivors: usize,
    top: usize,
}

/// The two parent pools one generation step breeds from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedingPools {
    /// Best `survivors` individuals, in rank order.
    pub survivors: Vec<Individual>,
    /// Best `top` individuals, in rank order. A prefix of `survivors`.
    pub top: Vec<Individual>,
}

impl ElitistSelection {
    /// Creates a new ElitistSelection strategy.
    ///
    /// # Arguments
    ///
    /// * `survivors` - How many ranked individuals survive the cull.
    /// * `top` - How many of those get the extra elite breeding round.
    pub fn new(survivors: usize, top: usize) -> Self {
        Self { survivors, top }
    }

    pub fn survivors(&self) -> usize {
        self.survivors
    }

    pub fn top(&self) -> usize {
        self.top
    }

    /// Splits off the survivor and top pools from a ranked population.
    ///
    /// Pool sizes are clamped to the population length.
    pub fn select(&self, population: &Population) -> BreedingPools {
        let members = population.members();
        let survivors = members[..self.survivors.min(members.len())].to_vec();
        let top = members[..self.top.min(members.len())].to_vec();
        BreedingPools { survivors, top }
    }
}
