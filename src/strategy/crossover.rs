//! # MutatingCrossover
//!
//! Uniform crossover with per-character random replacement.
use super::BreedStrategy;
use crate::{alphabet::Alphabet, individual::Individual, rng::RandomNumberGenerator};

/// # MutatingCrossover
///
/// Builds the offspring one position at a time. At each position a percentage
/// roll below the mutation rate draws a random character from the alphabet;
/// otherwise a fair coin picks the character of one parent.
///
/// A rate of `0` or below never mutates, and a rate of `100` or above always
/// mutates, ignoring both parents.
#[derive(Debug, Clone, Default)]
pub struct MutatingCrossover;

impl MutatingCrossover {
    pub fn new() -> Self {
        Self
    }
}

impl BreedStrategy for MutatingCrossover {
    fn mate(
        &self,
        first: &Individual,
        second: &Individual,
        mutation_rate: i32,
        alphabet: &Alphabet,
        rng: &mut RandomNumberGenerator,
    ) -> Individual {
        first
            .chars()
            .iter()
            .zip(second.chars())
            .map(|(a, b)| {
                if rng.percent() < mutation_rate {
                    *rng.pick(alphabet.chars())
                } else if rng.coin_flip() {
                    *a
                } else {
                    *b
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_crossover_without_mutation_is_identity() {
        let target = Individual::from("This phrase has 30 characters.");
        let mut rng = RandomNumberGenerator::from_seed(4);
        let strategy = MutatingCrossover::new();

        for _ in 0..20 {
            let child = strategy.mate(&target, &target, 0, &Alphabet::default(), &mut rng);
            assert_eq!(child, target);
        }
    }

    #[test]
    fn test_offspring_inherits_from_parents_without_mutation() {
        let first = Individual::from("aaaaaaaaaa");
        let second = Individual::from("bbbbbbbbbb");
        let mut rng = RandomNumberGenerator::from_seed(12);

        let child = MutatingCrossover.mate(&first, &second, 0, &Alphabet::default(), &mut rng);

        assert_eq!(child.len(), 10);
        assert!(child.chars().iter().all(|c| *c == 'a' || *c == 'b'));
    }

    #[test]
    fn test_coin_flip_mixes_both_parents() {
        let first = Individual::from(&*"a".repeat(64));
        let second = Individual::from(&*"b".repeat(64));
        let mut rng = RandomNumberGenerator::from_seed(99);

        let child = MutatingCrossover.mate(&first, &second, 0, &Alphabet::default(), &mut rng);

        assert!(child.chars().contains(&'a'));
        assert!(child.chars().contains(&'b'));
    }

    #[test]
    fn test_full_mutation_ignores_parents() {
        let parent = Individual::from("aaaaaaaaaaaaaaaaaaaa");
        let alphabet = Alphabet::new("xyz".chars()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(5);

        let child = MutatingCrossover.mate(&parent, &parent, 100, &alphabet, &mut rng);

        assert_eq!(child.len(), 20);
        assert!(child.chars().iter().all(|c| alphabet.contains(*c)));
    }

    #[test]
    fn test_out_of_range_rates_are_permissive() {
        let parent = Individual::from("abcabc");
        let alphabet = Alphabet::new("z".chars()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(6);

        let never = MutatingCrossover.mate(&parent, &parent, -25, &alphabet, &mut rng);
        assert_eq!(never, parent);

        let always = MutatingCrossover.mate(&parent, &parent, 250, &alphabet, &mut rng);
        assert_eq!(always, Individual::from("zzzzzz"));
    }

    #[test]
    fn test_mutated_characters_come_from_alphabet() {
        let first = Individual::from("hello world");
        let second = Individual::from("HELLO WORLD");
        let alphabet = Alphabet::default();
        let mut rng = RandomNumberGenerator::from_seed(31);

        for _ in 0..100 {
            let child = MutatingCrossover.mate(&first, &second, 50, &alphabet, &mut rng);
            assert_eq!(child.len(), first.len());
            assert!(child.chars().iter().all(|c| alphabet.contains(*c)));
        }
    }
}
