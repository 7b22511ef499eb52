//! # Individual
//!
//! An `Individual` is one candidate string in the population: a fixed-length
//! sequence of characters drawn from an [`Alphabet`]. Individuals are values.
//! They are produced by initialization or breeding and never modified in place.
//!
//! ## Example
//!
//! ```rust
//! use genesis::alphabet::Alphabet;
//! use genesis::individual::Individual;
//! use genesis::rng::RandomNumberGenerator;
//!
//! let alphabet = Alphabet::default();
//! let mut rng = RandomNumberGenerator::from_seed(5);
//! let individual = Individual::random(12, &alphabet, &mut rng);
//!
//! assert_eq!(individual.len(), 12);
//! assert!(individual.chars().iter().all(|c| alphabet.contains(*c)));
//! ```

use std::fmt;

use crate::{alphabet::Alphabet, rng::RandomNumberGenerator};

/// A fixed-length candidate string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Individual {
    chars: Vec<char>,
}

impl Individual {
    pub fn new(chars: Vec<char>) -> Self {
        Self { chars }
    }

    /// Draws `length` characters independently and uniformly from `alphabet`.
    pub fn random(length: usize, alphabet: &Alphabet, rng: &mut RandomNumberGenerator) -> Self {
        let chars = (0..length).map(|_| *rng.pick(alphabet.chars())).collect();
        Self { chars }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl From<&str> for Individual {
    fn from(value: &str) -> Self {
        Self {
            chars: value.chars().collect(),
        }
    }
}

impl FromIterator<char> for Individual {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}
