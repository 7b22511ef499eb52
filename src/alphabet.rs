//! # Alphabet
//!
//! The ordered set of characters individuals are drawn from. An alphabet is
//! supplied once per run and never changes afterwards.

use std::collections::BTreeSet;

use crate::error::{GeneticError, Result};

/// Characters used when no alphabet is supplied. The trailing `'` repeats an
/// earlier entry, giving it twice the draw weight of any other character.
const DEFAULT_CHARACTERS: &[char] = &[
    ' ', 'q', 'w', 'e', 'r', 't', 'y', 'u', 'i', 'o', 'p', 'a', 's', 'd', 'f', 'g', 'h', 'j', 'k',
    'l', 'z', 'x', 'c', 'v', 'b', 'n', 'm', 'Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P', 'A',
    'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'Z', 'X', 'C', 'V', 'B', 'N', 'M', '!', '@', '#', '$',
    '%', '^', '&', '*', '(', ')', '-', '_', '=', '+', '[', ']', '{', '}', ';', '\'', ',', '.', '/',
    ':', '"', '<', '>', '?', '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '\'',
];

/// An ordered, non-empty list of allowed characters.
///
/// Order matters only in that random draws index into it, so two runs with the
/// same seed and the same alphabet see the same characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Creates an alphabet from the given characters.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::EmptyAlphabet`] if `chars` is empty.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(GeneticError::EmptyAlphabet);
        }
        Ok(Self { chars })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed alphabet.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Returns the characters of `text` that are not part of this alphabet.
    pub fn invalid_characters(&self, text: &str) -> BTreeSet<char> {
        text.chars().filter(|c| !self.contains(*c)).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_CHARACTERS.to_vec(),
        }
    }
}
