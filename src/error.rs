//! # Error Types
//!
//! This module defines the error type for the genesis library. Configuration
//! errors are raised while a run is being constructed; once a launcher exists,
//! the generation loop itself cannot fail. Only metrics sinks can fail later.
//!
//! ## Examples
//!
//! Handling a rejected configuration:
//!
//! ```rust
//! use genesis::error::GeneticError;
//! use genesis::evolution::{EvolutionLauncher, EvolutionOptions};
//! use genesis::rng::RandomNumberGenerator;
//!
//! let result = EvolutionLauncher::new("", EvolutionOptions::default(), RandomNumberGenerator::from_seed(7));
//! assert!(matches!(result, Err(GeneticError::EmptyTarget)));
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genesis::error::{GeneticError, OptionExt};
//!
//! fn first_char(target: &str) -> genesis::error::Result<char> {
//!     target.chars().next().ok_or_else_genetic(|| GeneticError::EmptyTarget)
//! }
//!
//! assert!(first_char("").is_err());
//! ```

use std::collections::BTreeSet;

use thiserror::Error;

/// Represents errors that can occur in the genesis library.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// The population, survivor and top sizes do not satisfy
    /// `popsize >= survivors >= top >= 2`.
    #[error(
        "Invalid sizing: top must be a subset of survivors and survivors a subset of popsize, \
         all at least 2 (popsize = {popsize}, survivors = {survivors}, top = {top})"
    )]
    InvalidSizing {
        popsize: usize,
        survivors: usize,
        top: usize,
    },

    /// The target phrase has zero length.
    #[error("No target provided")]
    EmptyTarget,

    /// The target contains characters that are not part of the alphabet.
    #[error("Invalid characters: {}", format_characters(.0))]
    InvalidCharacters(BTreeSet<char>),

    /// The alphabet has no characters to draw from.
    #[error("Alphabet must contain at least one character")]
    EmptyAlphabet,

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a metrics sink fails to write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_characters(chars: &BTreeSet<char>) -> String {
    let quoted: Vec<String> = chars.iter().map(|c| format!("{:?}", c)).collect();
    format!("{{{}}}", quoted.join(", "))
}

/// A specialized Result type for genesis operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
