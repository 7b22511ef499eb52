pub mod elitist;

pub use elitist::{BreedingPools, ElitistSelection};
