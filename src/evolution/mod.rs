pub mod builder;
pub mod launcher;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use launcher::{EvolutionLauncher, EvolutionReport, Outcome};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
