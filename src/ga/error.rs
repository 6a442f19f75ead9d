//! Configuration error types.

use thiserror::Error;

/// Reasons a [`SolverConfig`](super::SolverConfig) fails validation.
///
/// The solver itself never rejects a configuration; these errors are only
/// produced by the opt-in [`SolverConfig::validate`](super::SolverConfig::validate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
}
