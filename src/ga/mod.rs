//! Genetic algorithm engine.
//!
//! A generic, domain-agnostic evolutionary loop parameterized by five
//! swappable operators plus an individual factory. The engine never looks
//! inside an individual; it only moves individuals between operators.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution exposing a comparable fitness
//! - [`GeneticOperators`]: Problem definition with default operations
//!
//! # Key Types
//!
//! - [`SolverConfig`]: Population size and operator probabilities
//! - [`Operators`]: Boxed selection, crossover, mutation, replacement,
//!   termination and factory closures
//! - [`GeneticSolver`]: Owns the population and runs the loop
//!
//! # Generation Step
//!
//! 1. Stop immediately if the termination check already holds
//! 2. Select parent pairs and, with probability `crossover_rate`, recombine
//!    them until at least `population_size` offspring exist; keep the first
//!    `population_size`
//! 3. Mutate each offspring with probability `mutation_rate`
//! 4. Replace the population with `replacement(old, offspring)`
//! 5. Increment the generation counter and re-check termination
//!
//! # Submodules
//!
//! - [`operators`]: Operator types and default strategies
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod error;
pub mod operators;
mod problem;
mod selection;
mod solver;
mod types;

pub use config::SolverConfig;
pub use error::ConfigError;
pub use operators::{
    elitist_replacement, fixed_generation_termination, full_replacement, identity_crossover,
    identity_mutation, Operators, DEFAULT_MAX_GENERATIONS,
};
pub use problem::GeneticOperators;
pub use selection::{
    tournament_select, tournament_selection, tournament_selection_with, TOURNAMENT_SIZE,
};
pub use solver::GeneticSolver;
pub use types::{fittest, Fitness, Individual};
