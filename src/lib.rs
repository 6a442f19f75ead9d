//! Domain-agnostic evolutionary computation engine.
//!
//! Provides a generic evolutionary loop driven by pluggable operators:
//!
//! - **Selection**: choose two parents (default: size-3 tournament)
//! - **Crossover**: recombine parents into any number of offspring
//!   (default: identity)
//! - **Mutation**: perturb one offspring (default: identity)
//! - **Replacement**: build the next generation from old and new
//!   (default: keep only the offspring)
//! - **Termination**: decide when to stop (default: fixed generation count)
//!
//! Randomness is injected: every randomized operator receives the solver's
//! random source, so seeded runs are reproducible.
//!
//! # Architecture
//!
//! The crate contains no problem encodings. Permutations, bitstrings,
//! real-valued vectors and their operators are defined by consumers and
//! plugged in either as closures ([`ga::Operators`]) or through the
//! [`ga::GeneticOperators`] trait.

pub mod ga;
