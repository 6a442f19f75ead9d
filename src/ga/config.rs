//! Run parameters.
//!
//! [`SolverConfig`] holds the numeric parameters that govern one
//! [`GeneticSolver`](super::GeneticSolver): population size and the two
//! operator application probabilities.

use super::error::ConfigError;

/// Configuration for the evolutionary loop.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert!((config.crossover_rate - 0.7).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_population_size(20)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Number of individuals in the population.
    ///
    /// A value of 0 is accepted and yields a permanently empty population.
    pub population_size: usize,

    /// Probability of applying crossover to a selected parent pair.
    ///
    /// When crossover is skipped, both parents pass through unchanged.
    pub crossover_rate: f64,

    /// Probability of applying mutation to each offspring.
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed from the thread-local generator.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick exploratory runs.
    ///
    /// - Population: 30, Crossover: 0.7, Mutation: 0.05
    pub fn fast() -> Self {
        Self {
            population_size: 30,
            mutation_rate: 0.05,
            ..Self::default()
        }
    }

    /// Preset balancing diversity and speed.
    ///
    /// - Population: 100, Crossover: 0.8, Mutation: 0.02
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.02,
            ..Self::default()
        }
    }

    /// Preset for larger searches where diversity matters more than speed.
    ///
    /// - Population: 250, Crossover: 0.9, Mutation: 0.01
    pub fn thorough() -> Self {
        Self {
            population_size: 250,
            crossover_rate: 0.9,
            mutation_rate: 0.01,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// The solver does not call this; out-of-range rates simply make the
    /// corresponding coin flip always or never succeed. Callers that want to
    /// reject such configurations up front can check here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        Ok(())
    }
}
