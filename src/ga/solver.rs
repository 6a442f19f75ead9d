//! Evolutionary loop.
//!
//! [`GeneticSolver`] owns the population and the generation counter and
//! drives them through selection → crossover → mutation → replacement,
//! one generation per [`step`](GeneticSolver::step).

use super::config::SolverConfig;
use super::operators::{Operators, DEFAULT_MAX_GENERATIONS};
use super::problem::GeneticOperators;
use super::types::{fittest, Individual};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Stateful evolutionary engine.
///
/// The loop has two logical states, running and terminated. It is
/// terminated whenever the termination check holds for the current
/// `(generation, population)`; in that state [`step`](Self::step) is a
/// no-op returning `true`. [`solve`](Self::solve) always restarts from a
/// freshly seeded population.
///
/// `config` and `operators` are public and may be changed between runs.
/// A new `population_size` takes effect at the next reset or step.
///
/// # Usage
///
/// ```
/// use rand::{rngs::StdRng, Rng};
/// use u_evolve::ga::{GeneticSolver, Individual, Operators, SolverConfig};
///
/// #[derive(Clone)]
/// struct Bit(bool);
/// impl Individual for Bit {
///     type Fitness = u8;
///     fn fitness(&self) -> u8 { self.0 as u8 }
/// }
///
/// let ops = Operators::new(|rng: &mut StdRng| Bit(rng.random_bool(0.5)))
///     .with_mutation(|b: Bit, _rng: &mut StdRng| Bit(!b.0));
/// let config = SolverConfig::default().with_population_size(6).with_seed(42);
///
/// let mut solver = GeneticSolver::new(config, ops);
/// let population = solver.solve(5);
/// assert_eq!(population.len(), 6);
/// assert_eq!(solver.generation(), 5);
/// ```
pub struct GeneticSolver<I, R = StdRng> {
    /// Run parameters.
    pub config: SolverConfig,

    /// Operators invoked by the loop.
    pub operators: Operators<I, R>,

    population: Vec<I>,
    generation: usize,
    rng: R,
}

impl<I: Individual> GeneticSolver<I, StdRng> {
    /// Creates a solver backed by [`StdRng`].
    ///
    /// Uses `config.seed` when set, otherwise a random seed.
    pub fn new(config: SolverConfig, operators: Operators<I, StdRng>) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(config, operators, StdRng::seed_from_u64(seed))
    }

    /// Creates a solver whose operators come from a [`GeneticOperators`]
    /// implementation.
    pub fn from_problem<P>(config: SolverConfig, problem: P) -> Self
    where
        I: 'static,
        P: GeneticOperators<Individual = I> + 'static,
    {
        Self::new(config, Operators::from_problem(problem))
    }
}

impl<I: Individual, R: Rng> GeneticSolver<I, R> {
    /// Creates a solver that draws all randomness from `rng`.
    ///
    /// The population is seeded immediately by calling the factory
    /// `population_size` times.
    pub fn with_rng(config: SolverConfig, operators: Operators<I, R>, rng: R) -> Self {
        let mut solver = Self {
            config,
            operators,
            population: Vec::new(),
            generation: 0,
            rng,
        };
        solver.population = solver.seed_population();
        solver
    }

    /// Current population.
    pub fn population(&self) -> &[I] {
        &self.population
    }

    /// Number of generation steps taken since the last reset.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// First individual with maximal fitness, if any.
    pub fn best(&self) -> Option<&I> {
        fittest(&self.population)
    }

    /// Evaluates the termination check against the current state.
    pub fn is_terminated(&self) -> bool {
        (self.operators.termination)(self.generation, &self.population)
    }

    /// Consumes the solver, returning the current population.
    pub fn into_population(self) -> Vec<I> {
        self.population
    }

    /// Reseeds the population from the factory and resets the generation
    /// counter to 0.
    pub fn reset(&mut self) {
        self.population = self.seed_population();
        self.generation = 0;
        debug!(
            population_size = self.population.len(),
            "population reseeded"
        );
    }

    /// Runs from a fresh population until the termination check holds or
    /// `max_generations` steps have been taken, returning the final
    /// population.
    ///
    /// Any prior progress is discarded. The returned population may differ
    /// in size from `population_size` if a custom replacement changes it.
    pub fn solve(&mut self, max_generations: usize) -> &[I] {
        self.reset();
        debug!(
            max_generations,
            crossover_rate = self.config.crossover_rate,
            mutation_rate = self.config.mutation_rate,
            "evolution started"
        );

        let mut terminated = false;
        while self.generation < max_generations {
            if self.is_terminated() || self.step() {
                terminated = true;
                break;
            }
        }

        debug!(
            generations = self.generation,
            population_size = self.population.len(),
            terminated,
            "evolution finished"
        );
        &self.population
    }

    /// [`solve`](Self::solve) bounded by [`DEFAULT_MAX_GENERATIONS`].
    pub fn solve_default(&mut self) -> &[I] {
        self.solve(DEFAULT_MAX_GENERATIONS)
    }

    /// Advances one generation. Returns `true` if evolution is now
    /// terminated.
    ///
    /// When the termination check already holds, nothing changes and
    /// `true` is returned immediately.
    ///
    /// # Panics
    /// Panics if offspring must be produced and the selection operator
    /// panics, which the default does on an empty population.
    pub fn step(&mut self) -> bool {
        if self.is_terminated() {
            return true;
        }

        let target = self.config.population_size;

        // Selection & crossover. Crossover may yield any number of
        // children, so accumulate and cut back to exactly `target`.
        let mut offspring: Vec<I> = Vec::with_capacity(target + 1);
        let mut pairs = 0usize;
        while offspring.len() < target {
            let (parent1, parent2) = (self.operators.selection)(&self.population, &mut self.rng);
            if self.rng.random_range(0.0..1.0) < self.config.crossover_rate {
                offspring.extend((self.operators.crossover)(parent1, parent2, &mut self.rng));
            } else {
                offspring.push(parent1);
                offspring.push(parent2);
            }
            pairs += 1;
        }
        let produced = offspring.len();
        offspring.truncate(target);

        // Mutation
        let mut mutated = Vec::with_capacity(offspring.len());
        let mut mutations = 0usize;
        for child in offspring {
            if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                mutated.push((self.operators.mutation)(child, &mut self.rng));
                mutations += 1;
            } else {
                mutated.push(child);
            }
        }

        // Replacement
        let old = std::mem::take(&mut self.population);
        self.population = (self.operators.replacement)(old, mutated);
        self.generation += 1;

        trace!(
            generation = self.generation,
            pairs,
            produced,
            mutations,
            population_size = self.population.len(),
            "generation complete"
        );

        self.is_terminated()
    }

    fn seed_population(&mut self) -> Vec<I> {
        let size = self.config.population_size;
        let mut population = Vec::with_capacity(size);
        for _ in 0..size {
            population.push((self.operators.factory)(&mut self.rng));
        }
        population
    }
}

impl<I: std::fmt::Debug, R> std::fmt::Debug for GeneticSolver<I, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneticSolver")
            .field("config", &self.config)
            .field("generation", &self.generation)
            .field("population", &self.population)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
