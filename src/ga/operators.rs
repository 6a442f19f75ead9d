//! Operator function types and default strategies.
//!
//! Each of the five operations and the factory is carried as a boxed
//! closure so that any subset can be swapped independently. [`Operators`]
//! bundles them; [`Operators::new`] fills everything but the factory with
//! the defaults below.
//!
//! # Default Strategies
//!
//! | Operation   | Default                                        |
//! |-------------|------------------------------------------------|
//! | Selection   | [`tournament_selection`] (size 3, maximizing)  |
//! | Crossover   | [`identity_crossover`]: `[parent1, parent2]`   |
//! | Mutation    | [`identity_mutation`]                          |
//! | Replacement | [`full_replacement`]: discard the old population |
//! | Termination | [`fixed_generation_termination`] at [`DEFAULT_MAX_GENERATIONS`] |
//!
//! Randomized operations receive the solver's random source explicitly,
//! so a seeded solver reproduces its run exactly.

use super::selection::tournament_selection;
use super::types::Individual;
use rand::Rng;
use std::cmp::Ordering;

/// Generation bound used by the default termination check and
/// [`GeneticSolver::solve_default`](super::GeneticSolver::solve_default).
pub const DEFAULT_MAX_GENERATIONS: usize = 1000;

/// Chooses two parents from the population.
pub type SelectionOperator<I, R> = Box<dyn Fn(&[I], &mut R) -> (I, I)>;

/// Recombines two parents into zero or more offspring.
pub type CrossoverOperator<I, R> = Box<dyn Fn(I, I, &mut R) -> Vec<I>>;

/// Returns a possibly altered copy of one individual.
pub type MutationOperator<I, R> = Box<dyn Fn(I, &mut R) -> I>;

/// Combines the old population and the offspring into the next generation.
pub type ReplacementOperator<I> = Box<dyn Fn(Vec<I>, Vec<I>) -> Vec<I>>;

/// Decides from `(generation, population)` whether evolution stops.
pub type TerminationCheck<I> = Box<dyn Fn(usize, &[I]) -> bool>;

/// Creates one freshly initialized individual.
pub type Factory<I, R> = Box<dyn Fn(&mut R) -> I>;

// ============================================================================
// Default strategies
// ============================================================================

/// Returns both parents unchanged.
pub fn identity_crossover<I, R>(parent1: I, parent2: I, _rng: &mut R) -> Vec<I> {
    vec![parent1, parent2]
}

/// Returns the individual unchanged.
pub fn identity_mutation<I, R>(individual: I, _rng: &mut R) -> I {
    individual
}

/// Discards the old population and keeps the offspring as-is.
pub fn full_replacement<I>(_old: Vec<I>, new: Vec<I>) -> Vec<I> {
    new
}

/// Stops once `generation >= max_generations`.
pub fn fixed_generation_termination<I>(
    max_generations: usize,
) -> impl Fn(usize, &[I]) -> bool + Clone {
    move |generation: usize, _population: &[I]| generation >= max_generations
}

/// Replacement that carries the best `elite_count` individuals of the old
/// population over into the offspring.
///
/// Elites overwrite the weakest offspring, best elite into the weakest
/// slot, and only where the elite is strictly fitter. The result has the
/// same length as the offspring and its best fitness is never lower than
/// the old population's.
pub fn elitist_replacement<I: Individual>(
    elite_count: usize,
) -> impl Fn(Vec<I>, Vec<I>) -> Vec<I> + Clone {
    move |old: Vec<I>, mut new: Vec<I>| {
        let keep = elite_count.min(old.len()).min(new.len());
        if keep == 0 {
            return new;
        }

        // Old population, best first.
        let mut elites: Vec<usize> = (0..old.len()).collect();
        elites.sort_by(|&a, &b| compare_fitness(&old[b], &old[a]));

        // Offspring, weakest first.
        let mut slots: Vec<usize> = (0..new.len()).collect();
        slots.sort_by(|&a, &b| compare_fitness(&new[a], &new[b]));

        for (&slot, &elite) in slots.iter().zip(elites.iter()).take(keep) {
            if old[elite].fitness() > new[slot].fitness() {
                new[slot] = old[elite].clone();
            }
        }
        new
    }
}

fn compare_fitness<I: Individual>(a: &I, b: &I) -> Ordering {
    a.fitness()
        .partial_cmp(&b.fitness())
        .unwrap_or(Ordering::Equal)
}

// ============================================================================
// Operator bundle
// ============================================================================

/// The complete set of operators driving a [`GeneticSolver`](super::GeneticSolver).
///
/// Fields are public so that any operator can be replaced between runs.
///
/// ```
/// use rand::{rngs::StdRng, Rng};
/// use u_evolve::ga::{fixed_generation_termination, Individual, Operators};
///
/// #[derive(Clone)]
/// struct Value(f64);
/// impl Individual for Value {
///     type Fitness = f64;
///     fn fitness(&self) -> f64 { self.0 }
/// }
///
/// let ops = Operators::new(|rng: &mut StdRng| Value(rng.random_range(0.0..1.0)))
///     .with_mutation(|v: Value, rng: &mut StdRng| Value(v.0 + rng.random_range(-0.1..0.1)))
///     .with_termination(fixed_generation_termination(50));
/// ```
pub struct Operators<I, R> {
    /// Parent-pair selection.
    pub selection: SelectionOperator<I, R>,
    /// Offspring production from a parent pair.
    pub crossover: CrossoverOperator<I, R>,
    /// Per-offspring perturbation.
    pub mutation: MutationOperator<I, R>,
    /// Next-generation assembly from `(old, offspring)`.
    pub replacement: ReplacementOperator<I>,
    /// Stopping predicate over `(generation, population)`.
    pub termination: TerminationCheck<I>,
    /// Individual factory used to seed the population.
    pub factory: Factory<I, R>,
}

impl<I, R> Operators<I, R>
where
    I: Individual + 'static,
    R: Rng + 'static,
{
    /// Creates a bundle with the given factory and default operators.
    pub fn new(factory: impl Fn(&mut R) -> I + 'static) -> Self {
        Self {
            selection: Box::new(tournament_selection::<I, R>),
            crossover: Box::new(identity_crossover::<I, R>),
            mutation: Box::new(identity_mutation::<I, R>),
            replacement: Box::new(full_replacement::<I>),
            termination: Box::new(fixed_generation_termination::<I>(DEFAULT_MAX_GENERATIONS)),
            factory: Box::new(factory),
        }
    }

    /// Replaces the selection operator.
    pub fn with_selection(mut self, selection: impl Fn(&[I], &mut R) -> (I, I) + 'static) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Replaces the crossover operator.
    pub fn with_crossover(mut self, crossover: impl Fn(I, I, &mut R) -> Vec<I> + 'static) -> Self {
        self.crossover = Box::new(crossover);
        self
    }

    /// Replaces the mutation operator.
    pub fn with_mutation(mut self, mutation: impl Fn(I, &mut R) -> I + 'static) -> Self {
        self.mutation = Box::new(mutation);
        self
    }

    /// Replaces the replacement operator.
    pub fn with_replacement(
        mut self,
        replacement: impl Fn(Vec<I>, Vec<I>) -> Vec<I> + 'static,
    ) -> Self {
        self.replacement = Box::new(replacement);
        self
    }

    /// Replaces the termination check.
    pub fn with_termination(mut self, termination: impl Fn(usize, &[I]) -> bool + 'static) -> Self {
        self.termination = Box::new(termination);
        self
    }

    /// Replaces the individual factory.
    pub fn with_factory(mut self, factory: impl Fn(&mut R) -> I + 'static) -> Self {
        self.factory = Box::new(factory);
        self
    }
}

impl<I, R> std::fmt::Debug for Operators<I, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operators").finish_non_exhaustive()
    }
}
