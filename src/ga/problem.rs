//! Trait-based operator definition.
//!
//! [`GeneticOperators`] is the alternative to composing closures by hand:
//! implement the factory, override whichever operations the problem needs,
//! and inherit the defaults for the rest.

use super::operators::{Operators, DEFAULT_MAX_GENERATIONS};
use super::selection::tournament_selection;
use super::types::Individual;
use rand::Rng;
use std::rc::Rc;

/// Defines the operators for one problem domain.
///
/// Only [`create_individual`](GeneticOperators::create_individual) is
/// required. Every other method has a default matching the free functions
/// in [`operators`](super::operators): size-3 tournament selection,
/// identity crossover and mutation, full replacement, and termination once
/// [`max_generations`](GeneticOperators::max_generations) is reached.
///
/// # Example
///
/// ```
/// use rand::Rng;
/// use u_evolve::ga::{GeneticOperators, GeneticSolver, Individual, SolverConfig};
///
/// #[derive(Clone)]
/// struct Guess(i32);
///
/// impl Individual for Guess {
///     type Fitness = i32;
///     fn fitness(&self) -> i32 { -(self.0 - 42).abs() }
/// }
///
/// struct FindFortyTwo;
///
/// impl GeneticOperators for FindFortyTwo {
///     type Individual = Guess;
///
///     fn create_individual<R: Rng>(&self, rng: &mut R) -> Guess {
///         Guess(rng.random_range(-100..100))
///     }
///
///     fn mutate<R: Rng>(&self, g: Guess, rng: &mut R) -> Guess {
///         Guess(g.0 + rng.random_range(-3..=3))
///     }
///
///     fn max_generations(&self) -> usize { 200 }
/// }
///
/// let config = SolverConfig::default()
///     .with_population_size(30)
///     .with_mutation_rate(0.5)
///     .with_seed(1);
/// let mut solver = GeneticSolver::from_problem(config, FindFortyTwo);
/// solver.solve_default();
/// assert!(solver.generation() <= 200);
/// ```
pub trait GeneticOperators {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a freshly initialized individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Selects two parents. Defaults to size-3 tournament selection.
    ///
    /// # Panics
    /// The default panics if `population` is empty.
    fn select<R: Rng>(
        &self,
        population: &[Self::Individual],
        rng: &mut R,
    ) -> (Self::Individual, Self::Individual) {
        tournament_selection(population, rng)
    }

    /// Produces offspring from two parents. Defaults to `[parent1, parent2]`.
    fn crossover<R: Rng>(
        &self,
        parent1: Self::Individual,
        parent2: Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1, parent2]
    }

    /// Returns a mutated individual. Defaults to identity.
    fn mutate<R: Rng>(&self, individual: Self::Individual, _rng: &mut R) -> Self::Individual {
        individual
    }

    /// Builds the next generation. Defaults to keeping only the offspring.
    fn replace(
        &self,
        _old: Vec<Self::Individual>,
        new: Vec<Self::Individual>,
    ) -> Vec<Self::Individual> {
        new
    }

    /// Generation bound used by the default
    /// [`should_terminate`](GeneticOperators::should_terminate).
    fn max_generations(&self) -> usize {
        DEFAULT_MAX_GENERATIONS
    }

    /// Termination predicate. Defaults to `generation >= max_generations()`.
    fn should_terminate(&self, generation: usize, _population: &[Self::Individual]) -> bool {
        generation >= self.max_generations()
    }
}

impl<I, R> Operators<I, R>
where
    I: Individual + 'static,
    R: Rng + 'static,
{
    /// Adapts a [`GeneticOperators`] implementation into an operator bundle.
    ///
    /// The problem is shared between the six closures, so it is never
    /// cloned.
    pub fn from_problem<P>(problem: P) -> Self
    where
        P: GeneticOperators<Individual = I> + 'static,
    {
        let problem = Rc::new(problem);

        let p = Rc::clone(&problem);
        let selection = move |population: &[I], rng: &mut R| p.select(population, rng);
        let p = Rc::clone(&problem);
        let crossover = move |a: I, b: I, rng: &mut R| p.crossover(a, b, rng);
        let p = Rc::clone(&problem);
        let mutation = move |individual: I, rng: &mut R| p.mutate(individual, rng);
        let p = Rc::clone(&problem);
        let replacement = move |old: Vec<I>, new: Vec<I>| p.replace(old, new);
        let p = Rc::clone(&problem);
        let termination =
            move |generation: usize, population: &[I]| p.should_terminate(generation, population);
        let factory = move |rng: &mut R| problem.create_individual(rng);

        Self {
            selection: Box::new(selection),
            crossover: Box::new(crossover),
            mutation: Box::new(mutation),
            replacement: Box::new(replacement),
            termination: Box::new(termination),
            factory: Box::new(factory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter(u32);

    impl Individual for Counter {
        type Fitness = u32;
        fn fitness(&self) -> u32 {
            self.0
        }
    }

    /// Uses every default.
    struct Plain;

    impl GeneticOperators for Plain {
        type Individual = Counter;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Counter {
            Counter(rng.random_range(0..10))
        }
    }

    /// Overrides every operation.
    struct Custom {
        limit: usize,
    }

    impl GeneticOperators for Custom {
        type Individual = Counter;

        fn create_individual<R: Rng>(&self, _rng: &mut R) -> Counter {
            Counter(1)
        }

        fn select<R: Rng>(&self, population: &[Counter], _rng: &mut R) -> (Counter, Counter) {
            (population[0].clone(), population[population.len() - 1].clone())
        }

        fn crossover<R: Rng>(&self, a: Counter, b: Counter, _rng: &mut R) -> Vec<Counter> {
            vec![Counter(a.0 + b.0)]
        }

        fn mutate<R: Rng>(&self, c: Counter, _rng: &mut R) -> Counter {
            Counter(c.0 * 10)
        }

        fn replace(&self, mut old: Vec<Counter>, new: Vec<Counter>) -> Vec<Counter> {
            old.extend(new);
            old
        }

        fn max_generations(&self) -> usize {
            self.limit
        }
    }

    #[test]
    fn test_trait_defaults() {
        let mut rng = StdRng::seed_from_u64(5);
        let pop = vec![Counter(1), Counter(2)];

        assert_eq!(Plain.crossover(Counter(1), Counter(2), &mut rng), pop);
        assert_eq!(Plain.mutate(Counter(4), &mut rng), Counter(4));
        assert_eq!(Plain.replace(vec![Counter(9)], pop.clone()), pop);
        assert_eq!(Plain.max_generations(), DEFAULT_MAX_GENERATIONS);
        assert!(!Plain.should_terminate(DEFAULT_MAX_GENERATIONS - 1, &pop));
        assert!(Plain.should_terminate(DEFAULT_MAX_GENERATIONS, &pop));

        let (a, b) = Plain.select(&pop, &mut rng);
        assert!(pop.contains(&a) && pop.contains(&b));
    }

    #[test]
    fn test_default_termination_follows_max_generations() {
        let custom = Custom { limit: 4 };
        assert!(!custom.should_terminate(3, &[]));
        assert!(custom.should_terminate(4, &[]));
    }

    #[test]
    fn test_from_problem_routes_every_operation() {
        let ops: Operators<Counter, StdRng> = Operators::from_problem(Custom { limit: 2 });
        let mut rng = StdRng::seed_from_u64(5);
        let pop = vec![Counter(3), Counter(7)];

        assert_eq!((ops.factory)(&mut rng), Counter(1));
        assert_eq!((ops.selection)(&pop, &mut rng), (Counter(3), Counter(7)));
        assert_eq!((ops.crossover)(Counter(3), Counter(7), &mut rng), vec![Counter(10)]);
        assert_eq!((ops.mutation)(Counter(2), &mut rng), Counter(20));
        assert_eq!(
            (ops.replacement)(vec![Counter(1)], vec![Counter(2)]),
            vec![Counter(1), Counter(2)]
        );
        assert!(!(ops.termination)(1, &pop));
        assert!((ops.termination)(2, &pop));
    }
}
