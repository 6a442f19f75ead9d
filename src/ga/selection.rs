//! Tournament selection.
//!
//! The default parent-selection strategy: draw `k` individuals uniformly at
//! random **with replacement** and keep the fittest. Repeating the draw
//! independently yields a parent pair, which may contain the same
//! individual twice.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::Rng;

/// Tournament size used by [`tournament_selection`].
pub const TOURNAMENT_SIZE: usize = 3;

/// Picks one individual by tournament of size `k`.
///
/// Higher fitness wins. On ties the first-drawn candidate is kept.
/// `k` is clamped to at least 1; `k = 1` is uniform random selection.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament_select<'a, I: Individual, R: Rng>(
    population: &'a [I],
    k: usize,
    rng: &mut R,
) -> &'a I {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let k = k.max(1);
    let n = population.len();

    let mut best = &population[rng.random_range(0..n)];
    for _ in 1..k {
        let candidate = &population[rng.random_range(0..n)];
        if candidate.fitness() > best.fitness() {
            best = candidate;
        }
    }
    best
}

/// Default selection operator: two independent size-3 tournaments.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament_selection<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> (I, I) {
    let first = tournament_select(population, TOURNAMENT_SIZE, rng).clone();
    let second = tournament_select(population, TOURNAMENT_SIZE, rng).clone();
    (first, second)
}

/// Builds a pair-selection operator with a custom tournament size.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_evolve::ga::{tournament_selection_with, Individual};
///
/// #[derive(Clone)]
/// struct Score(u32);
/// impl Individual for Score {
///     type Fitness = u32;
///     fn fitness(&self) -> u32 { self.0 }
/// }
///
/// let population = vec![Score(1), Score(4)];
/// let select = tournament_selection_with::<Score, StdRng>(5);
/// let mut rng = StdRng::seed_from_u64(1);
/// let (a, b) = select(population.as_slice(), &mut rng);
/// assert!(a.0 <= 4 && b.0 <= 4);
/// ```
pub fn tournament_selection_with<I: Individual, R: Rng>(
    k: usize,
) -> impl Fn(&[I], &mut R) -> (I, I) + Clone {
    move |population: &[I], rng: &mut R| {
        let first = tournament_select(population, k, rng).clone();
        let second = tournament_select(population, k, rng).clone();
        (first, second)
    }
}
