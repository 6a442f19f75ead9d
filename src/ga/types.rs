//! Core trait definitions for candidate solutions.
//!
//! [`Individual`] is the only capability the engine asks of a candidate:
//! report a comparable fitness. Everything else about the representation is
//! opaque and handled by caller-supplied operators.

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// **Higher fitness is considered better** (maximization). For minimization
/// problems, negate the objective or use a wrapper type with reversed order.
///
/// Built-in implementations exist for the primitive float and integer types.
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

macro_rules! impl_integer_fitness {
    ($($t:ty),*) => {
        $(
            impl Fitness for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_fitness!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// A candidate solution in the population.
///
/// Individuals are treated as immutable values: operators receive them by
/// value or reference and return new individuals. The fitness is computed
/// on demand and is only consulted by fitness-aware operators such as the
/// default tournament selection.
///
/// # Implementing
///
/// ```
/// use u_evolve::ga::Individual;
///
/// #[derive(Clone)]
/// struct Bits(Vec<bool>);
///
/// impl Individual for Bits {
///     type Fitness = usize;
///     fn fitness(&self) -> usize {
///         self.0.iter().filter(|&&b| b).count()
///     }
/// }
/// ```
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the fitness of this individual.
    fn fitness(&self) -> Self::Fitness;
}

/// Returns the first individual with maximal fitness, or `None` if empty.
///
/// Ties keep the earliest candidate. Incomparable values (e.g. NaN) never
/// displace the current best.
pub fn fittest<I: Individual>(population: &[I]) -> Option<&I> {
    let (first, rest) = population.split_first()?;
    let mut best = first;
    for candidate in rest {
        if candidate.fitness() > best.fitness() {
            best = candidate;
        }
    }
    Some(best)
}
