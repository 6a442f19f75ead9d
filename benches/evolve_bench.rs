//! Criterion benchmarks for the evolutionary loop.
//!
//! Uses synthetic problems (OneMax, Sphere) to measure loop overhead
//! independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::Rng;
use u_evolve::ga::{
    elitist_replacement, fixed_generation_termination, GeneticOperators, GeneticSolver,
    Individual, Operators, SolverConfig,
};

// ===========================================================================
// OneMax via GeneticOperators
// ===========================================================================

#[derive(Clone)]
struct Bits(Vec<bool>);

impl Individual for Bits {
    type Fitness = usize;
    fn fitness(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }
}

struct OneMax {
    n: usize,
}

impl GeneticOperators for OneMax {
    type Individual = Bits;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Bits {
        Bits((0..self.n).map(|_| rng.random_bool(0.5)).collect())
    }

    fn crossover<R: Rng>(&self, p1: Bits, p2: Bits, rng: &mut R) -> Vec<Bits> {
        let point = rng.random_range(0..self.n);
        let (mut a, mut b) = (p1.0, p2.0);
        a[point..].swap_with_slice(&mut b[point..]);
        vec![Bits(a), Bits(b)]
    }

    fn mutate<R: Rng>(&self, mut ind: Bits, rng: &mut R) -> Bits {
        let i = rng.random_range(0..self.n);
        ind.0[i] = !ind.0[i];
        ind
    }

    fn max_generations(&self) -> usize {
        100
    }
}

fn bench_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("onemax");

    for &pop_size in &[50, 100, 200] {
        group.bench_with_input(
            BenchmarkId::new("pop", pop_size),
            &pop_size,
            |b, &pop_size| {
                let config = SolverConfig::default()
                    .with_population_size(pop_size)
                    .with_crossover_rate(0.9)
                    .with_mutation_rate(0.2)
                    .with_seed(42);
                let mut solver = GeneticSolver::from_problem(config, OneMax { n: 64 });
                b.iter(|| black_box(solver.solve_default().len()));
            },
        );
    }

    group.finish();
}

// ===========================================================================
// Sphere via closures
// ===========================================================================

#[derive(Clone)]
struct Point {
    genes: Vec<f64>,
}

impl Individual for Point {
    type Fitness = f64;
    fn fitness(&self) -> f64 {
        -self.genes.iter().map(|x| x * x).sum::<f64>()
    }
}

fn sphere_operators(dim: usize) -> Operators<Point, StdRng> {
    Operators::new(move |rng: &mut StdRng| Point {
        genes: (0..dim).map(|_| rng.random_range(-5.0..5.0)).collect(),
    })
    .with_crossover(|a: Point, b: Point, _rng: &mut StdRng| {
        let genes = a
            .genes
            .iter()
            .zip(&b.genes)
            .map(|(x, y)| (x + y) / 2.0)
            .collect();
        vec![Point { genes }]
    })
    .with_mutation(move |mut p: Point, rng: &mut StdRng| {
        let i = rng.random_range(0..dim);
        p.genes[i] += rng.random_range(-0.5..0.5);
        p
    })
    .with_replacement(elitist_replacement(2))
    .with_termination(fixed_generation_termination(100))
}

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere");

    for &dim in &[5, 20] {
        group.bench_with_input(BenchmarkId::new("dim", dim), &dim, |b, &dim| {
            let config = SolverConfig::default()
                .with_population_size(100)
                .with_mutation_rate(0.3)
                .with_seed(42);
            let mut solver = GeneticSolver::new(config, sphere_operators(dim));
            b.iter(|| black_box(solver.solve(100).len()));
        });
    }

    group.finish();
}

fn bench_single_step(c: &mut Criterion) {
    let config = SolverConfig::default()
        .with_population_size(200)
        .with_seed(7);
    let ops = sphere_operators(10).with_termination(|_, _| false);
    let mut solver = GeneticSolver::new(config, ops);

    c.bench_function("step/pop200_dim10", |b| b.iter(|| black_box(solver.step())));
}

criterion_group!(benches, bench_onemax, bench_sphere, bench_single_step);
criterion_main!(benches);
