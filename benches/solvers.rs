use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numeth::{
    algo::{Bisection, FalsePosition, NewtonRaphson, Secant},
    linalg::{cholesky, gauss, lu},
    testing::*,
    Function, RootFinder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAX_ITERS: usize = 1_000;
const TOLERANCE: f64 = 1e-12;

fn converges<F: Function, A: RootFinder<F>>(f: &F, algo: A) -> bool
where
    A::Error: std::error::Error + 'static,
{
    solve(f, algo, MAX_ITERS, TOLERANCE).is_ok()
}

fn bracketing(c: &mut Criterion) {
    for f in root_problems() {
        let bracket = f.brackets()[0];

        c.bench_function(&format!("bisection {}", f.name()), |b| {
            b.iter(|| assert!(converges(&f, Bisection::new(&f, bracket))))
        });

        c.bench_function(&format!("false position {}", f.name()), |b| {
            b.iter(|| assert!(converges(&f, FalsePosition::new(&f, bracket))))
        });
    }
}

fn open(c: &mut Criterion) {
    for f in root_problems() {
        let x0 = f.initials()[0];
        let [s0, s1] = f.seeds();

        c.bench_function(&format!("Newton-Raphson {}", f.name()), |b| {
            b.iter(|| match NewtonRaphson::new(&f, x0) {
                Ok(algo) => assert!(converges(&f, algo)),
                Err(error) => panic!("{}", error),
            })
        });

        c.bench_function(&format!("secant {}", f.name()), |b| {
            b.iter(|| assert!(converges(&f, Secant::new(s0, s1))))
        });
    }
}

fn linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear systems");
    let mut rng = StdRng::seed_from_u64(42);

    for n in [4, 16, 64] {
        let a = diagonally_dominant(n, &mut rng);
        let spd = symmetric_positive_definite(n, &mut rng);
        let b = random_vector(n, &mut rng);

        group.bench_with_input(BenchmarkId::new("gauss", n), &n, |bench, _| {
            bench.iter(|| assert!(gauss(&a, &b).is_ok()))
        });

        group.bench_with_input(BenchmarkId::new("lu", n), &n, |bench, _| {
            bench.iter(|| assert!(lu(&a, &b).is_ok()))
        });

        group.bench_with_input(BenchmarkId::new("cholesky", n), &n, |bench, _| {
            bench.iter(|| assert!(cholesky(&spd, &b).is_ok()))
        });
    }

    group.finish();
}

criterion_group!(solvers, bracketing, open, linear);
criterion_main!(solvers);
