//! Testing problems and utilities useful for benchmarking, debugging and smoke
//! testing.
//!
//! [`root_problems`] is a set of equations with known roots together with
//! standard brackets and initial guesses, so that the methods are compared
//! fairly. Random matrix generators produce systems that the direct linear
//! solvers must handle.
//!
//! # References
//!
//! \[1\] [Numerical Methods for Engineers](https://www.mheducation.com/highered/product/numerical-methods-engineers-chapra-canale/M9781260232073.html)

#![allow(unused)]

use std::error::Error as StdError;

use nalgebra::{DMatrix, DVector};
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use thiserror::Error;

use crate::core::{Bracket, Differentiable, Function, RootFinder};
use crate::expr::{DerivativeError, EvalError, Expression, ParseError};

/// An equation with known root and standard starting points.
#[derive(Debug, Clone)]
pub struct RootProblem {
    name: &'static str,
    f: Expression,
    root: f64,
    bracket: (f64, f64),
    initial: f64,
    seeds: [f64; 2],
}

impl RootProblem {
    fn new(
        name: &'static str,
        root: f64,
        bracket: (f64, f64),
        initial: f64,
        seeds: [f64; 2],
    ) -> Result<Self, ParseError> {
        Ok(Self {
            name,
            f: Expression::parse(name)?,
            root,
            bracket,
            initial,
            seeds,
        })
    }

    /// The equation.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The root (rounded to the shown digits).
    pub fn root(&self) -> f64 {
        self.root
    }

    /// Brackets with a sign change for bracketing methods.
    pub fn brackets(&self) -> Vec<Bracket> {
        Bracket::try_from(self.bracket).into_iter().collect()
    }

    /// Initial guesses for Newton-Raphson method.
    pub fn initials(&self) -> Vec<f64> {
        vec![self.initial]
    }

    /// Seeds for the secant method.
    pub fn seeds(&self) -> [f64; 2] {
        self.seeds
    }

    /// Test if given point is a root, given the tolerance `eps` on `|f(x)|`.
    pub fn is_root(&self, x: f64, eps: f64) -> bool {
        self.f.eval(x).map_or(false, |fx| fx.abs() <= eps)
    }
}

impl Function for RootProblem {
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.f.eval(x)
    }
}

impl Differentiable for RootProblem {
    type Derivative = Expression;

    fn derivative(&self) -> Result<Self::Derivative, DerivativeError> {
        self.f.derivative()
    }
}

/// Standard set of root finding problems.
pub fn root_problems() -> Vec<RootProblem> {
    [
        RootProblem::new("x^2 - 4", 2.0, (0.0, 3.0), 3.0, [0.0, 3.0]),
        RootProblem::new(
            "x^3 - 2x - 5",
            2.0945514815,
            (2.0, 3.0),
            2.0,
            [2.0, 3.0],
        ),
        RootProblem::new("cos(x) - x", 0.7390851332, (0.0, 1.0), 1.0, [0.0, 1.0]),
        RootProblem::new("exp(-x) - x", 0.5671432904, (0.0, 1.0), 0.0, [0.0, 1.0]),
        RootProblem::new("ln(x) - 1", std::f64::consts::E, (1.0, 4.0), 1.5, [2.0, 3.0]),
    ]
    .into_iter()
    .filter_map(Result::ok)
    .collect()
}

/// Solving error of the testing driver (see [`solve`]).
#[derive(Debug, Error)]
pub enum TestingError<E: StdError + 'static> {
    /// Error of the root finder used.
    #[error("{0}")]
    Inner(#[from] E),
    /// Root finder did not terminate.
    #[error("root finder did not terminate")]
    Termination,
}

/// A simple root finder driver that can be used in tests.
///
/// Unlike [`RootDriver`](crate::RootDriver), it stops on the residual
/// `|f(x)| <= tolerance`.
pub fn solve<F: Function, A: RootFinder<F>>(
    f: &F,
    mut algo: A,
    max_iters: usize,
    tolerance: f64,
) -> Result<f64, TestingError<A::Error>>
where
    A::Error: StdError,
{
    for _ in 0..max_iters {
        let x = algo.solve_next(f)?.estimate.current();

        if f.eval(x).map_or(false, |fx| fx.abs() <= tolerance) {
            return Ok(x);
        }
    }

    Err(TestingError::Termination)
}

/// Random strictly diagonally dominant matrix with positive diagonal.
///
/// Such matrices are non-singular and need no pivoting.
pub fn diagonally_dominant<R: Rng + ?Sized>(n: usize, rng: &mut R) -> DMatrix<f64> {
    let dist = Uniform::new(-10.0_f64, 10.0);
    let mut a = DMatrix::from_fn(n, n, |_, _| dist.sample(&mut *rng));

    for i in 0..n {
        let off_diagonal: f64 = (0..n)
            .filter(|&j| j != i)
            .map(|j| a[(i, j)].abs())
            .sum();
        a[(i, i)] = off_diagonal + 1.0 + rng.gen::<f64>();
    }

    a
}

/// Random symmetric positive definite matrix.
pub fn symmetric_positive_definite<R: Rng + ?Sized>(n: usize, rng: &mut R) -> DMatrix<f64> {
    let dist = Uniform::new(-1.0_f64, 1.0);
    let m = DMatrix::from_fn(n, n, |_, _| dist.sample(&mut *rng));

    let mut a = &m * m.transpose();
    for i in 0..n {
        a[(i, i)] += n as f64;
    }

    a
}

/// Random vector with entries in `[-10, 10)`.
pub fn random_vector<R: Rng + ?Sized>(n: usize, rng: &mut R) -> DVector<f64> {
    let dist = Uniform::new(-10.0_f64, 10.0);
    DVector::from_fn(n, |_, _| dist.sample(&mut *rng))
}
