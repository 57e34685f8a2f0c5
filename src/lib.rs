#![allow(clippy::many_single_char_names)]
#![warn(missing_docs)]

//! # Numeth
//!
//! Classic numerical methods for single-variable root finding, square linear
//! systems and interpolation, written entirely in Rust.
//!
//! Every method records the complete history of its computation (iterates and
//! their approximate errors, matrix snapshots, substitution formulas,
//! interpolation terms), so that the work can be inspected and shown step by
//! step, not just the final answer. Functions are given as text and parsed
//! into an expression tree that is evaluated safely and repeatedly.
//!
//! ## Algorithms
//!
//! Root finding:
//!
//! * [Bisection](algo::bisection) -- Robust bracketing method, halves the
//!   interval in each step.
//! * [False position](algo::false_position) -- Bracketing method using the
//!   secant through the interval ends. Usually faster than bisection.
//! * [Newton-Raphson](algo::newton_raphson) -- Fast open method using the
//!   (symbolic or numeric) derivative.
//! * [Secant](algo::secant) -- Open method approximating the derivative from
//!   the last two iterates.
//! * [Graphical](algo::graphical) -- Scan of an interval for the smallest
//!   residual, useful for initial guesses.
//!
//! Linear systems:
//!
//! * [Gauss elimination](linalg::gauss()) with row swaps on zero pivots.
//! * [LU decomposition](linalg::lu()) without pivoting.
//! * [Cholesky decomposition](linalg::cholesky()) for symmetric positive
//!   definite matrices.
//!
//! Interpolation:
//!
//! * [Lagrange polynomial](interp::lagrange()).
//! * [Linear spline](interp::linear_spline()).
//!
//! ## Problem
//!
//! The root finding problem is about finding a value of *x* such that
//!
//! ```text
//! f(x) = 0
//! ```
//!
//! for a real function *f* of one real variable. When it comes to code, the
//! function is any type that implements the [`Function`] trait. Most of the
//! time, it is an [`Expression`] parsed from text.
//!
//! ```rust
//! use numeth::Expression;
//!
//! let f = Expression::parse("x^3 - 2x - 5")?;
//! assert_eq!(f.eval(2.0), Ok(-1.0));
//!
//! // Derivative for Newton-Raphson method.
//! let df = f.derivative()?;
//! assert_eq!(df.eval(2.0), Ok(10.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Implementing the trait directly is also possible.
//!
//! ```rust
//! use numeth::{EvalError, Function};
//!
//! struct Kepler {
//!     e: f64,
//!     m: f64,
//! }
//!
//! impl Function for Kepler {
//!     fn eval(&self, x: f64) -> Result<f64, EvalError> {
//!         Ok(x - self.e * x.sin() - self.m)
//!     }
//! }
//! ```
//!
//! ## Solving
//!
//! The simplest way is [`find_root`], which goes all the way from the
//! expression text to the root and its trace.
//!
//! ```rust
//! use numeth::{find_root, RootMethod, RootParams};
//!
//! let solution = find_root(
//!     RootMethod::Bisection,
//!     "x^2 - 4",
//!     RootParams::Bracket { xl: 0.0, xr: 3.0 },
//! )?;
//!
//! assert!(solution.converged());
//! assert!((solution.root() - 2.0).abs() < 1e-5);
//!
//! for record in solution.trace() {
//!     println!("{}", record);
//! }
//! # Ok::<(), numeth::FindRootError>(())
//! ```
//!
//! For a full control over the iteration process, use the [`RootDriver`] with
//! any [`RootFinder`].
//!
//! ```rust
//! use numeth::algo::Secant;
//! use numeth::{Expression, RootDriver};
//!
//! let f = Expression::parse("cos(x) - x")?;
//! let mut driver = RootDriver::builder(&f, Secant::new(0.0, 1.0))
//!     .with_tolerance(1e-9)
//!     .build();
//!
//! while !driver.is_done() {
//!     let record = driver.next()?;
//!     println!("iter = {}\tea = {}", record.index(), record.error());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Linear systems and interpolation have their own entry points,
//! [`solve_linear_system`] and [`interpolate`].
//!
//! ## License
//!
//! Licensed under MIT.

pub mod algo;
pub mod analysis;
mod core;
pub mod derivatives;
pub mod driver;
pub mod expr;
pub mod interp;
pub mod linalg;

pub use core::*;
pub use driver::{find_root, FindRootError, RootDriver, RootMethod, RootParams, RootSolution};
pub use expr::{evaluate, DerivativeError, EvalError, Expression, ParseError};
pub use interp::{interpolate, InterpolationError, InterpolationMethod, PointSet};
pub use linalg::{solve_linear_system, LinearMethod, LinearSystemError};

#[cfg(feature = "testing")]
pub mod testing;

#[cfg(not(feature = "testing"))]
pub(crate) mod testing;

pub use nalgebra;
