//! High-level API for root finding.
//!
//! This module contains the [`RootDriver`] that encapsulates the iterative
//! process of a [`RootFinder`], records the trace and applies the stopping
//! rule, and the [`find_root`] function that goes all the way from the
//! expression text to the [`RootSolution`].
//!
//! The simplest way of using the driver is to initialize it with the
//! defaults:
//!
//! ```rust
//! use numeth::algo::Bisection;
//! use numeth::{Bracket, Expression, RootDriver};
//!
//! let f = Expression::parse("x^2 - 4").unwrap();
//! let algo = Bisection::new(&f, Bracket::new(0.0, 3.0).unwrap());
//!
//! let mut driver = RootDriver::new(&f, algo);
//! ```
//!
//! If you need to specify additional settings, use the builder:
//!
//! ```rust
//! use numeth::algo::{Bisection, Secant};
//! use numeth::{Bracket, Expression, RootDriver};
//!
//! let f = Expression::parse("x^2 - 4").unwrap();
//! let algo = Bisection::new(&f, Bracket::new(0.0, 3.0).unwrap());
//!
//! let mut driver = RootDriver::builder(&f, algo)
//!     .with_tolerance(1e-9)
//!     .with_max_iters(100)
//!     .with_algo(|_| Secant::new(0.0, 3.0))
//!     .build();
//! ```
//!
//! Once you have the driver, you can use it to find the root:
//!
//! ```rust
//! # use numeth::algo::Bisection;
//! # use numeth::{Bracket, Expression, RootDriver};
//! #
//! # let f = Expression::parse("x^2 - 4").unwrap();
//! # let algo = Bisection::new(&f, Bracket::new(0.0, 3.0).unwrap());
//! # let mut driver = RootDriver::new(&f, algo);
//! #
//! let outcome = driver.find().expect("root finder encountered an error");
//!
//! if outcome.converged {
//!     println!("root = {}", outcome.root);
//! } else {
//!     println!("maximum number of iterations exceeded");
//! }
//!
//! for record in driver.trace() {
//!     println!("{}", record);
//! }
//! ```
//!
//! If you need more control over the iteration process, you can do the
//! iterations manually:
//!
//! ```rust
//! # use numeth::algo::Bisection;
//! # use numeth::{Bracket, Expression, RootDriver};
//! #
//! # let f = Expression::parse("x^2 - 4").unwrap();
//! # let algo = Bisection::new(&f, Bracket::new(0.0, 3.0).unwrap());
//! # let mut driver = RootDriver::new(&f, algo);
//! #
//! while !driver.is_done() {
//!     let record = driver.next().expect("no root finder error");
//!     // ...
//! }
//! ```

use std::fmt;

use getset::{CopyGetters, Getters};
use log::debug;
use thiserror::Error;

use crate::algo::bisection::{Bisection, BisectionError};
use crate::algo::false_position::{FalsePosition, FalsePositionError};
use crate::algo::graphical::{Graphical, GraphicalError};
use crate::algo::newton_raphson::{NewtonRaphson, NewtonRaphsonError};
use crate::algo::secant::{Secant, SecantError};
use crate::core::{
    Bracket, BracketError, Function, IterationRecord, RootFinder, MAX_ITERS, TOLERANCE,
};
use crate::expr::{Expression, ParseError};

/// Builder for the [`RootDriver`].
pub struct RootBuilder<'a, F, A> {
    f: &'a F,
    algo: A,
    tolerance: f64,
    max_iters: usize,
}

impl<'a, F: Function, A> RootBuilder<'a, F, A> {
    /// Sets the approximate percent error below which the process stops.
    /// Default: [`TOLERANCE`].
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of iterations. Default: [`MAX_ITERS`].
    ///
    /// At least one iteration is always done.
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters.max(1);
        self
    }

    /// Sets specific algorithm to be used.
    ///
    /// This builder method accepts a closure that takes the reference to the
    /// function.
    pub fn with_algo<A2, FA>(self, factory: FA) -> RootBuilder<'a, F, A2>
    where
        FA: FnOnce(&F) -> A2,
    {
        let algo = factory(self.f);

        RootBuilder {
            f: self.f,
            algo,
            tolerance: self.tolerance,
            max_iters: self.max_iters,
        }
    }

    /// Builds the [`RootDriver`].
    pub fn build(self) -> RootDriver<'a, F, A> {
        RootDriver {
            f: self.f,
            algo: self.algo,
            tolerance: self.tolerance,
            max_iters: self.max_iters,
            trace: Vec::new(),
            iter: 0,
        }
    }
}

/// The driver for the process of finding a root.
///
/// For default settings, use [`RootDriver::new`]. For more flexibility, use
/// [`RootDriver::builder`]. For the usage of the driver, see [module](self)
/// documentation.
pub struct RootDriver<'a, F, A> {
    f: &'a F,
    algo: A,
    tolerance: f64,
    max_iters: usize,
    trace: Vec<IterationRecord>,
    iter: usize,
}

/// Final state of the process run by [`RootDriver::find`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// The last estimate of the root.
    pub root: f64,
    /// Whether the error dropped below the tolerance before the iteration
    /// limit was reached.
    pub converged: bool,
}

impl<'a, F: Function, A: RootFinder<F>> RootDriver<'a, F, A> {
    /// Returns the builder for specifying additional settings.
    pub fn builder(f: &'a F, algo: A) -> RootBuilder<'a, F, A> {
        RootBuilder {
            f,
            algo,
            tolerance: TOLERANCE,
            max_iters: MAX_ITERS,
        }
    }

    /// Initializes the driver with the default settings.
    pub fn new(f: &'a F, algo: A) -> Self {
        Self::builder(f, algo).build()
    }

    /// Does one iteration of the process, returning the new record of the
    /// trace in case of no error.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&IterationRecord, A::Error> {
        if self.trace.is_empty() {
            if let Some(seed) = self.algo.seed() {
                self.trace.push(IterationRecord::new(0, seed, 100.0));
            }
        }

        let step = self.algo.solve_next(self.f)?;
        self.iter += 1;

        debug!(
            "{} iteration {}: {} (ea = {})",
            A::NAME,
            self.iter,
            step.estimate,
            step.error
        );

        self.trace
            .push(IterationRecord::new(self.iter, step.estimate, step.error));

        Ok(&self.trace[self.trace.len() - 1])
    }

    /// Runs the iterative process until the error drops below the tolerance
    /// or the iteration limit is reached.
    ///
    /// Reaching the limit is not an error, the last estimate is returned with
    /// [`Outcome::converged`] set to false.
    pub fn find(&mut self) -> Result<Outcome, A::Error> {
        while !self.is_done() {
            self.next()?;
        }

        let converged = self.is_converged();
        if !converged {
            debug!(
                "{} did not converge in {} iterations",
                A::NAME,
                self.max_iters
            );
        }

        Ok(Outcome {
            root: self.root().unwrap_or(f64::NAN),
            converged,
        })
    }

    /// Returns the name of the used root finder.
    pub fn name(&self) -> &'static str {
        A::NAME
    }
}

impl<'a, F, A> RootDriver<'a, F, A> {
    /// Tests whether the stopping rule is satisfied.
    ///
    /// The error of the very first iteration never stops the process. The
    /// limit counts trace records, so a seed record takes one iteration.
    pub fn is_done(&self) -> bool {
        self.trace.len() >= self.max_iters || self.is_converged()
    }

    fn is_converged(&self) -> bool {
        self.iter >= 2
            && self
                .trace
                .last()
                .map_or(false, |record| record.error() < self.tolerance)
    }

    /// Returns the number of iterations done so far.
    pub fn iter(&self) -> usize {
        self.iter
    }

    /// Returns the latest estimate of the root.
    pub fn root(&self) -> Option<f64> {
        self.trace.last().map(|record| record.estimate().current())
    }

    /// Returns the trace recorded so far.
    pub fn trace(&self) -> &[IterationRecord] {
        &self.trace
    }

    /// Consumes the driver and returns the trace.
    pub fn into_trace(self) -> Vec<IterationRecord> {
        self.trace
    }
}

/// Root finding method for [`find_root`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootMethod {
    /// See [`Bisection`]. Requires [`RootParams::Bracket`].
    Bisection,
    /// See [`FalsePosition`]. Requires [`RootParams::Bracket`].
    FalsePosition,
    /// See [`NewtonRaphson`]. Requires [`RootParams::Initial`].
    NewtonRaphson,
    /// See [`Secant`]. Requires [`RootParams::Seeds`].
    Secant,
    /// See [`Graphical`]. Requires [`RootParams::Range`].
    Graphical,
}

impl RootMethod {
    /// Name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            RootMethod::Bisection => <Bisection as RootFinder<Expression>>::NAME,
            RootMethod::FalsePosition => <FalsePosition as RootFinder<Expression>>::NAME,
            RootMethod::NewtonRaphson => {
                <NewtonRaphson<Expression> as RootFinder<Expression>>::NAME
            }
            RootMethod::Secant => <Secant as RootFinder<Expression>>::NAME,
            RootMethod::Graphical => Graphical::NAME,
        }
    }

    fn expected_params(&self) -> &'static str {
        match self {
            RootMethod::Bisection | RootMethod::FalsePosition => "bracket",
            RootMethod::NewtonRaphson => "initial guess",
            RootMethod::Secant => "two seeds",
            RootMethod::Graphical => "range",
        }
    }
}

impl fmt::Display for RootMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of the root finding method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootParams {
    /// Interval with a sign change.
    Bracket {
        /// Left end.
        xl: f64,
        /// Right end.
        xr: f64,
    },
    /// Initial guess.
    Initial {
        /// The guess.
        x0: f64,
    },
    /// Two initial guesses.
    Seeds {
        /// The older guess.
        x0: f64,
        /// The newer guess.
        x1: f64,
    },
    /// Interval to scan.
    Range {
        /// Start of the interval.
        start: f64,
        /// End of the interval.
        end: f64,
    },
}

/// Result of [`find_root`].
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct RootSolution {
    /// Name of the used method.
    #[getset(get_copy = "pub")]
    method: &'static str,
    /// The last estimate of the root.
    #[getset(get_copy = "pub")]
    root: f64,
    /// Whether the process converged (see [`RootDriver::find`]).
    #[getset(get_copy = "pub")]
    converged: bool,
    /// All iterations in order.
    #[getset(get = "pub")]
    trace: Vec<IterationRecord>,
    /// Display form of the function.
    #[getset(get = "pub")]
    equation: String,
    /// Display form of the derivative, for Newton-Raphson method.
    #[getset(get = "pub")]
    derivative: Option<String>,
}

/// Error returned from [`find_root`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FindRootError {
    /// The expression could not be parsed.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// The interval is invalid.
    #[error("{0}")]
    Bracket(#[from] BracketError),
    /// The parameters do not fit the method.
    #[error("{method} method requires {expected}")]
    InvalidParams {
        /// The requested method.
        method: RootMethod,
        /// Description of the required parameters.
        expected: &'static str,
    },
    /// Error of bisection method.
    #[error("{0}")]
    Bisection(#[from] BisectionError),
    /// Error of false position method.
    #[error("{0}")]
    FalsePosition(#[from] FalsePositionError),
    /// Error of Newton-Raphson method.
    #[error("{0}")]
    NewtonRaphson(#[from] NewtonRaphsonError),
    /// Error of secant method.
    #[error("{0}")]
    Secant(#[from] SecantError),
    /// Error of graphical method.
    #[error("{0}")]
    Graphical(#[from] GraphicalError),
}

/// Finds a root of the expression with given method and default settings.
///
/// ```rust
/// use numeth::{find_root, RootMethod, RootParams};
///
/// let solution = find_root(
///     RootMethod::NewtonRaphson,
///     "x^2 - 4",
///     RootParams::Initial { x0: 3.0 },
/// )
/// .unwrap();
///
/// assert!((solution.root() - 2.0).abs() < 1e-6);
/// assert_eq!(solution.derivative().as_deref(), Some("2 * x"));
/// ```
pub fn find_root(
    method: RootMethod,
    expression: &str,
    params: RootParams,
) -> Result<RootSolution, FindRootError> {
    let f = Expression::parse(expression)?;

    let solution = match (method, params) {
        (RootMethod::Bisection, RootParams::Bracket { xl, xr }) => {
            let algo = Bisection::new(&f, Bracket::new(xl, xr)?);
            run(&f, algo, None)?
        }
        (RootMethod::FalsePosition, RootParams::Bracket { xl, xr }) => {
            let algo = FalsePosition::new(&f, Bracket::new(xl, xr)?);
            run(&f, algo, None)?
        }
        (RootMethod::NewtonRaphson, RootParams::Initial { x0 }) => {
            let algo = NewtonRaphson::new(&f, x0)?;
            let derivative = algo.derivative().map(ToString::to_string);
            run(&f, algo, derivative)?
        }
        (RootMethod::Secant, RootParams::Seeds { x0, x1 }) => {
            run(&f, Secant::new(x0, x1), None)?
        }
        (RootMethod::Graphical, RootParams::Range { start, end }) => {
            let scan = Graphical::new(Bracket::new(start, end)?).scan(&f)?;

            RootSolution {
                method: Graphical::NAME,
                root: scan.root,
                converged: true,
                trace: scan.trace,
                equation: f.to_string(),
                derivative: None,
            }
        }
        (method, _) => {
            return Err(FindRootError::InvalidParams {
                method,
                expected: method.expected_params(),
            })
        }
    };

    Ok(solution)
}

fn run<A: RootFinder<Expression>>(
    f: &Expression,
    algo: A,
    derivative: Option<String>,
) -> Result<RootSolution, A::Error> {
    let mut driver = RootDriver::new(f, algo);
    let outcome = driver.find()?;

    Ok(RootSolution {
        method: A::NAME,
        root: outcome.root,
        converged: outcome.converged,
        trace: driver.into_trace(),
        equation: f.to_string(),
        derivative,
    })
}
