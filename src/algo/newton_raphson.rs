//! Newton-Raphson method.
//!
//! The [Newton-Raphson](https://en.wikipedia.org/wiki/Newton%27s_method)
//! method follows the tangent line of the function from the current estimate:
//!
//! ```text
//! x_new = x - f(x) / f'(x)
//! ```
//!
//! Convergence is quadratic near a simple root, but the method may diverge
//! from a poor initial guess and fails when the tangent is horizontal.
//!
//! The derivative is obtained symbolically by default (see
//! [`Differentiable`]). Functions containing constructs without a derivative
//! rule can be solved with [`DerivativeMode::Numeric`].

use getset::{CopyGetters, Setters};
use log::debug;
use thiserror::Error;

use crate::core::{approx_error, Differentiable, Estimate, Function, Iterate, RootFinder, ZERO_THRESHOLD};
use crate::derivatives::central_difference;
use crate::expr::{DerivativeError, EvalError};

/// How the derivative is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivativeMode {
    /// Derivative computed once, symbolically.
    Symbolic,
    /// Central difference approximation in every step.
    Numeric,
}

/// Options for [`NewtonRaphson`] root finder.
#[derive(Debug, Clone, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct NewtonRaphsonOptions {
    /// Derivatives smaller than this in absolute value are treated as zero.
    /// Default: [`ZERO_THRESHOLD`].
    zero_threshold: f64,
    /// How the derivative is obtained. Default: symbolic.
    derivative_mode: DerivativeMode,
}

impl Default for NewtonRaphsonOptions {
    fn default() -> Self {
        Self {
            zero_threshold: ZERO_THRESHOLD,
            derivative_mode: DerivativeMode::Symbolic,
        }
    }
}

/// Newton-Raphson root finder. See [module](self) documentation for more
/// details.
pub struct NewtonRaphson<D> {
    options: NewtonRaphsonOptions,
    derivative: Option<D>,
    x: f64,
}

impl<D: Function> NewtonRaphson<D> {
    /// Initializes Newton-Raphson method with default options.
    pub fn new<F>(f: &F, x0: f64) -> Result<Self, NewtonRaphsonError>
    where
        F: Differentiable<Derivative = D>,
    {
        Self::with_options(f, x0, NewtonRaphsonOptions::default())
    }

    /// Initializes Newton-Raphson method with given options.
    pub fn with_options<F>(
        f: &F,
        x0: f64,
        options: NewtonRaphsonOptions,
    ) -> Result<Self, NewtonRaphsonError>
    where
        F: Differentiable<Derivative = D>,
    {
        let derivative = match options.derivative_mode {
            DerivativeMode::Symbolic => Some(f.derivative()?),
            DerivativeMode::Numeric => None,
        };

        Ok(Self {
            options,
            derivative,
            x: x0,
        })
    }

    /// The symbolic derivative, if used.
    pub fn derivative(&self) -> Option<&D> {
        self.derivative.as_ref()
    }

    /// Current estimate.
    pub fn x(&self) -> f64 {
        self.x
    }
}

/// Error returned from [`NewtonRaphson`] root finder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NewtonRaphsonError {
    /// The function or its derivative could not be evaluated.
    #[error("{0}")]
    Eval(#[from] EvalError),
    /// The function has no symbolic derivative.
    #[error("{0}")]
    Derivative(#[from] DerivativeError),
    /// The derivative is zero, the tangent never crosses zero.
    #[error("derivative is zero at x = {x}")]
    ZeroDerivative {
        /// The point where the derivative vanished.
        x: f64,
    },
}

impl<F: Function, D: Function> RootFinder<F> for NewtonRaphson<D> {
    const NAME: &'static str = "Newton-Raphson";

    type Error = NewtonRaphsonError;

    fn solve_next(&mut self, f: &F) -> Result<Iterate, Self::Error> {
        let x = self.x;

        let fx = f.eval(x)?;
        let dfx = match &self.derivative {
            Some(df) => df.eval(x)?,
            None => central_difference(f, x)?,
        };

        if dfx == 0.0 || dfx.abs() < self.options.zero_threshold {
            debug!("f'({}) = {}", x, dfx);
            return Err(NewtonRaphsonError::ZeroDerivative { x });
        }

        let x_new = x - fx / dfx;
        self.x = x_new;

        Ok(Iterate {
            estimate: Estimate::Point { x: x_new },
            error: approx_error(x, x_new),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::*;
    use crate::Expression;

    use approx::assert_abs_diff_eq;

    #[test]
    fn quadratic() {
        let f = Expression::parse("x^2 - 4").unwrap();
        let algo = NewtonRaphson::new(&f, 3.0).unwrap();

        let root = solve(&f, algo, 20, 1e-12).unwrap();
        assert_abs_diff_eq!(root, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn first_step() {
        let f = Expression::parse("x^2 - 4").unwrap();
        let mut algo = NewtonRaphson::new(&f, 3.0).unwrap();

        assert_eq!(algo.derivative().unwrap().to_string(), "2 * x");

        // 3 - 5 / 6
        let step = algo.solve_next(&f).unwrap();
        assert_abs_diff_eq!(step.estimate.current(), 13.0 / 6.0);
        assert_abs_diff_eq!(step.error, 100.0 * (5.0 / 6.0) / (13.0 / 6.0));
    }

    #[test]
    fn zero_derivative() {
        let f = Expression::parse("x^2 - 4").unwrap();
        let mut algo = NewtonRaphson::new(&f, 0.0).unwrap();

        assert_eq!(
            algo.solve_next(&f),
            Err(NewtonRaphsonError::ZeroDerivative { x: 0.0 })
        );
    }

    #[test]
    fn no_derivative_rule() {
        let f = Expression::parse("abs(x) - 2").unwrap();

        assert!(matches!(
            NewtonRaphson::new(&f, 3.0),
            Err(NewtonRaphsonError::Derivative(
                DerivativeError::Unsupported { .. }
            ))
        ));

        let mut options = NewtonRaphsonOptions::default();
        options.set_derivative_mode(DerivativeMode::Numeric);
        let algo = NewtonRaphson::with_options(&f, 3.0, options).unwrap();
        assert!(algo.derivative().is_none());

        let root = solve(&f, algo, 20, 1e-9).unwrap();
        assert_abs_diff_eq!(root, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn reference_problems() {
        for problem in root_problems() {
            for x0 in problem.initials() {
                let algo = NewtonRaphson::new(&problem, x0).unwrap();
                let root = solve(&problem, algo, 50, 1e-9).unwrap();
                assert!(problem.is_root(root, 1e-6), "{} at {}", problem.name(), root);
            }
        }
    }
}
