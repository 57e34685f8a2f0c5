//! Secant method.
//!
//! The [secant](https://en.wikipedia.org/wiki/Secant_method) method replaces
//! the derivative in Newton-Raphson method by the slope of the line through
//! the last two estimates:
//!
//! ```text
//! x = x_new - f(x_new) (x_old - x_new) / (f(x_old) - f(x_new))
//! ```
//!
//! It needs two seeds but no derivative. The seeds are recorded as iteration
//! 0 of the trace.

use thiserror::Error;

use crate::core::{approx_error, Estimate, Function, Iterate, RootFinder};
use crate::expr::EvalError;

/// Secant root finder. See [module](self) documentation for more details.
#[derive(Debug, Clone)]
pub struct Secant {
    x0: f64,
    x1: f64,
    x_old: f64,
    x_new: f64,
}

impl Secant {
    /// Initializes the secant method from two seeds.
    pub fn new(x0: f64, x1: f64) -> Self {
        Self {
            x0,
            x1,
            x_old: x0,
            x_new: x1,
        }
    }

    /// Resets the internal state to the seeds.
    pub fn reset(&mut self) {
        self.x_old = self.x0;
        self.x_new = self.x1;
    }
}

/// Error returned from [`Secant`] root finder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SecantError {
    /// The function could not be evaluated.
    #[error("{0}")]
    Eval(#[from] EvalError),
    /// Function values at the last two estimates are equal.
    #[error("f({x_old}) = f({x_new}), the secant line is horizontal")]
    DivisionByZero {
        /// The older estimate.
        x_old: f64,
        /// The newer estimate.
        x_new: f64,
    },
}

impl<F: Function> RootFinder<F> for Secant {
    const NAME: &'static str = "Secant";

    type Error = SecantError;

    fn seed(&self) -> Option<Estimate> {
        Some(Estimate::Pair {
            x_old: self.x0,
            x_new: self.x1,
        })
    }

    fn solve_next(&mut self, f: &F) -> Result<Iterate, Self::Error> {
        let (x_old, x_new) = (self.x_old, self.x_new);

        let f_old = f.eval(x_old)?;
        let f_new = f.eval(x_new)?;

        if f_old == f_new {
            return Err(SecantError::DivisionByZero { x_old, x_new });
        }

        let x = x_new - f_new * (x_old - x_new) / (f_old - f_new);

        self.x_old = x_new;
        self.x_new = x;

        Ok(Iterate {
            estimate: Estimate::Pair { x_old: x_new, x_new: x },
            error: approx_error(x_new, x),
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
        let root = solve(&f, Secant::new(0.0, 3.0), 50, 1e-12).unwrap();
        assert_abs_diff_eq!(root, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn first_step() {
        let f = Expression::parse("x^2 - 4").unwrap();
        let mut algo = Secant::new(0.0, 3.0);

        assert_eq!(
            RootFinder::<Expression>::seed(&algo),
            Some(Estimate::Pair {
                x_old: 0.0,
                x_new: 3.0
            })
        );

        // 3 - 5 * (0 - 3) / (-4 - 5) = 4 / 3
        let step = algo.solve_next(&f).unwrap();
        match step.estimate {
            Estimate::Pair { x_old, x_new } => {
                assert_eq!(x_old, 3.0);
                assert_abs_diff_eq!(x_new, 4.0 / 3.0);
            }
            other => panic!("unexpected estimate {:?}", other),
        }
        assert_abs_diff_eq!(step.error, 125.0);
    }

    #[test]
    fn horizontal_secant() {
        let f = Expression::parse("x^2 - 4").unwrap();
        let mut algo = Secant::new(-1.0, 1.0);

        assert_eq!(
            algo.solve_next(&f),
            Err(SecantError::DivisionByZero {
                x_old: -1.0,
                x_new: 1.0
            })
        );
    }

    #[test]
    fn reset() {
        let f = Expression::parse("x^2 - 4").unwrap();
        let mut algo = Secant::new(0.0, 3.0);

        let first = algo.solve_next(&f).unwrap();
        algo.solve_next(&f).unwrap();
        algo.reset();

        assert_eq!(algo.solve_next(&f).unwrap(), first);
    }

    #[test]
    fn reference_problems() {
        for problem in root_problems() {
            let [x0, x1] = problem.seeds();
            let root = solve(&problem, Secant::new(x0, x1), 50, 1e-9).unwrap();
            assert!(problem.is_root(root, 1e-6), "{} at {}", problem.name(), root);
        }
    }
}
