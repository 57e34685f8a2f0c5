//! False position (regula falsi) method.
//!
//! Like [bisection](super::bisection), the [false
//! position](https://en.wikipedia.org/wiki/Regula_falsi) method keeps a bracket
//! with a sign change, but instead of the midpoint it splits the bracket where
//! the secant line through `(xl, f(xl))` and `(xr, f(xr))` crosses zero:
//!
//! ```text
//! xm = (xl f(xr) - xr f(xl)) / (f(xr) - f(xl))
//! ```
//!
//! This usually converges faster than bisection, but one end of the bracket
//! may get stuck for strongly convex or concave functions.

use log::debug;
use thiserror::Error;

use super::bisection::narrow;
use crate::analysis::has_sign_change;
use crate::core::{Bracket, Function, Iterate, RootFinder};
use crate::expr::EvalError;

/// False position root finder. See [module](self) documentation for more
/// details.
#[derive(Debug, Clone)]
pub struct FalsePosition {
    xl: f64,
    xr: f64,
}

impl FalsePosition {
    /// Initializes the false position method on given bracket.
    pub fn new<F: Function>(f: &F, bracket: Bracket) -> Self {
        if !has_sign_change(f, &bracket) {
            debug!("no sign change over {}", bracket);
        }

        Self {
            xl: bracket.lower(),
            xr: bracket.upper(),
        }
    }

    /// Current bracket `(xl, xr)`.
    pub fn bracket(&self) -> (f64, f64) {
        (self.xl, self.xr)
    }
}

/// Error returned from [`FalsePosition`] root finder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FalsePositionError {
    /// The function could not be evaluated.
    #[error("{0}")]
    Eval(#[from] EvalError),
    /// Function values at both ends of the bracket are equal.
    #[error("f({xl}) = f({xr}), the secant line is horizontal")]
    DivisionByZero {
        /// Left end of the bracket.
        xl: f64,
        /// Right end of the bracket.
        xr: f64,
    },
}

impl<F: Function> RootFinder<F> for FalsePosition {
    const NAME: &'static str = "False position";

    type Error = FalsePositionError;

    fn solve_next(&mut self, f: &F) -> Result<Iterate, Self::Error> {
        let (xl, xr) = (self.xl, self.xr);

        let fl = f.eval(xl)?;
        let fr = f.eval(xr)?;

        if fr == fl {
            // Also covers a bracket collapsed into an exact root. Report the
            // root again instead of failing.
            if fr == 0.0 {
                return Ok(narrow(&mut self.xl, &mut self.xr, xr, fr, fr));
            }

            return Err(FalsePositionError::DivisionByZero { xl, xr });
        }

        let xm = (xl * fr - xr * fl) / (fr - fl);
        let fm = f.eval(xm)?;

        Ok(narrow(&mut self.xl, &mut self.xr, xm, fm, fr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::Estimate;
    use crate::testing::*;
    use crate::Expression;

    use approx::assert_abs_diff_eq;

    #[test]
    fn quadratic() {
        let f = Expression::parse("x^2 - 4").unwrap();
        let algo = FalsePosition::new(&f, Bracket::new(0.0, 3.0).unwrap());

        let root = solve(&f, algo, 100, 1e-9).unwrap();
        assert_abs_diff_eq!(root, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn first_step() {
        let f = Expression::parse("x^2 - 4").unwrap();
        let mut algo = FalsePosition::new(&f, Bracket::new(0.0, 3.0).unwrap());

        // xm = (0 * 5 - 3 * (-4)) / (5 - (-4)) = 12 / 9
        let step = algo.solve_next(&f).unwrap();
        match step.estimate {
            Estimate::Bracket { xl, xm, xr } => {
                assert_eq!((xl, xr), (0.0, 3.0));
                assert_abs_diff_eq!(xm, 12.0 / 9.0);
            }
            other => panic!("unexpected estimate {:?}", other),
        }

        let (xl, xr) = algo.bracket();
        assert_abs_diff_eq!(xl, 12.0 / 9.0);
        assert_eq!(xr, 3.0);
    }

    #[test]
    fn reference_problems() {
        for problem in root_problems() {
            for bracket in problem.brackets() {
                let algo = FalsePosition::new(&problem, bracket);
                let root = solve(&problem, algo, 200, 1e-9).unwrap();
                assert!(problem.is_root(root, 1e-6), "{} at {}", problem.name(), root);
            }
        }
    }

    #[test]
    fn horizontal_secant() {
        let f = Expression::parse("x^2 - 1").unwrap();
        let mut algo = FalsePosition::new(&f, Bracket::new(-2.0, 2.0).unwrap());

        assert_eq!(
            algo.solve_next(&f),
            Err(FalsePositionError::DivisionByZero { xl: -2.0, xr: 2.0 })
        );
    }
}
