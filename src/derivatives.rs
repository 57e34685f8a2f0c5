//! Tools for derivative-based methods.
//!
//! Symbolic derivatives are provided by [`Expression`](crate::Expression).
//! For functions without a symbolic form (or with constructs that have no
//! derivative rule, such as `abs`), the derivative can be approximated by
//! finite differences.

use crate::core::Function;
use crate::expr::EvalError;

/// Cubic root of double precision machine epsilon. This value is a standard
/// constant for the step of central difference approximations.
pub const EPSILON_CBRT: f64 = 0.0000060554544523933395;

/// Approximates `f'(x)` by the central difference
/// `(f(x + h) - f(x - h)) / 2h`.
pub fn central_difference<F: Function + ?Sized>(f: &F, x: f64) -> Result<f64, EvalError> {
    // The step is scaled by the magnitude of x so that it is neither lost in
    // rounding for large x nor needlessly coarse near zero.
    let step = EPSILON_CBRT * x.abs().max(1.0);

    // Make sure that the step is exactly representable in the arithmetic.
    let xp = x + step;
    let xm = x - step;
    let step = (xp - xm) / 2.0;

    let fp = f.eval(xp)?;
    let fm = f.eval(xm)?;

    Ok((fp - fm) / (2.0 * step))
}

/// Derivative of a function approximated by [`central_difference`].
#[derive(Debug, Clone, Copy)]
pub struct NumericDerivative<F> {
    f: F,
}

impl<F: Function> NumericDerivative<F> {
    /// Wraps the function.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F: Function> Function for NumericDerivative<F> {
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let value = central_difference(&self.f, x)?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite { x })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Expression;

    use approx::assert_abs_diff_eq;

    #[test]
    fn polynomial() {
        let f = Expression::parse("x^3 - 2x").unwrap();
        assert_abs_diff_eq!(central_difference(&f, 2.0).unwrap(), 10.0, epsilon = 1e-8);
        assert_abs_diff_eq!(central_difference(&f, 0.0).unwrap(), -2.0, epsilon = 1e-8);
    }

    #[test]
    fn large_argument() {
        let f = Expression::parse("x^2").unwrap();
        assert_abs_diff_eq!(central_difference(&f, 1e6).unwrap(), 2e6, epsilon = 1e-2);
    }

    #[test]
    fn abs_has_numeric_derivative() {
        let df = NumericDerivative::new(Expression::parse("abs(x - 1)").unwrap());
        assert_abs_diff_eq!(df.eval(3.0).unwrap(), 1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(df.eval(-3.0).unwrap(), -1.0, epsilon = 1e-8);
    }

    #[test]
    fn propagates_evaluation_errors() {
        let f = Expression::parse("sqrt(x)").unwrap();
        assert!(matches!(
            central_difference(&f, 0.0),
            Err(EvalError::Domain { .. })
        ));
    }
}
