use crate::expr::{DerivativeError, EvalError, Expression};

/// A real function of one real variable.
///
/// ## Defining a function
///
/// Most users work with [`Expression`], which implements this trait. Any other
/// type can be used with the root finders as well:
///
/// ```rust
/// use numeth::{EvalError, Function};
///
/// struct Parabola {
///     root: f64,
/// }
///
/// impl Function for Parabola {
///     fn eval(&self, x: f64) -> Result<f64, EvalError> {
///         Ok(x * x - self.root * self.root)
///     }
/// }
/// ```
pub trait Function {
    /// Calculates the function value in given point.
    ///
    /// Points where the function is not defined must be reported as an
    /// [`EvalError`], never as a NaN or infinite value.
    fn eval(&self, x: f64) -> Result<f64, EvalError>;
}

/// A [`Function`] whose derivative can be obtained as another function.
pub trait Differentiable: Function {
    /// Type of the derivative.
    type Derivative: Function;

    /// Computes the derivative.
    fn derivative(&self) -> Result<Self::Derivative, DerivativeError>;
}

impl<F: Function + ?Sized> Function for &F {
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        (**self).eval(x)
    }
}

impl Function for Expression {
    fn eval(&self, x: f64) -> Result<f64, EvalError> {
        Expression::eval(self, x)
    }
}

impl Differentiable for Expression {
    type Derivative = Expression;

    fn derivative(&self) -> Result<Self::Derivative, DerivativeError> {
        Expression::derivative(self)
    }
}
