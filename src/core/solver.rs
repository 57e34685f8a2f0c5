use super::{function::Function, trace::Estimate, trace::Iterate};

/// Interface of an iterative root finder.
///
/// A root finder is a state machine which, given a function, computes the
/// next estimate of a root on every call of
/// [`solve_next`](RootFinder::solve_next). Repeated calls should eventually
/// converge in successful cases. Deciding when to stop is not the job of the
/// root finder but of the [`RootDriver`](crate::RootDriver).
///
/// ## Implementing a root finder
///
/// Here is an implementation of fixed-point iteration `x = x - f(x)`, which
/// converges for some well-behaved functions.
///
/// ```rust
/// use numeth::{approx_error, Estimate, EvalError, Function, Iterate, RootFinder};
///
/// struct FixedPoint {
///     x: f64,
/// }
///
/// impl<F: Function> RootFinder<F> for FixedPoint {
///     const NAME: &'static str = "Fixed point";
///
///     type Error = EvalError;
///
///     fn solve_next(&mut self, f: &F) -> Result<Iterate, Self::Error> {
///         let x_new = self.x - f.eval(self.x)?;
///         let error = approx_error(self.x, x_new);
///         self.x = x_new;
///
///         Ok(Iterate {
///             estimate: Estimate::Point { x: x_new },
///             error,
///         })
///     }
/// }
/// ```
pub trait RootFinder<F: Function> {
    /// Name of the root finder.
    const NAME: &'static str;

    /// Error while computing the next step.
    type Error;

    /// Estimate to be recorded as iteration 0, before any step is taken.
    ///
    /// Methods that start from more than one seed use this to keep the seeds
    /// in the trace. The default records nothing.
    fn seed(&self) -> Option<Estimate> {
        None
    }

    /// Computes the next step in the iterative process.
    fn solve_next(&mut self, f: &F) -> Result<Iterate, Self::Error>;
}
