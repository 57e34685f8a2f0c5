//! Graphical (incremental search) method.
//!
//! The function is sampled at equally spaced points of an interval and the
//! sample with the smallest `|f(x)|` is taken as the root estimate. The method
//! is not iterative and its accuracy is limited by the sampling step, but it
//! is useful for a first look at the function and for choosing brackets or
//! initial guesses for the other methods.
//!
//! Every sample is recorded in the trace with `|f(x)|` in place of the error.

use getset::{CopyGetters, Setters};
use log::debug;
use thiserror::Error;

use crate::core::{Bracket, Estimate, Function, IterationRecord};

/// Options for [`Graphical`] method.
#[derive(Debug, Clone, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct GraphicalOptions {
    /// Number of equal steps the interval is divided into. Default: 100.
    steps: usize,
}

impl Default for GraphicalOptions {
    fn default() -> Self {
        Self { steps: 100 }
    }
}

/// Graphical method. See [module](self) documentation for more details.
#[derive(Debug, Clone)]
pub struct Graphical {
    options: GraphicalOptions,
    range: Bracket,
}

/// Outcome of the [`Graphical`] method.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    /// The sample with the smallest `|f(x)|`.
    pub root: f64,
    /// One record per successfully evaluated sample.
    pub trace: Vec<IterationRecord>,
}

/// Error returned from [`Graphical`] method.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphicalError {
    /// The function could not be evaluated at any sample.
    #[error("function could not be evaluated anywhere in {range}")]
    NoSamples {
        /// The scanned interval.
        range: Bracket,
    },
}

impl Graphical {
    /// Name of the method.
    pub const NAME: &'static str = "Graphical";

    /// Initializes the method on given interval with default options.
    pub fn new(range: Bracket) -> Self {
        Self::with_options(range, GraphicalOptions::default())
    }

    /// Initializes the method on given interval with given options.
    pub fn with_options(range: Bracket, options: GraphicalOptions) -> Self {
        Self { options, range }
    }

    /// Samples the function and returns the best sample.
    pub fn scan<F: Function>(&self, f: &F) -> Result<Scan, GraphicalError> {
        let steps = self.options.steps.max(1);
        let start = self.range.lower();
        let step = (self.range.upper() - start) / steps as f64;

        let mut trace = Vec::with_capacity(steps + 1);
        let mut best: Option<(f64, f64)> = None;

        for i in 0..=steps {
            let x = start + step * i as f64;

            let fx = match f.eval(x) {
                Ok(fx) => fx.abs(),
                Err(error) => {
                    debug!("skipping sample x = {}: {}", x, error);
                    continue;
                }
            };

            trace.push(IterationRecord::new(
                trace.len() + 1,
                Estimate::Point { x },
                fx,
            ));

            if best.map_or(true, |(_, min)| fx < min) {
                best = Some((x, fx));
            }
        }

        match best {
            Some((root, _)) => Ok(Scan { root, trace }),
            None => Err(GraphicalError::NoSamples { range: self.range }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Expression;

    use approx::assert_abs_diff_eq;

    #[test]
    fn quadratic() {
        let f = Expression::parse("x^2 - 4").unwrap();
        let scan = Graphical::new(Bracket::new(0.0, 5.0).unwrap())
            .scan(&f)
            .unwrap();

        assert_abs_diff_eq!(scan.root, 2.0, epsilon = 1e-12);
        assert_eq!(scan.trace.len(), 101);
        assert_eq!(scan.trace[0].index(), 1);
        assert_eq!(scan.trace[0].error(), 4.0);
        assert_abs_diff_eq!(scan.trace[100].estimate().current(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn accuracy_limited_by_step() {
        let f = Expression::parse("cos(x) - x").unwrap();
        let mut options = GraphicalOptions::default();
        options.set_steps(10);
        let scan = Graphical::with_options(Bracket::new(0.0, 1.0).unwrap(), options)
            .scan(&f)
            .unwrap();

        assert_abs_diff_eq!(scan.root, 0.7, epsilon = 1e-12);
        assert_eq!(scan.trace.len(), 11);
    }

    #[test]
    fn skips_undefined_samples() {
        let f = Expression::parse("ln(x)").unwrap();
        let mut options = GraphicalOptions::default();
        options.set_steps(8);
        let scan = Graphical::with_options(Bracket::new(-1.0, 3.0).unwrap(), options)
            .scan(&f)
            .unwrap();

        // Samples -1, -0.5 and 0 are skipped.
        assert_eq!(scan.trace.len(), 6);
        assert_eq!(scan.root, 1.0);
        assert_eq!(scan.trace.last().unwrap().index(), 6);
    }

    #[test]
    fn no_samples() {
        let f = Expression::parse("sqrt(x)").unwrap();
        let range = Bracket::new(-2.0, -1.0).unwrap();

        assert_eq!(
            Graphical::new(range).scan(&f),
            Err(GraphicalError::NoSamples { range })
        );
    }
}
