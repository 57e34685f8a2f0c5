//! Bisection method.
//!
//! The [bisection](https://en.wikipedia.org/wiki/Bisection_method) method
//! halves a bracket `[xl, xr]` over which the function changes sign, keeping
//! the half which still contains the sign change. It is slow (linear
//! convergence) but cannot diverge.
//!
//! The sign change at the ends of the initial bracket is not enforced. If it
//! does not hold, the method still runs but converges to one of the ends.
//!
//! # References
//!
//! \[1\] [Numerical Methods for Engineers](https://www.mheducation.com/highered/product/numerical-methods-engineers-chapra-canale/M9781260232073.html)

use log::debug;
use thiserror::Error;

use crate::analysis::has_sign_change;
use crate::core::{approx_error, Bracket, Estimate, Function, Iterate, RootFinder};
use crate::expr::EvalError;

/// Bisection root finder. See [module](self) documentation for more details.
#[derive(Debug, Clone)]
pub struct Bisection {
    xl: f64,
    xr: f64,
}

impl Bisection {
    /// Initializes the bisection method on given bracket.
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

/// Error returned from [`Bisection`] root finder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BisectionError {
    /// The function could not be evaluated.
    #[error("{0}")]
    Eval(#[from] EvalError),
}

impl<F: Function> RootFinder<F> for Bisection {
    const NAME: &'static str = "Bisection";

    type Error = BisectionError;

    fn solve_next(&mut self, f: &F) -> Result<Iterate, Self::Error> {
        let (xl, xr) = (self.xl, self.xr);
        let xm = (xl + xr) / 2.0;

        let fm = f.eval(xm)?;
        let fr = f.eval(xr)?;

        Ok(narrow(&mut self.xl, &mut self.xr, xm, fm, fr))
    }
}

/// Replaces the end of the bracket on the same side of the root as `xm` and
/// returns the record of the step.
///
/// The error is measured against the end being replaced. When `xm` or `xr`
/// is an exact root, the bracket collapses into it and the error is zero.
pub(crate) fn narrow(xl: &mut f64, xr: &mut f64, xm: f64, fm: f64, fr: f64) -> Iterate {
    let (l, r) = (*xl, *xr);

    let (root, error) = if fm * fr > 0.0 {
        debug!("root in [{}, {}]", l, xm);
        *xr = xm;
        (xm, approx_error(r, xm))
    } else if fm * fr < 0.0 {
        debug!("root in [{}, {}]", xm, r);
        *xl = xm;
        (xm, approx_error(l, xm))
    } else {
        let root = if fm == 0.0 { xm } else { r };
        debug!("exact root at {}", root);
        *xl = root;
        *xr = root;
        (root, 0.0)
    };

    Iterate {
        estimate: Estimate::Bracket { xl: l, xm: root, xr: r },
        error,
    }
}
