use std::fmt;

/// Estimate (or estimates) recorded in one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Bracketing methods: both ends of the bracket at the start of the
    /// iteration together with the computed point.
    Bracket {
        /// Left end.
        xl: f64,
        /// Computed point (midpoint or false position).
        xm: f64,
        /// Right end.
        xr: f64,
    },
    /// Single-point methods.
    Point {
        /// The new estimate.
        x: f64,
    },
    /// Two-point methods (secant).
    Pair {
        /// The previous estimate.
        x_old: f64,
        /// The new estimate.
        x_new: f64,
    },
}

impl Estimate {
    /// The newest estimate of the root contained in the record.
    pub fn current(&self) -> f64 {
        match *self {
            Estimate::Bracket { xm, .. } => xm,
            Estimate::Point { x } => x,
            Estimate::Pair { x_new, .. } => x_new,
        }
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Estimate::Bracket { xl, xm, xr } => {
                write!(f, "xl = {:.6}, xm = {:.6}, xr = {:.6}", xl, xm, xr)
            }
            Estimate::Point { x } => write!(f, "x = {:.6}", x),
            Estimate::Pair { x_old, x_new } => {
                write!(f, "x_old = {:.6}, x_new = {:.6}", x_old, x_new)
            }
        }
    }
}

/// Result of one step of a [`RootFinder`](super::RootFinder).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iterate {
    /// Values to be recorded in the trace.
    pub estimate: Estimate,
    /// Approximate percent error of this step (see
    /// [`approx_error`](super::approx_error)).
    pub error: f64,
}

/// One entry of the iteration trace.
///
/// Records are created by the [`RootDriver`](crate::RootDriver) in iteration
/// order and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    index: usize,
    estimate: Estimate,
    error: f64,
}

impl IterationRecord {
    pub(crate) fn new(index: usize, estimate: Estimate, error: f64) -> Self {
        Self {
            index,
            estimate,
            error,
        }
    }

    /// Iteration number, starting at 1. Index 0 is reserved for seeds
    /// recorded before the first iteration.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Recorded estimate(s).
    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    /// Approximate percent error of the iteration.
    pub fn error(&self) -> f64 {
        self.error
    }
}

impl fmt::Display for IterationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3}  {}  ea = {:.6}%",
            self.index, self.estimate, self.error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_estimate() {
        let bracket = Estimate::Bracket {
            xl: 0.0,
            xm: 1.5,
            xr: 3.0,
        };
        assert_eq!(bracket.current(), 1.5);
        assert_eq!(Estimate::Point { x: 2.0 }.current(), 2.0);
        assert_eq!(
            Estimate::Pair {
                x_old: 1.0,
                x_new: 2.0
            }
            .current(),
            2.0
        );
    }

    #[test]
    fn record_display() {
        let record = IterationRecord::new(
            1,
            Estimate::Bracket {
                xl: 0.0,
                xm: 1.5,
                xr: 3.0,
            },
            100.0,
        );

        assert_eq!(
            record.to_string(),
            "  1  xl = 0.000000, xm = 1.500000, xr = 3.000000  ea = 100.000000%"
        );
    }
}
