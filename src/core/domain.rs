//! Intervals on which the root finders operate.

use std::fmt;

use thiserror::Error;

/// Error when constructing a [`Bracket`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BracketError {
    /// One of the bounds is NaN or infinite.
    #[error("bracket bounds must be finite, got [{lower}, {upper}]")]
    NonFinite {
        /// Given lower bound.
        lower: f64,
        /// Given upper bound.
        upper: f64,
    },
    /// Both bounds are equal.
    #[error("bracket bounds must differ, got [{bound}, {bound}]")]
    Degenerate {
        /// The repeated bound.
        bound: f64,
    },
}

/// A finite interval `[lower, upper]`.
///
/// The bounds keep the order in which they were given, so a bracket `[3, 0]`
/// is valid and its "left" end stays 3. Bracketing methods do not depend on
/// the orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lower: f64,
    upper: f64,
}

impl Bracket {
    /// Creates a bracket from its two ends.
    pub fn new(lower: f64, upper: f64) -> Result<Self, BracketError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(BracketError::NonFinite { lower, upper });
        }

        if lower == upper {
            return Err(BracketError::Degenerate { bound: lower });
        }

        Ok(Self { lower, upper })
    }

    /// Gets the left end.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Gets the right end.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Gets the middle of the interval.
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Gets the (always positive) width of the interval.
    pub fn width(&self) -> f64 {
        (self.upper - self.lower).abs()
    }

    /// Returns the bracket with ends ordered ascending.
    pub fn ordered(&self) -> Self {
        if self.lower <= self.upper {
            *self
        } else {
            Self {
                lower: self.upper,
                upper: self.lower,
            }
        }
    }

    /// Tests whether the point lies in the closed interval.
    pub fn contains(&self, x: f64) -> bool {
        let ordered = self.ordered();
        ordered.lower <= x && x <= ordered.upper
    }
}

impl TryFrom<(f64, f64)> for Bracket {
    type Error = BracketError;

    fn try_from((lower, upper): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(lower, upper)
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
