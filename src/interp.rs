//! Interpolation of tabulated data.
//!
//! * [Lagrange polynomial](lagrange()) through all selected points
//! * [Linear spline](linear_spline()) connecting neighbouring points
//!
//! Points are held in a [`PointSet`], where each point can be selected or
//! deselected. Only the selected points take part in the interpolation.
//!
//! ```rust
//! use numeth::interp::{interpolate, InterpolationMethod, PointSet, SplineDegree};
//!
//! let points: PointSet = [(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)].into_iter().collect();
//!
//! let lagrange = interpolate(InterpolationMethod::Lagrange, &points, 1.5)?;
//! assert!((lagrange.value() - 2.25).abs() < 1e-12);
//!
//! let spline = interpolate(InterpolationMethod::Spline(SplineDegree::Linear), &points, 1.5)?;
//! assert!((spline.value() - 2.5).abs() < 1e-12);
//! # Ok::<(), numeth::interp::InterpolationError>(())
//! ```

mod lagrange;
mod points;
mod spline;

use std::fmt;

use thiserror::Error;

pub use lagrange::{lagrange, LagrangeInterpolation, LagrangeTerm};
pub use points::{Point, PointSet};
pub use spline::{linear_spline, spline, SplineDegree, SplineInterpolation, SplinePiece};

/// Error of interpolation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    /// Fewer than two points are selected.
    #[error("at least 2 points must be selected, got {selected}")]
    InsufficientPoints {
        /// Number of selected points.
        selected: usize,
    },
    /// Two selected points have the same abscissa.
    #[error("points {first} and {second} have the same x = {x}")]
    DuplicateAbscissa {
        /// Index of the first point in the set.
        first: usize,
        /// Index of the second point in the set.
        second: usize,
        /// The shared abscissa.
        x: f64,
    },
    /// The query point is outside of the spline domain.
    #[error("x = {x} is outside of [{min}, {max}]")]
    OutOfRange {
        /// The query point.
        x: f64,
        /// Smallest selected abscissa.
        min: f64,
        /// Largest selected abscissa.
        max: f64,
    },
    /// The method is not implemented.
    #[error("{method} is not supported")]
    UnsupportedMethod {
        /// Name of the method.
        method: &'static str,
    },
    /// A selected point or the query point is infinite or NaN.
    #[error("non-finite value {value}")]
    NonFinite {
        /// The offending value.
        value: f64,
    },
    /// Point index out of bounds.
    #[error("invalid point index {index} for {len} points")]
    InvalidIndex {
        /// The index.
        index: usize,
        /// Number of points.
        len: usize,
    },
}

fn check_query(x: f64) -> Result<(), InterpolationError> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(InterpolationError::NonFinite { value: x })
    }
}

/// Selected points with their indices, at least two and all finite.
fn selected_points(points: &PointSet) -> Result<Vec<(usize, Point)>, InterpolationError> {
    let selected: Vec<_> = points.selected().collect();

    if selected.len() < 2 {
        return Err(InterpolationError::InsufficientPoints {
            selected: selected.len(),
        });
    }

    if let Some(&(_, p)) = selected
        .iter()
        .find(|(_, p)| !p.x.is_finite() || !p.fx.is_finite())
    {
        let value = if p.x.is_finite() { p.fx } else { p.x };
        return Err(InterpolationError::NonFinite { value });
    }

    Ok(selected)
}

/// Interpolation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMethod {
    /// [`lagrange()`]
    Lagrange,
    /// [`spline()`] of given degree.
    Spline(SplineDegree),
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationMethod::Lagrange => f.write_str("Lagrange interpolation"),
            InterpolationMethod::Spline(degree) => write!(f, "{} interpolation", degree),
        }
    }
}

/// Result of [`interpolate`], specific to the method used.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolation {
    /// Result of Lagrange interpolation.
    Lagrange(LagrangeInterpolation),
    /// Result of spline interpolation.
    Spline(SplineInterpolation),
}

impl Interpolation {
    /// Interpolated value.
    pub fn value(&self) -> f64 {
        match self {
            Interpolation::Lagrange(result) => result.value(),
            Interpolation::Spline(result) => result.value(),
        }
    }

    /// The query point.
    pub fn x(&self) -> f64 {
        match self {
            Interpolation::Lagrange(result) => result.x(),
            Interpolation::Spline(result) => result.x(),
        }
    }

    /// Intermediate results for display.
    pub fn equation(&self) -> String {
        match self {
            Interpolation::Lagrange(result) => result.equation(),
            Interpolation::Spline(result) => result.equation(),
        }
    }
}

/// Interpolates the selected points with given method and evaluates the
/// result at `x`.
pub fn interpolate(
    method: InterpolationMethod,
    points: &PointSet,
    x: f64,
) -> Result<Interpolation, InterpolationError> {
    match method {
        InterpolationMethod::Lagrange => lagrange(points, x).map(Interpolation::Lagrange),
        InterpolationMethod::Spline(degree) => {
            spline(degree, points, x).map(Interpolation::Spline)
        }
    }
}
