//! Spline interpolation.
//!
//! Only linear splines are supported. The selected points are sorted by
//! abscissa and each pair of neighbours is connected by a straight line.

use std::fmt;

use getset::{CopyGetters, Getters};
use log::debug;

use super::points::{Point, PointSet};
use super::{check_query, selected_points, InterpolationError};

/// Degree of spline polynomials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplineDegree {
    /// Piecewise linear.
    Linear,
    /// Piecewise quadratic. Not supported.
    Quadratic,
    /// Piecewise cubic. Not supported.
    Cubic,
}

impl SplineDegree {
    /// Human readable name of the spline.
    pub fn name(&self) -> &'static str {
        match self {
            SplineDegree::Linear => "linear spline",
            SplineDegree::Quadratic => "quadratic spline",
            SplineDegree::Cubic => "cubic spline",
        }
    }
}

impl fmt::Display for SplineDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Line segment `f(x) = f0 + slope (x - x0)` on `[x0, x1]`.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct SplinePiece {
    /// Zero-based position of the piece.
    index: usize,
    /// Left end.
    x0: f64,
    /// Right end.
    x1: f64,
    /// Value at the left end.
    f0: f64,
    /// Slope of the segment.
    slope: f64,
}

impl SplinePiece {
    fn new(index: usize, p0: Point, p1: Point) -> Self {
        Self {
            index,
            x0: p0.x,
            x1: p1.x,
            f0: p0.fx,
            slope: (p1.fx - p0.fx) / (p1.x - p0.x),
        }
    }

    /// Whether `x` lies in the closed interval of the piece.
    pub fn contains(&self, x: f64) -> bool {
        self.x0 <= x && x <= self.x1
    }

    /// Evaluates the segment at `x` (also outside of its interval).
    pub fn eval(&self, x: f64) -> f64 {
        self.f0 + self.slope * (x - self.x0)
    }
}

impl fmt::Display for SplinePiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "f{}(x) = {} + ({})(x - {}), {} <= x <= {}",
            self.index + 1,
            self.f0,
            self.slope,
            self.x0,
            self.x0,
            self.x1
        )
    }
}

/// Result of [`linear_spline`].
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct SplineInterpolation {
    /// The query point.
    #[getset(get_copy = "pub")]
    x: f64,
    /// Interpolated value.
    #[getset(get_copy = "pub")]
    value: f64,
    /// All pieces of the spline, in ascending order.
    #[getset(get = "pub")]
    pieces: Vec<SplinePiece>,
    /// Position of the piece used for the query point.
    #[getset(get_copy = "pub")]
    piece: usize,
}

impl SplineInterpolation {
    /// The pieces, one per line.
    pub fn equation(&self) -> String {
        self.pieces
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The evaluation for display, e.g. `"f(0.5) = 0.5"`.
    pub fn answer(&self) -> String {
        format!("f({}) = {}", self.x, self.value)
    }
}

/// Interpolates the selected points by a linear spline and evaluates it at `x`.
///
/// The query point must lie between the smallest and the largest selected
/// abscissa. At a knot, the piece on the left is used (both give the same
/// value).
pub fn linear_spline(points: &PointSet, x: f64) -> Result<SplineInterpolation, InterpolationError> {
    check_query(x)?;
    let mut selected = selected_points(points)?;

    // Stable, so equal abscissae keep their order for the error report.
    selected.sort_by(|(_, p), (_, q)| p.x.total_cmp(&q.x));

    if let Some(pair) = selected.windows(2).find(|pair| pair[0].1.x == pair[1].1.x) {
        let (first, second) = (pair[0].0.min(pair[1].0), pair[0].0.max(pair[1].0));
        return Err(InterpolationError::DuplicateAbscissa {
            first,
            second,
            x: pair[0].1.x,
        });
    }

    let pieces: Vec<_> = selected
        .windows(2)
        .enumerate()
        .map(|(i, pair)| SplinePiece::new(i, pair[0].1, pair[1].1))
        .collect();

    let piece = pieces
        .iter()
        .position(|piece| piece.contains(x))
        .ok_or_else(|| {
            let min = selected[0].1.x;
            let max = selected[selected.len() - 1].1.x;
            debug!("query point {} outside of [{}, {}]", x, min, max);
            InterpolationError::OutOfRange { x, min, max }
        })?;

    Ok(SplineInterpolation {
        x,
        value: pieces[piece].eval(x),
        pieces,
        piece,
    })
}

/// Spline interpolation of given degree.
///
/// Only [`SplineDegree::Linear`] is supported, the other degrees fail with
/// [`InterpolationError::UnsupportedMethod`].
pub fn spline(
    degree: SplineDegree,
    points: &PointSet,
    x: f64,
) -> Result<SplineInterpolation, InterpolationError> {
    match degree {
        SplineDegree::Linear => linear_spline(points, x),
        SplineDegree::Quadratic | SplineDegree::Cubic => {
            Err(InterpolationError::UnsupportedMethod {
                method: degree.name(),
            })
        }
    }
}
