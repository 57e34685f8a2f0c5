//! Lagrange interpolation.
//!
//! The interpolating polynomial through the selected points `(x_i, f_i)` is
//!
//! ```text
//! P(x) = Σ f_i L_i(x),  L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)
//! ```
//!
//! It is evaluated directly at the query point, without constructing the
//! coefficients.

use std::fmt;

use getset::{CopyGetters, Getters};

use super::points::PointSet;
use super::{check_query, selected_points, InterpolationError};

/// Value of one basis polynomial at the query point.
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct LagrangeTerm {
    /// Zero-based position among the selected points.
    index: usize,
    /// `L_i(x)`.
    weight: f64,
}

impl fmt::Display for LagrangeTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{} = {:.4}", self.index + 1, self.weight)
    }
}

/// Result of [`lagrange`].
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct LagrangeInterpolation {
    /// The query point.
    #[getset(get_copy = "pub")]
    x: f64,
    /// Interpolated value.
    #[getset(get_copy = "pub")]
    value: f64,
    /// Basis polynomial values, one per selected point.
    #[getset(get = "pub")]
    terms: Vec<LagrangeTerm>,
}

impl LagrangeInterpolation {
    /// The terms joined for display, e.g. `"L1 = 0.5000, L2 = 0.5000"`.
    pub fn equation(&self) -> String {
        self.terms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Evaluates the Lagrange polynomial through the selected points at `x`.
pub fn lagrange(points: &PointSet, x: f64) -> Result<LagrangeInterpolation, InterpolationError> {
    check_query(x)?;
    let selected = selected_points(points)?;

    for (a, &(first, p)) in selected.iter().enumerate() {
        if let Some(&(second, _)) = selected[a + 1..].iter().find(|(_, q)| q.x == p.x) {
            return Err(InterpolationError::DuplicateAbscissa {
                first,
                second,
                x: p.x,
            });
        }
    }

    let mut value = 0.0;
    let mut terms = Vec::with_capacity(selected.len());

    for (i, &(_, pi)) in selected.iter().enumerate() {
        let weight: f64 = selected
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &(_, pj))| (x - pj.x) / (pi.x - pj.x))
            .product();

        value += pi.fx * weight;
        terms.push(LagrangeTerm { index: i, weight });
    }

    Ok(LagrangeInterpolation { x, value, terms })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn reproduces_nodes() {
        let data = [
            (0.0, 9.81),
            (20_000.0, 9.7487),
            (40_000.0, 9.6879),
            (60_000.0, 9.6879),
            (80_000.0, 9.5682),
        ];
        let points: PointSet = data.into_iter().collect();

        for (x, fx) in data {
            let result = lagrange(&points, x).unwrap();
            assert_abs_diff_eq!(result.value(), fx, epsilon = 1e-9);
        }
    }

    #[test]
    fn exact_for_polynomials() {
        // Three points determine a quadratic exactly.
        let points: PointSet = [-1.0, 0.5, 2.0]
            .into_iter()
            .map(|x: f64| (x, x * x - 3.0 * x + 1.0))
            .collect();

        let result = lagrange(&points, 1.0).unwrap();
        assert_abs_diff_eq!(result.value(), -1.0, epsilon = 1e-12);

        let weights: f64 = result.terms().iter().map(|term| term.weight()).sum();
        assert_abs_diff_eq!(weights, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn terms() {
        let points: PointSet = [(0.0, 0.0), (2.0, 4.0)].into_iter().collect();

        let result = lagrange(&points, 0.5).unwrap();

        assert_abs_diff_eq!(result.value(), 1.0);
        assert_eq!(result.terms()[0].to_string(), "L1 = 0.7500");
        assert_eq!(result.equation(), "L1 = 0.7500, L2 = 0.2500");
    }

    #[test]
    fn uses_selected_only() {
        let mut points: PointSet = [(0.0, 0.0), (1.0, 100.0), (2.0, 2.0)].into_iter().collect();
        points.set_selected(1, false).unwrap();

        let result = lagrange(&points, 1.0).unwrap();

        assert_eq!(result.terms().len(), 2);
        assert_abs_diff_eq!(result.value(), 1.0);
    }

    #[test]
    fn insufficient_points() {
        let mut points: PointSet = [(0.0, 0.0), (1.0, 1.0)].into_iter().collect();
        points.set_selected(0, false).unwrap();

        assert_eq!(
            lagrange(&points, 0.5),
            Err(InterpolationError::InsufficientPoints { selected: 1 })
        );
    }

    #[test]
    fn duplicate_abscissa() {
        let points: PointSet = [(0.0, 0.0), (1.0, 1.0), (0.0, 2.0)].into_iter().collect();

        assert_eq!(
            lagrange(&points, 0.5),
            Err(InterpolationError::DuplicateAbscissa {
                first: 0,
                second: 2,
                x: 0.0
            })
        );
    }
}
