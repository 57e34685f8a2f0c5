//! Cholesky decomposition.
//!
//! A symmetric positive definite matrix is factored as `A = L Lᵀ` with lower
//! triangular `L`, computed column by column. The system is then solved by
//! forward substitution `L y = b` and back substitution `Lᵀ x = y`.
//!
//! The input is checked for symmetry up front. Positive definiteness is
//! detected during the factorization, when the value under the square root is
//! not positive.

use approx::relative_eq;
use getset::Getters;
use log::debug;
use nalgebra::{DMatrix, DVector};

use super::step::{CholeskyStep, SubstitutionStep};
use super::{validate, LinearSystemError};

/// Result of [`cholesky`].
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct CholeskySolution {
    /// Lower triangular factor.
    l: DMatrix<f64>,
    /// Solution of `L y = b`.
    y: DVector<f64>,
    /// The solution vector.
    x: DVector<f64>,
    /// Snapshots of the factor, one per column.
    steps: Vec<CholeskyStep>,
    /// Forward substitution for `y`.
    forward: Vec<SubstitutionStep>,
    /// Back substitution for `x`.
    backward: Vec<SubstitutionStep>,
}

/// Solves `A x = b` for symmetric positive definite `A` by Cholesky
/// decomposition.
///
/// The inputs are not modified.
pub fn cholesky(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
) -> Result<CholeskySolution, LinearSystemError> {
    let n = validate(a, b)?;

    for i in 0..n {
        for j in i + 1..n {
            if !relative_eq!(a[(i, j)], a[(j, i)], epsilon = 1e-9, max_relative = 1e-9) {
                return Err(LinearSystemError::NotSymmetric { row: i, column: j });
            }
        }
    }

    let mut l = DMatrix::zeros(n, n);
    let mut steps = Vec::with_capacity(n);

    for j in 0..n {
        let sum: f64 = (0..j).map(|k| l[(j, k)] * l[(j, k)]).sum();
        let d = a[(j, j)] - sum;

        if d <= 0.0 {
            debug!("non-positive value {} on diagonal in column {}", d, j);
            return Err(LinearSystemError::NotPositiveDefinite {
                column: j,
                value: d,
            });
        }

        let ljj = d.sqrt();
        l[(j, j)] = ljj;

        for i in j + 1..n {
            let sum: f64 = (0..j).map(|k| l[(i, k)] * l[(j, k)]).sum();
            l[(i, j)] = (a[(i, j)] - sum) / ljj;
        }

        steps.push(CholeskyStep::new(format!("Column {}", j + 1), &l));
    }

    let mut y = DVector::zeros(n);
    let mut forward = Vec::with_capacity(n);

    for i in 0..n {
        let terms: Vec<_> = (0..i).map(|j| (l[(i, j)], j)).collect();
        let sum: f64 = terms.iter().map(|&(c, j)| c * y[j]).sum();
        y[i] = (b[i] - sum) / l[(i, i)];

        forward.push(SubstitutionStep::new(
            "y",
            i,
            b[i],
            &terms,
            Some(l[(i, i)]),
            y[i],
        ));
    }

    let mut x = DVector::zeros(n);
    let mut backward = Vec::with_capacity(n);

    // Lᵀ[i][j] = L[j][i]
    for i in (0..n).rev() {
        let terms: Vec<_> = (i + 1..n).map(|j| (l[(j, i)], j)).collect();
        let sum: f64 = terms.iter().map(|&(c, j)| c * x[j]).sum();
        x[i] = (y[i] - sum) / l[(i, i)];

        backward.push(SubstitutionStep::new(
            "x",
            i,
            y[i],
            &terms,
            Some(l[(i, i)]),
            x[i],
        ));
    }

    Ok(CholeskySolution {
        l,
        y,
        x,
        steps,
        forward,
        backward,
    })
}
