//! LU decomposition.
//!
//! The matrix is factored as `A = L U` with unit lower triangular `L` and
//! upper triangular `U` (Doolittle's method), then `L y = b` is solved by
//! forward substitution and `U x = y` by back substitution.
//!
//! **Limitation:** no pivoting is done, so the decomposition fails on a zero
//! pivot even for some non-singular matrices (use [`gauss`](super::gauss())
//! for those).

use getset::Getters;
use log::debug;
use nalgebra::{DMatrix, DVector};

use super::step::{LuStep, SubstitutionStep};
use super::{validate, LinearSystemError};
use crate::core::PIVOT_EPS;

/// Result of [`lu`].
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct LuSolution {
    /// Unit lower triangular factor.
    l: DMatrix<f64>,
    /// Upper triangular factor.
    u: DMatrix<f64>,
    /// Solution of `L y = b`.
    y: DVector<f64>,
    /// The solution vector.
    x: DVector<f64>,
    /// Snapshots of the factors, one per row of `U`.
    steps: Vec<LuStep>,
    /// Forward substitution for `y`.
    forward: Vec<SubstitutionStep>,
    /// Back substitution for `x`.
    backward: Vec<SubstitutionStep>,
}

/// Solves `A x = b` by LU decomposition without pivoting.
///
/// The inputs are not modified.
pub fn lu(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<LuSolution, LinearSystemError> {
    let n = validate(a, b)?;

    let mut l = DMatrix::zeros(n, n);
    let mut u = DMatrix::zeros(n, n);
    let mut steps = Vec::with_capacity(n);

    for i in 0..n {
        for j in i..n {
            let sum: f64 = (0..i).map(|k| l[(i, k)] * u[(k, j)]).sum();
            u[(i, j)] = a[(i, j)] - sum;
        }

        if u[(i, i)].abs() < PIVOT_EPS {
            debug!("zero pivot u[{}][{}] = {}", i, i, u[(i, i)]);
            return Err(LinearSystemError::DivisionByZero { row: i });
        }

        l[(i, i)] = 1.0;
        for j in i + 1..n {
            let sum: f64 = (0..i).map(|k| l[(j, k)] * u[(k, i)]).sum();
            l[(j, i)] = (a[(j, i)] - sum) / u[(i, i)];
        }

        steps.push(LuStep::new(format!("Step {}", i + 1), &l, &u));
    }

    let mut y = DVector::zeros(n);
    let mut forward = Vec::with_capacity(n);

    for i in 0..n {
        let terms: Vec<_> = (0..i).map(|j| (l[(i, j)], j)).collect();
        let sum: f64 = terms.iter().map(|&(c, j)| c * y[j]).sum();
        y[i] = b[i] - sum;

        forward.push(SubstitutionStep::new("y", i, b[i], &terms, None, y[i]));
    }

    let mut x = DVector::zeros(n);
    let mut backward = Vec::with_capacity(n);

    for i in (0..n).rev() {
        let terms: Vec<_> = (i + 1..n).map(|j| (u[(i, j)], j)).collect();
        let sum: f64 = terms.iter().map(|&(c, j)| c * x[j]).sum();
        x[i] = (y[i] - sum) / u[(i, i)];

        backward.push(SubstitutionStep::new(
            "x",
            i,
            y[i],
            &terms,
            Some(u[(i, i)]),
            x[i],
        ));
    }

    Ok(LuSolution {
        l,
        u,
        y,
        x,
        steps,
        forward,
        backward,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn factors() {
        let a = dmatrix![
            4.0, 3.0, 2.0;
            8.0, 7.0, 9.0;
            4.0, 6.0, 5.0
        ];
        let b = dvector![9.0, 24.0, 15.0];

        let solution = lu(&a, &b).unwrap();

        assert_abs_diff_eq!(
            solution.l(),
            &dmatrix![
                1.0, 0.0, 0.0;
                2.0, 1.0, 0.0;
                1.0, 3.0, 1.0
            ],
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            solution.u(),
            &dmatrix![
                4.0, 3.0, 2.0;
                0.0, 1.0, 5.0;
                0.0, 0.0, -12.0
            ],
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(solution.l() * solution.u(), a, epsilon = 1e-12);
        assert_abs_diff_eq!(&a * solution.x(), b, epsilon = 1e-12);
    }

    #[test]
    fn steps() {
        let a = dmatrix![2.0, 1.0; 4.0, 5.0];
        let b = dvector![3.0, 9.0];

        let solution = lu(&a, &b).unwrap();

        assert_eq!(solution.steps().len(), 2);
        assert_eq!(solution.steps()[0].description(), "Step 1");
        // After the first step, only the first row of U and column of L are known.
        assert_eq!(solution.steps()[0].u(), &dmatrix![2.0, 1.0; 0.0, 0.0]);
        assert_eq!(solution.steps()[0].l(), &dmatrix![1.0, 0.0; 2.0, 0.0]);

        assert_eq!(solution.y(), &dvector![3.0, 3.0]);
        assert_eq!(solution.forward()[0].description(), "Solving for y1");
        assert_eq!(solution.forward()[1].formula(), "y2 = 9.0000 - 2.0000y1 = 3.0000");

        assert_eq!(solution.x(), &dvector![1.0, 1.0]);
        assert_eq!(solution.backward()[0].formula(), "x2 = 3.0000 / 3.0000 = 1.0000");
        assert_eq!(
            solution.backward()[1].formula(),
            "x1 = (3.0000 - 1.0000x2) / 2.0000 = 1.0000"
        );
    }

    #[test]
    fn zero_pivot() {
        // Non-singular, but needs a row swap.
        let a = dmatrix![0.0, 1.0; 1.0, 1.0];
        let b = dvector![2.0, 3.0];

        assert_eq!(lu(&a, &b), Err(LinearSystemError::DivisionByZero { row: 0 }));
    }

    #[test]
    fn singular() {
        let a = dmatrix![1.0, 2.0; 2.0, 4.0];
        let b = dvector![1.0, 2.0];

        assert_eq!(lu(&a, &b), Err(LinearSystemError::DivisionByZero { row: 1 }));
    }
}
