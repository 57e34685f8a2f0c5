//! Gauss elimination.
//!
//! The system is reduced to upper triangular form by subtracting multiples of
//! the pivot row from the rows below it, then solved by back substitution.
//! When a pivot is (numerically) zero, the first row below it with a usable
//! entry in the pivot column is swapped in. If there is no such row, the
//! matrix is singular.

use getset::Getters;
use log::debug;
use nalgebra::{DMatrix, DVector};

use super::step::{EliminationStep, SubstitutionStep};
use super::{validate, LinearSystemError};
use crate::core::PIVOT_EPS;

/// Result of [`gauss`].
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct GaussSolution {
    /// The solution vector.
    x: DVector<f64>,
    /// Snapshots of the system, starting with the initial one.
    steps: Vec<EliminationStep>,
    /// Back substitution, from the last unknown to the first.
    substitution: Vec<SubstitutionStep>,
}

/// Solves `A x = b` by Gauss elimination with row swaps on zero pivots.
///
/// The inputs are not modified.
pub fn gauss(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<GaussSolution, LinearSystemError> {
    let n = validate(a, b)?;

    let mut a = a.clone();
    let mut b = b.clone();

    let mut steps = vec![EliminationStep::new("Initial matrix", &a, &b)];

    for k in 0..n {
        if a[(k, k)].abs() < PIVOT_EPS {
            let pivot = (k + 1..n)
                .find(|&i| a[(i, k)].abs() >= PIVOT_EPS)
                .ok_or(LinearSystemError::SingularMatrix { column: k })?;

            debug!("zero pivot in column {}, swapping rows {} and {}", k, k, pivot);
            a.swap_rows(k, pivot);
            b.swap_rows(k, pivot);
            steps.push(EliminationStep::new(
                format!("Swapped row {} with row {}", k + 1, pivot + 1),
                &a,
                &b,
            ));
        }

        for i in k + 1..n {
            let factor = a[(i, k)] / a[(k, k)];

            for j in k..n {
                a[(i, j)] -= factor * a[(k, j)];
            }
            b[i] -= factor * b[k];

            steps.push(EliminationStep::new(
                format!("Eliminated x{} from row {}", k + 1, i + 1),
                &a,
                &b,
            ));
        }
    }

    let mut x = DVector::zeros(n);
    let mut substitution = Vec::with_capacity(n);

    for i in (0..n).rev() {
        let d = a[(i, i)];
        if d.abs() < PIVOT_EPS {
            return Err(LinearSystemError::DivisionByZero { row: i });
        }

        let terms: Vec<_> = (i + 1..n).map(|j| (a[(i, j)], j)).collect();
        let sum: f64 = terms.iter().map(|&(c, j)| c * x[j]).sum();
        x[i] = (b[i] - sum) / d;

        substitution.push(SubstitutionStep::new("x", i, b[i], &terms, Some(d), x[i]));
    }

    Ok(GaussSolution {
        x,
        steps,
        substitution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn three_by_three() {
        let a = dmatrix![
            2.0, 1.0, -1.0;
            -3.0, -1.0, 2.0;
            -2.0, 1.0, 2.0
        ];
        let b = dvector![8.0, -11.0, -3.0];

        let solution = gauss(&a, &b).unwrap();

        assert_abs_diff_eq!(solution.x(), &dvector![2.0, 3.0, -1.0], epsilon = 1e-12);

        // Initial snapshot and one per eliminated entry.
        assert_eq!(solution.steps().len(), 4);
        assert_eq!(solution.steps()[0].description(), "Initial matrix");
        assert_eq!(solution.steps()[0].matrix(), &a);
        assert_eq!(solution.steps()[1].description(), "Eliminated x1 from row 2");
        assert_eq!(solution.steps()[3].description(), "Eliminated x2 from row 3");

        let last = solution.steps().last().unwrap().matrix();
        assert_abs_diff_eq!(last[(1, 0)], 0.0);
        assert_abs_diff_eq!(last[(2, 0)], 0.0);
        assert_abs_diff_eq!(last[(2, 1)], 0.0);

        let descriptions: Vec<_> = solution
            .substitution()
            .iter()
            .map(|step| step.description().as_str())
            .collect();
        assert_eq!(
            descriptions,
            vec!["Solving for x3", "Solving for x2", "Solving for x1"]
        );
    }

    #[test]
    fn back_substitution_formula() {
        let a = dmatrix![4.0, 2.0; 0.0, 2.0];
        let b = dvector![5.0, 1.0];

        let solution = gauss(&a, &b).unwrap();

        assert_eq!(
            solution.substitution()[0].formula(),
            "x2 = 1.0000 / 2.0000 = 0.5000"
        );
        assert_eq!(
            solution.substitution()[1].formula(),
            "x1 = (5.0000 - 2.0000x2) / 4.0000 = 1.0000"
        );
    }

    #[test]
    fn swaps_zero_pivot() {
        let a = dmatrix![0.0, 1.0; 1.0, 1.0];
        let b = dvector![2.0, 3.0];

        let solution = gauss(&a, &b).unwrap();

        assert_eq!(solution.steps()[1].description(), "Swapped row 1 with row 2");
        assert_eq!(solution.steps()[1].matrix(), &dmatrix![1.0, 1.0; 0.0, 1.0]);
        assert_eq!(solution.steps()[1].vector(), &dvector![3.0, 2.0]);
        assert_abs_diff_eq!(solution.x(), &dvector![1.0, 2.0], epsilon = 1e-12);
    }

    #[test]
    fn singular() {
        let a = dmatrix![0.0, 0.0; 0.0, 0.0];
        let b = dvector![1.0, 1.0];
        assert_eq!(
            gauss(&a, &b),
            Err(LinearSystemError::SingularMatrix { column: 0 })
        );

        let a = dmatrix![1.0, 2.0; 2.0, 4.0];
        assert_eq!(
            gauss(&a, &b),
            Err(LinearSystemError::SingularMatrix { column: 1 })
        );
    }

    #[test]
    fn inputs_untouched() {
        let a = dmatrix![0.0, 1.0; 1.0, 1.0];
        let b = dvector![2.0, 3.0];
        let (a0, b0) = (a.clone(), b.clone());

        gauss(&a, &b).unwrap();

        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }
}
