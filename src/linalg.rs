//! Direct solvers for square linear systems `A x = b`.
//!
//! * [Gauss elimination](gauss()) with row swaps on zero pivots
//! * [LU decomposition](lu()) (Doolittle, no pivoting)
//! * [Cholesky decomposition](cholesky()) for symmetric positive definite
//!   matrices
//!
//! Each solver returns the solution together with the intermediate states of
//! the computation, so that the work can be shown step by step. Use
//! [`solve_linear_system`] to select the method at runtime.
//!
//! ```rust
//! use numeth::linalg::{solve_linear_system, LinearMethod};
//! use numeth::nalgebra::{dmatrix, dvector};
//!
//! let a = dmatrix![2.0, 1.0; 1.0, 3.0];
//! let b = dvector![3.0, 5.0];
//!
//! let solution = solve_linear_system(LinearMethod::Gauss, &a, &b)?;
//! assert!((solution.x()[0] - 0.8).abs() < 1e-12);
//! assert!((solution.x()[1] - 1.4).abs() < 1e-12);
//! # Ok::<(), numeth::linalg::LinearSystemError>(())
//! ```

mod cholesky;
mod gauss;
mod lu;
mod step;

use std::fmt;

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

pub use cholesky::{cholesky, CholeskySolution};
pub use gauss::{gauss, GaussSolution};
pub use lu::{lu, LuSolution};
pub use step::{CholeskyStep, EliminationStep, LuStep, SubstitutionStep};

fn entry_location(row: &usize, column: &Option<usize>) -> String {
    match column {
        Some(column) => format!("in row {}, column {}", row, column),
        None => format!("in row {} of the right-hand side", row),
    }
}

/// Error of a direct linear solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinearSystemError {
    /// The matrix is not square, is empty, or the right-hand side has a
    /// different length.
    #[error("dimension mismatch: {rows}x{columns} matrix with right-hand side of length {rhs}")]
    DimensionMismatch {
        /// Number of rows of the matrix.
        rows: usize,
        /// Number of columns of the matrix.
        columns: usize,
        /// Length of the right-hand side.
        rhs: usize,
    },
    /// An input entry is infinite or NaN. `column` is `None` for the
    /// right-hand side.
    #[error("non-finite entry {}", entry_location(.row, .column))]
    NonFinite {
        /// Row of the entry.
        row: usize,
        /// Column of the entry, `None` for the right-hand side.
        column: Option<usize>,
    },
    /// No usable pivot in the column.
    #[error("matrix is singular (no pivot in column {column})")]
    SingularMatrix {
        /// The pivot column.
        column: usize,
    },
    /// Zero diagonal entry during substitution or decomposition.
    #[error("division by zero in row {row}")]
    DivisionByZero {
        /// The offending row.
        row: usize,
    },
    /// The matrix is not symmetric.
    #[error("matrix is not symmetric (entries ({row}, {column}) and ({column}, {row}) differ)")]
    NotSymmetric {
        /// Row of the upper entry.
        row: usize,
        /// Column of the upper entry.
        column: usize,
    },
    /// Non-positive value under the square root.
    #[error("matrix is not positive definite (value {value} in column {column})")]
    NotPositiveDefinite {
        /// The column being factored.
        column: usize,
        /// The value under the square root.
        value: f64,
    },
}

/// Checks the shape and entries of the system and returns its dimension.
pub(crate) fn validate(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<usize, LinearSystemError> {
    let (rows, columns) = a.shape();

    if rows == 0 || rows != columns || b.len() != rows {
        return Err(LinearSystemError::DimensionMismatch {
            rows,
            columns,
            rhs: b.len(),
        });
    }

    for i in 0..rows {
        if let Some(j) = (0..columns).find(|&j| !a[(i, j)].is_finite()) {
            return Err(LinearSystemError::NonFinite {
                row: i,
                column: Some(j),
            });
        }

        if !b[i].is_finite() {
            return Err(LinearSystemError::NonFinite {
                row: i,
                column: None,
            });
        }
    }

    Ok(rows)
}

/// Direct method for solving a linear system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinearMethod {
    /// [`gauss()`]
    Gauss,
    /// [`lu()`]
    Lu,
    /// [`cholesky()`]
    Cholesky,
}

impl LinearMethod {
    /// Human readable name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            LinearMethod::Gauss => "Gauss elimination",
            LinearMethod::Lu => "LU decomposition",
            LinearMethod::Cholesky => "Cholesky decomposition",
        }
    }
}

impl fmt::Display for LinearMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of [`solve_linear_system`], specific to the method used.
#[derive(Debug, Clone, PartialEq)]
pub enum LinearSolution {
    /// Solution by Gauss elimination.
    Gauss(GaussSolution),
    /// Solution by LU decomposition.
    Lu(LuSolution),
    /// Solution by Cholesky decomposition.
    Cholesky(CholeskySolution),
}

impl LinearSolution {
    /// The method that produced the solution.
    pub fn method(&self) -> LinearMethod {
        match self {
            LinearSolution::Gauss(_) => LinearMethod::Gauss,
            LinearSolution::Lu(_) => LinearMethod::Lu,
            LinearSolution::Cholesky(_) => LinearMethod::Cholesky,
        }
    }

    /// The solution vector.
    pub fn x(&self) -> &DVector<f64> {
        match self {
            LinearSolution::Gauss(solution) => solution.x(),
            LinearSolution::Lu(solution) => solution.x(),
            LinearSolution::Cholesky(solution) => solution.x(),
        }
    }
}

/// Solves `A x = b` with given method.
pub fn solve_linear_system(
    method: LinearMethod,
    a: &DMatrix<f64>,
    b: &DVector<f64>,
) -> Result<LinearSolution, LinearSystemError> {
    match method {
        LinearMethod::Gauss => gauss(a, b).map(LinearSolution::Gauss),
        LinearMethod::Lu => lu(a, b).map(LinearSolution::Lu),
        LinearMethod::Cholesky => cholesky(a, b).map(LinearSolution::Cholesky),
    }
}
