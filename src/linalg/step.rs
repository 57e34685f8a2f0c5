use std::fmt::Write;

use getset::Getters;
use nalgebra::{DMatrix, DVector};

/// Snapshot of the augmented system during Gauss elimination.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct EliminationStep {
    /// What was done, e.g. `"Eliminated x1 from row 2"`.
    description: String,
    /// Coefficient matrix after the operation.
    matrix: DMatrix<f64>,
    /// Right-hand side after the operation.
    vector: DVector<f64>,
}

impl EliminationStep {
    pub(crate) fn new(
        description: impl Into<String>,
        matrix: &DMatrix<f64>,
        vector: &DVector<f64>,
    ) -> Self {
        Self {
            description: description.into(),
            matrix: matrix.clone(),
            vector: vector.clone(),
        }
    }
}

/// Snapshot of both factors during LU decomposition.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct LuStep {
    /// `"Step i"`.
    description: String,
    /// Lower triangular factor computed so far.
    l: DMatrix<f64>,
    /// Upper triangular factor computed so far.
    u: DMatrix<f64>,
}

impl LuStep {
    pub(crate) fn new(description: impl Into<String>, l: &DMatrix<f64>, u: &DMatrix<f64>) -> Self {
        Self {
            description: description.into(),
            l: l.clone(),
            u: u.clone(),
        }
    }
}

/// Snapshot of the factor during Cholesky decomposition.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct CholeskyStep {
    /// `"Column j"`.
    description: String,
    /// Lower triangular factor computed so far.
    l: DMatrix<f64>,
}

impl CholeskyStep {
    pub(crate) fn new(description: impl Into<String>, l: &DMatrix<f64>) -> Self {
        Self {
            description: description.into(),
            l: l.clone(),
        }
    }
}

/// One row of forward or back substitution.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct SubstitutionStep {
    /// `"Solving for x3"` and similar.
    description: String,
    /// The computation with values, e.g.
    /// `"x1 = (5.0000 - 2.0000x2) / 4.0000 = 0.7500"`.
    formula: String,
}

impl SubstitutionStep {
    /// Builds the record of computing `name{i+1} = (rhs - Σ c name{j+1}) / divisor`.
    ///
    /// Numbers are shown with four decimals, indices are one-based.
    pub(crate) fn new(
        name: &str,
        i: usize,
        rhs: f64,
        terms: &[(f64, usize)],
        divisor: Option<f64>,
        value: f64,
    ) -> Self {
        let mut numerator = format!("{:.4}", rhs);
        for &(c, j) in terms {
            // Writing into a String cannot fail.
            let _ = if c < 0.0 {
                write!(numerator, " + {:.4}{}{}", -c, name, j + 1)
            } else {
                write!(numerator, " - {:.4}{}{}", c, name, j + 1)
            };
        }

        let expr = match divisor {
            Some(d) if terms.is_empty() => format!("{} / {:.4}", numerator, d),
            Some(d) => format!("({}) / {:.4}", numerator, d),
            None => numerator,
        };

        Self {
            description: format!("Solving for {}{}", name, i + 1),
            formula: format!("{}{} = {} = {:.4}", name, i + 1, expr, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitution_formula() {
        let step = SubstitutionStep::new("x", 0, 5.0, &[(2.0, 1), (-1.5, 2)], Some(4.0), 1.25);
        assert_eq!(step.description(), "Solving for x1");
        assert_eq!(
            step.formula(),
            "x1 = (5.0000 - 2.0000x2 + 1.5000x3) / 4.0000 = 1.2500"
        );

        let step = SubstitutionStep::new("x", 2, 5.0, &[], Some(2.0), 2.5);
        assert_eq!(step.formula(), "x3 = 5.0000 / 2.0000 = 2.5000");

        let step = SubstitutionStep::new("y", 1, 3.0, &[(0.5, 0)], None, 2.0);
        assert_eq!(step.formula(), "y2 = 3.0000 - 0.5000y1 = 2.0000");
    }
}
