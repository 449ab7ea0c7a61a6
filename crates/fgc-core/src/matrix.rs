//! Explicit residue-matrix form used for verification.

use std::fmt;

use crate::errors::{ErrorInfo, FgcError};

/// Dense matrix of residues, the explicit counterpart of a packed code.
///
/// Only `explode`/`implode` round-trips and the product self-check touch
/// this form; packed multiplication never materializes a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidueMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u64>,
}

impl ResidueMatrix {
    /// Creates a zero matrix of the given shape.
    pub fn zero(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Creates the `n`-by-`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zero(n, n);
        for i in 0..n {
            matrix.set(i, i, 1);
        }
        matrix
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.cells[row * self.cols + col]
    }

    /// Overwrites the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        self.cells[row * self.cols + col] = value;
    }

    /// Plain O(n^3) modular matrix product, the reference for every packed
    /// multiplication rule. Never used on a hot path.
    pub fn multiply(&self, other: &ResidueMatrix, modulo: u64) -> Result<ResidueMatrix, FgcError> {
        if self.cols != other.rows {
            return Err(FgcError::Group(
                ErrorInfo::new("matrix-shape", "matrix dimensions do not match")
                    .with_context("left", format!("{}x{}", self.rows, self.cols))
                    .with_context("right", format!("{}x{}", other.rows, other.cols)),
            ));
        }
        let mut result = ResidueMatrix::zero(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0u64;
                for k in 0..self.cols {
                    acc = acc.wrapping_add(self.get(i, k).wrapping_mul(other.get(k, j)));
                    acc %= modulo;
                }
                result.set(i, j, acc);
            }
        }
        Ok(result)
    }
}

impl fmt::Display for ResidueMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_neutral() {
        let mut a = ResidueMatrix::identity(3);
        a.set(0, 1, 1);
        a.set(1, 2, 1);
        let id = ResidueMatrix::identity(3);
        assert_eq!(a.multiply(&id, 2).unwrap(), a);
        assert_eq!(id.multiply(&a, 2).unwrap(), a);
    }

    #[test]
    fn product_reduces_modulo() {
        let mut a = ResidueMatrix::identity(2);
        a.set(0, 1, 3);
        let mut b = ResidueMatrix::identity(2);
        b.set(0, 1, 3);
        let product = a.multiply(&b, 4).unwrap();
        assert_eq!(product.get(0, 1), 2);
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let a = ResidueMatrix::zero(2, 3);
        let b = ResidueMatrix::zero(2, 3);
        let err = a.multiply(&b, 2).unwrap_err();
        assert_eq!(err.info().code, "matrix-shape");
    }
}
