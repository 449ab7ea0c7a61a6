//! Unit upper-triangular matrices over Z_2, one bit per free cell.

use fgc_core::errors::FgcError;
use fgc_core::{parity64, GroupProcessor, ResidueMatrix, UlongListCache};

use crate::basis::TriangularBasisKind;
use crate::layout;

/// Processor for (order+1)x(order+1) unit upper-triangular matrices over
/// {0, 1}.
///
/// Row `r` of a code occupies `order - r` contiguous bits starting at
/// `r*order - r*(r-1)/2`; the diagonal is implicit. Multiplication gathers a
/// whole row of `a` and a whole column of `b` into single words (diagonal
/// bits padded in) and reduces their AND with one population-parity lookup
/// per cell.
#[derive(Debug, Clone, Copy)]
pub struct TriangularZ2 {
    order: usize,
    basis_kind: TriangularBasisKind,
}

impl TriangularZ2 {
    /// Largest order whose free cells fit in 64 bits (order 10 packs 55).
    pub const MAX_ORDER: usize = 10;

    /// Creates a processor, rejecting orders outside `1..=10`.
    pub fn new(order: usize, basis_kind: TriangularBasisKind) -> Result<Self, FgcError> {
        layout::require_order(order, Self::MAX_ORDER, "triangular mod 2")?;
        Ok(Self { order, basis_kind })
    }

    /// The configured basis kind.
    pub fn basis_kind(&self) -> TriangularBasisKind {
        self.basis_kind
    }

    #[inline]
    fn row_offset(&self, row: usize) -> usize {
        row * self.order - row * (row - 1) / 2
    }

    #[inline]
    fn cell(&self, code: u64, row: usize, index: usize) -> u64 {
        (code >> (self.row_offset(row) + index)) & 1
    }

    /// Row `row` of `code` as a full row vector over columns `0..=order`,
    /// entry `k` at bit `k`, diagonal included.
    #[inline]
    pub fn row_word(&self, code: u64, row: usize) -> u64 {
        let len = self.order - row;
        let content = (code >> self.row_offset(row)) & ((1u64 << len) - 1);
        (content << (row + 1)) | (1u64 << row)
    }

    /// Column `col` of `code` (`col >= 1`) as a column vector, entry `k` at
    /// bit `k`, diagonal included.
    #[inline]
    pub fn col_word(&self, code: u64, col: usize) -> u64 {
        let top = col - 1;
        let mut word = 0u64;
        let mut offset = top;
        for i in 0..=top {
            word |= ((code >> offset) & 1) << i;
            offset += self.order - i - 1;
        }
        word | (1u64 << (top + 1))
    }

    /// One generator per free cell.
    pub fn full_basis(&self) -> Vec<u64> {
        (0..self.free_element_count()).map(|i| 1u64 << i).collect()
    }

    /// One generator per superdiagonal cell.
    pub fn ribbon_basis(&self) -> Vec<u64> {
        (0..self.order)
            .map(|row| 1u64 << self.row_offset(row))
            .collect()
    }
}

impl GroupProcessor for TriangularZ2 {
    fn order(&self) -> usize {
        self.order
    }

    fn modulo(&self) -> u64 {
        2
    }

    fn element_count(&self) -> u64 {
        1u64 << self.free_element_count()
    }

    fn free_element_count(&self) -> usize {
        self.order * (self.order + 1) / 2
    }

    fn max_order(&self) -> usize {
        Self::MAX_ORDER
    }

    fn identity(&self) -> u64 {
        0
    }

    #[inline]
    fn product(&self, a: u64, b: u64) -> u64 {
        let mut result = 0u64;
        for row in 0..self.order {
            for col in 0..self.order - row {
                let a_row = self.row_word(a, row);
                let b_col = self.col_word(b, col + 1 + row);
                let dot = parity64(a_row & b_col);
                result |= dot << (self.row_offset(row) + col);
            }
        }
        result
    }

    fn next(&self, current: u64) -> u64 {
        current + 1
    }

    fn explode(&self, code: u64) -> Result<ResidueMatrix, FgcError> {
        let n = self.order + 1;
        let mut matrix = ResidueMatrix::identity(n);
        for row in 0..self.order {
            for index in 0..self.order - row {
                matrix.set(row, row + index + 1, self.cell(code, row, index));
            }
        }
        Ok(matrix)
    }

    fn implode(&self, matrix: &ResidueMatrix) -> Result<u64, FgcError> {
        layout::require_unit_upper_triangular(matrix, self.order + 1, 2)?;
        let mut code = 0u64;
        let mut offset = 0;
        for row in 0..=self.order {
            for col in row + 1..=self.order {
                code |= matrix.get(row, col) << offset;
                offset += 1;
            }
        }
        Ok(code)
    }

    fn standard_basis(&self, cache: Option<&mut dyn UlongListCache>) -> Vec<u64> {
        match self.basis_kind {
            TriangularBasisKind::Standard => self.full_basis(),
            TriangularBasisKind::Ribbon => self.ribbon_basis(),
            TriangularBasisKind::StandardWithInverses => {
                self.basis_with_inverses(&self.full_basis(), cache)
            }
            TriangularBasisKind::RibbonWithInverses => {
                self.basis_with_inverses(&self.ribbon_basis(), cache)
            }
        }
    }

    fn basis_size(&self) -> usize {
        match self.basis_kind {
            TriangularBasisKind::Standard | TriangularBasisKind::StandardWithInverses => {
                self.free_element_count()
            }
            TriangularBasisKind::Ribbon | TriangularBasisKind::RibbonWithInverses => self.order,
        }
    }

    fn basis_description(&self) -> String {
        match self.basis_kind {
            TriangularBasisKind::Standard => {
                format!("Basis: {} elements (each free 1)", self.free_element_count())
            }
            TriangularBasisKind::Ribbon => format!(
                "Basis: Upper Ribbon, ({} 1s) above main diagonal",
                self.order
            ),
            TriangularBasisKind::StandardWithInverses => format!(
                "Basis: Standard and inverses (total {} elements)",
                self.free_element_count()
            ),
            TriangularBasisKind::RibbonWithInverses => format!(
                "Basis: Ribbon and Inverses (total {} elements)",
                self.order * 2
            ),
        }
    }

    fn cache_id(&self) -> String {
        format!(
            "Tri_Z2_{n}x{n}_{kind:?}",
            n = self.order + 1,
            kind = self.basis_kind
        )
    }

    fn display_name(&self) -> String {
        format!("Triangular(Z2), {n}x{n}", n = self.order + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_bounds_are_enforced() {
        assert!(TriangularZ2::new(0, TriangularBasisKind::Standard).is_err());
        assert!(TriangularZ2::new(11, TriangularBasisKind::Standard).is_err());
        let proc = TriangularZ2::new(10, TriangularBasisKind::Standard).unwrap();
        assert_eq!(proc.free_element_count(), 55);
    }

    #[test]
    fn ribbon_basis_sits_on_the_superdiagonal() {
        let proc = TriangularZ2::new(3, TriangularBasisKind::Ribbon).unwrap();
        for (i, &generator) in proc.ribbon_basis().iter().enumerate() {
            let matrix = proc.explode(generator).unwrap();
            for row in 0..4 {
                for col in row + 1..4 {
                    let expected = u64::from(row == i && col == i + 1);
                    assert_eq!(matrix.get(row, col), expected);
                }
            }
        }
    }
}
