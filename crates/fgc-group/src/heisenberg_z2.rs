//! Discrete Heisenberg group over Z_2, single-bit x/y/z segments.

use fgc_core::errors::FgcError;
use fgc_core::{parity64, GroupProcessor, ResidueMatrix, UlongListCache};

use crate::basis::HeisenbergZ2BasisKind;
use crate::layout;

/// Processor for the (order+2)x(order+2) Heisenberg matrices over {0, 1}.
///
/// A code packs `[x_0..x_{n-1} | y_0..y_{n-1} | z]`: row-0 entries, the last
/// column, and the top-right corner scalar. The product XORs x and y and
/// rebuilds z from one whole-word parity: a row word carrying `1, x_a, z_a`
/// ANDed with a column word carrying `z_b, y_b, 1` has parity
/// `z_a + z_b + sum(x_a_i * y_b_i)` mod 2, the defining commutator identity.
#[derive(Debug, Clone, Copy)]
pub struct HeisenbergZ2 {
    order: usize,
    basis_kind: HeisenbergZ2BasisKind,
}

impl HeisenbergZ2 {
    /// Conservative ceiling; keeps the dense distance table under 2^29
    /// entries even though the packing itself could host more.
    pub const MAX_ORDER: usize = 14;

    /// Creates a processor, rejecting orders outside `1..=14`.
    pub fn new(order: usize, basis_kind: HeisenbergZ2BasisKind) -> Result<Self, FgcError> {
        layout::require_order(order, Self::MAX_ORDER, "Heisenberg mod 2")?;
        Ok(Self { order, basis_kind })
    }

    /// The configured basis kind.
    pub fn basis_kind(&self) -> HeisenbergZ2BasisKind {
        self.basis_kind
    }

    #[inline]
    fn x(&self, code: u64, i: usize) -> u64 {
        (code >> i) & 1
    }

    #[inline]
    fn y(&self, code: u64, i: usize) -> u64 {
        (code >> (i + self.order)) & 1
    }

    #[inline]
    fn z(&self, code: u64) -> u64 {
        (code >> (2 * self.order)) & 1
    }
}

impl GroupProcessor for HeisenbergZ2 {
    fn order(&self) -> usize {
        self.order
    }

    fn modulo(&self) -> u64 {
        2
    }

    fn element_count(&self) -> u64 {
        1u64 << (2 * self.order + 1)
    }

    fn free_element_count(&self) -> usize {
        2 * self.order + 1
    }

    fn max_order(&self) -> usize {
        Self::MAX_ORDER
    }

    fn identity(&self) -> u64 {
        0
    }

    #[inline]
    fn product(&self, a: u64, b: u64) -> u64 {
        let order = self.order;
        let xored = a ^ b;

        let mut row_bits = self.z(a) << (order + 1);
        row_bits |= (a & ((1u64 << order) - 1)) << 1;
        row_bits |= 1;

        let mut col_bits = 1u64 << (order + 1);
        col_bits |= ((b >> order) & ((1u64 << order) - 1)) << 1;
        col_bits |= self.z(b);

        let parity = parity64(row_bits & col_bits);
        (xored & !(1u64 << (2 * order))) | (parity << (2 * order))
    }

    fn next(&self, current: u64) -> u64 {
        current + 1
    }

    fn explode(&self, code: u64) -> Result<ResidueMatrix, FgcError> {
        let n = self.order + 2;
        let mut matrix = ResidueMatrix::identity(n);
        for i in 0..self.order {
            matrix.set(0, i + 1, self.x(code, i));
            matrix.set(i + 1, self.order + 1, self.y(code, i));
        }
        matrix.set(0, self.order + 1, self.z(code));
        Ok(matrix)
    }

    fn implode(&self, matrix: &ResidueMatrix) -> Result<u64, FgcError> {
        layout::require_heisenberg(matrix, self.order, 2)?;
        let mut code = 0u64;
        for i in 0..self.order {
            code |= matrix.get(0, i + 1) << i;
            code |= matrix.get(i + 1, self.order + 1) << (self.order + i);
        }
        code |= matrix.get(0, self.order + 1) << (2 * self.order);
        Ok(code)
    }

    fn standard_basis(&self, _cache: Option<&mut dyn UlongListCache>) -> Vec<u64> {
        (0..self.basis_size()).map(|i| 1u64 << i).collect()
    }

    fn basis_size(&self) -> usize {
        match self.basis_kind {
            HeisenbergZ2BasisKind::Standard => self.free_element_count() - 1,
            HeisenbergZ2BasisKind::StandardWithZ => self.free_element_count(),
        }
    }

    fn basis_description(&self) -> String {
        match self.basis_kind {
            HeisenbergZ2BasisKind::Standard => {
                format!("Basis: {} elements, no Z", self.free_element_count() - 1)
            }
            HeisenbergZ2BasisKind::StandardWithZ => {
                format!("Basis: {} elements, with Z", self.free_element_count())
            }
        }
    }

    fn cache_id(&self) -> String {
        format!(
            "Heis_Z2_{n}x{n}_{kind:?}",
            n = self.order + 2,
            kind = self.basis_kind
        )
    }

    fn display_name(&self) -> String {
        format!("Heisenberg(Z2), {n}x{n}", n = self.order + 2)
    }
}
