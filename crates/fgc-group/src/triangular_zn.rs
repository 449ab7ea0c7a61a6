//! Unit upper-triangular matrices over Z_{2^B}, B-bit packed cells.

use fgc_core::errors::FgcError;
use fgc_core::{GroupProcessor, ResidueMatrix, UlongListCache};

use crate::basis::TriangularBasisKind;
use crate::layout;

/// Processor for (order+1)x(order+1) unit upper-triangular matrices with
/// entries mod `2^bits`.
///
/// The cell layout matches [`TriangularZ2`](crate::TriangularZ2) with every
/// cell widened to a `bits`-wide field. Dot products accumulate in the
/// natural unsigned wraparound of `u64` and are masked to `bits` at the end,
/// which is exactly reduction mod `2^bits`.
#[derive(Debug, Clone, Copy)]
pub struct TriangularZn {
    order: usize,
    bits: u32,
    basis_kind: TriangularBasisKind,
}

impl TriangularZn {
    /// Creates a processor, rejecting bit widths outside `1..=32` and orders
    /// beyond [`max_order_for_bits`](Self::max_order_for_bits).
    pub fn new(order: usize, bits: u32, basis_kind: TriangularBasisKind) -> Result<Self, FgcError> {
        layout::require_bits(bits, "triangular mod 2^B")?;
        layout::require_order(order, Self::max_order_for_bits(bits), "triangular mod 2^B")?;
        Ok(Self {
            order,
            bits,
            basis_kind,
        })
    }

    /// Largest order whose `bits`-wide cells still fit in 64 bits, found by
    /// accumulating row sizes until the layout overflows.
    pub fn max_order_for_bits(bits: u32) -> usize {
        let mut total = u64::from(bits);
        let mut order = 1usize;
        let mut row_size = 1u64;
        while total <= 64 {
            order += 1;
            row_size += 1;
            total += u64::from(bits) * row_size;
        }
        order - 1
    }

    /// Configured field width in bits.
    pub fn bits_per_element(&self) -> u32 {
        self.bits
    }

    /// The configured basis kind.
    pub fn basis_kind(&self) -> TriangularBasisKind {
        self.basis_kind
    }

    #[inline]
    fn mask(&self) -> u64 {
        (1u64 << self.bits) - 1
    }

    #[inline]
    fn offset(&self, row: usize, index: usize) -> u32 {
        ((row * self.order - row * (row - 1) / 2 + index) as u32) * self.bits
    }

    #[inline]
    fn cell(&self, code: u64, row: usize, index: usize) -> u64 {
        (code >> self.offset(row, index)) & self.mask()
    }

    #[inline]
    fn replace_cell(&self, code: u64, row: usize, index: usize, value: u64) -> u64 {
        let offset = self.offset(row, index);
        (code & !(self.mask() << offset)) | (value << offset)
    }

    /// Entry of the full matrix at `(row, col)`, diagonal and zero fill
    /// included.
    #[inline]
    fn entry(&self, code: u64, row: usize, col: usize) -> u64 {
        if row == col {
            return 1;
        }
        if row > col {
            return 0;
        }
        self.cell(code, row, col - row - 1)
    }

    #[inline]
    fn dot(&self, a: u64, b: u64, a_row: usize, b_col: usize) -> u64 {
        let mut acc = 0u64;
        for k in 0..=self.order {
            let left = self.entry(a, a_row, k);
            let right = self.entry(b, k, b_col);
            acc = acc.wrapping_add(left.wrapping_mul(right));
        }
        acc & self.mask()
    }

    /// One generator per free cell.
    pub fn full_basis(&self) -> Vec<u64> {
        (0..self.free_element_count())
            .map(|i| 1u64 << (i as u32 * self.bits))
            .collect()
    }

    /// One generator per superdiagonal cell.
    pub fn ribbon_basis(&self) -> Vec<u64> {
        (0..self.order).map(|row| 1u64 << self.offset(row, 0)).collect()
    }
}

impl GroupProcessor for TriangularZn {
    fn order(&self) -> usize {
        self.order
    }

    fn modulo(&self) -> u64 {
        1u64 << self.bits
    }

    fn element_count(&self) -> u64 {
        1u64 << (self.bits * self.free_element_count() as u32)
    }

    fn free_element_count(&self) -> usize {
        self.order * (self.order + 1) / 2
    }

    fn max_order(&self) -> usize {
        Self::max_order_for_bits(self.bits)
    }

    fn identity(&self) -> u64 {
        0
    }

    fn product(&self, a: u64, b: u64) -> u64 {
        let mut result = 0u64;
        for row in 0..self.order {
            for index in 0..self.order - row {
                let col = index + row + 1;
                result = self.replace_cell(result, row, index, self.dot(a, b, row, col));
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
        layout::require_unit_upper_triangular(matrix, self.order + 1, self.modulo())?;
        let mut code = 0u64;
        let mut offset = 0u32;
        for row in 0..=self.order {
            for col in row + 1..=self.order {
                code |= matrix.get(row, col) << offset;
                offset += self.bits;
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
        let doubled = self.modulo() > 2;
        match self.basis_kind {
            TriangularBasisKind::Standard => self.free_element_count(),
            TriangularBasisKind::Ribbon => self.order,
            TriangularBasisKind::StandardWithInverses => {
                if doubled {
                    self.free_element_count() * 2
                } else {
                    self.free_element_count()
                }
            }
            TriangularBasisKind::RibbonWithInverses => {
                if doubled {
                    self.order * 2
                } else {
                    self.order
                }
            }
        }
    }

    fn basis_description(&self) -> String {
        match self.basis_kind {
            TriangularBasisKind::Standard => {
                format!("Basis: standard, no inverses ({})", self.free_element_count())
            }
            TriangularBasisKind::Ribbon => format!("Basis: ribbon, no inverses ({})", self.order),
            TriangularBasisKind::StandardWithInverses => {
                format!("Basis: standard with inverses ({})", self.basis_size())
            }
            TriangularBasisKind::RibbonWithInverses => {
                format!("Basis: ribbon with inverses ({})", self.basis_size())
            }
        }
    }

    fn cache_id(&self) -> String {
        format!(
            "Tri_Z{m}_{n}x{n}_{kind:?}",
            m = self.modulo(),
            n = self.order + 1,
            kind = self.basis_kind
        )
    }

    fn display_name(&self) -> String {
        format!(
            "Triangular(Z{m}), {n}x{n}",
            m = self.modulo(),
            n = self.order + 1
        )
    }
}
