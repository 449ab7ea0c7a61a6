//! Discrete Heisenberg group over Z_{2^B}, B-bit x/y/z segments.

use fgc_core::errors::FgcError;
use fgc_core::{GroupProcessor, ResidueMatrix, UlongListCache};

use crate::basis::HeisenbergBasisKind;
use crate::layout;

/// Processor for (order+2)x(order+2) Heisenberg matrices with entries mod
/// `2^bits`.
///
/// x and y segments add element-wise; the z cell accumulates
/// `sum_i(x_a_i * y_b_i)` first, then `z_a + z_b`, and only then reduces —
/// that accumulation order is part of the contract.
#[derive(Debug, Clone, Copy)]
pub struct HeisenbergZn {
    order: usize,
    bits: u32,
    basis_kind: HeisenbergBasisKind,
}

impl HeisenbergZn {
    /// Creates a processor, rejecting bit widths outside `1..=32` and orders
    /// beyond [`max_order_for_bits`](Self::max_order_for_bits).
    pub fn new(order: usize, bits: u32, basis_kind: HeisenbergBasisKind) -> Result<Self, FgcError> {
        layout::require_bits(bits, "Heisenberg mod 2^B")?;
        let max_order = Self::max_order_for_bits(bits);
        if max_order == 0 {
            return Err(FgcError::Config(
                fgc_core::ErrorInfo::new(
                    "bits-too-wide",
                    "no Heisenberg order fits 64 bits at this width",
                )
                .with_context("bits", bits.to_string()),
            ));
        }
        layout::require_order(order, max_order, "Heisenberg mod 2^B")?;
        Ok(Self {
            order,
            bits,
            basis_kind,
        })
    }

    /// Largest order whose `2*order+1` fields of `bits` still fit in 64 bits.
    pub fn max_order_for_bits(bits: u32) -> usize {
        ((64 / bits as usize).saturating_sub(1)) / 2
    }

    /// Configured field width in bits.
    pub fn bits_per_element(&self) -> u32 {
        self.bits
    }

    /// The configured basis kind.
    pub fn basis_kind(&self) -> HeisenbergBasisKind {
        self.basis_kind
    }

    #[inline]
    fn mask(&self) -> u64 {
        (1u64 << self.bits) - 1
    }

    #[inline]
    fn x(&self, code: u64, i: usize) -> u64 {
        (code >> (i as u32 * self.bits)) & self.mask()
    }

    #[inline]
    fn y(&self, code: u64, i: usize) -> u64 {
        (code >> ((i + self.order) as u32 * self.bits)) & self.mask()
    }

    #[inline]
    fn z(&self, code: u64) -> u64 {
        (code >> (2 * self.order as u32 * self.bits)) & self.mask()
    }

    /// x/y/z unit generators, with or without z per the basis kind.
    pub fn plain_basis(&self) -> Vec<u64> {
        let size = if self.basis_kind.has_z() {
            self.free_element_count()
        } else {
            self.free_element_count() - 1
        };
        (0..size).map(|i| 1u64 << (i as u32 * self.bits)).collect()
    }
}

impl GroupProcessor for HeisenbergZn {
    fn order(&self) -> usize {
        self.order
    }

    fn modulo(&self) -> u64 {
        1u64 << self.bits
    }

    fn element_count(&self) -> u64 {
        1u64 << (self.free_element_count() as u32 * self.bits)
    }

    fn free_element_count(&self) -> usize {
        2 * self.order + 1
    }

    fn max_order(&self) -> usize {
        Self::max_order_for_bits(self.bits)
    }

    fn identity(&self) -> u64 {
        0
    }

    #[inline]
    fn product(&self, a: u64, b: u64) -> u64 {
        let order = self.order;
        let bits = self.bits;
        let mask = self.mask();
        let mut result = 0u64;
        let mut x_dot_y = 0u64;
        for i in 0..order {
            let xa = self.x(a, i);
            let ya = self.y(a, i);
            let xb = self.x(b, i);
            let yb = self.y(b, i);
            result |= ((xa + xb) & mask) << (i as u32 * bits);
            result |= ((ya + yb) & mask) << ((i + order) as u32 * bits);
            x_dot_y = x_dot_y.wrapping_add(xa.wrapping_mul(yb));
        }
        x_dot_y = x_dot_y.wrapping_add(self.z(a)).wrapping_add(self.z(b));
        x_dot_y &= mask;
        result | (x_dot_y << (2 * order as u32 * bits))
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
        layout::require_heisenberg(matrix, self.order, self.modulo())?;
        let mut code = 0u64;
        for i in 0..self.order {
            code |= matrix.get(0, i + 1) << (i as u32 * self.bits);
            code |= matrix.get(i + 1, self.order + 1) << ((i + self.order) as u32 * self.bits);
        }
        code |= matrix.get(0, self.order + 1) << (2 * self.order as u32 * self.bits);
        Ok(code)
    }

    fn standard_basis(&self, cache: Option<&mut dyn UlongListCache>) -> Vec<u64> {
        let plain = self.plain_basis();
        if self.basis_kind.has_inverses() {
            self.basis_with_inverses(&plain, cache)
        } else {
            plain
        }
    }

    fn basis_size(&self) -> usize {
        let plain = if self.basis_kind.has_z() {
            self.free_element_count()
        } else {
            self.free_element_count() - 1
        };
        if self.basis_kind.has_inverses() && self.modulo() > 2 {
            plain * 2
        } else {
            plain
        }
    }

    fn basis_description(&self) -> String {
        let size = self.basis_size();
        match self.basis_kind {
            HeisenbergBasisKind::Standard => format!("Basis: {size} elements, without Z"),
            HeisenbergBasisKind::StandardWithZ => format!("Basis: {size} elements (with Z)"),
            HeisenbergBasisKind::StandardWithInverses => {
                format!("Basis: {size} elements without Z, with inverses")
            }
            HeisenbergBasisKind::StandardWithZAndInverses => {
                format!("Basis: {size} elements (with Z, with inverses)")
            }
        }
    }

    fn cache_id(&self) -> String {
        format!(
            "Heis_Z{m}_{n}x{n}_{kind:?}",
            m = self.modulo(),
            n = self.order + 2,
            kind = self.basis_kind
        )
    }

    fn display_name(&self) -> String {
        format!(
            "Heisenberg(Z{m}), {n}x{n}",
            m = self.modulo(),
            n = self.order + 2
        )
    }
}
