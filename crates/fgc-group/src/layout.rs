//! Shared packed-layout validation helpers.

use fgc_core::errors::{ErrorInfo, FgcError};
use fgc_core::ResidueMatrix;

/// Rejects orders outside `1..=max_order` before any packed arithmetic runs.
pub(crate) fn require_order(order: usize, max_order: usize, family: &str) -> Result<(), FgcError> {
    if order == 0 || order > max_order {
        return Err(FgcError::Config(
            ErrorInfo::new(
                "order-out-of-range",
                format!("{family} order must lie in 1..={max_order}"),
            )
            .with_context("order", order.to_string())
            .with_context("max_order", max_order.to_string()),
        ));
    }
    Ok(())
}

/// Rejects bit widths the packed layouts cannot host.
pub(crate) fn require_bits(bits: u32, family: &str) -> Result<(), FgcError> {
    if bits == 0 || bits > 32 {
        return Err(FgcError::Config(
            ErrorInfo::new(
                "bits-out-of-range",
                format!("{family} bits per element must lie in 1..=32"),
            )
            .with_context("bits", bits.to_string()),
        ));
    }
    Ok(())
}

/// Checks that `matrix` is an (order+2)-square Heisenberg residue matrix:
/// unit diagonal, free cells only in row 0, the last column and the corner,
/// all below `modulo`.
pub(crate) fn require_heisenberg(
    matrix: &ResidueMatrix,
    order: usize,
    modulo: u64,
) -> Result<(), FgcError> {
    let n = order + 2;
    if matrix.rows() != n || matrix.cols() != n {
        return Err(FgcError::Group(
            ErrorInfo::new("matrix-shape", "matrix does not match the packed layout")
                .with_context("expected", format!("{n}x{n}"))
                .with_context("actual", format!("{}x{}", matrix.rows(), matrix.cols())),
        ));
    }
    for row in 0..n {
        for col in 0..n {
            let value = matrix.get(row, col);
            let free = (row == 0 && col > 0) || (col == n - 1 && row < n - 1);
            let valid = if row == col {
                value == 1
            } else if free {
                value < modulo
            } else {
                value == 0
            };
            if !valid {
                return Err(FgcError::Group(
                    ErrorInfo::new("matrix-cell", "cell violates the Heisenberg form")
                        .with_context("row", row.to_string())
                        .with_context("col", col.to_string())
                        .with_context("value", value.to_string()),
                ));
            }
        }
    }
    Ok(())
}

/// Checks that `matrix` is a square unit upper-triangular residue matrix of
/// side `n` with entries below `modulo`.
pub(crate) fn require_unit_upper_triangular(
    matrix: &ResidueMatrix,
    n: usize,
    modulo: u64,
) -> Result<(), FgcError> {
    if matrix.rows() != n || matrix.cols() != n {
        return Err(FgcError::Group(
            ErrorInfo::new("matrix-shape", "matrix does not match the packed layout")
                .with_context("expected", format!("{n}x{n}"))
                .with_context("actual", format!("{}x{}", matrix.rows(), matrix.cols())),
        ));
    }
    for row in 0..n {
        for col in 0..n {
            let value = matrix.get(row, col);
            let valid = if row == col {
                value == 1
            } else if row > col {
                value == 0
            } else {
                value < modulo
            };
            if !valid {
                return Err(FgcError::Group(
                    ErrorInfo::new("matrix-cell", "cell violates the unit upper-triangular form")
                        .with_context("row", row.to_string())
                        .with_context("col", col.to_string())
                        .with_context("value", value.to_string()),
                ));
            }
        }
    }
    Ok(())
}
