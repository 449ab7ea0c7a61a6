//! Exhaustive product verification against the reference matrix form.

use fgc_core::{FgcError, GroupProcessor};

/// Outcome of [`check_product`]. Diagnostics are advisory; the check never
/// panics and never aborts the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductCheck {
    /// Every ordered pair agreed with the reference product.
    Passed {
        /// Number of ordered pairs compared.
        pairs: u64,
    },
    /// The processor has no residue-matrix form to check against.
    Unsupported {
        /// The processor's explanation.
        reason: String,
    },
    /// `implode(explode(code))` did not return `code`.
    RoundTripMismatch {
        /// The offending code.
        code: u64,
        /// Its exploded matrix, rendered.
        matrix: String,
    },
    /// A packed product disagreed with the reference matrix product.
    Mismatch {
        /// Left operand code.
        a: u64,
        /// Right operand code.
        b: u64,
        /// Left operand, rendered.
        a_matrix: String,
        /// Right operand, rendered.
        b_matrix: String,
        /// Reference product, rendered.
        expected: String,
        /// Packed product, rendered.
        actual: String,
    },
}

impl ProductCheck {
    /// True for the all-green outcome.
    pub fn passed(&self) -> bool {
        matches!(self, ProductCheck::Passed { .. })
    }
}

/// Compares `product` against the O(n^3) reference residue-matrix product
/// for every ordered pair of group elements, verifying the explode/implode
/// round trip along the way. Stops at the first mismatch.
///
/// The cost is O(|G|^2 * order^3); callers keep this to small orders.
pub fn check_product(processor: &dyn GroupProcessor) -> Result<ProductCheck, FgcError> {
    let modulo = processor.modulo();
    let count = processor.element_count();

    let mut left = processor.identity();
    for _ in 0..count {
        let left_matrix = match processor.explode(left) {
            Ok(matrix) => matrix,
            Err(err) => {
                return Ok(ProductCheck::Unsupported {
                    reason: err.info().message.clone(),
                })
            }
        };
        if processor.implode(&left_matrix)? != left {
            return Ok(ProductCheck::RoundTripMismatch {
                code: left,
                matrix: left_matrix.to_string(),
            });
        }

        let mut right = processor.identity();
        for _ in 0..count {
            let right_matrix = processor.explode(right)?;
            let expected = left_matrix.multiply(&right_matrix, modulo)?;
            let actual = processor.explode(processor.product(left, right))?;
            if actual != expected {
                return Ok(ProductCheck::Mismatch {
                    a: left,
                    b: right,
                    a_matrix: left_matrix.to_string(),
                    b_matrix: right_matrix.to_string(),
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
            right = processor.next(right);
        }
        left = processor.next(left);
    }
    Ok(ProductCheck::Passed {
        pairs: count * count,
    })
}
