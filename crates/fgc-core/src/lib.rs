#![deny(missing_docs)]
#![doc = "Core traits and data types for the finite-group computation engine."]

//! Every group element is a packed unsigned 64-bit code; a
//! [`GroupProcessor`] knows how to multiply, enumerate and verify codes for
//! one concrete family of finite groups. The distance engine in `fgc-walk`
//! works exclusively through this trait.

use std::cmp::Ordering;

pub mod cache;
pub mod combinatorics;
pub mod errors;
pub mod matrix;
pub mod rng;

pub use cache::{MemoryCache, UlongListCache};
pub use combinatorics::{factorial, parity64, BinomialTable, MAX_FACTORIAL_ARG};
pub use errors::{ErrorInfo, FgcError};
pub use matrix::ResidueMatrix;
pub use rng::{derive_substream_seed, RngHandle};

/// Capability contract shared by every packed-code group processor.
///
/// Invariants every implementation upholds:
/// - `product(identity(), x) == x == product(x, identity())` for every valid
///   code `x`;
/// - iterating [`next`](GroupProcessor::next) from
///   [`identity`](GroupProcessor::identity) visits every code exactly once,
///   in [`compare`](GroupProcessor::compare) order, and agrees with
///   [`ith`](GroupProcessor::ith)`(0..element_count)`;
/// - constructors reject configurations whose packed layout would not fit in
///   64 bits, so no trait method ever observes an invalid layout.
pub trait GroupProcessor: Send + Sync {
    /// Structure size parameter: matrix dimension minus one, or the
    /// permutation degree.
    fn order(&self) -> usize;

    /// Residue modulus of matrix entries (16 for nibble-packed permutations).
    fn modulo(&self) -> u64;

    /// Number of valid packed codes, i.e. the group order |G|.
    fn element_count(&self) -> u64;

    /// Number of free packed fields in a code.
    fn free_element_count(&self) -> usize;

    /// Largest `order` whose packed layout still fits in 64 bits.
    fn max_order(&self) -> usize;

    /// Packed code of the neutral element.
    fn identity(&self) -> u64;

    /// Group product of two packed codes. The sole hot-path multiplication
    /// rule; pure and branch-light.
    fn product(&self, a: u64, b: u64) -> u64;

    /// Successor of `current` in the fixed enumeration order.
    fn next(&self, current: u64) -> u64;

    /// Direct, non-iterative access to the `i`-th code in enumeration order,
    /// so parallel workers can seek into the middle of the sequence.
    fn ith(&self, i: u64) -> u64 {
        i
    }

    /// True when a code already equals its dense table index.
    fn state_is_key(&self) -> bool {
        true
    }

    /// Total order backing sorted indexing when codes are sparse in u64
    /// space. Dense processors use the numeric order.
    fn compare(&self, a: u64, b: u64) -> Ordering {
        a.cmp(&b)
    }

    /// Expands a code into its explicit residue-matrix form. Verification
    /// only, never on the hot path.
    fn explode(&self, code: u64) -> Result<ResidueMatrix, FgcError>;

    /// Packs an explicit residue matrix back into a code.
    fn implode(&self, matrix: &ResidueMatrix) -> Result<u64, FgcError>;

    /// Generating set for the configured basis kind. Kinds that append
    /// inverses run the brute inverse scan and memoize it through `cache`
    /// when one is supplied.
    fn standard_basis(&self, cache: Option<&mut dyn UlongListCache>) -> Vec<u64>;

    /// Nominal number of generators `standard_basis` produces. For
    /// inverse-augmented kinds this is an upper bound; self-inverse
    /// generators deduplicate in the realized basis.
    fn basis_size(&self) -> usize;

    /// Human readable description of the configured basis.
    fn basis_description(&self) -> String;

    /// Stable identifier this processor derives cache keys from.
    fn cache_id(&self) -> String;

    /// Human readable processor name.
    fn display_name(&self) -> String;

    /// Appends the inverse of every generator to `basis`, deduplicated and
    /// order preserving.
    ///
    /// Inverses are found by the O(|G| * |basis|) scan over the full
    /// enumeration: `x` is the inverse of `b` when `product(x, b)` is the
    /// identity. The result is memoized under a key derived from
    /// [`cache_id`](GroupProcessor::cache_id) when a cache is supplied.
    fn basis_with_inverses(
        &self,
        basis: &[u64],
        cache: Option<&mut dyn UlongListCache>,
    ) -> Vec<u64> {
        let key = inverse_cache_key(&self.cache_id(), basis);
        if let Some(cache) = &cache {
            if let Some(stored) = cache.get(&key) {
                return stored;
            }
        }

        let identity = self.identity();
        let mut inverses = vec![identity; basis.len()];
        let mut cur = identity;
        for _ in 0..self.element_count() {
            for (slot, &generator) in inverses.iter_mut().zip(basis.iter()) {
                if self.product(cur, generator) == identity {
                    *slot = cur;
                }
            }
            cur = self.next(cur);
        }

        let mut augmented = basis.to_vec();
        for inverse in inverses {
            if !augmented.contains(&inverse) {
                augmented.push(inverse);
            }
        }
        if let Some(cache) = cache {
            cache.set(&key, &augmented);
        }
        augmented
    }
}

fn inverse_cache_key(cache_id: &str, basis: &[u64]) -> String {
    let joined = basis
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{cache_id}_inverses_[{joined}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_cache_key_shape() {
        assert_eq!(
            inverse_cache_key("Tri_Z2_3x3_Standard", &[1, 2, 4]),
            "Tri_Z2_3x3_Standard_inverses_[1, 2, 4]"
        );
    }
}
