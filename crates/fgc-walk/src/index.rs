//! Code-to-index mapping for dense and sparse processors.

use fgc_core::GroupProcessor;

/// Maps packed codes to canonical dense table indices.
///
/// Processors whose codes already are their indices (`state_is_key`) map
/// through [`Dense`](ElementIndex::Dense) for free. Sparse processors (the
/// permutations) get the full enumeration materialized once, in comparator
/// order, and are looked up by binary search with the processor's own total
/// order.
#[derive(Debug, Clone)]
pub enum ElementIndex {
    /// Codes equal their indices.
    Dense,
    /// Full enumeration in comparator order; index = position.
    Sorted(Vec<u64>),
}

impl ElementIndex {
    /// Builds the index for `processor`.
    pub fn build(processor: &dyn GroupProcessor) -> Self {
        if processor.state_is_key() {
            return ElementIndex::Dense;
        }
        let count = processor.element_count();
        let mut codes = Vec::with_capacity(count as usize);
        let mut cur = processor.identity();
        for _ in 0..count {
            codes.push(cur);
            cur = processor.next(cur);
        }
        ElementIndex::Sorted(codes)
    }

    /// Index of `code`, or `None` when the code is not a group element.
    ///
    /// Dense indexing trusts the processor contract that every product of
    /// valid codes is a valid code.
    #[inline]
    pub fn index_of(&self, processor: &dyn GroupProcessor, code: u64) -> Option<usize> {
        match self {
            ElementIndex::Dense => Some(code as usize),
            ElementIndex::Sorted(codes) => codes
                .binary_search_by(|probe| processor.compare(*probe, code))
                .ok(),
        }
    }

    /// Code stored at `index`; identity mapping for dense processors.
    #[inline]
    pub fn code_at(&self, index: usize) -> u64 {
        match self {
            ElementIndex::Dense => index as u64,
            ElementIndex::Sorted(codes) => codes[index],
        }
    }
}
