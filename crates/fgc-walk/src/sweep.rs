//! Pairwise diameter statistics over arbitrary two-generator sets.

use std::collections::BTreeMap;

use fgc_core::errors::FgcError;
use fgc_core::GroupProcessor;

use crate::engine::{partial_distance_table, SearchOptions};
use crate::histogram::value_histogram;

/// Options for [`pairwise_diameter_histogram`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DiameterSweepOptions {
    /// Augment every pair with the generators' inverses before searching.
    pub add_inverses: bool,
    /// Drop pairs whose reachable set is a proper subgroup.
    pub skip_non_spanning: bool,
}

/// For every unordered pair of non-identity elements, runs the partial
/// search with exactly that pair as the generating set and tallies the
/// observed maximum distance.
///
/// The result maps each diameter to the number of pairs attaining it. Pairs
/// that do not span the group keep their subgroup diameter unless
/// `skip_non_spanning` drops them. Quadratic in |G|; meant for small orders.
pub fn pairwise_diameter_histogram(
    processor: &dyn GroupProcessor,
    sweep: &DiameterSweepOptions,
    search: &SearchOptions,
) -> Result<BTreeMap<i8, u64>, FgcError> {
    let count = processor.element_count();
    let mut diameters = Vec::new();
    for a in 1..count {
        for b in a + 1..count {
            let mut basis = vec![processor.ith(a), processor.ith(b)];
            if sweep.add_inverses {
                basis = processor.basis_with_inverses(&basis, None);
            }
            let table = partial_distance_table(processor, processor.identity(), &basis, search)?;
            if sweep.skip_non_spanning && table.reached() < count {
                continue;
            }
            diameters.push(table.max_distance());
        }
    }
    Ok(value_histogram(&diameters))
}
