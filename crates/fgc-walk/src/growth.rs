//! Cache-backed growth histogram series over a range of orders.

use std::ops::RangeInclusive;

use fgc_core::errors::FgcError;
use fgc_core::{GroupProcessor, UlongListCache};
use serde::{Deserialize, Serialize};

use crate::engine::{full_distance_table, SearchOptions};

/// One growth histogram, labelled by the processor that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthRow {
    /// Order the histogram was computed at.
    pub order: usize,
    /// The processor's display name at that order.
    pub display_name: String,
    /// The basis the search used.
    pub basis_description: String,
    /// Element count per distance, trimmed.
    pub histogram: Vec<u64>,
}

/// Computes (or recalls) the growth histogram for every order in `orders`.
///
/// Each order's histogram is memoized under `"{cache_id}_growth_{order}"`;
/// on a miss the full search runs from the identity with the processor's
/// standard basis and the result is written through.
pub fn growth_series<F>(
    build: F,
    orders: RangeInclusive<usize>,
    cache: &mut dyn UlongListCache,
    search: &SearchOptions,
) -> Result<Vec<GrowthRow>, FgcError>
where
    F: Fn(usize) -> Result<Box<dyn GroupProcessor>, FgcError>,
{
    let mut rows = Vec::new();
    for order in orders {
        let processor = build(order)?;
        let key = format!("{}_growth_{}", processor.cache_id(), order);
        let histogram = match cache.get(&key) {
            Some(stored) => stored,
            None => {
                let basis = processor.standard_basis(Some(&mut *cache));
                let table =
                    full_distance_table(&*processor, processor.identity(), &basis, search)?;
                let histogram = table.histogram();
                cache.set(&key, &histogram);
                histogram
            }
        };
        rows.push(GrowthRow {
            order,
            display_name: processor.display_name(),
            basis_description: processor.basis_description(),
            histogram,
        });
    }
    Ok(rows)
}
