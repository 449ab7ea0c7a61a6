//! Level-synchronous parallel breadth-first search over a processor's
//! state space.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicI8, AtomicU64, Ordering};
use std::sync::Arc;

use fgc_core::errors::{ErrorInfo, FgcError};
use fgc_core::GroupProcessor;
use rayon::prelude::*;

use crate::histogram::distance_histogram;
use crate::index::ElementIndex;

/// Distance value marking a not-yet-discovered element.
pub const UNREACHED: i8 = -1;

/// Progress callback invoked as `(discovered, total)` from the coordinating
/// thread at round boundaries, and only when the discovered count changed.
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Options shared by both search modes.
#[derive(Clone, Default)]
pub struct SearchOptions {
    /// Indices per parallel block; 0 falls back to the default of 256 Ki.
    pub block_size: usize,
    /// Worker threads; 0 uses the rayon default for the machine.
    pub threads: usize,
    /// Optional progress callback.
    pub progress: Option<ProgressCallback>,
    /// Optional cancellation token, checked at each round boundary. The
    /// table is always valid at a boundary, so cancellation never corrupts
    /// partial results.
    pub cancel: Option<Arc<AtomicBool>>,
}

const DEFAULT_BLOCK_SIZE: usize = 256 * 1024;

impl SearchOptions {
    fn effective_block_size(&self) -> usize {
        if self.block_size == 0 {
            DEFAULT_BLOCK_SIZE
        } else {
            self.block_size
        }
    }
}

impl fmt::Debug for SearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchOptions")
            .field("block_size", &self.block_size)
            .field("threads", &self.threads)
            .field("progress", &self.progress.is_some())
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}

/// Dense distance table produced by [`full_distance_table`].
#[derive(Debug, Clone)]
pub struct DistanceTable {
    distances: Vec<i8>,
    discovered: u64,
    truncated: bool,
}

impl DistanceTable {
    /// Number of table slots (= |G|).
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// True for an empty table (never produced by the engine).
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance at a canonical element index, [`UNREACHED`] if undiscovered.
    #[inline]
    pub fn get(&self, index: usize) -> i8 {
        self.distances[index]
    }

    /// The raw distance slice.
    pub fn as_slice(&self) -> &[i8] {
        &self.distances
    }

    /// Number of elements discovered so far.
    pub fn discovered(&self) -> u64 {
        self.discovered
    }

    /// True when the search was cancelled at a round boundary.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Largest distance in the table.
    pub fn max_distance(&self) -> i8 {
        self.distances.iter().copied().max().unwrap_or(UNREACHED)
    }

    /// Growth histogram: element count per distance, trimmed after the last
    /// nonzero bucket.
    pub fn histogram(&self) -> Vec<u64> {
        distance_histogram(&self.distances)
    }
}

/// Sparse distance table produced by [`partial_distance_table`]: only
/// reached codes are stored, sorted by the processor's total order.
#[derive(Debug, Clone)]
pub struct PartialDistanceTable {
    codes: Vec<u64>,
    distances: Vec<i8>,
    truncated: bool,
}

impl PartialDistanceTable {
    fn new() -> Self {
        Self {
            codes: Vec::new(),
            distances: Vec::new(),
            truncated: false,
        }
    }

    /// Inserts `code` at `distance` unless already present. Returns true
    /// when the code was new.
    fn insert_if_absent(&mut self, processor: &dyn GroupProcessor, code: u64, distance: i8) -> bool {
        match self
            .codes
            .binary_search_by(|probe| processor.compare(*probe, code))
        {
            Ok(_) => false,
            Err(position) => {
                self.codes.insert(position, code);
                self.distances.insert(position, distance);
                true
            }
        }
    }

    /// Number of reached elements.
    pub fn reached(&self) -> u64 {
        self.codes.len() as u64
    }

    /// Distance of `code`, `None` when it was never reached — a legitimate
    /// outcome for non-spanning generator sets, not an error.
    pub fn distance_of(&self, processor: &dyn GroupProcessor, code: u64) -> Option<i8> {
        self.codes
            .binary_search_by(|probe| processor.compare(*probe, code))
            .ok()
            .map(|position| self.distances[position])
    }

    /// True when the search was cancelled at a round boundary.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Largest distance among reached elements.
    pub fn max_distance(&self) -> i8 {
        self.distances.iter().copied().max().unwrap_or(UNREACHED)
    }

    /// Growth histogram over reached elements.
    pub fn histogram(&self) -> Vec<u64> {
        distance_histogram(&self.distances)
    }

    /// Iterates `(code, distance)` pairs in comparator order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, i8)> + '_ {
        self.codes
            .iter()
            .copied()
            .zip(self.distances.iter().copied())
    }
}

fn walk_error(code: &str, message: &str) -> FgcError {
    FgcError::Walk(ErrorInfo::new(code, message))
}

/// With `threads == 0` rounds run on the global rayon pool; otherwise a
/// dedicated pool of that size is built once per search.
fn build_pool(options: &SearchOptions) -> Result<Option<rayon::ThreadPool>, FgcError> {
    if options.threads == 0 {
        return Ok(None);
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()
        .map(Some)
        .map_err(|err| FgcError::Walk(ErrorInfo::new("thread-pool", err.to_string())))
}

fn on_pool<T: Send>(pool: &Option<rayon::ThreadPool>, op: impl FnOnce() -> T + Send) -> T {
    match pool {
        Some(pool) => pool.install(op),
        None => op(),
    }
}

/// Computes the minimum generator-word length from `start` to every element
/// of the group, level-synchronous and block-parallel.
///
/// The dense table holds one `AtomicI8` per element; no visited set is ever
/// materialized. Within a round, every block scans its own disjoint index
/// range, claims newly discovered cells by compare-exchange from the
/// sentinel, and bumps a shared discovered counter. Rounds are strict
/// barriers. With a spanning basis every slot ends non-negative; with a
/// non-spanning basis use [`partial_distance_table`] instead.
pub fn full_distance_table(
    processor: &dyn GroupProcessor,
    start: u64,
    basis: &[u64],
    options: &SearchOptions,
) -> Result<DistanceTable, FgcError> {
    let total = processor.element_count();
    let len = usize::try_from(total)
        .map_err(|_| walk_error("table-too-large", "element count exceeds addressable memory"))?;

    let index = ElementIndex::build(processor);
    let distances: Vec<AtomicI8> = std::iter::repeat_with(|| AtomicI8::new(UNREACHED))
        .take(len)
        .collect();
    let start_slot = index
        .index_of(processor, start)
        .filter(|&slot| slot < len)
        .ok_or_else(|| walk_error("start-not-an-element", "start code is outside the group"))?;
    distances[start_slot].store(0, Ordering::Relaxed);

    let discovered = AtomicU64::new(1);
    let poisoned = AtomicBool::new(false);
    let pool = build_pool(options)?;
    let block_size = options.effective_block_size();
    let block_count = (len + block_size - 1) / block_size;

    let mut level: i8 = 0;
    let mut last_reported = 1u64;
    let mut truncated = false;
    loop {
        let changed = AtomicBool::new(false);
        on_pool(&pool, || {
            (0..block_count).into_par_iter().for_each(|block| {
                let begin = block * block_size;
                let end = (begin + block_size).min(len);
                let mut cur = processor.ith(begin as u64);
                for slot in begin..end {
                    if distances[slot].load(Ordering::Relaxed) == level {
                        for &generator in basis {
                            let next = processor.product(cur, generator);
                            match index.index_of(processor, next).filter(|&n| n < len) {
                                Some(next_slot) => {
                                    if distances[next_slot]
                                        .compare_exchange(
                                            UNREACHED,
                                            level + 1,
                                            Ordering::Relaxed,
                                            Ordering::Relaxed,
                                        )
                                        .is_ok()
                                    {
                                        discovered.fetch_add(1, Ordering::Relaxed);
                                        changed.store(true, Ordering::Relaxed);
                                    }
                                }
                                None => poisoned.store(true, Ordering::Relaxed),
                            }
                        }
                    }
                    cur = processor.next(cur);
                }
            });
        });

        if poisoned.load(Ordering::Relaxed) {
            return Err(walk_error(
                "index-miss",
                "a product left the enumeration; the processor contract is broken",
            ));
        }
        let found = discovered.load(Ordering::Relaxed);
        if found != last_reported {
            if let Some(callback) = &options.progress {
                callback(found, total);
            }
            last_reported = found;
        }
        if let Some(token) = &options.cancel {
            if token.load(Ordering::Relaxed) {
                truncated = true;
                break;
            }
        }
        if !changed.load(Ordering::Relaxed) {
            break;
        }
        if level == i8::MAX - 1 {
            return Err(walk_error(
                "level-overflow",
                "distance exceeds the i8 range",
            ));
        }
        level += 1;
    }

    Ok(DistanceTable {
        distances: distances.into_iter().map(AtomicI8::into_inner).collect(),
        discovered: discovered.into_inner(),
        truncated,
    })
}

/// Same level-synchronous expansion over an explicit frontier, for
/// generating sets that may not span the group.
///
/// Only reached codes are stored; elements never reached simply stay absent.
/// Per round the frontier is chunked across the pool, each chunk emits its
/// candidate products, and the barrier merge keeps the still-unseen ones.
pub fn partial_distance_table(
    processor: &dyn GroupProcessor,
    start: u64,
    basis: &[u64],
    options: &SearchOptions,
) -> Result<PartialDistanceTable, FgcError> {
    let pool = build_pool(options)?;
    let chunk_size = options.effective_block_size();

    let mut table = PartialDistanceTable::new();
    table.insert_if_absent(processor, start, 0);
    let mut frontier = vec![start];
    let mut level: i8 = 0;
    let mut last_reported = 1u64;
    loop {
        let candidate_sets: Vec<Vec<u64>> = on_pool(&pool, || {
            frontier
                .par_chunks(chunk_size)
                .map(|codes| {
                    let mut products = Vec::with_capacity(codes.len() * basis.len());
                    for &cur in codes {
                        for &generator in basis {
                            products.push(processor.product(cur, generator));
                        }
                    }
                    products
                })
                .collect()
        });

        let mut next_frontier = Vec::new();
        for set in candidate_sets {
            for code in set {
                if table.insert_if_absent(processor, code, level + 1) {
                    next_frontier.push(code);
                }
            }
        }

        let reached = table.reached();
        if reached != last_reported {
            if let Some(callback) = &options.progress {
                callback(reached, processor.element_count());
            }
            last_reported = reached;
        }
        if let Some(token) = &options.cancel {
            if token.load(Ordering::Relaxed) {
                table.truncated = true;
                break;
            }
        }
        if next_frontier.is_empty() {
            break;
        }
        if level == i8::MAX - 1 {
            return Err(walk_error(
                "level-overflow",
                "distance exceeds the i8 range",
            ));
        }
        level += 1;
        frontier = next_frontier;
    }
    Ok(table)
}
