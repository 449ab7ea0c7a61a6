#![deny(missing_docs)]

//! Cayley-graph distance engine: level-synchronous parallel breadth-first
//! search over a [`GroupProcessor`](fgc_core::GroupProcessor)'s state
//! space, in a dense full-table mode and a sparse partial mode, plus the
//! histogram reductions, pairwise diameter sweeps and random-walk profiles
//! built on top of it.

mod engine;
mod growth;
mod histogram;
mod index;
mod sweep;
mod walk;

pub use engine::{
    full_distance_table, partial_distance_table, DistanceTable, PartialDistanceTable,
    ProgressCallback, SearchOptions, UNREACHED,
};
pub use growth::{growth_series, GrowthRow};
pub use histogram::{distance_histogram, value_histogram};
pub use index::ElementIndex;
pub use sweep::{pairwise_diameter_histogram, DiameterSweepOptions};
pub use walk::{fit_exponential_approach, random_walk_profile, WalkOptions, WalkSummary};
