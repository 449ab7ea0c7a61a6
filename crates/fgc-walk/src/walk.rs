//! Random-walk distance profiles and the exponential-approach fit.

use std::sync::atomic::{AtomicBool, Ordering};

use fgc_core::errors::{ErrorInfo, FgcError};
use fgc_core::{GroupProcessor, RngHandle};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::DistanceTable;
use crate::index::ElementIndex;

/// Options for [`random_walk_profile`].
#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
    /// Number of parallel walkers.
    pub walkers: usize,
    /// Number of steps per walker.
    pub steps: usize,
    /// Master seed; walker `w` draws from substream `w`.
    pub seed: u64,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            walkers: 1_000,
            steps: 128,
            seed: 7,
        }
    }
}

/// Result of a random-walk profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkSummary {
    /// Mean table distance after each step; entry 0 is the start.
    pub means: Vec<f64>,
    /// Estimated saturation ceiling (mean of the last samples).
    pub ceiling: f64,
    /// Fitted constant of `ceiling * (1 - exp(-c * step))`.
    pub exp_constant: f64,
    /// Diameter of the underlying distance table.
    pub diameter: i8,
}

/// Walks `walkers` independent chains from the identity, multiplying by a
/// uniformly random generator each step, and records the mean distance (per
/// the supplied table) after every step.
///
/// Walker RNGs are substreams of the master seed, so the profile is
/// reproducible regardless of thread scheduling.
pub fn random_walk_profile(
    processor: &dyn GroupProcessor,
    table: &DistanceTable,
    basis: &[u64],
    options: &WalkOptions,
) -> Result<WalkSummary, FgcError> {
    if basis.is_empty() || options.walkers == 0 {
        return Err(FgcError::Walk(ErrorInfo::new(
            "empty-walk",
            "a walk needs at least one generator and one walker",
        )));
    }
    let index = ElementIndex::build(processor);
    let mut states = vec![processor.identity(); options.walkers];
    let mut rngs: Vec<RngHandle> = (0..options.walkers)
        .map(|walker| RngHandle::for_substream(options.seed, walker as u64))
        .collect();

    let poisoned = AtomicBool::new(false);
    let mut means = Vec::with_capacity(options.steps + 1);
    means.push(0.0);
    for _ in 0..options.steps {
        let total: i64 = states
            .par_iter_mut()
            .zip(rngs.par_iter_mut())
            .map(|(state, rng)| {
                let pick = rng.gen_range(0..basis.len());
                *state = processor.product(*state, basis[pick]);
                match index
                    .index_of(processor, *state)
                    .filter(|&slot| slot < table.len())
                {
                    Some(slot) => i64::from(table.get(slot)),
                    None => {
                        poisoned.store(true, Ordering::Relaxed);
                        0
                    }
                }
            })
            .sum();
        if poisoned.load(Ordering::Relaxed) {
            return Err(FgcError::Walk(ErrorInfo::new(
                "index-miss",
                "a walk state left the enumeration; the processor contract is broken",
            )));
        }
        means.push(total as f64 / options.walkers as f64);
    }

    let (ceiling, exp_constant) = fit_exponential_approach(&means);
    Ok(WalkSummary {
        means,
        ceiling,
        exp_constant,
        diameter: table.max_distance(),
    })
}

/// Fits `ceiling * (1 - exp(-c * x))` to a saturating mean-distance series.
///
/// The ceiling is the mean of the last ten samples; `c` is bisected on
/// `[0.1, 20]` against a fixed early control point, which is enough to
/// characterize the approach rate.
pub fn fit_exponential_approach(means: &[f64]) -> (f64, f64) {
    if means.is_empty() {
        return (0.0, 0.0);
    }
    let tail = means.iter().rev().take(10).collect::<Vec<_>>();
    let ceiling = tail.iter().copied().sum::<f64>() / tail.len() as f64;

    let control = 8usize.min(means.len() - 1);
    let target = means[control];
    let mut low = 0.1f64;
    let mut high = 20.0f64;
    let mut mid = (low + high) / 2.0;
    while high - low > 1e-9 {
        let value = ceiling * (1.0 - (-(control as f64) * mid).exp());
        if target - value < 0.0 {
            high = mid;
        } else {
            low = mid;
        }
        mid = (low + high) / 2.0;
    }
    (ceiling, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_recovers_a_synthetic_constant() {
        let ceiling = 6.0;
        let constant = 0.35;
        let means: Vec<f64> = (0..64)
            .map(|step| ceiling * (1.0 - (-(step as f64) * constant).exp()))
            .collect();
        let (fit_ceiling, fit_constant) = fit_exponential_approach(&means);
        assert!((fit_ceiling - ceiling).abs() < 0.1);
        assert!((fit_constant - constant).abs() < 0.05);
    }

    #[test]
    fn degenerate_series_do_not_diverge() {
        let (ceiling, constant) = fit_exponential_approach(&[]);
        assert_eq!((ceiling, constant), (0.0, 0.0));
        let (ceiling, _) = fit_exponential_approach(&[0.0]);
        assert_eq!(ceiling, 0.0);
    }
}
