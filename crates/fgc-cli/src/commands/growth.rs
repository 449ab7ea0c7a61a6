use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use fgc_cache::JsonUlongCache;
use fgc_core::{BinomialTable, MemoryCache, UlongListCache};
use fgc_walk::{growth_series, SearchOptions};

use super::{print_aligned, ProcessorArgs};

#[derive(Args, Debug)]
pub struct GrowthArgs {
    #[command(flatten)]
    pub processor: ProcessorArgs,
    /// Compute histograms for every order from 1 up to this limit.
    #[arg(long, default_value_t = 3)]
    pub order_limit: usize,
    /// Sweep every basis kind of the family instead of just the configured
    /// one.
    #[arg(long)]
    pub all_bases: bool,
    /// Persist histograms in this JSON cache file.
    #[arg(long)]
    pub cache: Option<PathBuf>,
    /// Add the binomial reference row C(order, k) and its deltas.
    #[arg(long)]
    pub binomial: bool,
}

pub fn run(args: &GrowthArgs) -> Result<(), Box<dyn Error>> {
    let mut cache: Box<dyn UlongListCache> = match &args.cache {
        Some(path) => Box::new(JsonUlongCache::load(path)?),
        None => Box::new(MemoryCache::new()),
    };
    let options = SearchOptions {
        progress: Some(Arc::new(|found, total| {
            eprint!("\r{:5.1}%", found as f64 * 100.0 / total as f64);
        })),
        ..SearchOptions::default()
    };

    let basis_names: Vec<Option<String>> = if args.all_bases {
        args.processor
            .family_basis_names()
            .into_iter()
            .map(|name| Some(name.to_string()))
            .collect()
    } else {
        vec![args.processor.basis.clone()]
    };

    for basis in basis_names {
        let processor_args = ProcessorArgs {
            basis,
            ..args.processor.clone()
        };
        let rows = growth_series(
            |order| processor_args.build_at_order(order),
            1..=args.order_limit,
            cache.as_mut(),
            &options,
        )?;
        eprintln!();
        for row in rows {
            println!("{}", row.display_name);
            println!("{}", row.basis_description);
            let indices: Vec<i64> = (0..row.histogram.len() as i64).collect();
            let histogram: Vec<i64> = row.histogram.iter().map(|&count| count as i64).collect();
            if args.binomial {
                let table = BinomialTable::standard();
                let estimate: Vec<i64> = (0..row.histogram.len())
                    .map(|k| table.get(row.order, k) as i64)
                    .collect();
                let deltas: Vec<i64> = estimate
                    .iter()
                    .zip(histogram.iter())
                    .map(|(c, h)| c - h)
                    .collect();
                print_aligned(&[
                    ("#", indices),
                    ("hist", histogram),
                    ("delta", deltas),
                    ("estim", estimate),
                ]);
            } else {
                print_aligned(&[("#", indices), ("hist", histogram)]);
            }
            println!();
        }
    }
    Ok(())
}
