use std::error::Error;

use clap::Args;
use fgc_core::GroupProcessor;
use fgc_walk::{pairwise_diameter_histogram, DiameterSweepOptions, SearchOptions};

use super::ProcessorArgs;

#[derive(Args, Debug)]
pub struct DiametersArgs {
    #[command(flatten)]
    pub processor: ProcessorArgs,
    /// Augment every generator pair with its inverses.
    #[arg(long)]
    pub add_inverses: bool,
    /// Drop pairs that generate a proper subgroup.
    #[arg(long)]
    pub skip_non_spanning: bool,
}

pub fn run(args: &DiametersArgs) -> Result<(), Box<dyn Error>> {
    let processor = args.processor.build()?;
    let sweep = DiameterSweepOptions {
        add_inverses: args.add_inverses,
        skip_non_spanning: args.skip_non_spanning,
    };
    let histogram =
        pairwise_diameter_histogram(&*processor, &sweep, &SearchOptions::default())?;

    println!("{}", processor.display_name());
    println!("diameter distribution over two-generator sets:");
    let mut total = 0u64;
    for (diameter, count) in &histogram {
        println!("{diameter:>4} {count}");
        total += count;
    }
    println!("pairs: {total}");
    Ok(())
}
