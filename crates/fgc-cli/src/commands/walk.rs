use std::error::Error;

use clap::Args;
use fgc_core::GroupProcessor;
use fgc_walk::{full_distance_table, random_walk_profile, SearchOptions, WalkOptions};

use super::ProcessorArgs;

#[derive(Args, Debug)]
pub struct WalkArgs {
    #[command(flatten)]
    pub processor: ProcessorArgs,
    /// Number of parallel walkers.
    #[arg(long, default_value_t = 100_000)]
    pub walkers: usize,
    /// Steps per walker.
    #[arg(long, default_value_t = 166)]
    pub steps: usize,
    /// Master seed for the walker substreams.
    #[arg(long, default_value_t = 7)]
    pub seed: u64,
    /// Emit the summary as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &WalkArgs) -> Result<(), Box<dyn Error>> {
    let processor = args.processor.build()?;
    let basis = processor.standard_basis(None);
    let table = full_distance_table(
        &*processor,
        processor.identity(),
        &basis,
        &SearchOptions::default(),
    )?;
    let summary = random_walk_profile(
        &*processor,
        &table,
        &basis,
        &WalkOptions {
            walkers: args.walkers,
            steps: args.steps,
            seed: args.seed,
        },
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    println!("{}", processor.display_name());
    println!("{}", processor.basis_description());
    println!("diameter: {}", summary.diameter);
    println!(
        "ceiling: {:.4}, approach constant: {:.13}",
        summary.ceiling, summary.exp_constant
    );
    let means = summary
        .means
        .iter()
        .map(|mean| format!("{mean:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("mean distances: {means}");
    Ok(())
}
