use clap::{Parser, Subcommand};

mod commands;

use commands::{diameters, growth, selftest, walk};

#[derive(Parser, Debug)]
#[command(name = "fgc", about = "Finite-group Cayley distance CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exhaustively verify a processor's packed product against the
    /// reference matrix product.
    Selftest(selftest::SelftestArgs),
    /// Compute growth histograms over a range of orders, cache backed.
    Growth(growth::GrowthArgs),
    /// Sweep the diameter distribution over all two-generator sets.
    Diameters(diameters::DiametersArgs),
    /// Profile random-walk mean distances and fit the approach constant.
    Walk(walk::WalkArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match &cli.command {
        Command::Selftest(args) => selftest::run(args),
        Command::Growth(args) => growth::run(args),
        Command::Diameters(args) => diameters::run(args),
        Command::Walk(args) => walk::run(args),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
