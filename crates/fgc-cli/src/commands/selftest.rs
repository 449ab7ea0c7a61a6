use std::error::Error;

use clap::Args;
use fgc_core::GroupProcessor;
use fgc_group::{check_product, ProductCheck};

use super::ProcessorArgs;

#[derive(Args, Debug)]
pub struct SelftestArgs {
    #[command(flatten)]
    pub processor: ProcessorArgs,
}

pub fn run(args: &SelftestArgs) -> Result<(), Box<dyn Error>> {
    let processor = args.processor.build()?;
    println!("{}", processor.display_name());
    match check_product(&*processor)? {
        ProductCheck::Passed { pairs } => {
            println!("all {pairs} ordered pairs agree with the reference product");
        }
        ProductCheck::Unsupported { reason } => {
            println!("no matrix reference available: {reason}");
        }
        ProductCheck::RoundTripMismatch { code, matrix } => {
            println!("implode(explode({code})) != {code}");
            println!("exploded:");
            println!("{matrix}");
        }
        ProductCheck::Mismatch {
            a,
            b,
            a_matrix,
            b_matrix,
            expected,
            actual,
        } => {
            println!("mismatch at a={a}, b={b}");
            println!("A:");
            println!("{a_matrix}");
            println!("B:");
            println!("{b_matrix}");
            println!("expected:");
            println!("{expected}");
            println!("got:");
            println!("{actual}");
        }
    }
    Ok(())
}
