use anyhow::Result;
use clap::Parser;

use binary_partitions::{parse_target, partition};

/// Count the partitions of a number into powers of two.
#[derive(Parser)]
#[command(
    name = "binary-partitions",
    about = "Count partitions of n into powers of two, mod 10^9+7",
    version
)]
struct Args {
    /// The number to partition, n >= 0.
    #[arg(allow_hyphen_values = true)]
    n: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let n = parse_target(&args.n)?;
    println!("p({}) mod (10^9+7) = {}", n, partition::count(n));
    Ok(())
}
