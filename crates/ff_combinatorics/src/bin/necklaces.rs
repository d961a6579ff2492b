//! `necklaces`: list all distinct circular orderings of a strand multiset.
//!
//! ```text
//! necklaces 3 1 2
//! necklaces --count 4,4,2
//! necklaces --json 1 1 1 1
//! ```

use clap::Parser;
use log::info;
use log::LevelFilter;

use ff_combinatorics::Composition;
use ff_combinatorics::Necklace;
use ff_combinatorics::Necklaces;
use ff_combinatorics::count_necklaces;
use ff_combinatorics::enumerate_necklaces;

/// Enumerate necklaces with fixed content.
#[derive(Debug, Parser)]
#[command(name = "necklaces", version, about)]
struct Cli {
    /// Multiplicity of each label, e.g. `3 1 2` or `3,1,2`.
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    composition: Vec<String>,

    /// Only print the number of necklaces.
    #[arg(long)]
    count: bool,

    /// Print the necklaces as JSON.
    #[arg(long, conflicts_with = "count")]
    json: bool,

    /// Use the lazy iterator instead of the eager enumeration.
    #[arg(long)]
    lazy: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let composition: Composition = cli.composition.join(",").parse()?;
    info!("Composition {composition} with {} beads.", composition.total());

    let necklaces: Vec<Necklace> = if cli.lazy {
        Necklaces::new(&composition)?.collect()
    } else {
        enumerate_necklaces(&composition)?
    };

    if cli.count {
        let expected = count_necklaces(&composition)?;
        println!("{} necklaces (reference count {expected}).", necklaces.len());
    } else if cli.json {
        println!("{}", serde_json::to_string(&necklaces)?);
    } else {
        for necklace in &necklaces {
            println!("{necklace}");
        }
    }
    Ok(())
}
