//! Analyze Boolean functions given as truth vectors.
//!
//! Run with: `cargo run --example boolfn -- 0110 1110`

use boolfn_rs::minimize::{MinimizeConfig, Minimizer};
use boolfn_rs::post::PostTable;
use boolfn_rs::truth_vector::TruthVector;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "boolfn")]
#[command(about = "Classify, normalize and minimize Boolean functions")]
struct Args {
    /// Truth vectors, e.g. 0110
    #[arg(required = true)]
    vectors: Vec<String>,

    /// Cube budget for the minimizer
    #[arg(long, default_value_t = 1 << 16)]
    max_cubes: usize,

    /// Log consensus rounds and cover selection
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let minimizer = Minimizer::new(MinimizeConfig {
        max_cubes: args.max_cubes,
        ..MinimizeConfig::default()
    });

    let functions = args
        .vectors
        .iter()
        .map(|s| s.parse::<TruthVector>())
        .collect::<Result<Vec<_>, _>>()?;

    for f in &functions {
        println!("─── f = {} (arity {}) ───", f, f.arity());
        println!("PDNF:      {}", f.pdnf());
        println!("PCNF:      {}", f.pcnf());
        let (dnf, stats) = minimizer.minimize_with_stats(f)?;
        println!("Min DNF:   {}", dnf);
        println!(
            "           {} rounds, {} primes, {} terms (PDNF has {})",
            stats.rounds,
            stats.primes,
            stats.cover,
            f.count_ones()
        );
        println!("Zhegalkin: {}", f.zhegalkin());
        println!();
    }

    let table = PostTable::from_functions(&functions);
    println!("{}", table);
    println!();
    if table.is_complete() {
        println!("The set is functionally complete.");
    } else {
        let missing: Vec<String> = table.missing_classes().iter().map(|c| c.to_string()).collect();
        println!("The set is not complete: every function is in {}.", missing.join(", "));
    }

    Ok(())
}
