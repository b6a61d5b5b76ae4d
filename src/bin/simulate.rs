//! Simulation Binary
//!
//! Plays a batch of Monty Hall rounds and prints the aggregate
//! win/lose table, or the raw records as JSON.
//!
//! Options: --games, --seed, --json

use clap::Parser;
use montyhall::Simulation;
use montyhall::Table;

#[derive(Parser)]
#[command(about = "Simulate the Monty Hall problem under both strategies")]
struct Args {
    /// Number of rounds to play.
    #[arg(long, default_value_t = montyhall::DEFAULT_ROUNDS)]
    games: usize,
    /// Fixed RNG seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Emit raw per-round records as JSON instead of the table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    montyhall::log();
    let args = Args::parse();
    let mut simulation = match args.seed {
        Some(seed) => Simulation::seeded(seed),
        None => Simulation::new(),
    };
    let results = simulation.run(args.games)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{}", Table::from(&results));
    }
    Ok(())
}
