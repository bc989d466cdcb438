use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use guess_number::constants::{DEFAULT_HI, DEFAULT_LO, DEFAULT_REPEATS, SWEEP_LIMIT};
use guess_number::env_config::{env_bar_width, init_logging, resolve_seed};
use guess_number::rendering::{render_histogram, render_summary};
use guess_number::simulation::{simulate_batch, sweep_all_targets};
use guess_number::types::{parse_integer, parse_positive};
use guess_number::{GuessError, SearchMode};

fn parse_lo(s: &str) -> std::result::Result<i64, GuessError> {
    parse_integer("lo", s)
}

fn parse_hi(s: &str) -> std::result::Result<i64, GuessError> {
    parse_integer("hi", s)
}

fn parse_repeats(s: &str) -> std::result::Result<u64, GuessError> {
    parse_positive("repeats", s)
}

#[derive(Parser, Debug)]
#[clap(
    name = "guess-simulate",
    version,
    about = "Play many number-guessing games and print a histogram of guess counts"
)]
struct Cli {
    #[clap(long, default_value_t = DEFAULT_LO, value_parser = parse_lo, allow_negative_numbers = true)]
    lo: i64,

    #[clap(long, default_value_t = DEFAULT_HI, value_parser = parse_hi, allow_negative_numbers = true)]
    hi: i64,

    #[clap(long, short = 'n', default_value_t = DEFAULT_REPEATS, value_parser = parse_repeats)]
    repeats: u64,

    #[clap(long, short, default_value_t = SearchMode::BinarySearch, help = "binary or random")]
    mode: SearchMode,

    #[clap(long, help = "RNG seed (falls back to GUESS_SEED, then a random seed)")]
    seed: Option<u64>,

    #[clap(long, help = "Longest bar in characters (falls back to GUESS_BAR_WIDTH, then 50)")]
    bar_width: Option<usize>,

    #[clap(long, help = "Print the statistics as JSON instead of the chart")]
    json: bool,

    #[clap(long, help = "Play one game per target in the range instead of random targets")]
    sweep: bool,

    #[clap(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let seed = resolve_seed(cli.seed).unwrap_or_else(rand::random);
    let bar_width = cli.bar_width.unwrap_or_else(env_bar_width);

    let t0 = Instant::now();
    let stats = if cli.sweep {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut stats = sweep_all_targets(cli.lo, cli.hi, cli.mode, SWEEP_LIMIT, &mut rng)
            .context("sweep failed")?;
        stats.seed = Some(seed);
        stats
    } else {
        simulate_batch(cli.lo, cli.hi, cli.mode, cli.repeats, seed).context("simulation failed")?
    };
    let elapsed = t0.elapsed();
    info!(
        "{} games in {:.1} ms ({:.0} games/sec)",
        stats.num_runs,
        elapsed.as_secs_f64() * 1000.0,
        stats.num_runs as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );

    if cli.json {
        println!("{}", stats.to_json()?);
    } else {
        print!("{}", render_summary(&stats));
        println!();
        print!("{}", render_histogram(&stats, bar_width));
    }
    Ok(())
}
