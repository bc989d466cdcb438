use anyhow::Result;
use clap::Parser;
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use guess_number::constants::{DEFAULT_HI, DEFAULT_LO};
use guess_number::env_config::{init_logging, resolve_seed};
use guess_number::search::{trace_guesses, trace_random_target};
use guess_number::types::parse_integer;
use guess_number::{GuessError, SearchMode};

fn parse_lo(s: &str) -> std::result::Result<i64, GuessError> {
    parse_integer("lo", s)
}

fn parse_hi(s: &str) -> std::result::Result<i64, GuessError> {
    parse_integer("hi", s)
}

fn parse_target(s: &str) -> std::result::Result<i64, GuessError> {
    parse_integer("target", s)
}

#[derive(Parser, Debug)]
#[clap(
    name = "guess-play",
    version,
    about = "Watch the Computer guess one hidden number"
)]
struct Cli {
    #[clap(long, default_value_t = DEFAULT_LO, value_parser = parse_lo, allow_negative_numbers = true)]
    lo: i64,

    #[clap(long, default_value_t = DEFAULT_HI, value_parser = parse_hi, allow_negative_numbers = true)]
    hi: i64,

    #[clap(long, short, value_parser = parse_target, allow_negative_numbers = true, help = "Hidden number (drawn at random when omitted)")]
    target: Option<i64>,

    #[clap(long, short, default_value_t = SearchMode::BinarySearch, help = "binary or random")]
    mode: SearchMode,

    #[clap(long, help = "RNG seed (falls back to GUESS_SEED, then a random seed)")]
    seed: Option<u64>,

    #[clap(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let seed = resolve_seed(cli.seed).unwrap_or_else(rand::random);
    let mut rng = SmallRng::seed_from_u64(seed);
    debug!("seed={seed}");

    let trace = match cli.target {
        Some(target) => trace_guesses(cli.lo, cli.hi, target, cli.mode, &mut rng)?,
        None => trace_random_target(cli.lo, cli.hi, cli.mode, &mut rng)?,
    };

    println!(
        "Hidden number in [{}, {}], {} mode (seed {})",
        cli.lo, cli.hi, cli.mode, seed
    );
    let width = trace.count().to_string().len();
    for (i, step) in trace.steps.iter().enumerate() {
        println!(
            "  #{:>width$}  {} in {}: {}",
            i + 1,
            step.guess,
            step.range,
            step.signal
        );
    }
    println!("Found {} in {} guesses", trace.target, trace.count());
    Ok(())
}
