use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use four_in_a_row::logger::init_console_logger;
use four_in_a_row::prelude::*;

/// Play a round-robin league between built-in players.
#[derive(Parser, Debug)]
#[command(name = "league", version, about, long_about = None)]
struct Cli {
    /// Number of rounds; every pair meets twice per round
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    rounds: u64,

    /// Number of random players
    #[arg(long, default_value_t = 2)]
    random: usize,

    /// Number of players taking immediate wins
    #[arg(long, default_value_t = 2)]
    winning: usize,

    /// Base seed of the players (overrides FIAR_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of matches running at once, 0 for no limit (overrides FIAR_MAX_PARALLEL)
    #[arg(long)]
    max_parallel: Option<usize>,

    /// Print every finished match
    #[arg(short, long)]
    verbose: bool,

    /// Write a full trace to a time-stamped log file instead of stderr
    #[arg(long)]
    log: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Configuration::from_env();
    if cli.verbose {
        config = config.with_verbose(true);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(Some(seed));
    }
    if let Some(max_parallel) = cli.max_parallel {
        config = config.with_max_parallel_matches(max_parallel);
    }

    if cli.log {
        config = config.with_log(true);
    }
    // with logging enabled the tournament installs the file logger itself
    if !config.log() {
        init_console_logger(config.verbose()).context("setting up console logging")?;
    }

    let seed = config.seed_or_random();
    // may install the file logger
    let mut tournament = Tournament::with_configuration(config);
    info!(seed, "building roster");
    let roster = (0..cli.random)
        .map(|i| (format!("random-{}", i + 1), Strategy::Random))
        .chain((0..cli.winning).map(|i| (format!("winning-{}", i + 1), Strategy::Winning)));
    for (i, (name, strategy)) in roster.enumerate() {
        tournament
            .add_player(name, strategy.factory(seed.wrapping_add(i as u64)))
            .context("registering players")?;
    }

    let rounds = usize::try_from(cli.rounds).context("too many rounds")?;
    let standings = tournament.play(rounds).context("playing the league")?;
    println!("{standings}");
    Ok(())
}
