use anyhow::{Context, Result};
use clap::Parser;

use four_in_a_row::logger::init_console_logger;
use four_in_a_row::prelude::*;

/// Pit two built-in players against each other, the first one always moving first.
#[derive(Parser, Debug)]
#[command(name = "simulation", version, about, long_about = None)]
struct Cli {
    /// Number of games; a single game is rendered move by move
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    rounds: u64,

    /// Strategy of player one
    #[arg(long, value_enum, default_value_t = Strategy::Winning)]
    one: Strategy,

    /// Strategy of player two
    #[arg(long, value_enum, default_value_t = Strategy::Random)]
    two: Strategy,

    /// Base seed of the players (overrides FIAR_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Debug output on stderr
    #[arg(short, long)]
    verbose: bool,
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
    init_console_logger(config.verbose()).context("setting up console logging")?;

    let seed = config.seed_or_random();
    let mut one = cli.one.factory(seed);
    let mut two = cli.two.factory(seed.wrapping_add(1));
    let player_one = shared(one(Field::PlayerOne));
    let player_two = shared(two(Field::PlayerTwo));

    if cli.rounds == 1 {
        let game = Game::new(player_one, player_two);
        let outcome = game
            .play_observed(&mut |board: &Board| println!("{board}\n"))
            .context("playing the game")?;
        println!("{outcome}");
    } else {
        let games = usize::try_from(cli.rounds).context("too many rounds")?;
        let summary = simulate(player_one, player_two, games, &config);
        println!("{summary}");
    }
    Ok(())
}
