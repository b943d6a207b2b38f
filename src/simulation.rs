//! Head-to-head simulation: the same two players over many games.

use std::fmt;

use tracing::{error, info, instrument};

use crate::board::Outcome;
use crate::configuration::Configuration;
use crate::game::{Game, GameError, SharedPlayer};
use crate::tournament_scheduler::run_matches;

/// Outcome counts of a simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationSummary {
    /// Games won by the first player.
    pub player_one_wins: usize,
    /// Games won by the second player.
    pub player_two_wins: usize,
    /// Tied games.
    pub ties: usize,
    /// Games ending without a decision.
    pub undecided: usize,
    /// Games aborted by an error.
    pub failed: usize,
}

impl SimulationSummary {
    /// Number of games counted, failed ones included.
    pub fn total(&self) -> usize {
        self.player_one_wins + self.player_two_wins + self.ties + self.undecided + self.failed
    }

    fn record(&mut self, result: Option<Result<Outcome, GameError>>) {
        match result {
            Some(Ok(Outcome::PlayerOneWins)) => self.player_one_wins += 1,
            Some(Ok(Outcome::PlayerTwoWins)) => self.player_two_wins += 1,
            Some(Ok(Outcome::Tie)) => self.ties += 1,
            Some(Ok(Outcome::Undecided)) => self.undecided += 1,
            Some(Err(_)) | None => self.failed += 1,
        }
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player One Wins: {:>8}", self.player_one_wins)?;
        writeln!(f, "Player Two Wins: {:>8}", self.player_two_wins)?;
        writeln!(f, "Ties:            {:>8}", self.ties)?;
        write!(f, "Undecided:       {:>8}", self.undecided)?;
        if self.failed > 0 {
            write!(f, "\nFailed:          {:>8}", self.failed)?;
        }
        Ok(())
    }
}

/// Play `games` games between `player_one` (moving first) and `player_two`.
///
/// Games run concurrently and share the two player instances.
#[instrument(skip_all, fields(games = games))]
pub fn simulate(
    player_one: SharedPlayer,
    player_two: SharedPlayer,
    games: usize,
    config: &Configuration,
) -> SimulationSummary {
    let game = Game::new(player_one, player_two);
    let mut summary = SimulationSummary::default();
    run_matches(
        vec![game; games],
        config.max_parallel_matches,
        |game: Game| {
            let result = game.play();
            if let Err(e) = &result {
                error!("play duel: {e}");
            }
            result
        },
        |result| summary.record(result),
    );
    info!(?summary);
    summary
}
