//! Automated players.
//!
//! A [`Player`] looks at a [`Board`] and picks a [`Move`] for the [`Field`] it was spawned with.
//! Tournaments do not create players directly: they are given a [`PlayerFactory`] per
//! registered name and spawn one instance per field and pairing.
//!
//! Built-in strategies:
//! - [`RandomPlayer`]: uniformly random valid move.
//! - [`WinningMovePlayer`]: plays an immediate win when there is one, random otherwise.
//!
//! Both own their random generator, seeded explicitly at construction. Use
//! [`random_player_factory`] and [`winning_move_player_factory`] to get reproducible factories.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::board::{Board, Field, Move};

mod random_player;
mod winning_move_player;

pub use random_player::RandomPlayer;
pub use winning_move_player::WinningMovePlayer;

/// What a player must implement to take part in a game.
pub trait Player: Send {
    /// Pick a move for `board`.
    ///
    /// Returns `None` only when `board` has no valid move left.
    fn play(&mut self, board: &Board) -> Option<Move>;

    /// The field this player places on the board.
    fn field(&self) -> Field;
}

/// Spawns a ready-to-play player for the given field.
///
/// Called by the tournament while it builds its schedule, never during matches.
pub type PlayerFactory = Box<dyn FnMut(Field) -> Box<dyn Player>>;

/// Factory of [`RandomPlayer`]s. Every spawned player gets its own seed derived from `seed`.
pub fn random_player_factory(seed: u64) -> impl FnMut(Field) -> Box<dyn Player> {
    let mut seeds = StdRng::seed_from_u64(seed);
    move |field| -> Box<dyn Player> { Box::new(RandomPlayer::new(field, seeds.random())) }
}

/// Factory of [`WinningMovePlayer`]s. Every spawned player gets its own seed derived from `seed`.
pub fn winning_move_player_factory(seed: u64) -> impl FnMut(Field) -> Box<dyn Player> {
    let mut seeds = StdRng::seed_from_u64(seed);
    move |field| -> Box<dyn Player> {
        Box::new(WinningMovePlayer::new(field, seeds.random()))
    }
}

/// Built-in strategies, selectable by name from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// [`RandomPlayer`]
    Random,
    /// [`WinningMovePlayer`]
    Winning,
}

impl Strategy {
    /// A factory of players of this strategy.
    pub fn factory(self, seed: u64) -> PlayerFactory {
        match self {
            Strategy::Random => Box::new(random_player_factory(seed)),
            Strategy::Winning => Box::new(winning_move_player_factory(seed)),
        }
    }
}
