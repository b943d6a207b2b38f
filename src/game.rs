//! A single match between two players.

use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tracing::trace;

use crate::board::{Board, BoardError, Field, Move, Outcome};
use crate::player::Player;

/// A player that can be shared between several games.
///
/// Tournaments spawn the players of a pairing once and reuse them for every round, so rounds
/// running in parallel take turns on the same instance.
pub type SharedPlayer = Arc<Mutex<Box<dyn Player>>>;

/// Wrap a player so it can be handed to several [`Game`]s.
pub fn shared(player: Box<dyn Player>) -> SharedPlayer {
    Arc::new(Mutex::new(player))
}

/// Errors ending a game before an outcome is reached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The player chose a column that is not currently playable.
    #[error("illegal move {mv} from {field:?}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
        /// The field of the offending player.
        field: Field,
    },
    /// The player gave no move although valid moves exist.
    #[error("{field:?} gave no move")]
    NoMove {
        /// The field of the offending player.
        field: Field,
    },
    /// The board refused the move.
    #[error("apply move: {0}")]
    Board(#[from] BoardError),
}

/// Receives every intermediate board of a game, e.g. to print it.
pub trait BoardObserver {
    /// Called after each move with the resulting board.
    fn observe(&mut self, board: &Board);
}

impl<F: FnMut(&Board)> BoardObserver for F {
    fn observe(&mut self, board: &Board) {
        self(board)
    }
}

/// Two players facing each other on a fresh board. Player one always moves first.
#[derive(Clone)]
pub struct Game {
    player_one: SharedPlayer,
    player_two: SharedPlayer,
}

impl Game {
    /// Create a game where `player_one` moves first.
    pub fn new(player_one: SharedPlayer, player_two: SharedPlayer) -> Self {
        Game {
            player_one,
            player_two,
        }
    }

    /// Play until a player wins or the board is full.
    pub fn play(&self) -> Result<Outcome, GameError> {
        self.play_observed(&mut |_: &Board| {})
    }

    /// Same as [`play`](Self::play), handing every new board to `observer`.
    ///
    /// # Errors
    /// Any misbehaviour of a player ends the game with a [`GameError`]; nothing is retried.
    pub fn play_observed(&self, observer: &mut dyn BoardObserver) -> Result<Outcome, GameError> {
        let mut board = Board::new();
        let mut player_two_to_move = true;
        loop {
            player_two_to_move = !player_two_to_move;
            let active = if player_two_to_move {
                &self.player_two
            } else {
                &self.player_one
            };

            let (mv, field) = {
                // a panic in another game only fails that game
                let mut player = active.lock().unwrap_or_else(PoisonError::into_inner);
                let field = player.field();
                (player.play(&board).ok_or(GameError::NoMove { field })?, field)
            };
            if !board.valid_moves().contains(&mv) {
                return Err(GameError::IllegalMove { mv, field });
            }

            let (next, outcome) = board.play(mv, field)?;
            board = next;
            trace!(%mv, ?field, ?outcome);
            observer.observe(&board);

            if outcome.is_decided() {
                return Ok(outcome);
            }
        }
    }
}
