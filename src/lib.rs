//! # Four in a Row
//!
//! Round-robin tournaments between automated four-in-a-row players.
//!
//! It provides:
//! - An immutable 6x7 [`Board`](crate::board::Board) with gravity and win detection
//! - The [`Player`](crate::player::Player) trait and two built-in strategies
//! - Single matches through [`Game`](crate::game::Game)
//! - Round-robin [`Tournament`](crate::tournament::Tournament)s producing ranked
//!   [`Standings`](crate::statistics::Standings)
//! - Head-to-head runs through [`simulate`](crate::simulation::simulate)
//!
//! Matches of a tournament run concurrently, each on its own thread. Their statistics are
//! merged by the calling thread only.
//!
//! # Usage Example
//!
//! ```no_run
//! use four_in_a_row::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Configuration::new().with_verbose(true);
//!     let mut tournament = Tournament::with_configuration(config);
//!
//!     tournament.add_player("random", random_player_factory(1))?;
//!     tournament.add_player("winning", winning_move_player_factory(2))?;
//!
//!     let standings = tournament.play(10)?;
//!     println!("{standings}");
//!     Ok(())
//! }
//! ```
//!
//! # Custom Players
//!
//! Anything implementing [`Player`](crate::player::Player) can be registered through a factory
//! closure:
//!
//! ```
//! use four_in_a_row::prelude::*;
//!
//! struct LeftMost(Field);
//!
//! impl Player for LeftMost {
//!     fn play(&mut self, board: &Board) -> Option<Move> {
//!         board.valid_moves().first().copied()
//!     }
//!
//!     fn field(&self) -> Field {
//!         self.0
//!     }
//! }
//!
//! let mut tournament = Tournament::new();
//! tournament
//!     .add_player("left", |field| -> Box<dyn Player> { Box::new(LeftMost(field)) })
//!     .unwrap();
//! ```
#![warn(missing_docs)]

pub use anyhow;
pub mod board;
pub mod configuration;
pub mod game;
pub mod logger;
pub mod player;
pub mod simulation;
pub mod statistics;
pub mod tournament;
mod tournament_scheduler;

/// Commonly used types and traits for quick access.
///
/// ```rust
/// use four_in_a_row::prelude::*;
/// ```
pub mod prelude {
    pub use crate::board::{Board, Field, Move, Outcome};
    pub use crate::configuration::Configuration;
    pub use crate::game::{shared, Game, SharedPlayer};
    pub use crate::player::{
        random_player_factory, winning_move_player_factory, Player, PlayerFactory,
        RandomPlayer, Strategy, WinningMovePlayer,
    };
    pub use crate::simulation::{simulate, SimulationSummary};
    pub use crate::statistics::Standings;
    pub use crate::tournament::Tournament;
}
