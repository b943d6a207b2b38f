//! Round-robin tournaments between registered players.
//!
//! Every registered player meets every other one twice per round, once as player one and once
//! as player two, to cancel the advantage of moving first. For `N` players a round is made of
//! `N * (N - 1)` matches.
//!
//! # Implementation Notes
//!
//! Players are spawned from their factories once, when the schedule is built, and the same
//! instances are reused for every round of their pairing. Matches run concurrently (see
//! [`Configuration::max_parallel_matches`]). Each match sends its two statistics deltas back to
//! the thread that called [`Tournament::play`], which is the only writer of the standings.
//!
//! A match that fails (illegal move, missing move, panic) is logged and left out of the
//! statistics of both players. It is only visible through [`Standings::failed_matches`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};

use crate::board::{Field, Outcome};
use crate::configuration::Configuration;
use crate::game::{shared, Game, GameError, SharedPlayer};
use crate::logger::init_logger;
use crate::player::{Player, PlayerFactory};
use crate::statistics::{match_deltas, PlayerStatistics, Standings};
use crate::tournament_scheduler::run_matches;

/// Errors preventing a tournament from being set up or started.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TournamentError {
    /// The name is empty or only whitespace.
    #[error("empty name for player is not allowed")]
    BlankName,
    /// A player with the same name is already registered.
    #[error("a player with name='{0}' was added before")]
    DuplicateName(String),
    /// Fewer than two players are registered.
    #[error("unable to play a tournament with less than two players ({0} registered)")]
    InsufficientPlayers(usize),
}

/// Two spawned players meeting each other, with the names they were registered under.
pub struct Pairing {
    /// Moves first, with `Field::PlayerOne`.
    pub player_one: SharedPlayer,
    /// Registered name of `player_one`.
    pub player_one_name: String,
    /// Moves second, with `Field::PlayerTwo`.
    pub player_two: SharedPlayer,
    /// Registered name of `player_two`.
    pub player_two_name: String,
}

impl Pairing {
    fn new(
        player_one_name: &str,
        player_one: SharedPlayer,
        player_two_name: &str,
        player_two: SharedPlayer,
    ) -> Self {
        Pairing {
            player_one,
            player_one_name: player_one_name.to_owned(),
            player_two,
            player_two_name: player_two_name.to_owned(),
        }
    }

    /// A new game between the two players of this pairing.
    pub fn game(&self) -> Game {
        Game::new(self.player_one.clone(), self.player_two.clone())
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} VS {}]", self.player_one_name, self.player_two_name)
    }
}

impl fmt::Debug for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pairing")
            .field("player_one_name", &self.player_one_name)
            .field("player_two_name", &self.player_two_name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
struct MatchSettings {
    round: usize,
    pairing: Arc<Pairing>,
}

impl fmt::Display for MatchSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {} {}", self.round, self.pairing)
    }
}

struct MatchReport {
    settings: MatchSettings,
    result: Result<(Outcome, [PlayerStatistics; 2]), GameError>,
}

/// A set of named players, each created through its [`PlayerFactory`].
pub struct Tournament {
    players: BTreeMap<String, PlayerFactory>,
    config: Configuration,
}

impl Tournament {
    /// Create an empty tournament with the default [`Configuration`].
    pub fn new() -> Self {
        Self::with_configuration(Configuration::new())
    }

    /// Create an empty tournament. Installs the file logger if `config` asks for it.
    pub fn with_configuration(config: Configuration) -> Self {
        if config.log {
            if let Err(e) = init_logger() {
                warn!("file logging disabled: {e:#}");
            }
        }
        debug!(?config);
        Tournament {
            players: BTreeMap::new(),
            config,
        }
    }

    /// Register a player under `name`.
    ///
    /// # Errors
    /// Fails if `name` is blank or already registered.
    pub fn add_player<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), TournamentError>
    where
        F: FnMut(Field) -> Box<dyn Player> + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TournamentError::BlankName);
        }
        if self.players.contains_key(&name) {
            return Err(TournamentError::DuplicateName(name));
        }
        self.players.insert(name, Box::new(factory));
        Ok(())
    }

    /// Number of registered players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True if no player is registered.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Registered names, in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.keys().map(String::as_str)
    }

    /// Spawn the players of every match of a round: each unordered pair of names twice, with
    /// swapped seats.
    pub fn pair_up(&mut self) -> Vec<Pairing> {
        fn spawn(factory: &mut PlayerFactory, field: Field) -> SharedPlayer {
            shared(factory(field))
        }

        let names: Vec<String> = self.players.keys().cloned().collect();
        let mut factories: Vec<&mut PlayerFactory> = self.players.values_mut().collect();
        let mut pairings = Vec::with_capacity(names.len() * names.len().saturating_sub(1));
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                let (head, tail) = factories.split_at_mut(j);
                let (left, right) = (&mut head[i], &mut tail[0]);
                pairings.push(Pairing::new(
                    &names[i],
                    spawn(left, Field::PlayerOne),
                    &names[j],
                    spawn(right, Field::PlayerTwo),
                ));
                pairings.push(Pairing::new(
                    &names[j],
                    spawn(right, Field::PlayerOne),
                    &names[i],
                    spawn(left, Field::PlayerTwo),
                ));
            }
        }
        pairings
    }

    /// Play `rounds` rounds and rank the players.
    ///
    /// # Errors
    /// Fails if fewer than two players are registered. Failing matches do not make the
    /// tournament fail.
    #[instrument(skip(self))]
    pub fn play(&mut self, rounds: usize) -> Result<Standings, TournamentError> {
        if self.players.len() < 2 {
            return Err(TournamentError::InsufficientPlayers(self.players.len()));
        }

        let pairings: Vec<Arc<Pairing>> = self.pair_up().into_iter().map(Arc::new).collect();
        let matches: Vec<MatchSettings> = (1..=rounds)
            .flat_map(|round| {
                pairings.iter().map(move |pairing| MatchSettings {
                    round,
                    pairing: Arc::clone(pairing),
                })
            })
            .collect();
        info!(
            players = self.players.len(),
            pairings = pairings.len(),
            matches = matches.len(),
            "starting tournament"
        );

        let mut stats: BTreeMap<String, PlayerStatistics> = self
            .players
            .keys()
            .map(|name| (name.clone(), PlayerStatistics::new(name.as_str())))
            .collect();
        let mut failed_matches = 0;
        let verbose = self.config.verbose;

        run_matches(
            matches,
            self.config.max_parallel_matches,
            run_match,
            |report| {
                let Some(report) = report else {
                    failed_matches += 1;
                    return;
                };
                if verbose {
                    print_match_report(&report);
                }
                match report.result {
                    Ok((_, deltas)) => {
                        for delta in deltas {
                            match stats.get_mut(&delta.name) {
                                Some(total) => total.apply(&delta),
                                None => warn!("no stats found for {}", delta.name),
                            }
                        }
                    }
                    Err(_) => failed_matches += 1,
                }
            },
        );

        info!(failed_matches, "tournament finished");
        Ok(Standings::new(stats.into_values().collect(), failed_matches))
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

fn run_match(settings: MatchSettings) -> MatchReport {
    let result = settings.pairing.game().play();
    let result = match result {
        Ok(outcome) => {
            debug!("{settings}: {outcome}");
            let pairing = &settings.pairing;
            let deltas = match_deltas(&pairing.player_one_name, &pairing.player_two_name, outcome);
            Ok((outcome, deltas))
        }
        Err(e) => {
            error!("{settings} failed: {e}");
            Err(e)
        }
    };
    MatchReport { settings, result }
}

fn print_match_report(report: &MatchReport) {
    // green match, default outcome, red errors
    match &report.result {
        Ok((outcome, _)) => println!("\x1b[32m{}: \x1b[39m{outcome}", report.settings),
        Err(e) => println!("\x1b[32m{}: \x1b[31m{e}\x1b[39m", report.settings),
    }
}
