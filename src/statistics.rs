//! Per-player running totals and the final ranking of a tournament.
//!
//! Points follow common soccer rules: [`WIN_POINTS`] for a win, [`TIE_POINTS`] for a tie and
//! nothing for a loss.

use std::{cmp::Reverse, fmt};

use crate::board::Outcome;

/// Points awarded for a win.
pub const WIN_POINTS: u32 = 3;
/// Points awarded to both players of a tied game.
pub const TIE_POINTS: u32 = 1;

/// Totals of one player over a tournament, also used as the delta of a single match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStatistics {
    /// Registered name of the player.
    pub name: String,
    /// Number of games played.
    pub played: u32,
    /// Number of games won.
    pub won: u32,
    /// Number of games lost.
    pub lost: u32,
    /// Number of games tied.
    pub tied: u32,
    /// Accumulated points.
    pub points: u32,
}

impl PlayerStatistics {
    /// Zeroed statistics for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        PlayerStatistics {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add the counters of `delta` to `self`.
    pub fn apply(&mut self, delta: &PlayerStatistics) {
        self.played += delta.played;
        self.won += delta.won;
        self.lost += delta.lost;
        self.tied += delta.tied;
        self.points += delta.points;
    }

    /// Sort key: points, then wins, then ties.
    fn rank_key(&self) -> (u32, u32, u32) {
        (self.points, self.won, self.tied)
    }
}

/// The two deltas produced by a finished game, player one first.
///
/// An `Undecided` outcome only counts as played.
pub fn match_deltas(
    player_one: &str,
    player_two: &str,
    outcome: Outcome,
) -> [PlayerStatistics; 2] {
    let mut one = PlayerStatistics::new(player_one);
    let mut two = PlayerStatistics::new(player_two);
    one.played = 1;
    two.played = 1;
    match outcome {
        Outcome::PlayerOneWins => {
            one.won = 1;
            one.points = WIN_POINTS;
            two.lost = 1;
        }
        Outcome::PlayerTwoWins => {
            one.lost = 1;
            two.won = 1;
            two.points = WIN_POINTS;
        }
        Outcome::Tie => {
            for stats in [&mut one, &mut two] {
                stats.tied = 1;
                stats.points = TIE_POINTS;
            }
        }
        Outcome::Undecided => {}
    }
    [one, two]
}

/// Final, ranked statistics of a tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    ranking: Vec<PlayerStatistics>,
    failed_matches: usize,
}

impl Standings {
    /// Rank `stats` by points, wins and ties, all descending.
    ///
    /// The sort is stable: players equal on every key keep their input order.
    pub fn new(mut stats: Vec<PlayerStatistics>, failed_matches: usize) -> Self {
        stats.sort_by_key(|s| Reverse(s.rank_key()));
        Standings {
            ranking: stats,
            failed_matches,
        }
    }

    /// Statistics in ranking order, best first.
    pub fn ranking(&self) -> &[PlayerStatistics] {
        &self.ranking
    }

    /// Statistics paired with their 1-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &PlayerStatistics)> {
        self.ranking.iter().enumerate().map(|(i, s)| (i + 1, s))
    }

    /// Statistics of the player called `name`.
    pub fn get(&self, name: &str) -> Option<&PlayerStatistics> {
        self.ranking.iter().find(|s| s.name == name)
    }

    /// Matches dropped because of an error. They do not appear in any statistics.
    pub fn failed_matches(&self) -> usize {
        self.failed_matches
    }
}

impl fmt::Display for Standings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .ranking
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(16);
        let sep8 = "-".repeat(8);
        let sep_name = "-".repeat(name_width);

        writeln!(
            f,
            "{:>8}  {:<name_width$}  {:>8}  {:>8}  {:>8}  {:>8}  {:>8}",
            "Rank", "Player", "Points", "Games", "Won", "Lost", "Tied"
        )?;
        writeln!(
            f,
            "{sep8:>8}  {sep_name:<name_width$}  {sep8:>8}  {sep8:>8}  {sep8:>8}  {sep8:>8}  {sep8:>8}"
        )?;
        for (rank, s) in self.ranked() {
            writeln!(
                f,
                "{rank:>8}  {:<name_width$}  {:>8}  {:>8}  {:>8}  {:>8}  {:>8}",
                s.name, s.points, s.played, s.won, s.lost, s.tied
            )?;
        }
        if self.failed_matches > 0 {
            writeln!(f, "({} failed matches not counted)", self.failed_matches)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(name: &str, won: u32, lost: u32, tied: u32) -> PlayerStatistics {
        PlayerStatistics {
            name: name.to_owned(),
            played: won + lost + tied,
            won,
            lost,
            tied,
            points: WIN_POINTS * won + TIE_POINTS * tied,
        }
    }

    #[test]
    fn deltas_for_each_outcome() {
        let [one, two] = match_deltas("a", "b", Outcome::PlayerOneWins);
        assert_eq!(one, stats("a", 1, 0, 0));
        assert_eq!(two, stats("b", 0, 1, 0));

        let [one, two] = match_deltas("a", "b", Outcome::PlayerTwoWins);
        assert_eq!(one, stats("a", 0, 1, 0));
        assert_eq!(two, stats("b", 1, 0, 0));

        let [one, two] = match_deltas("a", "b", Outcome::Tie);
        assert_eq!(one, stats("a", 0, 0, 1));
        assert_eq!(two, stats("b", 0, 0, 1));

        let [one, two] = match_deltas("a", "b", Outcome::Undecided);
        assert_eq!((one.played, one.won, one.lost, one.tied, one.points), (1, 0, 0, 0, 0));
        assert_eq!(two.played, 1);
    }

    #[test]
    fn apply_accumulates() {
        let mut total = PlayerStatistics::new("a");
        for outcome in [Outcome::PlayerOneWins, Outcome::Tie, Outcome::PlayerTwoWins] {
            let [delta, _] = match_deltas("a", "b", outcome);
            total.apply(&delta);
        }
        assert_eq!(total, stats("a", 1, 1, 1));
    }

    #[test]
    fn ranking_order() {
        let standings = Standings::new(
            vec![
                stats("loser", 0, 4, 0),
                stats("winner", 1, 3, 0),
                stats("tier", 0, 1, 3),
                stats("leader", 2, 0, 0),
            ],
            0,
        );
        let names: Vec<_> = standings.ranking().iter().map(|s| s.name.as_str()).collect();
        // winner and tier both have 3 points
        assert_eq!(names, ["leader", "winner", "tier", "loser"]);
    }

    #[test]
    fn ties_break_equal_points_and_wins() {
        let raw = |name: &str, points, won, tied| PlayerStatistics {
            name: name.to_owned(),
            points,
            won,
            tied,
            ..Default::default()
        };
        let standings = Standings::new(
            vec![raw("few", 4, 1, 0), raw("many", 4, 1, 1), raw("first", 4, 1, 0)],
            0,
        );
        let names: Vec<_> = standings.ranking().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["many", "few", "first"]);
    }

    #[test]
    fn ranks_are_one_based() {
        let standings = Standings::new(vec![stats("a", 0, 1, 0), stats("b", 1, 0, 0)], 0);
        let ranks: Vec<_> = standings.ranked().map(|(r, s)| (r, s.name.clone())).collect();
        assert_eq!(ranks, [(1, "b".to_owned()), (2, "a".to_owned())]);
        assert_eq!(standings.get("a").map(|s| s.lost), Some(1));
        assert!(standings.get("c").is_none());
    }

    #[test]
    fn display_table() {
        let standings = Standings::new(vec![stats("Randy", 2, 1, 1)], 2);
        let text = standings.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert!(lines[0].contains("Rank") && lines[0].contains("Tied"));
        assert!(lines[1].starts_with("--------"));
        assert!(lines[2].trim_start().starts_with("1  Randy"));
        assert!(lines[2].trim_end().ends_with('1'));
        assert!(lines[3].contains("2 failed matches"));
    }
}
