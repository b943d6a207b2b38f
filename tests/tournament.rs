use four_in_a_row::prelude::*;
use four_in_a_row::statistics::{TIE_POINTS, WIN_POINTS};
use four_in_a_row::tournament::TournamentError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn init_test_logger() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_ansi(true)
        .without_time()
        .with_test_writer()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn league(random: usize, winning: usize, config: Configuration) -> Tournament {
    let mut tournament = Tournament::with_configuration(config);
    for i in 0..random {
        tournament
            .add_player(format!("random-{i}"), random_player_factory(100 + i as u64))
            .unwrap();
    }
    for i in 0..winning {
        tournament
            .add_player(
                format!("winning-{i}"),
                winning_move_player_factory(200 + i as u64),
            )
            .unwrap();
    }
    tournament
}

#[test]
fn built_in_league() {
    init_test_logger();
    let config = Configuration::new().with_max_parallel_matches(4);
    let mut tournament = league(2, 2, config);
    let rounds = 5;

    let standings = tournament.play(rounds).unwrap();
    let players = 4;
    let games_per_player = (2 * (players - 1) * rounds) as u32;

    assert_eq!(standings.failed_matches(), 0);
    assert_eq!(standings.ranking().len(), players);
    for stats in standings.ranking() {
        assert_eq!(stats.played, games_per_player);
        assert_eq!(stats.played, stats.won + stats.lost + stats.tied);
        assert_eq!(stats.points, WIN_POINTS * stats.won + TIE_POINTS * stats.tied);
    }

    let won: u32 = standings.ranking().iter().map(|s| s.won).sum();
    let lost: u32 = standings.ranking().iter().map(|s| s.lost).sum();
    let tied: u32 = standings.ranking().iter().map(|s| s.tied).sum();
    assert_eq!(won, lost);
    assert_eq!(tied % 2, 0);
    assert_eq!((won + tied / 2) as usize, players * (players - 1) * rounds);

    for pair in standings.ranking().windows(2) {
        assert!(pair[0].points >= pair[1].points);
    }
}

#[test]
fn standings_table_lists_everyone() {
    init_test_logger();
    let mut tournament = league(1, 1, Configuration::new());
    let standings = tournament.play(2).unwrap();

    let table = standings.to_string();
    assert!(table.contains("Rank"));
    assert!(table.contains("random-0"));
    assert!(table.contains("winning-0"));
    assert_eq!(standings.ranked().next().unwrap().0, 1);
}

#[test]
fn registration_is_checked_before_playing() {
    let mut tournament = Tournament::new();
    assert_eq!(
        tournament.play(1).unwrap_err(),
        TournamentError::InsufficientPlayers(0)
    );
    tournament.add_player("solo", random_player_factory(0)).unwrap();
    assert_eq!(
        tournament.add_player("solo", random_player_factory(1)),
        Err(TournamentError::DuplicateName("solo".into()))
    );
    assert_eq!(
        tournament.play(1).unwrap_err(),
        TournamentError::InsufficientPlayers(1)
    );
}

#[test]
fn custom_players_take_part() {
    struct LeftMost(Field);

    impl Player for LeftMost {
        fn play(&mut self, board: &Board) -> Option<Move> {
            board.valid_moves().first().copied()
        }

        fn field(&self) -> Field {
            self.0
        }
    }

    init_test_logger();
    let mut tournament = Tournament::with_configuration(Configuration::new());
    tournament
        .add_player("left-a", |field| -> Box<dyn Player> { Box::new(LeftMost(field)) })
        .unwrap();
    tournament
        .add_player("left-b", |field| -> Box<dyn Player> { Box::new(LeftMost(field)) })
        .unwrap();

    // both always stack the leftmost column: player one completes it first
    let standings = tournament.play(3).unwrap();
    for stats in standings.ranking() {
        assert_eq!(stats.won, 3);
        assert_eq!(stats.lost, 3);
        assert_eq!(stats.points, 3 * WIN_POINTS);
    }
}
