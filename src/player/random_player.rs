use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use super::Player;
use crate::board::{Board, Field, Move};

/// A player picking a valid move uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    field: Field,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a random player for `field`, with its generator seeded by `seed`.
    pub fn new(field: Field, seed: u64) -> Self {
        RandomPlayer {
            field,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform pick among `candidates`. Shared with [`WinningMovePlayer`](super::WinningMovePlayer).
    pub(super) fn pick(rng: &mut StdRng, candidates: &[Move]) -> Option<Move> {
        match candidates {
            [] => None,
            [only] => Some(*only),
            _ => candidates.choose(rng).copied(),
        }
    }
}

impl Player for RandomPlayer {
    fn play(&mut self, board: &Board) -> Option<Move> {
        Self::pick(&mut self.rng, &board.valid_moves())
    }

    fn field(&self) -> Field {
        self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{COLS, ROWS};

    #[test]
    fn plays_valid_moves() {
        let mut player = RandomPlayer::new(Field::PlayerOne, 42);
        let board = Board::new().play(Move(2), Field::PlayerTwo).unwrap().0;
        let valid = board.valid_moves();
        for _ in 0..100 {
            let mv = player.play(&board).unwrap();
            assert!(valid.contains(&mv), "{mv} is not valid");
        }
    }

    #[test]
    fn visits_every_column() {
        let mut player = RandomPlayer::new(Field::PlayerTwo, 3);
        let mut seen = [false; COLS];
        for _ in 0..500 {
            seen[player.play(&Board::new()).unwrap().column()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn single_and_no_candidates() {
        let mut player = RandomPlayer::new(Field::PlayerOne, 0);

        let mut board = Board::new();
        for col in 1..COLS {
            for row in 0..ROWS {
                let field = if (row + col) % 2 == 0 { Field::PlayerOne } else { Field::PlayerTwo };
                board = board.play(Move(col), field).unwrap().0;
            }
        }
        // the loop above may have produced a win, only column 0 matters here
        assert_eq!(board.valid_moves(), vec![Move(0)]);
        assert_eq!(player.play(&board), Some(Move(0)));

        for row in 0..ROWS {
            let field = if row % 2 == 0 { Field::PlayerOne } else { Field::PlayerTwo };
            board = board.play(Move(0), field).unwrap().0;
        }
        assert_eq!(player.play(&board), None);
    }

    #[test]
    fn same_seed_same_moves() {
        let mut a = RandomPlayer::new(Field::PlayerOne, 99);
        let mut b = RandomPlayer::new(Field::PlayerOne, 99);
        let board = Board::new();
        for _ in 0..20 {
            assert_eq!(a.play(&board), b.play(&board));
        }
    }
}
