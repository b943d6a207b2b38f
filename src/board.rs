//! The four-in-a-row board.
//!
//! A [`Board`] is a plain value: [`Board::play`] never touches the board it is called on and
//! returns a fresh board together with the [`Outcome`] of the move. Boards can therefore be
//! shared freely between threads and kept around as a history of a game.
//!
//! Row `0` is the top of the board, row [`ROWS`]` - 1` the bottom. Pieces fall to the lowest
//! empty row of the chosen column.

use std::fmt;

use thiserror::Error;

/// Number of rows on the board.
pub const ROWS: usize = 6;
/// Number of columns on the board.
pub const COLS: usize = 7;
/// Number of aligned pieces required to win.
pub const GOAL: usize = 4;

/// Value of a single cell, also used as the identity of a player.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    /// Unplayed cell.
    #[default]
    Empty = 0,
    /// Cell taken by the first player.
    PlayerOne = 1,
    /// Cell taken by the second player.
    PlayerTwo = 2,
}

impl Field {
    /// The field of the other player. `Empty` stays `Empty`.
    pub fn opponent(self) -> Field {
        match self {
            Field::Empty => Field::Empty,
            Field::PlayerOne => Field::PlayerTwo,
            Field::PlayerTwo => Field::PlayerOne,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Field::Empty => '.',
            Field::PlayerOne => 'X',
            Field::PlayerTwo => 'O',
        };
        write!(f, "{c}")
    }
}

/// Classification of a board after a move.
///
/// `PlayerOneWins` and `PlayerTwoWins` share their discriminant with the matching [`Field`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The game goes on.
    Undecided = 0,
    /// The first player aligned [`GOAL`] pieces.
    PlayerOneWins = 1,
    /// The second player aligned [`GOAL`] pieces.
    PlayerTwoWins = 2,
    /// The board is full and nobody won.
    Tie = 3,
}

impl Outcome {
    /// The winning outcome for `field`. `Field::Empty` cannot win and maps to `Undecided`.
    pub fn win_for(field: Field) -> Outcome {
        match field {
            Field::Empty => Outcome::Undecided,
            Field::PlayerOne => Outcome::PlayerOneWins,
            Field::PlayerTwo => Outcome::PlayerTwoWins,
        }
    }

    /// The field of the winner, if any.
    pub fn winner(self) -> Option<Field> {
        match self {
            Outcome::PlayerOneWins => Some(Field::PlayerOne),
            Outcome::PlayerTwoWins => Some(Field::PlayerTwo),
            Outcome::Undecided | Outcome::Tie => None,
        }
    }

    /// True once the game is over.
    pub fn is_decided(self) -> bool {
        self != Outcome::Undecided
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Undecided => "undecided",
            Outcome::PlayerOneWins => "player one wins",
            Outcome::PlayerTwoWins => "player two wins",
            Outcome::Tie => "tie",
        };
        f.write_str(s)
    }
}

/// A column to drop a piece into, in `[0, COLS)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move(pub usize);

impl Move {
    /// The column index of this move.
    pub fn column(self) -> usize {
        self.0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised when applying a move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The column is out of range or has no empty cell left.
    #[error("invalid move: column {column} is out of range or full")]
    InvalidMove {
        /// The rejected column.
        column: usize,
    },
    /// `Field::Empty` was given as the piece to place.
    #[error("cannot place an empty field")]
    EmptyField,
}

// N, NE, E, SE, S, SW, W, NW as (row, column) steps
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// A grid of [`ROWS`] x [`COLS`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Field; COLS]; ROWS],
}

impl Board {
    /// Create a new board where every cell is `Empty`.
    pub fn new() -> Self {
        Board {
            cells: [[Field::Empty; COLS]; ROWS],
        }
    }

    /// Create a board from explicit rows, top row first.
    pub fn from_rows(cells: [[Field; COLS]; ROWS]) -> Self {
        Board { cells }
    }

    /// The cell at `(row, col)`, `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Field> {
        self.cells.get(row)?.get(col).copied()
    }

    /// All rows, top row first.
    pub fn rows(&self) -> &[[Field; COLS]; ROWS] {
        &self.cells
    }

    /// Columns whose top cell is still empty, in ascending order.
    pub fn valid_moves(&self) -> Vec<Move> {
        (0..COLS)
            .filter(|&col| self.cells[0][col] == Field::Empty)
            .map(Move)
            .collect()
    }

    /// True if `mv` is currently playable.
    pub fn is_valid(&self, mv: Move) -> bool {
        mv.0 < COLS && self.cells[0][mv.0] == Field::Empty
    }

    /// True when no cell is `Empty`.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&f| f != Field::Empty)
    }

    /// Drop a piece of `field` into the column of `mv`.
    ///
    /// Returns the resulting board and its outcome. `self` is left untouched.
    ///
    /// # Errors
    /// [`BoardError::InvalidMove`] if `mv` is not one of [`valid_moves`](Self::valid_moves),
    /// [`BoardError::EmptyField`] if `field` is `Empty`.
    pub fn play(&self, mv: Move, field: Field) -> Result<(Board, Outcome), BoardError> {
        if field == Field::Empty {
            return Err(BoardError::EmptyField);
        }
        if !self.is_valid(mv) {
            return Err(BoardError::InvalidMove { column: mv.0 });
        }
        let col = mv.0;
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Field::Empty)
            .ok_or(BoardError::InvalidMove { column: col })?;

        let mut next = *self;
        next.cells[row][col] = field;
        let outcome = next.outcome_at(row, col);
        Ok((next, outcome))
    }

    /// Outcome of the board, looking only at lines through `(row, col)`.
    fn outcome_at(&self, row: usize, col: usize) -> Outcome {
        let field = self.cells[row][col];
        let [n, ne, e, se, s, sw, w, nw] =
            DIRECTIONS.map(|step| self.run_length(row, col, step, field));

        // the origin is counted by both halves of each line
        let lines = [n + s - 1, w + e - 1, ne + sw - 1, se + nw - 1];
        if lines.iter().any(|&len| len >= GOAL) {
            Outcome::win_for(field)
        } else if self.is_full() {
            Outcome::Tie
        } else {
            Outcome::Undecided
        }
    }

    /// Number of consecutive `field` cells starting at `(row, col)` and walking by `step`.
    fn run_length(&self, row: usize, col: usize, step: (isize, isize), field: Field) -> usize {
        let (mut r, mut c) = (row as isize, col as isize);
        let mut count = 0;
        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[r as usize][c as usize] == field
        {
            count += 1;
            r += step.0;
            c += step.1;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            write!(f, "|")?;
            for field in row {
                write!(f, "{field}|")?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for col in 0..COLS {
            write!(f, "{col} ")?;
        }
        Ok(())
    }
}
