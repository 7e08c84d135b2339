//! Core domain types for tic-tac-toe.

use super::action::BoardParseError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// One of the two symbols a player occupies a cell with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// The computer. Moves first and maximizes the search score.
    X,
    /// The human player. Minimizes the search score.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns true for the side that maximizes the search score.
    pub fn is_maximizing(self) -> bool {
        self == Mark::X
    }

    fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Serializes as the compact notation produced by its `Display` impl,
/// e.g. `"XO./.X./..O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the empty positions in increasing index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Counts the squares occupied by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// Returns the mark whose turn it is under normal alternation.
    ///
    /// X moves first, so equal counts mean X is next.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&(pos + 1).to_string()),
                    Square::Occupied(mark) => result.push(mark.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "/")?;
            }
            match square {
                Square::Empty => write!(f, ".")?,
                Square::Occupied(mark) => write!(f, "{}", mark.symbol())?,
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells: `X`/`x`, `O`/`o`, and `.`, `-` or `_` for empty.
    /// Whitespace, `|` and `/` are separators and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;

        for c in s.chars() {
            if c.is_whitespace() || c == '|' || c == '/' {
                continue;
            }
            let square = match c {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' => Square::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
            if count < 9 {
                board.squares[count] = square;
            }
            count += 1;
        }

        if count != 9 {
            return Err(BoardParseError::WrongCellCount(count));
        }
        Ok(board)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

impl TryFrom<String> for Board {
    type Error = BoardParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
