//! Keyboard mapping for cell selection.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps the digits `1`-`9` to cells, numbered left-to-right, top-to-bottom.
pub fn digit_position(c: char) -> Option<Position> {
    c.to_digit(10)
        .filter(|d| (1..=9).contains(d))
        .and_then(|d| Position::from_index(d as usize - 1))
}
