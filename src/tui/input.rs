//! Key bindings.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place at a square chosen by number key.
    Place(Position),
    /// Place at the cursor.
    PlaceAtCursor,
    /// Move the cursor one square.
    MoveCursor(KeyCode),
    /// Start a new game.
    Restart,
    /// Zero the scores and start a new game.
    ResetScores,
    /// Switch between human and computer opponent.
    ToggleMode,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action, if bound.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c) if c.is_ascii_digit() => digit_position(c).map(Action::Place),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::ResetScores),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::ToggleMode),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Keys 1-9 address squares in reading order.
pub fn digit_position(c: char) -> Option<Position> {
    match c.to_digit(10)? {
        0 => None,
        d => Position::from_index(d as usize - 1),
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
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
