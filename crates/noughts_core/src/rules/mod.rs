//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the game and the search engine share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, check_winner, winning_line};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board.
///
/// The first complete line in [`WIN_LINES`] order decides the winner;
/// otherwise a full board is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((player, _)) = winning_line(board) {
        GameStatus::Won(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
