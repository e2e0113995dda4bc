//! Perfect-play move search.
//!
//! Exhaustive minimax over the remaining game tree, without pruning,
//! caching or depth limits. The full tree from an empty board is under
//! 550,000 nodes, so every call searches to the end of the game.
//!
//! Scores are from the searching player's point of view: +1 for a win,
//! -1 for a loss, 0 for a draw. Ties between equally good moves go to the
//! lowest board index, which makes the search deterministic.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The computer always plays O.
pub const COMPUTER: Player = Player::O;

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchReport {
    /// Player the search was run for.
    player: Player,
    /// Chosen move.
    position: Position,
    /// Minimax value of the chosen move for `player`.
    score: i8,
    /// Number of positions visited.
    nodes: u64,
}

/// Selects the computer's (O's) move.
///
/// Returns `None` when no square is empty.
pub fn select_move(board: &Board) -> Option<Position> {
    best_move(board, COMPUTER)
}

/// Selects the best move for `mover`.
pub fn best_move(board: &Board, mover: Player) -> Option<Position> {
    analyze(board, mover).map(|report| report.position)
}

/// Searches the full game tree below `board` on behalf of `mover`.
///
/// The caller's board is never modified; marks are placed and cleared on a
/// private copy.
#[instrument(skip(board), fields(empty = board.empty_count()))]
pub fn analyze(board: &Board, mover: Player) -> Option<SearchReport> {
    let mut search = Minimax::new(*board, mover);
    let mut best: Option<(Position, i8)> = None;

    for pos in Position::ALL {
        if !search.scratch.is_empty(pos) {
            continue;
        }
        search.scratch.place(pos, mover);
        let score = search.minimax(false);
        search.scratch.clear(pos);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    let (position, score) = best?;
    debug!(%position, score, nodes = search.nodes, "Search complete");
    Some(SearchReport {
        player: mover,
        position,
        score,
        nodes: search.nodes,
    })
}

struct Minimax {
    scratch: Board,
    maximizer: Player,
    nodes: u64,
}

impl Minimax {
    fn new(board: Board, maximizer: Player) -> Self {
        Self {
            scratch: board,
            maximizer,
            nodes: 0,
        }
    }

    fn terminal_score(&self) -> Option<i8> {
        match rules::evaluate(&self.scratch) {
            GameStatus::Won(player) if player == self.maximizer => Some(1),
            GameStatus::Won(_) => Some(-1),
            GameStatus::Draw => Some(0),
            GameStatus::InProgress => None,
        }
    }

    fn minimax(&mut self, maximizing: bool) -> i8 {
        self.nodes += 1;
        if let Some(score) = self.terminal_score() {
            return score;
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = if maximizing { i8::MIN } else { i8::MAX };

        for pos in Position::ALL {
            if !self.scratch.is_empty(pos) {
                continue;
            }
            self.scratch.place(pos, mover);
            let score = self.minimax(!maximizing);
            self.scratch.clear(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(select_move(&board), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        // O completes the left column before X can complete the middle one.
        let board: Board = ".XXOX.O..".parse().unwrap();
        let report = analyze(&board, Player::O).unwrap();
        assert_eq!(*report.position(), Position::TopLeft);
        assert_eq!(*report.score(), 1);
    }

    #[test]
    fn test_blocks_opponent() {
        let board: Board = "XX..O....".parse().unwrap();
        assert_eq!(select_move(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_corner_reply_to_center() {
        let board: Board = "....X....".parse().unwrap();
        let pos = select_move(&board).unwrap();
        assert!(pos.is_corner());
        assert_eq!(pos, Position::TopLeft);
    }

    #[test]
    fn test_board_unchanged_by_search() {
        let board: Board = "X...O...X".parse().unwrap();
        let copy = board;
        let _ = select_move(&board);
        assert_eq!(board, copy);
    }

    #[test]
    fn test_empty_board_is_a_draw_for_either_side() {
        let board = Board::new();
        let report = analyze(&board, Player::X).unwrap();
        assert_eq!(*report.score(), 0);
        assert_eq!(*report.player(), Player::X);
        assert!(*report.nodes() > 0);
    }

    #[test]
    fn test_search_for_x_wins_when_possible() {
        // X to move, X X . on top row; O threatens middle row too.
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(best_move(&board, Player::X), Some(Position::TopRight));
    }
}
