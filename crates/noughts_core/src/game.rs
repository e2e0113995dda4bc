//! Turn controller for a single round of tic-tac-toe.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules::{self, WinLine};
use crate::types::{Board, GameStatus, Player};
use tracing::{debug, instrument};

/// One round of tic-tac-toe: board, turn and outcome.
///
/// A won or drawn game accepts no further moves, so the board can never
/// hold complete lines for both players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    winning_line: Option<WinLine>,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Meaningless once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while moves are accepted.
    pub fn is_running(&self) -> bool {
        !self.status.is_over()
    }

    /// The completed line of a won game.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Applies a move and re-evaluates the board.
    ///
    /// # Errors
    ///
    /// Rejects moves after the game ended, out of turn, or onto an occupied
    /// square. A rejected move leaves the game unchanged.
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn apply_move(&mut self, action: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }

        self.board.place(action.position, action.player);
        self.history.push(action);

        self.status = rules::evaluate(&self.board);
        match self.status {
            GameStatus::Won(_) => {
                self.winning_line = rules::winning_line(&self.board).map(|(_, line)| line);
            }
            GameStatus::Draw => {}
            GameStatus::InProgress => self.to_move = self.to_move.opponent(),
        }

        debug!(status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Places a mark for the player to move.
    pub fn place(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        self.apply_move(Move::new(self.to_move, position))
    }

    /// Replays moves from an empty board.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for action in moves {
            game.apply_move(*action)?;
        }
        Ok(game)
    }

    /// Resets to an empty board with X to move.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
