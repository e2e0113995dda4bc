//! Session state: the current game, the score tally and the opponent mode.
//!
//! This is the boundary a front end talks to. Inputs the front end should
//! not have sent (occupied squares, moves after the game ended, clicks
//! while the computer is due to reply) are dropped without touching state.

use crate::action::Move;
use crate::game::Game;
use crate::mode::Mode;
use crate::position::Position;
use crate::rules::WinLine;
use crate::scores::Scores;
use crate::search::{self, COMPUTER};
use crate::types::{Board, GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What the front end should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Input was dropped; nothing changed.
    Ignored,
    /// A human moves next.
    Human(Player),
    /// Schedule the computer's reply for this round.
    ComputerToMove {
        /// Round the reply belongs to.
        round: u64,
    },
    /// The game ended with this status.
    Over(GameStatus),
}

/// Everything a front end renders after a state change.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    status: GameStatus,
    to_move: Player,
    message: String,
    scores: Scores,
    mode: Mode,
    winning_line: Option<WinLine>,
    awaiting_computer: bool,
}

/// A play session: one game at a time, scores across games.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    scores: Scores,
    mode: Mode,
    round: u64,
    awaiting_computer: bool,
}

impl Session {
    /// Creates a session with zero scores.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(%mode, "Starting session");
        Self {
            game: Game::new(),
            scores: Scores::new(),
            mode,
            round: 0,
            awaiting_computer: false,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the score tally.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the opponent mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Identifies the current game; bumped by every restart.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// True between a human move and the computer's scheduled reply.
    pub fn awaiting_computer(&self) -> bool {
        self.awaiting_computer
    }

    /// Human input: place the mark of the player to move.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn select_cell(&mut self, position: Position) -> Turn {
        if self.awaiting_computer {
            debug!("Ignoring input while computer reply is pending");
            return Turn::Ignored;
        }

        let action = Move::new(self.game.to_move(), position);
        match self.game.apply_move(action) {
            Ok(status) => self.after_move(status),
            Err(e) => {
                debug!(error = %e, "Ignoring cell selection");
                Turn::Ignored
            }
        }
    }

    /// Plays the computer's reply scheduled for `round`.
    ///
    /// Replies for an earlier round, or arriving when none is pending, are
    /// dropped.
    #[instrument(skip(self), fields(current_round = self.round))]
    pub fn play_computer_move(&mut self, round: u64) -> Turn {
        if round != self.round || !self.awaiting_computer {
            debug!("Discarding stale computer reply");
            return Turn::Ignored;
        }
        self.awaiting_computer = false;

        let Some(report) = search::analyze(self.game.board(), COMPUTER) else {
            debug!("No empty square for computer");
            return Turn::Ignored;
        };
        debug!(
            position = %report.position(),
            score = report.score(),
            nodes = report.nodes(),
            "Computer chose move"
        );

        match self.game.apply_move(Move::new(COMPUTER, *report.position())) {
            Ok(status) => self.after_move(status),
            Err(e) => {
                debug!(error = %e, "Computer move rejected");
                Turn::Ignored
            }
        }
    }

    fn after_move(&mut self, status: GameStatus) -> Turn {
        match status {
            GameStatus::Won(player) => {
                self.scores.record_win(player);
                info!(
                    winner = %player,
                    x = self.scores.get(Player::X),
                    o = self.scores.get(Player::O),
                    "Game won"
                );
                Turn::Over(status)
            }
            GameStatus::Draw => {
                info!("Game drawn");
                Turn::Over(status)
            }
            GameStatus::InProgress => {
                let next = self.game.to_move();
                if self.mode.has_computer() && next == COMPUTER {
                    self.awaiting_computer = true;
                    Turn::ComputerToMove { round: self.round }
                } else {
                    Turn::Human(next)
                }
            }
        }
    }

    /// Starts a new game. Scores are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.restart();
        self.round += 1;
        self.awaiting_computer = false;
        info!(round = self.round, "Game restarted");
    }

    /// Zeroes both scores and starts a new game.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        info!("Scores reset");
        self.restart();
    }

    /// Switches opponent mode and starts a new game. Scores are kept.
    #[instrument(skip(self))]
    pub fn change_mode(&mut self, mode: Mode) {
        info!(from = %self.mode, to = %mode, "Changing mode");
        self.mode = mode;
        self.restart();
    }

    /// Status line for the current state.
    pub fn status_message(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.game.to_move()),
            GameStatus::Won(player) => format!("Player {} wins!", player),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    /// Captures what a front end renders.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.game.board(),
            status: self.game.status(),
            to_move: self.game.to_move(),
            message: self.status_message(),
            scores: self.scores,
            mode: self.mode,
            winning_line: self.game.winning_line(),
            awaiting_computer: self.awaiting_computer,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
