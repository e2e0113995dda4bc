//! Application state and logic.

use super::input::{self, Action};
use crate::scheduler::{ComputerReady, ComputerScheduler};
use crossterm::event::KeyCode;
use noughts_core::{Mode, Position, Session, Turn};
use tracing::{debug, info};

/// Main application state.
pub struct App {
    session: Session,
    cursor: Position,
    scheduler: ComputerScheduler,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(mode: Mode, scheduler: ComputerScheduler) -> Self {
        Self {
            session: Session::new(mode),
            cursor: Position::Center,
            scheduler,
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line shown under the board.
    pub fn status_message(&self) -> String {
        if self.session.awaiting_computer() {
            "Computer is thinking...".to_string()
        } else if self.session.game().is_running() {
            self.session.status_message()
        } else {
            format!("{} Press 'r' to play again.", self.session.status_message())
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = input::action_for(key) else {
            return;
        };
        debug!(?action, "Handling key");

        match action {
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::MoveCursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Action::Restart => self.session.restart(),
            Action::ResetScores => self.session.reset_scores(),
            Action::ToggleMode => self.session.change_mode(self.session.mode().toggle()),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Plays the computer's reply once its delay has elapsed.
    pub fn on_computer_ready(&mut self, ready: ComputerReady) {
        let turn = self.session.play_computer_move(ready.round);
        self.follow(turn);
    }

    fn place(&mut self, pos: Position) {
        let turn = self.session.select_cell(pos);
        self.follow(turn);
    }

    fn follow(&mut self, turn: Turn) {
        if let Turn::ComputerToMove { round } = turn {
            debug!(round, "Scheduling computer reply");
            let _ = self.scheduler.schedule(round);
        }
    }
}
