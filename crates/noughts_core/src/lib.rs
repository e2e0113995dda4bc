//! Tic-tac-toe game logic with a perfect-play opponent.
//!
//! # Architecture
//!
//! - **Types**: board, squares, players and positions
//! - **Rules**: win lines and board evaluation
//! - **Search**: exhaustive minimax for the computer's move
//! - **Game**: turn controller for one round
//! - **Session**: scores and opponent mode across rounds
//!
//! # Example
//!
//! ```
//! use noughts_core::{Mode, Position, Session, Turn};
//!
//! let mut session = Session::new(Mode::HumanVsComputer);
//! if let Turn::ComputerToMove { round } = session.select_cell(Position::Center) {
//!     session.play_computer_move(round);
//! }
//! assert_eq!(session.game().history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod mode;
mod position;
pub mod rules;
mod scores;
pub mod search;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use mode::Mode;
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, evaluate};
pub use scores::Scores;
pub use search::{SearchReport, analyze, best_move, select_move};
pub use session::{Session, Snapshot, Turn};
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
