//! Opponent selection.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Who plays O.
///
/// Defaults to [`Mode::HumanVsHuman`], two players sharing the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two humans take turns.
    #[default]
    #[strum(to_string = "Human vs Human")]
    HumanVsHuman,
    /// The human plays X, the computer answers as O.
    #[strum(to_string = "Human vs Computer")]
    HumanVsComputer,
}

impl Mode {
    /// True when O is played by the search engine.
    pub fn has_computer(self) -> bool {
        matches!(self, Mode::HumanVsComputer)
    }

    /// Switches to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsComputer,
            Mode::HumanVsComputer => Mode::HumanVsHuman,
        }
    }
}
