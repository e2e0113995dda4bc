//! Running win tally.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Wins per player. Lives for the session; restarts leave it alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
}

impl Scores {
    /// Creates a zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Adds one win for `player`.
    pub fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x = self.x.saturating_add(1),
            Player::O => self.o = self.o.saturating_add(1),
        }
    }

    /// Zeroes both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let mut scores = Scores::new();
        scores.record_win(Player::X);
        scores.record_win(Player::X);
        scores.record_win(Player::O);
        assert_eq!(scores.get(Player::X), 2);
        assert_eq!(scores.get(Player::O), 1);

        scores.reset();
        assert_eq!(scores, Scores::new());
    }
}
