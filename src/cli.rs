//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts_core::{Mode, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Perfect-play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Opponent mode (overrides config)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Pause before the computer replies, in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the optimal move for a position
    Suggest {
        /// Nine cells in reading order: X, O, or . for empty (e.g. "X...O....")
        board: String,

        /// Player to move
        #[arg(short, long, value_enum, default_value = "o")]
        player: PlayerArg,

        /// Print the search report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Opponent mode on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans
    #[value(name = "hvh")]
    HumanVsHuman,
    /// Human against the computer
    #[value(name = "hvc")]
    HumanVsComputer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::HumanVsHuman => Mode::HumanVsHuman,
            ModeArg::HumanVsComputer => Mode::HumanVsComputer,
        }
    }
}

/// Player on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::parse_from(["noughts", "play", "--mode", "hvc", "--delay-ms", "0"]);
        match cli.command {
            Command::Play { mode, delay_ms } => {
                assert_eq!(mode, Some(ModeArg::HumanVsComputer));
                assert_eq!(delay_ms, Some(0));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_parse_suggest() {
        let cli = Cli::parse_from(["noughts", "suggest", "X...O....", "--player", "x", "--json"]);
        match cli.command {
            Command::Suggest { board, player, json } => {
                assert_eq!(board, "X...O....");
                assert_eq!(player, PlayerArg::X);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
