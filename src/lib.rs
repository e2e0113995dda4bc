//! Noughts - perfect-play tic-tac-toe in the terminal.
//!
//! The game logic lives in [`noughts_core`]; this crate adds configuration,
//! the delayed computer reply and the ratatui front end.
//!
//! # Example
//!
//! ```no_run
//! use noughts::{AppConfig, run_tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load_or_default("noughts.toml")?;
//! run_tui(&config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod scheduler;
mod tui;

pub use config::{AppConfig, ConfigError};
pub use scheduler::{ComputerReady, ComputerScheduler};
pub use tui::run_tui;
