//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

use crate::config::AppConfig;
use crate::scheduler::{ComputerReady, ComputerScheduler};
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Run the interactive game until the user quits.
///
/// The caller is expected to route tracing output away from the terminal.
#[instrument(skip_all, fields(mode = %config.mode(), delay_ms = config.computer_delay_ms()))]
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (scheduler, mut ready_rx) = ComputerScheduler::new(config.computer_delay());
    let app = App::new(*config.mode(), scheduler);

    let res = run_app(&mut terminal, app, &mut ready_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    ready_rx: &mut mpsc::UnboundedReceiver<ComputerReady>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(ready) = ready_rx.try_recv() {
            app.on_computer_ready(ready);
        }

        if app.should_quit() {
            info!("Leaving game loop");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        tokio::task::yield_now().await;
    }
}
