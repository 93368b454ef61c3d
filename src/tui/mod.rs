//! Terminal UI for tic-tac-toe replay.

mod app;
mod highlight;
mod input;
mod ui;

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use app::{App, Effect};
use highlight::{schedule_expiry, HighlightExpired};

/// Runs the interactive terminal UI until the user quits.
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe replay TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, config).await;

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
    info!("TUI exited");
    res
}

/// Draw, drain timer messages, handle one input event, repeat.
#[instrument(skip_all, fields(highlight_expiry_ms = *config.highlight_expiry_ms()))]
async fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &AppConfig) -> Result<()> {
    let (expiry_tx, mut expiry_rx) = mpsc::unbounded_channel();
    let mut app = App::new();

    loop {
        let area = terminal.draw(|f| ui::draw(f, &app))?.area;

        while let Ok(HighlightExpired(generation)) = expiry_rx.try_recv() {
            app.highlight_expired(generation);
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        let effect = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(area, mouse.column, mouse.row)
            }
            _ => Effect::None,
        };

        if let Effect::ScheduleHighlightExpiry(generation) = effect {
            if let Some(after) = config.highlight_expiry() {
                schedule_expiry(expiry_tx.clone(), generation, after);
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
