//! Application state and input handling.
//!
//! `App` wraps the single authoritative [`GameEngine`] with UI-only state.
//! It never renders or touches the terminal; the event loop feeds it input
//! and acts on the returned [`Effect`].

use super::input::{digit_cell, move_cursor};
use super::ui::{self, Target};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictactoe_engine::{GameEngine, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

/// Panel receiving keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the history list.
    History,
}

/// Follow-up work the event loop performs after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Start the cosmetic timer that hides highlight `generation`.
    ScheduleHighlightExpiry(u64),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    history_cursor: usize,
    highlight_visible: bool,
    highlight_generation: u64,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application on a fresh board.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            history_cursor: 0,
            highlight_visible: false,
            highlight_generation: 0,
            status_message: "Click a square or press 1-9 to start.".to_string(),
            should_quit: false,
        }
    }

    /// The game engine (read-only).
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted row of the history list.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// Whether highlighted squares are currently emphasized.
    pub fn highlight_visible(&self) -> bool {
        self.highlight_visible
    }

    /// Last action feedback.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Effect {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
                Effect::None
            }
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                Effect::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.click_cell(self.cursor),
                Focus::History => self.select_history(self.history_cursor),
            },
            KeyCode::Char(c) => match digit_cell(c) {
                Some(position) => self.click_cell(position),
                None => Effect::None,
            },
            _ => {
                self.navigate(key);
                Effect::None
            }
        }
    }

    fn navigate(&mut self, key: KeyCode) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, key),
            Focus::History => match key {
                KeyCode::Up => self.history_cursor = self.history_cursor.saturating_sub(1),
                KeyCode::Down => {
                    let last = self.engine.history().len().saturating_sub(1);
                    self.history_cursor = (self.history_cursor + 1).min(last);
                }
                _ => {}
            },
        }
    }

    /// Handles a left click at terminal cell (`column`, `row`) on a frame of size `area`.
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16) -> Effect {
        match ui::hit_test(area, self, column, row) {
            Some(Target::Cell(position)) => {
                self.cursor = position;
                self.focus = Focus::Board;
                self.click_cell(position)
            }
            Some(Target::HistoryEntry(index)) => {
                self.focus = Focus::History;
                self.select_history(index)
            }
            None => Effect::None,
        }
    }

    /// Plays `position` through the engine.
    #[instrument(skip(self))]
    pub fn click_cell(&mut self, position: Position) -> Effect {
        let outcome = self.engine.apply_position(position);
        self.status_message = match outcome {
            MoveOutcome::Ignored { position } => format!("{} is already taken.", position),
            MoveOutcome::Won { mark, .. } => format!("{} wins! Click any square to play again.", mark),
            MoveOutcome::Drawn { .. } => "Draw! Click any square to play again.".to_string(),
            other => other.to_string(),
        };
        if !outcome.changed_state() {
            return Effect::None;
        }
        self.history_cursor = self.engine.history().len().saturating_sub(1);
        self.show_highlight()
    }

    /// Restores history entry `index`.
    #[instrument(skip(self))]
    pub fn select_history(&mut self, index: usize) -> Effect {
        match self.engine.select_history(index) {
            Ok(_) => {
                self.history_cursor = index;
                self.status_message = format!("Viewing move #{}. Play a square to branch from here.", index);
                self.show_highlight()
            }
            Err(e) => {
                warn!(error = %e, "History selection failed");
                Effect::None
            }
        }
    }

    /// Discards the game and shows a fresh board.
    pub fn new_game(&mut self) -> Effect {
        self.engine.new_game();
        self.history_cursor = 0;
        self.highlight_visible = false;
        self.highlight_generation += 1;
        self.status_message = "New game. X to move.".to_string();
        Effect::None
    }

    /// Hides the highlight if `generation` is still the latest one.
    pub fn highlight_expired(&mut self, generation: u64) {
        if generation == self.highlight_generation {
            self.highlight_visible = false;
        }
    }

    fn show_highlight(&mut self) -> Effect {
        self.highlight_visible = true;
        self.highlight_generation += 1;
        Effect::ScheduleHighlightExpiry(self.highlight_generation)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
