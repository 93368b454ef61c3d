//! Stateless UI rendering.
//!
//! Everything drawn is derived from `&App`. [`layout`] is shared by drawing
//! and mouse hit testing so both agree on where things are.

use super::app::{App, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictactoe_engine::{BoardState, Position, Square};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Something a mouse click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A square of the live board.
    Cell(Position),
    /// A row of the history list.
    HistoryEntry(usize),
}

/// Screen regions for a frame of a given size.
#[derive(Debug, Clone, Copy)]
pub struct Regions {
    /// Title bar.
    pub title: Rect,
    /// Bordered board panel.
    pub board: Rect,
    /// Squares in index order.
    pub cells: [Rect; 9],
    /// Row separators between the three board rows.
    pub row_separators: [Rect; 2],
    /// Bordered history panel.
    pub history: Rect,
    /// Inside of the history panel, one entry per row.
    pub history_list: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

/// Computes every region for a frame of size `area`.
pub fn layout(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(13),    // Board + history
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let board = body[0];
    let grid = center_rect(panel().inner(board), BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(grid);

    let mut cells = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = cell;
        }
    }

    let history = body[1];
    Regions {
        title: chunks[0],
        board,
        cells,
        row_separators: [rows[1], rows[3]],
        history,
        history_list: panel().inner(history),
        status: chunks[2],
        help: chunks[3],
    }
}

/// Inside of the history panel for a frame of size `area`.
pub fn history_rows(area: Rect) -> Rect {
    layout(area).history_list
}

/// Finds what lies under terminal cell (`column`, `row`).
pub fn hit_test(area: Rect, app: &App, column: u16, row: u16) -> Option<Target> {
    let regions = layout(area);
    let point = ScreenPosition::new(column, row);

    if let Some(index) = regions.cells.iter().position(|cell| cell.contains(point)) {
        return Position::from_index(index).map(Target::Cell);
    }

    if regions.history_list.contains(point) {
        let index = usize::from(row - regions.history_list.y);
        if index < app.engine().history().len() {
            return Some(Target::HistoryEntry(index));
        }
    }

    None
}

/// Draws the whole UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = layout(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe Replay")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, regions.title);

    draw_board(frame, &regions, app);
    draw_history(frame, &regions, app);

    let state = app.engine().state();
    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            state.status_line(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(app.status_message(), Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, regions.status);

    let help = Paragraph::new("1-9/click: play | Arrows+Enter: cursor | Tab: history | N: new game | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, regions.help);
}

fn draw_board(frame: &mut Frame, regions: &Regions, app: &App) {
    let board_focused = app.focus() == Focus::Board;
    frame.render_widget(
        panel().title("Board").border_style(focus_style(board_focused)),
        regions.board,
    );

    let state = app.engine().state();
    for pos in Position::ALL {
        let highlighted = app.highlight_visible() && state.highlight().contains(pos);
        let cursor = board_focused && pos == app.cursor();
        draw_cell(frame, regions.cells[pos.to_index()], state, pos, highlighted, cursor);
    }

    for sep in regions.row_separators {
        let line = Paragraph::new("─".repeat(sep.width as usize)).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, sep);
    }
    for row in [0, 3, 6] {
        for col in [0, 1] {
            let cell = regions.cells[row + col];
            let sep = Rect::new(cell.x + cell.width, cell.y, 1, cell.height);
            let bar = Paragraph::new(vec![Line::from("│"); cell.height as usize])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(bar, sep);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, state: &BoardState, pos: Position, highlighted: bool, cursor: bool) {
    let (symbol, base_style) = match state.board().get(pos) {
        Square::Empty => ((pos.to_index() + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(mark) => (
            mark.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        base_style
    };
    let style = if cursor { style.add_modifier(Modifier::REVERSED) } else { style };

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(Span::styled(format!(" {} ", symbol), style))])
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, regions: &Regions, app: &App) {
    let history_focused = app.focus() == Focus::History;
    let engine = app.engine();
    let title = if engine.is_at_latest() {
        "Game history"
    } else {
        "Game history (viewing a past move)"
    };
    frame.render_widget(
        panel().title(title).border_style(focus_style(history_focused)),
        regions.history,
    );

    let current = engine.state().move_number();
    let lines: Vec<Line> = if engine.history().is_empty() {
        vec![Line::styled("No moves yet", Style::default().fg(Color::DarkGray))]
    } else {
        engine
            .history()
            .iter()
            .enumerate()
            .map(|(i, snapshot)| {
                let marker = if current == Some(i) { "▶ " } else { "  " };
                let style = if history_focused && app.history_cursor() == i {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else if current == Some(i) {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                Line::styled(
                    format!("{}#{:<2} {}  {}", marker, i, snapshot.board().compact(), snapshot.status_line()),
                    style,
                )
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), regions.history_list);
}

fn panel() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_cells_are_disjoint_and_inside_board() {
        let area = Rect::new(0, 0, 100, 30);
        let regions = layout(area);
        for (i, a) in regions.cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            assert!(regions.board.contains(ScreenPosition::new(a.x, a.y)));
            for b in &regions.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_test_maps_cells() {
        let area = Rect::new(0, 0, 100, 30);
        let regions = layout(area);
        let app = App::new();
        for pos in Position::ALL {
            let cell = regions.cells[pos.to_index()];
            assert_eq!(
                hit_test(area, &app, cell.x + CELL_WIDTH - 1, cell.y + 1),
                Some(Target::Cell(pos))
            );
        }
        assert_eq!(hit_test(area, &app, regions.title.x, regions.title.y), None);
    }

    #[test]
    fn test_draw_renders_board_and_history() {
        let mut app = App::new();
        for key in ['1', '2', '4', '5', '7'] {
            app.handle_key(KeyCode::Char(key));
        }
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Game history"));
        assert!(text.contains("#4  XO.|XO.|X.."));
    }
}
