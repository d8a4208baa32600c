//! Stateless rendering and the terminal layout provider.
//!
//! The same cell rectangles feed both cell rendering and the geometry
//! calculator: [`TerminalLayout`] is rebuilt from the live terminal size
//! every frame, so the strike line always matches what is on screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, canvas::Canvas, canvas::Line as CanvasLine},
};

use super::app::App;
use crate::game::{Player, Position, Square};
use crate::geometry::{self, LayoutProvider, LineDescriptor, Point};
use strum::IntoEnumIterator;

/// Width of the rendered board in terminal cells.
pub const BOARD_WIDTH: u16 = 38;
/// Height of the rendered board in terminal cells.
pub const BOARD_HEIGHT: u16 = 11;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;

/// Minimum screen height: title, score bar, board, status block.
const MIN_HEIGHT: u16 = BOARD_HEIGHT + 5;

/// Live cell layout, rebuilt from the terminal size each frame.
///
/// Implements [`LayoutProvider`] so the geometry calculator can read the
/// rendered rectangles without touching the terminal itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalLayout {
    board: Rect,
    cells: [Rect; 9],
}

impl TerminalLayout {
    /// Computes the layout for the given board area.
    pub fn new(board: Rect) -> Self {
        Self {
            board,
            cells: cell_areas(board),
        }
    }

    /// The board container area.
    pub fn board(&self) -> Rect {
        self.board
    }

    /// The rendered area of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }
}

impl LayoutProvider for TerminalLayout {
    fn board_origin(&self) -> Point {
        Point::new(self.board.x as f64, self.board.y as f64)
    }

    fn cell_rect(&self, pos: Position) -> geometry::Rect {
        let rect = self.cells[pos.to_index()];
        geometry::Rect::new(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        )
    }
}

/// Centers the board within the available area.
pub fn board_area(area: Rect) -> Rect {
    center_rect(area, BOARD_WIDTH, BOARD_HEIGHT)
}

/// Splits a board area into the 9 cell rectangles, row-major.
pub fn cell_areas(board: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board);

    let mut cells = [Rect::default(); 9];
    for (row_idx, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
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
        for (col_idx, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row_idx * 3 + col_idx] = col_area;
        }
    }
    cells
}

/// Splits the full screen into title, score bar, board, and status.
fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),         // Title
            Constraint::Length(1),         // Score bar
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Status
        ])
        .split(area)
}

/// The board container area within the full screen area.
///
/// The event loop uses this to rebuild [`TerminalLayout`] from the same
/// split the renderer draws with.
pub fn screen_board_area(area: Rect) -> Rect {
    board_area(screen_chunks(area)[2])
}

/// Renders the whole screen.
///
/// Falls back to a resize prompt when the terminal cannot fit the
/// board; drawing the grid into a clipped area would index outside the
/// frame buffer.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.width < BOARD_WIDTH || area.height < MIN_HEIGHT {
        let prompt = Paragraph::new(format!(
            "Terminal too small: need {}x{}",
            BOARD_WIDTH, MIN_HEIGHT
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
        frame.render_widget(prompt, area);
        return;
    }

    let chunks = screen_chunks(area);

    let title = Paragraph::new("S T R I K E L I N E")
        .style(Style::default().fg(app.accent()).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let score = app.score();
    let score_bar = Paragraph::new(format!(
        "X wins {}   O wins {}   Draws {}",
        score.wins_x, score.wins_o, score.draws
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(score_bar, chunks[1]);

    let layout = TerminalLayout::new(board_area(chunks[2]));
    draw_board(frame, &layout, app);
    draw_separators(frame, layout.board());
    if let Some(line) = app.strike() {
        draw_strike(frame, layout.board(), line, app.accent());
    }

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn draw_board(frame: &mut Frame, layout: &TerminalLayout, app: &App) {
    for pos in Position::iter() {
        draw_cell(frame, layout.cell(pos), app, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if app.ripple() == Some(pos) {
        base_style.bg(Color::Yellow).fg(Color::Black)
    } else if app.game().is_active() && pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Blank first line vertically centers the mark in the 3-row cell.
    let paragraph = Paragraph::new(vec![Line::raw(""), Line::styled(symbol, style)])
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separators(frame: &mut Frame, board: Rect) {
    let sep_style = Style::default().fg(Color::DarkGray);

    for row in [CELL_HEIGHT, 2 * CELL_HEIGHT + 1] {
        let area = Rect::new(board.x, board.y + row, board.width, 1);
        let sep = Paragraph::new("─".repeat(board.width as usize)).style(sep_style);
        frame.render_widget(sep, area);
    }
    for col in [CELL_WIDTH, 2 * CELL_WIDTH + 1] {
        for y in 0..board.height {
            let area = Rect::new(board.x + col, board.y + y, 1, 1);
            frame.render_widget(Paragraph::new("│").style(sep_style), area);
        }
    }
}

/// Overlays the strike line on the board using the computed descriptor.
fn draw_strike(frame: &mut Frame, board: Rect, line: &LineDescriptor, color: Color) {
    let (start, end) = line.endpoints();
    let height = board.height as f64;

    let canvas = Canvas::default()
        .x_bounds([0.0, board.width as f64])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            // Canvas y-axis points up; board coordinates point down.
            ctx.draw(&CanvasLine {
                x1: start.x,
                y1: height - start.y,
                x2: end.x,
                y2: height - end.y,
                color,
            });
        });
    frame.render_widget(canvas, board);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::game::Triple;
    use ratatui::{Terminal, backend::TestBackend};

    fn test_app(dir: &tempfile::TempDir) -> App {
        App::new(&AppConfig {
            scores_path: dir.path().join("scores.json"),
            sound: false,
            log_file: dir.path().join("app.log"),
        })
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_tiny_terminal_shows_resize_prompt() {
        // A 20x6 screen cannot fit the board; drawing must not index
        // outside the frame buffer.
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        terminal.draw(|frame| draw(frame, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Terminal too"));
    }

    #[test]
    fn test_full_size_terminal_draws_board() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir);

        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("S T R I K E L I N E"));
        assert!(text.contains("X wins 0"));
    }

    #[test]
    fn test_cell_areas_cover_grid() {
        let board = Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT);
        let cells = cell_areas(board);

        assert_eq!(cells[0], Rect::new(0, 0, CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(cells[4], Rect::new(13, 4, CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(cells[8], Rect::new(26, 8, CELL_WIDTH, CELL_HEIGHT));
    }

    #[test]
    fn test_layout_provider_is_board_relative() {
        // Shifting the board on screen must not change the computed line.
        let at_origin = TerminalLayout::new(Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT));
        let shifted = TerminalLayout::new(Rect::new(20, 5, BOARD_WIDTH, BOARD_HEIGHT));

        let a = geometry::compute_line_from(&at_origin, Triple::ALL[0]).unwrap();
        let b = geometry::compute_line_from(&shifted, Triple::ALL[0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_strike_spans_board_width() {
        let layout = TerminalLayout::new(Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT));
        let line = geometry::compute_line_from(&layout, Triple::ALL[0]).unwrap();
        assert_eq!(line.length, BOARD_WIDTH as f64);
    }
}
