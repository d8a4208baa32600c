//! Terminal user interface: event loop and rendering.

mod app;
mod input;
mod ui;

pub use app::App;
pub use ui::TerminalLayout;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{error, info};

use crate::config::AppConfig;

/// Poll interval: also the resolution of cue scheduling.
const TICK: Duration = Duration::from_millis(50);

/// Runs the game until the user quits.
pub fn run(config: AppConfig) -> Result<()> {
    info!("Starting Strikeline TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_loop<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Refresh the live layout before handling input, so a winning
        // move reads the same rectangles the user is looking at.
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        app.update_layout(TerminalLayout::new(ui::screen_board_area(area)));

        app.tick(Instant::now());
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
