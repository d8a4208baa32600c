//! Application state and cue scheduling.

use std::time::Instant;

use crossterm::event::KeyCode;
use ratatui::style::Color;
use tracing::{info, instrument, warn};

use super::input;
use super::ui::TerminalLayout;
use crate::audio::SoundPlayer;
use crate::config::AppConfig;
use crate::effects::{self, Cue, RIPPLE_DURATION, TimedCue};
use crate::game::{Game, GameResult, Position};
use crate::geometry::{self, LineDescriptor};
use crate::score::{ScoreRecord, ScoreStore};

/// Accent colors cycled by hue-shift cues.
const ACCENTS: [Color; 6] = [
    Color::Cyan,
    Color::LightBlue,
    Color::Magenta,
    Color::LightMagenta,
    Color::LightGreen,
    Color::LightCyan,
];

/// The running application: game state, scores, and pending effects.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    score: ScoreRecord,
    store: ScoreStore,
    sound: Option<SoundPlayer>,
    layout: Option<TerminalLayout>,
    strike: Option<LineDescriptor>,
    ripple: Option<(Position, Instant)>,
    hue_index: usize,
    scheduled: Vec<(Instant, Cue)>,
    status: String,
    should_quit: bool,
}

impl App {
    /// Creates the app from resolved configuration.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        let store = ScoreStore::new(&config.scores_path);
        let score = store.load();
        let sound = if config.sound {
            SoundPlayer::new()
        } else {
            None
        };

        Self {
            game: Game::new(),
            cursor: Position::Center,
            score,
            store,
            sound,
            layout: None,
            strike: None,
            ripple: None,
            hue_index: 0,
            scheduled: Vec::new(),
            status: "X to move".to_string(),
            should_quit: false,
        }
    }

    /// The game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current score tallies.
    pub fn score(&self) -> &ScoreRecord {
        &self.score
    }

    /// The strike line to overlay, if a win has been struck.
    pub fn strike(&self) -> Option<&LineDescriptor> {
        self.strike.as_ref()
    }

    /// The cell currently rippling, if any.
    pub fn ripple(&self) -> Option<Position> {
        self.ripple.map(|(pos, _)| pos)
    }

    /// Current accent color.
    pub fn accent(&self) -> Color {
        ACCENTS[self.hue_index % ACCENTS.len()]
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True once the user has asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the most recently rendered layout so a win can read the
    /// live cell rectangles.
    pub fn update_layout(&mut self, layout: TerminalLayout) {
        self.layout = Some(layout);
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('r') => self.reset_scores(),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10)
                    && (1..=9).contains(&digit)
                    && let Some(pos) = Position::from_index(digit as usize - 1)
                {
                    self.place(pos);
                }
            }
            _ => {}
        }
    }

    /// Attempts a move at the given position and schedules the
    /// resulting cues.
    #[instrument(skip(self))]
    fn place(&mut self, pos: Position) {
        let player = self.game.player_to_move();

        match self.game.play(pos) {
            Ok(result) => {
                let result = *result;
                self.schedule(effects::placement(pos, player));
                self.on_result(result);
            }
            Err(err) => {
                info!(error = %err, "Move rejected");
                self.schedule(effects::rejection());
                self.status = err.to_string();
            }
        }
    }

    fn on_result(&mut self, result: GameResult) {
        match result {
            GameResult::InProgress => {
                self.status = format!("{} to move", self.game.player_to_move());
            }
            GameResult::Won { player, triple } => {
                self.status = format!("Player {} wins! (n: new game)", player);
                self.tally(&result);

                match self.layout {
                    Some(layout) => match geometry::compute_line_from(&layout, triple) {
                        Ok(line) => self.schedule(effects::victory(line)),
                        Err(err) => warn!(error = %err, "Failed to compute strike line"),
                    },
                    None => warn!("No layout rendered yet; skipping strike line"),
                }
            }
            GameResult::Draw => {
                self.status = "Draw! (n: new game)".to_string();
                self.tally(&result);
                self.schedule(effects::stalemate());
            }
        }
    }

    fn tally(&mut self, result: &GameResult) {
        self.score.record(result);
        if let Err(err) = self.store.save(&self.score) {
            warn!(error = %err, "Failed to save scores");
        }
    }

    /// Starts a new game, clearing the strike overlay and any cues that
    /// have not fired yet.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.game.restart();
        self.strike = None;
        self.ripple = None;
        self.scheduled.clear();
        self.status = "X to move".to_string();
    }

    /// Resets score tallies to zero and persists the reset.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.score.reset();
        if let Err(err) = self.store.save(&self.score) {
            warn!(error = %err, "Failed to save scores");
        }
        self.status = "Scores reset".to_string();
    }

    /// Converts cue delays to absolute deadlines.
    fn schedule(&mut self, cues: Vec<TimedCue>) {
        let now = Instant::now();
        self.scheduled
            .extend(cues.into_iter().map(|c| (now + c.delay, c.cue)));
    }

    /// Fires all cues whose deadline has passed and expires the ripple.
    ///
    /// Dropping or reordering cues cannot affect game state: the engine
    /// and calculator finished synchronously before anything was
    /// scheduled.
    pub fn tick(&mut self, now: Instant) {
        let mut due = Vec::new();
        self.scheduled.retain(|(deadline, cue)| {
            if *deadline <= now {
                due.push(cue.clone());
                false
            } else {
                true
            }
        });

        for cue in due {
            self.fire(cue, now);
        }

        if let Some((_, expiry)) = self.ripple
            && expiry <= now
        {
            self.ripple = None;
        }
    }

    fn fire(&mut self, cue: Cue, now: Instant) {
        match cue {
            Cue::Strike(line) => self.strike = Some(line),
            Cue::Tone(spec) => {
                if let Some(sound) = &self.sound {
                    sound.play(spec);
                }
            }
            Cue::Ripple(pos) => self.ripple = Some((pos, now + RIPPLE_DURATION)),
            Cue::HueShift(_) => self.hue_index += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ui;
    use ratatui::layout::Rect;

    fn test_app(dir: &tempfile::TempDir) -> App {
        let config = AppConfig {
            scores_path: dir.path().join("scores.json"),
            sound: false,
            log_file: dir.path().join("app.log"),
        };
        let mut app = App::new(&config);
        app.update_layout(TerminalLayout::new(Rect::new(
            0,
            0,
            ui::BOARD_WIDTH,
            ui::BOARD_HEIGHT,
        )));
        app
    }

    #[test]
    fn test_digit_keys_place_marks() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().board().filled_count(), 1);
        assert!(!app.game().board().is_empty(Position::Center));
    }

    #[test]
    fn test_win_schedules_and_fires_strike() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        // X takes the top row.
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert!(!app.game().is_active());

        app.tick(Instant::now());
        assert!(app.strike().is_some());
        assert_eq!(app.score().wins_x, 1);
    }

    #[test]
    fn test_rejected_move_leaves_board_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().board().filled_count(), 1);
    }

    #[test]
    fn test_new_game_clears_strike() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);

        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.tick(Instant::now());
        assert!(app.strike().is_some());

        app.new_game();
        assert!(app.strike().is_none());
        assert!(app.game().is_active());
    }

    #[test]
    fn test_quit_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
