//! Strikeline - terminal tic-tac-toe for two players.
//!
//! # Architecture
//!
//! - **Rules engine** ([`game`]): board state, move validation, and
//!   win/draw detection over the 8 fixed winning triples.
//! - **Line geometry calculator** ([`geometry`]): maps a winning triple
//!   plus live rendered cell rectangles to a strike-line descriptor.
//! - **Presentation shell** ([`tui`], [`audio`], [`score`],
//!   [`effects`]): renders the board, schedules timed cue sequences,
//!   synthesizes tones, and persists score tallies.
//!
//! The engine and calculator are pure and synchronous; all timing lives
//! in cue sequences executed by the shell.
//!
//! # Example
//!
//! ```
//! use strikeline::game::{Game, GameResult, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::Center)?;
//! assert_eq!(game.result(), &GameResult::InProgress);
//! # Ok::<(), strikeline::game::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod effects;
pub mod game;
pub mod geometry;
pub mod score;
pub mod tui;

pub use config::AppConfig;
pub use game::{Board, Game, GameResult, Move, MoveError, Player, Position, Square, Triple};
pub use geometry::{LayoutProvider, LineDescriptor, Orientation, compute_line, compute_line_from};
pub use score::{ScoreRecord, ScoreStore};
