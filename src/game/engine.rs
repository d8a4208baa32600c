//! The rules engine: validated moves over an owned game state.
//!
//! The engine is an explicit, passed-around value owned by whatever
//! drives the event loop. It holds the board, the move history, and the
//! latest evaluated result; the player to move is always derived from
//! the board, never stored.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use super::rules;
use super::types::{Board, GameResult, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A tic-tac-toe game in progress or finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
    result: GameResult,
}

impl Game {
    /// Creates a new game with an empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            result: GameResult::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the latest evaluated result.
    pub fn result(&self) -> &GameResult {
        &self.result
    }

    /// Returns true while the game accepts moves.
    pub fn is_active(&self) -> bool {
        !self.result.is_terminal()
    }

    /// The player whose turn it is, derived from the move count.
    pub fn player_to_move(&self) -> Player {
        self.board.player_to_move()
    }

    /// Places the current player's mark at the given position.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameNotActive`] if the game already reached a
    ///   terminal result; no state changes occur.
    /// - [`MoveError::CellOccupied`] if the square is taken; no state
    ///   changes occur.
    #[instrument(skip(self), fields(player = %self.player_to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<&GameResult, MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameNotActive);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let player = self.player_to_move();
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        self.result = rules::evaluate(&self.board);

        debug!(position = %pos, result = %self.result, "Move accepted");

        #[cfg(debug_assertions)]
        if let Err(violations) = GameInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(MoveError::InvariantViolation(descriptions));
        }

        Ok(&self.result)
    }

    /// Resets to the empty in-progress state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Replays a sequence of positions from a fresh game.
    ///
    /// Stops at the first terminal result; trailing positions are an
    /// error because the game no longer accepts moves.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &pos in positions {
            game.play(pos)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Triple;

    #[test]
    fn test_new_game_is_active() {
        let game = Game::new();
        assert!(game.is_active());
        assert_eq!(game.player_to_move(), Player::X);
        assert_eq!(game.result(), &GameResult::InProgress);
    }

    #[test]
    fn test_occupied_cell_rejected_without_mutation() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        let before = game.clone();

        let err = game.play(Position::Center).unwrap_err();
        assert_eq!(err, MoveError::CellOccupied(Position::Center));
        assert_eq!(game, before);
    }

    #[test]
    fn test_terminal_game_rejects_moves() {
        // X: 0, 1, 2 wins the top row.
        let mut game = Game::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();

        assert!(!game.is_active());
        assert_eq!(
            game.play(Position::BottomRight),
            Err(MoveError::GameNotActive)
        );
    }

    #[test]
    fn test_win_reports_triple() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();

        assert_eq!(
            game.result(),
            &GameResult::Won {
                player: Player::X,
                triple: Triple::ALL[0],
            }
        );
    }

    #[test]
    fn test_turn_alternation_by_move_count() {
        let mut game = Game::new();
        let sequence = [
            Position::TopLeft,
            Position::TopCenter,
            Position::BottomLeft,
            Position::Center,
        ];
        for (n, pos) in sequence.iter().enumerate() {
            let expected = if n % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(game.player_to_move(), expected);
            game.play(*pos).unwrap();
        }
    }

    #[test]
    fn test_restart_clears_state() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        game.restart();
        assert!(game.history().is_empty());
        assert_eq!(game.board(), &Board::new());
    }
}
