//! Draw detection.

use super::super::types::{Board, Square};

/// Checks if every square on the board is occupied.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|&s| s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(is_full(&board));
    }
}
