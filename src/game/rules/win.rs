//! Win detection over the 8 fixed triples.

use super::super::triple::Triple;
use super::super::types::{Board, GameResult, Square};
use tracing::instrument;

/// Evaluates the board to a fresh [`GameResult`].
///
/// Scans the triples in [`Triple::ALL`] order (rows, then columns, then
/// diagonals); the FIRST triple with three equal non-empty squares wins.
/// Multiple simultaneously satisfied triples only arise on crafted
/// boards, never in real play, since the game halts at the first win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameResult {
    for triple in Triple::ALL {
        let [a, b, c] = triple.cells();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return GameResult::Won { player, triple };
            }
        }
    }

    if super::is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
